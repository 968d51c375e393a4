// Rust Countdown Application
// Main entry point

use std::env;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use rust_countdown::services::countdown::{self, SurfaceRegistry};
use rust_countdown::ui::TerminalSurface;
use rust_countdown::utils::date::add_months;

const SURFACE_ID: &str = "countdown";
const DEFAULT_MONTHS_AHEAD: i32 = 6;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let target = resolve_target(env::args().nth(1).as_deref(), Local::now())?;
    log::info!("Counting down to {target}");

    let registry = SurfaceRegistry::new();
    registry.register(SURFACE_ID, TerminalSurface::shared());

    let handle = countdown::start(target, SURFACE_ID, &registry);

    while handle.is_active() {
        thread::sleep(Duration::from_millis(200));
    }

    println!();
    Ok(())
}

/// Resolve the target from the first CLI argument: `+N` (or plain `N`)
/// counts calendar months ahead of now, anything else must be a literal
/// local `YYYY-MM-DDTHH:MM:SS`. With no argument the countdown runs to
/// six months from now.
fn resolve_target(arg: Option<&str>, now: DateTime<Local>) -> Result<DateTime<Local>> {
    let Some(arg) = arg else {
        return Ok(add_months(now, DEFAULT_MONTHS_AHEAD));
    };

    if let Ok(months) = arg.trim_start_matches('+').parse::<i32>() {
        if months < 0 {
            bail!("months ahead must be non-negative, got {months}");
        }
        return Ok(add_months(now, months));
    }

    let naive = NaiveDateTime::parse_from_str(arg, "%Y-%m-%dT%H:%M:%S").with_context(|| {
        format!("unrecognized target '{arg}'; expected +N months or YYYY-MM-DDTHH:MM:SS")
    })?;

    naive
        .and_local_timezone(Local)
        .single()
        .with_context(|| format!("target '{arg}' is not an unambiguous local time"))
}
