//! Countdown driver.
//!
//! Owns the tick routine: read the clock, decompose the remaining time,
//! write the slot texts, and shut the schedule down once the target is
//! reached.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};

use super::decompose::decompose;
use super::models::SlotKind;
use super::scheduler::{schedule_repeating, ScheduleHandle, TickFlow};
use super::surface::{ensure_slots, DisplaySurface, SharedSurface, SurfaceRegistry};

/// Wall-clock period between ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Cancellation handle returned by [`start`].
///
/// Inert once the countdown reaches its target on its own; stopping an
/// inert handle is a no-op, as is stopping twice.
pub struct StopHandle {
    schedule: Option<ScheduleHandle>,
}

impl StopHandle {
    fn noop() -> Self {
        Self { schedule: None }
    }

    /// Cancel the repeating schedule if it is still active.
    pub fn stop(&self) {
        if let Some(schedule) = &self.schedule {
            schedule.cancel();
        }
    }

    /// True while ticks are still being scheduled.
    pub fn is_active(&self) -> bool {
        self.schedule.as_ref().is_some_and(ScheduleHandle::is_active)
    }
}

/// Start a countdown towards `target` on the surface registered under
/// `surface_id`, rendering once immediately and then every second.
///
/// An unknown `surface_id` is not an error: a warning is logged and the
/// returned handle is a no-op.
pub fn start(
    target: DateTime<Local>,
    surface_id: &str,
    registry: &SurfaceRegistry,
) -> StopHandle {
    let Some(surface) = registry.get(surface_id) else {
        log::warn!("countdown: display surface not found: {surface_id}");
        return StopHandle::noop();
    };

    {
        let mut surface = lock_surface(&surface);
        ensure_slots(&mut *surface);
    }

    log::debug!("countdown: starting towards {target}");

    if render_tick(&surface, target) == TickFlow::Stop {
        // Already past the target: the slots are zeroed and no timer is
        // armed at all.
        return StopHandle::noop();
    }

    let tick_surface = Arc::clone(&surface);
    let schedule = schedule_repeating(TICK_PERIOD, move || render_tick(&tick_surface, target));

    StopHandle {
        schedule: Some(schedule),
    }
}

/// One tick against the wall clock.
fn render_tick(surface: &SharedSurface, target: DateTime<Local>) -> TickFlow {
    let mut surface = lock_surface(surface);
    render_tick_at(&mut *surface, target, Local::now())
}

/// One tick at an explicit `now` — the seam tests and embedders with
/// their own scheduling drive directly.
pub fn render_tick_at(
    surface: &mut dyn DisplaySurface,
    target: DateTime<Local>,
    now: DateTime<Local>,
) -> TickFlow {
    if target <= now {
        for slot in SlotKind::ALL {
            surface.set_slot_text(slot.index(), &slot.zero_text());
        }
        log::debug!("countdown: target {target} reached");
        return TickFlow::Stop;
    }

    let breakdown = decompose(now, target);
    for slot in SlotKind::ALL {
        surface.set_slot_text(slot.index(), &breakdown.slot_text(slot));
    }

    TickFlow::Continue
}

fn lock_surface(surface: &SharedSurface) -> std::sync::MutexGuard<'_, dyn DisplaySurface + 'static> {
    surface.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::thread;

    use chrono::{Duration as ChronoDuration, TimeZone};
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct FakeSurface {
        slots: Vec<(String, String)>,
        clears: usize,
    }

    impl FakeSurface {
        fn texts(&self) -> Vec<&str> {
            self.slots.iter().map(|(_, text)| text.as_str()).collect()
        }
    }

    impl DisplaySurface for FakeSurface {
        fn numeric_slot_count(&self) -> usize {
            self.slots.len()
        }

        fn clear(&mut self) {
            self.slots.clear();
            self.clears += 1;
        }

        fn create_slot(&mut self, label: &str) {
            self.slots.push((label.to_string(), "00".to_string()));
        }

        fn set_slot_text(&mut self, index: usize, text: &str) {
            self.slots[index].1 = text.to_string();
        }
    }

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn tick_writes_unpadded_months_and_padded_remainder() {
        let mut surface = FakeSurface::default();
        ensure_slots(&mut surface);

        let now = local(2024, 1, 15, 10, 0, 0);
        let target = local(2024, 7, 16, 11, 2, 3);

        let flow = render_tick_at(&mut surface, target, now);

        assert_eq!(flow, TickFlow::Continue);
        assert_eq!(surface.texts(), ["6", "01", "01", "02", "03"]);
    }

    #[test]
    fn tick_at_the_target_zeroes_and_stops() {
        let mut surface = FakeSurface::default();
        ensure_slots(&mut surface);

        let instant = local(2024, 3, 10, 8, 30, 0);
        let flow = render_tick_at(&mut surface, instant, instant);

        assert_eq!(flow, TickFlow::Stop);
        assert_eq!(surface.texts(), ["0", "00", "00", "00", "00"]);
    }

    #[test]
    fn terminal_ticks_stay_terminal() {
        let mut surface = FakeSurface::default();
        ensure_slots(&mut surface);

        let target = local(2024, 3, 10, 8, 30, 0);
        let mut now = target + ChronoDuration::seconds(1);

        for _ in 0..3 {
            assert_eq!(render_tick_at(&mut surface, target, now), TickFlow::Stop);
            assert_eq!(surface.texts(), ["0", "00", "00", "00", "00"]);
            now += ChronoDuration::seconds(1);
        }
    }

    #[test]
    fn start_on_a_missing_surface_returns_an_inert_handle() {
        let registry = SurfaceRegistry::new();
        let handle = start(Local::now() + ChronoDuration::hours(1), "nowhere", &registry);

        assert!(!handle.is_active());
        handle.stop();
        assert!(!handle.is_active());
    }

    #[test]
    fn start_renders_immediately_and_stop_is_idempotent() {
        let concrete = Arc::new(Mutex::new(FakeSurface::default()));
        let shared: SharedSurface = concrete.clone();
        let registry = SurfaceRegistry::new();
        registry.register("panel", shared);

        let handle = start(Local::now() + ChronoDuration::hours(1), "panel", &registry);
        assert!(handle.is_active());

        {
            let surface = concrete.lock().unwrap();
            assert_eq!(surface.slots.len(), 5);
            // The immediate first tick has replaced the placeholder text.
            assert_eq!(surface.slots[0].1, "0");
        }

        handle.stop();
        handle.stop();
        for _ in 0..200 {
            if !handle.is_active() {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!handle.is_active());
    }

    #[test]
    fn starting_twice_does_not_duplicate_the_layout() {
        let concrete = Arc::new(Mutex::new(FakeSurface::default()));
        let shared: SharedSurface = concrete.clone();
        let registry = SurfaceRegistry::new();
        registry.register("panel", shared);

        let target = Local::now() + ChronoDuration::hours(1);
        let first = start(target, "panel", &registry);
        let second = start(target, "panel", &registry);

        {
            let surface = concrete.lock().unwrap();
            assert_eq!(surface.slots.len(), 5);
            assert_eq!(surface.clears, 1);
        }

        first.stop();
        second.stop();
    }

    #[test]
    fn start_past_the_target_never_arms_a_timer() {
        let concrete = Arc::new(Mutex::new(FakeSurface::default()));
        let shared: SharedSurface = concrete.clone();
        let registry = SurfaceRegistry::new();
        registry.register("panel", shared);

        let handle = start(Local::now() - ChronoDuration::seconds(1), "panel", &registry);

        assert!(!handle.is_active());
        assert_eq!(
            concrete.lock().unwrap().texts(),
            ["0", "00", "00", "00", "00"]
        );
    }
}
