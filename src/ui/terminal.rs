//! Line-oriented terminal surface.
//!
//! Renders the five slots as a single line, rewritten in place on every
//! update. Numbers carry their label inline since a terminal line has no
//! second row for captions.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::services::countdown::{DisplaySurface, SharedSurface};

#[derive(Default)]
pub struct TerminalSurface {
    slots: Vec<Slot>,
}

struct Slot {
    label: String,
    text: String,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// New surface wrapped for registration.
    pub fn shared() -> SharedSurface {
        Arc::new(Mutex::new(Self::new()))
    }

    fn line(&self) -> String {
        self.slots
            .iter()
            .map(|slot| format!("{} {}", slot.text, slot.label))
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn redraw(&self) {
        let mut stdout = io::stdout();
        // Clear the line first so a shrinking months field leaves no
        // stale trailing characters. Best effort; a closed stdout just
        // means nothing to show.
        let _ = write!(stdout, "\r\x1b[2K{}", self.line());
        let _ = stdout.flush();
    }
}

impl DisplaySurface for TerminalSurface {
    fn numeric_slot_count(&self) -> usize {
        self.slots.len()
    }

    fn clear(&mut self) {
        self.slots.clear();
    }

    fn create_slot(&mut self, label: &str) {
        self.slots.push(Slot {
            label: label.to_string(),
            text: "00".to_string(),
        });
    }

    fn set_slot_text(&mut self, index: usize, text: &str) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.text = text.to_string();
            self.redraw();
        }
    }
}
