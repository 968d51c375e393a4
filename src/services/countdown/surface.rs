//! Display surface seam.
//!
//! The countdown core never talks to a concrete display directly; it
//! writes formatted strings through this trait. A surface exposes an
//! ordered row of numeric slots, each with a static label, and a registry
//! resolves the opaque identifiers countdowns are started against.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::models::SlotKind;

/// Opaque display region the countdown renders into.
#[cfg_attr(test, mockall::automock)]
pub trait DisplaySurface: Send {
    /// Number of numeric slots currently present, in layout order.
    fn numeric_slot_count(&self) -> usize;

    /// Remove every child from the surface.
    fn clear(&mut self);

    /// Append one labeled numeric slot after the existing ones.
    fn create_slot(&mut self, label: &str);

    /// Replace the text of the numeric slot at `index`.
    fn set_slot_text(&mut self, index: usize, text: &str);
}

/// Shared handle to a surface, usable from the timer thread.
pub type SharedSurface = Arc<Mutex<dyn DisplaySurface>>;

/// Ensure the surface carries exactly the five countdown slots, in order.
///
/// A surface that already exposes five numeric slots is reused as-is, so
/// starting a countdown twice on the same surface never duplicates the
/// layout.
pub fn ensure_slots(surface: &mut dyn DisplaySurface) {
    if surface.numeric_slot_count() == SlotKind::ALL.len() {
        return;
    }

    surface.clear();
    for slot in SlotKind::ALL {
        surface.create_slot(slot.label());
    }
}

/// Registry resolving opaque surface identifiers to shared surfaces.
#[derive(Default)]
pub struct SurfaceRegistry {
    surfaces: Mutex<HashMap<String, SharedSurface>>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `surface` under `id`, replacing any previous registration.
    pub fn register(&self, id: &str, surface: SharedSurface) {
        self.lock_surfaces().insert(id.to_string(), surface);
    }

    /// Look up the surface registered under `id`.
    pub fn get(&self, id: &str) -> Option<SharedSurface> {
        self.lock_surfaces().get(id).cloned()
    }

    /// Discard the surface registered under `id`, returning it if present.
    pub fn remove(&self, id: &str) -> Option<SharedSurface> {
        self.lock_surfaces().remove(id)
    }

    fn lock_surfaces(&self) -> std::sync::MutexGuard<'_, HashMap<String, SharedSurface>> {
        self.surfaces.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
