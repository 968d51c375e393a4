mod decompose;
mod driver;
mod models;
mod scheduler;
mod surface;

pub use decompose::{decompose, months_and_remainder};
pub use driver::{render_tick_at, start, StopHandle, TICK_PERIOD};
pub use models::{SlotKind, TimeBreakdown};
pub use scheduler::{schedule_repeating, ScheduleHandle, TickFlow};
pub use surface::{ensure_slots, DisplaySurface, SharedSurface, SurfaceRegistry};
