/// One of the five fixed display positions, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl SlotKind {
    /// Layout order used both to build the slots and to address them.
    pub const ALL: [SlotKind; 5] = [
        SlotKind::Months,
        SlotKind::Days,
        SlotKind::Hours,
        SlotKind::Minutes,
        SlotKind::Seconds,
    ];

    /// Static label text shown next to the numeric output.
    pub fn label(self) -> &'static str {
        match self {
            SlotKind::Months => "Months",
            SlotKind::Days => "Days",
            SlotKind::Hours => "Hours",
            SlotKind::Minutes => "Minutes",
            SlotKind::Seconds => "Seconds",
        }
    }

    /// Zero-pad width of the numeric output. Months render unpadded
    /// since the value is unbounded; the other four stay at width 2.
    pub fn pad_width(self) -> usize {
        match self {
            SlotKind::Months => 1,
            _ => 2,
        }
    }

    /// Position of this slot within the layout.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Text written into this slot in the terminal state.
    pub fn zero_text(self) -> String {
        format!("{:0width$}", 0, width = self.pad_width())
    }
}

/// Remaining time split into whole calendar months plus a
/// day/hour/minute/second remainder.
///
/// Months are unbounded. Days are bounded by the month-advance rollover
/// (at most 31); hours, minutes and seconds stay within their natural
/// modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeBreakdown {
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeBreakdown {
    /// Numeric value bound to the given slot.
    pub fn value(&self, slot: SlotKind) -> u32 {
        match slot {
            SlotKind::Months => self.months,
            SlotKind::Days => self.days,
            SlotKind::Hours => self.hours,
            SlotKind::Minutes => self.minutes,
            SlotKind::Seconds => self.seconds,
        }
    }

    /// Rendered text for the given slot at that slot's pad width.
    pub fn slot_text(&self, slot: SlotKind) -> String {
        format!("{:0width$}", self.value(slot), width = slot.pad_width())
    }
}
