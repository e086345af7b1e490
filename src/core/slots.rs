//! Day → slot-triple table of the pre-printed form.
//!
//! Each calendar day owns three widgets on the template: church
//! location, begin time, end time. The widget numbering is hand-authored
//! upstream and visibly non-linear (note the suffix jump between day 21
//! and day 22); it is reproduced verbatim, never derived by formula.

/// The three widget names a single calendar day occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySlots {
    pub location: &'static str,
    pub start: &'static str,
    pub end: &'static str,
}

const fn slots(location: &'static str, start: &'static str, end: &'static str) -> DaySlots {
    DaySlots {
        location,
        start,
        end,
    }
}

/// Indexed by day-of-month minus one.
static DAY_SLOTS: [DaySlots; 31] = [
    slots("Textfeld 1_23", "Textfeld 1_29", "Textfeld 1_83"),
    slots("Textfeld 1_31", "Textfeld 1_82", "Textfeld 1_32"),
    slots("Textfeld 1_35", "Textfeld 1_36", "Textfeld 1_84"),
    slots("Textfeld 1_39", "Textfeld 1_40", "Textfeld 1_85"),
    slots("Textfeld 1_43", "Textfeld 1_44", "Textfeld 1_86"),
    slots("Textfeld 1_47", "Textfeld 1_48", "Textfeld 1_87"),
    slots("Textfeld 1_51", "Textfeld 1_52", "Textfeld 1_88"),
    slots("Textfeld 1_89", "Textfeld 1_90", "Textfeld 1_91"),
    slots("Textfeld 1_92", "Textfeld 1_93", "Textfeld 1_94"),
    slots("Textfeld 1_95", "Textfeld 1_96", "Textfeld 1_97"),
    slots("Textfeld 1_98", "Textfeld 1_99", "Textfeld 1_100"),
    slots("Textfeld 1_101", "Textfeld 1_102", "Textfeld 1_103"),
    slots("Textfeld 1_104", "Textfeld 1_105", "Textfeld 1_106"),
    slots("Textfeld 1_107", "Textfeld 1_108", "Textfeld 1_109"),
    slots("Textfeld 1_110", "Textfeld 1_111", "Textfeld 1_112"),
    slots("Textfeld 1_113", "Textfeld 1_114", "Textfeld 1_115"),
    slots("Textfeld 1_116", "Textfeld 1_117", "Textfeld 1_118"),
    slots("Textfeld 1_119", "Textfeld 1_120", "Textfeld 1_121"),
    slots("Textfeld 1_122", "Textfeld 1_123", "Textfeld 1_124"),
    slots("Textfeld 1_125", "Textfeld 1_126", "Textfeld 1_127"),
    slots("Textfeld 1_128", "Textfeld 1_129", "Textfeld 1_130"),
    // day 22 onward: the template generator restarts at suffix 151
    slots("Textfeld 1_151", "Textfeld 1_152", "Textfeld 1_153"),
    slots("Textfeld 1_154", "Textfeld 1_155", "Textfeld 1_156"),
    slots("Textfeld 1_157", "Textfeld 1_158", "Textfeld 1_159"),
    slots("Textfeld 1_160", "Textfeld 1_161", "Textfeld 1_162"),
    slots("Textfeld 1_163", "Textfeld 1_164", "Textfeld 1_165"),
    slots("Textfeld 1_166", "Textfeld 1_167", "Textfeld 1_168"),
    slots("Textfeld 1_169", "Textfeld 1_170", "Textfeld 1_171"),
    slots("Textfeld 1_172", "Textfeld 1_173", "Textfeld 1_174"),
    slots("Textfeld 1_175", "Textfeld 1_176", "Textfeld 1_177"),
    slots("Textfeld 1_178", "Textfeld 1_179", "Textfeld 1_180"),
];

/// Resolve the slot triple for a calendar day.
///
/// Total over all inputs: any day outside the table's domain yields
/// `None`, which callers treat as "skip this entry".
pub fn day_slots(day: u32) -> Option<&'static DaySlots> {
    if (1..=31).contains(&day) {
        DAY_SLOTS.get(day as usize - 1)
    } else {
        None
    }
}
