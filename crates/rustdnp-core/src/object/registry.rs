//! The (group, variation) registry.
//!
//! A static table mapping every supported object tag to a description and a
//! point shape. The shape parameterizes the generic point codecs: packed
//! single- and double-bit formats, fixed-width byte groups with optional
//! flag octets and absolute/relative timestamp suffixes, and the bare
//! timestamp objects. Variation-0 rows describe "any variation" queries and
//! carry no shape; an object header resolving to one of those (or to no row
//! at all) is retained as raw bytes.
//!
//! Widths follow the DNP3 Application Layer tables. `width` is the full
//! point size excluding any point prefix, flag and timestamp octets
//! included.

/// How the points of one (group, variation) are laid out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointShape {
    /// The tag carries no point data (class-data polls and event queries).
    NoPoints,
    /// One bit per point, eight per byte, LSB first. No prefix permitted.
    Packed1Bit,
    /// Two bits per point, four per byte, LSB first. No prefix permitted.
    Packed2Bit,
    /// One octet per point: value in bit 7, flags in bits 6:0.
    BitWithFlags,
    /// `width` raw octets per point.
    Bytes { width: u8 },
    /// Flag octet followed by `width - 1` value octets.
    BytesWithFlags { width: u8 },
    /// Flag octet, `width - 7` value octets, six-octet absolute timestamp.
    BytesWithFlagsTime { width: u8 },
    /// `width - 6` value octets followed by a six-octet absolute timestamp.
    BytesWithTime { width: u8 },
    /// `width - 2` value octets followed by a two-octet relative timestamp.
    BytesWithRelativeTime { width: u8 },
    /// A bare six-octet absolute timestamp.
    AbsoluteTime,
    /// A bare two-octet relative timestamp.
    RelativeTime,
}

impl PointShape {
    /// Full point width in bytes, excluding the point prefix. Packed shapes
    /// have no per-point width and return 0.
    pub const fn width(self) -> usize {
        match self {
            Self::NoPoints | Self::Packed1Bit | Self::Packed2Bit => 0,
            Self::BitWithFlags => 1,
            Self::Bytes { width }
            | Self::BytesWithFlags { width }
            | Self::BytesWithFlagsTime { width }
            | Self::BytesWithTime { width }
            | Self::BytesWithRelativeTime { width } => width as usize,
            Self::AbsoluteTime => 6,
            Self::RelativeTime => 2,
        }
    }
}

/// One registry row.
#[derive(Debug, Clone, Copy)]
pub struct ObjectType {
    pub description: &'static str,
    pub shape: Option<PointShape>,
}

const fn row(description: &'static str, shape: PointShape) -> ObjectType {
    ObjectType {
        description,
        shape: Some(shape),
    }
}

const fn placeholder(description: &'static str) -> ObjectType {
    ObjectType {
        description,
        shape: None,
    }
}

/// Every known (group, variation), sorted for binary search.
#[rustfmt::skip]
static OBJECT_TYPES: &[(u8, u8, ObjectType)] = &[
    // Binary Input
    (1, 0, placeholder("(Static) Binary Input - Any Variations")),
    (1, 1, row("(Static) Binary Input - Packed Format", PointShape::Packed1Bit)),
    (1, 2, row("(Static) Binary Input - Status with Flags", PointShape::BitWithFlags)),
    // Binary Input Event
    (2, 0, row("(Event) Binary Input Event - Any Variations", PointShape::NoPoints)),
    (2, 1, row("(Event) Binary Input Event", PointShape::Bytes { width: 1 })),
    (2, 2, row("(Event) Binary Input Event - with Absolute Time", PointShape::BytesWithTime { width: 7 })),
    (2, 3, row("(Event) Binary Input Event - with Relative Time", PointShape::BytesWithRelativeTime { width: 3 })),
    // Double-bit Binary Input
    (3, 0, placeholder("(Static) Double-bit Binary Input - Any Variations")),
    (3, 1, row("(Static) Double-bit Binary Input - Packed Format", PointShape::Packed2Bit)),
    (3, 2, row("(Static) Double-bit Binary Input - Status with Flags", PointShape::Bytes { width: 1 })),
    // Double-bit Binary Input Event
    (4, 0, placeholder("(Event) Double-bit Binary Input Event - Any Variations")),
    (4, 1, row("(Event) Double-bit Binary Input Event", PointShape::Bytes { width: 1 })),
    (4, 2, row("(Event) Double-bit Binary Input Event with Absolute Time", PointShape::BytesWithTime { width: 7 })),
    (4, 3, row("(Event) Double-bit Binary Input Event with Relative Time", PointShape::BytesWithRelativeTime { width: 3 })),
    // Binary Output
    (10, 0, placeholder("(Static) Binary Output - Any Variations")),
    (10, 1, row("(Static) Binary Output - Packed Format", PointShape::Packed1Bit)),
    (10, 2, row("(Static) Binary Output - Status with Flags", PointShape::BitWithFlags)),
    // Binary Output Event
    (11, 0, placeholder("(Event) Binary Output Event - Any Variations")),
    (11, 1, row("(Event) Binary Output Event - Status", PointShape::Bytes { width: 1 })),
    (11, 2, row("(Event) Binary Output Event - Status with Time", PointShape::BytesWithTime { width: 7 })),
    // Binary Output Command
    (12, 0, placeholder("(Command) Binary Output Command - Any Variations")),
    (12, 1, row("(Command) Binary Output Command - Control Relay Output Block", PointShape::Bytes { width: 11 })),
    (12, 2, row("(Command) Binary Output Command - Pattern Control Block", PointShape::Bytes { width: 11 })),
    (12, 3, placeholder("(Command) Binary Output Command - Pattern Mask")),
    // Binary Output Command Event
    (13, 0, placeholder("(Event) Binary Output Command Event - Any Variations")),
    (13, 1, row("(Event) Binary Output Command Event - Command Status", PointShape::Bytes { width: 1 })),
    (13, 2, row("(Event) Binary Output Command Event - Command Status with Time", PointShape::BytesWithTime { width: 7 })),
    // Counter
    (20, 0, placeholder("(Static) Counter - Any Variations")),
    (20, 1, row("(Static) Counter - 32-bit with Flag", PointShape::BytesWithFlags { width: 5 })),
    (20, 2, row("(Static) Counter - 16-bit with Flag", PointShape::BytesWithFlags { width: 3 })),
    (20, 5, row("(Static) Counter - 32-bit w/o Flag", PointShape::Bytes { width: 4 })),
    (20, 6, row("(Static) Counter - 16-bit w/o Flag", PointShape::Bytes { width: 2 })),
    // Frozen Counter
    (21, 0, placeholder("(Static) Frozen Counter - Any Variations")),
    (21, 1, row("(Static) Frozen Counter - 32-bit with Flag", PointShape::BytesWithFlags { width: 5 })),
    (21, 2, row("(Static) Frozen Counter - 16-bit with Flag", PointShape::BytesWithFlags { width: 3 })),
    (21, 5, row("(Static) Frozen Counter - 32-bit with Flag and Time", PointShape::BytesWithFlagsTime { width: 11 })),
    (21, 6, row("(Static) Frozen Counter - 16-bit with Flag and Time", PointShape::BytesWithFlagsTime { width: 9 })),
    (21, 9, row("(Static) Frozen Counter - 32-bit w/o Flag", PointShape::Bytes { width: 4 })),
    (21, 10, row("(Static) Frozen Counter - 16-bit w/o Flag", PointShape::Bytes { width: 2 })),
    // Counter Event
    (22, 0, placeholder("(Event) Counter Event - Any Variations")),
    (22, 1, row("(Event) Counter Event - 32-bit with Flag", PointShape::BytesWithFlags { width: 5 })),
    (22, 2, row("(Event) Counter Event - 16-bit with Flag", PointShape::BytesWithFlags { width: 3 })),
    (22, 5, row("(Event) Counter Event - 32-bit with Flag and Time", PointShape::BytesWithFlagsTime { width: 11 })),
    (22, 6, row("(Event) Counter Event - 16-bit with Flag and Time", PointShape::BytesWithFlagsTime { width: 9 })),
    // Frozen Counter Event
    (23, 0, placeholder("(Event) Frozen Counter Event - Any Variations")),
    (23, 1, row("(Event) Frozen Counter Event - 32-bit with Flag", PointShape::BytesWithFlags { width: 5 })),
    (23, 2, row("(Event) Frozen Counter Event - 16-bit with Flag", PointShape::BytesWithFlags { width: 3 })),
    (23, 5, row("(Event) Frozen Counter Event - 32-bit with Flag and Time", PointShape::BytesWithFlagsTime { width: 11 })),
    (23, 6, row("(Event) Frozen Counter Event - 16-bit with Flag and Time", PointShape::BytesWithFlagsTime { width: 9 })),
    // Analog Input
    (30, 0, placeholder("(Static) Analog Input - Any Variations")),
    (30, 1, row("(Static) Analog Input - 32-bit with Flag", PointShape::BytesWithFlags { width: 5 })),
    (30, 2, row("(Static) Analog Input - 16-bit with Flag", PointShape::BytesWithFlags { width: 3 })),
    (30, 3, row("(Static) Analog Input - 32-bit w/o Flag", PointShape::Bytes { width: 4 })),
    (30, 4, row("(Static) Analog Input - 16-bit w/o Flag", PointShape::Bytes { width: 2 })),
    (30, 5, row("(Static) Analog Input - Single-prec. FP with Flag", PointShape::BytesWithFlags { width: 5 })),
    (30, 6, row("(Static) Analog Input - Double-prec. FP with Flag", PointShape::BytesWithFlags { width: 9 })),
    // Frozen Analog Input
    (31, 0, placeholder("(Static) Frozen Analog Input - Any Variations")),
    (31, 1, row("(Static) Frozen Analog Input - 32-bit with Flag", PointShape::BytesWithFlags { width: 5 })),
    (31, 2, row("(Static) Frozen Analog Input - 16-bit with Flag", PointShape::BytesWithFlags { width: 3 })),
    (31, 3, row("(Static) Frozen Analog Input - 32-bit with Time-of-Freeze", PointShape::Bytes { width: 11 })),
    (31, 4, row("(Static) Frozen Analog Input - 16-bit with Time-of-Freeze", PointShape::Bytes { width: 9 })),
    (31, 5, row("(Static) Frozen Analog Input - 32-bit w/o Flag", PointShape::Bytes { width: 4 })),
    (31, 6, row("(Static) Frozen Analog Input - 16-bit w/o Flag", PointShape::Bytes { width: 2 })),
    (31, 7, row("(Static) Frozen Analog Input - Single-prec. FP with Flag", PointShape::BytesWithFlags { width: 5 })),
    (31, 8, row("(Static) Frozen Analog Input - Double-prec. FP with Flag", PointShape::BytesWithFlags { width: 9 })),
    // Analog Input Event
    (32, 0, placeholder("(Event) Analog Input Event - Any Variations")),
    (32, 1, row("(Event) Analog Input Event - 32-bit", PointShape::Bytes { width: 5 })),
    (32, 2, row("(Event) Analog Input Event - 16-bit", PointShape::Bytes { width: 3 })),
    (32, 3, row("(Event) Analog Input Event - 32-bit with Time", PointShape::Bytes { width: 11 })),
    (32, 4, row("(Event) Analog Input Event - 16-bit with Time", PointShape::Bytes { width: 9 })),
    (32, 5, row("(Event) Analog Input Event - Single-prec. FP", PointShape::Bytes { width: 5 })),
    (32, 6, row("(Event) Analog Input Event - Double-prec. FP", PointShape::Bytes { width: 9 })),
    (32, 7, row("(Event) Analog Input Event - Single-prec. FP with Time", PointShape::Bytes { width: 11 })),
    (32, 8, row("(Event) Analog Input Event - Double-prec. FP with Time", PointShape::Bytes { width: 15 })),
    // Frozen Analog Input Event
    (33, 0, placeholder("(Event) Frozen Analog Input Event - Any Variations")),
    (33, 1, row("(Event) Frozen Analog Input Event - 32-bit", PointShape::Bytes { width: 5 })),
    (33, 2, row("(Event) Frozen Analog Input Event - 16-bit", PointShape::Bytes { width: 3 })),
    (33, 3, row("(Event) Frozen Analog Input Event - 32-bit with Time", PointShape::Bytes { width: 11 })),
    (33, 4, row("(Event) Frozen Analog Input Event - 16-bit with Time", PointShape::Bytes { width: 9 })),
    (33, 5, row("(Event) Frozen Analog Input Event - Single-prec. FP", PointShape::Bytes { width: 5 })),
    (33, 6, row("(Event) Frozen Analog Input Event - Double-prec. FP", PointShape::Bytes { width: 9 })),
    (33, 7, row("(Event) Frozen Analog Input Event - Single-prec. FP with Time", PointShape::Bytes { width: 11 })),
    (33, 8, row("(Event) Frozen Analog Input Event - Double-prec. FP with Time", PointShape::Bytes { width: 15 })),
    // Analog Input Deadband
    (34, 0, placeholder("(Static) Analog Input Deadband - Any Variations")),
    (34, 1, row("(Static) Analog Input Deadband - 16-bit", PointShape::Bytes { width: 2 })),
    (34, 2, row("(Static) Analog Input Deadband - 32-bit", PointShape::Bytes { width: 4 })),
    (34, 3, row("(Static) Analog Input Deadband - Single-prec. FP", PointShape::Bytes { width: 4 })),
    // Analog Output Status
    (40, 0, placeholder("(Static) Analog Output Status - Any Variations")),
    (40, 1, row("(Static) Analog Output Status - 32-bit with Flag", PointShape::BytesWithFlags { width: 5 })),
    (40, 2, row("(Static) Analog Output Status - 16-bit with Flag", PointShape::BytesWithFlags { width: 3 })),
    (40, 3, row("(Static) Analog Output Status - Single-prec. FP with Flag", PointShape::BytesWithFlags { width: 5 })),
    (40, 4, row("(Static) Analog Output Status - Double-prec. FP with Flag", PointShape::BytesWithFlags { width: 9 })),
    // Analog Output Command
    (41, 0, placeholder("(Command) Analog Output Command - Any Variations")),
    (41, 1, row("(Command) Analog Output Command - 32-bit", PointShape::Bytes { width: 5 })),
    (41, 2, row("(Command) Analog Output Command - 16-bit", PointShape::Bytes { width: 3 })),
    (41, 3, row("(Command) Analog Output Command - Single-prec. FP", PointShape::Bytes { width: 5 })),
    (41, 4, row("(Command) Analog Output Command - Double-prec. FP", PointShape::Bytes { width: 9 })),
    // Analog Output Event
    (42, 0, placeholder("(Event) Analog Output Event - Any Variations")),
    (42, 1, row("(Event) Analog Output Event - 32-bit", PointShape::Bytes { width: 5 })),
    (42, 2, row("(Event) Analog Output Event - 16-bit", PointShape::Bytes { width: 3 })),
    (42, 3, row("(Event) Analog Output Event - 32-bit with Time", PointShape::Bytes { width: 11 })),
    (42, 4, row("(Event) Analog Output Event - 16-bit with Time", PointShape::Bytes { width: 9 })),
    (42, 5, row("(Event) Analog Output Event - Single-prec. FP", PointShape::Bytes { width: 5 })),
    (42, 6, row("(Event) Analog Output Event - Double-prec. FP", PointShape::Bytes { width: 9 })),
    (42, 7, row("(Event) Analog Output Event - Single-prec. FP with Time", PointShape::Bytes { width: 11 })),
    (42, 8, row("(Event) Analog Output Event - Double-prec. FP with Time", PointShape::Bytes { width: 15 })),
    // Analog Output Command Event
    (43, 0, placeholder("(Event) Analog Output Command Event - Any Variations")),
    (43, 1, row("(Event) Analog Output Command Event - 32-bit", PointShape::Bytes { width: 5 })),
    (43, 2, row("(Event) Analog Output Command Event - 16-bit", PointShape::Bytes { width: 3 })),
    (43, 3, row("(Event) Analog Output Command Event - 32-bit with Time", PointShape::Bytes { width: 11 })),
    (43, 4, row("(Event) Analog Output Command Event - 16-bit with Time", PointShape::Bytes { width: 9 })),
    (43, 5, row("(Event) Analog Output Command Event - Single-prec. FP", PointShape::Bytes { width: 5 })),
    (43, 6, row("(Event) Analog Output Command Event - Double-prec. FP", PointShape::Bytes { width: 9 })),
    (43, 7, row("(Event) Analog Output Command Event - Single-prec. FP with Time", PointShape::Bytes { width: 11 })),
    (43, 8, row("(Event) Analog Output Command Event - Double-prec. FP with Time", PointShape::Bytes { width: 15 })),
    // Time and Date
    (50, 1, row("(Info) Time and Date - Absolute Time", PointShape::AbsoluteTime)),
    (50, 2, row("(Info) Time and Date - Absolute Time and Interval", PointShape::BytesWithTime { width: 10 })),
    (50, 3, row("(Info) Time and Date - Absolute Time at Last Recorded Time", PointShape::AbsoluteTime)),
    (50, 4, row("(Info) Time and Date - Indexed Absolute Time and Long Interval", PointShape::Bytes { width: 11 })),
    // Time and Date CTO
    (51, 1, row("(Info) CTO - Absolute Time, Synchronized", PointShape::AbsoluteTime)),
    (51, 2, row("(Info) CTO - Absolute Time, Unsynchronized", PointShape::AbsoluteTime)),
    // Time Delay
    (52, 1, row("(Info) Time Delay Coarse", PointShape::RelativeTime)),
    (52, 2, row("(Info) Time Delay Fine", PointShape::RelativeTime)),
    // Class Data
    (60, 1, row("(Command) Class 0 Data", PointShape::NoPoints)),
    (60, 2, row("(Command) Class 1 Data", PointShape::NoPoints)),
    (60, 3, row("(Command) Class 2 Data", PointShape::NoPoints)),
    (60, 4, row("(Command) Class 3 Data", PointShape::NoPoints)),
    // Internal Indications
    (80, 1, row("(Info) Internal Indications - Packed Format", PointShape::Bytes { width: 1 })),
];

/// Look up the registry entry for a (group, variation) pair.
pub fn lookup(group: u8, variation: u8) -> Option<&'static ObjectType> {
    OBJECT_TYPES
        .binary_search_by(|&(g, v, _)| (g, v).cmp(&(group, variation)))
        .ok()
        .map(|index| &OBJECT_TYPES[index].2)
}

#[cfg(test)]
mod tests {
    use super::{lookup, PointShape, OBJECT_TYPES};

    #[test]
    fn table_is_sorted_and_unique() {
        for pair in OBJECT_TYPES.windows(2) {
            assert!((pair[0].0, pair[0].1) < (pair[1].0, pair[1].1));
        }
    }

    #[test]
    fn known_and_unknown_lookups() {
        assert!(lookup(1, 1).is_some());
        assert!(lookup(80, 1).is_some());
        assert!(lookup(99, 99).is_none());
        assert!(lookup(50, 0).is_none());
    }

    #[test]
    fn any_variation_rows_have_no_shape() {
        for group in [1, 3, 10, 20, 30, 43] {
            assert!(lookup(group, 0).unwrap().shape.is_none());
        }
        // Binary Input Event var 0 is the one query row that decodes (to
        // nothing), matching field captures that poll with it.
        assert_eq!(lookup(2, 0).unwrap().shape, Some(PointShape::NoPoints));
    }

    #[test]
    fn counter_event_widths() {
        // 16-bit-with-flag events are flag + two value octets.
        assert_eq!(
            lookup(22, 2).unwrap().shape,
            Some(PointShape::BytesWithFlags { width: 3 })
        );
        assert_eq!(
            lookup(23, 2).unwrap().shape,
            Some(PointShape::BytesWithFlags { width: 3 })
        );
    }

    #[test]
    fn event_with_time_widths() {
        assert_eq!(
            lookup(2, 2).unwrap().shape,
            Some(PointShape::BytesWithTime { width: 7 })
        );
        assert_eq!(
            lookup(21, 5).unwrap().shape,
            Some(PointShape::BytesWithFlagsTime { width: 11 })
        );
        assert_eq!(
            lookup(32, 4).unwrap().shape,
            Some(PointShape::Bytes { width: 9 })
        );
    }
}
