//! ORF1 polyprotein coordinate remapping
//!
//! Positions annotated on the ORF1ab/ORF1a or ORF1b polyproteins are
//! translated to local coordinates on the cleaved non-structural proteins.
//! Both tables are contiguous, 1-based and inclusive. The ORF1AB table has
//! no NSP11 segment: position 4393 onward maps straight to NSP12.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source polyprotein for a remapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polyprotein {
    /// The full ORF1ab polyprotein, positions 1-7096.
    Orf1ab,
    /// The ORF1a polyprotein; shares the ORF1ab coordinate table.
    Orf1a,
    /// The ORF1b polyprotein, positions 1-2695.
    Orf1b,
}

impl Polyprotein {
    /// Recognize a canonical polyprotein name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ORF1AB" => Some(Polyprotein::Orf1ab),
            "ORF1A" => Some(Polyprotein::Orf1a),
            "ORF1B" => Some(Polyprotein::Orf1b),
            _ => None,
        }
    }
}

impl fmt::Display for Polyprotein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polyprotein::Orf1ab => write!(f, "ORF1AB"),
            Polyprotein::Orf1a => write!(f, "ORF1A"),
            Polyprotein::Orf1b => write!(f, "ORF1B"),
        }
    }
}

/// One inclusive polyprotein range and the offset to local coordinates.
struct NspSegment {
    start: u32,
    end: u32,
    target: &'static str,
    offset: i32,
}

impl NspSegment {
    const fn new(start: u32, end: u32, target: &'static str, offset: i32) -> Self {
        Self {
            start,
            end,
            target,
            offset,
        }
    }

    fn contains(&self, position: u32) -> bool {
        self.start <= position && position <= self.end
    }

    fn local(&self, position: u32) -> u32 {
        (position as i64 + self.offset as i64) as u32
    }
}

/// ORF1AB/ORF1A breakpoints, covering 1-7096 without gaps.
/// NSP11 is intentionally absent: 4392 ends NSP10 and 4393 starts NSP12.
const ORF1AB_SEGMENTS: [NspSegment; 15] = [
    NspSegment::new(1, 180, "NSP1", 0),
    NspSegment::new(181, 818, "NSP2", -180),
    NspSegment::new(819, 2763, "NSP3", -818),
    NspSegment::new(2764, 3263, "NSP4", -2763),
    NspSegment::new(3264, 3569, "NSP5", -3263),
    NspSegment::new(3570, 3859, "NSP6", -3569),
    NspSegment::new(3860, 3942, "NSP7", -3859),
    NspSegment::new(3943, 4140, "NSP8", -3942),
    NspSegment::new(4141, 4253, "NSP9", -4140),
    NspSegment::new(4254, 4392, "NSP10", -4253),
    NspSegment::new(4393, 5324, "NSP12", -4392),
    NspSegment::new(5325, 5925, "NSP13", -5324),
    NspSegment::new(5926, 6452, "NSP14", -5925),
    NspSegment::new(6453, 6798, "NSP15", -6452),
    NspSegment::new(6799, 7096, "NSP16", -6798),
];

/// ORF1B breakpoints, covering 1-2695 without gaps. ORF1B starts inside
/// NSP12, whose first 9 residues come from ORF1A, hence the +9.
const ORF1B_SEGMENTS: [NspSegment; 5] = [
    NspSegment::new(1, 923, "NSP12", 9),
    NspSegment::new(924, 1524, "NSP13", -923),
    NspSegment::new(1525, 2051, "NSP14", -1524),
    NspSegment::new(2052, 2397, "NSP15", -2051),
    NspSegment::new(2398, 2695, "NSP16", -2397),
];

fn segments(polyprotein: Polyprotein) -> &'static [NspSegment] {
    match polyprotein {
        Polyprotein::Orf1ab | Polyprotein::Orf1a => &ORF1AB_SEGMENTS,
        Polyprotein::Orf1b => &ORF1B_SEGMENTS,
    }
}

/// Map a polyprotein position to its NSP and local position.
///
/// Returns `None` when the position falls outside every known segment; the
/// caller decides whether to keep the record with the polyprotein
/// coordinates or drop it.
pub fn remap(polyprotein: Polyprotein, position: u32) -> Option<(&'static str, u32)> {
    segments(polyprotein)
        .iter()
        .find(|segment| segment.contains(position))
        .map(|segment| (segment.target, segment.local(position)))
}

/// Shift an inclusive annotation interval into NSP-local coordinates.
///
/// The segment containing `start` determines the target protein and the
/// offset applied to both ends; callers pass `start <= end`.
pub fn remap_interval(
    polyprotein: Polyprotein,
    start: u32,
    end: u32,
) -> Option<(&'static str, u32, u32)> {
    segments(polyprotein)
        .iter()
        .find(|segment| segment.contains(start))
        .map(|segment| (segment.target, segment.local(start), segment.local(end)))
}
