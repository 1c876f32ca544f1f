//! Text records of `Identifier(object, slot) = value` assignments.
//!
//! A polar table is written as angle/radius values in consecutive slots
//! from a base slot, closed by a `-1` sentinel in the next slot:
//!
//! ```text
//! SpaceObject(0, 10) = 135
//! SpaceObject(0, 11) = 7
//! SpaceObject(0, 12) = -1
//! ```

mod parse;

use std::fmt;

use crate::polar::PolarPair;

/// Slot value marking the end of a record.
pub const SENTINEL: i64 = -1;

/// Where a record lives: array identifier, object index, first slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLayout {
    pub identifier: String,
    pub object: i64,
    pub start: i64,
}

impl Default for RecordLayout {
    fn default() -> Self {
        Self {
            identifier: "SpaceObject".to_string(),
            object: 0,
            start: 10,
        }
    }
}

impl RecordLayout {
    /// Borrowing view that renders `pairs` in this layout.
    pub fn record<'a>(&'a self, pairs: &'a [PolarPair]) -> Record<'a> {
        Record { layout: self, pairs }
    }

    /// Render `pairs` as assignment lines, sentinel included.
    pub fn format(&self, pairs: &[PolarPair]) -> String {
        self.record(pairs).to_string()
    }

    fn assignment(&self, f: &mut fmt::Formatter<'_>, slot: i64, value: i64) -> fmt::Result {
        writeln!(f, "{}({}, {}) = {}", self.identifier, self.object, slot, value)
    }
}

/// A polar table bound to a layout, ready for display.
pub struct Record<'a> {
    layout: &'a RecordLayout,
    pairs: &'a [PolarPair],
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut slot = self.layout.start;
        for pair in self.pairs {
            self.layout.assignment(f, slot, i64::from(pair.angle))?;
            self.layout.assignment(f, slot + 1, i64::from(pair.radius))?;
            slot += 2;
        }
        self.layout.assignment(f, slot, SENTINEL)
    }
}

/// A comment line; records are pasted into source where `'` starts a comment.
pub fn commentary(text: impl fmt::Display) -> String {
    format!("' {}", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_record_lines() {
        let pairs = [
            PolarPair::new(135, 7),
            PolarPair::new(45, 7),
            PolarPair::new(315, 7),
            PolarPair::new(225, 7),
        ];
        let text = RecordLayout::default().format(&pairs);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "SpaceObject(0, 10) = 135");
        assert_eq!(lines[1], "SpaceObject(0, 11) = 7");
        assert_eq!(lines[7], "SpaceObject(0, 17) = 7");
        assert_eq!(lines[8], "SpaceObject(0, 18) = -1");
    }

    #[test]
    fn empty_table_is_just_the_sentinel() {
        let layout = RecordLayout {
            identifier: "Ship".to_string(),
            object: 3,
            start: 0,
        };
        assert_eq!(layout.format(&[]), "Ship(3, 0) = -1\n");
    }

    #[test]
    fn commentary_prefix() {
        assert_eq!(
            commentary(format_args!("Center used: {:.2}, {:.2}", 5.0, 4.126)),
            "' Center used: 5.00, 4.13"
        );
    }
}
