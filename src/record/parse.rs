use std::collections::BTreeMap;

use regex::Regex;

use super::{RecordLayout, SENTINEL};
use crate::error::PolarError;
use crate::polar::{normalize_angle, PolarPair};

impl RecordLayout {
    /// Read this layout's polar table back out of `text`.
    ///
    /// The block running from the start slot to the first sentinel is
    /// located structurally. When no such block exists (slots scattered,
    /// interleaved with other code, or no sentinel), each slot is looked
    /// up on its own from the start slot onward. Either way reading stops
    /// at the first missing slot or sentinel.
    pub fn parse(&self, text: &str) -> Result<Vec<PolarPair>, PolarError> {
        let patterns = Patterns::new(self)?;

        let slots = match patterns.block.find(text) {
            Some(block) => {
                log::debug!("  Parse       structural block at byte {}", block.start());
                patterns.slots(block.as_str())
            }
            None => {
                log::debug!("  Parse       no block found, looking up slots from {}", self.start);
                patterns.slots(text)
            }
        };
        Ok(self.pairs_from_slots(&slots))
    }

    /// Pair up consecutive slot values from the start slot.
    fn pairs_from_slots(&self, slots: &BTreeMap<i64, i64>) -> Vec<PolarPair> {
        let value = |slot: i64| slots.get(&slot).copied().filter(|&v| v != SENTINEL);

        let mut pairs = Vec::new();
        let mut slot = self.start;
        while let (Some(angle), Some(radius)) = (value(slot), value(slot + 1)) {
            let Ok(radius) = u32::try_from(radius) else {
                log::warn!("negative radius {} at slot {}, record truncated", radius, slot + 1);
                break;
            };
            pairs.push(PolarPair::new(normalize_angle(angle), radius));
            slot += 2;
        }
        pairs
    }
}

struct Patterns {
    block: Regex,
    assignment: Regex,
}

impl Patterns {
    fn new(layout: &RecordLayout) -> Result<Self, PolarError> {
        let head = format!(
            r"{}\({},\s*",
            regex::escape(&layout.identifier),
            regex::escape(&layout.object.to_string())
        );
        let block = format!(r"(?s){head}{}\)\s*=\s*-?\d+.+?{head}\d+\)\s*=\s*-1\b", layout.start);
        let assignment = format!(r"{head}(\d+)\)\s*=\s*(-?\d+)");

        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| {
                PolarError::InvalidOption(format!("identifier {:?}: {}", layout.identifier, e))
            })
        };
        Ok(Self {
            block: compile(&block)?,
            assignment: compile(&assignment)?,
        })
    }

    /// Slot → value for every assignment in `text`; the first one wins.
    fn slots(&self, text: &str) -> BTreeMap<i64, i64> {
        let mut slots = BTreeMap::new();
        for caps in self.assignment.captures_iter(text) {
            if let (Ok(slot), Ok(value)) = (caps[1].parse::<i64>(), caps[2].parse::<i64>()) {
                slots.entry(slot).or_insert(value);
            }
        }
        slots
    }
}
