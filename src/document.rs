use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::charseq::CharSeq;
use crate::element::Element;

/// Stroke count and element assigned to a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub strokes: u32,
    pub element: Element,
}

/// The lookup document: per-character records plus reverse indexes by stroke
/// count and by element.
///
/// All three maps preserve insertion order, which is the order the output
/// document is written in. Reassigning a character overwrites its record but
/// leaves earlier reverse-index appearances in place; the `characters` map is
/// authoritative for downstream lookups.
#[derive(Debug, Clone)]
pub struct CharacterIndex {
    order: Vec<char>,
    records: HashMap<char, CharacterRecord>,
    stroke_order: Vec<u32>,
    by_strokes: HashMap<u32, CharSeq>,
    by_element: [CharSeq; 5],
}

impl Default for CharacterIndex {
    fn default() -> Self {
        CharacterIndex {
            order: Vec::new(),
            records: HashMap::new(),
            stroke_order: Vec::new(),
            by_strokes: HashMap::new(),
            by_element: std::array::from_fn(|_| CharSeq::new()),
        }
    }
}

impl CharacterIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the stroke group for `strokes` if it does not exist yet.
    pub fn ensure_stroke_group(&mut self, strokes: u32) {
        if !self.by_strokes.contains_key(&strokes) {
            self.stroke_order.push(strokes);
            self.by_strokes.insert(strokes, CharSeq::new());
        }
    }

    /// Records `c` under the given stroke count and element.
    ///
    /// An existing record for `c` is overwritten in place, keeping its
    /// position in the document; the reverse indexes only ever grow, so
    /// earlier appearances of `c` under other groups stay where they are.
    pub fn assign(&mut self, c: char, strokes: u32, element: Element) {
        if self
            .records
            .insert(c, CharacterRecord { strokes, element })
            .is_none()
        {
            self.order.push(c);
        }
        self.ensure_stroke_group(strokes);
        if let Some(group) = self.by_strokes.get_mut(&strokes) {
            group.push(c);
        }
        self.by_element[element.index()].push(c);
    }

    pub fn record(&self, c: char) -> Option<&CharacterRecord> {
        self.records.get(&c)
    }

    /// Number of distinct characters recorded.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Characters with their records, in first-seen order.
    pub fn characters(&self) -> impl Iterator<Item = (char, &CharacterRecord)> + '_ {
        self.order.iter().map(|&c| (c, &self.records[&c]))
    }

    /// Stroke groups in the order their headers were first seen.
    pub fn stroke_groups(&self) -> impl Iterator<Item = (u32, &CharSeq)> + '_ {
        self.stroke_order.iter().map(|&s| (s, &self.by_strokes[&s]))
    }

    pub fn stroke_group(&self, strokes: u32) -> Option<&CharSeq> {
        self.by_strokes.get(&strokes)
    }

    pub fn element_chars(&self, element: Element) -> &CharSeq {
        &self.by_element[element.index()]
    }

    /// Smallest and largest stroke-count keys present, compared numerically.
    ///
    /// `None` when no stroke group exists, so statistics over an empty
    /// document stay well defined.
    pub fn stroke_bounds(&self) -> Option<(u32, u32)> {
        let min = *self.stroke_order.iter().min()?;
        let max = *self.stroke_order.iter().max()?;
        Some((min, max))
    }

    /// Renders the document as a JSON object with the keys `characters`,
    /// `byStrokes` and `byElement`, every map in insertion order and
    /// `byElement` always carrying all five element keys.
    pub fn to_json(&self) -> Value {
        let mut characters = Map::new();
        for (c, record) in self.characters() {
            characters.insert(
                c.to_string(),
                json!({ "strokes": record.strokes, "element": record.element }),
            );
        }

        let mut by_strokes = Map::new();
        for (strokes, group) in self.stroke_groups() {
            by_strokes.insert(strokes.to_string(), char_array(group));
        }

        let mut by_element = Map::new();
        for element in Element::ALL {
            by_element.insert(
                element.symbol().to_string(),
                char_array(self.element_chars(element)),
            );
        }

        json!({
            "characters": characters,
            "byStrokes": by_strokes,
            "byElement": by_element,
        })
    }

    /// Pretty-prints the document to `path` with 2-space indentation,
    /// overwriting any existing file. Characters are written as raw UTF-8,
    /// not ASCII escapes.
    pub fn write_json_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let text = serde_json::to_string_pretty(&self.to_json())?;
        fs::write(path, text).map_err(|e| format!("Cannot write '{}': {}", path.display(), e))?;
        Ok(())
    }
}

fn char_array(seq: &CharSeq) -> Value {
    Value::Array(seq.iter().map(|c| Value::String(c.to_string())).collect())
}
