use serde::{Deserialize, Serialize};

/// One of the five traditional elemental classes (五行) assigned per character
/// by the source text.
///
/// The set is closed: every element-listing line names one of these five, and
/// the output document always carries all five keys in `ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "水")]
    Water,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
}

impl Element {
    /// All five elements in the fixed output order.
    pub const ALL: [Element; 5] = [
        Element::Metal,
        Element::Wood,
        Element::Water,
        Element::Fire,
        Element::Earth,
    ];

    /// The symbol used for this element in the source text and the output.
    pub fn symbol(&self) -> char {
        match self {
            Element::Metal => '金',
            Element::Wood => '木',
            Element::Water => '水',
            Element::Fire => '火',
            Element::Earth => '土',
        }
    }

    /// Looks up an element by its symbol.
    ///
    /// Returns `None` for any character outside the fixed set.
    pub fn from_symbol(c: char) -> Option<Element> {
        match c {
            '金' => Some(Element::Metal),
            '木' => Some(Element::Wood),
            '水' => Some(Element::Water),
            '火' => Some(Element::Fire),
            '土' => Some(Element::Earth),
            _ => None,
        }
    }

    // Position in `ALL`, used for the fixed-size by-element storage.
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
