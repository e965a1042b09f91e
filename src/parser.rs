use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::document::CharacterIndex;
use crate::element::Element;
use crate::line::{self, Line};

/// Characters that may appear inside a character run but are never recorded.
const SKIPPED: [char; 4] = ['：', '，', '。', ' '];

/// Errors that can occur while parsing a source listing.
#[derive(Debug)]
pub enum ParseError {
    /// The input file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// An element listing used a symbol outside the five-element set.
    UnknownElement { line: usize, symbol: char },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io { path, source } => {
                write!(f, "Cannot read '{}': {}", path.display(), source)
            }
            ParseError::UnknownElement { line, symbol } => {
                write!(f, "Line {}: unknown element symbol 「{}」", line, symbol)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io { source, .. } => Some(source),
            ParseError::UnknownElement { .. } => None,
        }
    }
}

/// One matched element-listing line, kept for the audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// 1-indexed line number in the source text.
    pub line: usize,
    /// The raw symbol captured between 「」, before element lookup.
    pub symbol: char,
    /// The raw character run following the colon.
    pub run: String,
}

/// A parsed source listing: the populated index plus the per-line audit trail.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub index: CharacterIndex,
    pub listings: Vec<Listing>,
}

/// Reads `path` as UTF-8 text and parses it.
pub fn parse_file(path: &Path) -> Result<ParseOutput, ParseError> {
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&text)
}

/// Parses a source listing.
///
/// The scan keeps one piece of state, the current stroke count, updated by
/// every stroke header (0 until the first header is seen). Element listings
/// assign that count and the listed element to every character in their run;
/// unmatched lines are inert.
pub fn parse_str(text: &str) -> Result<ParseOutput, ParseError> {
    let mut index = CharacterIndex::new();
    let mut listings = Vec::new();
    let mut current_strokes = 0;

    for (line_num, raw) in text.lines().enumerate() {
        let line_num = line_num + 1;
        match line::classify(raw.trim()) {
            Line::StrokeHeader(strokes) => {
                current_strokes = strokes;
                index.ensure_stroke_group(strokes);
            }
            Line::ElementListing { symbol, run } => {
                listings.push(Listing {
                    line: line_num,
                    symbol,
                    run: run.to_string(),
                });
                for c in run.chars() {
                    if SKIPPED.contains(&c) {
                        continue;
                    }
                    // A listing whose run holds no recordable characters
                    // never reaches this lookup, so a stray symbol there
                    // stays harmless.
                    let element = Element::from_symbol(symbol).ok_or(
                        ParseError::UnknownElement {
                            line: line_num,
                            symbol,
                        },
                    )?;
                    index.assign(c, current_strokes, element);
                }
            }
            Line::Other => {}
        }
    }

    Ok(ParseOutput { index, listings })
}
