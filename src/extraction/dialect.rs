//! Input dialect detection.
//!
//! Trip reports arrive in one of two grammars. The grammar is chosen once
//! per input and the matching extractor handles the whole text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The token that opens every block of the marker-block dialect.
pub const BLOCK_MARKER: &str = "【ピノ】";

/// The honorific that marks an employee name line in the plain dialect.
pub const NAME_MARKER: char = '様';

/// One of the recognized input grammars.
///
/// # Example
///
/// ```
/// use pino_expense::extraction::Dialect;
///
/// assert_eq!(Dialect::detect("田中様\n1/5 渋谷→新宿"), Dialect::Plain);
/// assert_eq!(
///     Dialect::detect("【ピノ】田中 1/5(月) (渋谷→新宿) 3.2km"),
///     Dialect::MarkerBlock
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// `<name>様` marker lines followed by `<date> <waypoint>→<waypoint>` lines.
    Plain,
    /// `【ピノ】`-delimited blocks carrying name, date, route and a stated distance.
    MarkerBlock,
}

impl Dialect {
    /// Picks the dialect for a whole input text.
    pub fn detect(text: &str) -> Self {
        if text.contains(BLOCK_MARKER) {
            Dialect::MarkerBlock
        } else {
            Dialect::Plain
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Plain => write!(f, "plain"),
            Dialect::MarkerBlock => write!(f, "marker-block"),
        }
    }
}
