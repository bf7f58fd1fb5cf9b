//! Trip entry extraction from free-form report text.
//!
//! The dialect is detected once per input and the matching extractor reads
//! the whole text. Lines or blocks that do not match their dialect are
//! skipped; only empty input or input yielding no entries at all is an
//! error.

mod date;
mod dialect;
mod marker_block;
mod normalize;
mod plain;

pub use date::{month_day, resolve_date};
pub use dialect::{BLOCK_MARKER, Dialect, NAME_MARKER};
pub use marker_block::extract_marker_blocks;
pub use normalize::normalize_width;
pub use plain::extract_plain;

use tracing::info;

use crate::config::ReimbursementConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::TripEntry;

/// The entries read from one input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The dialect the text was read as.
    pub dialect: Dialect,
    /// Recognized entries in source order.
    pub entries: Vec<TripEntry>,
    /// Lines or blocks that were dropped.
    pub skipped: usize,
}

/// Detects the dialect and extracts every recognizable trip entry.
///
/// # Errors
///
/// - [`EngineError::EmptyInput`] when the text is blank.
/// - [`EngineError::NoEntriesRecognized`] when nothing could be extracted.
///
/// # Example
///
/// ```
/// use pino_expense::config::ReimbursementConfig;
/// use pino_expense::extraction::{extract, Dialect};
///
/// let extraction = extract("田中様\n1/5 渋谷→新宿", &ReimbursementConfig::default()).unwrap();
/// assert_eq!(extraction.dialect, Dialect::Plain);
/// assert_eq!(extraction.entries.len(), 1);
/// ```
pub fn extract(text: &str, config: &ReimbursementConfig) -> EngineResult<Extraction> {
    if text.trim().is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let dialect = Dialect::detect(text);
    let extraction = match dialect {
        Dialect::Plain => extract_plain(text, config),
        Dialect::MarkerBlock => extract_marker_blocks(text, config),
    };

    info!(
        dialect = %dialect,
        entries = extraction.entries.len(),
        skipped = extraction.skipped,
        "Extracted trip entries"
    );

    if extraction.entries.is_empty() {
        return Err(EngineError::NoEntriesRecognized { dialect });
    }

    Ok(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ReimbursementConfig {
        ReimbursementConfig::default()
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(extract("", &config()), Err(EngineError::EmptyInput)));
    }

    #[test]
    fn test_whitespace_only_input() {
        assert!(matches!(
            extract("  \n\t\n\u{3000}", &config()),
            Err(EngineError::EmptyInput)
        ));
    }

    #[test]
    fn test_garbage_input() {
        let result = extract("hello\nworld foo\n12345", &config());
        match result {
            Err(EngineError::NoEntriesRecognized { dialect }) => {
                assert_eq!(dialect, Dialect::Plain)
            }
            other => panic!("Expected NoEntriesRecognized, got {:?}", other),
        }
    }

    #[test]
    fn test_marker_blocks_without_matches() {
        let result = extract("【ピノ】よろしくお願いします", &config());
        assert!(matches!(
            result,
            Err(EngineError::NoEntriesRecognized {
                dialect: Dialect::MarkerBlock
            })
        ));
    }

    #[test]
    fn test_malformed_lines_do_not_abort() {
        let extraction = extract("田中様\n???\n1/5 A→B\nx", &config()).unwrap();
        assert_eq!(extraction.entries.len(), 1);
        assert_eq!(extraction.skipped, 2);
    }
}
