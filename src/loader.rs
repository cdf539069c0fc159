//! Corpus decoding boundary.
//!
//! The matcher assumes a pre-validated in-memory [`Corpus`]; this module
//! is where raw scanned-text JSON is validated into that shape. Input
//! that does not match the interchange format is rejected here with
//! [`Error::MalformedCorpus`] — it never reaches the matcher.
//!
//! Optional fields are tolerated, not rejected: a book without `Title`
//! decodes with an empty title, and a book without `Content` decodes
//! with no lines.

use std::io::Read;

use crate::corpus::Corpus;
use crate::error::{Error, Result};

/// Decode a corpus from scanned-text interchange JSON.
///
/// The root must be an array of book objects, each carrying an `ISBN`
/// string and (optionally) `Title` and `Content` fields.
///
/// # Errors
///
/// [`Error::MalformedCorpus`] when the JSON does not decode to the
/// interchange shape.
pub fn corpus_from_json(json: &str) -> Result<Corpus> {
    let corpus: Corpus =
        serde_json::from_str(json).map_err(|e| Error::MalformedCorpus(e.to_string()))?;
    log::debug!("decoded corpus with {} book(s)", corpus.len());
    Ok(corpus)
}

/// Decode a corpus from any reader producing interchange JSON.
///
/// # Errors
///
/// [`Error::Io`] when reading fails, [`Error::MalformedCorpus`] when the
/// JSON does not decode to the interchange shape.
pub fn corpus_from_reader<R: Read>(mut reader: R) -> Result<Corpus> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    corpus_from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal_corpus() {
        let corpus = corpus_from_json(
            r#"[{"Title": "T", "ISBN": "123", "Content": [{"Page": 1, "Line": 1, "Text": "x"}]}]"#,
        )
        .unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.books()[0].content[0].text, "x");
    }

    #[test]
    fn test_decode_empty_array() {
        let corpus = corpus_from_json("[]").unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_reject_non_array_root() {
        let err = corpus_from_json(r#"{"ISBN": "123"}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedCorpus(_)));
    }

    #[test]
    fn test_reject_mistyped_page() {
        let err = corpus_from_json(
            r#"[{"ISBN": "123", "Content": [{"Page": "31", "Line": 8, "Text": "x"}]}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::MalformedCorpus(_)));
    }

    #[test]
    fn test_reader_io_error_surfaces() {
        // Invalid UTF-8 makes read_to_string fail before decoding.
        let err = corpus_from_reader(&[0xff, 0xfe][..]).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
