//! # Scan Search
//!
//! Hyphenation-aware term search over scanned book text.
//!
//! Scanned books arrive as ordered line records, each carrying the page
//! and line number where the text was read. Printed text breaks words
//! across lines with a trailing hyphen (`"The dark-"` / `"ness was then
//! profound"`), so a naive substring scan misses any term that was split
//! by the scanner's line boundaries. This crate reconstructs those words
//! on the fly: while scanning each book it carries the hyphen-stripped
//! tail of the previous line and joins it with the head of the current
//! one, reporting a match when the joined word equals the search term.
//!
//! ## Core Features
//!
//! - **Exact substring search**: case-sensitive, anywhere in a line
//! - **Hyphen-join search**: terms split across consecutive lines are
//!   reassembled before matching, with O(1) carried state
//! - **Structured results**: every match names the book's ISBN plus the
//!   page and line where it occurred, in scan order
//! - **JSON boundary**: decode a corpus from the scanned-text
//!   interchange format and encode responses back to it
//!
//! ## Quick Start
//!
//! ```
//! use scan_search::{Book, Corpus, Matcher, ScannedLine};
//!
//! let corpus = Corpus::new(vec![Book::new(
//!     "Twenty Thousand Leagues Under the Sea",
//!     "9780000528531",
//!     vec![
//!         ScannedLine::new(31, 8, "now simply went on by her own momentum. The dark-"),
//!         ScannedLine::new(31, 9, "ness was then profound; and however good the Canadian's"),
//!     ],
//! )]);
//!
//! // "darkness" never appears on a single line, but the trailing
//! // fragment of line 8 joined with the head of line 9 produces it.
//! let response = Matcher::search("darkness", &corpus);
//! assert_eq!(response.results.len(), 1);
//! assert_eq!(response.results[0].page, 31);
//! assert_eq!(response.results[0].line, 9);
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Data model
pub mod corpus;

// Line-level text primitives
pub mod text;

// Term matching
pub mod search;

// Corpus decoding / response encoding boundary
pub mod loader;

pub use corpus::{Book, Corpus, ScannedLine};
pub use error::{Error, Result};
pub use loader::{corpus_from_json, corpus_from_reader};
pub use search::{Matcher, SearchResponse, SearchResult};
