//! Term search over scanned book text.
//!
//! This module provides exact, case-sensitive term search with location
//! tracking, returning the ISBN, page, and line of each match. Supports:
//! - Substring matching anywhere within a line
//! - Hyphen-join matching for terms split across consecutive lines
//!
//! ## Example
//!
//! ```
//! use scan_search::{Book, Corpus, Matcher, ScannedLine};
//!
//! let corpus = Corpus::new(vec![Book::new(
//!     "Twenty Thousand Leagues Under the Sea",
//!     "9780000528531",
//!     vec![ScannedLine::new(31, 9, "ness was then profound; and however good the Canadian's")],
//! )]);
//!
//! let response = Matcher::search("the", &corpus);
//! for result in &response.results {
//!     println!("found on page {} line {} of {}", result.page, result.line, result.isbn);
//! }
//! ```

mod matcher;

pub use matcher::{Matcher, SearchResponse, SearchResult};
