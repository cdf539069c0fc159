//! Matcher implementation: one linear scan with carried hyphen state.

use serde::{Deserialize, Serialize};

use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::text::fragment;

/// The location of a single match.
///
/// Identifies the line where the match occurred; it does not carry the
/// matched span or repeat the term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResult {
    /// Identifier of the book the match was found in
    #[serde(rename = "ISBN")]
    pub isbn: String,
    /// Page number of the matching line
    pub page: u32,
    /// Line number of the matching line
    pub line: u32,
}

/// The outcome of one search call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResponse {
    /// The search term, passed through verbatim
    pub search_term: String,
    /// Match locations in scan order (book order, then line order).
    /// A line that matches through both the substring rule and the
    /// hyphen-join rule appears twice, substring first.
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    /// Encode the response as compact JSON for display.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::ResponseEncode(e.to_string()))
    }

    /// Encode the response as pretty-printed JSON for display.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::ResponseEncode(e.to_string()))
    }
}

/// Term matcher for scanned book corpora.
pub struct Matcher;

impl Matcher {
    /// Search for a term in every book of a corpus.
    ///
    /// Matching is exact and case-sensitive, with no normalization of the
    /// term or the scanned text. Two rules apply to each line:
    ///
    /// 1. The line's text contains `term` as a substring. The empty term
    ///    is a substring of every line.
    /// 2. The previous line of the same book ended with a hyphen, and its
    ///    hyphen-stripped tail token joined with this line's leading
    ///    token equals `term` exactly.
    ///
    /// Carried hyphen state never crosses a book boundary, and the input
    /// is never mutated. Any structurally valid corpus produces a
    /// response; there is no error path.
    ///
    /// # Arguments
    ///
    /// * `term` - The term to search for, used verbatim
    /// * `corpus` - The books to scan
    ///
    /// # Returns
    ///
    /// A [`SearchResponse`] with one [`SearchResult`] per rule match, in
    /// scan order.
    pub fn search(term: &str, corpus: &Corpus) -> SearchResponse {
        log::debug!("searching {} book(s) for {:?}", corpus.len(), term);

        let mut results = Vec::new();

        for book in corpus {
            // Tail fragment of the previous line, hyphen stripped.
            // Reset per book: a fragment must never join across books.
            let mut pending = "";

            for line in &book.content {
                if line.text.contains(term) {
                    results.push(SearchResult {
                        isbn: book.isbn.clone(),
                        page: line.page,
                        line: line.line,
                    });
                }

                if !pending.is_empty() {
                    let joined = format!("{}{}", pending, fragment::leading_token(&line.text));
                    if joined == term {
                        log::trace!(
                            "hyphen join {:?} at page {} line {}",
                            joined,
                            line.page,
                            line.line
                        );
                        results.push(SearchResult {
                            isbn: book.isbn.clone(),
                            page: line.page,
                            line: line.line,
                        });
                    }
                }

                pending = fragment::trailing_fragment(&line.text).unwrap_or("");
            }
        }

        log::debug!("search for {:?} matched {} line(s)", term, results.len());

        SearchResponse {
            search_term: term.to_string(),
            results,
        }
    }
}
