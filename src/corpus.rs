//! Data model for scanned book text.
//!
//! A [`Corpus`] is the full collection of books submitted to a single
//! search call: each [`Book`] carries its scanned text as an ordered
//! sequence of [`ScannedLine`] records. Line order is exactly the order
//! the scanner produced — it defines which line is "previous" for
//! hyphen joining and is never re-sorted by page or line number.
//!
//! Field names map to the PascalCase keys of the scanned-text JSON
//! interchange format (`Title`, `ISBN`, `Content`, `Page`, `Line`,
//! `Text`).

use serde::{Deserialize, Serialize};

/// An ordered collection of scanned books.
///
/// Serializes as a bare JSON array of books, matching the interchange
/// format's root shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    books: Vec<Book>,
}

impl Corpus {
    /// Create a corpus from an ordered list of books.
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// The books in submission order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books in the corpus.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the corpus contains no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterate over the books in submission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }
}

impl From<Vec<Book>> for Corpus {
    fn from(books: Vec<Book>) -> Self {
        Self::new(books)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

/// A single scanned book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    /// Human-readable title. Informational only; matching never reads it
    /// and the interchange format may omit it.
    #[serde(default)]
    pub title: String,

    /// Unique book identifier, treated as an opaque string.
    #[serde(rename = "ISBN")]
    pub isbn: String,

    /// Scanned lines in reading order. May be empty.
    #[serde(default)]
    pub content: Vec<ScannedLine>,
}

impl Book {
    /// Create a book from its title, ISBN, and scanned content.
    pub fn new(
        title: impl Into<String>,
        isbn: impl Into<String>,
        content: Vec<ScannedLine>,
    ) -> Self {
        Self {
            title: title.into(),
            isbn: isbn.into(),
            content,
        }
    }
}

/// One line of scanned text with its location on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScannedLine {
    /// Page number the line was scanned from.
    pub page: u32,

    /// Line number within the page.
    pub line: u32,

    /// The scanned text, verbatim.
    pub text: String,
}

impl ScannedLine {
    /// Create a scanned line record.
    pub fn new(page: u32, line: u32, text: impl Into<String>) -> Self {
        Self {
            page,
            line,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_iteration_order() {
        let corpus = Corpus::new(vec![
            Book::new("A", "111", vec![]),
            Book::new("B", "222", vec![]),
        ]);
        let isbns: Vec<&str> = corpus.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(isbns, ["111", "222"]);
        assert_eq!(corpus.len(), 2);
        assert!(!corpus.is_empty());
    }

    #[test]
    fn test_book_deserializes_without_title() {
        let book: Book = serde_json::from_str(r#"{"ISBN": "9780000528531", "Content": []}"#)
            .expect("title should be optional");
        assert_eq!(book.title, "");
        assert_eq!(book.isbn, "9780000528531");
    }

    #[test]
    fn test_book_deserializes_without_content() {
        let book: Book = serde_json::from_str(r#"{"Title": "Empty", "ISBN": "0000000000"}"#)
            .expect("content should be optional");
        assert!(book.content.is_empty());
    }

    #[test]
    fn test_line_serializes_with_pascal_case_keys() {
        let line = ScannedLine::new(31, 8, "The dark-");
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["Page"], 31);
        assert_eq!(json["Line"], 8);
        assert_eq!(json["Text"], "The dark-");
    }
}
