//! Hyphen-fragment primitives for scanned lines.
//!
//! Printed text splits words across line breaks with a trailing hyphen:
//!
//! - `"now simply went on by her own momentum. The dark-"` (line 8)
//! - `"ness was then profound; and however good the Canadian's"` (line 9)
//!
//! The split word is reconstructed from two pieces: the hyphen-stripped
//! tail token of the first line (`"dark"`) and the leading token of the
//! next (`"ness"`). These helpers extract exactly those pieces; joining
//! and comparing them is the matcher's job.
//!
//! Detection is the literal trailing `-` character only. Scanned text
//! gives no reliable way to tell a line-break hyphen from a compound-word
//! hyphen, so no discrimination is attempted.

/// Extract the carryable hyphen fragment from a line.
///
/// Returns the line's last whitespace-delimited token with its trailing
/// hyphen stripped, when the line ends with `-`. Returns `None` when it
/// does not — including for empty lines and lines whose hyphen is
/// followed by trailing whitespace.
///
/// A line consisting of just `"-"` yields `Some("")`; callers treat an
/// empty fragment as nothing carried.
pub fn trailing_fragment(text: &str) -> Option<&str> {
    if !text.ends_with('-') {
        return None;
    }
    let token = text.split_whitespace().next_back().unwrap_or("");
    Some(token.strip_suffix('-').unwrap_or(token))
}

/// The first whitespace-delimited token of a line.
///
/// Empty and whitespace-only lines yield `""`.
pub fn leading_token(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or("")
}
