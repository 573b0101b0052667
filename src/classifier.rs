//! Line classifier.
//!
//! Decides whether and how a transcript line carries a citation. Three
//! strategies are tried in priority order, each a pure function from line to
//! optional fragment list, and only the first that matches is used:
//!
//! 1. a labeled "Scripture Reading:" header,
//! 2. a trailing dash-introduced citation after descriptive text,
//! 3. parenthetical citations embedded inline.

use regex::Regex;
use tracing::{debug, warn};

use crate::grammar::{is_reference, remove_trailing_punctuation};

/// Label that introduces an explicit scripture-reading header line.
pub const SCRIPTURE_READING_LABEL: &str = "Scripture Reading:";

/// Extracts the citation fragments carried by one line, if any.
///
/// Fragments are the semicolon-delimited units of the citation, trimmed,
/// in source order. A line matching no strategy returns `None` and should
/// pass through unchanged.
///
/// # Examples
///
/// ```
/// use verse_tools::extract_citation;
///
/// let fragments = extract_citation("Scripture Reading: John 3:16; v. 18");
/// assert_eq!(fragments, Some(vec!["John 3:16".to_string(), "v. 18".to_string()]));
///
/// assert_eq!(extract_citation("A line without any citation."), None);
/// ```
pub fn extract_citation(line: &str) -> Option<Vec<String>> {
    scripture_reading_fragments(line)
        .or_else(|| trailing_dash_fragments(line))
        .or_else(|| parenthetical_fragments(line))
}

/// Strategy 1: the line begins with the literal "Scripture Reading:" label.
fn scripture_reading_fragments(line: &str) -> Option<Vec<String>> {
    let rest = line.strip_prefix(SCRIPTURE_READING_LABEL)?;
    let fragments: Vec<String> = rest.trim().split(';').map(|f| f.trim().to_string()).collect();
    debug!("scripture reading fragments: {:?}", fragments);
    Some(fragments)
}

/// Strategy 2: a citation appended to descriptive prose with a dash.
fn trailing_dash_fragments(line: &str) -> Option<Vec<String>> {
    let stripped = remove_trailing_punctuation(line);
    let dash = find_dash_before_reference(line)?;
    let citation = stripped[dash + 1..].trim();
    Some(citation.split(';').map(|f| f.trim().to_string()).collect())
}

/// Strategy 3: one or more parenthetical citations embedded in the line.
fn parenthetical_fragments(line: &str) -> Option<Vec<String>> {
    let references = find_references_in_paren(line);
    if references.is_empty() {
        None
    } else {
        Some(references)
    }
}

/// Finds the dash that separates descriptive text from a trailing citation.
///
/// Prose may itself contain dashes, so every dash position is tried left to
/// right and the candidate right-hand side is only accepted when all of its
/// semicolon-separated parts satisfy [`is_reference`]. The returned index is
/// relative to the line after [`remove_trailing_punctuation`].
///
/// Example line:
///
/// ```text
/// The Lord is the word of God. - John 1:1
/// ```
pub fn find_dash_before_reference(line: &str) -> Option<usize> {
    let line = remove_trailing_punctuation(line);
    if !line.contains('-') {
        return None;
    }
    for (idx, _) in line.match_indices('-') {
        let candidate = line[idx + 1..].trim();
        let parts: Vec<&str> = candidate.split("; ").collect();
        debug!("maybe a reference: {:?}", parts);
        if parts.iter().all(|part| is_reference(part)) {
            debug!("found a reference after dash: {:?}", parts);
            return Some(idx);
        }
    }
    None
}

/// Finds the valid references inside parenthetical groups.
///
/// Each `(...)` group's interior is split on `"; "`; only the parts that
/// independently satisfy [`is_reference`] are kept. A parenthetical with no
/// valid part contributes nothing.
///
/// Example line:
///
/// ```text
/// The Lord is the word of God (John 1:1-2).
/// ```
pub fn find_references_in_paren(line: &str) -> Vec<String> {
    let re = Regex::new(r"\(([^)]+)\)").unwrap();

    let mut result = Vec::new();
    for cap in re.captures_iter(line) {
        let in_paren = cap.get(1).unwrap().as_str().trim();
        debug!("found parenthetical: {}", in_paren);
        for part in in_paren.split("; ") {
            if is_reference(part) {
                debug!("found a reference in parentheses: {}", part);
                result.push(part.to_string());
            } else {
                warn!("not a reference in parentheses: {}", part);
            }
        }
    }
    result
}
