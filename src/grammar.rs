//! Scripture citation grammar.
//!
//! Recognizes citation strings in the two shapes that appear in meeting
//! outlines: a full or partial reference ("John 3:16-18", "11:12", "11")
//! and the verse-continuation shorthand ("v. 11", "vv. 16-18, 20-22").
//!
//! All matching is anchored over the whole string, never substring search,
//! so prose that merely contains digits or colons does not qualify.

use regex::Regex;

/// Removes annotation markers that appear inside otherwise-valid citations.
///
/// Strips the cross-reference marker "cf." and truncates everything from
/// ", footnote" onward, then trims surrounding whitespace.
///
/// # Examples
///
/// ```
/// use verse_tools::strip_annotations;
///
/// assert_eq!(strip_annotations("cf. Matt. 3:16-18"), "Matt. 3:16-18");
/// assert_eq!(strip_annotations("Matt. 3:16-18, footnote 1"), "Matt. 3:16-18");
/// ```
pub fn strip_annotations(text: &str) -> String {
    let cleaned = text.replace("cf.", "");
    let cleaned = cleaned.trim();
    match cleaned.split_once(", footnote") {
        Some((kept, _)) => kept.trim().to_string(),
        None => cleaned.to_string(),
    }
}

/// Strips trailing sentence punctuation (and surrounding whitespace) from a
/// line. Idempotent; punctuation inside the line is left alone.
pub fn remove_trailing_punctuation(line: &str) -> &str {
    line.trim().trim_end_matches(['.', '?', '!', ':', ',', ';'])
}

/// Returns true if the candidate fully matches the full/partial reference
/// pattern: an optional leading digit (for books like "1 John"), an optional
/// capitalized book token that may end in a period, then chapter/verse
/// digits with ranges and lists.
///
/// The candidate must already be free of annotations (see
/// [`strip_annotations`]).
pub fn is_full_reference(candidate: &str) -> bool {
    let re = Regex::new(r"^(?:(?:[0-9] )?[A-Z][a-z]+\.? )?[0-9a-d:\-, ]+$").unwrap();
    re.is_match(candidate)
}

/// Returns true if the candidate fully matches the verse-continuation
/// shorthand: "v." or "vv." followed by verse numbers, ranges, and lists.
pub fn is_verse_continuation(candidate: &str) -> bool {
    let re = Regex::new(r"^(?:v\.|vv\.) [0-9a-d\-, ]+$").unwrap();
    re.is_match(candidate)
}

/// Decides whether a string is a well-formed scripture citation.
///
/// The string is preprocessed with [`strip_annotations`] and then matched
/// against both citation patterns; either one qualifies.
///
/// # Examples
///
/// ```
/// use verse_tools::is_reference;
///
/// assert!(is_reference("John 3:16-18"));
/// assert!(is_reference("vv. 16, 18"));
/// assert!(!is_reference("John3:16-18"));
/// ```
pub fn is_reference(text: &str) -> bool {
    let candidate = strip_annotations(text);
    is_full_reference(&candidate) || is_verse_continuation(&candidate)
}
