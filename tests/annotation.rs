//! End-to-end annotation tests against the library's public API.
//!
//! All tests resolve verses through stub lookups, so they run deterministically
//! without network access.

mod common;

use common::{EchoLookup, SAMPLE_OUTLINE};
use verse_tools::{annotate, OfflineLookup};

#[test]
fn test_scripture_reading_block_order_and_framing() {
    // Given: a labeled header citing a reference and a continuation
    let input = "Scripture Reading: John 3:16; v. 18";

    // When: we annotate it
    let out = annotate(input, &EchoLookup).unwrap();

    // Then: the original line comes first, and the verse block is framed by
    // blank lines with entries in citation order
    assert_eq!(out[0], "Scripture Reading: John 3:16; v. 18");
    assert_eq!(out[1], "");
    assert_eq!(out[2], "John 3:16  John 3:16 => text");
    assert_eq!(out[3], "John 3:18  John 3:18 => text");
    assert_eq!(out[4], "");
    assert_eq!(out.len(), 5);
}

#[test]
fn test_every_line_is_followed_by_a_framed_block() {
    // Given: an outline mixing citation forms and plain prose
    let out = annotate(SAMPLE_OUTLINE, &EchoLookup).unwrap();

    // Then: every original line is preserved verbatim in order
    let originals: Vec<&String> = out
        .iter()
        .filter(|l| !l.is_empty() && !l.contains("=> text"))
        .collect();
    assert_eq!(
        originals,
        vec![
            "Scripture Reading: John 1:1; v. 14",
            "I. In the beginning was the Word - v. 1.",
            "II. The Word became flesh and tabernacled among us (1:14; cf. Exo. 40:34).",
            "III. A line without any citation.",
        ]
    );
}

#[test]
fn test_context_flows_through_the_whole_outline() {
    let out = annotate(SAMPLE_OUTLINE, &EchoLookup).unwrap();

    // The header establishes John 1; the dash continuation and the bare
    // parenthetical chapter:verse both resolve against it
    assert!(out.contains(&"John 1:1  John 1:1 => text".to_string()));
    assert!(out.contains(&"John 1:14  John 1:14 => text".to_string()));
    // The fully qualified parenthetical switches the context to Exodus
    assert!(out.contains(&"Exo. 40:34  Exo. 40:34 => text".to_string()));
}

#[test]
fn test_plain_line_gets_empty_block() {
    let out = annotate("III. A line without any citation.", &EchoLookup).unwrap();

    assert_eq!(
        out,
        vec![
            "III. A line without any citation.".to_string(),
            String::new(),
            String::new(),
        ]
    );
}

#[test]
fn test_blank_input_lines_are_dropped() {
    let input = "Scripture Reading: John 3:16\n\n\nThe next point.\n";

    let out = annotate(input, &EchoLookup).unwrap();

    // No output line corresponds to the blank input lines; the only empty
    // strings are the block frames
    assert_eq!(
        out,
        vec![
            "Scripture Reading: John 3:16".to_string(),
            String::new(),
            "John 3:16  John 3:16 => text".to_string(),
            String::new(),
            "The next point.".to_string(),
            String::new(),
            String::new(),
        ]
    );
}

#[test]
fn test_offline_annotation_joins_references() {
    // Given: the offline lookup, which fetches no verse text
    let input = "Scripture Reading: John 3:16; v. 18";

    // When: we annotate
    let out = annotate(input, &OfflineLookup).unwrap();

    // Then: the block is a single comma-joined reference line
    assert_eq!(
        out,
        vec![
            "Scripture Reading: John 3:16; v. 18".to_string(),
            String::new(),
            "John 3:16, John 3:18".to_string(),
            String::new(),
        ]
    );
}

#[test]
fn test_unresolvable_first_citation_yields_empty_block() {
    // Given: a document whose very first citation omits the book
    let input = "The Spirit gives life (6:63).";

    // When: we annotate
    let out = annotate(input, &EchoLookup).unwrap();

    // Then: the item is skipped (no book was ever established) and the line
    // still carries its empty block frame
    assert_eq!(
        out,
        vec![
            "The Spirit gives life (6:63).".to_string(),
            String::new(),
            String::new(),
        ]
    );
}

#[test]
fn test_dash_line_resolves_against_header_context() {
    let input = "Scripture Reading: Psa. 90:1\nGod is our dwelling place - v. 1.";

    let out = annotate(input, &EchoLookup).unwrap();

    assert!(out.contains(&"Psa. 90:1  Psa. 90:1 => text".to_string()));
    // The continuation on the dash line inherits Psa. 90
    assert_eq!(
        out.iter().filter(|l| *l == "Psa. 90:1  Psa. 90:1 => text").count(),
        2
    );
}
