//! verse-tools: CLI for annotating meeting outlines with cited verse text.
//!
//! This library provides functionality to:
//! - Recognize scripture citations in transcript lines
//! - Carry book/chapter context across citations within a document
//! - Fetch verse text through an injectable lookup capability
//! - Assemble the annotated output document

pub mod classifier;
pub mod document;
pub mod grammar;
pub mod lookup;
pub mod resolver;

pub use classifier::{
    extract_citation, find_dash_before_reference, find_references_in_paren,
    SCRIPTURE_READING_LABEL,
};
pub use document::annotate;
pub use grammar::{is_reference, remove_trailing_punctuation, strip_annotations};
pub use lookup::{
    HttpLookup, LookupError, OfflineLookup, VerseEntry, VerseLookup, DEFAULT_ENDPOINT,
};
pub use resolver::{NormalizedReference, ReferenceResolver};
