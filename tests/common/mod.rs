//! Shared test constants and helpers for integration tests.

use verse_tools::{LookupError, VerseEntry, VerseLookup};

/// A short outline exercising all three citation forms plus plain prose.
#[allow(dead_code)]
pub const SAMPLE_OUTLINE: &str = "\
Scripture Reading: John 1:1; v. 14

I. In the beginning was the Word - v. 1.
II. The Word became flesh and tabernacled among us (1:14; cf. Exo. 40:34).
III. A line without any citation.
";

/// Lookup stub that echoes the query back as the reference label with a
/// synthesized verse body, without touching the network.
///
/// The body format makes assertions self-describing: a query "John 3:16"
/// yields the entry ("John 3:16", "John 3:16 => text").
pub struct EchoLookup;

impl VerseLookup for EchoLookup {
    fn fetch(&self, query: &str) -> Result<Vec<VerseEntry>, LookupError> {
        Ok(vec![VerseEntry {
            reference: query.to_string(),
            text: Some(format!("{} => text", query)),
        }])
    }
}
