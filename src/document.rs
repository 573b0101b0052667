//! Document assembly.
//!
//! Drives the classifier and resolver over every line of input and
//! reconstructs the output text, interleaving original lines with resolved
//! verse blocks.

use crate::classifier::extract_citation;
use crate::lookup::{LookupError, VerseLookup};
use crate::resolver::ReferenceResolver;

/// Annotates a transcript with the text of the verses it cites.
///
/// Blank and whitespace-only input lines are dropped. Every other line is
/// preserved verbatim and immediately followed by a blank line, its resolved
/// verse block (zero or more lines), and another blank line. Fetched entries
/// are formatted as `"<reference>  <text>"`, one per line; reference-only
/// entries (offline mode) are comma-joined on a single line.
///
/// Book/chapter context carries across lines: a later line's bare "11:12"
/// resolves using a book established several lines earlier.
///
/// # Errors
///
/// Fails only when the lookup transport fails; item-level problems are
/// logged and skipped.
pub fn annotate(input: &str, lookup: &dyn VerseLookup) -> Result<Vec<String>, LookupError> {
    let mut resolver = ReferenceResolver::new(lookup);
    let mut out = Vec::new();

    for line in input.lines() {
        if line.trim().is_empty() {
            continue;
        }
        out.push(line.to_string());

        let entries = match extract_citation(line) {
            Some(fragments) => resolver.process(&fragments)?,
            None => Vec::new(),
        };

        out.push(String::new());
        let mut unfetched: Vec<String> = Vec::new();
        for entry in entries {
            match entry.text {
                Some(text) => out.push(format!("{}  {}", entry.reference, text)),
                None => unfetched.push(entry.reference),
            }
        }
        if !unfetched.is_empty() {
            out.push(unfetched.join(", "));
        }
        out.push(String::new());
    }

    Ok(out)
}
