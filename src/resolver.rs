//! Stateful reference resolution.
//!
//! Citations in an outline routinely omit the book or chapter when it has
//! not changed since the previous citation ("John 3:16" followed by "v. 18"
//! or "11:12"). The resolver remembers the last resolved book and chapter
//! for the duration of one document and fills the omitted fields in, across
//! line boundaries.

use tracing::{debug, error};

use crate::grammar::{is_full_reference, is_verse_continuation, strip_annotations};
use crate::lookup::{LookupError, VerseEntry, VerseLookup};

/// A fully qualified (book, chapter, verse-spec) triple with no omitted
/// fields. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedReference {
    pub book: String,
    pub chapter: String,
    pub verse: String,
}

impl NormalizedReference {
    /// Formats the triple as the query string the lookup service expects.
    pub fn query(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// Resolves citation fragments into verse entries, carrying book/chapter
/// context across fragments and lines.
///
/// One instance is scoped to one document-processing run. The state is
/// order-dependent, so an instance must never be shared across documents; a
/// concurrent extension would instantiate one resolver per file.
pub struct ReferenceResolver<'a> {
    lookup: &'a dyn VerseLookup,
    last_book: Option<String>,
    last_chapter: Option<String>,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(lookup: &'a dyn VerseLookup) -> Self {
        Self {
            lookup,
            last_book: None,
            last_chapter: None,
        }
    }

    /// Resolves the citation fragments extracted from one line, in order.
    ///
    /// Each fragment may itself be comma-joined into multiple items sharing
    /// context ("John 3:16-18, 20-22"). Items that cannot be parsed, or that
    /// omit a book/chapter no earlier citation established, are logged and
    /// skipped without aborting the document.
    ///
    /// # Errors
    ///
    /// Fails only when the lookup transport fails; see [`LookupError`].
    pub fn process(&mut self, fragments: &[String]) -> Result<Vec<VerseEntry>, LookupError> {
        let mut entries = Vec::new();
        for fragment in fragments {
            for item in fragment.split(',') {
                let item = item.trim();
                if item.is_empty() {
                    continue;
                }

                let Some(reference) = self.normalize(item) else {
                    continue;
                };

                // Re-confirm continuity even when the fields were inherited.
                self.last_book = Some(reference.book.clone());
                self.last_chapter = Some(reference.chapter.clone());

                debug!("resolving {}", reference.query());
                entries.extend(self.lookup.fetch(&reference.query())?);
            }
        }
        Ok(entries)
    }

    /// Expands one citation item into a fully qualified reference, filling
    /// omitted fields from the resolver state.
    fn normalize(&self, item: &str) -> Option<NormalizedReference> {
        let stripped = strip_annotations(item);
        debug!("normalizing citation item '{}'", stripped);

        let (book, chapter, verse) = if is_verse_continuation(&stripped) {
            // Example: "v. 1", "vv. 1-3" — everything after the marker.
            let (_, verse) = stripped.split_once(' ')?; // the pattern guarantees the space
            (
                self.last_book.clone(),
                self.last_chapter.clone(),
                verse.to_string(),
            )
        } else if is_full_reference(&stripped) {
            let (book, chapter_and_verse) = match stripped.rsplit_once(' ') {
                Some((book, rest)) => (Some(book.to_string()), rest),
                None => (self.last_book.clone(), stripped.as_str()),
            };
            match chapter_and_verse.split_once(':') {
                Some((chapter, verse)) => (book, Some(chapter.to_string()), verse.to_string()),
                None => (
                    book,
                    self.last_chapter.clone(),
                    chapter_and_verse.to_string(),
                ),
            }
        } else {
            error!("cannot parse citation item '{}', skipping", item);
            return None;
        };

        // A query with a blank book or chapter cannot name a real verse, so
        // refuse to inherit from state that was never established.
        let Some(book) = book else {
            error!("no book established before '{}', skipping", item);
            return None;
        };
        let Some(chapter) = chapter else {
            error!("no chapter established before '{}', skipping", item);
            return None;
        };

        Some(NormalizedReference {
            book,
            chapter,
            verse,
        })
    }
}
