//! Verse lookup collaborator.
//!
//! The resolver talks to the verse-lookup service through the [`VerseLookup`]
//! capability so it can be tested without network access. [`HttpLookup`] is
//! the real implementation over the lookup HTTP API; [`OfflineLookup`]
//! synthesizes reference-only entries for fast local validation of the
//! citation-recognition logic.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Default verse-lookup endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.lsm.org/recver/txo.php";

const USER_AGENT: &str = concat!("verse-tools/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur during verse lookup.
///
/// Only transport-level failures surface here; a response that cannot be
/// decoded is recovered per citation (see [`VerseLookup::fetch`]).
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("verse lookup request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// One resolved verse: the display reference label and, when fetched, the
/// verse body. `text` is `None` when verse text is intentionally not fetched
/// (offline mode).
#[derive(Debug, Clone, PartialEq)]
pub struct VerseEntry {
    pub reference: String,
    pub text: Option<String>,
}

/// Capability for turning a formatted query string into verse entries.
pub trait VerseLookup {
    /// Returns the ordered verse entries for a query of the shape
    /// `"<book> <chapter>:<verse-spec>"`.
    ///
    /// # Errors
    ///
    /// Fails only on transport-level errors; a malformed response yields an
    /// empty entry list for that citation and the run continues.
    fn fetch(&self, query: &str) -> Result<Vec<VerseEntry>, LookupError>;
}

/// Lookup over the verse-requester HTTP API.
pub struct HttpLookup {
    client: reqwest::blocking::Client,
    endpoint: String,
    credentials: Option<(String, String)>,
}

impl HttpLookup {
    /// Builds a lookup client for the given endpoint, optionally carrying
    /// Basic-auth credentials (app id, token).
    pub fn new(
        endpoint: String,
        credentials: Option<(String, String)>,
    ) -> Result<Self, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            credentials,
        })
    }
}

impl VerseLookup for HttpLookup {
    fn fetch(&self, query: &str) -> Result<Vec<VerseEntry>, LookupError> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&[("String", query), ("Out", "json")]);
        if let Some((app_id, token)) = &self.credentials {
            request = request.basic_auth(app_id, Some(token));
        }

        debug!("fetching verses for '{}'", query);
        let body = request.send()?.error_for_status()?.text()?;
        Ok(parse_verses(&body, query))
    }
}

/// Decodes a lookup response body into verse entries.
///
/// A body that is not valid JSON is a recoverable failure: it is logged and
/// the citation yields no entries. A verse whose text contains the service's
/// "No such verse in" sentinel usually means the query relied on book/chapter
/// context the service does not share; the entry is kept and a warning asks
/// for a fully qualified reference.
fn parse_verses(body: &str, query: &str) -> Vec<VerseEntry> {
    let response: VersesResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(e) => {
            error!("cannot decode response for '{}': {}", query, e);
            return Vec::new();
        }
    };

    let mut entries = Vec::with_capacity(response.verses.len());
    for verse in response.verses {
        if verse.text.contains("No such verse in") {
            warn!(
                "no such verse for '{}'; the reference may need a full book and chapter",
                query
            );
        }
        entries.push(VerseEntry {
            reference: verse.reference,
            text: Some(verse.text),
        });
    }
    entries
}

#[derive(Debug, Deserialize)]
struct VersesResponse {
    verses: Vec<VerseRecord>,
}

#[derive(Debug, Deserialize)]
struct VerseRecord {
    #[serde(rename = "ref")]
    reference: String,
    text: String,
}

/// Lookup that skips fetching entirely and answers with reference-only
/// entries, for validating citation recognition without network access.
pub struct OfflineLookup;

impl VerseLookup for OfflineLookup {
    fn fetch(&self, query: &str) -> Result<Vec<VerseEntry>, LookupError> {
        Ok(vec![VerseEntry {
            reference: query.to_string(),
            text: None,
        }])
    }
}
