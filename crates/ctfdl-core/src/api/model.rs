//! Wire schema and domain records for challenges.
//!
//! Wire structs keep every optional field as `Option`; conversion into the
//! domain records is the single place where placeholders are substituted.

use serde::Deserialize;

pub const UNNAMED_CHALLENGE: &str = "Unnamed Challenge";
pub const UNCATEGORIZED: &str = "Uncategorized";
pub const NO_DESCRIPTION: &str = "No description provided.";

/// `{ "data": ... }` envelope used by every CTFd v1 endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireChallenge {
    pub id: u64,
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub files: Option<Vec<String>>,
}

/// One entry of the challenge list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeSummary {
    pub id: u64,
    pub name: String,
    pub category: String,
}

impl From<WireChallenge> for ChallengeSummary {
    fn from(w: WireChallenge) -> Self {
        Self {
            id: w.id,
            name: w.name.unwrap_or_else(|| UNNAMED_CHALLENGE.to_string()),
            category: w.category.unwrap_or_else(|| UNCATEGORIZED.to_string()),
        }
    }
}

/// Full record for one challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeDetail {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Attached file references, relative or absolute, in server order.
    pub files: Vec<String>,
    /// Built from the summary alone because the detail fetch failed.
    pub degraded: bool,
}

impl From<WireChallenge> for ChallengeDetail {
    fn from(w: WireChallenge) -> Self {
        Self {
            id: w.id,
            name: w.name.unwrap_or_else(|| UNNAMED_CHALLENGE.to_string()),
            category: w.category.unwrap_or_else(|| UNCATEGORIZED.to_string()),
            description: w.description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            files: w.files.unwrap_or_default(),
            degraded: false,
        }
    }
}

impl ChallengeDetail {
    /// Stand-in used when the detail fetch fails: no description, no files.
    pub fn degraded(summary: &ChallengeSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name.clone(),
            category: summary.category.clone(),
            description: NO_DESCRIPTION.to_string(),
            files: Vec::new(),
            degraded: true,
        }
    }

    /// Takes name and category from the summary so on-disk names match the index.
    pub fn with_identity_of(mut self, summary: &ChallengeSummary) -> Self {
        if self.name != summary.name || self.category != summary.category {
            tracing::debug!(
                id = summary.id,
                detail_name = %self.name,
                detail_category = %self.category,
                "detail identity differs from list entry; using list entry"
            );
        }
        self.name = summary.name.clone();
        self.category = summary.category.clone();
        self
    }
}
