use crate::domain::{Match, MatchId, UserId};
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Application state: every match the session knows about, plus session
/// fields.
///
/// States are never mutated after construction. A transition builds a new
/// `State`, reusing the `Arc<Match>` of every match it did not touch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    #[serde(serialize_with = "serialize_matches")]
    pub matches: Vec<Arc<Match>>,
    pub current_user_id: Option<UserId>,
    pub current_match_id: Option<MatchId>,
    /// Set when the last trade action was rejected.
    pub error: bool,
}

fn serialize_matches<S: Serializer>(matches: &[Arc<Match>], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(matches.iter().map(|m| m.as_ref()))
}

impl State {
    /// Empty state for a signed-in user.
    pub fn for_user(user_id: impl Into<UserId>) -> Self {
        Self {
            current_user_id: Some(user_id.into()),
            ..Self::default()
        }
    }

    /// State seeded with existing matches.
    pub fn with_matches(matches: impl IntoIterator<Item = Match>) -> Self {
        Self {
            matches: matches.into_iter().map(Arc::new).collect(),
            ..Self::default()
        }
    }

    pub fn get_match(&self, id: &MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| &m.id == id).map(Arc::as_ref)
    }

    /// The match named by `current_match_id`, if it is loaded.
    pub fn current_match(&self) -> Option<&Match> {
        self.current_match_id
            .as_ref()
            .and_then(|id| self.get_match(id))
    }

    /// Copy of this state with `error` set and everything else shared.
    pub(crate) fn rejected(&self) -> Self {
        Self {
            error: true,
            ..self.clone()
        }
    }
}
