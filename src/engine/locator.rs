use crate::domain::{Match, MatchId};
use std::sync::Arc;

/// Position of the match with id `match_id`, or `None` if it is not loaded.
///
/// Ids are normalised to strings when they are deserialized, so `1` and `"1"`
/// compare equal here.
pub fn find_match_index(matches: &[Arc<Match>], match_id: &MatchId) -> Option<usize> {
    matches.iter().position(|m| &m.id == match_id)
}
