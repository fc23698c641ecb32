//! Match record: one trading competition and its portfolio.

use crate::domain::{Decimal, MatchId, Portfolio, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Progress,
    Completed,
}

/// Number of participants in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    #[serde(rename = "solo")]
    Solo,
    #[serde(rename = "head-to-head", alias = "head")]
    HeadToHead,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Pending => write!(f, "pending"),
            MatchStatus::Progress => write!(f, "progress"),
            MatchStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A single trading competition between one or two participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(alias = "m_id", alias = "MatchId")]
    pub id: MatchId,
    /// The user who created the match.
    #[serde(default, alias = "creator_id")]
    pub challenger_id: Option<UserId>,
    #[serde(default, alias = "challengee")]
    pub challengee_id: Option<UserId>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(alias = "starting_funds")]
    pub starting_funds: Decimal,
    pub status: MatchStatus,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    #[serde(default)]
    pub winner: Option<UserId>,
    pub portfolio: Portfolio,
}

impl Match {
    /// A pending solo match funded with `starting_funds` in cash.
    pub fn solo(id: impl Into<MatchId>, challengee: impl Into<UserId>, starting_funds: Decimal) -> Self {
        Self {
            id: id.into(),
            challenger_id: None,
            challengee_id: Some(challengee.into()),
            start_date: None,
            end_date: None,
            starting_funds,
            status: MatchStatus::Pending,
            match_type: MatchType::Solo,
            winner: None,
            portfolio: Portfolio::opening(starting_funds),
        }
    }

    /// Returns a copy of this match carrying `portfolio`.
    pub fn with_portfolio(&self, portfolio: Portfolio) -> Self {
        Self {
            portfolio,
            ..self.clone()
        }
    }

    /// Check field-level invariants of a match arriving from a client.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.as_str().is_empty() {
            return Err("match id must not be empty".to_string());
        }
        if self.starting_funds.is_negative() {
            return Err(format!(
                "starting funds must be non-negative, got {}",
                self.starting_funds
            ));
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err("end date must not precede start date".to_string());
            }
        }
        self.portfolio.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_match_accepts_legacy_field_names() {
        let m: Match = serde_json::from_value(json!({
            "m_id": "456",
            "challengee": "123",
            "startDate": "2026-01-01T00:00:00Z",
            "endDate": "2027-01-01T00:00:00Z",
            "starting_funds": "1000000",
            "status": "progress",
            "type": "solo",
            "winner": null,
            "portfolio": {
                "stocks": [],
                "totalValue": "1000000",
                "available_cash": "1000000"
            }
        }))
        .unwrap();

        assert_eq!(m.id, MatchId::new("456"));
        assert_eq!(m.challengee_id, Some(UserId::new("123")));
        assert_eq!(m.challenger_id, None);
        assert_eq!(m.status, MatchStatus::Progress);
        assert_eq!(m.match_type, MatchType::Solo);
        assert_eq!(m.starting_funds, Decimal::from(1000000));
        assert!(m.validate().is_ok());
    }

    #[test]
    fn test_match_accepts_numeric_id_and_head_type() {
        let m: Match = serde_json::from_value(json!({
            "MatchId": 1,
            "creator_id": "234",
            "challengee": "123",
            "starting_funds": "1000000",
            "status": "progress",
            "type": "head",
            "winner": null,
            "portfolio": {"available_cash": 100000, "totalValue": 100000}
        }))
        .unwrap();

        assert_eq!(m.id, MatchId::new("1"));
        assert_eq!(m.challenger_id, Some(UserId::new("234")));
        assert_eq!(m.match_type, MatchType::HeadToHead);
    }

    #[test]
    fn test_match_serializes_canonical_names() {
        let m = Match::solo("7", "123", Decimal::from(1000));
        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["id"], "7");
        assert_eq!(value["challengeeId"], "123");
        assert_eq!(value["startingFunds"], "1000");
        assert_eq!(value["type"], "solo");
        assert_eq!(value["status"], "pending");
    }

    #[test]
    fn test_validate_rejects_inverted_dates() {
        let mut m = Match::solo("7", "123", Decimal::from(1000));
        m.start_date = Some("2027-01-01T00:00:00Z".parse().unwrap());
        m.end_date = Some("2026-01-01T00:00:00Z".parse().unwrap());
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_with_portfolio_keeps_other_fields() {
        let m = Match::solo("7", "123", Decimal::from(1000));
        let updated = m.with_portfolio(Portfolio::opening(Decimal::from(5)));
        assert_eq!(updated.id, m.id);
        assert_eq!(updated.starting_funds, m.starting_funds);
        assert_eq!(updated.portfolio.available_cash, Decimal::from(5));
    }
}
