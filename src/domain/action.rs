//! Actions: typed descriptions of intended state transitions.
//!
//! Clients submit actions as JSON objects tagged by a `type` field. Parsing
//! happens once, at the dispatch boundary, so the reducer only ever sees
//! well-formed actions. Unknown `type` tags are not an error here; they are
//! carried through as [`Action::Unrecognized`] and the reducer decides.

use crate::domain::{Match, MatchId, Portfolio, UserId};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub const BUY_STOCK: &str = "BUY_STOCK";
pub const SELL_STOCK: &str = "SELL_STOCK";
pub const CREATE_MATCH: &str = "CREATE_MATCH";
pub const JOIN_MATCH: &str = "JOIN_MATCH";

/// Payload of a buy or sell.
///
/// For a buy, `portfolio.stocks` holds only the lots being bought. For a sell
/// it is the complete post-sale holdings list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeOrder {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(rename = "MatchId", alias = "matchId")]
    pub match_id: MatchId,
    pub portfolio: Portfolio,
}

/// Payload of a create or join.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntry {
    pub current_match_id: MatchId,
    #[serde(rename = "match")]
    pub record: Match,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    BuyStock(TradeOrder),
    SellStock(TradeOrder),
    CreateMatch(MatchEntry),
    JoinMatch(MatchEntry),
    /// Any other `type` tag. `trade` is set when the object nonetheless
    /// carries a well-formed trade payload.
    Unrecognized {
        action_type: String,
        trade: Option<TradeOrder>,
    },
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("action must be a JSON object")]
    NotAnObject,
    #[error("action is missing a string `type` field")]
    MissingType,
    #[error("malformed {action_type} action: {reason}")]
    Malformed { action_type: String, reason: String },
}

impl Action {
    /// Parse and validate a raw action object.
    ///
    /// # Errors
    /// Returns an error if the value is not an object, has no `type`, or is a
    /// known action type whose payload is missing fields or violates a
    /// portfolio/match invariant.
    pub fn from_json(value: Value) -> Result<Self, ActionError> {
        let action_type = match &value {
            Value::Object(obj) => obj
                .get("type")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or(ActionError::MissingType)?,
            _ => return Err(ActionError::NotAnObject),
        };

        match action_type.as_str() {
            BUY_STOCK => Ok(Action::BuyStock(parse_trade(&action_type, value)?)),
            SELL_STOCK => Ok(Action::SellStock(parse_trade(&action_type, value)?)),
            CREATE_MATCH => Ok(Action::CreateMatch(parse_entry(&action_type, value)?)),
            JOIN_MATCH => {
                let entry = parse_entry(&action_type, value)?;
                if entry.record.challenger_id.is_none() {
                    return Err(malformed(&action_type, "match.creator_id is required"));
                }
                Ok(Action::JoinMatch(entry))
            }
            _ => {
                let trade = serde_json::from_value::<TradeOrder>(value).ok();
                Ok(Action::Unrecognized { action_type, trade })
            }
        }
    }

    pub fn buy(match_id: impl Into<MatchId>, portfolio: Portfolio) -> Self {
        Action::BuyStock(TradeOrder {
            user_id: None,
            match_id: match_id.into(),
            portfolio,
        })
    }

    pub fn sell(match_id: impl Into<MatchId>, portfolio: Portfolio) -> Self {
        Action::SellStock(TradeOrder {
            user_id: None,
            match_id: match_id.into(),
            portfolio,
        })
    }

    pub fn create_match(record: Match) -> Self {
        Action::CreateMatch(MatchEntry {
            current_match_id: record.id.clone(),
            record,
        })
    }

    pub fn join_match(record: Match) -> Self {
        Action::JoinMatch(MatchEntry {
            current_match_id: record.id.clone(),
            record,
        })
    }

    /// The `type` tag this action was (or would be) submitted with.
    pub fn action_type(&self) -> &str {
        match self {
            Action::BuyStock(_) => BUY_STOCK,
            Action::SellStock(_) => SELL_STOCK,
            Action::CreateMatch(_) => CREATE_MATCH,
            Action::JoinMatch(_) => JOIN_MATCH,
            Action::Unrecognized { action_type, .. } => action_type,
        }
    }
}

fn malformed(action_type: &str, reason: impl Into<String>) -> ActionError {
    ActionError::Malformed {
        action_type: action_type.to_string(),
        reason: reason.into(),
    }
}

fn parse_trade(action_type: &str, value: Value) -> Result<TradeOrder, ActionError> {
    let order: TradeOrder =
        serde_json::from_value(value).map_err(|e| malformed(action_type, e.to_string()))?;
    order
        .portfolio
        .validate()
        .map_err(|reason| malformed(action_type, reason))?;
    Ok(order)
}

fn parse_entry(action_type: &str, value: Value) -> Result<MatchEntry, ActionError> {
    let entry: MatchEntry =
        serde_json::from_value(value).map_err(|e| malformed(action_type, e.to_string()))?;
    entry
        .record
        .validate()
        .map_err(|reason| malformed(action_type, reason))?;
    Ok(entry)
}
