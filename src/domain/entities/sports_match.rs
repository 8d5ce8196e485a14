//! # Match Entity
//!
//! A single sports match and its running statistics.
//!
//! The JSON shape is part of the public API: field names are camelCase, the
//! counters are left out when zero and `extraTime` is left out when false.
//! Every field is optional on input: a missing or `null` field decodes as its
//! zero value. [`Match::from_json_slice`] additionally matches keys without
//! regard to case and reads only the first JSON value of a body.
//!
//! # Examples
//!
//! ```
//! use match_tracker::domain::entities::Match;
//!
//! let fixture = Match::new("Boca Juniors", "River Plate", "2024-05-26");
//! let json = serde_json::to_value(&fixture).unwrap();
//!
//! assert_eq!(json["homeTeam"], "Boca Juniors");
//! assert!(json.get("goalCount").is_none());
//! ```

use crate::domain::value_objects::{MatchEvent, MatchId};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Wire names of every [`Match`] field.
const FIELD_NAMES: [&str; 8] = [
    "id",
    "homeTeam",
    "awayTeam",
    "matchDate",
    "goalCount",
    "yellowCards",
    "redCards",
    "extraTime",
];

/// A sports match record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Match {
    /// Repository-assigned identifier. Ignored on input.
    #[serde(deserialize_with = "null_as_default")]
    pub id: MatchId,
    /// Home side.
    #[serde(deserialize_with = "null_as_default")]
    pub home_team: String,
    /// Away side.
    #[serde(deserialize_with = "null_as_default")]
    pub away_team: String,
    /// Free-form match date; not validated.
    #[serde(deserialize_with = "null_as_default")]
    pub match_date: String,
    /// Goals scored so far.
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_as_default")]
    pub goal_count: u32,
    /// Yellow cards shown so far.
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_as_default")]
    pub yellow_cards: u32,
    /// Red cards shown so far.
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_as_default")]
    pub red_cards: u32,
    /// Whether the match has gone into extra time.
    #[serde(skip_serializing_if = "is_false", deserialize_with = "null_as_default")]
    pub extra_time: bool,
}

impl Match {
    /// Creates a match with zeroed statistics and an unassigned id.
    #[must_use]
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        match_date: impl Into<String>,
    ) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            match_date: match_date.into(),
            ..Self::default()
        }
    }

    /// Returns this match carrying the given id.
    #[must_use]
    pub fn with_id(mut self, id: MatchId) -> Self {
        self.id = id;
        self
    }

    /// Records a statistic change on this match.
    pub fn record(&mut self, event: MatchEvent) {
        event.apply(self);
    }

    /// Decodes a request body into a match.
    ///
    /// Only the first JSON value is read; anything after it is ignored. A
    /// bare `null` yields [`Match::default`]. Object keys are matched to
    /// field names case-insensitively, an exact match taking precedence,
    /// and a later duplicate key overwriting an earlier one.
    ///
    /// # Errors
    ///
    /// Returns the decoder error for an empty body, a syntax error in the
    /// first value, a non-object value, or a field of the wrong type.
    ///
    /// # Examples
    ///
    /// ```
    /// use match_tracker::domain::entities::Match;
    ///
    /// let m = Match::from_json_slice(br#"{"HomeTeam":"A","goalCount":null} trailing"#).unwrap();
    /// assert_eq!(m.home_team, "A");
    /// assert_eq!(m.goal_count, 0);
    /// ```
    pub fn from_json_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Value>();
        let Some(first) = values.next() else {
            // Empty or whitespace-only body: let the decoder report EOF.
            return serde_json::from_slice(body);
        };
        match first? {
            Value::Null => Ok(Self::default()),
            Value::Object(fields) => Self::deserialize(Value::Object(fold_field_names(fields))),
            other => Self::deserialize(other),
        }
    }
}

fn fold_field_names(fields: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::new();
    for (key, value) in fields {
        let name = FIELD_NAMES
            .iter()
            .find(|name| **name == key)
            .or_else(|| FIELD_NAMES.iter().find(|name| name.eq_ignore_ascii_case(&key)));
        if let Some(name) = name {
            folded.insert((*name).to_string(), value);
        }
    }
    folded
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} vs {} ({})",
            self.id, self.home_team, self.away_team, self.match_date
        )
    }
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

fn is_false(value: &bool) -> bool {
    !*value
}
