//! User record and the bodies of the login/score endpoints

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `users` table.
///
/// Serialized as-is as the `POST /login` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub relation: Option<String>,
    pub visit_count: i64,
    pub high_score: i64,
}

/// POST /login body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub name: Option<String>,
    pub relation: Option<String>,
}

/// POST /update-score body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreUpdateRequest {
    pub name: Option<String>,
    pub score: Option<Score>,
}

/// A submitted score, kept in the JSON form it arrived in.
///
/// Bound to the UPDATE unchanged so the database does the numeric
/// conversion: `50.5` is compared as a double and stored rounded, `"60"` is
/// compared and stored as 60.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Score {
    /// Numeric value used for comparison, as MySQL casts it.
    ///
    /// Text that does not parse as a number compares as 0.
    pub fn as_f64(&self) -> f64 {
        match self {
            Score::Int(v) => *v as f64,
            Score::Float(v) => *v,
            Score::Text(s) => s.trim().parse().unwrap_or(0.0),
        }
    }

    /// Value stored in the INT column, or `None` if text is not numeric.
    pub fn to_column_value(&self) -> Option<f64> {
        match self {
            Score::Text(s) => s.trim().parse::<f64>().ok().map(f64::round),
            other => Some(other.as_f64().round()),
        }
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Score::Int(value)
    }
}

/// POST /update-score response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreAck {
    pub success: bool,
}

impl ScoreAck {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_tolerates_missing_fields() {
        let req: LoginRequest = serde_json::from_str(r#"{"name": "Alice"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("Alice"));
        assert!(req.relation.is_none());

        let req: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_none());
    }

    #[test]
    fn score_keeps_its_json_form() {
        let parse = |body: &str| serde_json::from_str::<ScoreUpdateRequest>(body).unwrap().score;

        assert_eq!(parse(r#"{"score": 50}"#), Some(Score::Int(50)));
        assert_eq!(parse(r#"{"score": 50.5}"#), Some(Score::Float(50.5)));
        assert_eq!(parse(r#"{"score": "60"}"#), Some(Score::Text("60".into())));
        assert_eq!(parse(r#"{"score": null}"#), None);
        assert_eq!(parse(r#"{"name": "Alice"}"#), None);

        assert!(serde_json::from_str::<ScoreUpdateRequest>(r#"{"score": [1]}"#).is_err());
    }

    #[test]
    fn score_converts_like_mysql() {
        assert_eq!(Score::Float(50.5).as_f64(), 50.5);
        assert_eq!(Score::Float(50.5).to_column_value(), Some(51.0));
        assert_eq!(Score::Float(-2.5).to_column_value(), Some(-3.0));
        assert_eq!(Score::Text(" 60 ".into()).as_f64(), 60.0);
        assert_eq!(Score::Text("fifty".into()).as_f64(), 0.0);
        assert_eq!(Score::Text("fifty".into()).to_column_value(), None);
        assert_eq!(Score::from(7).to_column_value(), Some(7.0));
    }

    #[test]
    fn record_serializes_every_column() {
        let record = UserRecord {
            id: 7,
            name: "Alice".into(),
            relation: None,
            visit_count: 3,
            high_score: 120,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "name": "Alice",
                "relation": null,
                "visit_count": 3,
                "high_score": 120
            })
        );
    }

    #[test]
    fn ack_shape() {
        let value = serde_json::to_value(ScoreAck::ok()).unwrap();
        assert_eq!(value, serde_json::json!({ "success": true }));
    }
}
