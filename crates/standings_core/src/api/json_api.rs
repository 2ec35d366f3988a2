//! JSON API for standings calculation
//!
//! String in, string out, so the engine can be driven from any host that
//! speaks JSON (admin back-end, scripts, the CLI).

use crate::engine::{StandingsCalculator, StandingsConfig, StandingsTable, TableRow};
use crate::error::StandingsError;
use crate::models::{Fixture, MatchScore, ScoringRule, StandingStats, Sport};
use chrono::{DateTime, Utc};
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

/// Request/response schema version
pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MatchRequest {
    pub schema_version: u8,
    /// Free-text sport name, case-insensitive.
    pub sport: String,
    pub home_score: u32,
    pub away_score: u32,
    #[serde(default)]
    pub has_overtime: bool,
    #[serde(default)]
    pub has_penalties: bool,
    /// Overrides `STANDINGS_CONFIG_PATH` / defaults for this call.
    #[serde(default)]
    pub config: Option<StandingsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub schema_version: u8,
    /// Canonical sport name, or the request's name when it is not catalogued.
    pub sport: String,
    pub rule: ScoringRule,
    pub home: StandingStats,
    pub away: StandingStats,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TableRequest {
    pub schema_version: u8,
    pub sport: String,
    pub fixtures: Vec<Fixture>,
    #[serde(default)]
    pub config: Option<StandingsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableResponse {
    pub schema_version: u8,
    pub sport: String,
    pub rule: ScoringRule,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<TableRow>,
}

/// Compute the standings delta for one finished match.
pub fn calculate_match_json(request_json: &str) -> Result<String, String> {
    let request: MatchRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    let calculator = calculator_for(&request.sport, request.config)?;
    let score = MatchScore {
        home_score: request.home_score,
        away_score: request.away_score,
        has_overtime: request.has_overtime,
        has_penalties: request.has_penalties,
    };

    let rule = calculator
        .rule_for(&request.sport)
        .map_err(|e| report_failure(&request.sport, e))?;
    let delta = calculator
        .calculate_for_rule(rule, &score)
        .map_err(|e| report_failure(&request.sport, e))?;

    debug!(sport = %request.sport, %rule, "match delta computed");

    let response = MatchResponse {
        schema_version: SCHEMA_VERSION,
        sport: canonical_sport(&request.sport),
        rule,
        home: delta.home,
        away: delta.away,
    };

    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}

/// Build a ranked standings table from a list of fixtures.
pub fn build_table_json(request_json: &str) -> Result<String, String> {
    let request: TableRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    let calculator = calculator_for(&request.sport, request.config)?;
    let table = StandingsTable::from_fixtures(&request.sport, calculator, &request.fixtures)
        .map_err(|e| report_failure(&request.sport, e))?;

    debug!(
        sport = %request.sport,
        clubs = table.len(),
        fixtures = request.fixtures.len(),
        "standings table built"
    );

    let response = TableResponse {
        schema_version: SCHEMA_VERSION,
        sport: canonical_sport(&request.sport),
        rule: table.rule(),
        generated_at: Utc::now(),
        rows: table.rows(),
    };

    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}

/// JSON Schemas of the two request types, keyed `match_request` and `table_request`.
pub fn request_schema_json() -> Result<String, String> {
    let schemas = serde_json::json!({
        "match_request": schema_for!(MatchRequest),
        "table_request": schema_for!(TableRequest),
    });
    serde_json::to_string_pretty(&schemas).map_err(|e| format!("Failed to serialize schema: {}", e))
}

fn calculator_for(
    sport: &str,
    config: Option<StandingsConfig>,
) -> Result<StandingsCalculator, String> {
    let config = match config {
        Some(config) => config.validate().map(|_| config),
        None => StandingsConfig::from_env(),
    }
    .map_err(|e| report_failure(sport, e))?;
    Ok(StandingsCalculator::new(config))
}

// Bad requests are the caller's problem; anything else is ours.
fn report_failure(sport: &str, e: StandingsError) -> String {
    if e.is_input_error() {
        warn!(sport, error = %e, "request rejected");
    } else {
        error!(sport, error = %e, "standings request failed");
    }
    e.to_string()
}

fn canonical_sport(name: &str) -> String {
    Sport::from_name(name)
        .map(|sport| sport.name().to_string())
        .unwrap_or_else(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::env_lock;
    use jsonschema::JSONSchema;

    #[test]
    fn basketball_request_round_trip() {
        let _env = env_lock();
        let response = calculate_match_json(
            r#"{"schema_version":1,"sport":"Basketball","home_score":70,"away_score":65}"#,
        )
        .unwrap();
        let response: MatchResponse = serde_json::from_str(&response).unwrap();
        assert_eq!(response.rule, ScoringRule::Basketball);
        assert_eq!(response.sport, "basketball");
        assert_eq!(response.home.points, 2);
        assert_eq!(response.away.points, 1);
        assert_eq!(response.away.losses, 1);
    }

    #[test]
    fn uncatalogued_sport_keeps_its_name() {
        let _env = env_lock();
        let response = calculate_match_json(
            r#"{"schema_version":1,"sport":"Chess","home_score":1,"away_score":0}"#,
        )
        .unwrap();
        let response: MatchResponse = serde_json::from_str(&response).unwrap();
        assert_eq!(response.sport, "Chess");
        assert_eq!(response.rule, ScoringRule::General);
        assert_eq!(response.home.points, 3);
    }

    #[test]
    fn request_config_overrides_defaults() {
        let err = calculate_match_json(
            r#"{"schema_version":1,"sport":"volleyball","home_score":2,"away_score":2,
                "config":{"tie_policy":"reject"}}"#,
        )
        .unwrap_err();
        assert!(err.contains("Draw not allowed"), "{}", err);
    }

    #[test]
    fn invalid_request_config_is_rejected() {
        let err = calculate_match_json(
            r#"{"schema_version":1,"sport":"football","home_score":2,"away_score":2,
                "config":{"points":{"general":{"win":0}}}}"#,
        )
        .unwrap_err();
        assert!(err.starts_with("Invalid config"), "{}", err);
    }

    #[test]
    fn wrong_schema_version_is_rejected() {
        let err = calculate_match_json(
            r#"{"schema_version":2,"sport":"football","home_score":1,"away_score":0}"#,
        )
        .unwrap_err();
        assert_eq!(err, "Unsupported schema version: 2");
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = build_table_json("{not json").unwrap_err();
        assert!(err.starts_with("Invalid JSON request"));
    }

    #[test]
    fn table_request_ranks_clubs() {
        let _env = env_lock();
        let request = r#"{
            "schema_version": 1,
            "sport": "ice hockey",
            "fixtures": [
                {"home_club": "Sharks", "away_club": "Kings",
                 "home_score": 3, "away_score": 2, "has_overtime": true},
                {"home_club": "Kings", "away_club": "Ducks", "home_score": 4, "away_score": 0},
                {"home_club": "Ducks", "away_club": "Sharks",
                 "home_score": 1, "away_score": 0, "status": "scheduled"}
            ]
        }"#;
        let response: TableResponse =
            serde_json::from_str(&build_table_json(request).unwrap()).unwrap();

        assert_eq!(response.rule, ScoringRule::IceHockey);
        let clubs: Vec<&str> = response.rows.iter().map(|r| r.club.as_str()).collect();
        // Kings 3 pts (+3), Sharks 2 pts (+1), Ducks 0 pts
        assert_eq!(clubs, vec!["Kings", "Sharks", "Ducks"]);
        assert_eq!(response.rows[0].stats.overtime_losses, 1);
        assert_eq!(response.rows[2].stats.played, 1);
    }

    #[test]
    fn huge_scores_do_not_overflow_the_table() {
        let request = r#"{
            "schema_version": 1,
            "sport": "football",
            "config": {},
            "fixtures": [
                {"home_club": "A", "away_club": "B", "home_score": 3000000000, "away_score": 0},
                {"home_club": "A", "away_club": "C", "home_score": 3000000000, "away_score": 0}
            ]
        }"#;
        let response: TableResponse =
            serde_json::from_str(&build_table_json(request).unwrap()).unwrap();
        assert_eq!(response.rows[0].club, "A");
        assert_eq!(response.rows[0].stats.goals_for, u32::MAX);
        assert_eq!(response.rows[0].stats.points, 6);
    }

    #[test]
    fn unknown_sport_under_strict_config_is_rejected() {
        let err = build_table_json(
            r#"{"schema_version":1,"sport":"Field Hockey","fixtures":[],
                "config":{"unknown_sport":"reject"}}"#,
        )
        .unwrap_err();
        assert_eq!(err, "Unknown sport: Field Hockey");
    }

    #[test]
    fn schemas_accept_valid_and_reject_invalid_requests() {
        let schema = serde_json::to_value(schema_for!(MatchRequest)).unwrap();
        let compiled = JSONSchema::compile(&schema).expect("schema compiles");

        let valid = serde_json::json!({
            "schema_version": 1, "sport": "futsal", "home_score": 4, "away_score": 4
        });
        let negative = serde_json::json!({
            "schema_version": 1, "sport": "futsal", "home_score": -1, "away_score": 4
        });
        let missing_sport = serde_json::json!({
            "schema_version": 1, "home_score": 1, "away_score": 4
        });

        assert!(compiled.is_valid(&valid));
        assert!(!compiled.is_valid(&negative));
        assert!(!compiled.is_valid(&missing_sport));
    }

    #[test]
    fn schema_document_lists_both_requests() {
        let doc: serde_json::Value = serde_json::from_str(&request_schema_json().unwrap()).unwrap();
        assert!(doc.get("match_request").is_some());
        assert!(doc.get("table_request").is_some());
    }
}
