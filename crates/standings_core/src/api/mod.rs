pub mod json_api;

pub use json_api::{
    build_table_json, calculate_match_json, request_schema_json, MatchRequest, MatchResponse,
    TableRequest, TableResponse, SCHEMA_VERSION,
};
