pub mod calculator;
pub mod config;
pub mod table;

#[cfg(test)]
mod calculator_contract_test;

pub use calculator::StandingsCalculator;
pub use config::{PointsConfig, StandingsConfig, TiePolicy, UnknownSportPolicy};
pub use table::{StandingsTable, TableRow};
