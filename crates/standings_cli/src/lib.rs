//! Standings CLI Library
//!
//! CSV fixtures → standings table, plus plain-text table rendering.

use anyhow::{Context, Result};
use serde::Deserialize;
use standings_core::{Fixture, MatchScore, MatchStatus, ScoringRule, TableRow};
use std::fmt::Write as _;
use std::path::Path;

/// One CSV line. `season`, `id`, the flags and `status` are optional.
#[derive(Debug, Deserialize)]
struct CsvFixture {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    season: Option<String>,
    home_club: String,
    away_club: String,
    home_score: u32,
    away_score: u32,
    #[serde(default)]
    has_overtime: Option<bool>,
    #[serde(default)]
    has_penalties: Option<bool>,
    #[serde(default)]
    status: Option<String>,
}

impl CsvFixture {
    fn into_fixture(self, line: usize) -> Result<Fixture> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => MatchStatus::Finished,
            Some(raw) => raw
                .parse::<MatchStatus>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("Invalid status on line {}", line))?,
        };

        Ok(Fixture {
            id: self.id.filter(|s| !s.is_empty()),
            season: self.season.filter(|s| !s.is_empty()),
            home_club: self.home_club.trim().to_string(),
            away_club: self.away_club.trim().to_string(),
            score: MatchScore {
                home_score: self.home_score,
                away_score: self.away_score,
                has_overtime: self.has_overtime.unwrap_or(false),
                has_penalties: self.has_penalties.unwrap_or(false),
            },
            status,
        })
    }
}

/// Read fixtures from a CSV file with a header row.
pub fn load_fixtures_csv(path: &Path) -> Result<Vec<Fixture>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut fixtures = Vec::new();
    for (idx, record) in reader.deserialize::<CsvFixture>().enumerate() {
        // header is line 1
        let line = idx + 2;
        let row = record.with_context(|| format!("Failed to parse CSV line {}", line))?;
        fixtures.push(row.into_fixture(line)?);
    }

    log::info!("Loaded {} fixtures from {}", fixtures.len(), path.display());
    Ok(fixtures)
}

/// Render ranked rows as an aligned text table.
///
/// Columns follow the rule: volleyball shows sets, ice hockey adds the
/// overtime columns, everything else shows goals.
pub fn render_text_table(rows: &[TableRow], rule: ScoringRule) -> String {
    let club_width = rows.iter().map(|r| r.club.chars().count()).max().unwrap_or(4).max(4);
    let mut out = String::new();

    let _ = write!(
        out,
        "{:>3}  {:<width$}  {:>3} {:>3} {:>3} {:>3}",
        "Pos",
        "Club",
        "P",
        "W",
        "D",
        "L",
        width = club_width
    );
    match rule {
        ScoringRule::IceHockey => {
            let _ = write!(out, " {:>3} {:>3} {:>4} {:>4} {:>4}", "OTW", "OTL", "GF", "GA", "GD");
        }
        ScoringRule::Volleyball => {
            let _ = write!(out, " {:>4} {:>4} {:>4}", "SW", "SL", "SD");
        }
        ScoringRule::General | ScoringRule::Basketball => {
            let _ = write!(out, " {:>4} {:>4} {:>4}", "GF", "GA", "GD");
        }
    }
    let _ = writeln!(out, " {:>4}", "Pts");

    for row in rows {
        let s = &row.stats;
        let _ = write!(
            out,
            "{:>3}  {:<width$}  {:>3} {:>3} {:>3} {:>3}",
            row.position,
            row.club,
            s.played,
            s.wins,
            s.draws,
            s.losses,
            width = club_width
        );
        match rule {
            ScoringRule::IceHockey => {
                let _ = write!(
                    out,
                    " {:>3} {:>3} {:>4} {:>4} {:>+4}",
                    s.overtime_wins,
                    s.overtime_losses,
                    s.goals_for,
                    s.goals_against,
                    s.goal_difference()
                );
            }
            ScoringRule::Volleyball => {
                let _ = write!(
                    out,
                    " {:>4} {:>4} {:>+4}",
                    s.sets_won,
                    s.sets_lost,
                    s.set_difference()
                );
            }
            ScoringRule::General | ScoringRule::Basketball => {
                let _ = write!(
                    out,
                    " {:>4} {:>4} {:>+4}",
                    s.goals_for,
                    s.goals_against,
                    s.goal_difference()
                );
            }
        }
        let _ = writeln!(out, " {:>4}", s.points);
    }

    out
}
