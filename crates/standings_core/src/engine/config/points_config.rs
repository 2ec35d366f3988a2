//! Points awarded per result, one block per scoring rule.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GeneralPoints {
    /// (default: 3)
    pub win: u32,
    /// (default: 1)
    pub draw: u32,
    /// (default: 0)
    pub loss: u32,
}

impl Default for GeneralPoints {
    fn default() -> Self {
        Self { win: 3, draw: 1, loss: 0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BasketballPoints {
    /// (default: 2)
    pub win: u32,
    /// Every loss still earns this much. (default: 1)
    pub loss: u32,
}

impl Default for BasketballPoints {
    fn default() -> Self {
        Self { win: 2, loss: 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct HockeyPoints {
    /// Awarded for regulation and overtime wins alike. (default: 2)
    pub win: u32,
    /// (default: 0)
    pub regulation_loss: u32,
    /// Consolation point for losing in overtime or a shootout. (default: 1)
    pub overtime_loss: u32,
}

impl Default for HockeyPoints {
    fn default() -> Self {
        Self { win: 2, regulation_loss: 0, overtime_loss: 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct VolleyballPoints {
    /// Win by two or more sets, e.g. 3-0 or 3-1. (default: 3)
    pub straight_win: u32,
    /// Win by a single set, e.g. 3-2. (default: 2)
    pub tiebreak_win: u32,
    /// Lose by a single set. (default: 1)
    pub tiebreak_loss: u32,
}

impl Default for VolleyballPoints {
    fn default() -> Self {
        Self { straight_win: 3, tiebreak_win: 2, tiebreak_loss: 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PointsConfig {
    pub general: GeneralPoints,
    pub basketball: BasketballPoints,
    pub ice_hockey: HockeyPoints,
    pub volleyball: VolleyballPoints,
}

impl PointsConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        let g = &self.general;
        if g.win <= g.loss {
            return Err(format!("general.win ({}) must exceed general.loss ({})", g.win, g.loss));
        }
        if g.draw < g.loss || g.draw > g.win {
            return Err(format!(
                "general.draw ({}) must lie between loss ({}) and win ({})",
                g.draw, g.loss, g.win
            ));
        }

        let b = &self.basketball;
        if b.win <= b.loss {
            return Err(format!(
                "basketball.win ({}) must exceed basketball.loss ({})",
                b.win, b.loss
            ));
        }

        let h = &self.ice_hockey;
        if h.win <= h.overtime_loss || h.win <= h.regulation_loss {
            return Err(format!(
                "ice_hockey.win ({}) must exceed both losses ({}, {})",
                h.win, h.regulation_loss, h.overtime_loss
            ));
        }

        let v = &self.volleyball;
        if v.tiebreak_win <= v.tiebreak_loss {
            return Err(format!(
                "volleyball.tiebreak_win ({}) must exceed tiebreak_loss ({})",
                v.tiebreak_win, v.tiebreak_loss
            ));
        }
        if v.straight_win < v.tiebreak_win {
            return Err(format!(
                "volleyball.straight_win ({}) must be at least tiebreak_win ({})",
                v.straight_win, v.tiebreak_win
            ));
        }

        Ok(())
    }
}
