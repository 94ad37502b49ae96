//! Tournament configuration models.

use crate::fixtures::{FixtureError, FixtureResult};
use serde::{Deserialize, Serialize};

/// Singles or doubles entrants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    Singles,
    Doubles,
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Discipline::Singles => write!(f, "singles"),
            Discipline::Doubles => write!(f, "doubles"),
        }
    }
}

/// How fixtures are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    /// Single elimination bracket
    Knockout,
    /// Round-robin pools, then cross-pool semifinals and a final
    Pools { pool_count: usize },
}

/// Tournament manager contact details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerContact {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Tournament configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Tournament name
    pub name: String,

    pub discipline: Discipline,

    pub format: TournamentFormat,

    /// Roster capacity; fixtures are generated when it is reached
    pub team_count: usize,

    pub manager: Option<ManagerContact>,

    /// Free-form rules text
    pub rules: Option<String>,

    /// Entry fee in minor currency units
    pub entry_fee: Option<i64>,

    /// Prize pool in minor currency units
    pub prize_pool: Option<i64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self::knockout("Default Tournament".to_string(), 8)
    }
}

impl TournamentConfig {
    /// Create a knockout tournament configuration
    pub fn knockout(name: String, team_count: usize) -> Self {
        Self {
            name,
            discipline: Discipline::Singles,
            format: TournamentFormat::Knockout,
            team_count,
            manager: None,
            rules: None,
            entry_fee: None,
            prize_pool: None,
        }
    }

    /// Create a pool-stage tournament configuration
    pub fn pools(name: String, team_count: usize, pool_count: usize) -> Self {
        Self {
            format: TournamentFormat::Pools { pool_count },
            ..Self::knockout(name, team_count)
        }
    }

    /// Switch to doubles entrants
    pub fn doubles(mut self) -> Self {
        self.discipline = Discipline::Doubles;
        self
    }

    /// Validate configuration
    ///
    /// Knockout team counts must be a power of two so the bracket has no
    /// byes; every pool must be able to hold at least two teams.
    pub fn validate(&self) -> FixtureResult<()> {
        if self.name.trim().is_empty() {
            return Err(FixtureError::InvalidConfig(
                "Tournament name must not be empty".to_string(),
            ));
        }

        if self.team_count < 2 {
            return Err(FixtureError::InvalidParticipantCount {
                needed: 2,
                current: self.team_count,
            });
        }

        match self.format {
            TournamentFormat::Knockout => {
                if !self.team_count.is_power_of_two() {
                    return Err(FixtureError::InvalidTeamCount(self.team_count));
                }
            }
            TournamentFormat::Pools { pool_count } => {
                if pool_count == 0 || pool_count * 2 > self.team_count {
                    return Err(FixtureError::InvalidPoolCount(pool_count));
                }
            }
        }

        if self.entry_fee.is_some_and(|fee| fee < 0) || self.prize_pool.is_some_and(|p| p < 0) {
            return Err(FixtureError::InvalidConfig(
                "Entry fee and prize pool must not be negative".to_string(),
            ));
        }

        Ok(())
    }

    pub fn uses_pools(&self) -> bool {
        matches!(self.format, TournamentFormat::Pools { .. })
    }
}
