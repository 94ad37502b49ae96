//! Fixture engine error types.

use super::models::{MatchId, ParticipantId};
use crate::tournament::models::TournamentId;
use thiserror::Error;

/// Broad category of a [`FixtureError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input from the caller
    Validation,
    /// Operation not allowed in the current fixture state
    State,
    /// Unknown match or tournament identifier
    NotFound,
}

/// Fixture engine errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixtureError {
    /// Not enough participants to build fixtures
    #[error("Invalid participant count: need at least {needed}, have {current}")]
    InvalidParticipantCount { needed: usize, current: usize },

    /// Pool count must be positive and not exceed the team count
    #[error("Invalid pool count: {0}")]
    InvalidPoolCount(usize),

    /// Knockout team count must be a power of two
    #[error("Knockout team count must be a power of 2 (e.g. 2, 4, 8, 16, 32), got {0}")]
    InvalidTeamCount(usize),

    /// Winner is neither participant of the match
    #[error("Winner {winner} is not a participant of match {match_id}")]
    WinnerNotInMatch {
        match_id: MatchId,
        winner: ParticipantId,
    },

    /// Participant id already on the roster
    #[error("Participant already registered: {0}")]
    DuplicateParticipant(ParticipantId),

    /// Tournament configuration rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Fixtures already exist for this tournament
    #[error("Fixtures already exist for this tournament")]
    DuplicateFixtures,

    /// Cross-pool finals already generated
    #[error("Knockout finals already generated")]
    AlreadyGenerated,

    /// Fewer than two pools to seed from
    #[error("Need 2 pools for cross-pool semi-finals, found {found}")]
    InsufficientPools { found: usize },

    /// More than two pools to seed from
    #[error("Cross-pool semi-finals support exactly 2 pools, found {found}")]
    TooManyPools { found: usize },

    /// A pool has fewer than two ranked participants
    #[error("Pool {pool} must have at least 2 teams to generate semi-finals, has {found}")]
    InsufficientParticipants { pool: usize, found: usize },

    /// No pool match has a recorded result
    #[error("No completed pool matches found, complete the pool stage first")]
    NoPoolMatches,

    /// Roster is at capacity
    #[error("Tournament is full")]
    TournamentFull,

    /// Fixtures exist, so the roster is frozen
    #[error("Registration is closed: fixtures have already been generated")]
    RegistrationClosed,

    /// Knockout links do not form a binary in-tree
    #[error("Malformed bracket: {0}")]
    MalformedBracket(String),

    /// Match not found
    #[error("Match not found: {0}")]
    MatchNotFound(MatchId),

    /// Tournament not found
    #[error("Tournament not found: {0}")]
    TournamentNotFound(TournamentId),
}

impl FixtureError {
    /// Category of this error, for mapping onto host status codes
    pub fn kind(&self) -> ErrorKind {
        match self {
            FixtureError::InvalidParticipantCount { .. }
            | FixtureError::InvalidPoolCount(_)
            | FixtureError::InvalidTeamCount(_)
            | FixtureError::WinnerNotInMatch { .. }
            | FixtureError::DuplicateParticipant(_)
            | FixtureError::InvalidConfig(_) => ErrorKind::Validation,
            FixtureError::DuplicateFixtures
            | FixtureError::AlreadyGenerated
            | FixtureError::InsufficientPools { .. }
            | FixtureError::TooManyPools { .. }
            | FixtureError::InsufficientParticipants { .. }
            | FixtureError::NoPoolMatches
            | FixtureError::TournamentFull
            | FixtureError::RegistrationClosed
            | FixtureError::MalformedBracket(_) => ErrorKind::State,
            FixtureError::MatchNotFound(_) | FixtureError::TournamentNotFound(_) => {
                ErrorKind::NotFound
            }
        }
    }

    /// Get a client-safe error message
    ///
    /// Internal identifiers and bracket diagnostics are not exposed.
    pub fn client_message(&self) -> String {
        match self {
            FixtureError::MatchNotFound(_) => "Match not found".to_string(),
            FixtureError::TournamentNotFound(_) => "Tournament not found".to_string(),
            FixtureError::WinnerNotInMatch { .. } => {
                "Winner must be one of the match participants".to_string()
            }
            FixtureError::MalformedBracket(_) => "Internal bracket error".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for fixture operations
pub type FixtureResult<T> = Result<T, FixtureError>;
