//! # Badminton
//!
//! Fixture engine for badminton tournaments: single-elimination brackets,
//! round-robin pools with cross-pool semifinals, pool standings and result
//! progression.
//!
//! ## Architecture
//!
//! Tournaments run in one of two formats:
//!
//! - **Knockout**: a single-elimination bracket built from the roster once it
//!   is full. Round 1 mirrors the roster (first vs last); every winner moves
//!   along a forward link into the next round.
//! - **Pools**: the roster is drawn at random into pools that each play a
//!   round robin. The top two of pool A and pool B then meet crosswise in
//!   semifinals feeding a final.
//!
//! Matches live in a per-tournament arena and link to each other by index,
//! so the bracket shape is checkable without parsing identifiers.
//!
//! ## Core Modules
//!
//! - [`fixtures`]: bracket and pool generation, standings, progression
//! - [`tournament`]: configuration, registration and the tournament registry
//!
//! ## Example
//!
//! ```
//! use badminton::fixtures::{Participant, build_knockout_bracket};
//!
//! let players: Vec<_> = (1..=5)
//!     .map(|i| Participant::singles(i, format!("Player {}", i)))
//!     .collect();
//!
//! // Five players are padded to an eight-slot bracket with three byes.
//! let bracket = build_knockout_bracket(&players);
//! assert_eq!(bracket.matches.len(), 7);
//! ```

/// Brackets, pools, standings and result progression.
pub mod fixtures;
pub use fixtures::{
    FixtureError, FixtureResult, Match, MatchId, MatchKind, MatchOutcome, MatchSet, Participant,
    ParticipantId, RankingPolicy, Standing,
};

/// Tournament configuration, registration and registry.
pub mod tournament;
pub use tournament::{Tournament, TournamentConfig, TournamentId, TournamentManager};
