//! Fixture engine: brackets, pools, standings and result progression.
//!
//! This module provides the tournament fixture logic:
//! - Single-elimination bracket skeletons with forward links
//! - Random pool partitioning with round-robin match lists
//! - Pool standings under display and seeding ranking policies
//! - Cross-pool semifinals and final from two pools' standings
//! - Result recording with winner propagation along bracket links
//!
//! All operations are synchronous transformations over caller-owned data.
//! Generated fixtures carry ids local to their own list and are placed into
//! a tournament's [`MatchSet`] with [`MatchSet::append`].
//!
//! ## Example
//!
//! ```
//! use badminton::fixtures::{
//!     MatchOutcome, MatchSet, Participant, build_knockout_bracket, record_result,
//! };
//!
//! let players: Vec<_> = (1..=4)
//!     .map(|i| Participant::singles(i, format!("Player {}", i)))
//!     .collect();
//!
//! let mut matches = MatchSet::new();
//! matches.append(build_knockout_bracket(&players).matches);
//!
//! let semi = matches.find_by_label("r1-m0").unwrap();
//! let (id, winner) = (semi.id, semi.participant_a.unwrap());
//! record_result(&mut matches, id, MatchOutcome::won_by(winner, 21, 17))?;
//!
//! assert_eq!(matches.find_by_label("r2-m0").unwrap().participant_a, Some(winner));
//! # Ok::<(), badminton::fixtures::FixtureError>(())
//! ```

pub mod arena;
pub mod bracket;
pub mod cross_pool;
pub mod errors;
pub mod models;
pub mod pools;
pub mod progression;
pub mod standings;

pub use arena::MatchSet;
pub use bracket::{Bracket, bracket_size, build_knockout_bracket};
pub use cross_pool::{CrossPoolFinals, generate_cross_pool_finals};
pub use errors::{ErrorKind, FixtureError, FixtureResult};
pub use models::{
    Match, MatchId, MatchKind, MatchStatus, NextMatch, Participant, ParticipantId, Pool, Side,
    Standing,
};
pub use pools::{PoolFixtures, assign_pools, round_robin_match_count};
pub use progression::{MatchOutcome, clear_result, record_result, schedule_match};
pub use standings::{
    POINTS_PER_WIN, PoolStandings, RankingPolicy, compute_standings, display_standings,
    seeding_standings,
};
