//! Tournament module for roster management and fixture lifecycle.
//!
//! This module provides tournament management on top of the fixture engine:
//! - Tournament creation and configuration
//! - Participant registration up to capacity
//! - Automatic fixture generation when the roster fills
//! - Cross-pool finals after the pool stage
//! - Progress statistics
//!
//! ## Example
//!
//! ```
//! use badminton::fixtures::{Participant, RankingPolicy};
//! use badminton::tournament::{TournamentConfig, TournamentManager};
//!
//! let mut manager = TournamentManager::with_seed(42);
//! let config = TournamentConfig::pools("Club Night".to_string(), 6, 2);
//! let id = manager.create_tournament(config, Vec::new())?;
//!
//! for i in 1..=6 {
//!     manager.register_participant(id, Participant::singles(i, format!("Player {}", i)))?;
//! }
//!
//! // The sixth registration filled the roster and drew two pools of three.
//! let tournament = manager.tournament(id)?;
//! assert_eq!(tournament.pools().len(), 2);
//! assert_eq!(tournament.matches().len(), 6);
//! assert_eq!(manager.standings(id, RankingPolicy::Display)?.len(), 2);
//! # Ok::<(), badminton::fixtures::FixtureError>(())
//! ```

pub mod config;
pub mod manager;
pub mod models;

pub use config::{Discipline, ManagerContact, TournamentConfig, TournamentFormat};
pub use manager::TournamentManager;
pub use models::{Tournament, TournamentId, TournamentState, TournamentStats};
