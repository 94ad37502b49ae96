//! Tournament manager for creating and running tournaments.
//!
//! Every mutation goes through `&mut self`, so a host sharing one manager
//! between request handlers wraps it in a lock; that makes fixture and
//! finals generation single-admission per manager.

use super::config::TournamentConfig;
use super::models::{Tournament, TournamentId, TournamentStats};
use crate::fixtures::{
    FixtureError, FixtureResult, MatchId, MatchOutcome, Participant, PoolStandings,
    RankingPolicy,
};
use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::ops::Range;

/// In-memory tournament registry
pub struct TournamentManager {
    tournaments: BTreeMap<TournamentId, Tournament>,
    next_id: TournamentId,
    /// Random source for pool partitioning
    rng: StdRng,
}

impl TournamentManager {
    /// Create a manager whose pool draws are seeded from the OS
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create a manager with reproducible pool draws
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            tournaments: BTreeMap::new(),
            next_id: TournamentId(1),
            rng,
        }
    }

    /// Create a tournament, optionally with an initial roster
    ///
    /// A roster that fills the tournament generates its fixtures right away.
    pub fn create_tournament(
        &mut self,
        config: TournamentConfig,
        roster: Vec<Participant>,
    ) -> FixtureResult<TournamentId> {
        let id = self.next_id;
        let mut tournament = Tournament::new(id, config)?;
        for participant in roster {
            tournament.register(participant, &mut self.rng)?;
        }

        log::info!(
            "Created tournament {} '{}' with {} participants",
            id,
            tournament.config.name,
            tournament.participants().len()
        );

        self.tournaments.insert(id, tournament);
        self.next_id.0 += 1;
        Ok(id)
    }

    pub fn tournament(&self, id: TournamentId) -> FixtureResult<&Tournament> {
        self.tournaments
            .get(&id)
            .ok_or(FixtureError::TournamentNotFound(id))
    }

    fn tournament_mut(&mut self, id: TournamentId) -> FixtureResult<&mut Tournament> {
        self.tournaments
            .get_mut(&id)
            .ok_or(FixtureError::TournamentNotFound(id))
    }

    /// All tournaments, newest first
    pub fn list(&self) -> impl Iterator<Item = &Tournament> {
        self.tournaments.values().rev()
    }

    /// Delete a tournament along with all of its matches
    pub fn delete_tournament(&mut self, id: TournamentId) -> FixtureResult<Tournament> {
        let tournament = self
            .tournaments
            .remove(&id)
            .ok_or(FixtureError::TournamentNotFound(id))?;
        log::info!("Deleted tournament {}", id);
        Ok(tournament)
    }

    pub fn register_participant(
        &mut self,
        id: TournamentId,
        participant: Participant,
    ) -> FixtureResult<()> {
        let tournament = self
            .tournaments
            .get_mut(&id)
            .ok_or(FixtureError::TournamentNotFound(id))?;
        tournament.register(participant, &mut self.rng)
    }

    pub fn generate_fixtures(&mut self, id: TournamentId) -> FixtureResult<usize> {
        let tournament = self
            .tournaments
            .get_mut(&id)
            .ok_or(FixtureError::TournamentNotFound(id))?;
        tournament.generate_fixtures(&mut self.rng)
    }

    pub fn generate_finals(&mut self, id: TournamentId) -> FixtureResult<Range<MatchId>> {
        self.tournament_mut(id)?.generate_finals()
    }

    pub fn record_result(
        &mut self,
        id: TournamentId,
        match_id: MatchId,
        outcome: MatchOutcome,
    ) -> FixtureResult<()> {
        self.tournament_mut(id)?.record_result(match_id, outcome)
    }

    pub fn clear_result(&mut self, id: TournamentId, match_id: MatchId) -> FixtureResult<()> {
        self.tournament_mut(id)?.clear_result(match_id)
    }

    pub fn schedule_match(
        &mut self,
        id: TournamentId,
        match_id: MatchId,
        scheduled_time: Option<DateTime<Utc>>,
    ) -> FixtureResult<()> {
        self.tournament_mut(id)?
            .schedule_match(match_id, scheduled_time)
    }

    pub fn standings(
        &self,
        id: TournamentId,
        policy: RankingPolicy,
    ) -> FixtureResult<PoolStandings> {
        Ok(self.tournament(id)?.standings(policy))
    }

    pub fn stats(&self, id: TournamentId) -> FixtureResult<TournamentStats> {
        Ok(self.tournament(id)?.stats())
    }
}

impl Default for TournamentManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::MatchKind;

    fn roster(n: i64) -> Vec<Participant> {
        (1..=n)
            .map(|i| Participant::singles(i, format!("Player {}", i)))
            .collect()
    }

    #[test]
    fn test_create_with_full_roster_builds_bracket() {
        let mut manager = TournamentManager::with_seed(1);
        let id = manager
            .create_tournament(TournamentConfig::knockout("Open".into(), 8), roster(8))
            .unwrap();

        let t = manager.tournament(id).unwrap();
        assert_eq!(t.matches().len(), 7);
        assert_eq!(t.matches().round(MatchKind::Knockout, 1).count(), 4);
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut manager = TournamentManager::with_seed(1);
        let a = manager
            .create_tournament(TournamentConfig::default(), vec![])
            .unwrap();
        let b = manager
            .create_tournament(TournamentConfig::default(), vec![])
            .unwrap();
        assert_eq!((a, b), (TournamentId(1), TournamentId(2)));
        let names: Vec<_> = manager.list().map(|t| t.id).collect();
        assert_eq!(names, vec![b, a]);
    }

    #[test]
    fn test_invalid_config_not_stored() {
        let mut manager = TournamentManager::with_seed(1);
        assert_eq!(
            manager.create_tournament(TournamentConfig::pools("League".into(), 8, 0), vec![]),
            Err(FixtureError::InvalidPoolCount(0))
        );
        assert_eq!(manager.list().count(), 0);
    }

    #[test]
    fn test_unknown_tournament() {
        let mut manager = TournamentManager::with_seed(1);
        assert_eq!(
            manager.register_participant(TournamentId(9), Participant::singles(1, "A")),
            Err(FixtureError::TournamentNotFound(TournamentId(9)))
        );
        assert_eq!(
            manager.record_result(TournamentId(9), MatchId(0), MatchOutcome::default()),
            Err(FixtureError::TournamentNotFound(TournamentId(9)))
        );
        assert!(manager.delete_tournament(TournamentId(9)).is_err());
    }

    #[test]
    fn test_delete_removes_matches() {
        let mut manager = TournamentManager::with_seed(1);
        let id = manager
            .create_tournament(TournamentConfig::knockout("Open".into(), 4), roster(4))
            .unwrap();
        let removed = manager.delete_tournament(id).unwrap();
        assert_eq!(removed.matches().len(), 3);
        assert!(manager.tournament(id).is_err());
    }
}
