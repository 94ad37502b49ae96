//! Tournament data models: roster, fixtures and progress.

use super::config::{TournamentConfig, TournamentFormat};
use crate::fixtures::{
    FixtureError, FixtureResult, MatchId, MatchOutcome, MatchSet, Participant, ParticipantId,
    Pool, PoolStandings, RankingPolicy, assign_pools, build_knockout_bracket, clear_result,
    compute_standings, generate_cross_pool_finals, record_result, schedule_match,
    seeding_standings,
};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Tournament identifier, assigned by the manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TournamentId(pub i64);

impl fmt::Display for TournamentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tournament state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TournamentState {
    /// Accepting registrations, no fixtures yet
    Registering,
    /// Fixtures generated
    InProgress,
    /// Final decided
    Finished,
}

/// Fixture progress summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentStats {
    pub total_matches: usize,
    pub completed_matches: usize,
    pub pending_matches: usize,
    /// Completed share of all fixtures, rounded to a whole percent
    pub progress_percent: u32,
}

/// A tournament: its roster and its fixtures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub config: TournamentConfig,
    participants: Vec<Participant>,
    pools: Vec<Pool>,
    matches: MatchSet,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Create an empty tournament after validating its configuration
    pub fn new(id: TournamentId, config: TournamentConfig) -> FixtureResult<Self> {
        config.validate()?;
        Ok(Self {
            id,
            config,
            participants: Vec::new(),
            pools: Vec::new(),
            matches: MatchSet::new(),
            created_at: Utc::now(),
        })
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Pools, empty until pool fixtures are generated
    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    pub fn matches(&self) -> &MatchSet {
        &self.matches
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.config.team_count
    }

    pub fn remaining_slots(&self) -> usize {
        self.config.team_count.saturating_sub(self.participants.len())
    }

    /// Register a participant
    ///
    /// When the roster reaches capacity, fixtures are generated immediately.
    /// Once fixtures exist, by either path, the roster is frozen.
    pub fn register<R: Rng + ?Sized>(
        &mut self,
        participant: Participant,
        rng: &mut R,
    ) -> FixtureResult<()> {
        if self.is_full() {
            return Err(FixtureError::TournamentFull);
        }
        if !self.matches.is_empty() {
            return Err(FixtureError::RegistrationClosed);
        }
        if self.participant(participant.id).is_some() {
            return Err(FixtureError::DuplicateParticipant(participant.id));
        }

        log::info!(
            "Tournament {}: registered {} ({}/{})",
            self.id,
            participant.display_name(),
            self.participants.len() + 1,
            self.config.team_count
        );
        self.participants.push(participant);

        if self.is_full() {
            self.generate_fixtures(rng)?;
        }

        Ok(())
    }

    /// Generate the bracket or pool fixtures from the current roster
    ///
    /// Returns the number of matches created. Fixtures are generated at most
    /// once; a second call fails with `DuplicateFixtures`.
    pub fn generate_fixtures<R: Rng + ?Sized>(&mut self, rng: &mut R) -> FixtureResult<usize> {
        let created = match self.config.format {
            TournamentFormat::Knockout => {
                if self.matches.knockout_matches().next().is_some() {
                    return Err(FixtureError::DuplicateFixtures);
                }
                if self.participants.len() < 2 {
                    return Err(FixtureError::InvalidParticipantCount {
                        needed: 2,
                        current: self.participants.len(),
                    });
                }
                let bracket = build_knockout_bracket(&self.participants);
                self.matches.append(bracket.matches)
            }
            TournamentFormat::Pools { pool_count } => {
                // Every pool needs at least one match.
                let needed = pool_count * 2;
                if self.participants.len() < needed {
                    return Err(FixtureError::InvalidParticipantCount {
                        needed,
                        current: self.participants.len(),
                    });
                }
                let fixtures = assign_pools(&self.participants, pool_count, &self.matches, rng)?;
                self.pools = fixtures.pools;
                self.matches.append(fixtures.matches)
            }
        };

        let count = created.end.0 - created.start.0;
        log::info!("Tournament {}: generated {} fixtures", self.id, count);
        Ok(count)
    }

    /// Seed and append cross-pool semifinals and final from the pool stage
    pub fn generate_finals(&mut self) -> FixtureResult<Range<MatchId>> {
        let standings = seeding_standings(&self.matches);
        let finals = generate_cross_pool_finals(&self.matches, &standings)?;
        Ok(self.matches.append(finals.into_matches()))
    }

    pub fn record_result(&mut self, match_id: MatchId, outcome: MatchOutcome) -> FixtureResult<()> {
        record_result(&mut self.matches, match_id, outcome)
    }

    pub fn clear_result(&mut self, match_id: MatchId) -> FixtureResult<()> {
        clear_result(&mut self.matches, match_id)
    }

    pub fn schedule_match(
        &mut self,
        match_id: MatchId,
        scheduled_time: Option<DateTime<Utc>>,
    ) -> FixtureResult<()> {
        schedule_match(&mut self.matches, match_id, scheduled_time)
    }

    pub fn standings(&self, policy: RankingPolicy) -> PoolStandings {
        compute_standings(&self.matches, policy)
    }

    /// Winner of the deciding match, once played
    ///
    /// Clearing an earlier result empties a slot of the deciding match but
    /// keeps its recorded winner; a winner no longer seated there is not a
    /// champion until the match is decided again.
    pub fn champion(&self) -> Option<ParticipantId> {
        self.matches
            .knockout_matches()
            .find(|m| m.next.is_none())
            .and_then(|m| m.winner.filter(|&w| m.has_participant(w)))
    }

    pub fn state(&self) -> TournamentState {
        if self.champion().is_some() {
            TournamentState::Finished
        } else if self.matches.is_empty() {
            TournamentState::Registering
        } else {
            TournamentState::InProgress
        }
    }

    pub fn stats(&self) -> TournamentStats {
        let total = self.matches.len();
        let completed = self.matches.completed_count();
        let progress_percent = if total == 0 {
            0
        } else {
            ((completed * 100 + total / 2) / total) as u32
        };

        TournamentStats {
            total_matches: total,
            completed_matches: completed,
            pending_matches: total - completed,
            progress_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::MatchKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn player(i: i64) -> Participant {
        Participant::singles(i, format!("Player {}", i))
    }

    fn open(config: TournamentConfig) -> Tournament {
        Tournament::new(TournamentId(1), config).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = TournamentConfig::knockout("Open".into(), 6);
        assert_eq!(
            Tournament::new(TournamentId(1), config).unwrap_err(),
            FixtureError::InvalidTeamCount(6)
        );
    }

    #[test]
    fn test_knockout_bracket_built_when_full() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut t = open(TournamentConfig::knockout("Open".into(), 4));

        for i in 1..=3 {
            t.register(player(i), &mut rng).unwrap();
        }
        assert_eq!(t.state(), TournamentState::Registering);
        assert!(t.matches().is_empty());
        assert_eq!(t.remaining_slots(), 1);

        t.register(player(4), &mut rng).unwrap();
        assert_eq!(t.state(), TournamentState::InProgress);
        assert_eq!(t.matches().len(), 3);
        assert!(t.matches().validate_bracket(MatchKind::Knockout).is_ok());

        assert_eq!(
            t.register(player(5), &mut rng),
            Err(FixtureError::TournamentFull)
        );
    }

    #[test]
    fn test_duplicate_participant_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut t = open(TournamentConfig::knockout("Open".into(), 4));
        t.register(player(1), &mut rng).unwrap();
        assert_eq!(
            t.register(player(1), &mut rng),
            Err(FixtureError::DuplicateParticipant(ParticipantId(1)))
        );
    }

    #[test]
    fn test_manual_generation_once() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut t = open(TournamentConfig::pools("League".into(), 8, 2));
        for i in 1..=6 {
            t.register(player(i), &mut rng).unwrap();
        }

        assert_eq!(t.generate_fixtures(&mut rng), Ok(6));
        assert_eq!(t.pools().len(), 2);
        assert_eq!(
            t.generate_fixtures(&mut rng),
            Err(FixtureError::DuplicateFixtures)
        );
        assert_eq!(t.matches().len(), 6);
    }

    #[test]
    fn test_manual_generation_closes_registration() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut t = open(TournamentConfig::knockout("Open".into(), 8));
        for i in 1..=5 {
            t.register(player(i), &mut rng).unwrap();
        }
        t.generate_fixtures(&mut rng).unwrap();

        assert_eq!(
            t.register(player(6), &mut rng),
            Err(FixtureError::RegistrationClosed)
        );
        assert_eq!(t.participants().len(), 5);
        assert_eq!(t.matches().len(), 7);
    }

    #[test]
    fn test_pool_generation_needs_two_per_pool() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut t = open(TournamentConfig::pools("League".into(), 8, 2));
        assert_eq!(
            t.generate_fixtures(&mut rng),
            Err(FixtureError::InvalidParticipantCount {
                needed: 4,
                current: 0
            })
        );

        for i in 1..=3 {
            t.register(player(i), &mut rng).unwrap();
        }
        assert!(t.generate_fixtures(&mut rng).is_err());
        assert!(t.pools().is_empty());
        assert_eq!(t.state(), TournamentState::Registering);

        t.register(player(4), &mut rng).unwrap();
        assert_eq!(t.generate_fixtures(&mut rng), Ok(2));
        assert_eq!(
            t.generate_fixtures(&mut rng),
            Err(FixtureError::DuplicateFixtures)
        );
    }

    #[test]
    fn test_cleared_semifinal_unsettles_champion() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut t = open(TournamentConfig::knockout("Open".into(), 4));
        for i in 1..=4 {
            t.register(player(i), &mut rng).unwrap();
        }

        // Slot A wins every match.
        for id in [MatchId(0), MatchId(1), MatchId(2)] {
            let winner = t.matches().get(id).unwrap().participant_a.unwrap();
            t.record_result(id, MatchOutcome::won_by(winner, 21, 11)).unwrap();
        }
        let champion = t.champion().unwrap();
        assert_eq!(t.state(), TournamentState::Finished);

        // Clearing the semifinal the champion came from empties their slot.
        let semi = if t.matches().get(MatchId(0)).unwrap().winner == Some(champion) {
            MatchId(0)
        } else {
            MatchId(1)
        };
        t.clear_result(semi).unwrap();
        assert_eq!(t.matches().get(MatchId(2)).unwrap().winner, Some(champion));
        assert_eq!(t.champion(), None);
        assert_eq!(t.state(), TournamentState::InProgress);
    }

    #[test]
    fn test_knockout_needs_two_participants() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut t = open(TournamentConfig::knockout("Open".into(), 8));
        t.register(player(1), &mut rng).unwrap();
        assert_eq!(
            t.generate_fixtures(&mut rng),
            Err(FixtureError::InvalidParticipantCount {
                needed: 2,
                current: 1
            })
        );
    }

    #[test]
    fn test_stats_and_champion() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut t = open(TournamentConfig::knockout("Open".into(), 2));
        t.register(player(1), &mut rng).unwrap();
        t.register(player(2), &mut rng).unwrap();

        let stats = t.stats();
        assert_eq!(stats.total_matches, 1);
        assert_eq!(stats.pending_matches, 1);
        assert_eq!(stats.progress_percent, 0);

        t.record_result(MatchId(0), MatchOutcome::won_by(ParticipantId(2), 18, 21))
            .unwrap();
        assert_eq!(t.champion(), Some(ParticipantId(2)));
        assert_eq!(t.state(), TournamentState::Finished);
        assert_eq!(t.stats().progress_percent, 100);

        t.clear_result(MatchId(0)).unwrap();
        assert_eq!(t.state(), TournamentState::InProgress);
    }
}
