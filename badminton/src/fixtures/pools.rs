//! Pool partitioning and round-robin fixture generation.

use super::arena::MatchSet;
use super::errors::{FixtureError, FixtureResult};
use super::models::{Match, MatchId, MatchKind, Participant, Pool};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Pools and their round-robin matches, with ids local to `matches`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolFixtures {
    pub pools: Vec<Pool>,
    pub matches: Vec<Match>,
}

/// Number of round-robin matches in a pool of `k` participants
pub fn round_robin_match_count(k: usize) -> usize {
    k * k.saturating_sub(1) / 2
}

/// Partition participants into pools and generate each pool's round robin
///
/// Participants are shuffled with `rng`, then dealt round-robin into
/// `pool_count` pools. Fails with `DuplicateFixtures` when `existing`
/// already holds pool or knockout matches; `existing` is never modified.
pub fn assign_pools<R: Rng + ?Sized>(
    participants: &[Participant],
    pool_count: usize,
    existing: &MatchSet,
    rng: &mut R,
) -> FixtureResult<PoolFixtures> {
    if pool_count == 0 {
        return Err(FixtureError::InvalidPoolCount(pool_count));
    }
    if existing.has_kind(MatchKind::Pool) || existing.has_kind(MatchKind::Knockout) {
        return Err(FixtureError::DuplicateFixtures);
    }

    let mut shuffled: Vec<&Participant> = participants.iter().collect();
    shuffled.shuffle(rng);

    let mut pools: Vec<Pool> = (0..pool_count)
        .map(|index| Pool {
            index,
            participants: Vec::new(),
        })
        .collect();
    for (i, participant) in shuffled.into_iter().enumerate() {
        pools[i % pool_count].participants.push(participant.id);
    }

    let mut matches = Vec::new();
    for pool in &pools {
        let members = &pool.participants;
        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                matches.push(Match::pool(
                    MatchId(matches.len()),
                    pool.index,
                    (i, j),
                    members[i],
                    members[j],
                ));
            }
        }
    }

    log::info!(
        "Assigned {} participants to {} pools, {} pool matches",
        participants.len(),
        pool_count,
        matches.len()
    );

    Ok(PoolFixtures { pools, matches })
}
