//! Cross-pool semifinals and final.

use super::arena::MatchSet;
use super::errors::{FixtureError, FixtureResult};
use super::models::{Match, MatchId, MatchKind, NextMatch, Side, Standing};
use super::standings::PoolStandings;
use serde::{Deserialize, Serialize};

/// Cross-pool knockout fixtures, ids local to this value
///
/// Semifinals are ids 0 and 1, the final is id 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossPoolFinals {
    pub semifinals: [Match; 2],
    pub final_match: Match,
}

impl CrossPoolFinals {
    /// All three matches in id order, ready for [`MatchSet::append`]
    pub fn into_matches(self) -> Vec<Match> {
        let [sf1, sf2] = self.semifinals;
        vec![sf1, sf2, self.final_match]
    }
}

fn top_two(pool: usize, rows: &[Standing]) -> FixtureResult<(&Standing, &Standing)> {
    match rows {
        [first, second, ..] => Ok((first, second)),
        _ => Err(FixtureError::InsufficientParticipants {
            pool,
            found: rows.len(),
        }),
    }
}

/// Seed the cross-pool semifinals from two pools' seeding standings
///
/// SF1 pairs pool 0's winner with pool 1's runner-up and feeds side A of the
/// final; SF2 pairs pool 1's winner with pool 0's runner-up and feeds side B.
/// `standings` must be ranked with
/// [`RankingPolicy::Seeding`](super::RankingPolicy::Seeding).
pub fn generate_cross_pool_finals(
    existing: &MatchSet,
    standings: &PoolStandings,
) -> FixtureResult<CrossPoolFinals> {
    if !existing.pool_matches().any(Match::is_completed) {
        return Err(FixtureError::NoPoolMatches);
    }
    if existing.has_kind(MatchKind::KnockoutFinal) {
        return Err(FixtureError::AlreadyGenerated);
    }

    let mut pools = standings.iter();
    let (Some((&first_pool, first)), Some((&second_pool, second))) = (pools.next(), pools.next())
    else {
        return Err(FixtureError::InsufficientPools {
            found: standings.len(),
        });
    };
    if standings.len() > 2 {
        return Err(FixtureError::TooManyPools {
            found: standings.len(),
        });
    }

    let (winner_0, runner_up_0) = top_two(first_pool, first)?;
    let (winner_1, runner_up_1) = top_two(second_pool, second)?;

    let final_id = MatchId(2);
    let semifinal = |i: usize, a: &Standing, b: &Standing, side: Side| {
        Match::knockout(
            MatchId(i),
            format!("final-r1-m{}", i),
            MatchKind::KnockoutFinal,
            1,
            (Some(a.participant), Some(b.participant)),
            Some(NextMatch {
                match_id: final_id,
                side,
            }),
        )
    };

    let finals = CrossPoolFinals {
        semifinals: [
            semifinal(0, winner_0, runner_up_1, Side::A),
            semifinal(1, winner_1, runner_up_0, Side::B),
        ],
        final_match: Match::knockout(
            final_id,
            "final-r2-m0".to_string(),
            MatchKind::KnockoutFinal,
            2,
            (None, None),
            None,
        ),
    };

    log::info!(
        "Generated cross-pool finals: {} vs {}, {} vs {}",
        winner_0.participant,
        runner_up_1.participant,
        winner_1.participant,
        runner_up_0.participant
    );

    Ok(finals)
}
