//! Pool standings.
//!
//! Two ranking orders are in use and are deliberately kept apart:
//!
//! - [`RankingPolicy::Display`] orders the points table shown to players:
//!   points descending, then wins descending.
//! - [`RankingPolicy::Seeding`] orders pools for cross-pool semifinal
//!   seeding: wins descending, then losses ascending, then matches played
//!   descending.
//!
//! Ties under either policy keep the order in which participants first
//! appear in the pool's matches.

use super::models::{Match, MatchKind, ParticipantId, Standing};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// Points awarded for a pool win
pub const POINTS_PER_WIN: u32 = 2;

/// Ranked standings keyed by pool index
pub type PoolStandings = BTreeMap<usize, Vec<Standing>>;

/// Order in which a pool's standings are ranked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankingPolicy {
    /// Points table order
    Display,
    /// Cross-pool seeding order
    Seeding,
}

impl RankingPolicy {
    fn compare(self, a: &Standing, b: &Standing) -> Ordering {
        match self {
            RankingPolicy::Display => b.points.cmp(&a.points).then(b.wins.cmp(&a.wins)),
            RankingPolicy::Seeding => b
                .wins
                .cmp(&a.wins)
                .then(a.losses.cmp(&b.losses))
                .then(b.played.cmp(&a.played)),
        }
    }
}

#[derive(Default)]
struct PoolTable {
    rows: Vec<Standing>,
    index: HashMap<ParticipantId, usize>,
}

impl PoolTable {
    fn row(&mut self, participant: ParticipantId) -> &mut Standing {
        let next = self.rows.len();
        let i = *self.index.entry(participant).or_insert(next);
        if i == next {
            self.rows.push(Standing::new(participant));
        }
        &mut self.rows[i]
    }
}

/// Compute ranked standings for every pool appearing in `matches`
///
/// Only pool matches with both slots filled are counted. Participants with
/// no completed match still get a zeroed row.
pub fn compute_standings<'a, I>(matches: I, policy: RankingPolicy) -> PoolStandings
where
    I: IntoIterator<Item = &'a Match>,
{
    let mut tables: BTreeMap<usize, PoolTable> = BTreeMap::new();

    for m in matches.into_iter().filter(|m| m.kind == MatchKind::Pool) {
        let (Some(a), Some(b)) = (m.participant_a, m.participant_b) else {
            continue;
        };
        let Some(pool) = m.pool else {
            log::warn!("Pool match {} has no pool index, skipping", m.label);
            continue;
        };
        let table = tables.entry(pool).or_default();
        table.row(a);
        table.row(b);

        let Some(winner) = m.winner else {
            continue;
        };
        let loser = if winner == a {
            b
        } else if winner == b {
            a
        } else {
            log::warn!(
                "Pool match {} has winner {} outside its slots, skipping",
                m.label,
                winner
            );
            continue;
        };

        let w = table.row(winner);
        w.played += 1;
        w.wins += 1;
        w.points += POINTS_PER_WIN;

        let l = table.row(loser);
        l.played += 1;
        l.losses += 1;
    }

    tables
        .into_iter()
        .map(|(pool, table)| {
            let mut rows = table.rows;
            rows.sort_by(|x, y| policy.compare(x, y));
            (pool, rows)
        })
        .collect()
}

/// Standings in points-table order
pub fn display_standings<'a, I>(matches: I) -> PoolStandings
where
    I: IntoIterator<Item = &'a Match>,
{
    compute_standings(matches, RankingPolicy::Display)
}

/// Standings in cross-pool seeding order
pub fn seeding_standings<'a, I>(matches: I) -> PoolStandings
where
    I: IntoIterator<Item = &'a Match>,
{
    compute_standings(matches, RankingPolicy::Seeding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::models::MatchId;

    fn result(id: usize, pool: usize, a: i64, b: i64, winner: Option<i64>) -> Match {
        let mut m = Match::pool(
            MatchId(id),
            pool,
            (id, id + 1),
            ParticipantId(a),
            ParticipantId(b),
        );
        m.winner = winner.map(ParticipantId);
        m
    }

    fn ids(rows: &[Standing]) -> Vec<i64> {
        rows.iter().map(|s| s.participant.0).collect()
    }

    #[test]
    fn test_single_result() {
        let matches = vec![result(0, 0, 1, 2, Some(1))];
        let standings = display_standings(&matches);
        let pool = &standings[&0];

        assert_eq!(
            pool[0],
            Standing {
                participant: ParticipantId(1),
                played: 1,
                wins: 1,
                losses: 0,
                points: 2,
            }
        );
        assert_eq!(
            pool[1],
            Standing {
                participant: ParticipantId(2),
                played: 1,
                wins: 0,
                losses: 1,
                points: 0,
            }
        );
    }

    #[test]
    fn test_unplayed_participants_listed() {
        let matches = vec![result(0, 0, 1, 2, None), result(1, 0, 1, 3, Some(3))];
        let standings = seeding_standings(&matches);
        let pool = &standings[&0];
        assert_eq!(pool.len(), 3);
        assert_eq!(ids(pool), vec![3, 2, 1]);
        assert_eq!(pool[1].played, 0);
    }

    #[test]
    fn test_pools_kept_separate() {
        let matches = vec![result(0, 0, 1, 2, Some(2)), result(1, 1, 5, 6, Some(5))];
        let standings = display_standings(&matches);
        assert_eq!(standings.len(), 2);
        assert_eq!(ids(&standings[&0]), vec![2, 1]);
        assert_eq!(ids(&standings[&1]), vec![5, 6]);
    }

    #[test]
    fn test_seeding_prefers_fewer_losses() {
        // 1, 2 and 4 each win once; only 2 has also lost.
        let matches = vec![
            result(0, 0, 2, 3, Some(2)),
            result(1, 0, 2, 4, Some(4)),
            result(2, 0, 1, 3, Some(1)),
        ];
        let seeding = seeding_standings(&matches);
        assert_eq!(ids(&seeding[&0])[..3], [4, 1, 2]);
    }

    #[test]
    fn test_policies_can_disagree() {
        // Display only looks at points and wins, so equal records keep
        // first-appearance order; seeding breaks the tie on losses.
        let matches = vec![
            result(0, 0, 2, 3, Some(2)),
            result(1, 0, 2, 4, Some(4)),
            result(2, 0, 1, 5, Some(1)),
        ];
        let display = display_standings(&matches);
        let seeding = seeding_standings(&matches);
        assert_eq!(ids(&display[&0])[..2], [2, 4]);
        assert_eq!(ids(&seeding[&0])[..2], [4, 1]);
    }

    #[test]
    fn test_match_without_pool_skipped() {
        let mut stray = result(1, 0, 7, 8, Some(7));
        stray.pool = None;
        let standings = display_standings(&[result(0, 0, 1, 2, Some(1)), stray]);
        assert_eq!(standings.len(), 1);
        assert_eq!(ids(&standings[&0]), vec![1, 2]);
    }

    #[test]
    fn test_knockout_matches_ignored() {
        let mut m = result(0, 0, 1, 2, Some(1));
        m.kind = MatchKind::Knockout;
        assert!(display_standings(&[m]).is_empty());
    }
}
