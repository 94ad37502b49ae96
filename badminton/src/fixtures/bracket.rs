//! Single-elimination bracket construction.

use super::models::{Match, MatchId, MatchKind, NextMatch, Participant, Side};
use serde::{Deserialize, Serialize};

/// A knockout match tree with ids local to `matches`
///
/// Matches are ordered round by round; within a round by their position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub matches: Vec<Match>,
}

impl Bracket {
    /// Number of rounds, 0 for an empty bracket
    pub fn rounds(&self) -> u32 {
        self.matches.iter().filter_map(|m| m.round).max().unwrap_or(0)
    }

    /// The final, or `None` for an empty bracket
    pub fn final_match(&self) -> Option<&Match> {
        self.matches.iter().find(|m| m.next.is_none())
    }
}

/// Smallest power of two that seats `n` participants
pub fn bracket_size(n: usize) -> usize {
    n.next_power_of_two()
}

/// Build a single-elimination bracket from an ordered participant list
///
/// Round 1 pairs index `i` with index `size - 1 - i`, where `size` is the
/// participant count padded to a power of two; padding slots are left empty
/// as byes. Every later round is a placeholder. The match at position `i`
/// of a round feeds position `i / 2` of the next round, on side A when `i`
/// is even. Fewer than two participants produce an empty bracket.
pub fn build_knockout_bracket(participants: &[Participant]) -> Bracket {
    let n = participants.len();
    if n <= 1 {
        return Bracket::default();
    }

    let size = bracket_size(n);
    let mut matches = Vec::with_capacity(size - 1);
    let mut round = 1u32;
    let mut in_round = size / 2;
    let mut next_round_start = in_round;

    while in_round >= 1 {
        for i in 0..in_round {
            let next = (in_round > 1).then(|| NextMatch {
                match_id: MatchId(next_round_start + i / 2),
                side: Side::for_index(i),
            });
            let slots = if round == 1 {
                (
                    participants.get(i).map(|p| p.id),
                    participants.get(size - 1 - i).map(|p| p.id),
                )
            } else {
                (None, None)
            };

            matches.push(Match::knockout(
                MatchId(matches.len()),
                format!("r{}-m{}", round, i),
                MatchKind::Knockout,
                round,
                slots,
                next,
            ));
        }

        in_round /= 2;
        next_round_start += in_round;
        round += 1;
    }

    log::info!(
        "Built knockout bracket: {} participants, size {}, {} matches",
        n,
        size,
        matches.len()
    );

    Bracket { matches }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::arena::MatchSet;
    use crate::fixtures::models::ParticipantId;

    fn roster(n: i64) -> Vec<Participant> {
        (1..=n)
            .map(|i| Participant::singles(i, format!("Player {}", i)))
            .collect()
    }

    #[test]
    fn test_empty_and_single_participant() {
        assert!(build_knockout_bracket(&[]).matches.is_empty());
        assert!(build_knockout_bracket(&roster(1)).matches.is_empty());
    }

    #[test]
    fn test_two_participants_is_a_final() {
        let bracket = build_knockout_bracket(&roster(2));
        assert_eq!(bracket.matches.len(), 1);
        let m = &bracket.matches[0];
        assert_eq!(m.label, "r1-m0");
        assert_eq!(m.participant_a, Some(ParticipantId(1)));
        assert_eq!(m.participant_b, Some(ParticipantId(2)));
        assert!(m.next.is_none());
    }

    #[test]
    fn test_five_participants_padded_to_eight() {
        let bracket = build_knockout_bracket(&roster(5));
        assert_eq!(bracket.matches.len(), 7);
        assert_eq!(bracket.rounds(), 3);

        let round_one: Vec<_> = bracket
            .matches
            .iter()
            .filter(|m| m.round == Some(1))
            .collect();
        assert_eq!(round_one.len(), 4);

        // participant[0] vs participant[7] (bye)
        assert_eq!(round_one[0].participant_a, Some(ParticipantId(1)));
        assert_eq!(round_one[0].participant_b, None);
        // participant[4] vs participant[3]
        assert_eq!(round_one[3].participant_a, Some(ParticipantId(4)));
        assert_eq!(round_one[3].participant_b, Some(ParticipantId(5)));
        assert_eq!(round_one[1].participant_b, None);
        assert_eq!(round_one[2].participant_b, None);
    }

    #[test]
    fn test_links_follow_position() {
        let bracket = build_knockout_bracket(&roster(8));
        let by_label = |label: &str| {
            bracket
                .matches
                .iter()
                .find(|m| m.label == label)
                .unwrap()
        };

        let r1m2 = by_label("r1-m2").next.unwrap();
        assert_eq!(bracket.matches[r1m2.match_id.0].label, "r2-m1");
        assert_eq!(r1m2.side, Side::A);

        let r1m3 = by_label("r1-m3").next.unwrap();
        assert_eq!(bracket.matches[r1m3.match_id.0].label, "r2-m1");
        assert_eq!(r1m3.side, Side::B);

        let r2m1 = by_label("r2-m1").next.unwrap();
        assert_eq!(bracket.matches[r2m1.match_id.0].label, "r3-m0");
        assert_eq!(r2m1.side, Side::B);

        let final_match = bracket.final_match().unwrap();
        assert_eq!(final_match.label, "r3-m0");
        assert_eq!(final_match.participant_a, None);
    }

    #[test]
    fn test_bracket_is_binary_in_tree() {
        for n in 2..=33 {
            let set = MatchSet::from(build_knockout_bracket(&roster(n)).matches);
            assert!(
                set.validate_bracket(MatchKind::Knockout).is_ok(),
                "bracket of {} is malformed",
                n
            );
        }
    }
}
