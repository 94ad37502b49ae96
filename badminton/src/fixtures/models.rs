//! Fixture data models: participants, matches, pools and standings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Participant identifier, assigned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub i64);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque match identifier: the match's index in its [`MatchSet`](super::MatchSet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchId(pub usize);

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single entrant. Doubles pairs are one atomic entrant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Partner for doubles
    pub partner_name: Option<String>,
}

impl Participant {
    /// Create a singles participant
    pub fn singles(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId(id),
            name: name.into(),
            partner_name: None,
        }
    }

    /// Create a doubles pair
    pub fn doubles(id: i64, name: impl Into<String>, partner_name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId(id),
            name: name.into(),
            partner_name: Some(partner_name.into()),
        }
    }

    /// Name as rendered in fixtures, `"Name & PartnerName"` for pairs
    pub fn display_name(&self) -> String {
        match &self.partner_name {
            Some(partner) => format!("{} & {}", self.name, partner),
            None => self.name.clone(),
        }
    }
}

/// Match type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKind {
    /// Round-robin match inside a pool
    Pool,
    /// Single-elimination bracket match
    Knockout,
    /// Cross-pool semifinal or final
    KnockoutFinal,
}

impl MatchKind {
    /// Whether matches of this kind advance along bracket links
    pub fn is_knockout(self) -> bool {
        matches!(self, MatchKind::Knockout | MatchKind::KnockoutFinal)
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Pool => write!(f, "pool"),
            MatchKind::Knockout => write!(f, "knockout"),
            MatchKind::KnockoutFinal => write!(f, "knockout-final"),
        }
    }
}

/// Participant slot of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Side fed by the match at `index` within its round
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Side::A } else { Side::B }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Forward link from a match to the slot its winner advances into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextMatch {
    pub match_id: MatchId,
    pub side: Side,
}

/// Progress of a match, derived from its schedule and winner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Unscheduled,
    Scheduled,
    Completed,
}

/// A fixture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// Stable host-facing identifier, e.g. `r1-m0` or `pool0-m1-2`
    pub label: String,
    /// Knockout round (1-indexed); `None` for pool matches
    pub round: Option<u32>,
    /// Pool index; `None` for knockout matches
    pub pool: Option<usize>,
    pub kind: MatchKind,
    pub participant_a: Option<ParticipantId>,
    pub participant_b: Option<ParticipantId>,
    pub winner: Option<ParticipantId>,
    pub score_a: u32,
    pub score_b: u32,
    pub scheduled_time: Option<DateTime<Utc>>,
    /// `None` only for terminal matches (the final, pool matches)
    pub next: Option<NextMatch>,
}

impl Match {
    /// Create a knockout-type match with no result
    pub fn knockout(
        id: MatchId,
        label: String,
        kind: MatchKind,
        round: u32,
        participants: (Option<ParticipantId>, Option<ParticipantId>),
        next: Option<NextMatch>,
    ) -> Self {
        Self {
            id,
            label,
            round: Some(round),
            pool: None,
            kind,
            participant_a: participants.0,
            participant_b: participants.1,
            winner: None,
            score_a: 0,
            score_b: 0,
            scheduled_time: None,
            next,
        }
    }

    /// Create a round-robin pool match
    pub fn pool(
        id: MatchId,
        pool: usize,
        positions: (usize, usize),
        a: ParticipantId,
        b: ParticipantId,
    ) -> Self {
        Self {
            id,
            label: format!("pool{}-m{}-{}", pool, positions.0, positions.1),
            round: None,
            pool: Some(pool),
            kind: MatchKind::Pool,
            participant_a: Some(a),
            participant_b: Some(b),
            winner: None,
            score_a: 0,
            score_b: 0,
            scheduled_time: None,
            next: None,
        }
    }

    /// Participant in the given slot
    pub fn slot(&self, side: Side) -> Option<ParticipantId> {
        match side {
            Side::A => self.participant_a,
            Side::B => self.participant_b,
        }
    }

    /// Mutable access to the given slot
    pub fn slot_mut(&mut self, side: Side) -> &mut Option<ParticipantId> {
        match side {
            Side::A => &mut self.participant_a,
            Side::B => &mut self.participant_b,
        }
    }

    /// Whether `participant` occupies either slot
    pub fn has_participant(&self, participant: ParticipantId) -> bool {
        self.participant_a == Some(participant) || self.participant_b == Some(participant)
    }

    /// The losing participant, if a winner is recorded and both slots are filled
    pub fn loser(&self) -> Option<ParticipantId> {
        let winner = self.winner?;
        if self.participant_a == Some(winner) {
            self.participant_b
        } else if self.participant_b == Some(winner) {
            self.participant_a
        } else {
            None
        }
    }

    pub fn is_completed(&self) -> bool {
        self.winner.is_some()
    }

    pub fn status(&self) -> MatchStatus {
        if self.winner.is_some() {
            MatchStatus::Completed
        } else if self.scheduled_time.is_some() {
            MatchStatus::Scheduled
        } else {
            MatchStatus::Unscheduled
        }
    }
}

/// A round-robin group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub index: usize,
    pub participants: Vec<ParticipantId>,
}

impl Pool {
    /// Letter shown for the pool: 0 → A, 1 → B, ...
    pub fn letter(&self) -> char {
        u8::try_from(self.index)
            .ok()
            .and_then(|i| b'A'.checked_add(i))
            .filter(u8::is_ascii_uppercase)
            .map_or('?', char::from)
    }
}

/// A participant's record within a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub participant: ParticipantId,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub points: u32,
}

impl Standing {
    pub fn new(participant: ParticipantId) -> Self {
        Self {
            participant,
            played: 0,
            wins: 0,
            losses: 0,
            points: 0,
        }
    }

    /// Win rate as a whole percentage, 0 with no matches played
    pub fn win_rate_percent(&self) -> u32 {
        if self.played == 0 {
            0
        } else {
            (self.wins * 100 + self.played / 2) / self.played
        }
    }
}
