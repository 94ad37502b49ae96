//! Result recording and winner propagation.
//!
//! A match moves `Unscheduled` → `Scheduled` → `Completed` as a schedule and
//! then a winner are recorded; clearing the result drops it back to
//! `Scheduled` or `Unscheduled`. Recording a winner on a linked match writes
//! the winner into the designated slot of the next match.
//!
//! Clearing a result always empties the downstream slot, even when the
//! downstream match has since been played or edited. Nothing further down
//! the bracket is touched.

use super::arena::MatchSet;
use super::errors::{FixtureError, FixtureResult};
use super::models::{MatchId, ParticipantId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result submitted for a match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// `None` records scores without deciding the match
    pub winner: Option<ParticipantId>,
    pub score_a: u32,
    pub score_b: u32,
    pub scheduled_time: Option<DateTime<Utc>>,
}

impl MatchOutcome {
    /// A decided match with final scores
    pub fn won_by(winner: ParticipantId, score_a: u32, score_b: u32) -> Self {
        Self {
            winner: Some(winner),
            score_a,
            score_b,
            scheduled_time: None,
        }
    }

    pub fn at(mut self, scheduled_time: DateTime<Utc>) -> Self {
        self.scheduled_time = Some(scheduled_time);
        self
    }
}

/// Record a result and advance the winner along the match's link
///
/// The outcome's scores, winner and schedule overwrite the match's. A
/// winner must occupy one of the match's slots.
pub fn record_result(
    matches: &mut MatchSet,
    match_id: MatchId,
    outcome: MatchOutcome,
) -> FixtureResult<()> {
    let m = matches
        .get_mut(match_id)
        .ok_or(FixtureError::MatchNotFound(match_id))?;

    if let Some(winner) = outcome.winner
        && !m.has_participant(winner)
    {
        return Err(FixtureError::WinnerNotInMatch { match_id, winner });
    }

    m.winner = outcome.winner;
    m.score_a = outcome.score_a;
    m.score_b = outcome.score_b;
    m.scheduled_time = outcome.scheduled_time;
    let next = m.next;

    log::debug!(
        "Match {} result: winner {:?}, {}-{}",
        m.label,
        outcome.winner,
        outcome.score_a,
        outcome.score_b
    );

    if let Some(next) = next
        && let Some(target) = matches.get_mut(next.match_id)
    {
        *target.slot_mut(next.side) = outcome.winner;
        log::debug!(
            "Advanced {:?} to match {} side {}",
            outcome.winner,
            target.label,
            next.side
        );
    }

    Ok(())
}

/// Clear a match's winner and empty the slot it fed downstream
pub fn clear_result(matches: &mut MatchSet, match_id: MatchId) -> FixtureResult<()> {
    let m = matches
        .get_mut(match_id)
        .ok_or(FixtureError::MatchNotFound(match_id))?;
    m.winner = None;
    let next = m.next;
    log::debug!("Cleared result of match {}", m.label);

    if let Some(next) = next
        && let Some(target) = matches.get_mut(next.match_id)
    {
        if target.winner.is_some() {
            log::warn!(
                "Clearing side {} of match {} which already has a result",
                next.side,
                target.label
            );
        }
        *target.slot_mut(next.side) = None;
    }

    Ok(())
}

/// Set or remove a match's scheduled time, in any state
pub fn schedule_match(
    matches: &mut MatchSet,
    match_id: MatchId,
    scheduled_time: Option<DateTime<Utc>>,
) -> FixtureResult<()> {
    let m = matches
        .get_mut(match_id)
        .ok_or(FixtureError::MatchNotFound(match_id))?;
    m.scheduled_time = scheduled_time;
    Ok(())
}
