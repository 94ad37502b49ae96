//! Match arena for a tournament.
//!
//! Matches are addressed by [`MatchId`], their index in the arena. Freshly
//! generated fixtures use ids local to their own list; [`MatchSet::append`]
//! rebases those ids and their forward links onto the end of the arena.

use super::errors::{FixtureError, FixtureResult};
use super::models::{Match, MatchId, MatchKind, Side};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Range;

/// All matches of one tournament
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSet {
    matches: Vec<Match>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn get(&self, id: MatchId) -> Option<&Match> {
        self.matches.get(id.0)
    }

    pub fn get_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.matches.get_mut(id.0)
    }

    /// Look up a match by id, failing with `MatchNotFound`
    pub fn require(&self, id: MatchId) -> FixtureResult<&Match> {
        self.get(id).ok_or(FixtureError::MatchNotFound(id))
    }

    pub fn find_by_label(&self, label: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.label == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter()
    }

    /// Append generated matches whose ids and links are local to `matches`
    ///
    /// Returns the id range the matches occupy in the arena.
    pub fn append(&mut self, matches: Vec<Match>) -> Range<MatchId> {
        let offset = self.matches.len();
        for mut m in matches {
            m.id = MatchId(m.id.0 + offset);
            if let Some(next) = m.next.as_mut() {
                next.match_id = MatchId(next.match_id.0 + offset);
            }
            self.matches.push(m);
        }
        MatchId(offset)..MatchId(self.matches.len())
    }

    pub fn has_kind(&self, kind: MatchKind) -> bool {
        self.matches.iter().any(|m| m.kind == kind)
    }

    pub fn pool_matches(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|m| m.kind == MatchKind::Pool)
    }

    /// Bracket and cross-pool matches
    pub fn knockout_matches(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|m| m.kind.is_knockout())
    }

    /// Knockout matches of a given kind in a given round
    pub fn round(&self, kind: MatchKind, round: u32) -> impl Iterator<Item = &Match> {
        self.matches
            .iter()
            .filter(move |m| m.kind == kind && m.round == Some(round))
    }

    pub fn completed_count(&self) -> usize {
        self.matches.iter().filter(|m| m.is_completed()).count()
    }

    /// Check that the matches of `kind` form a binary in-tree
    ///
    /// Every match but one links forward into the following round, every
    /// linked match receives exactly one link per side, and the single
    /// unlinked match is the root. An empty set is a valid (empty) tree.
    pub fn validate_bracket(&self, kind: MatchKind) -> FixtureResult<()> {
        let mut incoming: HashMap<MatchId, (usize, usize)> = HashMap::new();
        let mut roots = Vec::new();
        let mut total = 0;

        for m in self.matches.iter().filter(|m| m.kind == kind) {
            total += 1;
            let round = m.round.ok_or_else(|| {
                FixtureError::MalformedBracket(format!("match {} has no round", m.label))
            })?;

            let Some(next) = m.next else {
                roots.push(m.id);
                continue;
            };

            let target = self.get(next.match_id).ok_or_else(|| {
                FixtureError::MalformedBracket(format!(
                    "match {} links to missing match {}",
                    m.label, next.match_id
                ))
            })?;
            if target.kind != kind || target.round != Some(round + 1) {
                return Err(FixtureError::MalformedBracket(format!(
                    "match {} links to {} outside the following round",
                    m.label, target.label
                )));
            }

            let entry = incoming.entry(next.match_id).or_default();
            match next.side {
                Side::A => entry.0 += 1,
                Side::B => entry.1 += 1,
            }
        }

        if total == 0 {
            return Ok(());
        }
        if roots.len() != 1 {
            return Err(FixtureError::MalformedBracket(format!(
                "expected one final, found {}",
                roots.len()
            )));
        }

        for m in self
            .matches
            .iter()
            .filter(|m| m.kind == kind && m.round != Some(1))
        {
            if incoming.get(&m.id) != Some(&(1, 1)) {
                return Err(FixtureError::MalformedBracket(format!(
                    "match {} must be fed once on each side",
                    m.label
                )));
            }
        }

        Ok(())
    }
}

impl From<Vec<Match>> for MatchSet {
    fn from(matches: Vec<Match>) -> Self {
        let mut set = MatchSet::new();
        set.append(matches);
        set
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
