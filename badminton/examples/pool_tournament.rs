//! Pool Tournament Example
//!
//! Runs a two-pool tournament from registration to the final and prints the
//! points tables along the way.

use badminton::fixtures::{MatchOutcome, Participant, RankingPolicy};
use badminton::tournament::{Tournament, TournamentConfig, TournamentManager};

fn name(tournament: &Tournament, id: Option<badminton::ParticipantId>) -> String {
    id.and_then(|id| tournament.participant(id))
        .map_or_else(|| "TBD".to_string(), Participant::display_name)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Pool Tournament Example ===\n");

    let mut manager = TournamentManager::with_seed(2026);
    let config = TournamentConfig::pools("Club Doubles".to_string(), 8, 2).doubles();
    let id = manager.create_tournament(config, Vec::new())?;

    let pairs = [
        ("Ana", "Bea"),
        ("Cho", "Dev"),
        ("Eli", "Fay"),
        ("Gus", "Hal"),
        ("Ivy", "Jon"),
        ("Kai", "Lea"),
        ("Mo", "Ned"),
        ("Oli", "Pia"),
    ];
    for (i, (a, b)) in pairs.iter().enumerate() {
        manager.register_participant(id, Participant::doubles(i as i64 + 1, *a, *b))?;
    }

    let tournament = manager.tournament(id)?;
    for pool in tournament.pools() {
        let names: Vec<_> = pool
            .participants
            .iter()
            .map(|&p| name(tournament, Some(p)))
            .collect();
        println!("Pool {}: {}", pool.letter(), names.join(", "));
    }

    // Side A takes every pool match.
    let pool_matches: Vec<_> = tournament.matches().pool_matches().cloned().collect();
    for m in pool_matches {
        if let Some(winner) = m.participant_a {
            manager.record_result(id, m.id, MatchOutcome::won_by(winner, 21, 18))?;
        }
    }

    let tournament = manager.tournament(id)?;
    println!("\nPoints table:");
    for (pool, rows) in tournament.standings(RankingPolicy::Display) {
        println!("  Pool {}", (b'A' + pool as u8) as char);
        for (rank, row) in rows.iter().enumerate() {
            println!(
                "    {}. {:<12} P{} W{} L{} {:>3}% {:>2} pts",
                rank + 1,
                name(tournament, Some(row.participant)),
                row.played,
                row.wins,
                row.losses,
                row.win_rate_percent(),
                row.points
            );
        }
    }

    let finals = manager.generate_finals(id)?;
    println!("\nCross-pool finals:");
    let (semis, final_id) = {
        let tournament = manager.tournament(id)?;
        let semis: Vec<_> = tournament
            .matches()
            .iter()
            .filter(|m| finals.contains(&m.id) && m.round == Some(1))
            .cloned()
            .collect();
        for m in &semis {
            println!(
                "  {}: {} vs {}",
                m.label,
                name(tournament, m.participant_a),
                name(tournament, m.participant_b)
            );
        }
        (semis, finals.end.0 - 1)
    };

    for m in &semis {
        if let Some(winner) = m.participant_b {
            manager.record_result(id, m.id, MatchOutcome::won_by(winner, 19, 21))?;
        }
    }

    let final_id = badminton::MatchId(final_id);
    let final_match = manager.tournament(id)?.matches().require(final_id)?.clone();
    if let Some(winner) = final_match.participant_a {
        manager.record_result(id, final_id, MatchOutcome::won_by(winner, 21, 16))?;
    }

    let tournament = manager.tournament(id)?;
    println!("\nChampion: {}", name(tournament, tournament.champion()));
    let stats = tournament.stats();
    println!(
        "Fixtures: {} total, {} completed ({}%)",
        stats.total_matches, stats.completed_matches, stats.progress_percent
    );

    Ok(())
}
