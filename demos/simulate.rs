//! Plays one round between the reference strategies and prints the log.
//!
//! Usage: `cargo run --example simulate -- [seed] [players]`. Set `RUST_LOG`
//! to `info` or `debug` to follow the engine's own logging.

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use president::format::{RankSymbols, format_hand};
use president::{Aggressive, Conservative, Player, Round, RoundOptions};

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let seed = args.next().and_then(|arg| arg.parse().ok()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let players: usize = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(5);

    println!("President round, seed {seed}, {players} players");

    let seats = (0..players)
        .map(|seat| {
            if seat % 2 == 0 {
                Player::new(Conservative)
            } else {
                Player::new(Aggressive)
            }
        })
        .collect();
    let options = RoundOptions::default().with_players(players);

    let mut round = match Round::new(options, seats, seed) {
        Ok(round) => round,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    let result = match round.play() {
        Ok(result) => result,
        Err(err) => {
            println!("Round stopped: {err}");
            let symbols = RankSymbols::default();
            for (seat, hand) in round.hands().iter().enumerate() {
                println!("  seat {seat}: {}", format_hand(hand, &symbols));
            }
            return;
        }
    };

    if let Some(log) = &result.event_log {
        println!("{log}");
    }

    println!();
    for (place, seat) in result.ranking().into_iter().enumerate() {
        let player = &round.players()[seat];
        let note = if result.violators.contains(&seat) {
            " (removed)"
        } else {
            ""
        };
        println!("{}. seat {seat} {}{note}", place + 1, player.name());
    }
}
