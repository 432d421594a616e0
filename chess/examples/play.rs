// Simple command-line application to play chess
//
// Enter moves as two squares, like `e2 e4`. Enter `undo` to take back the last move.
// Set `RUST_LOG=debug` to see why moves are rejected.

use rookery::{pretty::PrettyStyle, Coord, Game, Side};
use std::io::{self, BufRead, Write};

fn parse_squares(s: &str) -> Option<(Coord, Coord)> {
    let mut iter = s.split_ascii_whitespace();
    let src = iter.next()?.parse().ok()?;
    let dst = iter.next()?.parse().ok()?;
    if iter.next().is_some() {
        return None;
    }
    Some((src, dst))
}

fn main() {
    env_logger::init();

    let mut stdin = io::stdin().lock();
    let mut game = Game::new();

    loop {
        if let Some(outcome) = game.outcome() {
            println!("{}", game.pretty(PrettyStyle::Utf8));
            println!("Game finished: {}", outcome);
            break;
        }

        println!("{}", game.pretty(PrettyStyle::Utf8));
        let side = match game.side() {
            Side::White => "White",
            Side::Black => "Black",
        };
        if game.is_check() {
            println!("{} is in check", side);
        }
        print!("{} move: ", side);
        io::stdout().flush().unwrap();
        let mut s = String::new();
        if stdin.read_line(&mut s).unwrap() == 0 {
            break;
        }
        let s = s.trim();

        if s == "undo" {
            match game.undo() {
                Some(mv) => println!("Undone {}", mv),
                None => println!("Nothing to undo"),
            }
            println!();
            continue;
        }

        let (src, dst) = match parse_squares(s) {
            Some(squares) => squares,
            None => {
                println!("Cannot parse squares, expected something like \"e2 e4\"");
                println!();
                continue;
            }
        };

        if let Err(e) = game.play(src, dst) {
            println!("Bad move: {}", e);
        }
        println!();
    }
}
