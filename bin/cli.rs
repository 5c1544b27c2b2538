use crate::io::Io;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::draughts::Board;
use lib::rules::MoveSequence;
use std::cmp::min;
use std::io::{stderr, stdin, stdout, Read, Write};
use tracing::{info, instrument, warn, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Plays move sequences on a draughts board and prints the board after each one.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// Move sequences such as `2,1-3,0` or `5,2x3,4x1,2`, read from stdin if none are given.
    sequences: Vec<MoveSequence>,
}

impl Cli {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let filter = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        let writer = layer()
            .pretty()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(stderr);

        registry().with(filter).with(writer).init();

        let mut io = Io::new(stdout(), stdin());
        let mut board = Board::default();
        io.send(&board)?;

        if self.sequences.is_empty() {
            while let Some(line) = io.recv()? {
                match line.trim() {
                    "" => continue,
                    line => match line.parse() {
                        Ok(s) => Self::play(&mut io, &mut board, &s)?,
                        Err(e) => {
                            warn!(%line, "{}", e);
                            io.send(format_args!("! {line}: {e}"))?;
                        }
                    },
                }
            }
        } else {
            for s in &self.sequences {
                Self::play(&mut io, &mut board, s)?;
            }
        }

        Ok(())
    }

    fn play<W: Write, R: Read>(
        io: &mut Io<W, R>,
        board: &mut Board,
        sequence: &MoveSequence,
    ) -> Result<(), Anyhow> {
        match board.play(sequence) {
            Err(e) => {
                warn!(%sequence, "{}", e);
                io.send(format_args!("! {sequence}: {e}"))?;
            }

            Ok(effect) => {
                let captures = effect.captured().len();
                info!(%sequence, capture = effect.is_capture(), captures);
                io.send(format_args!("> {sequence}"))?;
            }
        }

        io.send(&*board)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::empty;

    #[test]
    fn play_reports_each_sequence_followed_by_the_board() {
        let mut out = Vec::new();
        let mut board = Board::default();
        let mut io = Io::new(&mut out, empty());

        Cli::play(&mut io, &mut board, &"2,1-3,0".parse().unwrap()).unwrap();
        Cli::play(&mut io, &mut board, &"0,1-1,0".parse().unwrap()).unwrap();
        drop(io);

        let expected = format!("> 2,1-3,0\n{board}\n! 0,1-1,0: step 1 is illegal\n{board}\n");
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn rejected_sequences_leave_the_board_as_it_was() {
        let mut out = Vec::new();
        let mut board = Board::default();
        let mut io = Io::new(&mut out, empty());

        Cli::play(&mut io, &mut board, &"3,0-4,1".parse().unwrap()).unwrap();
        drop(io);

        assert_eq!(board, Board::default());
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("! 3,0-4,1: no piece at `3,0`\n"));
    }
}
