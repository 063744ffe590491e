//! Line-oriented driver around a single [`Board`].
//!
//! A [`Session`] feeds lines through the parser and applies whatever parses.
//! Blank lines and `#` comments are skipped, `EXIT` stops the run, and each
//! report with a robot on the board is written to the output as one line.

#![cfg(feature = "std")]

use std::io::{BufRead, Write};

use log::{debug, info, trace};

use crate::grid::{parse, Board};

/// Counters for one [`Session::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RunSummary {
    /// Lines read, including the `EXIT` line if there was one.
    pub lines: usize,
    /// Commands the board accepted. Reports always count.
    pub applied: usize,
    /// Parsed commands the board refused.
    pub rejected: usize,
    /// Lines that did not parse.
    pub ignored: usize,
    /// Report lines written to the output.
    pub reports: usize,
    /// Whether the run ended on `EXIT` rather than end of input.
    pub exited: bool,
}

/// How a single line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank or comment line.
    Skipped,
    /// The line did not parse.
    Ignored,
    /// The board refused the command.
    Rejected,
    /// The board accepted the command; carries the report text, if any.
    Applied(Option<String>),
    /// `EXIT`.
    Exit,
}

#[derive(Debug, Default)]
pub struct Session {
    board: Board,
}

fn is_exit(line: &str) -> bool {
    line.eq_ignore_ascii_case("EXIT")
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an existing board.
    pub fn with_board(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Handle a single line without doing any I/O.
    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            trace!("skipping line {:?}", line);
            return LineOutcome::Skipped;
        }
        if is_exit(trimmed) {
            return LineOutcome::Exit;
        }
        let Some(command) = parse(trimmed) else {
            debug!("ignoring unrecognised line {:?}", trimmed);
            return LineOutcome::Ignored;
        };
        match command.try_apply(&mut self.board) {
            Ok(report) => {
                trace!("applied {}", command);
                LineOutcome::Applied(report)
            }
            Err(e) => {
                debug!("{} refused: {}", command, e);
                LineOutcome::Rejected
            }
        }
    }

    /// Process `input` line by line, writing reports to `output`, until end
    /// of input or `EXIT`.
    ///
    /// Lines are decoded lossily, so bytes that are not UTF-8 make that line
    /// unparseable without ending the run.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> anyhow::Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            summary.lines += 1;
            match self.process_line(&line) {
                LineOutcome::Skipped => {}
                LineOutcome::Ignored => summary.ignored += 1,
                LineOutcome::Rejected => summary.rejected += 1,
                LineOutcome::Applied(report) => {
                    summary.applied += 1;
                    if let Some(report) = report {
                        writeln!(output, "{}", report)?;
                        output.flush()?;
                        summary.reports += 1;
                    }
                }
                LineOutcome::Exit => {
                    summary.exited = true;
                    break;
                }
            }
        }
        info!(
            "processed {} lines: {} applied, {} rejected, {} ignored",
            summary.lines, summary.applied, summary.rejected, summary.ignored
        );
        Ok(summary)
    }
}
