// Background loops that print status lines: a live clock and the shake
// animations. Each loop checks `RunState::is_running` once per tick, and
// again under the output lock, so nothing is written once shutdown begins.

use crate::output::Output;
use crate::state::{RunState, ShakeTarget};
use chrono::Local;
use crossterm::cursor::MoveToColumn;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Overwrites the current line with the local time. On a terminal the line
/// is cleared with crossterm; otherwise a carriage return and padding are
/// used so redirected output carries no escape sequences.
pub struct Clock {
    interval: Duration,
    clear_line: bool,
}

impl Clock {
    pub fn new(interval: Duration, clear_line: bool) -> Self {
        Clock {
            interval,
            clear_line,
        }
    }

    /// One tick. Returns whether the time was written.
    pub fn tick(&self, state: &RunState, out: &Output) -> io::Result<bool> {
        let now = Local::now().format("%H:%M:%S").to_string();
        out.write_with(|w| {
            if !state.is_running() {
                return Ok(false);
            }
            if self.clear_line {
                w.queue(MoveToColumn(0))?.queue(Clear(ClearType::CurrentLine))?;
                write!(w, "Current time: {now}")?;
            } else {
                write!(w, "\rCurrent time: {now}      ")?;
            }
            Ok(true)
        })
    }

    pub fn run(self, state: &RunState, out: &Output) {
        log::debug!("clock reporter started");
        while state.is_running() {
            if let Err(err) = self.tick(state, out) {
                log::debug!("clock write failed: {err}");
            }
            thread::sleep(self.interval);
        }
        log::debug!("clock reporter stopped");
    }
}

/// Prints `[LABEL] SHAKE (n)` while its target is enabled. The step counter
/// only moves on emitted lines and survives toggles.
pub struct Shaker {
    target: ShakeTarget,
    interval: Duration,
    step: u8,
}

impl Shaker {
    pub fn new(target: ShakeTarget, interval: Duration) -> Self {
        Shaker {
            target,
            interval,
            step: 0,
        }
    }

    /// One tick. Returns whether a line was written.
    pub fn tick(&mut self, state: &RunState, out: &Output) -> io::Result<bool> {
        if !state.is_shaking(self.target) {
            return Ok(false);
        }
        let (label, step) = (self.target.label(), self.step);
        let written = out.write_with(|w| {
            if !state.is_running() {
                return Ok(false);
            }
            write!(w, "\n[{label}] SHAKE ({step})\n")?;
            Ok(true)
        })?;
        if written {
            self.step = (self.step + 1) % 4;
        }
        Ok(written)
    }

    pub fn run(mut self, state: &RunState, out: &Output) {
        let label = self.target.label();
        log::debug!("{label} shake reporter started");
        while state.is_running() {
            if let Err(err) = self.tick(state, out) {
                log::debug!("{label} shake write failed: {err}");
            }
            thread::sleep(self.interval);
        }
        log::debug!("{label} shake reporter stopped");
    }
}
