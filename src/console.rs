// Console controller: starts the reporters, performs the initial load and
// serves the line-oriented command loop until `quit` or end of input.

use crate::api::{Config, UserSource};
use crate::error::LoadError;
use crate::output::Output;
use crate::reporters::{Clock, Shaker};
use crate::state::{RunState, ShakeTarget};
use crate::table;
use crate::users::{self, User};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufRead, IsTerminal, Write};
use std::thread;

pub const COMMAND_HINT: &str = "Commands: reload | toggle image | toggle table | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Reload,
    Toggle(ShakeTarget),
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    /// Commands match exactly; only the line terminator is removed.
    pub fn parse(line: &str) -> Self {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        match line {
            "reload" => Command::Reload,
            "toggle image" => Command::Toggle(ShakeTarget::Image),
            "toggle table" => Command::Toggle(ShakeTarget::Table),
            "quit" => Command::Quit,
            "" => Command::Empty,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Owns the run state, the output gate and the most recently loaded users.
pub struct Console<S> {
    source: S,
    config: Config,
    state: RunState,
    out: Output,
    users: Vec<User>,
}

impl<S: UserSource> Console<S> {
    pub fn new(source: S, config: Config, out: Output) -> Self {
        Console {
            source,
            config,
            state: RunState::new(),
            out,
            users: Vec::new(),
        }
    }

    /// Users from the last successful load.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Run until `quit` or end of `input`, then stop and join the reporters.
    pub fn run(&mut self, input: impl BufRead) -> Result<()> {
        let Console {
            source,
            config,
            state,
            out,
            users,
        } = self;
        let (state, out, source, config) = (&*state, &*out, &*source, &*config);

        out.line(&format!("Console App - fetching users from {}", source.describe()))
            .context("Failed to write banner")?;

        thread::scope(|s| {
            let clock = s.spawn(move || Clock::new(config.clock_interval, config.clear_line).run(state, out));
            let image = s.spawn(move || Shaker::new(ShakeTarget::Image, config.shake_interval).run(state, out));
            let table = s.spawn(move || Shaker::new(ShakeTarget::Table, config.shake_interval).run(state, out));

            let served = serve(source, config, state, out, users, input);

            state.stop();
            for (name, handle) in [("clock", clock), ("image", image), ("table", table)] {
                if handle.join().is_err() {
                    log::warn!("{name} reporter panicked");
                }
            }
            served
        })?;

        out.line("Bye").context("Failed to write farewell")?;
        Ok(())
    }
}

/// The command loop. Only the output gate is shared with the reporters, and
/// it is never held while fetching or reading input.
fn serve(
    source: &dyn UserSource,
    config: &Config,
    state: &RunState,
    out: &Output,
    users: &mut Vec<User>,
    mut input: impl BufRead,
) -> Result<()> {
    if let Some(loaded) = load(source, config, out)? {
        *users = loaded;
    }

    let mut line = Vec::new();
    loop {
        out.write_with(|w| write!(w, "\n{COMMAND_HINT}\n> "))
            .context("Failed to write prompt")?;
        line.clear();
        if input.read_until(b'\n', &mut line).context("Failed to read command")? == 0 {
            log::info!("end of input, shutting down");
            break;
        }
        // Bytes that are not UTF-8 just make an unknown command.
        match Command::parse(&String::from_utf8_lossy(&line)) {
            Command::Reload => {
                if let Some(loaded) = load(source, config, out)? {
                    *users = loaded;
                }
            }
            Command::Toggle(target) => {
                let verb = if state.toggle(target) { "started" } else { "stopped" };
                out.line(&format!("{}: {verb} shaking", target.title()))?;
            }
            Command::Quit => break,
            Command::Empty => continue,
            Command::Unknown(cmd) => out.line(&format!("Unknown command: {cmd}"))?,
        }
    }
    Ok(())
}

/// Fetch, parse and print the users. Load failures are reported on the
/// console and yield `None`; only console write failures are errors.
fn load(source: &dyn UserSource, config: &Config, out: &Output) -> Result<Option<Vec<User>>> {
    log::info!("loading users from {}", source.describe());
    let spinner = loading_spinner(config);
    let result = source.fetch().and_then(|body| users::parse(&body));
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match result {
        Ok(loaded) if loaded.is_empty() => {
            log::info!("server returned no users");
            out.line("\nNo users found.")?;
            Ok(Some(loaded))
        }
        Ok(loaded) => {
            log::info!("loaded {} users", loaded.len());
            out.write_with(|w| {
                writeln!(w)?;
                table::render(&loaded, w)?;
                writeln!(w)
            })
            .context("Failed to write user table")?;
            Ok(Some(loaded))
        }
        Err(err) => {
            log::warn!("loading users failed: {err}");
            out.line(&format!("\n{}", load_error_line(&err)))?;
            Ok(None)
        }
    }
}

pub fn load_error_line(err: &LoadError) -> String {
    format!("Error loading users: {err}")
}

fn loading_spinner(config: &Config) -> Option<ProgressBar> {
    if !config.spinner || !std::io::stderr().is_terminal() {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Loading users...");
    Some(spinner)
}
