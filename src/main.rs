//! Replay host for remote-input.
//!
//! Reads host notifications from stdin, one per line, drives an
//! [`InputHandler`] with them, and writes every emitted event to stdout as a
//! JSON line.
//!
//! # Script format
//!
//! ```text
//! # comments and blank lines are skipped
//! focus 4                 focus moved to view 4
//! key 20 down 1000        DPAD_DOWN pressed at t=1000ms
//! key 20 up 2300          released 1300ms later → longDown
//! key 85 1                raw action code, timestamp taken from the wall clock
//! toggle on               start forwarding key-downs
//! clear                   focus left the surface
//! ```
//!
//! Scripted timestamps only move the clock forward; an omitted timestamp uses
//! the milliseconds elapsed since start-up.
//!
//! # Usage
//!
//! ```text
//! remote-input [CONFIG] < script.txt
//! ```

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use std::sync::Arc;

use clap::Parser;
use remote_input::dispatch::JsonLinesBus;
use remote_input::domain::{KeyAction, KeyCode, Millis, ViewId};
use remote_input::infrastructure::{Clock, ManualClock, MonotonicClock};
use remote_input::observability::init_tracing;
use remote_input::{Config, InputHandler};
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(
    name = "remote-input",
    version,
    about = "Replay remote-control key and focus notifications as JSON events"
)]
struct Args {
    /// TOML configuration file
    config: Option<PathBuf>,
}

/// One parsed script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Key {
        key_code: KeyCode,
        raw_action: i32,
        time: Option<Millis>,
    },
    Focus(ViewId),
    Clear,
    Toggle(bool),
}

#[derive(Debug, Error, PartialEq, Eq)]
enum ScriptError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{command}` is missing its {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("invalid {argument} `{value}`")]
    InvalidValue {
        argument: &'static str,
        value: String,
    },

    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
}

/// Parses one line; `Ok(None)` for blank lines and comments.
fn parse_line(line: &str) -> Result<Option<Command>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };

    let parsed = match command {
        "key" => {
            let key_code = required(words.next(), "key", "key code")?;
            let action = required(words.next(), "key", "action")?;
            Command::Key {
                key_code: KeyCode(number(key_code, "key code")?),
                raw_action: parse_action(action)?,
                time: words.next().map(|t| number(t, "timestamp")).transpose()?,
            }
        }
        "focus" => {
            let view = required(words.next(), "focus", "view id")?;
            Command::Focus(ViewId(number(view, "view id")?))
        }
        "clear" => Command::Clear,
        "toggle" => match required(words.next(), "toggle", "state")? {
            "on" => Command::Toggle(true),
            "off" => Command::Toggle(false),
            other => {
                return Err(ScriptError::InvalidValue {
                    argument: "toggle state",
                    value: other.to_string(),
                })
            }
        },
        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };

    match words.next() {
        Some(extra) => Err(ScriptError::TrailingInput(extra.to_string())),
        None => Ok(Some(parsed)),
    }
}

fn required<'a>(
    word: Option<&'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, ScriptError> {
    word.ok_or(ScriptError::MissingArgument { command, argument })
}

fn number<T: std::str::FromStr>(value: &str, argument: &'static str) -> Result<T, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidValue {
        argument,
        value: value.to_string(),
    })
}

fn parse_action(value: &str) -> Result<i32, ScriptError> {
    match value {
        "down" => Ok(KeyAction::Down.raw()),
        "up" => Ok(KeyAction::Up.raw()),
        raw => number(raw, "action"),
    }
}

fn load_config(args: &Args) -> Result<Config, remote_input::InputError> {
    match &args.config {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    }
}

fn run(config: &Config) -> io::Result<()> {
    let live = MonotonicClock::new();
    let clock = Rc::new(ManualClock::new(0));
    let mut handler = InputHandler::with_clock(config, Rc::clone(&clock));
    let toggle = handler.key_down_toggle();

    let bus = Arc::new(JsonLinesBus::new(io::stdout()));
    handler.attach_bus(&bus);

    for (index, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "skipping script line");
                eprintln!("line {line_no}: {e}");
                continue;
            }
        };

        let result = match command {
            Command::Key {
                key_code,
                raw_action,
                time,
            } => {
                clock.set(time.unwrap_or_else(|| live.now_millis()));
                handler.handle_key(key_code, raw_action)
            }
            Command::Focus(view) => handler.on_focus_changed(view),
            Command::Clear => handler.on_focus_cleared(),
            Command::Toggle(enabled) => {
                toggle.set(enabled);
                Ok(Vec::new())
            }
        };

        if let Err(e) = result {
            tracing::error!(line = line_no, error = %e, "input handling failed");
            eprintln!("line {line_no}: {e}");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match load_config(&args).and_then(|config| config.validate().map(|()| config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("remote-input: {e}");
            return ExitCode::from(2);
        }
    };

    init_tracing(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("remote-input: {e}");
            ExitCode::FAILURE
        }
    }
}
