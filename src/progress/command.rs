use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use thiserror::Error;
use crate::progress::{ProgressState, SharedProgressState};
use crate::progress_log;
use log::Level::{Info, Warn};

pub const COMMAND_ADDR: &str = "127.0.0.1:7879";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetProgress(i32),
    SetMax(i32),
    ShowText(bool),
    FillBackground(bool),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command")]
    Unknown,
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("invalid switch: {0}")]
    InvalidSwitch(String),
}

fn parse_switch(token: &str) -> Result<bool, CommandError> {
    match token {
        "on" | "true" => Ok(true),
        "off" | "false" => Ok(false),
        _ => Err(CommandError::InvalidSwitch(token.to_string())),
    }
}

fn parse_number(token: &str) -> Result<i32, CommandError> {
    token.parse().map_err(|_| CommandError::InvalidNumber(token.to_string()))
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let tokens: Vec<_> = line.split_whitespace().collect();
        match tokens.as_slice() {
            ["set_progress", value] => Ok(Command::SetProgress(parse_number(value)?)),
            ["set_max", value] => Ok(Command::SetMax(parse_number(value)?)),
            ["show_text", value] => Ok(Command::ShowText(parse_switch(value)?)),
            ["fill_background", value] => Ok(Command::FillBackground(parse_switch(value)?)),
            _ => Err(CommandError::Unknown),
        }
    }

    pub fn apply(&self, state: &mut ProgressState) {
        match *self {
            Command::SetProgress(progress) => state.progress = progress,
            Command::SetMax(max) => state.max = max,
            Command::ShowText(show) => state.show_text = show,
            Command::FillBackground(fill) => state.fill_background = fill,
        }
    }
}

/// Accepts one command per connection on `COMMAND_ADDR`, in a background thread.
pub fn start_command_listener(progress_state: SharedProgressState) {
    thread::spawn(move || {
        let listener = match TcpListener::bind(COMMAND_ADDR) {
            Ok(listener) => listener,
            Err(e) => {
                progress_log!(Warn, "Command listener disabled, failed to bind {}: {}", COMMAND_ADDR, e);
                return;
            }
        };
        progress_log!(Info, "Listening for commands on {}", COMMAND_ADDR);
        for stream in listener.incoming() {
            if let Ok(stream) = stream {
                handle_command(stream, &progress_state);
            }
        }
    });
}

fn handle_command(mut stream: TcpStream, progress_state: &SharedProgressState) {
    let reader = match stream.try_clone() {
        Ok(read_half) => BufReader::new(read_half),
        Err(e) => {
            progress_log!(Warn, "Failed to clone command stream: {}", e);
            return;
        }
    };
    for line in reader.lines() {
        if let Ok(line) = line {
            let response = match Command::parse(line.trim()) {
                Ok(cmd) => {
                    cmd.apply(&mut progress_state.blocking_lock());
                    progress_log!(Info, "Applied command {:?}", cmd);
                    "OK\n".to_string()
                }
                Err(e) => format!("ERR {}\n", e),
            };
            let _ = stream.write_all(response.as_bytes());
            break;
        }
    }
}
