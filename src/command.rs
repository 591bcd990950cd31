pub const HELP: &str = "\
Suspend notifications for N minutes:
    /chime mute <minutes>

Toggle notifications:
    /chime mute
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MuteToggle,
    MuteFor(u16),
}

/// Parses a whitespace-split argument string from the host's command
/// hook.
pub fn parse(args: &str) -> Result<Command, Error> {
    let mut tokens = args.split_whitespace();

    let command = match tokens.next() {
        Some("mute") => match tokens.next() {
            None => Command::MuteToggle,
            Some(minutes) => {
                let minutes = minutes.parse().map_err(|_| {
                    Error::InvalidDuration(minutes.to_string())
                })?;
                Command::MuteFor(minutes)
            }
        },
        Some(other) => return Err(Error::UnknownCommand(other.to_string())),
        None => return Err(Error::MissingCommand),
    };

    if let Some(extra) = tokens.next() {
        return Err(Error::TrailingArguments(extra.to_string()));
    }

    Ok(command)
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("missing command")]
    MissingCommand,
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("expected a whole number of minutes, got {0:?}")]
    InvalidDuration(String),
    #[error("unexpected trailing argument {0:?}")]
    TrailingArguments(String),
}
