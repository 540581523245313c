//! Commands a worker can be told to perform.
//!
//! [`Action`] is the closed set the dispatch matches over. Text coming from
//! outside (environment, command line) is parsed into [`Command`]s instead, so
//! a token that names no action survives until dispatch and is reported there.

use std::convert::Infallible;
use std::str::FromStr;

/// One of the fixed commands a worker understands.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Action {
    Sleep,
    WakeUp,
    GoHome,
    GoToMine,
    Work,
}

impl Action {
    /// A full working day, from waking up to going back to sleep.
    pub const DAILY_ROUTINE: [Action; 5] = [
        Action::WakeUp,
        Action::GoToMine,
        Action::Work,
        Action::GoHome,
        Action::Sleep,
    ];
}

/// An action token as read from text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Known(Action),
    /// Token that names no action. Kept verbatim for diagnostics.
    Unknown(String),
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        Command::Known(action)
    }
}

impl FromStr for Command {
    type Err = Infallible;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        Ok(match token.parse::<Action>() {
            Ok(action) => Command::Known(action),
            Err(_) => Command::Unknown(token.to_owned()),
        })
    }
}

/// Splits `input` on commas and whitespace into commands, skipping empty tokens.
pub fn parse_commands(input: &str) -> Vec<Command> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| match token.parse::<Command>() {
            Ok(command) => command,
            Err(never) => match never {},
        })
        .collect()
}
