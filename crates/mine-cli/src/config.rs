//! Harness configuration structures and loaders.
use std::env;

use mine_core::{Action, Command, ParseWorkerKindError, WorkerKind, parse_commands};

/// Configuration errors surfaced before any worker runs.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown worker `{value}` (expected `crew`, `gold_digger`, `cart_operator` or `tunnel_digger`)")]
    UnknownWorker {
        value: String,
        #[source]
        source: ParseWorkerKindError,
    },
}

/// Who receives the commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorkerSelection {
    /// The standard crew, one worker of each kind.
    #[default]
    Crew,
    Single(WorkerKind),
}

impl WorkerSelection {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("crew") {
            return Ok(Self::Crew);
        }
        value
            .parse()
            .map(Self::Single)
            .map_err(|source| ConfigError::UnknownWorker {
                value: value.to_owned(),
                source,
            })
    }
}

/// Harness configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub selection: WorkerSelection,
    /// Display-name override. Ignored for the crew.
    pub worker_name: Option<String>,
    pub commands: Vec<Command>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            selection: WorkerSelection::default(),
            worker_name: None,
            commands: Action::DAILY_ROUTINE.into_iter().map(Command::from).collect(),
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MINE_WORKER` - `crew`, `gold_digger`, `cart_operator` or `tunnel_digger` (default: crew)
    /// - `MINE_WORKER_NAME` - Display name for a single worker (default: the worker's own)
    /// - `MINE_ACTIONS` - Comma or space separated actions (default: a full day)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`CliConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(worker) = read("MINE_WORKER") {
            config.selection = WorkerSelection::parse(&worker)?;
        }
        if let Some(name) = read("MINE_WORKER_NAME") {
            config.worker_name = Some(name.trim().to_owned());
        }
        if let Some(actions) = read("MINE_ACTIONS") {
            config.commands = parse_commands(&actions);
        }

        Ok(config)
    }

    /// Command-line arguments, when any are given, replace the configured actions.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        if !args.is_empty() {
            self.commands = parse_commands(&args.join(" "));
        }
        self
    }
}
