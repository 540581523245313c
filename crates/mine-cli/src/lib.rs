//! Harness that puts mine workers through a configured list of actions.
//!
//! The binary wires three steps together:
//! 1. [`CliConfig`] loaded from the environment and command line
//! 2. Logging to stderr via [`logging::setup_logging`]
//! 3. [`run`] writing worker reports to stdout

pub mod config;
pub mod logging;

pub use config::{CliConfig, ConfigError, WorkerSelection};

use std::io::Write;

use anyhow::{Context, Result};
use mine_core::{MineCrew, Worker};

/// Runs the configured commands and writes the reports to `out`.
pub fn run(config: &CliConfig, out: &mut dyn Write) -> Result<()> {
    let result = match config.selection {
        WorkerSelection::Crew => {
            let crew = MineCrew::standard();
            tracing::info!(?crew, commands = config.commands.len(), "commanding crew");
            crew.perform_commands(&config.commands, out)
        }
        WorkerSelection::Single(kind) => {
            let worker = kind.build(config.worker_name.as_deref());
            tracing::info!(
                %kind,
                worker = worker.name(),
                commands = config.commands.len(),
                "commanding worker"
            );
            worker.perform_commands(&config.commands, out)
        }
    };
    result.context("worker run failed")?;

    out.flush().context("failed to flush worker output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mine_core::{Action, Command, WorkerKind};

    fn output(config: &CliConfig) -> String {
        let mut out = Vec::new();
        run(config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn single_worker_with_name_override() {
        let config = CliConfig {
            selection: WorkerSelection::Single(WorkerKind::GoldDigger),
            worker_name: Some("Bob".to_owned()),
            ..CliConfig::default()
        };

        assert_eq!(
            output(&config),
            "Bob wakes up.\n\
             Bob goes to the mine.\n\
             Bob digs for gold.\n\
             Bob goes home.\n\
             Bob goes to sleep.\n"
        );
    }

    #[test]
    fn crew_ignores_name_override() {
        let config = CliConfig {
            worker_name: Some("Bob".to_owned()),
            commands: vec![Command::Known(Action::Work)],
            ..CliConfig::default()
        };

        assert_eq!(
            output(&config),
            "Dwarf gold digger digs for gold.\n\
             Dwarf cart operator moves gold chunks out of the mine.\n\
             Dwarven tunnel digger creates another promising tunnel.\n"
        );
    }

    #[test]
    fn unknown_commands_do_not_stop_the_run() {
        let config = CliConfig {
            selection: WorkerSelection::Single(WorkerKind::TunnelDigger),
            worker_name: None,
            commands: vec![
                Command::Unknown("juggle".to_owned()),
                Command::Known(Action::GoHome),
            ],
        };

        assert_eq!(
            output(&config),
            "Undefined action\nDwarven tunnel digger goes home.\n"
        );
    }
}
