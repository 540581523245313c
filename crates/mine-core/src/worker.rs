//! Core worker trait.
//!
//! [`Worker`] is a template: implementors provide a display name and their
//! own [`Worker::work`] behavior, while dispatch and the shared behaviors
//! (sleeping, waking up, commuting) are provided methods.

use std::io::Write;

use crate::{Action, Command, Result};

/// Diagnostic written in place of an action line for an unrecognised command.
pub const UNDEFINED_ACTION: &str = "Undefined action";

/// A mine worker that reports each action it performs as one line of text.
pub trait Worker: Send + Sync {
    /// Display name used at the start of every report line.
    fn name(&self) -> &str;

    /// Performs this worker's job. Variants decide what, if anything, is written.
    fn work(&self, out: &mut dyn Write) -> Result<()>;

    /// Writes `"<name> <phrase>."` as one line.
    fn report(&self, phrase: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} {}.", self.name(), phrase)?;
        Ok(())
    }

    fn go_to_sleep(&self, out: &mut dyn Write) -> Result<()> {
        self.report("goes to sleep", out)
    }

    fn wake_up(&self, out: &mut dyn Write) -> Result<()> {
        self.report("wakes up", out)
    }

    fn go_home(&self, out: &mut dyn Write) -> Result<()> {
        self.report("goes home", out)
    }

    fn go_to_mine(&self, out: &mut dyn Write) -> Result<()> {
        self.report("goes to the mine", out)
    }

    /// Dispatches a single action to the matching behavior.
    fn perform(&self, action: Action, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(worker = self.name(), %action, "performing action");

        match action {
            Action::Sleep => self.go_to_sleep(out),
            Action::WakeUp => self.wake_up(out),
            Action::GoHome => self.go_home(out),
            Action::GoToMine => self.go_to_mine(out),
            Action::Work => self.work(out),
        }
    }

    /// Performs `actions` in order, one report per action.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WorkerError::Output`] if `out` rejects a write. Actions
    /// after the failing one are not performed.
    fn perform_actions(&self, actions: &[Action], out: &mut dyn Write) -> Result<()> {
        for &action in actions {
            self.perform(action, out)?;
        }
        Ok(())
    }

    /// Performs commands read from text.
    ///
    /// Unknown commands write [`UNDEFINED_ACTION`] and are otherwise skipped;
    /// the remaining commands still run.
    fn perform_commands(&self, commands: &[Command], out: &mut dyn Write) -> Result<()> {
        for command in commands {
            match command {
                Command::Known(action) => self.perform(*action, out)?,
                Command::Unknown(token) => {
                    tracing::warn!(worker = self.name(), token = %token, "undefined action");
                    writeln!(out, "{UNDEFINED_ACTION}")?;
                }
            }
        }
        Ok(())
    }

    /// Performs `actions` against the locked standard output stream.
    fn perform_actions_stdout(&self, actions: &[Action]) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        self.perform_actions(actions, &mut stdout)
    }
}

/// Lets `Box<dyn Worker>` be used wherever a worker is expected.
impl Worker for Box<dyn Worker> {
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn work(&self, out: &mut dyn Write) -> Result<()> {
        (**self).work(out)
    }

    #[inline]
    fn report(&self, phrase: &str, out: &mut dyn Write) -> Result<()> {
        (**self).report(phrase, out)
    }

    #[inline]
    fn go_to_sleep(&self, out: &mut dyn Write) -> Result<()> {
        (**self).go_to_sleep(out)
    }

    #[inline]
    fn wake_up(&self, out: &mut dyn Write) -> Result<()> {
        (**self).wake_up(out)
    }

    #[inline]
    fn go_home(&self, out: &mut dyn Write) -> Result<()> {
        (**self).go_home(out)
    }

    #[inline]
    fn go_to_mine(&self, out: &mut dyn Write) -> Result<()> {
        (**self).go_to_mine(out)
    }
}
