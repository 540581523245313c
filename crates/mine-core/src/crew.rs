//! Facade over a group of workers.
//!
//! A [`MineCrew`] commands every worker it holds with the same actions, in
//! insertion order. Each worker finishes its whole action list before the next
//! one starts.

use std::io::Write;

use crate::{Action, CartOperator, Command, GoldDigger, Result, TunnelDigger, Worker};

/// An ordered group of workers commanded together.
#[derive(Default)]
pub struct MineCrew {
    workers: Vec<Box<dyn Worker>>,
}

impl MineCrew {
    pub fn new(workers: Vec<Box<dyn Worker>>) -> Self {
        Self { workers }
    }

    /// Gold digger, cart operator, tunnel digger.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(GoldDigger::new()),
            Box::new(CartOperator::new()),
            Box::new(TunnelDigger::new()),
        ])
    }

    pub fn with_worker(mut self, worker: impl Worker + 'static) -> Self {
        self.workers.push(Box::new(worker));
        self
    }

    pub fn workers(&self) -> &[Box<dyn Worker>] {
        &self.workers
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Wakes everyone up and sends them to the mine.
    pub fn start_new_day(&self, out: &mut dyn Write) -> Result<()> {
        self.perform_actions(&[Action::WakeUp, Action::GoToMine], out)
    }

    pub fn dig_out_gold(&self, out: &mut dyn Write) -> Result<()> {
        self.perform_actions(&[Action::Work], out)
    }

    /// Sends everyone home and to sleep.
    pub fn end_day(&self, out: &mut dyn Write) -> Result<()> {
        self.perform_actions(&[Action::GoHome, Action::Sleep], out)
    }

    pub fn perform_actions(&self, actions: &[Action], out: &mut dyn Write) -> Result<()> {
        tracing::debug!(workers = self.workers.len(), actions = actions.len(), "crew performing actions");
        for worker in &self.workers {
            worker.perform_actions(actions, out)?;
        }
        Ok(())
    }

    pub fn perform_commands(&self, commands: &[Command], out: &mut dyn Write) -> Result<()> {
        for worker in &self.workers {
            worker.perform_commands(commands, out)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for MineCrew {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.workers.iter().map(|worker| worker.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> Vec<String> {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn start_new_day_runs_each_worker_in_turn() {
        let crew = MineCrew::default()
            .with_worker(GoldDigger::named("Bob"))
            .with_worker(CartOperator::named("Ann"));

        let lines = capture(|out| crew.start_new_day(out));
        assert_eq!(
            lines,
            [
                "Bob wakes up.",
                "Bob goes to the mine.",
                "Ann wakes up.",
                "Ann goes to the mine.",
            ]
        );
    }

    #[test]
    fn dig_out_gold_reports_each_job() {
        let lines = capture(|out| MineCrew::standard().dig_out_gold(out));
        assert_eq!(
            lines,
            [
                "Dwarf gold digger digs for gold.",
                "Dwarf cart operator moves gold chunks out of the mine.",
                "Dwarven tunnel digger creates another promising tunnel.",
            ]
        );
    }

    #[test]
    fn end_day_sends_everyone_home() {
        let crew = MineCrew::new(vec![Box::new(TunnelDigger::named("Tom"))]);
        let lines = capture(|out| crew.end_day(out));
        assert_eq!(lines, ["Tom goes home.", "Tom goes to sleep."]);
    }

    #[test]
    fn empty_crew_is_silent() {
        let crew = MineCrew::default();
        assert!(crew.is_empty());
        assert!(capture(|out| crew.perform_actions(&Action::DAILY_ROUTINE, out)).is_empty());
    }

    #[test]
    fn debug_lists_worker_names() {
        let crew = MineCrew::default().with_worker(GoldDigger::named("Bob"));
        assert_eq!(format!("{crew:?}"), r#"["Bob"]"#);
    }
}
