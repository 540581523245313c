//! Concrete mine workers.
//!
//! Each worker only differs in its default name and what it reports when
//! told to [`Action::Work`](crate::Action::Work).

use std::borrow::Cow;
use std::io::Write;

use crate::{Result, Worker};

macro_rules! mine_worker {
    ($(#[$meta:meta])* $ty:ident, $default_name:literal, $job:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $ty {
            name: Cow<'static, str>,
        }

        impl $ty {
            pub const DEFAULT_NAME: &'static str = $default_name;

            pub const fn new() -> Self {
                Self {
                    name: Cow::Borrowed(Self::DEFAULT_NAME),
                }
            }

            /// Same worker under a different display name.
            pub fn named(name: impl Into<String>) -> Self {
                Self {
                    name: Cow::Owned(name.into()),
                }
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Worker for $ty {
            fn name(&self) -> &str {
                &self.name
            }

            fn work(&self, out: &mut dyn Write) -> Result<()> {
                self.report($job, out)
            }
        }
    };
}

mine_worker!(
    /// Digs for gold.
    GoldDigger,
    "Dwarf gold digger",
    "digs for gold"
);

mine_worker!(
    /// Hauls what the diggers find out of the mine.
    CartOperator,
    "Dwarf cart operator",
    "moves gold chunks out of the mine"
);

mine_worker!(
    /// Opens new tunnels for the diggers.
    TunnelDigger,
    "Dwarven tunnel digger",
    "creates another promising tunnel"
);

/// Error returned when a worker kind name is not recognised.
pub type ParseWorkerKindError = strum::ParseError;

/// Selects one of the concrete workers by name.
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
pub enum WorkerKind {
    GoldDigger,
    CartOperator,
    TunnelDigger,
}

impl WorkerKind {
    /// Builds a worker of this kind, optionally overriding its display name.
    pub fn build(self, name: Option<&str>) -> Box<dyn Worker> {
        match (self, name) {
            (WorkerKind::GoldDigger, None) => Box::new(GoldDigger::new()),
            (WorkerKind::GoldDigger, Some(name)) => Box::new(GoldDigger::named(name)),
            (WorkerKind::CartOperator, None) => Box::new(CartOperator::new()),
            (WorkerKind::CartOperator, Some(name)) => Box::new(CartOperator::named(name)),
            (WorkerKind::TunnelDigger, None) => Box::new(TunnelDigger::new()),
            (WorkerKind::TunnelDigger, Some(name)) => Box::new(TunnelDigger::named(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;
    use strum::IntoEnumIterator;

    fn work_line(worker: &dyn Worker) -> String {
        let mut out = Vec::new();
        worker.perform(Action::Work, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn default_names() {
        assert_eq!(GoldDigger::new().name(), "Dwarf gold digger");
        assert_eq!(CartOperator::default().name(), "Dwarf cart operator");
        assert_eq!(TunnelDigger::new().name(), "Dwarven tunnel digger");
    }

    #[test]
    fn work_lines_are_variant_specific() {
        assert_eq!(
            work_line(&GoldDigger::new()),
            "Dwarf gold digger digs for gold.\n"
        );
        assert_eq!(
            work_line(&CartOperator::new()),
            "Dwarf cart operator moves gold chunks out of the mine.\n"
        );
        assert_eq!(
            work_line(&TunnelDigger::new()),
            "Dwarven tunnel digger creates another promising tunnel.\n"
        );
    }

    #[test]
    fn named_overrides_display_name() {
        assert_eq!(work_line(&GoldDigger::named("Bob")), "Bob digs for gold.\n");
    }

    #[test]
    fn kind_parses_and_builds() {
        let kind: WorkerKind = "Cart_Operator".parse().unwrap();
        assert_eq!(kind, WorkerKind::CartOperator);
        assert_eq!(kind.build(None).name(), CartOperator::DEFAULT_NAME);
        assert_eq!(kind.build(Some("Gimli")).name(), "Gimli");
        assert!("foreman".parse::<WorkerKind>().is_err());
    }

    #[test]
    fn every_kind_builds_a_distinct_worker() {
        let names: Vec<String> = WorkerKind::iter()
            .map(|kind| kind.build(None).name().to_owned())
            .collect();
        assert_eq!(names.len(), 3);
        assert!(names.iter().all(|n| names.iter().filter(|m| *m == n).count() == 1));
    }
}
