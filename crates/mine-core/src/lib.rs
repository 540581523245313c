//! Dwarven mine workers commanded through a fixed set of actions.
//!
//! A worker is told what to do through an ordered list of [`Action`]s and
//! reports every action as one line of text written to an output sink.
//! The shared behaviors (sleeping, waking, commuting) live on the [`Worker`]
//! trait; each concrete worker supplies only its display name and its own
//! [`Worker::work`] behavior.
//!
//! # Architecture
//!
//! - [`Action`]: Closed set of commands, with a `snake_case` text form
//! - [`Command`]: Open set used at text boundaries (known action or unknown token)
//! - [`Worker`]: Template trait with provided dispatch and shared behaviors
//! - Workers: [`GoldDigger`], [`CartOperator`], [`TunnelDigger`]
//! - [`MineCrew`]: Facade commanding a whole crew at once
//!
//! # Example
//!
//! ```
//! use mine_core::{Action, GoldDigger, Worker};
//!
//! let bob = GoldDigger::named("Bob");
//! let mut out = Vec::new();
//! bob.perform_actions(&Action::DAILY_ROUTINE, &mut out).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Bob wakes up.\n\
//!      Bob goes to the mine.\n\
//!      Bob digs for gold.\n\
//!      Bob goes home.\n\
//!      Bob goes to sleep.\n"
//! );
//! ```

pub mod action;
pub mod crew;
pub mod error;
pub mod worker;
pub mod workers;

pub use action::{Action, Command, parse_commands};
pub use crew::MineCrew;
pub use error::{Result, WorkerError};
pub use worker::{UNDEFINED_ACTION, Worker};
pub use workers::{CartOperator, GoldDigger, ParseWorkerKindError, TunnelDigger, WorkerKind};
