//! 28-day cycle calendar with lunar phase resolution.
//!
//! The core is a set of pure date computations: a cycle start date and a
//! calendar date go in, a 1-indexed cycle day (1–28) and a synodic lunar
//! phase fraction come out. The fraction resolves against a table of named
//! phase ranges. A cache-fronted calculator assembles the per-day snapshots
//! the console front end prints.

pub mod archetypes;
pub mod calculator;
pub mod cycle;
pub mod error;
pub mod lunar;
pub mod phases;

pub use calculator::{CycleCalculator, DailySnapshot, Metrics};
pub use cycle::{cycle_day, CycleDay, Profile, CYCLE_LENGTH};
pub use error::CalendarError;
pub use lunar::{phase_fraction, SYNODIC_MONTH};
pub use phases::{resolve_phase, LunarPhaseRange, PhaseResolution};
