//! Transition engine and orchestration for the Outbreak infection automaton.
//!
//! One simulated day is a two-phase pass over the previous generation:
//! infected cells *mark* at most one healthy neighbour each, then every
//! cell of the next generation is *built* from the previous cell and its
//! mark. The rule lives in [`rule`]; [`SequentialEngine`] and
//! [`ParallelEngine`] execute it with identical results.
//!
//! [`Simulation`] owns the double-buffered grids and drives the day loop.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod marks;
pub mod metrics;
pub mod parallel;
pub mod rule;
pub mod sequential;
pub mod simulation;

pub use config::{ConfigError, SimConfig, Strategy};
pub use engine::{build_engine, TransitionEngine};
pub use marks::InfectionMarks;
pub use metrics::RunReport;
pub use parallel::ParallelEngine;
pub use sequential::SequentialEngine;
pub use simulation::{Phase, Simulation};
