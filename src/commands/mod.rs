//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::run_simple;
pub use simulate::{SimulationStatistics, print_simulation_statistics, run_simulation};
