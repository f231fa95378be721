pub mod anneal;
pub mod mutation;
pub mod runner;

pub use self::anneal::{accept, CoolingSchedule};
pub use self::runner::{
    OptimizationOptions, OptimizationResult, Optimizer, ProgressCallback, SearchState,
    SilentProgress,
};
