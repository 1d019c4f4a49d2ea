//! Command implementations

pub mod generate;
pub mod stats;
pub mod verify;

pub use generate::{GenerateConfig, GenerateResult, run_generate};
pub use stats::{StatsResult, analyze_tree};
pub use verify::{VerifyConfig, VerifyReport, run_verify};
