//! Command implementations

pub mod analyze;
pub mod families;
pub mod narrow;
pub mod rank;
pub mod sample;
pub mod stats;

pub use analyze::{AnalysisReport, run_analyze};
pub use families::{FamiliesReport, run_families};
pub use narrow::{NarrowReport, run_narrow};
pub use rank::{RankReport, run_rank};
pub use sample::{SampleReport, run_sample};
pub use stats::run_stats;
