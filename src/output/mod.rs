//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_report, print_families_report, print_narrow_report, print_rank_report,
    print_sample_report, print_session_stats,
};
