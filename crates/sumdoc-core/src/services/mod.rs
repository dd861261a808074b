//! Core services orchestrating the ports.

mod summarize;

pub use summarize::SummarizeService;
