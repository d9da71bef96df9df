// src/lib.rs

pub mod c_api;
pub mod core;
pub mod error;
pub mod export;
pub mod report;
pub use crate::core::analyzer::{AnalyzerConfig, ProsodyAnalyzer, VerseAnalysis};
pub use crate::core::types::{Segmentation, Weight};
