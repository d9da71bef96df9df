// src/core/mod.rs
pub mod analyzer;
pub mod metrics;
pub mod pingala;
pub mod segmenter;
pub mod transitions;
pub mod types;
