// src/data_analysis/mod.rs

pub mod statistics;
pub mod wavefront;

// src/data_analysis/mod.rs
