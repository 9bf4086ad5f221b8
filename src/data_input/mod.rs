// src/data_input/mod.rs

pub mod plate;
pub mod snapshot;
pub mod timeline;
pub mod velocity;

// src/data_input/mod.rs
