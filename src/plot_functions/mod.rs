// src/plot_functions/mod.rs

pub mod plot_velocities;
pub mod plot_wavefront;

// src/plot_functions/mod.rs
