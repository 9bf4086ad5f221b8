// src/constants.rs

// Import specific colors needed
use plotters::style::colors::{BLACK, BLUE, CYAN, GREEN, MAGENTA, RED, YELLOW};
use plotters::style::RGBColor;

// The wavefront is taken to sit at the first well whose optical density has
// fallen to or below this value.
pub const OD_THRESHOLD: f64 = 0.5;

// 384-well plate with melted walls: 16 propagation rows of 24 wells each.
pub const ROW_COUNT: usize = 16;
pub const WELLS_PER_ROW: usize = 24;

// Format A snapshots are zero-padded: 00001.csv, 00002.csv, ...
pub const FORMAT_A_PAD_WIDTH: usize = 5;

// Fluostar CSV exports carry a header block before the well records.
pub const FORMAT_B_HEADER_LINES: usize = 3;

// A well identifier ending in this column number closes the row under
// assembly while parsing Fluostar records.
pub const ROW_TERMINATOR_COLUMN: &str = "24";

pub const SECONDS_PER_HOUR: f64 = 3600.0;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1280;
pub const PLOT_HEIGHT: u32 = 720;

pub const FONT_SIZE_CHART_TITLE: i32 = 28;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;
pub const FONT_SIZE_LEGEND: i32 = 14;

pub const SCATTER_POINT_SIZE: i32 = 4;

// --- Plot Color Assignments ---
// One color per plate, cycled when more plates than colors are compared.
pub const PLATE_COLORS: [RGBColor; 7] = [RED, BLUE, CYAN, YELLOW, GREEN, BLACK, MAGENTA];

// src/constants.rs
