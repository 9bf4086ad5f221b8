// src/main.rs
//
// Interactive shell for the plate-reader wavefront analysis. This layer only
// prompts for parameters, builds the mode configuration and prints the
// reports; all analysis lives in the library modules.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use wavefront_csv_render::constants::ROW_COUNT;
use wavefront_csv_render::modes::{
    correlation_report, speed_report, velocity_plot, wavefront_plot, CorrelationConfig,
    SpeedConfig, VelocityPlotConfig, WavefrontPlotConfig,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let base = PathBuf::from(prompt(
        "Path directory for the main folder with all the results: ",
    )?);

    println!("Mode options:");
    println!("1 - plotting the bacterial wavefront for one row from multiple plates (position vs time)");
    println!("2 - calculating correlation coefficients for all rows between 2 plates");
    println!("3 - plotting row velocities for all 16 rows for various plates");
    println!("4 - determining speed of bacterial wavefront for selected start and end time stamps for a given row");

    match prompt_number("What mode do you want to work in?: ")? {
        1 => run_mode1(&base),
        2 => run_mode2(&base),
        3 => run_mode3(&base),
        4 => run_mode4(&base),
        _ => {
            println!("There is no such mode.");
            Ok(())
        }
    }
}

fn run_mode1(base: &Path) -> Result<(), Box<dyn Error>> {
    let plate_amount = prompt_number("How many plates do you want to compare? ")?;
    let row = prompt_row("For which row? ")?;

    let mut plate_dirs = Vec::with_capacity(plate_amount);
    for k in 0..plate_amount {
        let name = prompt(&format!("What is the title of the plate folder {}? ", k + 1))?;
        plate_dirs.push(base.join(name));
    }

    wavefront_plot(&WavefrontPlotConfig {
        plate_dirs,
        row,
        output: base.join(format!("wavefront_row{}.png", row + 1)),
    })
}

fn run_mode2(base: &Path) -> Result<(), Box<dyn Error>> {
    let name1 = prompt("What is the title of the plate folder 1? ")?;
    let name2 = prompt("What is the title of the plate folder 2? ")?;

    let report = correlation_report(&CorrelationConfig {
        plate_dir1: base.join(name1),
        plate_dir2: base.join(name2),
    })?;

    for row_correlation in report {
        println!("Row {}:", row_correlation.row + 1);
        if row_correlation.coefficient.is_nan() {
            println!("Something is wrong with the plate results.");
        } else {
            println!(
                "The correlation coefficient is {}.",
                row_correlation.coefficient
            );
        }
    }
    Ok(())
}

fn run_mode3(base: &Path) -> Result<(), Box<dyn Error>> {
    let velocity_folder = prompt(
        "What is the folder in which you keep files with velocities for each row of a plate? ",
    )?;
    let plate_amount = prompt_number("How many plates do you want to compare? ")?;

    let mut plate_names = Vec::with_capacity(plate_amount);
    for k in 0..plate_amount {
        plate_names.push(prompt(&format!(
            "What is the title of the plate folder {}? ",
            k + 1
        ))?);
    }

    velocity_plot(&VelocityPlotConfig {
        velocity_dir: base.join(velocity_folder),
        plate_names,
        output: base.join("row_velocities.png"),
    })
}

fn run_mode4(base: &Path) -> Result<(), Box<dyn Error>> {
    let name = prompt("What is the title of the plate folder? ")?;
    let row = prompt_row("For which row do you want to determine the velocity? ")?;
    let first_timestep = prompt_number("Start: ")?;
    let last_timestep = prompt_number("End: ")?;

    let estimate = speed_report(&SpeedConfig {
        plate_dir: base.join(name),
        row,
        first_timestep,
        last_timestep,
    })?;

    println!("speed: {} +/- {}", estimate.slope, estimate.stderr);
    Ok(())
}

fn prompt(question: &str) -> Result<String, Box<dyn Error>> {
    print!("{question}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_number(question: &str) -> Result<usize, Box<dyn Error>> {
    let answer = prompt(question)?;
    answer
        .parse::<usize>()
        .map_err(|_| format!("expected a number, got '{answer}'").into())
}

/// Rows are entered 1-based, matching the plate labelling; returns the
/// 0-based index.
fn prompt_row(question: &str) -> Result<usize, Box<dyn Error>> {
    let row = prompt_number(question)?;
    if row < 1 || row > ROW_COUNT {
        return Err(format!("row must be between 1 and {ROW_COUNT}, got {row}").into());
    }
    Ok(row - 1)
}

// src/main.rs
