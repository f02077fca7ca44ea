//! menugen: Menu Enumeration CLI Tool
//!
//! Lists every menu that takes exactly one dish from each cuisine,
//! prints them as a table and writes them to a CSV file.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use menugen::cli::{usage_text, Cli};
use menugen::pipeline::{generate_menus, CuisineSpec, MenuError};
use menugen::report::{display_menus, format_counts, write_menus_csv, InputSummary};
use menugen::utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_error, print_info,
    print_saved, print_step_header, print_success, print_usage, print_warning,
};

/// Exit status for every failure, matching the `-1` of a shell `exit`.
const FAILURE_EXIT_CODE: u8 = 255;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));

    // Step 1: Validate dish counts
    print_step_header(1, "Validate Input");

    let spec = CuisineSpec::from_tokens(&cli.counts)?;
    if spec.dropped() > 0 {
        print_warning(&format!(
            "Removing {} cuisine(s) because they contain zero dishes.",
            spec.dropped()
        ));
    }
    print_success("Dish counts validated");

    let summary = InputSummary::new(&spec);
    summary.display();

    // Step 2: Generate menus
    print_step_header(2, "Generate Menus");

    let spinner = create_spinner("Generating menus...");
    let menus = generate_menus(&spec);
    finish_with_success(&spinner, &format!("Generated {} menu(s)", menus.len()));

    print_info(&format!(
        "Resulting menus for {} cuisine(s), each with {} dishes",
        spec.len(),
        format_counts(spec.counts())
    ));
    println!();
    display_menus(&menus);

    // Step 3: Save output
    print_step_header(3, "Save Results");

    print_saved(&cli.output);
    let spinner = create_spinner("Writing output file...");
    write_menus_csv(&menus, &cli.output)?;
    finish_with_success(&spinner, &format!("Saved to {}", cli.output.display()));

    print_completion();

    Ok(())
}

fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<MenuError>() {
        Some(MenuError::Usage { usage }) => {
            print_error("Incorrect usage of program from command line. Use as follows.");
            print_usage(usage);
        }
        Some(menu_err) => {
            print_error(&menu_err.to_string());
            if menu_err.wants_usage() {
                print_usage(&usage_text());
            }
        }
        None => print_error(&format!("{:#}", err)),
    }
}
