use std::fmt;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use log::info;
use merge_insertion::{RepresentationReport, compare_representations};

/// Sort non-negative integers with merge-insertion over a vector and a linked list.
#[derive(Debug, Parser)]
#[command(name = "pmerge", version)]
struct Cli {
    /// Also print the result of the list-backed run.
    #[arg(long)]
    show_list: bool,

    /// Integers in 0..=2147483647.
    #[arg(
        value_name = "VALUE",
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(0..)
    )]
    values: Vec<i32>,
}

struct Summary<'a> {
    report: &'a RepresentationReport<i32>,
    show_list: bool,
}

struct Joined<'a>(&'a [i32]);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.0.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for value in values {
                write!(f, " {value}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let len = report.input.len();
        writeln!(f, "Before:\t{}", Joined(&report.input))?;
        writeln!(f, "After (vector):\t{}", Joined(&report.array_result))?;
        if self.show_list {
            writeln!(f, "After (list):\t{}", Joined(&report.list_result))?;
        }
        writeln!(
            f,
            "Time to process a range of {len:>3} elements with vector : {} us",
            report.array_micros
        )?;
        writeln!(
            f,
            "Time to process a range of {len:>3} elements with list   : {} us",
            report.list_micros
        )?;
        writeln!(f, "Comparisons (vector)        : {}", report.array_comparisons)?;
        writeln!(f, "Comparisons (list)          : {}", report.list_comparisons)
    }
}

fn run(cli: &Cli) -> Result<String> {
    let report = compare_representations(&cli.values).context("merge-insertion sort failed")?;
    ensure!(
        report.results_agree(),
        "vector and list runs disagree on {} elements",
        cli.values.len()
    );
    info!(
        "sorted {} values: {} comparisons",
        cli.values.len(),
        report.array_comparisons
    );
    Ok(Summary {
        report: &report,
        show_list: cli.show_list,
    }
    .to_string())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    print!("{}", run(&cli)?);
    Ok(())
}
