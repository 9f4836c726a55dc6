//! Months and normalize command implementations

use anyhow::Result;
use clap::Args;

use pathfinder::clean::{normalize_string, translate_months, Case};

#[derive(Args)]
pub struct MonthsArgs {
    /// Values to translate, one output line each
    #[arg(value_name = "TEXT", required = true)]
    pub values: Vec<String>,
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// Value to normalize
    #[arg(value_name = "TEXT")]
    pub value: String,

    /// Case of the result: upper, uppercase, lower or lowercase
    #[arg(long, value_name = "CASE")]
    pub case: Option<String>,
}

pub fn run_months(args: MonthsArgs) -> Result<()> {
    for value in &args.values {
        println!("{}", translate_months(value));
    }
    Ok(())
}

pub fn run_normalize(args: NormalizeArgs) -> Result<()> {
    let case = args.case.as_deref().map(str::parse::<Case>).transpose()?;
    println!("{}", normalize_string(&args.value, case));
    Ok(())
}
