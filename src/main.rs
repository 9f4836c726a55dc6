//! pathfinder: dotted-path config lookup and text cleaning from the shell

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
