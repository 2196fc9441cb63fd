//! Statistics commands for CLI.

use clap::Subcommand;
use routinely_core::{stats, RoutineStore};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Aggregate completion and streak statistics
    Show,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = RoutineStore::open()?;

    match action {
        StatsAction::Show => {
            let report = stats::report(store.routines());
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
