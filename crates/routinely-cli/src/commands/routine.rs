//! Routine management commands for CLI.

use clap::Subcommand;
use routinely_core::{
    sort_by_scheduled_time, Frequency, RoutineDraft, RoutineStore, RoutineUpdate, ScheduledTime,
};

#[derive(Subcommand)]
pub enum RoutineAction {
    /// Create a new routine
    Add {
        /// Routine title
        title: String,
        /// Scheduled time of day ("HH:MM" or "any time")
        #[arg(long, default_value = "any time")]
        time: String,
        /// Routine description
        #[arg(long)]
        description: Option<String>,
        /// Frequency: daily, weekdays, weekends, weekly or custom
        #[arg(long, default_value = "daily")]
        frequency: String,
    },
    /// List routines
    List {
        /// Order by scheduled time (timed first, "any time" last)
        #[arg(long)]
        by_time: bool,
        /// Only routines not yet completed today
        #[arg(long)]
        pending: bool,
    },
    /// Get routine details
    Get {
        /// Routine ID
        id: String,
    },
    /// Update a routine
    Update {
        /// Routine ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New scheduled time ("HH:MM" or "any time")
        #[arg(long)]
        time: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New frequency
        #[arg(long)]
        frequency: Option<String>,
        /// New monthly success rate (0-100)
        #[arg(long)]
        success_rate: Option<f64>,
    },
    /// Delete a routine
    Delete {
        /// Routine ID
        id: String,
    },
    /// Toggle today's completion (adjusts the streak)
    Toggle {
        /// Routine ID
        id: String,
    },
}

pub fn run(action: RoutineAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = RoutineStore::open()?;

    match action {
        RoutineAction::Add {
            title,
            time,
            description,
            frequency,
        } => {
            let draft = RoutineDraft {
                title,
                description,
                scheduled_time: time.parse::<ScheduledTime>()?,
                frequency: frequency.parse::<Frequency>()?,
            };
            let routine = store.add(draft)?;
            println!("Routine created: {}", routine.id);
            println!("{}", serde_json::to_string_pretty(routine)?);
        }
        RoutineAction::List { by_time, pending } => {
            let mut routines = store.routines().to_vec();
            if pending {
                routines.retain(|r| !r.completed_today);
            }
            if by_time {
                sort_by_scheduled_time(&mut routines);
            }
            println!("{}", serde_json::to_string_pretty(&routines)?);
        }
        RoutineAction::Get { id } => match store.get(&id) {
            Some(routine) => println!("{}", serde_json::to_string_pretty(routine)?),
            None => println!("Routine not found: {id}"),
        },
        RoutineAction::Update {
            id,
            title,
            time,
            description,
            frequency,
            success_rate,
        } => {
            let update = RoutineUpdate {
                title,
                description,
                scheduled_time: time.map(|t| t.parse::<ScheduledTime>()).transpose()?,
                frequency: frequency.map(|f| f.parse::<Frequency>()).transpose()?,
                monthly_success_rate: success_rate,
            };
            if update.is_empty() {
                println!("Nothing to update: {id}");
                return Ok(());
            }
            match store.update(&id, update)? {
                Some(routine) => {
                    println!("Routine updated:");
                    println!("{}", serde_json::to_string_pretty(routine)?);
                }
                None => println!("Routine not found: {id}"),
            }
        }
        RoutineAction::Delete { id } => {
            if store.delete(&id)? {
                println!("Routine deleted: {id}");
            } else {
                println!("Routine not found: {id}");
            }
        }
        RoutineAction::Toggle { id } => match store.toggle(&id)? {
            Some(routine) => {
                let state = if routine.completed_today { "completed" } else { "pending" };
                println!("Routine {state}: {} (streak {})", routine.title, routine.streak);
            }
            None => println!("Routine not found: {id}"),
        },
    }
    Ok(())
}
