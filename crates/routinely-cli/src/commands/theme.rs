//! Theme settings commands for CLI.

use clap::Subcommand;
use routinely_core::storage::settings::{preset_color, COLOR_PRESETS};
use routinely_core::{FileKvStore, SettingsStore, ThemeMode};

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Show current theme settings
    Show,
    /// Update theme settings
    Set {
        /// Preset color name (blue, purple, green, orange, pink, red)
        /// or a raw "H S% L%" triple
        #[arg(long)]
        color: Option<String>,
        /// Theme mode: light, dark or system
        #[arg(long)]
        mode: Option<String>,
    },
    /// List available color presets
    Presets,
}

pub fn run(action: ThemeAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SettingsStore::new(FileKvStore::open()?);

    match action {
        ThemeAction::Show => {
            let settings = store.load();
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        ThemeAction::Set { color, mode } => {
            let mut settings = store.load();
            if let Some(color) = color {
                settings.primary_color = preset_color(&color)
                    .map(str::to_string)
                    .unwrap_or(color);
            }
            if let Some(mode) = mode {
                settings.theme = mode.parse::<ThemeMode>()?;
            }
            store.save(&settings)?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        ThemeAction::Presets => {
            for (name, hsl) in COLOR_PRESETS {
                println!("{name}: {hsl}");
            }
        }
    }
    Ok(())
}
