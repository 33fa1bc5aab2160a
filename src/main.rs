use std::path::PathBuf;

use anyhow::Result;
use caste_snake::game::{Caste, GameConfig, load_config};
use caste_snake::logging;
use caste_snake::modes::HumanMode;
use clap::Parser;

#[derive(Parser)]
#[command(name = "caste_snake")]
#[command(version, about = "Snake game with four snake castes")]
struct Cli {
    /// TOML config file; missing files fall back to defaults
    #[arg(long, default_value = "caste_snake.toml")]
    config: PathBuf,

    /// Snake caste: s, h, t or k
    #[arg(long)]
    caste: Option<Caste>,

    /// Snake colour, e.g. "#721745" or "green"
    #[arg(long)]
    color: Option<String>,

    /// Name shown next to the score
    #[arg(long)]
    name: Option<String>,

    /// Grid width (defaults to the terminal width)
    #[arg(long)]
    width: Option<usize>,

    /// Grid height (defaults to the terminal height)
    #[arg(long)]
    height: Option<usize>,

    /// Only advance when a direction key is pressed
    #[arg(long)]
    manual: bool,

    /// Don't advance immediately when steering in timed mode
    #[arg(long)]
    no_tick_on_steer: bool,

    /// Write diagnostics to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Layer command-line flags over the file config
    fn apply(self, mut config: GameConfig) -> GameConfig {
        if let Some(caste) = self.caste {
            config.settings.caste = caste;
        }
        if let Some(color) = self.color {
            config.settings.color = color;
        }
        if let Some(name) = self.name {
            config.settings.name = name;
        }
        if self.width.is_some() {
            config.grid_width = self.width;
        }
        if self.height.is_some() {
            config.grid_height = self.height;
        }
        if self.manual {
            config.manual_tick = true;
        }
        if self.no_tick_on_steer {
            config.tick_on_steer = false;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref())?;

    // Create game configuration from file and CLI arguments
    let file_config = load_config(&cli.config)?;
    let config = cli.apply(file_config);
    config.validate()?;

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
