//! Init command implementation.
//!
//! Writes a starter `hub.yaml` with the default settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{HubError, Result};
use crate::output::{display_path, Printer};

/// Initialize a hub project by generating a hub.yaml config
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write hub.yaml into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing hub.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    // Check for existing config
    if config_path.exists() && !args.force {
        return Err(HubError::Io {
            path: config_path,
            message: format!("{} already exists (use --force to overwrite)", CONFIG_FILENAME),
        });
    }

    let mut yaml = String::from("# hub palette defaults\n");
    yaml.push_str("# kinds: monochromatic, analogous, complementary, triadic, random\n");
    yaml.push_str("# formats: swatch, text, json\n");
    yaml.push_str(&Config::default().to_yaml()?);

    fs::write(&config_path, &yaml).map_err(|e| HubError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.status("Created", &printer.cyan(&display_path(&config_path)));

    Ok(())
}
