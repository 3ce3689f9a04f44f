//! Interactive one-time setup for `wth`.
//!
//! Stores `WEATHER_API_KEY` in `~/.zshrc` and links the `wth` binary into
//! `/usr/local/bin`.

use anyhow::Context;
use inquire::Text;
use std::{env, path::Path};

use wth_core::setup::{self, INSTALL_TARGET, KeyStatus, PROFILE_FILE};

fn main() -> anyhow::Result<()> {
    let profile = setup::profile_path()?;

    let status = setup::ensure_api_key(&profile, || {
        println!("WEATHER_API_KEY not found in {PROFILE_FILE}.");
        Text::new("Please enter your WEATHER_API_KEY:")
            .prompt()
            .context("Failed to read WEATHER_API_KEY")
    })?;

    match status {
        KeyStatus::Added => println!(
            "✅ WEATHER_API_KEY added to {PROFILE_FILE}. Please restart your terminal or run 'source ~/{PROFILE_FILE}'."
        ),
        KeyStatus::AlreadyPresent => println!("✅ WEATHER_API_KEY already exists in {PROFILE_FILE}."),
    }

    let source = env::current_exe()
        .context("Failed to locate the running executable")?
        .with_file_name("wth");

    match setup::install_command(&source, Path::new(INSTALL_TARGET)) {
        Ok(()) => println!(
            "✅ 'wth' command installed! You can now run: wth [city-name] [optional number of days to get forecast]"
        ),
        Err(e) => {
            eprintln!("❌ Failed to create system command: {e:#}");
            println!(
                "You might need to run this installer with sudo for /usr/local/bin permissions."
            );
        }
    }

    Ok(())
}
