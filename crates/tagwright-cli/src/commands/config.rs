use anyhow::Result;
use std::path::Path;

use tagwright_mapper::{config, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config, config_path: &Path) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config_path.display());
    let exists = config_path.exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    let mapping = &config.mapping;
    println!("Mapping:");
    println!("  standardize_artists: {}", mapping.standardize_artists);
    println!("  standardize_instruments: {}", mapping.standardize_instruments);
    println!("  translate_artist_names: {}", mapping.translate_artist_names);
    println!("  artist_locales: {}", mapping.artist_locales.join(", "));
    println!(
        "  translate_artist_names_script_exception: {}",
        mapping.translate_artist_names_script_exception
    );
    for exception in &mapping.script_exceptions {
        println!("    {} >= {}%", exception.script, exception.weight);
    }
    println!("  release_ars: {}", mapping.release_ars);
    println!(
        "  preferred_release_countries: {}",
        if mapping.preferred_release_countries.is_empty() {
            String::from("<none>")
        } else {
            mapping.preferred_release_countries.join(", ")
        }
    );

    println!("\nLogging:");
    println!("  level: {:?}", config.logging.level());
    println!("  coloured: {}", config.logging.coloured());
    println!("  output: {:?}", config.logging.output());

    println!("\nPriority: CLI args > ENV vars (TAGWRIGHT_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config(config_path: &Path) -> Result<()> {
    if config::ensure_config_file_at(config_path)? {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure tagwright.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
