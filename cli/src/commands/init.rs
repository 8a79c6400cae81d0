//! Writes the user config file.
use crate::commands::cli::InitArgs;
use bfhl_core::api as core_api;
use std::path::Path;

pub fn render_config(args: &InitArgs) -> Result<String, core_api::CliError> {
    let cfg = core_api::AppConfig {
        api: core_api::ApiConfig {
            base_url: args.base_url.trim().to_string(),
            timeout_ms: args.timeout_ms,
        },
        logging: core_api::LoggingConfig::default(),
    };
    toml::to_string_pretty(&cfg)
        .map_err(|e| core_api::CliError::Command(format!("Failed to render configuration: {}", e)))
}

pub fn write_config(dir: &Path, args: &InitArgs) -> Result<bool, core_api::CliError> {
    let config_path = dir.join("config.toml");
    if config_path.exists() && !args.force {
        println!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        println!("Pass --force to overwrite it.");
        return Ok(false);
    }

    std::fs::create_dir_all(dir).map_err(|e| {
        core_api::CliError::Command(format!("Failed to create config directory: {}", e))
    })?;
    std::fs::write(&config_path, render_config(args)?).map_err(|e| {
        core_api::CliError::Command(format!("Failed to write configuration: {}", e))
    })?;
    println!("Configuration written to: {}", config_path.display());
    Ok(true)
}

pub fn handle_init(args: InitArgs) -> Result<i32, core_api::CliError> {
    let dir = core_api::get_bfhl_data_dir()?;
    write_config(&dir, &args)?;
    Ok(0)
}
