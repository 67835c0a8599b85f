use crate::config::{default_config_path, is_http_url, CliConfig, ThemeMode, DEFAULT_API_BASE_URL};
use crate::error::CliError;

pub fn run_config_show(config: &CliConfig) {
    println!("theme: {}", config.theme);
    println!(
        "api_base_url: {}",
        config
            .api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE_URL)
    );
    println!("path: {}", default_config_path().display());
}

pub fn run_config_set(theme: Option<ThemeMode>, api_url: Option<String>) -> Result<(), CliError> {
    let mut config = CliConfig::load().map_err(CliError::Config)?;

    if let Some(theme) = theme {
        config.theme = theme;
    }

    if let Some(api_url) = api_url {
        let trimmed = api_url.trim();
        if trimmed.is_empty() {
            config.api_base_url = None;
        } else if is_http_url(trimmed) {
            config.api_base_url = Some(trimmed.to_string());
        } else {
            return Err(CliError::Config(
                "API base URL must include http:// or https://".to_string(),
            ));
        }
    }

    let path = config.save().map_err(CliError::Config)?;
    println!("{}", path.display());
    Ok(())
}
