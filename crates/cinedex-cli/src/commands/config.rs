use color_eyre::eyre::{eyre, Result};
use movie_catalog_config::{resolve_api_key, Config, CredentialStore, PathManager};
use serde_json::json;

use crate::commands::prompts;
use crate::output::Output;
use crate::ConfigCommands;

pub async fn run_config(cmd: ConfigCommands, output: &Output) -> Result<()> {
    let paths = PathManager::default();
    paths.ensure_directories().map_err(|e| eyre!("{}", e))?;

    match cmd {
        ConfigCommands::Show => show_config(&paths, output),
        ConfigCommands::Tmdb { api_key } => set_api_key(&paths, api_key, output),
        ConfigCommands::Language { tag } => set_language(&paths, tag, output),
    }
}

fn show_config(paths: &PathManager, output: &Output) -> Result<()> {
    let config = Config::load_or_default(&paths.config_file()).map_err(|e| eyre!("{}", e))?;

    let mut credentials = CredentialStore::new(paths.credentials_file());
    credentials.load().map_err(|e| eyre!("{}", e))?;
    let api_key = resolve_api_key(&credentials);

    if !output.is_human() {
        output.json(&json!({
            "api_key_configured": api_key.is_some(),
            "language": config.tmdb.language,
            "api_base": config.tmdb.api_base,
            "debounce_ms": config.browse.debounce_ms,
            "page_cap": config.browse.page_cap,
            "cast_limit": config.browse.cast_limit,
            "config_file": paths.config_file(),
            "wishlist_file": paths.wishlist_file(),
        }));
        return Ok(());
    }

    match api_key {
        Some(key) => output.info(format!("API key:     {}", mask_key(&key))),
        None => output.warn("API key:     not configured (run 'cinedex config tmdb')"),
    }
    output.info(format!("Language:    {}", config.tmdb.language));
    output.info(format!("API base:    {}", config.tmdb.api_base));
    output.info(format!("Debounce:    {} ms", config.browse.debounce_ms));
    output.info(format!("Page cap:    {}", config.browse.page_cap));
    output.info(format!("Cast limit:  {}", config.browse.cast_limit));
    output.info(format!("Config file: {}", paths.config_file().display()));
    output.info(format!("Wishlist:    {}", paths.wishlist_file().display()));
    Ok(())
}

fn set_api_key(paths: &PathManager, api_key: Option<String>, output: &Output) -> Result<()> {
    let api_key = match api_key {
        Some(key) => key,
        None => prompts::prompt_password("Catalog API key")?,
    };
    let api_key = api_key.trim().to_string();
    if api_key.is_empty() {
        return Err(eyre!("API key cannot be empty"));
    }

    let mut credentials = CredentialStore::new(paths.credentials_file());
    credentials.load().map_err(|e| eyre!("{}", e))?;
    credentials.set_tmdb_api_key(api_key);
    credentials.save().map_err(|e| eyre!("{}", e))?;

    output.success(format!(
        "API key saved to {}",
        paths.credentials_file().display()
    ));
    Ok(())
}

fn set_language(paths: &PathManager, tag: Option<String>, output: &Output) -> Result<()> {
    let mut config = Config::load_or_default(&paths.config_file()).map_err(|e| eyre!("{}", e))?;

    let tag = match tag {
        Some(tag) => tag,
        None => prompts::prompt_string("Language tag", Some(&config.tmdb.language))?,
    };
    let tag = tag.trim().to_string();

    config.tmdb.language = tag;
    config.validate().map_err(|e| eyre!("{}", e))?;
    config
        .save_to_file(&paths.config_file())
        .map_err(|e| eyre!("{}", e))?;

    output.success(format!("Language set to {}", config.tmdb.language));
    Ok(())
}

fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    if key.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}{}", visible, "*".repeat(key.chars().count() - 4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_key_hides_everything_but_a_prefix() {
        assert_eq!(mask_key("abc"), "****");
        assert_eq!(mask_key("abcd"), "****");
        assert_eq!(mask_key("abcdefgh"), "abcd****");
    }
}
