//! Interactive parameter collection
//!
//! Flags the caller supplied are taken as-is; anything missing is asked for
//! interactively, with the same defaults a `--yes` run would use.

use crate::cli::commands::CreateCommand;
use crate::core::config::ProvisioningConfig;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password};

/// Build the run configuration from flags plus interactive prompts.
///
/// With `--yes`, every unanswered question takes its default and no prompt
/// is shown.
pub fn collect(cmd: &CreateCommand) -> Result<ProvisioningConfig> {
    let defaults = ProvisioningConfig::defaults(&cmd.project_name);
    let theme = ColorfulTheme::default();
    let ask = !cmd.yes;

    let db_name = resolve(&theme, ask, &cmd.db_name, "Database name", &defaults.db_name)?;
    let db_user = resolve(&theme, ask, &cmd.db_user, "Database user", &defaults.db_user)?;

    let db_pass = match &cmd.db_pass {
        Some(value) => value.clone(),
        None if ask => Password::with_theme(&theme)
            .with_prompt("Database password")
            .allow_empty_password(true)
            .interact()?,
        None => defaults.db_pass.clone(),
    };

    let db_host = resolve(&theme, ask, &cmd.db_host, "Database host", &defaults.db_host)?;
    let db_prefix = resolve(
        &theme,
        ask,
        &cmd.db_prefix,
        "Database table prefix",
        &defaults.db_prefix,
    )?;
    let locale = resolve(&theme, ask, &cmd.locale, "Locale", &defaults.locale)?;

    let admin_email = match &cmd.email {
        Some(value) => value.clone(),
        None if ask => Input::with_theme(&theme)
            .with_prompt("Admin email")
            .default(defaults.admin_email.clone())
            .validate_with(|input: &String| {
                if input.contains('@') {
                    Ok(())
                } else {
                    Err("enter a valid email address")
                }
            })
            .interact_text()?,
        None => defaults.admin_email.clone(),
    };

    let site_url = resolve(&theme, ask, &cmd.site_url, "Site URL", &defaults.site_url)?;

    let themes = collect_names(&theme, ask, &cmd.themes, "Themes to install (empty for none)")?;
    let plugins = collect_names(&theme, ask, &cmd.plugins, "Plugins to install (empty for none)")?;

    Ok(ProvisioningConfig {
        project_name: cmd.project_name.clone(),
        db_name,
        db_user,
        db_pass,
        db_host,
        db_prefix,
        locale,
        admin_email,
        site_url,
        admin_user: cmd.admin_user.clone(),
        admin_password: cmd.admin_password.clone(),
        themes,
        plugins,
        skip_database: cmd.skip_database,
        no_search_index: cmd.no_index,
        skip_config_check: cmd.skip_check,
    })
}

fn resolve(
    theme: &ColorfulTheme,
    ask: bool,
    flag: &Option<String>,
    prompt: &str,
    default: &str,
) -> Result<String> {
    match flag {
        Some(value) => Ok(value.clone()),
        None if ask => Ok(Input::with_theme(theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?),
        None => Ok(default.to_string()),
    }
}

fn collect_names(
    theme: &ColorfulTheme,
    ask: bool,
    flag: &[String],
    prompt: &str,
) -> Result<Vec<String>> {
    if !flag.is_empty() {
        return Ok(flag.to_vec());
    }
    if !ask {
        return Ok(Vec::new());
    }
    let raw: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .default(String::new())
        .show_default(false)
        .interact_text()?;
    Ok(split_names(&raw))
}

/// Split a space- or comma-separated name list, dropping empty entries.
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split([' ', ','])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
