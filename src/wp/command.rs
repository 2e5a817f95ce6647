//! Typed argument-vector builders for WP-CLI invocations
//!
//! Every invocation is a `Vec<String>` handed directly to the process
//! spawner; nothing passes through a shell. Configuration values with
//! spaces, quotes or shell metacharacters stay single arguments.

use crate::core::config::ProvisioningConfig;
use serde::Serialize;

/// One WP-CLI invocation: the argument vector after the `wp` binary itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WpCommand {
    pub args: Vec<String>,
}

impl WpCommand {
    fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `wp cli version` - used as the preflight availability probe.
    pub fn cli_version() -> Self {
        Self::new(["cli", "version"])
    }

    /// `wp core download --locale=<locale>`
    pub fn core_download(locale: &str) -> Self {
        Self::new(["core".to_string(), "download".to_string(), flag("locale", locale)])
    }

    /// `wp config create` with the full database parameter set, plus
    /// `--skip-check` when the run asked to bypass WP-CLI's own checks.
    pub fn config_create(config: &ProvisioningConfig) -> Self {
        let mut args = vec![
            "config".to_string(),
            "create".to_string(),
            flag("dbname", &config.db_name),
            flag("dbuser", &config.db_user),
            flag("dbpass", &config.db_pass),
            flag("dbhost", &config.db_host),
            flag("dbprefix", &config.db_prefix),
            flag("locale", &config.locale),
        ];
        if config.skip_config_check {
            args.push("--skip-check".to_string());
        }
        Self { args }
    }

    /// `wp config set WP_DEBUG true --raw`
    pub fn config_set_debug() -> Self {
        Self::new(["config", "set", "WP_DEBUG", "true", "--raw"])
    }

    /// `wp db create`
    pub fn db_create() -> Self {
        Self::new(["db", "create"])
    }

    /// `wp core install` with the admin account and the derived site title.
    pub fn core_install(config: &ProvisioningConfig) -> Self {
        Self::new([
            "core".to_string(),
            "install".to_string(),
            flag("url", &config.site_url),
            flag("title", &config.site_title()),
            flag("admin_user", &config.admin_user),
            flag("admin_password", &config.admin_password),
            flag("admin_email", &config.admin_email),
            "--skip-email".to_string(),
        ])
    }

    /// `wp option set <name> <value>`
    pub fn option_set(name: &str, value: &str) -> Self {
        Self::new(["option", "set", name, value])
    }

    /// `wp theme install <name>...` - one invocation for the whole list.
    pub fn theme_install(themes: &[String]) -> Self {
        let mut args = vec!["theme".to_string(), "install".to_string()];
        args.extend(themes.iter().cloned());
        Self { args }
    }

    /// `wp plugin install <name>...` - one invocation for the whole list.
    pub fn plugin_install(plugins: &[String]) -> Self {
        let mut args = vec!["plugin".to_string(), "install".to_string()];
        args.extend(plugins.iter().cloned());
        Self { args }
    }

    /// Human-readable rendering for logs and the dry-run plan. Display only;
    /// execution always uses the argument vector.
    pub fn rendered(&self) -> String {
        let mut out = String::from("wp");
        for arg in &self.args {
            out.push(' ');
            out.push_str(arg);
        }
        out
    }
}

fn flag(name: &str, value: &str) -> String {
    format!("--{name}={value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProvisioningConfig {
        ProvisioningConfig::defaults("demo")
    }

    #[test]
    fn core_download_carries_locale() {
        let command = WpCommand::core_download("de_DE");
        assert_eq!(command.args, vec!["core", "download", "--locale=de_DE"]);
    }

    #[test]
    fn config_create_without_skip_check() {
        let command = WpCommand::config_create(&config());
        assert_eq!(
            command.args,
            vec![
                "config",
                "create",
                "--dbname=demo",
                "--dbuser=root",
                "--dbpass=",
                "--dbhost=localhost",
                "--dbprefix=wp_",
                "--locale=en_US",
            ]
        );
    }

    #[test]
    fn config_create_appends_skip_check() {
        let mut config = config();
        config.skip_config_check = true;
        let command = WpCommand::config_create(&config);
        assert_eq!(command.args.last().unwrap(), "--skip-check");
    }

    #[test]
    fn core_install_uses_capitalized_title() {
        let command = WpCommand::core_install(&config());
        assert!(command.args.contains(&"--title=Demo".to_string()));
        assert!(command.args.contains(&"--admin_user=admin".to_string()));
        assert_eq!(command.args.last().unwrap(), "--skip-email");
    }

    #[test]
    fn theme_install_is_one_invocation_with_separate_names() {
        let themes = vec!["twentytwenty".to_string(), "astra".to_string()];
        let command = WpCommand::theme_install(&themes);
        assert_eq!(command.args, vec!["theme", "install", "twentytwenty", "astra"]);
    }

    #[test]
    fn values_with_metacharacters_stay_single_arguments() {
        let mut config = config();
        config.db_pass = "p@ss word; $(whoami) `ls`".to_string();
        let command = WpCommand::config_create(&config);
        let dbpass: Vec<_> = command
            .args
            .iter()
            .filter(|a| a.starts_with("--dbpass="))
            .collect();
        assert_eq!(dbpass, vec!["--dbpass=p@ss word; $(whoami) `ls`"]);
    }

    #[test]
    fn rendered_prefixes_the_binary() {
        assert_eq!(WpCommand::db_create().rendered(), "wp db create");
    }
}
