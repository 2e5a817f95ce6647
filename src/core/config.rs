//! Provisioning parameters and the fixed installation defaults

use serde::Serialize;

/// Admin credentials used when none are supplied on the command line.
/// Named here (rather than buried in the install command) so a run can
/// override them with `--admin-user` / `--admin-password`.
pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin";

/// Path under the site URL where the dashboard lives.
pub const ADMIN_PATH: &str = "wp-admin";

pub const DEFAULT_DB_USER: &str = "root";
pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PREFIX: &str = "wp_";
pub const DEFAULT_LOCALE: &str = "en_US";

/// Local development sites default to `http://<project>.local`.
pub const DEFAULT_SITE_PROTOCOL: &str = "http";
pub const DEFAULT_SITE_EXTENSION: &str = "local";

/// Pointed to when the `wp` binary cannot be found.
pub const WP_INSTALL_URI: &str =
    "https://make.wordpress.org/cli/handbook/installing/#recommended-installation";

/// Everything a provisioning run needs, collected once up front.
///
/// Read-only after construction; every step borrows it.
#[derive(Debug, Clone, Serialize)]
pub struct ProvisioningConfig {
    pub project_name: String,
    pub db_name: String,
    pub db_user: String,
    pub db_pass: String,
    pub db_host: String,
    pub db_prefix: String,
    pub locale: String,
    pub admin_email: String,
    pub site_url: String,
    pub admin_user: String,
    pub admin_password: String,
    pub themes: Vec<String>,
    pub plugins: Vec<String>,
    pub skip_database: bool,
    pub no_search_index: bool,
    pub skip_config_check: bool,
}

impl ProvisioningConfig {
    /// Configuration for `project_name` with every value at its default -
    /// what the interactive prompts produce when each question is answered
    /// with its suggestion.
    pub fn defaults(project_name: &str) -> Self {
        Self {
            project_name: project_name.to_string(),
            db_name: project_name.to_string(),
            db_user: DEFAULT_DB_USER.to_string(),
            db_pass: String::new(),
            db_host: DEFAULT_DB_HOST.to_string(),
            db_prefix: DEFAULT_DB_PREFIX.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            admin_email: format!("admin@{project_name}.{DEFAULT_SITE_EXTENSION}"),
            site_url: format!("{DEFAULT_SITE_PROTOCOL}://{project_name}.{DEFAULT_SITE_EXTENSION}"),
            admin_user: ADMIN_USER.to_string(),
            admin_password: ADMIN_PASSWORD.to_string(),
            themes: Vec::new(),
            plugins: Vec::new(),
            skip_database: false,
            no_search_index: false,
            skip_config_check: false,
        }
    }

    /// Site title shown in the dashboard: the project name with its first
    /// character upper-cased, remainder untouched.
    pub fn site_title(&self) -> String {
        capitalize(&self.project_name)
    }

    /// Dashboard URL reported on success.
    pub fn admin_url(&self) -> String {
        format!("{}/{}", self.site_url, ADMIN_PATH)
    }
}

/// Upper-case the first character of `s`, leaving the rest unchanged.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
