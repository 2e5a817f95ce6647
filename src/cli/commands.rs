//! CLI command definitions

use crate::core::config::{ADMIN_PASSWORD, ADMIN_USER};
use clap::Args;

/// Scaffold a new WordPress site
#[derive(Debug, Args, Clone)]
pub struct CreateCommand {
    /// Project name; also the default database name and site host
    pub project_name: String,

    /// Database name
    #[arg(long)]
    pub db_name: Option<String>,

    /// Database user
    #[arg(long)]
    pub db_user: Option<String>,

    /// Database password
    #[arg(long)]
    pub db_pass: Option<String>,

    /// Database host
    #[arg(long)]
    pub db_host: Option<String>,

    /// Database table prefix
    #[arg(long)]
    pub db_prefix: Option<String>,

    /// Locale to install the core with
    #[arg(long)]
    pub locale: Option<String>,

    /// Admin email address
    #[arg(long)]
    pub email: Option<String>,

    /// Site URL
    #[arg(long)]
    pub site_url: Option<String>,

    /// Theme to install (repeatable; comma-separated values accepted)
    #[arg(long = "theme", value_delimiter = ',')]
    pub themes: Vec<String>,

    /// Plugin to install (repeatable; comma-separated values accepted)
    #[arg(long = "plugin", value_delimiter = ',')]
    pub plugins: Vec<String>,

    /// Admin username
    #[arg(long, default_value = ADMIN_USER)]
    pub admin_user: String,

    /// Admin password
    #[arg(long, default_value = ADMIN_PASSWORD)]
    pub admin_password: String,

    /// Don't create the database or its tables
    #[arg(long)]
    pub skip_database: bool,

    /// Skip WP-CLI's own checks when generating wp-config.php
    #[arg(long)]
    pub skip_check: bool,

    /// Discourage search engines from indexing the site
    #[arg(long)]
    pub no_index: bool,

    /// Path to the wp binary
    #[arg(long, default_value = "wp")]
    pub wp_path: String,

    /// Answer every prompt with its default
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Print the provisioning plan without executing anything
    #[arg(long)]
    pub dry_run: bool,

    /// With --dry-run, print the plan as JSON
    #[arg(long)]
    pub json: bool,
}
