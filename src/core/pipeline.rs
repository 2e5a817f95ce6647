//! The fixed provisioning sequence

use crate::core::config::ProvisioningConfig;
use crate::core::step::{ProvisioningTask, Step};

/// The ordered steps of one provisioning run.
///
/// The order is fixed; per-step enablement and skip predicates are the only
/// variation between runs. Built fresh for each run - steps are plain data.
pub fn provisioning_steps() -> Vec<Step> {
    vec![
        Step::task("Download WordPress core", ProvisioningTask::DownloadCore),
        Step::task("Generate wp-config.php", ProvisioningTask::GenerateConfig),
        Step::group(
            "Create database",
            vec![
                Step::task("Initialize database", ProvisioningTask::InitializeDatabase),
                Step::task("Generate tables", ProvisioningTask::GenerateTables),
                Step::task("Disable search engine indexing", ProvisioningTask::DisableIndexing)
                    .enabled_when(|config| config.no_search_index),
            ],
        )
        .enabled_when(|config| !config.skip_database),
        Step::task("Download themes", ProvisioningTask::InstallThemes).skip_when(no_theme_selected),
        Step::task("Download plugins", ProvisioningTask::InstallPlugins)
            .skip_when(no_plugin_selected),
    ]
}

fn no_theme_selected(config: &ProvisioningConfig) -> Option<String> {
    config
        .themes
        .is_empty()
        .then(|| "No theme selected".to_string())
}

fn no_plugin_selected(config: &ProvisioningConfig) -> Option<String> {
    config
        .plugins
        .is_empty()
        .then(|| "No plugin selected".to_string())
}
