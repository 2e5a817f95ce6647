//! Dry-run projection of the step tree
//!
//! Mirrors the run-time enablement and skip decisions without executing
//! anything, so `--dry-run` output answers "what would this run do".

use crate::core::config::ProvisioningConfig;
use crate::core::step::{ProvisioningTask, Step, StepBody};
use crate::wp::WpCommand;
use serde::Serialize;

/// Status of a planned step. Disabled steps are omitted from the plan
/// entirely, matching how the real run treats them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannedStatus {
    Ready,
    Skipped,
}

/// One step as it would execute
#[derive(Debug, Clone, Serialize)]
pub struct PlannedStep {
    pub title: String,
    pub status: PlannedStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<PlannedStep>,
}

/// Project `steps` against `config` without executing anything.
pub fn plan(steps: &[Step], config: &ProvisioningConfig) -> Vec<PlannedStep> {
    steps
        .iter()
        .filter(|step| step.is_enabled(config))
        .map(|step| plan_step(step, config))
        .collect()
}

fn plan_step(step: &Step, config: &ProvisioningConfig) -> PlannedStep {
    if let Some(reason) = step.skip_reason(config) {
        return PlannedStep {
            title: step.title.to_string(),
            status: PlannedStatus::Skipped,
            reason: Some(reason),
            commands: Vec::new(),
            steps: Vec::new(),
        };
    }

    match &step.body {
        StepBody::Group(children) => PlannedStep {
            title: step.title.to_string(),
            status: PlannedStatus::Ready,
            reason: None,
            commands: Vec::new(),
            steps: plan(children, config),
        },
        StepBody::Task(task) => PlannedStep {
            title: step.title.to_string(),
            status: PlannedStatus::Ready,
            reason: None,
            commands: task_commands(*task, config)
                .iter()
                .map(WpCommand::rendered)
                .collect(),
            steps: Vec::new(),
        },
    }
}

/// The invocations a leaf task performs, in order.
fn task_commands(task: ProvisioningTask, config: &ProvisioningConfig) -> Vec<WpCommand> {
    match task {
        ProvisioningTask::DownloadCore => vec![WpCommand::core_download(&config.locale)],
        ProvisioningTask::GenerateConfig => vec![
            WpCommand::config_create(config),
            WpCommand::config_set_debug(),
        ],
        ProvisioningTask::InitializeDatabase => vec![WpCommand::db_create()],
        ProvisioningTask::GenerateTables => vec![WpCommand::core_install(config)],
        ProvisioningTask::DisableIndexing => vec![WpCommand::option_set("blog_public", "0")],
        ProvisioningTask::InstallThemes => vec![WpCommand::theme_install(&config.themes)],
        ProvisioningTask::InstallPlugins => vec![WpCommand::plugin_install(&config.plugins)],
    }
}
