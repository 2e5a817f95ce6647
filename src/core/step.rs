//! Step domain model
//!
//! A step is either a leaf provisioning task or an ordered sequence of
//! child steps. Enablement, skip and failure propagation follow the same
//! rules at every nesting level, so the database composite is just a step
//! whose body happens to contain more steps.

use crate::core::config::ProvisioningConfig;

/// Enablement predicate, evaluated immediately before the step would run.
/// A disabled step is omitted entirely - no output, no skip notice.
pub type EnabledFn = fn(&ProvisioningConfig) -> bool;

/// Skip predicate. A skipped step reports the returned reason and counts
/// as completed-with-notice rather than failed.
pub type SkipFn = fn(&ProvisioningConfig) -> Option<String>;

/// The leaf actions the pipeline can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisioningTask {
    DownloadCore,
    GenerateConfig,
    InitializeDatabase,
    GenerateTables,
    DisableIndexing,
    InstallThemes,
    InstallPlugins,
}

/// Body of a step: a single task, or a nested sequence run under the same
/// rules.
#[derive(Debug, Clone)]
pub enum StepBody {
    Task(ProvisioningTask),
    Group(Vec<Step>),
}

/// A single named unit of provisioning work
#[derive(Debug, Clone)]
pub struct Step {
    /// Title shown in the task list
    pub title: &'static str,

    /// Optional enablement predicate (default: always enabled)
    enabled: Option<EnabledFn>,

    /// Optional skip predicate (default: never skip)
    skip: Option<SkipFn>,

    /// What the step actually does
    pub body: StepBody,
}

impl Step {
    /// Leaf step performing one task.
    pub fn task(title: &'static str, task: ProvisioningTask) -> Self {
        Self {
            title,
            enabled: None,
            skip: None,
            body: StepBody::Task(task),
        }
    }

    /// Composite step running `steps` in order.
    pub fn group(title: &'static str, steps: Vec<Step>) -> Self {
        Self {
            title,
            enabled: None,
            skip: None,
            body: StepBody::Group(steps),
        }
    }

    /// Only run the step when `predicate` holds; otherwise it is absent.
    pub fn enabled_when(mut self, predicate: EnabledFn) -> Self {
        self.enabled = Some(predicate);
        self
    }

    /// Skip the step, reporting the predicate's reason, instead of running it.
    pub fn skip_when(mut self, predicate: SkipFn) -> Self {
        self.skip = Some(predicate);
        self
    }

    pub fn is_enabled(&self, config: &ProvisioningConfig) -> bool {
        self.enabled.map_or(true, |predicate| predicate(config))
    }

    pub fn skip_reason(&self, config: &ProvisioningConfig) -> Option<String> {
        self.skip.and_then(|predicate| predicate(config))
    }

    pub fn is_group(&self) -> bool {
        matches!(self.body, StepBody::Group(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_enabled_by_default() {
        let step = Step::task("Download WordPress core", ProvisioningTask::DownloadCore);
        let config = ProvisioningConfig::defaults("demo");
        assert!(step.is_enabled(&config));
        assert!(step.skip_reason(&config).is_none());
    }

    #[test]
    fn enablement_predicate_reads_the_config() {
        let step = Step::task("Disable search engine indexing", ProvisioningTask::DisableIndexing)
            .enabled_when(|config| config.no_search_index);

        let mut config = ProvisioningConfig::defaults("demo");
        assert!(!step.is_enabled(&config));

        config.no_search_index = true;
        assert!(step.is_enabled(&config));
    }

    #[test]
    fn skip_predicate_produces_a_reason() {
        let step = Step::task("Download themes", ProvisioningTask::InstallThemes)
            .skip_when(|config| {
                config
                    .themes
                    .is_empty()
                    .then(|| "No theme selected".to_string())
            });

        let mut config = ProvisioningConfig::defaults("demo");
        assert_eq!(step.skip_reason(&config).as_deref(), Some("No theme selected"));

        config.themes.push("astra".to_string());
        assert!(step.skip_reason(&config).is_none());
    }

    #[test]
    fn groups_nest_arbitrarily() {
        let inner = Step::task("Initialize database", ProvisioningTask::InitializeDatabase);
        let outer = Step::group("Create database", vec![inner]);
        assert!(outer.is_group());
        match &outer.body {
            StepBody::Group(children) => assert_eq!(children.len(), 1),
            StepBody::Task(_) => panic!("expected a group"),
        }
    }
}
