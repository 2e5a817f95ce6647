//! Provisioning engine - walks the step tree against one configuration

use crate::{
    core::config::ProvisioningConfig,
    core::step::{ProvisioningTask, Step, StepBody},
    wp::{CommandError, CommandRunner, WpCli},
};
use std::future::Future;
use std::pin::Pin;
use tracing::{info, warn};

/// Events emitted while the pipeline runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    Started {
        title: String,
        depth: usize,
        group: bool,
    },
    Completed {
        title: String,
        depth: usize,
        group: bool,
    },
    Skipped {
        title: String,
        depth: usize,
        reason: String,
    },
    Failed {
        title: String,
        depth: usize,
        error: String,
    },
}

/// Type for event handlers
pub type EventHandler = Box<dyn Fn(&StepEvent) + Send + Sync>;

/// Runs a step sequence strictly in order, stopping at the first failure.
///
/// Predicates are evaluated immediately before each step, not up front, so
/// the decision always reflects the configuration the step is about to run
/// against. A failing sub-step aborts its siblings, its parents' remaining
/// steps, and the whole run; nothing is rolled back.
pub struct ProvisionEngine<R> {
    wp: WpCli<R>,
    handlers: Vec<EventHandler>,
}

impl<R: CommandRunner> ProvisionEngine<R> {
    pub fn new(wp: WpCli<R>) -> Self {
        Self {
            wp,
            handlers: Vec::new(),
        }
    }

    /// Register a handler for step events (terminal rendering, tests).
    pub fn add_event_handler<F>(&mut self, handler: F)
    where
        F: Fn(&StepEvent) + Send + Sync + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    fn emit(&self, event: StepEvent) {
        for handler in &self.handlers {
            handler(&event);
        }
    }

    /// Execute the whole sequence against `config`.
    pub async fn run(
        &self,
        steps: &[Step],
        config: &ProvisioningConfig,
    ) -> Result<(), CommandError> {
        self.run_sequence(steps, config, 0).await
    }

    fn run_sequence<'a>(
        &'a self,
        steps: &'a [Step],
        config: &'a ProvisioningConfig,
        depth: usize,
    ) -> Pin<Box<dyn Future<Output = Result<(), CommandError>> + Send + 'a>> {
        Box::pin(async move {
            for step in steps {
                if !step.is_enabled(config) {
                    // disabled steps are absent, not skipped
                    continue;
                }

                if let Some(reason) = step.skip_reason(config) {
                    self.emit(StepEvent::Skipped {
                        title: step.title.to_string(),
                        depth,
                        reason,
                    });
                    continue;
                }

                self.emit(StepEvent::Started {
                    title: step.title.to_string(),
                    depth,
                    group: step.is_group(),
                });

                let result = match &step.body {
                    StepBody::Group(children) => {
                        self.run_sequence(children, config, depth + 1).await
                    }
                    StepBody::Task(task) => self.run_task(*task, config).await,
                };

                match result {
                    Ok(()) => self.emit(StepEvent::Completed {
                        title: step.title.to_string(),
                        depth,
                        group: step.is_group(),
                    }),
                    Err(error) => {
                        self.emit(StepEvent::Failed {
                            title: step.title.to_string(),
                            depth,
                            error: error.to_string(),
                        });
                        return Err(error);
                    }
                }
            }
            Ok(())
        })
    }

    async fn run_task(
        &self,
        task: ProvisioningTask,
        config: &ProvisioningConfig,
    ) -> Result<(), CommandError> {
        info!("running {:?}", task);
        match task {
            ProvisioningTask::DownloadCore => self.wp.core_download(&config.locale).await,
            ProvisioningTask::GenerateConfig => {
                self.wp.config_create(config).await?;
                // Best-effort: a failed WP_DEBUG write is logged, never fatal.
                if let Err(error) = self.wp.config_set_debug().await {
                    warn!("setting WP_DEBUG failed: {}", error.to_string().trim_end());
                }
                Ok(())
            }
            ProvisioningTask::InitializeDatabase => self.wp.db_create().await,
            ProvisioningTask::GenerateTables => self.wp.core_install(config).await,
            ProvisioningTask::DisableIndexing => self.wp.option_set("blog_public", "0").await,
            ProvisioningTask::InstallThemes => self.wp.theme_install(&config.themes).await,
            ProvisioningTask::InstallPlugins => self.wp.plugin_install(&config.plugins).await,
        }
    }
}
