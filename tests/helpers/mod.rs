//! Test utility functions: a scripted mock command runner and event capture

// each integration target uses its own subset of these helpers
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use wp_create::{
    provisioning_steps, CommandError, CommandRunner, ProvisionEngine, ProvisioningConfig,
    StepEvent, WpCli,
};

/// Mock runner that records every invocation and fails on demand
///
/// Failures are keyed by a prefix of the space-joined argument vector, e.g.
/// `fail_on("core download", "network unreachable")` fails the core
/// download with that stderr text. Clones share state, so a clone can be
/// handed to the engine while the test keeps one for assertions.
#[derive(Clone, Default)]
pub struct MockWp {
    invocations: Arc<Mutex<Vec<Vec<String>>>>,
    failures: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockWp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any invocation whose argv starts with `prefix` (space-joined).
    pub fn fail_on(self, prefix: &str, stderr: &str) -> Self {
        self.failures
            .lock()
            .unwrap()
            .push((prefix.to_string(), stderr.to_string()));
        self
    }

    /// Every recorded invocation, space-joined for easy assertions.
    pub fn commands(&self) -> Vec<String> {
        self.invocations
            .lock()
            .unwrap()
            .iter()
            .map(|args| args.join(" "))
            .collect()
    }

    /// Raw argument vectors, in invocation order.
    pub fn argv(&self) -> Vec<Vec<String>> {
        self.invocations.lock().unwrap().clone()
    }

    /// Whether any recorded invocation starts with `prefix`.
    pub fn ran(&self, prefix: &str) -> bool {
        self.commands()
            .iter()
            .any(|command| command.starts_with(prefix))
    }
}

#[async_trait]
impl CommandRunner for MockWp {
    async fn run(&self, _program: &str, args: &[String]) -> Result<String, CommandError> {
        self.invocations.lock().unwrap().push(args.to_vec());
        let joined = args.join(" ");
        for (prefix, stderr) in self.failures.lock().unwrap().iter() {
            if joined.starts_with(prefix.as_str()) {
                return Err(CommandError::Failed(stderr.clone()));
            }
        }
        Ok(String::new())
    }
}

/// Run the full provisioning sequence against a mock runner, capturing the
/// emitted step events.
pub async fn run_provisioning(
    mock: &MockWp,
    config: &ProvisioningConfig,
) -> (Result<(), CommandError>, Vec<StepEvent>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let mut engine = ProvisionEngine::new(WpCli::new(mock.clone()));
    {
        let events = Arc::clone(&events);
        engine.add_event_handler(move |event| events.lock().unwrap().push(event.clone()));
    }
    let result = engine.run(&provisioning_steps(), config).await;
    let collected = events.lock().unwrap().clone();
    (result, collected)
}

/// The reason a step with `title` was skipped with, if it was.
pub fn skipped_reason(events: &[StepEvent], title: &str) -> Option<String> {
    events.iter().find_map(|event| match event {
        StepEvent::Skipped {
            title: skipped,
            reason,
            ..
        } if skipped == title => Some(reason.clone()),
        _ => None,
    })
}

/// Titles of every step that actually started, in order.
pub fn started_titles(events: &[StepEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            StepEvent::Started { title, .. } => Some(title.clone()),
            _ => None,
        })
        .collect()
}

/// Whether any event at all mentions the step with `title`.
pub fn mentions_step(events: &[StepEvent], title: &str) -> bool {
    events.iter().any(|event| match event {
        StepEvent::Started { title: t, .. }
        | StepEvent::Completed { title: t, .. }
        | StepEvent::Skipped { title: t, .. }
        | StepEvent::Failed { title: t, .. } => t == title,
    })
}
