//! CLI output formatting

use crate::{
    core::config::ProvisioningConfig,
    execution::{PlannedStatus, PlannedStep, StepEvent},
};
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static SKIP: Emoji<'_, '_> = Emoji("⏭️  ", "- ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Renders step events as a live task list: a spinner on the step that is
/// running, a line per finished step, skipped steps dimmed with their reason.
pub struct StepRenderer {
    active: Mutex<Option<ProgressBar>>,
}

impl StepRenderer {
    pub fn new() -> Self {
        Self {
            active: Mutex::new(None),
        }
    }

    fn clear_active(&self) {
        if let Some(bar) = self.active.lock().unwrap().take() {
            bar.finish_and_clear();
        }
    }

    pub fn handle(&self, event: &StepEvent) {
        match event {
            StepEvent::Started { title, depth, group } => {
                self.clear_active();
                if *group {
                    // group titles print immediately; children render below
                    println!("{}{}", indent(*depth), style(title).bold());
                } else {
                    let bar = ProgressBar::new_spinner();
                    bar.set_style(
                        ProgressStyle::default_spinner()
                            .template("{spinner:.green} {msg}")
                            .unwrap(),
                    );
                    bar.set_message(format!("{}{}", indent(*depth), title));
                    bar.enable_steady_tick(Duration::from_millis(100));
                    *self.active.lock().unwrap() = Some(bar);
                }
            }
            StepEvent::Completed { title, depth, group } => {
                if !group {
                    self.clear_active();
                    println!("{}{}{}", indent(*depth), CHECK, title);
                }
            }
            StepEvent::Skipped { title, depth, reason } => {
                self.clear_active();
                println!(
                    "{}{}{} {}",
                    indent(*depth),
                    SKIP,
                    title,
                    style(format!("({reason})")).dim()
                );
            }
            StepEvent::Failed { title, depth, .. } => {
                self.clear_active();
                println!("{}{}{}", indent(*depth), CROSS, style(title).red());
            }
        }
    }
}

impl Default for StepRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Print the success report: admin URL and credentials.
pub fn print_success_report(config: &ProvisioningConfig) {
    println!();
    println!("{}", style(config.admin_url()).cyan().underlined());
    println!();
    println!("Username: {}", style(&config.admin_user).bold());
    println!("Password: {}", style(&config.admin_password).bold());
    println!();
}

/// Print the failure banner plus the underlying error text.
pub fn print_failure(error: &str) {
    eprintln!();
    eprintln!("{}", style("Something went wrong").red().bold());
    eprintln!("{}", error.trim_end());
}

/// Render a dry-run plan as an indented task list.
pub fn print_plan(steps: &[PlannedStep]) {
    print_plan_at(steps, 0);
}

fn print_plan_at(steps: &[PlannedStep], depth: usize) {
    for step in steps {
        match step.status {
            PlannedStatus::Skipped => {
                let reason = step.reason.as_deref().unwrap_or("skipped");
                println!(
                    "{}{}{} {}",
                    indent(depth),
                    SKIP,
                    step.title,
                    style(format!("({reason})")).dim()
                );
            }
            PlannedStatus::Ready => {
                println!("{}{}", indent(depth), style(&step.title).bold());
                for command in &step.commands {
                    println!("{}  {}", indent(depth), style(command).dim());
                }
                print_plan_at(&step.steps, depth + 1);
            }
        }
    }
}
