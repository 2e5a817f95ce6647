//! Pipeline execution

pub mod engine;
pub mod plan;

pub use engine::{EventHandler, ProvisionEngine, StepEvent};
pub use plan::{plan, PlannedStatus, PlannedStep};
