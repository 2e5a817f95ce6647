//! Desktop notification on completion

use notify_rust::Notification;
use tracing::debug;

/// Fire the success notification. Observational only: failures are logged
/// at debug level and ignored.
pub fn completion(project_name: &str) {
    let result = Notification::new()
        .summary("wp-create")
        .body(&format!("Successfully created project {project_name}."))
        .show();

    if let Err(error) = result {
        debug!("desktop notification failed: {}", error);
    }
}
