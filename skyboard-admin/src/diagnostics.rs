use skyboard_core::Diagnostics;
use skyboard_model::{ColumnId, RecordUri};
use tracing::{debug, warn};

use crate::config::Config;

/// `Diagnostics` sink that routes the §7 error-taxonomy conditions
/// through `tracing`, at `warn` or `debug` depending on
/// `Config::verbose_diagnostics`.
pub struct TracingDiagnostics {
    verbose: bool,
}

impl TracingDiagnostics {
    pub fn new(config: &Config) -> Self {
        TracingDiagnostics {
            verbose: config.verbose_diagnostics,
        }
    }
}

impl Diagnostics for TracingDiagnostics {
    fn dangling_op_target(&self, op_uri: &RecordUri, target_task_uri: &RecordUri) {
        if self.verbose {
            warn!(target: "skyboard", %op_uri, %target_task_uri, "op targets unknown task");
        } else {
            debug!(target: "skyboard", %op_uri, %target_task_uri, "op targets unknown task");
        }
    }

    fn orphaned_task(&self, task_uri: &RecordUri, column_id: &ColumnId) {
        if self.verbose {
            warn!(target: "skyboard", %task_uri, column = %column_id.0, "task references unknown column");
        } else {
            debug!(target: "skyboard", %task_uri, column = %column_id.0, "task references unknown column");
        }
    }
}
