//! Weekly report export running beside the web server.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use problem_tracker_core::ExportSchedule;
use problem_tracker_export::ExportSummary;
use tokio::task::JoinHandle;

use crate::ProblemService;

/// Upper bound on a single sleep so wall-clock adjustments are picked up.
const MAX_SLEEP: Duration = Duration::from_secs(3600);

/// Spawns the background task that exports the report at every slot of `schedule`.
///
/// The next slot is computed only after the current export finishes, so runs
/// never overlap. Slots missed while the process was down are not replayed.
pub fn start_weekly_export(service: Arc<ProblemService>, schedule: ExportSchedule) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!(%schedule, "Weekly export scheduler started");
        loop {
            let next = schedule.next_after(&Local::now());
            tracing::info!(next = %next, "Next scheduled export");
            sleep_until(next).await;
            drop(run_export_job(Arc::clone(&service)).await);
        }
    })
}

async fn sleep_until(deadline: DateTime<Local>) {
    loop {
        let remaining = (deadline - Local::now()).to_std().unwrap_or_default();
        if remaining.is_zero() {
            return;
        }
        tokio::time::sleep(remaining.min(MAX_SLEEP)).await;
    }
}

/// Run one export on the blocking pool. Failures are logged, not propagated.
pub async fn run_export_job(service: Arc<ProblemService>) -> Option<ExportSummary> {
    tracing::debug!("Scheduled export: running...");
    let result = tokio::task::spawn_blocking(move || service.export_report()).await;
    match result {
        Ok(Ok(summary)) => {
            tracing::info!(
                path = %summary.path.display(),
                rows = summary.rows,
                "Scheduled export finished"
            );
            Some(summary)
        },
        Ok(Err(e)) => {
            tracing::error!("Scheduled export failed: {e}");
            None
        },
        Err(e) => {
            tracing::error!("Scheduled export panic: {e:?}");
            None
        },
    }
}
