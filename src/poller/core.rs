use tokio::time::sleep;

use crate::api::StatusSource;
use crate::error::CycleError;
use crate::homework::{check_response, parse_status};
use crate::notifier::Notifier;

use super::{CycleOutcome, CycleReport, Poller};

impl<S: StatusSource, N: Notifier> Poller<S, N> {
    pub async fn run(mut self) {
        log::info!(
            "poller_started cursor={} retry_period_secs={}",
            self.state.cursor(),
            self.retry_period.as_secs()
        );

        loop {
            match self.run_cycle().await {
                CycleOutcome::Completed(report) => log::debug!(
                    "next_poll_scheduled cursor={} notified={} in_secs={}",
                    report.cursor,
                    report.notified,
                    self.retry_period.as_secs()
                ),
                CycleOutcome::Failed { error, surfaced } => log::debug!(
                    "next_poll_scheduled cursor={} failed_kind={} surfaced={} in_secs={}",
                    self.state.cursor(),
                    error.kind(),
                    surfaced,
                    self.retry_period.as_secs()
                ),
            }
            sleep(self.retry_period).await;
        }
    }

    /// One cycle including failure handling. Never returns an error.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll_once().await {
            Ok(report) => CycleOutcome::Completed(report),
            Err(error) => self.report_failure(error).await,
        }
    }

    /// Fetch, validate, parse every homework, then send them in server order.
    /// The cursor only moves when every step succeeded.
    pub async fn poll_once(&mut self) -> Result<CycleReport, CycleError> {
        let from_date = self.state.cursor();
        let payload = self.source.fetch_statuses(from_date).await?;
        let response = check_response(&payload)?;

        if response.homeworks.is_empty() {
            log::debug!("no_new_statuses from_date={}", from_date);
        }

        // A bad record fails the cycle before anything reaches the chat.
        let messages = response
            .homeworks
            .iter()
            .map(parse_status)
            .collect::<Result<Vec<_>, _>>()?;

        let mut notified = 0;
        for message in &messages {
            self.notifier.send(message).await?;
            notified += 1;
        }

        self.state.complete(response.current_date);
        tracing::info!(
            target: "poller",
            from_date,
            cursor = response.current_date,
            notified,
            "poll_cycle_completed"
        );

        Ok(CycleReport {
            notified,
            cursor: response.current_date,
        })
    }

    async fn report_failure(&mut self, error: CycleError) -> CycleOutcome {
        let diagnostic = error.diagnostic();
        tracing::error!(
            target: "poller",
            kind = error.kind(),
            diagnostic = %diagnostic,
            "poll_cycle_failed"
        );

        if !self.state.should_surface(&diagnostic) {
            log::debug!("error_notification_suppressed kind={}", error.kind());
            return CycleOutcome::Failed {
                error,
                surfaced: false,
            };
        }

        let surfaced = match self.notifier.send(&diagnostic).await {
            Ok(()) => true,
            Err(send_error) => {
                log::error!("error_notification_failed {}", send_error);
                false
            }
        };

        CycleOutcome::Failed { error, surfaced }
    }
}
