pub mod calendar;
pub mod conversations;
pub mod messaging_access;
pub mod messaging_schema;

pub use calendar::{CalendarOptions, CalendarSuite};
pub use conversations::ConversationsSuite;
pub use messaging_access::MessagingAccessSuite;
pub use messaging_schema::MessagingSchemaSuite;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

use crate::models::CheckReport;

/// A fixed sequence of independent checks against the backend.
#[async_trait]
pub trait DiagnosticSuite: Send + Sync {
    /// Short identifier used on the command line.
    fn name(&self) -> &'static str;

    fn title(&self) -> &'static str;

    /// Runs every check, recording outcomes in `report`. Errors from individual
    /// checks are recorded, not returned; an `Err` means the suite itself broke.
    async fn run(&self, report: &mut CheckReport) -> Result<()>;
}

/// Runs the suites one after another. A suite that errors out is recorded as a
/// failure and the remaining suites still run.
pub async fn run_suites(suites: &[Box<dyn DiagnosticSuite>]) -> CheckReport {
    let mut report = CheckReport::default();

    for suite in suites {
        info!("Running suite {}", suite.name());
        report.begin_suite(suite.name(), suite.title());

        if let Err(e) = suite.run(&mut report).await {
            error!("Suite {} aborted: {:#}", suite.name(), e);
            report.fail(suite.name(), format!("Unexpected error: {:#}", e));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct BrokenSuite;

    #[async_trait]
    impl DiagnosticSuite for BrokenSuite {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn title(&self) -> &'static str {
            "Broken suite"
        }

        async fn run(&self, report: &mut CheckReport) -> Result<()> {
            report.pass("first check");
            Err(anyhow!("row missing user_id"))
        }
    }

    struct QuietSuite;

    #[async_trait]
    impl DiagnosticSuite for QuietSuite {
        fn name(&self) -> &'static str {
            "quiet"
        }

        fn title(&self) -> &'static str {
            "Quiet suite"
        }

        async fn run(&self, report: &mut CheckReport) -> Result<()> {
            report.skip("nothing to do", "no data");
            Ok(())
        }
    }

    #[test]
    fn test_broken_suite_does_not_stop_the_run() {
        let suites: Vec<Box<dyn DiagnosticSuite>> = vec![Box::new(BrokenSuite), Box::new(QuietSuite)];

        let report = tokio_test::block_on(run_suites(&suites));

        assert_eq!((report.passed, report.failed, report.skipped), (1, 1, 1));
        assert_eq!(report.failures, vec!["broken: Unexpected error: row missing user_id"]);
        assert_eq!(report.suite_records("quiet").count(), 1);
    }
}
