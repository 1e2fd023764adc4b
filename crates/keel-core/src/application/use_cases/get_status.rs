//! Get Status - liveness report for the operational endpoint.
//!
//! The worked example for constructor injection: the use case owns a driven
//! port (`Clock`) behind a trait object, so tests pin time down exactly. It
//! implements the driving port (incoming) and uses driven ports (outgoing).

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::application::ports::Clock;

/// Snapshot returned by `GetStatusUseCase::execute`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub status: &'static str,
    pub version: String,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
}

/// Reports process liveness and uptime.
///
/// Construction reads the clock once to pin `started_at`; every `execute`
/// reads it again for the uptime delta.
pub struct GetStatusUseCase {
    clock: Box<dyn Clock>,
    version: String,
    started_at: DateTime<Utc>,
}

impl GetStatusUseCase {
    /// Create the use case with the given clock adapter.
    ///
    /// `version` is the caller's crate version; the core does not assume
    /// which binary it is embedded in.
    pub fn new(clock: Box<dyn Clock>, version: impl Into<String>) -> Self {
        let started_at = clock.now();
        Self {
            clock,
            version: version.into(),
            started_at,
        }
    }

    /// Assemble a status report. Cannot fail; a clock that moves backwards
    /// clamps uptime to zero.
    #[instrument(skip(self))]
    pub fn execute(&self) -> StatusReport {
        let now = self.clock.now();
        let uptime_seconds = u64::try_from((now - self.started_at).num_seconds()).unwrap_or(0);

        debug!(uptime_seconds, "status report assembled");

        StatusReport {
            status: "ok",
            version: self.version.clone(),
            started_at: self.started_at,
            uptime_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockClock;
    use mockall::Sequence;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn scripted_clock(readings: &[DateTime<Utc>]) -> MockClock {
        let mut clock = MockClock::new();
        let mut seq = Sequence::new();
        for reading in readings {
            clock
                .expect_now()
                .times(1)
                .in_sequence(&mut seq)
                .return_const(*reading);
        }
        clock
    }

    #[test]
    fn reports_version_and_uptime() {
        let clock = scripted_clock(&[at(1_000), at(1_090)]);
        let use_case = GetStatusUseCase::new(Box::new(clock), "1.2.3");

        let report = use_case.execute();

        assert_eq!(report.status, "ok");
        assert_eq!(report.version, "1.2.3");
        assert_eq!(report.started_at, at(1_000));
        assert_eq!(report.uptime_seconds, 90);
    }

    #[test]
    fn uptime_clamps_when_clock_goes_backwards() {
        let clock = scripted_clock(&[at(1_000), at(900)]);
        let use_case = GetStatusUseCase::new(Box::new(clock), "1.2.3");

        assert_eq!(use_case.execute().uptime_seconds, 0);
    }

    #[test]
    fn started_at_is_pinned_at_construction() {
        let clock = scripted_clock(&[at(10), at(20), at(30)]);
        let use_case = GetStatusUseCase::new(Box::new(clock), "0.0.0");

        assert_eq!(use_case.execute().uptime_seconds, 10);
        assert_eq!(use_case.execute().uptime_seconds, 20);
    }

    // The report is what /healthz serializes; field names are API surface.
    #[test]
    fn report_serializes_with_stable_field_names() {
        let clock = scripted_clock(&[at(0), at(5)]);
        let use_case = GetStatusUseCase::new(Box::new(clock), "1.0.0");

        let value = serde_json::to_value(use_case.execute()).unwrap();

        assert_eq!(value["status"], "ok");
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["uptime_seconds"], 5);
        assert!(value["started_at"].is_string());
    }
}
