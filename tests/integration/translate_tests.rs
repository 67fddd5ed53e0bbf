//! Translation integration tests
//!
//! Whole documents rendered as Nagios plugin output.

#[cfg(test)]
mod tests {
    use crate::common::{API_JSON, WORKER_JSON, WORKER_METRICS, load};
    use health_rs::nagios::translate_checks_at;
    use health_rs::{
        Check, MonitoringSink, NagiosCheck, NagiosStatus, Status, StatusLevel, translate_check,
        translate_metrics,
    };
    use serde_json::Value;

    fn raw(text: &str, collection: &str) -> Vec<Value> {
        let document: Value = serde_json::from_str(text).unwrap();
        document[collection].as_array().cloned().unwrap_or_default()
    }

    // ==================== Raw Record Tests ====================

    /// Test every worker metric becomes performance data
    #[test]
    fn test_worker_metrics_perfdata() {
        let mut sink = NagiosCheck::new();
        translate_metrics(&mut sink, &raw(WORKER_JSON, "metrics"), false);

        assert_eq!(sink.perfdata().len(), WORKER_METRICS);
        assert_eq!(sink.perfdata()[0], "'mem'=845643;;;;");
        assert!(sink.perfdata().contains(&"'systemload.average'=0.01;;;;".to_string()));
        assert_eq!(sink.perfdata().last().unwrap(), "'broken.test.value'=6;0;5;;");

        assert_eq!(sink.status(), NagiosStatus::Critical);
        assert_eq!(sink.message(), " CRITICAL broken.test.value=6");
    }

    /// Test worker services from 2018 are stale against any sane max age
    #[test]
    fn test_worker_services_are_stale() {
        let mut sink = NagiosCheck::new();
        translate_checks_at(&mut sink, 300, &raw(WORKER_JSON, "services"), false, 1_538_154_010_000);

        assert_eq!(sink.status(), NagiosStatus::Warning);
        assert_eq!(sink.messages().len(), 4);
        assert!(sink.messages().iter().all(|m| m.contains(": STALE (")));
    }

    /// Test fresh api systems are silent unless verbose
    #[test]
    fn test_api_systems_fresh() {
        let now = 1_538_157_611_000;
        let systems = raw(API_JSON, "systems");

        let mut sink = NagiosCheck::new();
        translate_checks_at(&mut sink, 60, &systems, false, now);
        assert_eq!(sink.status(), NagiosStatus::Ok);
        assert!(sink.messages().is_empty());

        let mut sink = NagiosCheck::new();
        translate_checks_at(&mut sink, 60, &systems, true, now);
        assert_eq!(sink.message(), " DBConnection: OK DBConnection: OK");
    }

    // ==================== Normalized Check Tests ====================

    /// Test a normalized worker check drives the plugin to CRITICAL
    #[test]
    fn test_worker_check_output() {
        let check = load(WORKER_JSON);
        let mut sink = NagiosCheck::new();
        translate_check(&mut sink, &check, 300, false).unwrap();

        assert_eq!(sink.exit_code(), 2);
        let output = sink.output();
        assert!(output.starts_with("CRITICAL:"));
        assert!(output.contains(" | 'mem'=845643;;;;"));
        assert!(output.ends_with("'broken.test.value'=6;0;5;;"));
    }

    /// Test plugin status never drops below the document's own verdict for
    /// declared failures
    #[test]
    fn test_declared_failures_agree_with_aggregate() {
        let mut check = Check::new();
        check.add_system(Status::new("db").with_status(StatusLevel::Bad));
        check.add_service(Status::new("cache").with_status(StatusLevel::Warning));

        let mut sink = NagiosCheck::new();
        translate_check(&mut sink, &check, 300, false).unwrap();

        assert_eq!(NagiosStatus::from(check.overall_status()), NagiosStatus::Critical);
        assert_eq!(sink.status(), NagiosStatus::Critical);
        assert_eq!(sink.message(), " cache: WARNING db: BAD");
    }

    /// Test an empty check produces a bare OK line
    #[test]
    fn test_empty_check_output() {
        let mut sink = NagiosCheck::new();
        translate_check(&mut sink, &Check::new(), 300, false).unwrap();
        assert_eq!(sink.output(), "OK:");
        assert_eq!(sink.exit_code(), 0);
    }
}
