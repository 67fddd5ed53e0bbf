//! Translation of health records into monitoring sink calls

use super::sink::{MonitoringSink, NagiosStatus};
use crate::health::{Check, LooseRecord, Status, StatusLevel, loose_string, parse_number};
use crate::utils::current_timestamp_millis;
use crate::utils::error::Result;
use serde_json::Value;
use tracing::{debug, warn};

/// Report each metric record as performance data and escalate on its status
/// or thresholds.
///
/// Records without a `value`, or whose `value` is an object or array, are
/// skipped. OK messages are only emitted when `verbose`.
pub fn translate_metrics<S>(sink: &mut S, records: &[Value], verbose: bool)
where
    S: MonitoringSink + ?Sized,
{
    for raw in records {
        let record = LooseRecord::from_value(raw);

        let Some(value) = record.get("value") else {
            continue;
        };
        if value.is_object() || value.is_array() {
            debug!(name = %record.get_string("name"), "Skipping structured metric value");
            continue;
        }

        let mut value = loose_string(value);
        if value.is_empty() {
            value = "0".to_string();
        }

        let warn = record
            .get_first(&["warnover", "warnvalue"])
            .map(loose_string)
            .unwrap_or_default();
        let crit = record
            .get_first(&["badover", "badvalue"])
            .map(loose_string)
            .unwrap_or_default();
        let min = record.get_string("minvalue");
        let max = record.get_string("maxvalue");
        let name = record.get_string("name");

        sink.add_metric_numbers(&name, &value, &warn, &crit, &min, &max);

        // A present `status`, even null or unrecognized, suppresses thresholds
        if record.get("status").is_some() {
            let status = record.get_string("status");
            let level = StatusLevel::parse(&status);

            sink.add_message_if_bool(
                &format!(" {} {}={}", status, name, value),
                verbose || level != Some(StatusLevel::Ok),
            );
            match level {
                Some(StatusLevel::Warning) => sink.escalate(NagiosStatus::Warning),
                Some(l) if l.is_critical() => sink.escalate(NagiosStatus::Critical),
                _ => {}
            }
        } else if let Some(v) = parse_number(&value) {
            if parse_number(&crit).is_some_and(|c| v > c) {
                sink.add_message(&format!(" {} {}={}", StatusLevel::Critical, name, value));
                sink.escalate(NagiosStatus::Critical);
            } else if parse_number(&warn).is_some_and(|w| v > w) {
                sink.add_message(&format!(" {} {}={}", StatusLevel::Warning, name, value));
                sink.escalate(NagiosStatus::Warning);
            }
        }
    }
}

/// Escalate and describe each check record, flagging stale ones.
///
/// A record's own `timeout` (milliseconds) overrides `max_age_seconds`.
pub fn translate_checks<S>(sink: &mut S, max_age_seconds: i64, records: &[Value], verbose: bool)
where
    S: MonitoringSink + ?Sized,
{
    translate_checks_at(sink, max_age_seconds, records, verbose, current_timestamp_millis());
}

/// [`translate_checks`] against an explicit "now" in epoch milliseconds
pub fn translate_checks_at<S>(
    sink: &mut S,
    max_age_seconds: i64,
    records: &[Value],
    verbose: bool,
    now_millis: i64,
) where
    S: MonitoringSink + ?Sized,
{
    for raw in records {
        let record = LooseRecord::from_value(raw);
        let name = record.get_string("name");

        let timeout = record.get_i64("timeout");
        let max_age = if timeout != 0 {
            timeout
        } else {
            max_age_seconds.saturating_mul(1000)
        };

        let timestamp = record.get_i64("timestamp");
        if timestamp != 0 {
            let age = now_millis.saturating_sub(timestamp);
            if age > max_age {
                warn!(name = %name, age_ms = age, max_age_ms = max_age, "Stale health record");
                sink.escalate(NagiosStatus::Warning);
                sink.add_message(&format!(" {}: STALE ({}s old) ", name, age / 1000));
            }
        }

        let value = record.get_string("value");
        let status = record.get_string("status");
        let error = record.get_string("error");
        let mut message = record.get_string("message");
        if message.is_empty() && !value.is_empty() {
            message = value;
        }

        let level = StatusLevel::parse(&status);
        sink.add_message_if_bool(
            &format!(" {}: {}", name, status),
            verbose || !level.is_some_and(|l| l.is_ok()),
        );

        match level {
            Some(StatusLevel::Warning) => {
                sink.escalate(NagiosStatus::Warning);
                add_details(sink, &error, &message);
            }
            Some(StatusLevel::Bad | StatusLevel::Error | StatusLevel::Down | StatusLevel::Critical) => {
                sink.escalate(NagiosStatus::Critical);
                add_details(sink, &error, &message);
            }
            Some(StatusLevel::Ok | StatusLevel::Up) => {
                sink.escalate(NagiosStatus::Ok);
                sink.add_message_if_bool(&format!(" ({})", message), verbose && !message.is_empty());
            }
            Some(StatusLevel::Unknown) => {
                sink.escalate(NagiosStatus::Unknown);
                sink.add_message(" Unknown state! ");
                add_details(sink, &error, &message);
            }
            None => sink.add_message_if(&message, &message),
        }
    }
}

fn add_details<S>(sink: &mut S, error: &str, message: &str)
where
    S: MonitoringSink + ?Sized,
{
    sink.add_message_if(&format!(" {}", error), error);
    sink.add_message_if(&format!(" ({})", message), message);
}

/// Drive a normalized [`Check`] through the sink: services and systems as
/// checks, metrics as performance data.
pub fn translate_check<S>(sink: &mut S, check: &Check, max_age_seconds: i64, verbose: bool) -> Result<()>
where
    S: MonitoringSink + ?Sized,
{
    let encode = |records: &[Status]| -> Result<Vec<Value>> {
        records
            .iter()
            .map(|r| serde_json::to_value(r).map_err(Into::into))
            .collect()
    };

    let now = current_timestamp_millis();
    translate_checks_at(sink, max_age_seconds, &encode(check.services())?, verbose, now);
    translate_checks_at(sink, max_age_seconds, &encode(check.systems())?, verbose, now);
    translate_metrics(sink, &encode(check.metrics())?, verbose);

    debug!(status = %sink.status(), "Translated check");
    Ok(())
}
