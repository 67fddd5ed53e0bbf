//! Monitoring sink abstraction and the Nagios plugin implementation

use crate::health::StatusLevel;
use serde::Serialize;
use std::fmt;

/// Nagios plugin states, ordered by their exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NagiosStatus {
    #[default]
    Ok = 0,
    Warning = 1,
    Critical = 2,
    Unknown = 3,
}

impl NagiosStatus {
    #[inline]
    pub fn exit_code(self) -> u8 {
        self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NagiosStatus::Ok => "OK",
            NagiosStatus::Warning => "WARNING",
            NagiosStatus::Critical => "CRITICAL",
            NagiosStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for NagiosStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StatusLevel> for NagiosStatus {
    fn from(level: StatusLevel) -> Self {
        match level.canonical() {
            StatusLevel::Ok => NagiosStatus::Ok,
            StatusLevel::Warning => NagiosStatus::Warning,
            StatusLevel::Unknown => NagiosStatus::Unknown,
            _ => NagiosStatus::Critical,
        }
    }
}

/// Consumer of translated health output.
///
/// `escalate` must be monotonic within one pass: implementations only ever
/// raise their level.
pub trait MonitoringSink {
    fn escalate(&mut self, level: NagiosStatus);

    fn add_message(&mut self, text: &str);

    /// Add `text` when `condition` is non-empty
    fn add_message_if(&mut self, text: &str, condition: &str) {
        if !condition.is_empty() {
            self.add_message(text);
        }
    }

    fn add_message_if_bool(&mut self, text: &str, condition: bool) {
        if condition {
            self.add_message(text);
        }
    }

    fn add_metric_numbers(&mut self, name: &str, value: &str, warn: &str, crit: &str, min: &str, max: &str);

    fn status(&self) -> NagiosStatus;
}

/// In-memory Nagios plugin result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NagiosCheck {
    status: NagiosStatus,
    messages: Vec<String>,
    perfdata: Vec<String>,
}

impl NagiosCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn perfdata(&self) -> &[String] {
        &self.perfdata
    }

    /// All messages concatenated in order
    pub fn message(&self) -> String {
        self.messages.concat()
    }

    pub fn exit_code(&self) -> u8 {
        self.status.exit_code()
    }

    /// Plugin output line: `STATUS:<messages> | <perfdata>`
    pub fn output(&self) -> String {
        let mut line = format!("{}:{}", self.status, self.message());
        if !self.perfdata.is_empty() {
            line.push_str(" | ");
            line.push_str(&self.perfdata.join(" "));
        }
        line
    }
}

impl MonitoringSink for NagiosCheck {
    fn escalate(&mut self, level: NagiosStatus) {
        if level > self.status {
            self.status = level;
        }
    }

    fn add_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn add_metric_numbers(&mut self, name: &str, value: &str, warn: &str, crit: &str, min: &str, max: &str) {
        self.perfdata
            .push(format!("'{}'={};{};{};{};{}", name, value, warn, crit, min, max));
    }

    fn status(&self) -> NagiosStatus {
        self.status
    }
}
