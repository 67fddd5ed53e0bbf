//! Nagios-style output
//!
//! Translates health records into escalations, messages and performance
//! data on a [`MonitoringSink`].

mod sink;
mod translate;


pub use sink::{MonitoringSink, NagiosCheck, NagiosStatus};
pub use translate::{translate_check, translate_checks, translate_checks_at, translate_metrics};
