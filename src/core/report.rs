// License: MIT

use chrono::{Local, TimeZone};

/// One report from the timing engine. Each value renders to exactly one
/// line on the output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// A qualifying solution build started.
    SessionStarted { at_ms: u64 },

    /// The open session closed.
    SessionEnded { at_ms: u64 },

    /// Wall-clock duration of the session that just closed.
    Elapsed { elapsed_ms: u64 },
}

impl Report {
    pub fn render(&self) -> String {
        match self {
            Report::SessionStarted { at_ms } => {
                format!("Starting timed solution build on {}", format_timestamp(*at_ms))
            }
            Report::SessionEnded { at_ms } => {
                format!("Ended timed solution build on {}", format_timestamp(*at_ms))
            }
            Report::Elapsed { elapsed_ms } => {
                format!("Total build time: {}", format_elapsed(*elapsed_ms))
            }
        }
    }
}

fn format_timestamp(at_ms: u64) -> String {
    match Local.timestamp_millis_opt(at_ms as i64).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format!("{at_ms}ms"),
    }
}

pub fn format_elapsed(elapsed_ms: u64) -> String {
    let secs = elapsed_ms / 1000;
    let millis = elapsed_ms % 1000;

    if secs < 60 {
        format!("{}.{:03}s", secs, millis)
    } else if secs < 3600 {
        let minutes = secs / 60;
        let seconds = secs % 60;
        format!("{}m {}s", minutes, seconds)
    } else {
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        let seconds = secs % 60;
        format!("{}h {}m {}s", hours, minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_keeps_millis_under_a_minute() {
        assert_eq!(format_elapsed(0), "0.000s");
        assert_eq!(format_elapsed(850), "0.850s");
        assert_eq!(format_elapsed(12_345), "12.345s");
    }

    #[test]
    fn elapsed_tiers_drop_millis() {
        assert_eq!(format_elapsed(60_000), "1m 0s");
        assert_eq!(format_elapsed(125_300), "2m 5s");
        assert_eq!(format_elapsed(3_723_000), "1h 2m 3s");
    }

    #[test]
    fn elapsed_line_contains_duration() {
        let line = Report::Elapsed { elapsed_ms: 2_500 }.render();
        assert_eq!(line, "Total build time: 2.500s");
    }
}
