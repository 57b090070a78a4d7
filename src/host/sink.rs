// License: MIT

use std::io::{self, Write};

/// Where rendered report lines go. The daemon writes to stdout; tests
/// collect into a `Vec<String>`.
pub trait OutputSink {
    fn write_line(&mut self, text: &str) -> io::Result<()>;
}

pub struct StdoutSink {
    out: io::Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        StdoutSink::new()
    }
}

impl OutputSink for StdoutSink {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut handle = self.out.lock();
        writeln!(handle, "{text}")?;
        // Reports must be visible while the build runs, not at exit.
        handle.flush()
    }
}

impl OutputSink for Vec<String> {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{session::Session, timer::BuildTimer};
    use crate::host::source::parse_line;

    #[test]
    fn wire_lines_flow_through_to_the_sink() {
        let timer = BuildTimer::new();
        let mut session = Session::new();
        let mut sink: Vec<String> = Vec::new();

        let script = [
            ("# host handshake", 0),
            ("begin project build", 1000),
            ("begin solution build", 2000),
            ("done solution build", 65_500),
        ];

        for (line, now_ms) in script {
            if let Some(event) = parse_line(line, now_ms).unwrap() {
                for report in timer.handle_event(&mut session, event) {
                    sink.write_line(&report.render()).unwrap();
                }
            }
        }

        assert_eq!(sink.len(), 3);
        assert!(sink[0].starts_with("Starting timed solution build on "));
        assert!(sink[1].starts_with("Ended timed solution build on "));
        assert_eq!(sink[2], "Total build time: 1m 3s");
    }
}
