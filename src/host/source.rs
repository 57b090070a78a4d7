// License: MIT

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::Sender;

use crate::bwarn;
use crate::core::error::ParseError;
use crate::core::events::{Event, normalize};

/// Parse one wire line into an event, stamping it with `now_ms`.
///
/// Format: `begin <scope> <action>` or `done <scope> <action>`, tokens
/// case-insensitive with `_`/`-` interchangeable. Blank lines and
/// `#` comments yield `Ok(None)`. Tokens past the action are ignored.
pub fn parse_line(line: &str, now_ms: u64) -> Result<Option<Event>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = trimmed.split_whitespace();

    let kind_tok = tokens.next().ok_or(ParseError::MissingField("event kind"))?;
    let kind = normalize(kind_tok);
    if kind != "begin" && kind != "done" {
        return Err(ParseError::UnknownKind(kind_tok.to_string()));
    }

    let scope = tokens
        .next()
        .ok_or(ParseError::MissingField("build scope"))?
        .parse()?;
    let action = tokens
        .next()
        .ok_or(ParseError::MissingField("build action"))?
        .parse()?;

    if kind == "begin" {
        Ok(Some(Event::BuildBegin {
            scope,
            action,
            now_ms,
        }))
    } else {
        Ok(Some(Event::BuildDone {
            scope,
            action,
            now_ms,
        }))
    }
}

/// Read build notifications from stdin until EOF.
///
/// Malformed lines are logged and dropped; they never close the
/// subscription. The sender is dropped on return, which detaches the
/// watch loop from the event source.
pub async fn run_stdin_source(tx: Sender<Event>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                bwarn!("Host", "event stream closed (EOF)");
                break;
            }
            Err(e) => {
                bwarn!("Host", "event stream read failed: {e}");
                break;
            }
        };

        match parse_line(&line, now_ms()) {
            Ok(Some(event)) => {
                // If the watch loop is gone, stop.
                if tx.send(event).await.is_err() {
                    bwarn!("Host", "source stopping (receiver dropped)");
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                bwarn!("Host", "dropping event line '{}': {e}", line.trim());
            }
        }
    }
}

pub fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0));
    d.as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::{BuildAction, BuildScope};

    #[test]
    fn parses_begin_and_done_lines() {
        let ev = parse_line("begin solution build", 42).unwrap();
        assert_eq!(
            ev,
            Some(Event::BuildBegin {
                scope: BuildScope::Solution,
                action: BuildAction::Build,
                now_ms: 42,
            })
        );

        let ev = parse_line("done project clean", 43).unwrap();
        assert_eq!(
            ev,
            Some(Event::BuildDone {
                scope: BuildScope::Project,
                action: BuildAction::Clean,
                now_ms: 43,
            })
        );
    }

    #[test]
    fn normalizes_case_and_separators() {
        let ev = parse_line("BEGIN Solution Rebuild_All", 1).unwrap();
        assert_eq!(
            ev,
            Some(Event::BuildBegin {
                scope: BuildScope::Solution,
                action: BuildAction::RebuildAll,
                now_ms: 1,
            })
        );

        let ev = parse_line("done project-selection build", 2).unwrap();
        assert!(matches!(
            ev,
            Some(Event::BuildDone {
                scope: BuildScope::ProjectSelection,
                ..
            })
        ));
    }

    #[test]
    fn skips_blanks_and_comments() {
        assert_eq!(parse_line("", 1), Ok(None));
        assert_eq!(parse_line("   ", 1), Ok(None));
        assert_eq!(parse_line("# host handshake", 1), Ok(None));
    }

    #[test]
    fn extra_tokens_are_ignored() {
        let ev = parse_line("begin solution build config=Release", 7).unwrap();
        assert!(matches!(ev, Some(Event::BuildBegin { .. })));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(
            parse_line("started solution build", 1),
            Err(ParseError::UnknownKind("started".to_string()))
        );
        assert_eq!(
            parse_line("begin workspace build", 1),
            Err(ParseError::UnknownScope("workspace".to_string()))
        );
        assert_eq!(
            parse_line("begin solution compile", 1),
            Err(ParseError::UnknownAction("compile".to_string()))
        );
        assert_eq!(
            parse_line("begin solution", 1),
            Err(ParseError::MissingField("build action"))
        );
        assert_eq!(
            parse_line("begin", 1),
            Err(ParseError::MissingField("build scope"))
        );
    }
}
