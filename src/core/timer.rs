// License: MIT

use crate::core::{
    events::{BuildScope, Event},
    report::Report,
    session::Session,
};
use crate::bdebug;

/// The build-timing state machine.
///
/// Two states, driven entirely by host events:
/// - idle: no qualifying build in progress
/// - timing: a solution build/rebuild is running
///
/// Begin-events open the session only for solution-scoped build or
/// rebuild operations. Done-events ignore their scope/action and close
/// whatever session is open, so a done fired with different metadata
/// than its paired begin still ends the measurement.
#[derive(Debug, Default)]
pub struct BuildTimer;

impl BuildTimer {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_event(&self, session: &mut Session, event: Event) -> Vec<Report> {
        match event {
            Event::BuildBegin {
                scope,
                action,
                now_ms,
            } => {
                if scope != BuildScope::Solution || !action.is_timed() {
                    bdebug!("Timer", "ignoring begin: scope={scope}, action={action}");
                    return Vec::new();
                }

                if session.timing() {
                    // Re-entrant begin while already timing: first open
                    // session wins.
                    bdebug!(
                        "Timer",
                        "begin while timing, keeping start at {}ms",
                        session.started_ms()
                    );
                    return Vec::new();
                }

                session.open(now_ms);
                vec![Report::SessionStarted { at_ms: now_ms }]
            }

            Event::BuildDone { now_ms, .. } => {
                if !session.timing() {
                    bdebug!("Timer", "done with no open session, ignoring");
                    return Vec::new();
                }

                let elapsed_ms = session.close(now_ms);
                bdebug!(
                    "Timer",
                    "session closed: started={}ms ended={}ms",
                    session.started_ms(),
                    session.ended_ms()
                );
                vec![
                    Report::SessionEnded { at_ms: now_ms },
                    Report::Elapsed { elapsed_ms },
                ]
            }
        }
    }
}
