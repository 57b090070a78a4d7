// License: MIT

/// Timing state for the one build session this process tracks.
///
/// At most one session is open at a time; the host never nests
/// begin/done pairs. `started_ms` is meaningful only while `timing`
/// is true.
#[derive(Debug, Clone)]
pub struct Session {
    timing: bool,

    // Timestamps (ms since epoch, supplied by the event source)
    started_ms: u64,
    ended_ms: u64,

    // Completed qualifying builds this process lifetime.
    builds_timed: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            timing: false,
            started_ms: 0,
            ended_ms: 0,
            builds_timed: 0,
        }
    }

    pub fn timing(&self) -> bool {
        self.timing
    }

    pub fn started_ms(&self) -> u64 {
        self.started_ms
    }

    pub fn ended_ms(&self) -> u64 {
        self.ended_ms
    }

    pub fn builds_timed(&self) -> u64 {
        self.builds_timed
    }

    /// Open the session at `now_ms`.
    pub fn open(&mut self, now_ms: u64) {
        self.timing = true;
        self.started_ms = now_ms;
    }

    /// Close the session at `now_ms` and return the elapsed milliseconds.
    pub fn close(&mut self, now_ms: u64) -> u64 {
        self.timing = false;
        self.ended_ms = now_ms;
        self.builds_timed += 1;
        now_ms.saturating_sub(self.started_ms)
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
