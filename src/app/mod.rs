// License: MIT

pub mod watch;
