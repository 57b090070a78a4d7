// License: MIT

pub mod error;
pub mod events;
pub mod report;
pub mod session;
pub mod timer;
