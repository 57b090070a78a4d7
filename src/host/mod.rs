// License: MIT

pub mod sink;
pub mod source;
