//! Configuration shapes consumed and produced by confab
//!
//! - Raw deployment properties supplied by the operator
//! - Consul agent configuration handed to the daemon

mod agent;
mod raw;

pub use agent::*;
pub use raw::*;
