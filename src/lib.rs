//! Confab
//!
//! Generates the Consul agent configuration for a node from its sparse
//! deployment properties, ahead of the daemon starting:
//!
//! - Layered loading of raw properties (file and environment)
//! - Pure derivation of the full agent configuration
//! - Gossip key derivation from operator passphrases
//! - JSON output in the daemon's native format

pub mod config;
pub mod encrypt;
pub mod error;
pub mod generator;
pub mod output;
pub mod paths;

pub use crate::config::{AgentConfiguration, RawConfiguration};
pub use crate::error::ConfabError;
pub use crate::generator::generate_configuration;
