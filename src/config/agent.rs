//! Consul agent configuration
//!
//! Mirrors the daemon's JSON config file. Optional settings serialize only
//! when present so the daemon applies its own defaults for the rest.

use serde::{Deserialize, Serialize};

use crate::error::ConfabError;

/// Consul agent configuration written for the daemon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfiguration {
    /// Datacenter the agent belongs to
    pub datacenter: String,

    /// DNS domain the agent answers for
    pub domain: String,

    /// Directory for the agent's persistent state
    pub data_dir: String,

    /// Daemon log verbosity
    pub log_level: String,

    /// Unique node name within the cluster
    pub node_name: String,

    /// Run as a server rather than a client agent
    pub server: bool,

    /// Number of servers to wait for before electing a leader (servers only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootstrap_expect: Option<usize>,

    /// Peers contacted on startup
    pub retry_join: Vec<String>,

    /// Address cluster traffic binds to
    pub bind_addr: String,

    /// Listener ports
    pub ports: Ports,

    /// Rejoin the cluster after a graceful leave
    pub rejoin_after_leave: bool,

    /// Refuse `consul exec` requests
    pub disable_remote_exec: bool,

    /// Skip the upstream version check
    pub disable_update_check: bool,

    /// Consul protocol version (0 lets the daemon pick)
    pub protocol: u32,

    /// Verify certificates on outgoing connections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_outgoing: Option<bool>,

    /// Require client certificates on incoming connections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_incoming: Option<bool>,

    /// Check that server certificates name a server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_server_hostname: Option<bool>,

    /// Certificate authority bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_file: Option<String>,

    /// Certificate presented to peers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_file: Option<String>,

    /// Private key for `cert_file`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_file: Option<String>,

    /// Base64 gossip encryption key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypt: Option<String>,
}

/// Ports the agent listens on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ports {
    /// DNS interface port
    pub dns: u16,
}

impl AgentConfiguration {
    /// Render the configuration in the daemon's JSON format
    pub fn to_json_pretty(&self) -> Result<String, ConfabError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
