//! Raw deployment properties
//!
//! Every property is optional. Missing values fall back to empty strings,
//! zero, `false` or empty lists so that any combination of sources produces
//! a usable `RawConfiguration`.
//!
//! Sources, lowest priority first:
//! 1. Built-in defaults
//! 2. Properties file (JSON, TOML or YAML, chosen by extension)
//! 3. Environment variables (`CONFAB__*`, `__` separates nesting levels)
//!
//! Environment values arrive as strings and are kept verbatim for string
//! properties. List properties take a comma-separated value; empty entries
//! are dropped, so an empty variable means an empty list.

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::ConfabError;

/// Prefix for environment overrides, e.g. `CONFAB__NODE__EXTERNAL_IP`
pub const ENV_PREFIX: &str = "CONFAB";

/// Separator for list properties given as a single string
const LIST_SEPARATOR: char = ',';

/// Mode string that selects a Consul server
pub const SERVER_MODE: &str = "server";

/// Operator-supplied properties for one node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfiguration {
    /// Identity of the VM this agent runs on
    pub node: NodeConfig,

    /// Consul agent settings
    pub cluster_agent: ClusterAgentConfig,

    /// TLS and gossip encryption policy
    pub security_policy: SecurityPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Job name of the instance group
    pub name: String,

    /// Index of the instance within its group
    pub index: u64,

    /// Address the agent binds to
    pub external_ip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterAgentConfig {
    pub datacenter: String,

    pub log_level: String,

    /// `"server"` for server nodes; anything else runs a client agent
    pub mode: String,

    /// Consul protocol version to speak (0 lets the daemon pick)
    pub protocol_version: u32,

    pub servers: ServersConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServersConfig {
    /// LAN addresses of every server in the cluster
    #[serde(deserialize_with = "string_list")]
    pub lan: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityPolicy {
    /// Require mutual TLS between agents
    pub require_ssl: bool,

    /// Gossip encryption passphrases; only the first is used
    #[serde(deserialize_with = "string_list")]
    pub encryption_keys: Vec<String>,
}

/// Role a node plays in the cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentMode {
    Server,
    Client,
}

impl AgentMode {
    /// Classify a mode property. Unknown or empty modes run as clients.
    pub fn from_mode(mode: &str) -> Self {
        if mode == SERVER_MODE {
            AgentMode::Server
        } else {
            AgentMode::Client
        }
    }

    pub fn is_server(&self) -> bool {
        matches!(self, AgentMode::Server)
    }
}

impl ClusterAgentConfig {
    pub fn agent_mode(&self) -> AgentMode {
        AgentMode::from_mode(&self.mode)
    }
}

impl RawConfiguration {
    /// Load properties from an optional file, then apply environment overrides
    ///
    /// A file that is named but missing is an error; leaving `path` unset
    /// loads from the environment alone.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfabError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "Reading properties file");
            builder = builder.add_source(::config::File::from(path));
        }

        builder = builder.add_source(environment_source());

        let raw: RawConfiguration = builder.build()?.try_deserialize()?;

        tracing::info!(
            node = %raw.node.name,
            index = raw.node.index,
            mode = %raw.cluster_agent.mode,
            servers = raw.cluster_agent.servers.lan.len(),
            require_ssl = raw.security_policy.require_ssl,
            "Loaded raw configuration"
        );

        Ok(raw)
    }

    /// Render the properties as TOML, e.g. to seed or inspect a properties file
    pub fn to_toml(&self) -> Result<String, ConfabError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn environment_source() -> ::config::Environment {
    ::config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
}

/// Accept a list property as a sequence or as one comma-separated string
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringListVisitor;

    impl<'de> Visitor<'de> for StringListVisitor {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a list of strings or a comma-separated string")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(value
                .split(LIST_SEPARATOR)
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect())
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(entry) = seq.next_element::<String>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_any(StringListVisitor)
}
