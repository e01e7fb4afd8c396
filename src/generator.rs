//! Consul agent configuration generation
//!
//! Turns sparse deployment properties into the complete configuration the
//! daemon expects. Each output field follows its own rule:
//!
//! - Identity and topology are copied from the properties
//! - Domain, data dir, ports and behavior flags are fixed
//! - TLS settings appear only when SSL is required, with certificate paths
//!   chosen by the node's role
//! - The gossip key is derived from the first encryption passphrase
//! - `bootstrap_expect` is set on servers only
//!
//! Generation is pure and total: no I/O, no shared state, and no input can
//! make it fail.

use crate::config::{AgentConfiguration, NodeConfig, Ports, RawConfiguration};
use crate::encrypt::derive_gossip_key;
use crate::paths;

/// DNS domain served by every agent
pub const DOMAIN: &str = "cf.internal";

/// Port the agent's DNS interface listens on
pub const DNS_PORT: u16 = 53;

/// Generate the agent configuration for a node
pub fn generate_configuration(raw: &RawConfiguration) -> AgentConfiguration {
    let agent = &raw.cluster_agent;
    let policy = &raw.security_policy;

    let server = agent.agent_mode().is_server();
    let tls = policy.require_ssl;

    let config = AgentConfiguration {
        datacenter: agent.datacenter.clone(),
        domain: DOMAIN.to_string(),
        data_dir: paths::DATA_DIR.to_string(),
        log_level: agent.log_level.clone(),
        node_name: node_name(&raw.node),
        server,
        bootstrap_expect: server.then(|| agent.servers.lan.len()),
        retry_join: agent.servers.lan.clone(),
        bind_addr: raw.node.external_ip.clone(),
        ports: Ports { dns: DNS_PORT },
        rejoin_after_leave: true,
        disable_remote_exec: true,
        disable_update_check: true,
        protocol: agent.protocol_version,
        verify_outgoing: tls.then_some(true),
        verify_incoming: tls.then_some(true),
        verify_server_hostname: tls.then_some(true),
        ca_file: tls.then(paths::ca_file),
        cert_file: tls.then(|| paths::cert_file(server)),
        key_file: tls.then(|| paths::key_file(server)),
        encrypt: policy
            .encryption_keys
            .first()
            .map(|passphrase| derive_gossip_key(passphrase)),
    };

    tracing::debug!(
        node_name = %config.node_name,
        server,
        tls,
        encrypted = config.encrypt.is_some(),
        retry_join = config.retry_join.len(),
        "Generated agent configuration"
    );

    config
}

/// Consul node name: job name with underscores hyphenated, then the index
///
/// Node names must be valid DNS labels, so no underscores.
pub fn node_name(node: &NodeConfig) -> String {
    format!("{}-{}", node.name.replace('_', "-"), node.index)
}
