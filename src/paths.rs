//! Fixed locations of the consul_agent job on a deployed VM
//!
//! The agent's data and TLS material live at well-known paths laid down by
//! the job packaging. They are not operator-configurable.

/// Directory the agent persists its state in
pub const DATA_DIR: &str = "/var/vcap/store/consul_agent";

/// Directory holding the job's TLS material
pub const CERTS_DIR: &str = "/var/vcap/jobs/consul_agent/config/certs";

/// Certificate authority bundle used to verify peers
pub fn ca_file() -> String {
    format!("{}/ca.crt", CERTS_DIR)
}

/// Private key for this node's role
///
/// Servers present `server.key`, every other node presents `agent.key`.
pub fn key_file(server: bool) -> String {
    format!("{}/{}.key", CERTS_DIR, role_stem(server))
}

/// Certificate for this node's role
pub fn cert_file(server: bool) -> String {
    format!("{}/{}.crt", CERTS_DIR, role_stem(server))
}

fn role_stem(server: bool) -> &'static str {
    if server {
        "server"
    } else {
        "agent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ca_file() {
        assert_eq!(ca_file(), "/var/vcap/jobs/consul_agent/config/certs/ca.crt");
    }

    #[test]
    fn test_role_specific_files() {
        assert_eq!(key_file(true), "/var/vcap/jobs/consul_agent/config/certs/server.key");
        assert_eq!(cert_file(true), "/var/vcap/jobs/consul_agent/config/certs/server.crt");
        assert_eq!(key_file(false), "/var/vcap/jobs/consul_agent/config/certs/agent.key");
        assert_eq!(cert_file(false), "/var/vcap/jobs/consul_agent/config/certs/agent.crt");
    }
}
