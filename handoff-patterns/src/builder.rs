use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub host: String,
    pub port: u16,
    pub timeout_secs: u32,
    pub use_tls: bool,
}

/// Collects connection settings step by step. Host is mandatory and taken up
/// front; the rest start from working defaults.
pub struct ConnectionBuilder {
    host: String,
    port: u16,
    timeout_secs: u32,
    use_tls: bool,
}

impl ConnectionBuilder {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 8080,
            timeout_secs: 30,
            use_tls: false,
        }
    }

    pub fn set_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn set_timeout(mut self, timeout_secs: u32) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn enable_tls(mut self) -> Self {
        self.use_tls = true;
        self
    }

    pub fn build(self) -> Result<Connection, MissingHostError> {
        if self.host.is_empty() {
            return Err(MissingHostError);
        }
        Ok(Connection {
            host: self.host,
            port: self.port,
            timeout_secs: self.timeout_secs,
            use_tls: self.use_tls,
        })
    }
}

#[derive(Debug)]
pub struct MissingHostError;

impl Display for MissingHostError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[MissingHostError] A connection needs a host.")
    }
}

impl std::error::Error for MissingHostError {}

#[cfg(test)]
mod test {
    use crate::builder::{Connection, ConnectionBuilder};

    #[test]
    fn test_full_build() {
        let connection = ConnectionBuilder::new("api.service.com")
            .set_port(443)
            .set_timeout(60)
            .enable_tls()
            .build()
            .unwrap();
        assert_eq!(
            connection,
            Connection {
                host: "api.service.com".to_string(),
                port: 443,
                timeout_secs: 60,
                use_tls: true,
            }
        );
    }

    #[test]
    fn test_defaults_build() {
        let connection = ConnectionBuilder::new("localhost").build().unwrap();
        assert_eq!(connection.port, 8080);
        assert_eq!(connection.timeout_secs, 30);
        assert!(!connection.use_tls);
    }

    #[test]
    fn test_empty_host_is_rejected() {
        let result = ConnectionBuilder::new("").set_port(443).build();
        assert!(result.is_err());
    }
}
