use crate::host::HostVersionSource;

/// Host source returning fixed strings, for tests and offline use
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticHostVersion {
    bukkit_version: Option<String>,
    server_version: Option<String>,
}

impl StaticHostVersion {
    /// A modern host exposing a Bukkit API version string
    pub fn bukkit(version: impl Into<String>) -> Self {
        StaticHostVersion {
            bukkit_version: Some(version.into()),
            server_version: None,
        }
    }

    /// A legacy host exposing only its server version string
    pub fn legacy(server_version: impl Into<String>) -> Self {
        StaticHostVersion {
            bukkit_version: None,
            server_version: Some(server_version.into()),
        }
    }

    /// Set the server version string alongside the Bukkit one
    pub fn with_server_version(mut self, server_version: impl Into<String>) -> Self {
        self.server_version = Some(server_version.into());
        self
    }
}

impl HostVersionSource for StaticHostVersion {
    fn bukkit_version(&self) -> Option<String> {
        self.bukkit_version.clone()
    }

    fn server_version(&self) -> Option<String> {
        self.server_version.clone()
    }
}
