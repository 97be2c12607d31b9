use crate::host::HostVersionSource;
use std::env;

/// Environment variable holding the Bukkit API version string
pub const BUKKIT_VERSION_VAR: &str = "BUKKIT_VERSION";

/// Environment variable holding the full server version string
pub const SERVER_VERSION_VAR: &str = "SERVER_VERSION";

/// Host source reading the version strings from the process environment.
///
/// Empty variables count as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvHostVersion;

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl HostVersionSource for EnvHostVersion {
    fn bukkit_version(&self) -> Option<String> {
        non_empty_var(BUKKIT_VERSION_VAR)
    }

    fn server_version(&self) -> Option<String> {
        non_empty_var(SERVER_VERSION_VAR)
    }
}
