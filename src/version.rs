//! Build metadata.

use serde::Serialize;

/// Version details logged at startup.
///
/// `revision`, `build_date` and `rustc` come from the `GIT_REVISION`,
/// `BUILD_DATE` and `RUSTC_VERSION` variables at compile time when the build
/// sets them.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub revision: &'static str,
    pub build_date: &'static str,
    pub rustc: &'static str,
    pub platform: Platform,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Platform {
    pub os: &'static str,
    pub arch: &'static str,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

const UNKNOWN: &str = "unknown";

/// Metadata of the running binary.
pub const BUILD_INFO: BuildInfo = BuildInfo {
    version: env!("CARGO_PKG_VERSION"),
    revision: match option_env!("GIT_REVISION") {
        Some(v) => v,
        None => UNKNOWN,
    },
    build_date: match option_env!("BUILD_DATE") {
        Some(v) => v,
        None => UNKNOWN,
    },
    rustc: match option_env!("RUSTC_VERSION") {
        Some(v) => v,
        None => UNKNOWN,
    },
    platform: Platform {
        os: std::env::consts::OS,
        arch: std::env::consts::ARCH,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info() {
        assert_eq!(BUILD_INFO.version, env!("CARGO_PKG_VERSION"));
        let platform = BUILD_INFO.platform.to_string();
        assert!(platform.contains('/'));
        assert!(platform.starts_with(std::env::consts::OS));
    }
}
