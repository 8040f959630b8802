//! Version and build information.
//!
//! Values stamped by build.rs are optional; a build outside a git checkout
//! simply omits the commit.

use std::fmt;

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: Option<&'static str>,
    pub build_date: Option<&'static str>,
    pub target: &'static str,
    pub rustc_version: Option<&'static str>,
    /// Substances in the built-in reference table
    pub known_substances: usize,
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "msds-check {}", self.version)?;

        if let Some(commit) = self.commit {
            writeln!(f, "Commit: {}", commit)?;
        }
        if let Some(date) = self.build_date {
            writeln!(f, "Built: {}", date)?;
        }

        writeln!(f, "Target: {}", self.target)?;
        if let Some(rustc) = self.rustc_version {
            writeln!(f, "Rustc: {}", rustc)?;
        }

        write!(f, "Reference data: {} substances", self.known_substances)
    }
}

/// Get build information
pub fn get_build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("MSDS_CHECK_GIT_HASH"),
        build_date: option_env!("MSDS_CHECK_BUILD_DATE"),
        target: env!("TARGET"),
        rustc_version: option_env!("MSDS_CHECK_RUSTC_VERSION"),
        known_substances: crate::data::substances::KNOWN_SUBSTANCES.len(),
    }
}
