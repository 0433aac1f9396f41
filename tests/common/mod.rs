//! Common test utilities and helpers.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// Creates a temporary file holding `content`.
///
/// The file is removed when the returned handle is dropped.
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file
}

/// Common test data and constants
pub mod test_data {
    /// Git-like subcommands
    pub const GIT_COMMANDS: [&str; 6] = ["commit", "checkout", "status", "stash", "branch", "push"];

    pub const PROFILE_COMMANDS: [&str; 5] = ["perfil", "profiel", "profile", "profil", "account"];
}
