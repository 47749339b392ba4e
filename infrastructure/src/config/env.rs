//! Process environment credential lookup

use ipsum_application::CredentialLookup;

/// [`CredentialLookup`] backed by the process environment.
///
/// The binary constructs one of these at startup and hands it to
/// [`resolve_credentials`](ipsum_application::resolve_credentials); no
/// other code reads the environment.
pub struct ProcessEnv;

impl CredentialLookup for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
