//! EnvClient implementation
//!
//! Reads the process environment through `std::env`.
//! Values that are not valid Unicode are converted lossily.

use crate::ports::required::EnvClient;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    pub fn new() -> Self {
        Self
    }
}

impl EnvClient for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        let value = std::env::var_os(key)?;
        Some(
            value
                .into_string()
                .unwrap_or_else(|raw| raw.to_string_lossy().into_owned()),
        )
    }
}
