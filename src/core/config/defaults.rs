use std::fmt;
use std::str::FromStr;

use crate::core::config::data::Config;
use crate::core::constants::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_SYSTEM_INSTRUCTION};

/// Keys accepted by `dsa-sage set` / `dsa-sage unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Model,
    BaseUrl,
    SystemInstruction,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [
        ConfigKey::Model,
        ConfigKey::BaseUrl,
        ConfigKey::SystemInstruction,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::Model => "model",
            ConfigKey::BaseUrl => "base-url",
            ConfigKey::SystemInstruction => "system-instruction",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = ConfigKey::ALL.iter().map(|k| k.as_str()).collect();
                format!("Unknown config key: {s} (expected one of: {})", known.join(", "))
            })
    }
}

impl Config {
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn system_instruction(&self) -> &str {
        self.system_instruction
            .as_deref()
            .unwrap_or(DEFAULT_SYSTEM_INSTRUCTION)
    }

    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        match key {
            ConfigKey::Model => self.model.as_deref(),
            ConfigKey::BaseUrl => self.base_url.as_deref(),
            ConfigKey::SystemInstruction => self.system_instruction.as_deref(),
        }
    }

    /// Blank values are rejected rather than stored.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return Err(format!("A value is required for {key}"));
        }
        let value = Some(value.to_string());
        match key {
            ConfigKey::Model => self.model = value,
            ConfigKey::BaseUrl => self.base_url = value,
            ConfigKey::SystemInstruction => self.system_instruction = value,
        }
        Ok(())
    }

    pub fn unset(&mut self, key: ConfigKey) {
        match key {
            ConfigKey::Model => self.model = None,
            ConfigKey::BaseUrl => self.base_url = None,
            ConfigKey::SystemInstruction => self.system_instruction = None,
        }
    }
}
