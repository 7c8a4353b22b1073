//! API key storage and resolution.
//!
//! The key is looked up in the `GEMINI_API_KEY` environment variable first
//! and then in the system keyring.

use crate::core::constants::API_KEY_ENV;
use crate::core::keyring::KeyringAccessError;
use keyring::Entry;
use std::fmt;
use std::io;

mod ui;

use self::ui::{prompt_api_key, prompt_confirmation, ConfirmationChoice};

const KEYRING_SERVICE: &str = "dsa-sage";
const KEYRING_USER: &str = "gemini";

/// Where a resolved API key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Environment,
    Keyring,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Environment => write!(f, "{API_KEY_ENV}"),
            CredentialSource::Keyring => write!(f, "system keyring"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub api_key: String,
    pub source: CredentialSource,
}

#[derive(Debug)]
pub enum CredentialError {
    Missing,
    Keyring(KeyringAccessError),
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::Missing => write!(
                f,
                "❌ No Gemini API key found.\n\n\
                 Either store one in the system keyring:\n  dsa-sage auth\n\n\
                 or export it for this shell:\n  export {API_KEY_ENV}=\"your-api-key-here\""
            ),
            CredentialError::Keyring(err) if err.is_recoverable() => write!(
                f,
                "❌ The system keyring is unavailable right now: {err}\n\
                 Unlock it and retry, or set {API_KEY_ENV} for this shell."
            ),
            CredentialError::Keyring(err) => write!(f, "❌ Could not read the system keyring: {err}"),
        }
    }
}

impl std::error::Error for CredentialError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CredentialError::Keyring(err) => Some(err),
            CredentialError::Missing => None,
        }
    }
}

pub struct AuthManager {
    use_keyring: bool,
}

impl AuthManager {
    pub fn new() -> Self {
        Self::new_with_keyring(true)
    }

    /// Construct an AuthManager, optionally disabling keyring access (useful for tests)
    pub fn new_with_keyring(use_keyring: bool) -> Self {
        Self { use_keyring }
    }

    fn entry(&self) -> Result<Entry, KeyringAccessError> {
        Ok(Entry::new(KEYRING_SERVICE, KEYRING_USER)?)
    }

    pub fn store_key(&self, api_key: &str) -> Result<(), KeyringAccessError> {
        self.entry()?.set_password(api_key)?;
        Ok(())
    }

    pub fn get_key(&self) -> Result<Option<String>, KeyringAccessError> {
        if !self.use_keyring {
            return Ok(None);
        }
        match self.entry()?.get_password() {
            Ok(key) => Ok(Some(key)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Returns false when there was nothing to remove.
    pub fn remove_key(&self) -> Result<bool, KeyringAccessError> {
        match self.entry()?.delete_credential() {
            Ok(()) => Ok(true),
            Err(keyring::Error::NoEntry) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    pub fn resolve(&self) -> Result<Credential, CredentialError> {
        let env_key = std::env::var(API_KEY_ENV).ok();
        resolve_credential(env_key, || self.get_key())
    }

    pub fn interactive_auth(&self) -> Result<(), Box<dyn std::error::Error>> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();
        let api_key = prompt_api_key(&mut input, &mut out)?;
        self.store_key(&api_key)?;
        println!("✅ API key stored in the system keyring");
        Ok(())
    }

    pub fn interactive_deauth(&self) -> Result<(), Box<dyn std::error::Error>> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();
        let choice = prompt_confirmation(
            &mut input,
            &mut out,
            "Remove the stored Gemini API key from the system keyring?",
        )?;
        if choice == ConfirmationChoice::No {
            println!("Cancelled.");
            return Ok(());
        }
        if self.remove_key()? {
            println!("✅ API key removed");
        } else {
            println!("No stored API key found");
        }
        Ok(())
    }
}

impl Default for AuthManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment first, then the keyring lookup. Blank values count as absent.
fn resolve_credential<F>(env_key: Option<String>, keyring_lookup: F) -> Result<Credential, CredentialError>
where
    F: FnOnce() -> Result<Option<String>, KeyringAccessError>,
{
    if let Some(key) = env_key.filter(|key| !key.trim().is_empty()) {
        return Ok(Credential {
            api_key: key.trim().to_string(),
            source: CredentialSource::Environment,
        });
    }

    match keyring_lookup().map_err(CredentialError::Keyring)? {
        Some(key) if !key.trim().is_empty() => Ok(Credential {
            api_key: key.trim().to_string(),
            source: CredentialSource::Keyring,
        }),
        _ => Err(CredentialError::Missing),
    }
}
