//! Credential resolution
//!
//! Usernames and passwords are looked up through a chain of
//! [`CredentialSource`]s. The CLI uses environment first, then an
//! interactive prompt; tests use [`StaticCredentials`].

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use crate::error::{Error, Result};

/// A named credential: where it lives in the environment and how to ask for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CredentialKey {
    pub env: &'static str,
    pub prompt: &'static str,
    /// Secrets are prompted without echo
    pub secret: bool,
}

pub const API_USER: CredentialKey = CredentialKey {
    env: "PEP_USER",
    prompt: "Username for registration.pep-dortmund.org: ",
    secret: false,
};

pub const API_PASSWORD: CredentialKey = CredentialKey {
    env: "PEP_PASSWORD",
    prompt: "Password: ",
    secret: true,
};

pub const MAIL_USER: CredentialKey = CredentialKey {
    env: "PEP_MAIL_USER",
    prompt: "Mail Username: ",
    secret: false,
};

pub const MAIL_PASSWORD: CredentialKey = CredentialKey {
    env: "PEP_MAIL_PASSWORD",
    prompt: "Mail Password: ",
    secret: true,
};

/// Somewhere a credential may be found
pub trait CredentialSource {
    /// `Ok(None)` means this source does not know the value.
    fn lookup(&self, key: &CredentialKey) -> Result<Option<String>>;

    /// Look up a credential that must be present
    fn require(&self, key: &CredentialKey) -> Result<String> {
        self.lookup(key)?
            .ok_or_else(|| Error::credential(format!("{} is not set", key.env)))
    }
}

/// Reads credentials from process environment variables
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn lookup(&self, key: &CredentialKey) -> Result<Option<String>> {
        Ok(std::env::var(key.env).ok().filter(|v| !v.is_empty()))
    }
}

/// Asks on the terminal; secrets are read without echo
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptCredentials;

impl CredentialSource for PromptCredentials {
    fn lookup(&self, key: &CredentialKey) -> Result<Option<String>> {
        let value = if key.secret {
            rpassword::prompt_password(key.prompt)?
        } else {
            let mut stderr = io::stderr();
            write!(stderr, "{}", key.prompt)?;
            stderr.flush()?;

            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line.trim_end_matches(['\r', '\n']).to_string()
        };

        Ok(Some(value).filter(|v| !v.is_empty()))
    }
}

/// Fixed values keyed by environment variable name
#[derive(Debug, Default, Clone)]
pub struct StaticCredentials {
    values: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &CredentialKey, value: impl Into<String>) -> Self {
        self.values.insert(key.env.to_string(), value.into());
        self
    }
}

impl CredentialSource for StaticCredentials {
    fn lookup(&self, key: &CredentialKey) -> Result<Option<String>> {
        Ok(self.values.get(key.env).cloned())
    }
}

/// Tries each source in order; the first hit wins
#[derive(Default)]
pub struct ChainedCredentials {
    sources: Vec<Box<dyn CredentialSource + Send + Sync>>,
}

impl ChainedCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, source: impl CredentialSource + Send + Sync + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Environment first, then the terminal
    pub fn interactive() -> Self {
        Self::new().push(EnvCredentials).push(PromptCredentials)
    }
}

impl CredentialSource for ChainedCredentials {
    fn lookup(&self, key: &CredentialKey) -> Result<Option<String>> {
        for source in &self.sources {
            if let Some(value) = source.lookup(key)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}
