//! Environment variable credential lookup.
//!
//! The curator's API key comes from the process environment. Names are
//! checked in order and the first non-empty value wins.

use secrecy::SecretString;

/// A credential resolved from the environment.
pub struct ResolvedCredential {
    /// The variable the value was read from.
    pub source: String,
    pub secret: SecretString,
}

/// Looks up a credential across a list of environment variable names.
pub struct EnvCredentialSource {
    names: Vec<String>,
}

impl EnvCredentialSource {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Resolve the first set, non-empty variable.
    ///
    /// Values that are empty, whitespace-only or not valid Unicode count as
    /// missing.
    pub fn resolve(&self) -> Option<ResolvedCredential> {
        self.names.iter().find_map(|name| match std::env::var(name) {
            Ok(value) if !value.trim().is_empty() => Some(ResolvedCredential {
                source: name.clone(),
                secret: SecretString::from(value.trim().to_string()),
            }),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_resolve_first_set_variable() {
        // SAFETY: test-only, unique variable names avoid races with other tests.
        unsafe {
            std::env::set_var("EIGHTSPACE_TEST_PRIMARY_KEY", "primary-secret");
            std::env::set_var("EIGHTSPACE_TEST_SECONDARY_KEY", "secondary-secret");
        }

        let source = EnvCredentialSource::new([
            "EIGHTSPACE_TEST_PRIMARY_KEY",
            "EIGHTSPACE_TEST_SECONDARY_KEY",
        ]);
        let credential = source.resolve().unwrap();
        assert_eq!(credential.source, "EIGHTSPACE_TEST_PRIMARY_KEY");
        assert_eq!(credential.secret.expose_secret(), "primary-secret");

        unsafe {
            std::env::remove_var("EIGHTSPACE_TEST_PRIMARY_KEY");
            std::env::remove_var("EIGHTSPACE_TEST_SECONDARY_KEY");
        }
    }

    #[test]
    fn test_resolve_skips_empty_value() {
        // SAFETY: test-only, unique variable names avoid races with other tests.
        unsafe {
            std::env::set_var("EIGHTSPACE_TEST_EMPTY_KEY", "   ");
            std::env::set_var("EIGHTSPACE_TEST_FALLBACK_KEY", "fallback-secret");
        }

        let source =
            EnvCredentialSource::new(["EIGHTSPACE_TEST_EMPTY_KEY", "EIGHTSPACE_TEST_FALLBACK_KEY"]);
        let credential = source.resolve().unwrap();
        assert_eq!(credential.source, "EIGHTSPACE_TEST_FALLBACK_KEY");

        unsafe {
            std::env::remove_var("EIGHTSPACE_TEST_EMPTY_KEY");
            std::env::remove_var("EIGHTSPACE_TEST_FALLBACK_KEY");
        }
    }

    #[test]
    fn test_resolve_missing() {
        let source = EnvCredentialSource::new(["EIGHTSPACE_TEST_NEVER_SET_KEY_42"]);
        assert!(source.resolve().is_none());
        assert!(EnvCredentialSource::new(Vec::<String>::new()).resolve().is_none());
    }
}
