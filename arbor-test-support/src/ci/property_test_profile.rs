//! Property-test run profile parsing for CI and local overrides.
//!
//! Every property suite in the workspace sizes its proptest configuration
//! through [`ProptestRunProfile`], so one pair of environment variables
//! tunes them all.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const ARBOR_PBT_FORK_ENV_KEY: &str = "ARBOR_PBT_FORK";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Load a profile from environment variables with provided defaults.
    ///
    /// Unparseable overrides are logged at `warn` and replaced by the
    /// default.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: Override::read(PROGTEST_CASES_ENV_KEY, parse_cases).or(default_cases),
            fork: Override::read(ARBOR_PBT_FORK_ENV_KEY, parse_bool).or(default_fork),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

/// Outcome of reading one environment override.
enum Override<T> {
    Absent,
    Valid(T),
    Invalid,
}

impl<T> Override<T> {
    fn read(key: &'static str, parser: impl Fn(&str) -> Result<T, String>) -> Self {
        let Ok(raw) = env::var(key) else {
            return Self::Absent;
        };
        match parser(&raw) {
            Ok(value) => Self::Valid(value),
            Err(reason) => {
                tracing::warn!(
                    env = key,
                    raw = %raw,
                    reason = %reason,
                    "invalid property-test profile override; using default",
                );
                Self::Invalid
            }
        }
    }

    fn or(self, default: T) -> T {
        match self {
            Self::Valid(value) => value,
            Self::Absent | Self::Invalid => default,
        }
    }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
