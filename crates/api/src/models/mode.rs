use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Build mode handed to the bundler.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    #[default]
    Production,
}

impl Mode {
    /// Environment variable consulted when no mode is configured.
    pub const ENV_VAR: &'static str = "NODE_ENV";

    /// Only the exact value `development` selects development mode;
    /// anything else, including an unset variable, means production.
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some("development") => Mode::Development,
            _ => Mode::Production,
        }
    }

    pub fn from_env() -> Self {
        Self::from_node_env(std::env::var(Self::ENV_VAR).ok().as_deref())
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Mode::Development)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            other => Err(format!(
                "unknown mode '{}', expected 'development' or 'production'",
                other
            )),
        }
    }
}
