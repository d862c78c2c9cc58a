use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ServiceError, ServiceResult};

/// Contact number shown on the public lookup when none is configured.
pub const DEFAULT_SUPPORT_CONTACT: &str = "+91-628-199-4649";

/// How scheduled inactivations reach the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepMode {
    /// Every listing writes changed records back to the repository.
    #[default]
    Eager,
    /// Records are only overridden on read; storage is left as submitted.
    Lazy,
}

impl FromStr for SweepMode {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eager" => Ok(SweepMode::Eager),
            "lazy" => Ok(SweepMode::Lazy),
            other => Err(ServiceError::Config(format!(
                "SWEEP_MODE must be `eager` or `lazy`, got `{other}`"
            ))),
        }
    }
}

/// Registry configuration loaded from environment variables.
///
/// All fields have defaults suitable for local use.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Whether listings persist auto-inactivations (default: eager).
    pub sweep_mode: SweepMode,
    /// Contact number quoted in public lookup messages.
    pub support_contact: String,
    /// Optional JSON file of student drafts loaded at startup.
    pub seed_path: Option<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            sweep_mode: SweepMode::default(),
            support_contact: DEFAULT_SUPPORT_CONTACT.to_string(),
            seed_path: None,
        }
    }
}

impl RegistryConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var           | Default            |
    /// |-------------------|--------------------|
    /// | `SWEEP_MODE`      | `eager`            |
    /// | `SUPPORT_CONTACT` | `+91-628-199-4649` |
    /// | `SEED_PATH`       | unset              |
    pub fn from_env() -> ServiceResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RegistryConfig::from_env`] but reads through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ServiceResult<Self> {
        let sweep_mode = match lookup("SWEEP_MODE") {
            Some(raw) => raw.parse::<SweepMode>()?,
            None => SweepMode::default(),
        };

        let support_contact = lookup("SUPPORT_CONTACT")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SUPPORT_CONTACT.to_string());

        let seed_path = lookup("SEED_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            sweep_mode,
            support_contact,
            seed_path,
        })
    }
}
