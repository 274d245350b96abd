//! Tenant namespace configuration.

use serde::{Deserialize, Serialize};

/// Deployment tenancy mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenancyMode {
    /// Every call names its merchant explicitly.
    Multi,
    /// Private single-merchant deployment with a fixed merchant id.
    Standalone,
}

/// Tenancy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenancyConfig {
    /// Deployment mode.
    #[serde(default = "default_mode")]
    pub mode: TenancyMode,
    /// Merchant id used for every call in standalone mode.
    #[serde(default)]
    pub standalone_merchant_id: String,
}

impl Default for TenancyConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            standalone_merchant_id: String::new(),
        }
    }
}

impl TenancyConfig {
    /// Resolve the merchant id for a call.
    ///
    /// Standalone deployments ignore the requested merchant and always use
    /// the configured one.
    pub fn resolve<'a>(&'a self, requested: Option<&'a str>) -> Option<&'a str> {
        match self.mode {
            TenancyMode::Standalone => Some(self.standalone_merchant_id.as_str()),
            TenancyMode::Multi => requested,
        }
    }
}

fn default_mode() -> TenancyMode {
    TenancyMode::Multi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standalone_overrides_requested_merchant() {
        let config = TenancyConfig {
            mode: TenancyMode::Standalone,
            standalone_merchant_id: "local".to_string(),
        };
        assert_eq!(config.resolve(Some("m1")), Some("local"));
        assert_eq!(config.resolve(None), Some("local"));
    }

    #[test]
    fn test_multi_passes_through() {
        let config = TenancyConfig::default();
        assert_eq!(config.resolve(Some("m1")), Some("m1"));
        assert_eq!(config.resolve(None), None);
    }
}
