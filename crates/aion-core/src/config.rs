//! Site configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "particles": { "full_count": 90 }, "seed": 7 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::counter;
use crate::donation::DonationGoal;
use crate::error::{SiteError, SiteResult};
use crate::particles::ParticleConfig;
use crate::status;

/// Fundraising figures for the donations page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationConfig {
    pub target: u64,
    pub raised: u64,
    pub currency: String,
    /// Text encoded in the donation QR code
    pub qr_payload: String,
}

impl Default for DonationConfig {
    fn default() -> Self {
        Self {
            target: 1_700_000_000,
            raised: 850_000_000,
            currency: "IDR".to_string(),
            qr_payload: "AION-LABS-FUND".to_string(),
        }
    }
}

impl DonationConfig {
    pub fn goal(&self) -> DonationGoal {
        DonationGoal::new(self.target, self.raised)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub particles: ParticleConfig,
    pub donation: DonationConfig,
    /// Increments for stat counters to reach their target
    pub counter_steps: u32,
    pub counter_interval_ms: u64,
    pub status_interval_ms: u64,
    pub carousel_interval_ms: u64,
    /// Frame loop period for the particle background
    pub frame_interval_ms: u64,
    /// Fixed RNG seed for particles and the status feed
    pub seed: Option<u64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            particles: ParticleConfig::default(),
            donation: DonationConfig::default(),
            counter_steps: counter::DEFAULT_STEPS,
            counter_interval_ms: counter::DEFAULT_INTERVAL_MS,
            status_interval_ms: status::DEFAULT_INTERVAL_MS,
            carousel_interval_ms: 6_000,
            frame_interval_ms: 16,
            seed: None,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> SiteResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> SiteResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> SiteResult<()> {
        self.particles.validate().map_err(SiteError::InvalidConfig)?;

        if self.counter_steps == 0 {
            return Err(SiteError::InvalidConfig(
                "counter_steps must be positive".to_string(),
            ));
        }
        let intervals = [
            ("counter_interval_ms", self.counter_interval_ms),
            ("status_interval_ms", self.status_interval_ms),
            ("carousel_interval_ms", self.carousel_interval_ms),
            ("frame_interval_ms", self.frame_interval_ms),
        ];
        for (name, value) in intervals {
            if value == 0 {
                return Err(SiteError::InvalidConfig(format!("{} must be positive", name)));
            }
        }
        if self.donation.currency.trim().is_empty() {
            return Err(SiteError::InvalidConfig("donation.currency is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config =
            SiteConfig::from_json_str(r#"{ "particles": { "full_count": 90 }, "seed": 7 }"#)
                .unwrap();
        assert_eq!(config.particles.full_count, 90);
        assert_eq!(config.particles.compact_count, 50);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.donation.goal().percent_label(), "50.00%");
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = SiteConfig::from_json_str(r#"{ "frame_interval_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(_)));
    }

    #[test]
    fn oversized_batch_is_rejected() {
        let err =
            SiteConfig::from_json_str(r#"{ "particles": { "full_count": 400 } }"#).unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteConfig::from_json_str("{ nope").unwrap_err();
        assert!(matches!(err, SiteError::Json(_)));
    }
}
