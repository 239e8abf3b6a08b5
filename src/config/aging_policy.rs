// ==========================================
// Excipient Warehouse DSS - Aging Policy
// ==========================================
// Responsibility: bucket thresholds for lot aging
// Hard rule: thresholds are configuration, never constants inside
// the classifier, so policy can vary by excipient class without
// code change
// ==========================================

use crate::config::ConfigError;
use crate::domain::types::{AgingBucket, StockType};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ==========================================
// AgingThresholds - bucket boundaries for one stock class
// ==========================================
// Boundaries are exclusive lower bounds in whole days:
//   days > critical_days  => Critical
//   days > warning_days   => Warning
//   days > attention_days => Attention
//   otherwise             => Normal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingThresholds {
    pub attention_days: i64, // above this: Attention
    pub warning_days: i64,   // above this: Warning
    pub critical_days: i64,  // above this: Critical (expired for release)
}

impl AgingThresholds {
    /// Bucket for a given days-in-area value
    pub fn bucket_for(&self, days_in_area: i64) -> AgingBucket {
        if days_in_area > self.critical_days {
            AgingBucket::Critical
        } else if days_in_area > self.warning_days {
            AgingBucket::Warning
        } else if days_in_area > self.attention_days {
            AgingBucket::Attention
        } else {
            AgingBucket::Normal
        }
    }

    /// Check the boundaries are non-negative and strictly increasing
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attention_days < 0 {
            return Err(ConfigError::InvalidThresholds(format!(
                "attention_days must be >= 0, got {}",
                self.attention_days
            )));
        }
        if self.attention_days >= self.warning_days || self.warning_days >= self.critical_days {
            return Err(ConfigError::InvalidThresholds(format!(
                "thresholds must be strictly increasing: attention={} warning={} critical={}",
                self.attention_days, self.warning_days, self.critical_days
            )));
        }
        Ok(())
    }
}

// ==========================================
// AgingPolicy - thresholds per stock class
// ==========================================
// Adjustment stock tolerates roughly twice the holding time of
// regular stock before the same severity applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingPolicy {
    pub regular: AgingThresholds,    // ordinary intake stock
    pub adjustment: AgingThresholds, // correction / adjustment stock
}

impl Default for AgingPolicy {
    /// Product default: regular stock is expired past 20 days in area
    fn default() -> Self {
        Self {
            regular: AgingThresholds {
                attention_days: 7,
                warning_days: 14,
                critical_days: 20,
            },
            adjustment: AgingThresholds {
                attention_days: 14,
                warning_days: 28,
                critical_days: 40,
            },
        }
    }
}

impl AgingPolicy {
    /// Threshold set for a stock class
    pub fn thresholds_for(&self, stock_type: StockType) -> &AgingThresholds {
        match stock_type {
            StockType::Regular => &self.regular,
            StockType::Adjustment => &self.adjustment,
        }
    }

    /// Bucket for a pallet of the given class and days-in-area
    pub fn bucket_for(&self, stock_type: StockType, days_in_area: i64) -> AgingBucket {
        self.thresholds_for(stock_type).bucket_for(days_in_area)
    }

    /// Check both threshold sets
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.regular.validate()?;
        self.adjustment.validate()
    }

    /// Load a policy from a JSON file and validate it
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let policy: AgingPolicy = serde_json::from_str(&raw)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Write the policy to a JSON file (pretty-printed)
    pub fn to_json_file(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }
}
