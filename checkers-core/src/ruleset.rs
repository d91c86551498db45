//! RuleSet - tunable rule switches loaded from JSON

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest number of starting rows per side that leaves the two armies apart
pub const MAX_HOME_ROWS: u8 = 3;

/// Rule switches for a game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub name: String,
    /// Reject plain moves while the side to move has a capture
    pub forced_capture: bool,
    /// Crown men that reach the far row
    pub promote_kings: bool,
    /// Rows of men each side starts with (4 men per row)
    pub home_rows: u8,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            name: "standard".to_string(),
            forced_capture: true,
            promote_kings: true,
            home_rows: MAX_HOME_ROWS,
        }
    }
}

impl RuleSet {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(1..=MAX_HOME_ROWS).contains(&self.home_rows) {
            anyhow::bail!(
                "home_rows must be between 1 and {}, got {}",
                MAX_HOME_ROWS,
                self.home_rows
            );
        }
        Ok(())
    }

    /// Load from JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let ruleset: RuleSet = serde_json::from_str(&content)?;
        ruleset.validate()?;
        Ok(ruleset)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
