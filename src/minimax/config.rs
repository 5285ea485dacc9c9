//! Minimax search configuration.

use serde::{Deserialize, Serialize};

use crate::core::{Result, UnoError};

/// Deepest budget accepted; trees grow roughly tenfold per ply-turn.
pub const MAX_DEPTH: u32 = 8;

/// Minimax search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Ply-turn budget for tree expansion (0 = evaluate the root only).
    pub depth: u32,

    /// Use alpha-beta pruning. Without it every node is searched; the
    /// chosen value and move are the same either way.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            pruning: true,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.depth > MAX_DEPTH {
            return Err(UnoError::InvalidConfiguration("search depth above 8 ply-turns"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 3);
        assert!(config.pruning);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default().with_depth(0).with_pruning(false);

        assert_eq!(config.depth, 0);
        assert!(!config.pruning);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_depth() {
        assert!(SearchConfig::default().with_depth(MAX_DEPTH).validate().is_ok());
        assert!(SearchConfig::default().with_depth(MAX_DEPTH + 1).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_depth(2);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
