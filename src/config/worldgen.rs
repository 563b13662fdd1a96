use serde::{Deserialize, Serialize};

/// World generation settings. Everything the generator produces is a pure
/// function of this seed and the world coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    pub seed: u32,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self { seed: 12345 }
    }
}
