use serde::{Deserialize, Serialize};

use circpack::io::svg::SvgDrawOptions;
use circpack::util::{EnclosingStrategy, PlacementConfig};

/// Configuration for the TSF packer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct TSFConfig {
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Used to generate an instance when none is provided
    #[serde(default)]
    pub generator: RadiusGenerator,
    /// Place the first circle at the origin instead of searching a position for it
    #[serde(default = "default_anchor_first")]
    pub anchor_first: bool,
    #[serde(default)]
    pub placement: PlacementConfig,
    /// Method to compute the circle enclosing the final packing
    #[serde(default)]
    pub enclosing: EnclosingStrategy,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_anchor_first() -> bool {
    true
}

impl Default for TSFConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            generator: RadiusGenerator::default(),
            anchor_first: true,
            placement: PlacementConfig::default(),
            enclosing: EnclosingStrategy::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

/// Random instance with integer radii, uniformly drawn from `[min_radius, max_radius)`
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RadiusGenerator {
    pub n_circles: usize,
    pub min_radius: u32,
    pub max_radius: u32,
}

impl Default for RadiusGenerator {
    fn default() -> Self {
        Self {
            n_circles: 100,
            min_radius: 10,
            max_radius: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_is_completed_with_defaults() {
        let json = r#"{ "prng_seed": 7, "enclosing": "BoundingBox" }"#;
        let config: TSFConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.prng_seed, Some(7));
        assert_eq!(config.enclosing, EnclosingStrategy::BoundingBox);
        assert!(config.anchor_first);
        assert_eq!(config.generator, RadiusGenerator::default());
        assert_eq!(config.placement, PlacementConfig::default());
    }

    #[test]
    fn default_config_survives_serialization() {
        let config = TSFConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: TSFConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
