use glam::DVec2;
use rand::Rng;
use rayon::prelude::*;

use crate::utils::{streams, RngManager, STATION_Y};

const VEGETATION_COUNT: usize = 400;
const VEGETATION_SPREAD: f64 = 20_000.0;
const DIRT_COUNT: usize = 100;
const DIRT_SPREAD: f64 = 15_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Tree,
    Bush,
    Dirt,
}

/// Ground clutter drawn under the homing lesson.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainFeature {
    pub kind: FeatureKind,
    pub position: DVec2,
    /// Radius for vegetation, patch length for dirt (world units).
    pub size: f64,
    /// Patch rotation (radians).
    pub rotation: f64,
}

/// Scatters trees, bushes and dirt patches around the station.
pub fn generate_terrain(rng: &RngManager) -> Vec<TerrainFeature> {
    let mut rng = rng.get_rng(streams::TERRAIN);
    let mut features = Vec::with_capacity(VEGETATION_COUNT + DIRT_COUNT);

    for _ in 0..VEGETATION_COUNT {
        let x = (rng.gen::<f64>() - 0.5) * VEGETATION_SPREAD;
        let y = (rng.gen::<f64>() - 0.5) * VEGETATION_SPREAD + STATION_Y;
        let kind = if rng.gen::<f64>() > 0.3 {
            FeatureKind::Tree
        } else {
            FeatureKind::Bush
        };
        features.push(TerrainFeature {
            kind,
            position: DVec2::new(x, y),
            size: 15.0 + rng.gen::<f64>() * 20.0,
            rotation: 0.0,
        });
    }

    for _ in 0..DIRT_COUNT {
        let x = (rng.gen::<f64>() - 0.5) * DIRT_SPREAD;
        let y = (rng.gen::<f64>() - 0.5) * DIRT_SPREAD + STATION_Y;
        features.push(TerrainFeature {
            kind: FeatureKind::Dirt,
            position: DVec2::new(x, y),
            size: 100.0 + rng.gen::<f64>() * 300.0,
            rotation: rng.gen::<f64>() * std::f64::consts::PI,
        });
    }

    features
}

/// Features inside the square window of half-size `range` around `center`.
pub fn visible_features(
    features: &[TerrainFeature],
    center: DVec2,
    range: f64,
) -> Vec<TerrainFeature> {
    features
        .par_iter()
        .filter(|feature| {
            let offset = feature.position - center;
            offset.x.abs() < range && offset.y.abs() < range
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_sizes() {
        let features = generate_terrain(&RngManager::new(42));
        assert_eq!(features.len(), 500);

        let dirt: Vec<_> = features
            .iter()
            .filter(|f| f.kind == FeatureKind::Dirt)
            .collect();
        assert_eq!(dirt.len(), 100);
        assert!(dirt.iter().all(|f| (100.0..400.0).contains(&f.size)));
        assert!(features
            .iter()
            .filter(|f| f.kind != FeatureKind::Dirt)
            .all(|f| (15.0..35.0).contains(&f.size)));
    }

    #[test]
    fn test_deterministic_for_seed() {
        assert_eq!(
            generate_terrain(&RngManager::new(9)),
            generate_terrain(&RngManager::new(9))
        );
    }

    #[test]
    fn test_culling_window() {
        let features = vec![
            TerrainFeature {
                kind: FeatureKind::Tree,
                position: DVec2::new(10.0, 10.0),
                size: 20.0,
                rotation: 0.0,
            },
            TerrainFeature {
                kind: FeatureKind::Bush,
                position: DVec2::new(1500.0, 0.0),
                size: 20.0,
                rotation: 0.0,
            },
        ];
        let visible = visible_features(&features, DVec2::ZERO, 1000.0);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].kind, FeatureKind::Tree);
    }
}
