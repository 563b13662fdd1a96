use noise::{NoiseFn, Perlin};

// Height field: a broad rolling band plus a finer detail band, lifted
// above zero so the surface sits in the lower quarter of the chunk.
const BROAD_SCALE: f64 = 0.015;
const BROAD_AMPLITUDE: f64 = 4.0;
const DETAIL_SCALE: f64 = 0.04;
const DETAIL_AMPLITUDE: f64 = 2.0;
const BASE_HEIGHT: f64 = 10.0;

// Tree scatter: columns on a 7-aligned grid pass through two noise gates.
const TREE_GRID: i32 = 7;
const TREE_SCALE: f64 = 0.3;
const TREE_OFFSET: f64 = 100.0;
const TREE_THRESHOLD: f64 = 0.2;
const SPACING_SCALE: f64 = 0.1;
const TRUNK_SCALE: f64 = 10.0;

// Perlin is identically zero on the integer lattice; every sample is
// nudged off it so integer-scaled inputs (the trunk band) still vary.
const LATTICE_OFFSET: f64 = 0.317;

/// Deterministic 2D noise behind terrain height and tree placement. Built
/// once from the world seed; the same coordinates always yield the same
/// terrain and tree layout.
pub struct NoiseField {
    perlin: Perlin,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }

    /// Raw sample in roughly [-1, 1].
    pub fn sample(&self, x: f64, z: f64) -> f64 {
        self.perlin.get([x + LATTICE_OFFSET, z + LATTICE_OFFSET])
    }

    /// Terrain surface height of a world column.
    pub fn surface_height(&self, x: i32, z: i32) -> i32 {
        let (xf, zf) = (x as f64, z as f64);
        let broad = self.sample(xf * BROAD_SCALE, zf * BROAD_SCALE) * BROAD_AMPLITUDE;
        let detail = self.sample(xf * DETAIL_SCALE, zf * DETAIL_SCALE) * DETAIL_AMPLITUDE;
        (broad + detail + BASE_HEIGHT).floor() as i32
    }

    /// Whether a tree may root in this column. The grid filter uses
    /// flooring modulo, so the 7-grid continues uniformly through negative
    /// coordinates; the two noise gates thin it into a sparse scatter.
    pub fn tree_at(&self, x: i32, z: i32) -> bool {
        if x.rem_euclid(TREE_GRID) != 0 || z.rem_euclid(TREE_GRID) != 0 {
            return false;
        }
        let scatter = self.sample(
            (x as f64 + TREE_OFFSET) * TREE_SCALE,
            (z as f64 + TREE_OFFSET) * TREE_SCALE,
        );
        let spacing = self.sample(x as f64 * SPACING_SCALE, z as f64 * SPACING_SCALE);
        scatter > TREE_THRESHOLD && spacing > 0.0
    }

    /// Trunk height for a tree rooted at this column, 3..=7 blocks.
    pub fn trunk_height(&self, x: i32, z: i32) -> i32 {
        let n = self.sample(x as f64 * TRUNK_SCALE, z as f64 * TRUNK_SCALE);
        4 + (n * 2.0 + 1.0).floor() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_range() {
        let field = NoiseField::new(42);
        for i in -50..50 {
            let v = field.sample(i as f64 * 0.37, i as f64 * -0.91);
            assert!((-1.0..=1.0).contains(&v), "sample {v} out of range");
        }
    }

    #[test]
    fn sampling_is_deterministic() {
        let a = NoiseField::new(7);
        let b = NoiseField::new(7);
        for i in 0..20 {
            let (x, z) = (i as f64 * 1.3, i as f64 * -2.7);
            assert_eq!(a.sample(x, z), b.sample(x, z));
        }
    }

    #[test]
    fn trees_only_on_the_seven_grid() {
        let field = NoiseField::new(0);
        for x in -30i32..30 {
            for z in -30i32..30 {
                if x.rem_euclid(7) != 0 || z.rem_euclid(7) != 0 {
                    assert!(!field.tree_at(x, z));
                }
            }
        }
    }

    #[test]
    fn negative_grid_columns_are_eligible() {
        // The flooring convention keeps -7, -14, ... on the grid; at least
        // one such column should pass the noise gates for this seed.
        let field = NoiseField::new(12345);
        let found = (-140..0)
            .step_by(7)
            .any(|x| (-140..0).step_by(7).any(|z| field.tree_at(x, z)));
        assert!(found, "no tree on the negative grid for this seed");
    }

    #[test]
    fn trunk_heights_are_bounded() {
        let field = NoiseField::new(3);
        for x in (-70..70).step_by(7) {
            for z in (-70..70).step_by(7) {
                let h = field.trunk_height(x, z);
                assert!((3..=7).contains(&h), "trunk height {h} out of range");
            }
        }
    }
}
