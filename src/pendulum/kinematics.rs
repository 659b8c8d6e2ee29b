//! Forward kinematics: angles to Cartesian bob positions

use nalgebra::{Point2, Vector2};

use crate::utils::constants::NUM_LINKS;

/// Cartesian positions of the three bobs, in arm-length units
///
/// The pivot sits at the origin and `y` grows downward, so a chain hanging
/// at rest has every bob on the positive `y` axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BobPositions {
    bobs: [Point2<f64>; NUM_LINKS],
}

impl BobPositions {
    /// Project link angles onto the plane
    ///
    /// Links compose in order: link 1 from the pivot, link 2 from bob 1,
    /// link 3 from bob 2.
    pub fn project(theta: &[f64; NUM_LINKS], lengths: &[f64; NUM_LINKS]) -> Self {
        let mut bobs = [Point2::origin(); NUM_LINKS];
        let mut joint = Point2::origin();
        for i in 0..NUM_LINKS {
            let (s, c) = theta[i].sin_cos();
            joint += Vector2::new(lengths[i] * s, lengths[i] * c);
            bobs[i] = joint;
        }
        Self { bobs }
    }

    /// Position of bob `index` (0-based, 0 nearest the pivot)
    pub fn bob(&self, index: usize) -> Point2<f64> {
        self.bobs[index]
    }

    /// All bobs in link order
    pub fn bobs(&self) -> &[Point2<f64>; NUM_LINKS] {
        &self.bobs
    }

    /// The tip of the chain (bob 3), the only bob the sampler reads
    pub fn tip(&self) -> Point2<f64> {
        self.bobs[NUM_LINKS - 1]
    }
}
