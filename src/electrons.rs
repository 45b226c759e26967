//! Electron shell assignment and orbital motion for the atom view.

use std::f32::consts::PI;

use rand::Rng;
use serde::Serialize;

use crate::geometry::{rotate_euler_xyz, Point3};

/// Cumulative shell capacities: electron `i` sits in the first shell whose
/// threshold exceeds `i`. The last shell is unbounded.
pub const SHELL_THRESHOLDS: [usize; 7] = [2, 10, 28, 60, 92, 110, usize::MAX];

/// Orbit radius of the innermost shell.
pub const BASE_ORBIT_RADIUS: f32 = 5.0;
/// Radial gap between consecutive shells.
pub const SHELL_SPACING: f32 = 2.5;
/// Angular speed of the innermost shell, in radians per frame.
pub const BASE_ANGULAR_SPEED: f32 = 0.01;

/// Orbit orientation for the flat view: the orbit plane is the xz plane.
pub const EQUATORIAL_ORIENTATION: [f32; 3] = [PI / 2.0, 0.0, 0.0];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Electron {
    pub shell: usize,
    pub orbit_radius: f32,
    /// Current phase along the orbit, radians.
    pub angle: f32,
    /// Phase advance per frame, radians.
    pub speed: f32,
    /// Euler XYZ angles of the orbit plane.
    pub orientation: [f32; 3],
}

pub fn shell_index(index: usize) -> usize {
    SHELL_THRESHOLDS
        .iter()
        .position(|&capacity| index < capacity)
        .unwrap_or(SHELL_THRESHOLDS.len() - 1)
}

/// Create the electron at `index` (0-based across the whole atom).
pub fn create_electron<R: Rng>(index: usize, is_3d: bool, rng: &mut R) -> Electron {
    let shell = shell_index(index);
    let angle = rng.gen::<f32>() * 2.0 * PI;
    let orientation = if is_3d {
        [
            rng.gen::<f32>() * PI,
            rng.gen::<f32>() * PI,
            rng.gen::<f32>() * PI,
        ]
    } else {
        EQUATORIAL_ORIENTATION
    };
    Electron {
        shell,
        orbit_radius: BASE_ORBIT_RADIUS + shell as f32 * SHELL_SPACING,
        angle,
        speed: BASE_ANGULAR_SPEED / (shell as f32 + 1.0),
        orientation,
    }
}

impl Electron {
    /// Advance one frame along the orbit.
    pub fn advance(&mut self) {
        self.angle = (self.angle + self.speed) % (2.0 * PI);
    }

    pub fn position(&self) -> Point3 {
        let local = [
            self.orbit_radius * self.angle.cos(),
            self.orbit_radius * self.angle.sin(),
            0.0,
        ];
        rotate_euler_xyz(local, self.orientation)
    }
}

/// Electron population per shell, innermost first, trailing empty shells dropped.
pub fn shell_occupancy(electron_count: usize) -> Vec<usize> {
    let mut counts = vec![0usize; SHELL_THRESHOLDS.len()];
    for i in 0..electron_count {
        counts[shell_index(i)] += 1;
    }
    while counts.last() == Some(&0) {
        counts.pop();
    }
    counts
}
