//! Nucleon placement for the atom view.
//!
//! Packing is a visual heuristic only: it keeps spheres from overlapping and
//! stays deterministic for a given nucleon count, nothing more.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geometry::{add, centroid, distance_sq, fibonacci_direction, length_sq, scale, sub, Point3, ORIGIN};

/// Radius of a rendered proton or neutron.
pub const PARTICLE_RADIUS: f32 = 0.5;
/// Center-to-center distance of touching nucleons.
pub const BOND_DISTANCE: f32 = PARTICLE_RADIUS * 2.0;
/// Grid pitch of the structured arrangement.
pub const STRUCTURED_SPACING: f32 = PARTICLE_RADIUS * 2.5;
/// Radius of the sphere the separated arrangement spreads nucleons over.
pub const SEPARATION_RADIUS: f32 = NUCLEUS_SEPARATION_FACTOR * 2.0;
const NUCLEUS_SEPARATION_FACTOR: f32 = 2.0;

/// Candidate directions tried around each placed nucleon.
const PACKING_DIRECTIONS: usize = 12;
/// Candidates closer than this fraction of a bond to any placed nucleon are rejected.
const OVERLAP_TOLERANCE: f32 = 0.99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NucleusArrangement {
    #[default]
    Default,
    Separated,
    Structured,
    Expanded,
}

impl NucleusArrangement {
    pub fn as_str(self) -> &'static str {
        match self {
            NucleusArrangement::Default => "default",
            NucleusArrangement::Separated => "separated",
            NucleusArrangement::Structured => "structured",
            NucleusArrangement::Expanded => "expanded",
        }
    }

    /// Selecting the active mode switches back to `Default`.
    pub fn toggled(self, requested: NucleusArrangement) -> NucleusArrangement {
        if self == requested {
            NucleusArrangement::Default
        } else {
            requested
        }
    }
}

impl fmt::Display for NucleusArrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NucleusArrangement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" | "packed" => Ok(NucleusArrangement::Default),
            "separated" => Ok(NucleusArrangement::Separated),
            "structured" => Ok(NucleusArrangement::Structured),
            "expanded" => Ok(NucleusArrangement::Expanded),
            _ => Err(Error::UnknownVariant {
                kind: "nucleus arrangement",
                value: s.to_string(),
            }),
        }
    }
}

/// Positions for `count` nucleons under the given arrangement.
/// `expansion_factor` only matters for [`NucleusArrangement::Expanded`].
pub fn arrange_nucleons(
    count: usize,
    arrangement: NucleusArrangement,
    expansion_factor: f32,
) -> Vec<Point3> {
    if count == 0 {
        return Vec::new();
    }
    match arrangement {
        NucleusArrangement::Structured => structured_positions(count),
        NucleusArrangement::Separated => separated_positions(count),
        NucleusArrangement::Default => packed_positions(count),
        NucleusArrangement::Expanded => packed_positions(count)
            .into_iter()
            .map(|p| scale(p, expansion_factor))
            .collect(),
    }
}

/// Fill the first `count` cells of a `side³` cubic grid centered on the
/// origin, x varying fastest, then y, then z.
pub fn structured_positions(count: usize) -> Vec<Point3> {
    let side = grid_side(count);
    let offset = -((side - 1) as f32) * STRUCTURED_SPACING / 2.0;
    let mut positions = Vec::with_capacity(count);
    'fill: for z in 0..side {
        for y in 0..side {
            for x in 0..side {
                if positions.len() == count {
                    break 'fill;
                }
                positions.push([
                    offset + x as f32 * STRUCTURED_SPACING,
                    offset + y as f32 * STRUCTURED_SPACING,
                    offset + z as f32 * STRUCTURED_SPACING,
                ]);
            }
        }
    }
    positions
}

/// Smallest `side` with `side³ >= count`.
pub fn grid_side(count: usize) -> usize {
    let mut side = (count as f64).cbrt().ceil() as usize;
    // Guard against cbrt rounding just above an exact cube
    while side > 1 && (side - 1).pow(3) >= count {
        side -= 1;
    }
    while side.pow(3) < count {
        side += 1;
    }
    side.max(1)
}

/// Spread nucleons over a sphere with a spherical-spiral distribution.
pub fn separated_positions(count: usize) -> Vec<Point3> {
    let n = count as f32;
    let winding = (n * PI).sqrt();
    (0..count)
        .map(|i| {
            let phi = (-1.0 + 2.0 * i as f32 / n).clamp(-1.0, 1.0).acos();
            let theta = winding * phi;
            [
                SEPARATION_RADIUS * theta.cos() * phi.sin(),
                SEPARATION_RADIUS * theta.sin() * phi.sin(),
                SEPARATION_RADIUS * phi.cos(),
            ]
        })
        .collect()
}

/// Greedy nearest-candidate sphere packing, recentered on the centroid.
///
/// Each new nucleon tries 12 Fibonacci-sphere directions around every
/// placed nucleon, drops candidates overlapping anything already placed,
/// and keeps the one nearest the origin (first found wins a tie). If all
/// candidates overlap it lands on the +x axis at `i × BOND_DISTANCE`.
pub fn packed_positions(count: usize) -> Vec<Point3> {
    if count == 1 {
        return vec![ORIGIN];
    }

    let min_gap_sq = (BOND_DISTANCE * OVERLAP_TOLERANCE).powi(2);
    let directions: Vec<Point3> = (0..PACKING_DIRECTIONS)
        .map(|k| scale(fibonacci_direction(k, PACKING_DIRECTIONS), BOND_DISTANCE))
        .collect();

    let mut placed: Vec<Point3> = Vec::with_capacity(count);
    placed.push(ORIGIN);
    for i in 1..count {
        let mut best: Option<Point3> = None;
        let mut best_dist = f32::INFINITY;
        for anchor in &placed {
            for dir in &directions {
                let candidate = add(*anchor, *dir);
                if placed.iter().any(|p| distance_sq(candidate, *p) < min_gap_sq) {
                    continue;
                }
                let dist = length_sq(candidate);
                if dist < best_dist {
                    best_dist = dist;
                    best = Some(candidate);
                }
            }
        }
        placed.push(best.unwrap_or([i as f32 * BOND_DISTANCE, 0.0, 0.0]));
    }

    let center = centroid(&placed);
    placed.into_iter().map(|p| sub(p, center)).collect()
}
