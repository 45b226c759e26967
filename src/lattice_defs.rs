//! Static crystal-lattice reference data: unit-cell sites, coordination
//! shells, layer sites and per-cell atom contributions for the four
//! supported structures.
//!
//! Cubic coordinates are fractions of the lattice constant `a`. Hexagonal
//! close-packed coordinates are expressed in units of the atomic spacing and
//! get scaled by `a / 2` instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geometry::Point3;

/// Edge length of the cubic unit cell, in scene units.
pub const LATTICE_CONSTANT: f32 = 4.0;
/// Ideal c/a ratio of the hexagonal close-packed cell.
pub const HCP_C_RATIO: f32 = 1.633;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatticeType {
    #[serde(rename = "sc")]
    SimpleCubic,
    #[serde(rename = "bcc")]
    BodyCentered,
    #[serde(rename = "fcc")]
    FaceCentered,
    #[serde(rename = "hcp")]
    HexagonalClosePacked,
}

impl LatticeType {
    pub const ALL: [LatticeType; 4] = [
        LatticeType::SimpleCubic,
        LatticeType::BodyCentered,
        LatticeType::FaceCentered,
        LatticeType::HexagonalClosePacked,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LatticeType::SimpleCubic => "sc",
            LatticeType::BodyCentered => "bcc",
            LatticeType::FaceCentered => "fcc",
            LatticeType::HexagonalClosePacked => "hcp",
        }
    }

    pub fn is_cubic(self) -> bool {
        self != LatticeType::HexagonalClosePacked
    }

    /// Factor turning this type's tabulated coordinates into scene units.
    pub fn coordinate_scale(self) -> f32 {
        if self.is_cubic() {
            LATTICE_CONSTANT
        } else {
            LATTICE_CONSTANT / 2.0
        }
    }

    /// The interior point shown in single-atom mode, in tabulated units.
    pub fn single_site(self) -> Point3 {
        if self.is_cubic() {
            [0.5, 0.5, 0.5]
        } else {
            [0.0, 0.0, 0.8165]
        }
    }

    pub fn definition(self) -> &'static LatticeDefinition {
        match self {
            LatticeType::SimpleCubic => &SIMPLE_CUBIC,
            LatticeType::BodyCentered => &BODY_CENTERED_CUBIC,
            LatticeType::FaceCentered => &FACE_CENTERED_CUBIC,
            LatticeType::HexagonalClosePacked => &HEXAGONAL_CLOSE_PACKED,
        }
    }
}

impl fmt::Display for LatticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LatticeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sc" | "simple-cubic" => Ok(LatticeType::SimpleCubic),
            "bcc" | "body-centered" => Ok(LatticeType::BodyCentered),
            "fcc" | "face-centered" => Ok(LatticeType::FaceCentered),
            "hcp" | "hexagonal-close-packed" => Ok(LatticeType::HexagonalClosePacked),
            _ => Err(Error::UnknownVariant {
                kind: "lattice type",
                value: s.to_string(),
            }),
        }
    }
}

/// A center atom plus the offsets of its nearest neighbours.
#[derive(Debug)]
pub struct CoordinationShell {
    pub center: Point3,
    pub neighbors: &'static [Point3],
}

/// How many atoms a single unit cell owns once sharing is accounted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Contribution {
    /// Corner atoms count 1/8, face atoms 1/2, body atoms 1.
    Itemized {
        corners: u32,
        faces: u32,
        body: u32,
        total: u32,
    },
    /// Hexagonal sharing is not broken down per site.
    TotalOnly { total: u32 },
}

impl Contribution {
    pub fn total(&self) -> u32 {
        match *self {
            Contribution::Itemized { total, .. } | Contribution::TotalOnly { total } => total,
        }
    }

    /// Info-panel lines, e.g. `Corners: 8 × 1/8 = 1`.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        match *self {
            Contribution::Itemized {
                corners,
                faces,
                body,
                total,
            } => {
                out.push(format!("Corners: {} × 1/8 = {}", corners, corners as f32 / 8.0));
                if faces > 0 {
                    out.push(format!("Faces: {} × 1/2 = {}", faces, faces as f32 / 2.0));
                }
                if body > 0 {
                    out.push(format!("Body: {} × 1 = {}", body, body));
                }
                out.push(format!("Total: {} atoms/cell", total));
            }
            Contribution::TotalOnly { total } => {
                out.push("Hexagonal sharing is not itemized".to_string());
                out.push(format!("Total: {} atoms/cell", total));
            }
        }
        out
    }
}

#[derive(Debug)]
pub struct LatticeDefinition {
    pub name: &'static str,
    pub coordination_number: u32,
    pub packing_factor: f32,
    pub relation: &'static str,
    pub unit_cell: &'static [Point3],
    pub coordination: CoordinationShell,
    pub layer: &'static [Point3],
    pub contribution: Contribution,
}

const CUBE_CORNERS: [Point3; 8] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0],
];

pub static SIMPLE_CUBIC: LatticeDefinition = LatticeDefinition {
    name: "Simple Cubic",
    coordination_number: 6,
    packing_factor: 0.52,
    relation: "a = 2R",
    unit_cell: &CUBE_CORNERS,
    coordination: CoordinationShell {
        center: [0.0, 0.0, 0.0],
        neighbors: &[
            [1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, -1.0],
        ],
    },
    layer: &[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, 1.0, 0.0],
    ],
    contribution: Contribution::Itemized {
        corners: 8,
        faces: 0,
        body: 0,
        total: 1,
    },
};

pub static BODY_CENTERED_CUBIC: LatticeDefinition = LatticeDefinition {
    name: "Body-Centered Cubic",
    coordination_number: 8,
    packing_factor: 0.68,
    relation: "a = 4R / √3",
    unit_cell: &[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0],
        [0.5, 0.5, 0.5],
    ],
    coordination: CoordinationShell {
        center: [0.5, 0.5, 0.5],
        neighbors: &CUBE_CORNERS,
    },
    layer: &[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.5, 0.5, 1.0],
    ],
    contribution: Contribution::Itemized {
        corners: 8,
        faces: 0,
        body: 1,
        total: 2,
    },
};

pub static FACE_CENTERED_CUBIC: LatticeDefinition = LatticeDefinition {
    name: "Face-Centered Cubic",
    coordination_number: 12,
    packing_factor: 0.74,
    relation: "a = 2R√2",
    unit_cell: &[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0],
        [0.5, 0.5, 0.0],
        [0.5, 0.5, 1.0],
        [0.0, 0.5, 0.5],
        [1.0, 0.5, 0.5],
        [0.5, 0.0, 0.5],
        [0.5, 1.0, 0.5],
    ],
    coordination: CoordinationShell {
        center: [0.5, 0.5, 0.5],
        neighbors: &[
            [1.0, 1.0, 0.5],
            [1.0, 0.0, 0.5],
            [0.0, 1.0, 0.5],
            [0.0, 0.0, 0.5],
            [0.5, 1.0, 1.0],
            [0.5, 0.0, 1.0],
            [0.5, 1.0, 0.0],
            [0.5, 0.0, 0.0],
            [1.0, 0.5, 1.0],
            [0.0, 0.5, 1.0],
            [1.0, 0.5, 0.0],
            [0.0, 0.5, 0.0],
        ],
    },
    layer: &[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.5, 0.5, 0.0],
    ],
    contribution: Contribution::Itemized {
        corners: 8,
        faces: 6,
        body: 0,
        total: 4,
    },
};

pub static HEXAGONAL_CLOSE_PACKED: LatticeDefinition = LatticeDefinition {
    name: "Hexagonal Close-Packed",
    coordination_number: 12,
    packing_factor: 0.74,
    relation: "a = 2R, c = 1.633a",
    unit_cell: &[
        // Bottom basal plane
        [1.0, 0.0, 0.0],
        [0.5, 0.866, 0.0],
        [-0.5, 0.866, 0.0],
        [-1.0, 0.0, 0.0],
        [-0.5, -0.866, 0.0],
        [0.5, -0.866, 0.0],
        [0.0, 0.0, 0.0],
        // Middle triangle
        [0.5, 0.289, 0.8165],
        [-0.5, 0.289, 0.8165],
        [0.0, -0.577, 0.8165],
        // Top basal plane
        [1.0, 0.0, 1.633],
        [0.5, 0.866, 1.633],
        [-0.5, 0.866, 1.633],
        [-1.0, 0.0, 1.633],
        [-0.5, -0.866, 1.633],
        [0.5, -0.866, 1.633],
        [0.0, 0.0, 1.633],
    ],
    coordination: CoordinationShell {
        center: [0.0, 0.0, 0.0],
        neighbors: &[
            [1.0, 0.0, 0.0],
            [0.5, 0.866, 0.0],
            [-0.5, 0.866, 0.0],
            [-1.0, 0.0, 0.0],
            [-0.5, -0.866, 0.0],
            [0.5, -0.866, 0.0],
            [0.5, 0.289, 0.8165],
            [-0.5, 0.289, 0.8165],
            [0.0, -0.577, 0.8165],
            [0.5, 0.289, -0.8165],
            [-0.5, 0.289, -0.8165],
            [0.0, -0.577, -0.8165],
        ],
    },
    layer: &[
        [1.0, 0.0, 0.0],
        [0.5, 0.866, 0.0],
        [-0.5, 0.866, 0.0],
        [-1.0, 0.0, 0.0],
        [-0.5, -0.866, 0.0],
        [0.5, -0.866, 0.0],
        [0.0, 0.0, 0.0],
    ],
    contribution: Contribution::TotalOnly { total: 2 },
};
