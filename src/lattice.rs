//! Crystal-lattice layout engine.
//!
//! Turns a `(LatticeType, LatticeDisplayMode)` pair into a concrete set of
//! atom placements, coordination bonds and cell outlines, and handles the
//! expansion slider by scaling atoms away from a pivot point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geometry::{scale, scale_about, Point3};
use crate::lattice_defs::{LatticeType, HCP_C_RATIO, LATTICE_CONSTANT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatticeDisplayMode {
    #[serde(rename = "unit-cell")]
    UnitCell,
    #[serde(rename = "layer")]
    Layer,
    #[serde(rename = "coordination")]
    Coordination,
    #[serde(rename = "single")]
    SingleAtom,
    #[serde(rename = "contribution")]
    Contribution,
    #[serde(rename = "8-cells")]
    EightCell,
    #[serde(rename = "27-cells")]
    TwentySevenCell,
}

impl LatticeDisplayMode {
    pub const ALL: [LatticeDisplayMode; 7] = [
        LatticeDisplayMode::UnitCell,
        LatticeDisplayMode::Layer,
        LatticeDisplayMode::Coordination,
        LatticeDisplayMode::SingleAtom,
        LatticeDisplayMode::Contribution,
        LatticeDisplayMode::EightCell,
        LatticeDisplayMode::TwentySevenCell,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LatticeDisplayMode::UnitCell => "unit-cell",
            LatticeDisplayMode::Layer => "layer",
            LatticeDisplayMode::Coordination => "coordination",
            LatticeDisplayMode::SingleAtom => "single",
            LatticeDisplayMode::Contribution => "contribution",
            LatticeDisplayMode::EightCell => "8-cells",
            LatticeDisplayMode::TwentySevenCell => "27-cells",
        }
    }

    /// Cells per axis for the tiling modes.
    pub fn grid_size(self) -> Option<u32> {
        match self {
            LatticeDisplayMode::EightCell => Some(2),
            LatticeDisplayMode::TwentySevenCell => Some(3),
            _ => None,
        }
    }

    pub fn is_multi_cell(self) -> bool {
        self.grid_size().is_some()
    }
}

impl fmt::Display for LatticeDisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LatticeDisplayMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        LatticeDisplayMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == lowered)
            .ok_or_else(|| Error::UnknownVariant {
                kind: "lattice display mode",
                value: s.to_string(),
            })
    }
}

/// Hexagonal cells do not tile by cubic translation, so tiling modes fall
/// back to simple cubic.
pub fn resolve_lattice_type(lattice_type: LatticeType, mode: LatticeDisplayMode) -> LatticeType {
    if mode.is_multi_cell() && lattice_type == LatticeType::HexagonalClosePacked {
        LatticeType::SimpleCubic
    } else {
        lattice_type
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LatticeAtom {
    pub position: Point3,
    /// Unexpanded position, captured the first time expansion is applied.
    #[serde(skip)]
    pub original: Option<Point3>,
    pub is_center: bool,
    pub radius: f32,
    /// Drawn with the unit-cell clipping planes enabled.
    pub clipped: bool,
}

/// A line from the coordination center to one neighbour. Endpoints follow
/// the atoms at `center` and `neighbor` (indices into `LatticeScene::atoms`).
#[derive(Debug, Clone, Serialize)]
pub struct CoordinationBond {
    pub center: usize,
    pub neighbor: usize,
    pub endpoints: [Point3; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct CellOutline {
    pub segments: Vec<[Point3; 2]>,
    pub translucent: bool,
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LatticeInfo {
    pub name: &'static str,
    pub coordination_number: u32,
    pub packing_factor: f32,
    pub relation: &'static str,
    pub contribution: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct LatticeScene {
    pub lattice_type: LatticeType,
    pub display_mode: LatticeDisplayMode,
    pub atoms: Vec<LatticeAtom>,
    pub bonds: Vec<CoordinationBond>,
    pub outlines: Vec<CellOutline>,
}

impl LatticeScene {
    /// Build the scene from scratch. `lattice_type` is resolved through
    /// [`resolve_lattice_type`] first.
    pub fn build(
        lattice_type: LatticeType,
        display_mode: LatticeDisplayMode,
        outline_visible: bool,
    ) -> Self {
        let lattice_type = resolve_lattice_type(lattice_type, display_mode);
        let mut scene = LatticeScene {
            lattice_type,
            display_mode,
            atoms: Vec::new(),
            bonds: Vec::new(),
            outlines: cell_outlines(lattice_type, display_mode, outline_visible),
        };

        let definition = lattice_type.definition();
        let unit = lattice_type.coordinate_scale();
        match display_mode {
            LatticeDisplayMode::UnitCell | LatticeDisplayMode::Contribution => {
                for &site in definition.unit_cell {
                    scene.push_atom(scale(site, unit), false);
                }
            }
            LatticeDisplayMode::Layer => {
                for &site in definition.layer {
                    scene.push_atom(scale(site, unit), false);
                }
            }
            LatticeDisplayMode::SingleAtom => {
                let site = lattice_type.single_site();
                scene.push_atom(scale(site, unit), false);
            }
            LatticeDisplayMode::Coordination => scene.draw_coordination(),
            LatticeDisplayMode::EightCell | LatticeDisplayMode::TwentySevenCell => {
                if let Some(grid) = display_mode.grid_size() {
                    scene.tile_cells(grid);
                }
            }
        }
        scene
    }

    fn atom_radius(&self) -> f32 {
        if self.display_mode == LatticeDisplayMode::Contribution {
            1.01
        } else if self.lattice_type.is_cubic() {
            1.0
        } else {
            0.5
        }
    }

    fn push_atom(&mut self, position: Point3, is_center: bool) -> usize {
        let clipped = self.display_mode == LatticeDisplayMode::Contribution
            && self.lattice_type.is_cubic();
        self.atoms.push(LatticeAtom {
            position,
            original: None,
            is_center,
            radius: self.atom_radius(),
            clipped,
        });
        self.atoms.len() - 1
    }

    /// Inserts unless an atom already sits at exactly `position`.
    fn push_unique(&mut self, position: Point3) -> bool {
        if self.atoms.iter().any(|atom| atom.position == position) {
            return false;
        }
        self.push_atom(position, false);
        true
    }

    fn tile_cells(&mut self, grid: u32) {
        let definition = self.lattice_type.definition();
        for i in 0..grid {
            for j in 0..grid {
                for k in 0..grid {
                    for site in definition.unit_cell {
                        let position = [
                            (site[0] + i as f32) * LATTICE_CONSTANT,
                            (site[1] + j as f32) * LATTICE_CONSTANT,
                            (site[2] + k as f32) * LATTICE_CONSTANT,
                        ];
                        self.push_unique(position);
                    }
                }
            }
        }
    }

    fn draw_coordination(&mut self) {
        let shell = &self.lattice_type.definition().coordination;
        let unit = self.lattice_type.coordinate_scale();
        let center_pos = scale(shell.center, unit);
        let center = self.push_atom(center_pos, true);
        for &offset in shell.neighbors {
            let neighbor_pos = scale(offset, unit);
            let neighbor = self.push_atom(neighbor_pos, false);
            self.bonds.push(CoordinationBond {
                center,
                neighbor,
                endpoints: [center_pos, neighbor_pos],
            });
        }
    }

    /// Point the expansion slider scales atoms away from.
    pub fn pivot(&self) -> Point3 {
        if let Some(grid) = self.display_mode.grid_size() {
            let c = grid as f32 / 2.0 * LATTICE_CONSTANT;
            return [c, c, c];
        }
        if !self.lattice_type.is_cubic() && self.display_mode != LatticeDisplayMode::Coordination {
            return [0.0, 0.0, hcp_cell_height() / 2.0];
        }
        self.atoms
            .iter()
            .find(|atom| atom.is_center)
            .map(|atom| atom.position)
            .unwrap_or([LATTICE_CONSTANT / 2.0; 3])
    }

    /// Reposition every non-center atom at `pivot + (original - pivot) * factor`
    /// and drag the coordination bonds along.
    pub fn apply_expansion(&mut self, factor: f32) {
        let pivot = self.pivot();
        for atom in &mut self.atoms {
            let original = *atom.original.get_or_insert(atom.position);
            if !atom.is_center {
                atom.position = scale_about(pivot, original, factor);
            }
        }
        self.refresh_bonds();
    }

    fn refresh_bonds(&mut self) {
        for bond in &mut self.bonds {
            bond.endpoints = [
                self.atoms[bond.center].position,
                self.atoms[bond.neighbor].position,
            ];
        }
    }

    /// Where the camera should look for this scene.
    pub fn focus(&self) -> Point3 {
        if let Some(grid) = self.display_mode.grid_size() {
            let c = grid as f32 / 2.0 * LATTICE_CONSTANT;
            [c, c, c]
        } else if !self.lattice_type.is_cubic() {
            [0.0, 0.0, LATTICE_CONSTANT * HCP_C_RATIO / 2.0]
        } else {
            [LATTICE_CONSTANT / 2.0; 3]
        }
    }

    pub fn info(&self) -> LatticeInfo {
        let definition = self.lattice_type.definition();
        LatticeInfo {
            name: definition.name,
            coordination_number: definition.coordination_number,
            packing_factor: definition.packing_factor,
            relation: definition.relation,
            contribution: (self.display_mode == LatticeDisplayMode::Contribution)
                .then(|| definition.contribution.lines()),
        }
    }

    pub fn set_outline_visible(&mut self, visible: bool) {
        if self.display_mode.is_multi_cell() {
            return;
        }
        let contribution = self.display_mode == LatticeDisplayMode::Contribution;
        for outline in &mut self.outlines {
            outline.visible = visible || contribution;
        }
    }
}

fn hcp_cell_height() -> f32 {
    LATTICE_CONSTANT / 2.0 * HCP_C_RATIO
}

fn cell_outlines(
    lattice_type: LatticeType,
    display_mode: LatticeDisplayMode,
    outline_visible: bool,
) -> Vec<CellOutline> {
    if let Some(grid) = display_mode.grid_size() {
        let mut outlines = Vec::with_capacity((grid * grid * grid) as usize);
        for i in 0..grid {
            for j in 0..grid {
                for k in 0..grid {
                    let origin = [
                        i as f32 * LATTICE_CONSTANT,
                        j as f32 * LATTICE_CONSTANT,
                        k as f32 * LATTICE_CONSTANT,
                    ];
                    outlines.push(CellOutline {
                        segments: cube_edges(origin, LATTICE_CONSTANT),
                        translucent: true,
                        visible: true,
                    });
                }
            }
        }
        return outlines;
    }

    let segments = if lattice_type.is_cubic() {
        cube_edges([0.0; 3], LATTICE_CONSTANT)
    } else {
        hexagonal_prism_edges(LATTICE_CONSTANT / 2.0, hcp_cell_height())
    };
    vec![CellOutline {
        segments,
        translucent: false,
        visible: outline_visible || display_mode == LatticeDisplayMode::Contribution,
    }]
}

/// The 12 edges of an axis-aligned cube.
fn cube_edges(origin: Point3, size: f32) -> Vec<[Point3; 2]> {
    let corner = |dx: f32, dy: f32, dz: f32| {
        [origin[0] + dx * size, origin[1] + dy * size, origin[2] + dz * size]
    };
    let mut edges = Vec::with_capacity(12);
    for &(a, b) in &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
        edges.push([corner(0.0, a, b), corner(1.0, a, b)]);
        edges.push([corner(a, 0.0, b), corner(a, 1.0, b)]);
        edges.push([corner(a, b, 0.0), corner(a, b, 1.0)]);
    }
    edges
}

/// Bottom hexagon, top hexagon and the six verticals joining them.
fn hexagonal_prism_edges(radius: f32, height: f32) -> Vec<[Point3; 2]> {
    let vertex = |i: usize, z: f32| {
        let angle = i as f32 / 3.0 * std::f32::consts::PI;
        [radius * angle.cos(), radius * angle.sin(), z]
    };
    let mut edges = Vec::with_capacity(18);
    for i in 0..6 {
        edges.push([vertex(i, 0.0), vertex((i + 1) % 6, 0.0)]);
    }
    for i in 0..6 {
        edges.push([vertex(i, height), vertex((i + 1) % 6, height)]);
    }
    for i in 0..6 {
        edges.push([vertex(i, 0.0), vertex(i, height)]);
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::distance;

    fn assert_no_duplicates(atoms: &[LatticeAtom]) {
        for a in 0..atoms.len() {
            for b in (a + 1)..atoms.len() {
                assert_ne!(atoms[a].position, atoms[b].position, "duplicate at {a}/{b}");
            }
        }
    }

    #[test]
    fn test_unit_cell_site_counts() {
        let expected = [
            (LatticeType::SimpleCubic, 8),
            (LatticeType::BodyCentered, 9),
            (LatticeType::FaceCentered, 14),
            (LatticeType::HexagonalClosePacked, 17),
        ];
        for (lattice_type, count) in expected {
            let scene = LatticeScene::build(lattice_type, LatticeDisplayMode::UnitCell, true);
            assert_eq!(scene.atoms.len(), count);
            assert!(scene.bonds.is_empty());
        }
    }

    #[test]
    fn test_unit_cell_scaled_by_lattice_constant() {
        let scene = LatticeScene::build(LatticeType::BodyCentered, LatticeDisplayMode::UnitCell, true);
        assert_eq!(scene.atoms[6].position, [4.0, 4.0, 4.0]);
        assert_eq!(scene.atoms[8].position, [2.0, 2.0, 2.0]);

        // Hexagonal coordinates use half the lattice constant
        let hcp = LatticeScene::build(LatticeType::HexagonalClosePacked, LatticeDisplayMode::UnitCell, true);
        assert_eq!(hcp.atoms[0].position, [2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_tiling_deduplicates_shared_sites() {
        for lattice_type in [LatticeType::SimpleCubic, LatticeType::BodyCentered, LatticeType::FaceCentered] {
            let sites = lattice_type.definition().unit_cell.len();
            for (mode, grid) in [(LatticeDisplayMode::EightCell, 2), (LatticeDisplayMode::TwentySevenCell, 3)] {
                let scene = LatticeScene::build(lattice_type, mode, true);
                assert!(scene.atoms.len() <= grid * grid * grid * sites);
                assert_no_duplicates(&scene.atoms);
            }
        }

        // Simple cubic 2x2x2 tiling has 3^3 distinct corner sites
        let sc = LatticeScene::build(LatticeType::SimpleCubic, LatticeDisplayMode::EightCell, true);
        assert_eq!(sc.atoms.len(), 27);
        let sc27 = LatticeScene::build(LatticeType::SimpleCubic, LatticeDisplayMode::TwentySevenCell, true);
        assert_eq!(sc27.atoms.len(), 64);
        // 2x2x2 bcc: 27 corners + 8 body centers
        let bcc = LatticeScene::build(LatticeType::BodyCentered, LatticeDisplayMode::EightCell, true);
        assert_eq!(bcc.atoms.len(), 35);
    }

    #[test]
    fn test_hexagonal_tiling_falls_back_to_simple_cubic() {
        let scene = LatticeScene::build(LatticeType::HexagonalClosePacked, LatticeDisplayMode::EightCell, true);
        assert_eq!(scene.lattice_type, LatticeType::SimpleCubic);
        let reference = LatticeScene::build(LatticeType::SimpleCubic, LatticeDisplayMode::EightCell, true);
        let got: Vec<Point3> = scene.atoms.iter().map(|a| a.position).collect();
        let want: Vec<Point3> = reference.atoms.iter().map(|a| a.position).collect();
        assert_eq!(got, want);
        assert_eq!(
            resolve_lattice_type(LatticeType::HexagonalClosePacked, LatticeDisplayMode::Layer),
            LatticeType::HexagonalClosePacked
        );
    }

    #[test]
    fn test_coordination_shell() {
        let scene = LatticeScene::build(LatticeType::FaceCentered, LatticeDisplayMode::Coordination, true);
        assert_eq!(scene.atoms.len(), 13);
        assert_eq!(scene.bonds.len(), 12);
        assert!(scene.atoms[0].is_center);
        assert_eq!(scene.atoms.iter().filter(|a| a.is_center).count(), 1);
        // All fcc nearest neighbours are a/√2 from the center
        let expected = LATTICE_CONSTANT / 2.0_f32.sqrt();
        for bond in &scene.bonds {
            assert!((distance(bond.endpoints[0], bond.endpoints[1]) - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn test_single_atom_sites() {
        let cubic = LatticeScene::build(LatticeType::SimpleCubic, LatticeDisplayMode::SingleAtom, true);
        assert_eq!(cubic.atoms.len(), 1);
        assert_eq!(cubic.atoms[0].position, [2.0, 2.0, 2.0]);
        let hcp = LatticeScene::build(LatticeType::HexagonalClosePacked, LatticeDisplayMode::SingleAtom, true);
        assert_eq!(hcp.atoms[0].position, [0.0, 0.0, 0.8165 * 2.0]);
    }

    #[test]
    fn test_contribution_radius_and_clipping() {
        let scene = LatticeScene::build(LatticeType::FaceCentered, LatticeDisplayMode::Contribution, false);
        assert!(scene.atoms.iter().all(|a| a.clipped && a.radius == 1.01));
        // Outline forced on in contribution mode
        assert!(scene.outlines[0].visible);
        assert!(scene.info().contribution.is_some());

        let hcp = LatticeScene::build(LatticeType::HexagonalClosePacked, LatticeDisplayMode::Contribution, false);
        assert!(hcp.atoms.iter().all(|a| !a.clipped));

        let plain = LatticeScene::build(LatticeType::HexagonalClosePacked, LatticeDisplayMode::UnitCell, false);
        assert!(plain.atoms.iter().all(|a| a.radius == 0.5 && !a.clipped));
        assert!(!plain.outlines[0].visible);
        assert!(plain.info().contribution.is_none());
    }

    #[test]
    fn test_expansion_identity() {
        for lattice_type in LatticeType::ALL {
            for mode in LatticeDisplayMode::ALL {
                let mut scene = LatticeScene::build(lattice_type, mode, true);
                let before: Vec<Point3> = scene.atoms.iter().map(|a| a.position).collect();
                scene.apply_expansion(1.0);
                for (atom, original) in scene.atoms.iter().zip(&before) {
                    assert!(distance(atom.position, *original) < 1e-5);
                    assert_eq!(atom.original, Some(*original));
                }
            }
        }
    }

    #[test]
    fn test_expansion_round_trip_with_fixed_pivots() {
        let cases = [
            (LatticeType::BodyCentered, LatticeDisplayMode::Coordination),
            (LatticeType::HexagonalClosePacked, LatticeDisplayMode::UnitCell),
            (LatticeType::SimpleCubic, LatticeDisplayMode::UnitCell),
        ];
        for (lattice_type, mode) in cases {
            let mut scene = LatticeScene::build(lattice_type, mode, true);
            let before: Vec<Point3> = scene.atoms.iter().map(|a| a.position).collect();
            let pivot = scene.pivot();
            scene.apply_expansion(2.5);
            // The pivot does not move with the atoms
            assert_eq!(scene.pivot(), pivot);
            for (atom, original) in scene.atoms.iter().zip(&before) {
                let back = scale_about(pivot, atom.position, 1.0 / 2.5);
                assert!(distance(back, *original) < 1e-4);
            }
            // Re-applying 1.0 restores the recorded originals
            scene.apply_expansion(1.0);
            for (atom, original) in scene.atoms.iter().zip(&before) {
                assert!(distance(atom.position, *original) < 1e-5);
            }
        }
    }

    #[test]
    fn test_expansion_pivots() {
        let sc = LatticeScene::build(LatticeType::SimpleCubic, LatticeDisplayMode::UnitCell, true);
        assert_eq!(sc.pivot(), [2.0, 2.0, 2.0]);
        let tiled = LatticeScene::build(LatticeType::FaceCentered, LatticeDisplayMode::TwentySevenCell, true);
        assert_eq!(tiled.pivot(), [6.0, 6.0, 6.0]);
        let hcp = LatticeScene::build(LatticeType::HexagonalClosePacked, LatticeDisplayMode::Layer, true);
        assert_eq!(hcp.pivot(), [0.0, 0.0, 2.0 * 1.633 / 2.0]);
        let coord = LatticeScene::build(LatticeType::SimpleCubic, LatticeDisplayMode::Coordination, true);
        assert_eq!(coord.pivot(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_layer_sites() {
        let bcc = LatticeScene::build(LatticeType::BodyCentered, LatticeDisplayMode::Layer, true);
        assert_eq!(bcc.atoms.len(), 5);
        assert_eq!(bcc.atoms[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(bcc.atoms[3].position, [4.0, 4.0, 0.0]);
        assert_eq!(bcc.atoms[4].position, [2.0, 2.0, 4.0]);

        let fcc = LatticeScene::build(LatticeType::FaceCentered, LatticeDisplayMode::Layer, true);
        assert_eq!(fcc.atoms[4].position, [2.0, 2.0, 0.0]);

        // Hexagonal sites use half the cubic scale
        let hcp = LatticeScene::build(LatticeType::HexagonalClosePacked, LatticeDisplayMode::Layer, true);
        assert_eq!(hcp.atoms.len(), 7);
        assert_eq!(hcp.atoms[0].position, [2.0, 0.0, 0.0]);
        assert!(distance(hcp.atoms[1].position, [1.0, 1.732, 0.0]) < 1e-5);
        assert_eq!(hcp.atoms[6].position, [0.0, 0.0, 0.0]);
        assert!(hcp.atoms.iter().all(|a| a.position[2] == 0.0 && a.radius == 0.5));
    }

    #[test]
    fn test_bonds_follow_expanded_atoms() {
        let mut scene = LatticeScene::build(LatticeType::SimpleCubic, LatticeDisplayMode::Coordination, true);
        scene.apply_expansion(2.0);
        for bond in &scene.bonds {
            assert_eq!(bond.endpoints[0], scene.atoms[bond.center].position);
            assert_eq!(bond.endpoints[1], scene.atoms[bond.neighbor].position);
            assert!((distance(bond.endpoints[0], bond.endpoints[1]) - 2.0 * LATTICE_CONSTANT).abs() < 1e-4);
        }
        // The center atom never moves
        assert_eq!(scene.atoms[0].position, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_outlines() {
        let tiled = LatticeScene::build(LatticeType::SimpleCubic, LatticeDisplayMode::TwentySevenCell, false);
        assert_eq!(tiled.outlines.len(), 27);
        assert!(tiled.outlines.iter().all(|o| o.translucent && o.visible && o.segments.len() == 12));

        let hcp = LatticeScene::build(LatticeType::HexagonalClosePacked, LatticeDisplayMode::UnitCell, true);
        assert_eq!(hcp.outlines.len(), 1);
        assert_eq!(hcp.outlines[0].segments.len(), 18);

        let mut cell = LatticeScene::build(LatticeType::SimpleCubic, LatticeDisplayMode::UnitCell, true);
        cell.set_outline_visible(false);
        assert!(!cell.outlines[0].visible);
    }

    #[test]
    fn test_display_mode_parsing() {
        for mode in LatticeDisplayMode::ALL {
            assert_eq!(mode.as_str().parse::<LatticeDisplayMode>().ok(), Some(mode));
        }
        assert!("hexagon".parse::<LatticeDisplayMode>().is_err());
    }
}
