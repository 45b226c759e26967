//! What the core hands to whatever draws it.
//!
//! A [`SceneSnapshot`] is a flat, serializable copy of the active view. A
//! [`Presenter`] receives one per frame and owns all rendering concerns
//! (meshes, materials, clipping planes, colours).

use log::trace;
use serde::Serialize;

use crate::atom::{AtomScene, Particle};
use crate::electrons::Electron;
use crate::elements::AtomInfo;
use crate::gate::PendingElement;
use crate::geometry::Point3;
use crate::lattice::{CellOutline, LatticeAtom, LatticeInfo, LatticeScene};
use crate::state::{AppState, SimulationMode, Theme};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectronView {
    pub shell: usize,
    pub position: Point3,
    pub orbit_radius: f32,
    pub orientation: [f32; 3],
}

impl From<&Electron> for ElectronView {
    fn from(electron: &Electron) -> Self {
        ElectronView {
            shell: electron.shell,
            position: electron.position(),
            orbit_radius: electron.orbit_radius,
            orientation: electron.orientation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AtomView {
    pub particles: Vec<Particle>,
    pub electrons: Vec<ElectronView>,
    pub info: AtomInfo,
}

impl From<&AtomScene> for AtomView {
    fn from(scene: &AtomScene) -> Self {
        AtomView {
            particles: scene.particles.clone(),
            electrons: scene.electrons.iter().map(ElectronView::from).collect(),
            info: scene.info.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LatticeView {
    pub atoms: Vec<LatticeAtom>,
    /// Coordination bond endpoints, center first.
    pub bonds: Vec<[Point3; 2]>,
    pub outlines: Vec<CellOutline>,
    pub info: LatticeInfo,
    pub focus: Point3,
}

impl From<&LatticeScene> for LatticeView {
    fn from(scene: &LatticeScene) -> Self {
        LatticeView {
            atoms: scene.atoms.clone(),
            bonds: scene.bonds.iter().map(|bond| bond.endpoints).collect(),
            outlines: scene.outlines.clone(),
            info: scene.info(),
            focus: scene.focus(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot {
    pub mode: SimulationMode,
    pub theme: Theme,
    pub is_3d: bool,
    pub state: AppState,
    /// Present in atom mode.
    pub atom: Option<AtomView>,
    /// Present in lattice mode.
    pub lattice: Option<LatticeView>,
    pub pending: Option<PendingElement>,
}

pub trait Presenter {
    fn redraw(&mut self, snapshot: &SceneSnapshot);
}

/// Keeps the most recent snapshot and a frame count. Used by the CLI and
/// the web driver, which serve the last frame rather than draw it.
#[derive(Debug, Default)]
pub struct LastFrame {
    pub frames: u64,
    pub snapshot: Option<SceneSnapshot>,
}

impl Presenter for LastFrame {
    fn redraw(&mut self, snapshot: &SceneSnapshot) {
        self.frames += 1;
        trace!("frame {} ({:?} mode)", self.frames, snapshot.mode);
        self.snapshot = Some(snapshot.clone());
    }
}
