//! Atom-view scene: nucleons, electrons and the info panel, rebuilt
//! wholesale from [`AppState`] on every relevant change.

use rand::Rng;
use serde::Serialize;

use crate::electrons::{create_electron, Electron};
use crate::elements::AtomInfo;
use crate::geometry::Point3;
use crate::nucleus::arrange_nucleons;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NucleonKind {
    Proton,
    Neutron,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    pub kind: NucleonKind,
    pub position: Point3,
}

#[derive(Debug, Clone)]
pub struct AtomScene {
    /// All protons first, then all neutrons.
    pub particles: Vec<Particle>,
    pub electrons: Vec<Electron>,
    pub info: AtomInfo,
}

impl AtomScene {
    pub fn build<R: Rng>(state: &AppState, rng: &mut R) -> Self {
        let kinds = std::iter::repeat(NucleonKind::Proton)
            .take(state.protons as usize)
            .chain(std::iter::repeat(NucleonKind::Neutron).take(state.neutrons as usize));
        let positions = arrange_nucleons(
            state.nucleon_count(),
            state.arrangement,
            state.expansion_factor,
        );
        let particles = kinds
            .zip(positions)
            .map(|(kind, position)| Particle { kind, position })
            .collect();

        let electrons = (0..state.electrons as usize)
            .map(|i| create_electron(i, state.is_3d, rng))
            .collect();

        AtomScene {
            particles,
            electrons,
            info: AtomInfo::describe(state.protons, state.neutrons, state.electrons),
        }
    }

    /// One animation frame: every electron moves along its orbit.
    pub fn advance(&mut self) {
        for electron in &mut self.electrons {
            electron.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nucleus::NucleusArrangement;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_build_counts_and_order() {
        let state = AppState {
            protons: 3,
            neutrons: 4,
            electrons: 2,
            ..AppState::default()
        };
        let scene = AtomScene::build(&state, &mut StdRng::seed_from_u64(0));
        assert_eq!(scene.particles.len(), 7);
        assert!(scene.particles[..3].iter().all(|p| p.kind == NucleonKind::Proton));
        assert!(scene.particles[3..].iter().all(|p| p.kind == NucleonKind::Neutron));
        assert_eq!(scene.electrons.len(), 2);
        assert_eq!(scene.info.name, "Lithium");
        assert_eq!(scene.info.charge, "+1");
    }

    #[test]
    fn test_seeded_rebuild_is_reproducible() {
        let state = AppState {
            protons: 10,
            neutrons: 10,
            electrons: 10,
            arrangement: NucleusArrangement::Structured,
            ..AppState::default()
        };
        let a = AtomScene::build(&state, &mut StdRng::seed_from_u64(9));
        let b = AtomScene::build(&state, &mut StdRng::seed_from_u64(9));
        assert_eq!(a.particles, b.particles);
        assert_eq!(a.electrons, b.electrons);
    }

    #[test]
    fn test_advance_moves_electrons() {
        let state = AppState::default();
        let mut scene = AtomScene::build(&state, &mut StdRng::seed_from_u64(1));
        let before = scene.electrons[0].angle;
        scene.advance();
        assert_ne!(scene.electrons[0].angle, before);
    }
}
