//! Mode/state controller.
//!
//! [`Visualizer`] owns the [`AppState`], both scenes and the confirmation
//! gate. Every intent mutates state and then explicitly calls one of the
//! `rebuild_*` methods; nothing is diffed incrementally.

use std::str::FromStr;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::atom::AtomScene;
use crate::config::VisualizerConfig;
use crate::elements::{typical_neutrons, ELEMENTS};
use crate::error::Error;
use crate::gate::{ConfirmError, ConfirmationGate, PendingElement};
use crate::lattice::{resolve_lattice_type, LatticeDisplayMode, LatticeScene};
use crate::lattice_defs::LatticeType;
use crate::nucleus::NucleusArrangement;
use crate::scene::{AtomView, LatticeView, Presenter, SceneSnapshot};
use crate::state::{AppState, ParticleKind, SimulationMode};

/// A user action coming from a presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "kebab-case")]
pub enum Intent {
    AdjustCount { kind: ParticleKind, delta: i32 },
    ToggleArrangement { arrangement: NucleusArrangement },
    SetExpansionFactor { factor: f32 },
    ToggleViewDimension,
    ResetAtom,
    SetSimulationMode { mode: SimulationMode },
    ToggleSimulationMode,
    SetLatticeType { lattice_type: LatticeType },
    SetDisplayMode { mode: LatticeDisplayMode },
    SetLatticeExpansion { factor: f32 },
    ToggleOutline,
    ToggleTheme,
    SelectElement { atomic_number: u32 },
    ConfirmPending,
    CancelPending,
}

impl FromStr for Intent {
    type Err = Error;

    /// Parses the `name[=value]` form used on the command line, e.g.
    /// `add=proton`, `display=8-cells`, `element=92`, `confirm`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = match s.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (s, None),
        };
        let value = || {
            value.ok_or_else(|| Error::UnknownVariant {
                kind: "intent argument",
                value: s.to_string(),
            })
        };
        let number = |what: &'static str| -> Result<f32, Error> {
            let raw = value()?;
            raw.parse().map_err(|_| Error::InvalidNumber {
                what,
                value: raw.to_string(),
            })
        };

        let intent = match name {
            "add" => Intent::AdjustCount {
                kind: value()?.parse()?,
                delta: 1,
            },
            "remove" => Intent::AdjustCount {
                kind: value()?.parse()?,
                delta: -1,
            },
            "arrangement" => Intent::ToggleArrangement {
                arrangement: value()?.parse()?,
            },
            "expansion" => Intent::SetExpansionFactor {
                factor: number("expansion factor")?,
            },
            "view" => Intent::ToggleViewDimension,
            "reset" => Intent::ResetAtom,
            "mode" => Intent::SetSimulationMode {
                mode: value()?.parse()?,
            },
            "toggle-mode" => Intent::ToggleSimulationMode,
            "lattice" => Intent::SetLatticeType {
                lattice_type: value()?.parse()?,
            },
            "display" => Intent::SetDisplayMode {
                mode: value()?.parse()?,
            },
            "lattice-expansion" => Intent::SetLatticeExpansion {
                factor: number("lattice expansion")?,
            },
            "outline" => Intent::ToggleOutline,
            "theme" => Intent::ToggleTheme,
            "element" => {
                let raw = value()?;
                let atomic_number = raw.parse().map_err(|_| Error::InvalidNumber {
                    what: "atomic number",
                    value: raw.to_string(),
                })?;
                Intent::SelectElement { atomic_number }
            }
            "confirm" => Intent::ConfirmPending,
            "cancel" => Intent::CancelPending,
            _ => {
                return Err(Error::UnknownVariant {
                    kind: "intent",
                    value: s.to_string(),
                })
            }
        };
        Ok(intent)
    }
}

/// Which scene a mutation rebuilt from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rebuild {
    Atom,
    Lattice,
}

/// Why an intent was declined. The state is untouched in every case.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum Rejection {
    #[error("{kind} count {value} is out of bounds")]
    OutOfBounds { kind: ParticleKind, value: i64 },
    #[error("invalid factor {factor}")]
    InvalidFactor { factor: f32 },
    #[error("no element with atomic number {atomic_number}")]
    NoSuchElement { atomic_number: u32 },
    #[error("outline cannot be toggled in {mode} mode")]
    OutlineLocked { mode: LatticeDisplayMode },
    #[error("no element request is pending")]
    NothingPending,
    #[error("countdown still running ({remaining}s)")]
    CountdownRunning { remaining: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum Outcome {
    /// State changed and the named scene was rebuilt.
    Rebuilt { scene: Rebuild },
    /// State changed without a rebuild (expansion, outline, theme, cancel).
    Updated,
    /// A heavy element is waiting behind the confirmation gate.
    Deferred { pending: PendingElement },
    Rejected { rejection: Rejection },
}

impl Outcome {
    fn rejected(rejection: Rejection) -> Self {
        debug!("Rejected intent: {rejection}");
        Outcome::Rejected { rejection }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected { .. })
    }
}

pub struct Visualizer {
    state: AppState,
    high_z_threshold: u32,
    countdown_secs: u32,
    rng: StdRng,
    atom: Option<AtomScene>,
    lattice: Option<LatticeScene>,
    gate: ConfirmationGate,
}

impl Visualizer {
    /// Start in the default state with the atom scene built.
    pub fn new(config: &VisualizerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut visualizer = Visualizer {
            state: AppState {
                theme: config.theme,
                ..AppState::default()
            },
            high_z_threshold: config.high_z_threshold,
            countdown_secs: config.countdown_secs,
            rng,
            atom: None,
            lattice: None,
            gate: ConfirmationGate::default(),
        };
        visualizer.rebuild_atom();
        visualizer
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn atom_scene(&self) -> Option<&AtomScene> {
        self.atom.as_ref()
    }

    pub fn lattice_scene(&self) -> Option<&LatticeScene> {
        self.lattice.as_ref()
    }

    pub fn pending(&self) -> Option<&PendingElement> {
        self.gate.pending()
    }

    pub fn handle(&mut self, intent: Intent) -> Outcome {
        debug!("Handling {intent:?}");
        match intent {
            Intent::AdjustCount { kind, delta } => self.adjust_particle_count(kind, delta),
            Intent::ToggleArrangement { arrangement } => self.toggle_arrangement(arrangement),
            Intent::SetExpansionFactor { factor } => self.set_expansion_factor(factor),
            Intent::ToggleViewDimension => self.toggle_view_dimension(),
            Intent::ResetAtom => self.reset_atom(),
            Intent::SetSimulationMode { mode } => self.set_simulation_mode(mode),
            Intent::ToggleSimulationMode => self.toggle_simulation_mode(),
            Intent::SetLatticeType { lattice_type } => self.set_lattice_type(lattice_type),
            Intent::SetDisplayMode { mode } => self.set_lattice_display_mode(mode),
            Intent::SetLatticeExpansion { factor } => self.set_lattice_expansion(factor),
            Intent::ToggleOutline => self.toggle_outline(),
            Intent::ToggleTheme => self.toggle_theme(),
            Intent::SelectElement { atomic_number } => self.select_element(atomic_number),
            Intent::ConfirmPending => self.confirm_pending(),
            Intent::CancelPending => self.cancel_pending(),
        }
    }

    // ---- atom mode ----

    pub fn adjust_particle_count(&mut self, kind: ParticleKind, delta: i32) -> Outcome {
        if !self.state.adjust_count(kind, delta) {
            return Outcome::rejected(Rejection::OutOfBounds {
                kind,
                value: self.state.count(kind) as i64 + delta as i64,
            });
        }
        self.rebuild_atom()
    }

    /// Selecting the active arrangement turns it off again.
    pub fn toggle_arrangement(&mut self, arrangement: NucleusArrangement) -> Outcome {
        self.state.arrangement = self.state.arrangement.toggled(arrangement);
        self.rebuild_atom()
    }

    pub fn set_expansion_factor(&mut self, factor: f32) -> Outcome {
        if !factor.is_finite() || factor < 1.0 {
            return Outcome::rejected(Rejection::InvalidFactor { factor });
        }
        self.state.expansion_factor = factor;
        self.rebuild_atom()
    }

    pub fn toggle_view_dimension(&mut self) -> Outcome {
        self.state.is_3d = !self.state.is_3d;
        self.rebuild_atom()
    }

    pub fn reset_atom(&mut self) -> Outcome {
        self.state.reset_atom();
        self.rebuild_atom()
    }

    /// Apply an element pick from the periodic table. Heavy elements are
    /// deferred behind the gate; any earlier pending pick is superseded.
    pub fn select_element(&mut self, atomic_number: u32) -> Outcome {
        if atomic_number == 0 || atomic_number as usize > ELEMENTS.len() {
            return Outcome::rejected(Rejection::NoSuchElement { atomic_number });
        }
        let neutrons = typical_neutrons(atomic_number);
        if atomic_number >= self.high_z_threshold {
            let pending = self.gate.open(atomic_number, neutrons, self.countdown_secs);
            info!(
                "Element {atomic_number} needs confirmation, countdown {}s",
                self.countdown_secs
            );
            return Outcome::Deferred { pending };
        }
        if self.gate.cancel().is_some() {
            info!("Pending element request superseded by {atomic_number}");
        }
        self.apply_element(atomic_number, neutrons)
    }

    /// Count one second off the gate. Returns `None` once `ticket` no
    /// longer belongs to a running countdown, telling the timer to stop.
    pub fn tick_countdown(&mut self, ticket: u64) -> Option<u32> {
        let remaining = self.gate.tick(ticket)?;
        if remaining == 0 {
            info!("Countdown finished, confirmation available");
        }
        Some(remaining)
    }

    /// Whether the timer holding `ticket` still has seconds to count.
    pub fn is_counting_down(&self, ticket: u64) -> bool {
        self.gate.is_counting(ticket)
    }

    pub fn confirm_pending(&mut self) -> Outcome {
        match self.gate.confirm() {
            Ok(pending) => {
                info!("Confirmed element {}", pending.atomic_number);
                self.apply_element(pending.atomic_number, pending.neutrons)
            }
            Err(ConfirmError::NothingPending) => Outcome::rejected(Rejection::NothingPending),
            Err(ConfirmError::CountdownRunning { remaining }) => {
                Outcome::rejected(Rejection::CountdownRunning { remaining })
            }
        }
    }

    pub fn cancel_pending(&mut self) -> Outcome {
        match self.gate.cancel() {
            Some(pending) => {
                info!("Cancelled element {}", pending.atomic_number);
                Outcome::Updated
            }
            None => Outcome::rejected(Rejection::NothingPending),
        }
    }

    fn apply_element(&mut self, atomic_number: u32, neutrons: u32) -> Outcome {
        self.state.protons = atomic_number;
        self.state.neutrons = neutrons;
        self.state.electrons = atomic_number;
        self.rebuild_atom()
    }

    // ---- mode switching ----

    /// The atom scene is built the first time atom mode is entered; the
    /// lattice scene is rebuilt on every entry.
    pub fn set_simulation_mode(&mut self, mode: SimulationMode) -> Outcome {
        self.state.simulation_mode = mode;
        match mode {
            SimulationMode::Atom if self.atom.is_none() => self.rebuild_atom(),
            SimulationMode::Atom => Outcome::Updated,
            SimulationMode::Lattice => self.rebuild_lattice(),
        }
    }

    pub fn toggle_simulation_mode(&mut self) -> Outcome {
        self.set_simulation_mode(self.state.simulation_mode.other())
    }

    // ---- lattice mode ----

    pub fn set_lattice_type(&mut self, lattice_type: LatticeType) -> Outcome {
        self.state.lattice_type = lattice_type;
        self.rebuild_lattice()
    }

    pub fn set_lattice_display_mode(&mut self, mode: LatticeDisplayMode) -> Outcome {
        self.state.display_mode = mode;
        self.rebuild_lattice()
    }

    /// Reposition atoms about the pivot; site lists are kept.
    pub fn set_lattice_expansion(&mut self, factor: f32) -> Outcome {
        if !factor.is_finite() || factor < 0.0 {
            return Outcome::rejected(Rejection::InvalidFactor { factor });
        }
        self.state.lattice_expansion = factor;
        if let Some(scene) = self.lattice.as_mut() {
            scene.apply_expansion(factor);
        }
        Outcome::Updated
    }

    pub fn toggle_outline(&mut self) -> Outcome {
        let mode = self.state.display_mode;
        if mode == LatticeDisplayMode::Contribution || mode.is_multi_cell() {
            return Outcome::rejected(Rejection::OutlineLocked { mode });
        }
        self.state.outline_visible = !self.state.outline_visible;
        if let Some(scene) = self.lattice.as_mut() {
            scene.set_outline_visible(self.state.outline_visible);
        }
        Outcome::Updated
    }

    pub fn toggle_theme(&mut self) -> Outcome {
        self.state.theme = self.state.theme.toggled();
        Outcome::Updated
    }

    // ---- rebuilds ----

    fn rebuild_atom(&mut self) -> Outcome {
        let scene = AtomScene::build(&self.state, &mut self.rng);
        debug!(
            "Rebuilt atom: {} nucleons, {} electrons ({})",
            scene.particles.len(),
            scene.electrons.len(),
            self.state.arrangement
        );
        self.atom = Some(scene);
        Outcome::Rebuilt {
            scene: Rebuild::Atom,
        }
    }

    /// Hexagonal tiling is unsupported, so the stored type falls back to
    /// simple cubic before the build.
    fn rebuild_lattice(&mut self) -> Outcome {
        let resolved = resolve_lattice_type(self.state.lattice_type, self.state.display_mode);
        if resolved != self.state.lattice_type {
            debug!(
                "{} cannot tile, falling back to {}",
                self.state.lattice_type, resolved
            );
            self.state.lattice_type = resolved;
        }
        let mut scene = LatticeScene::build(
            self.state.lattice_type,
            self.state.display_mode,
            self.state.outline_visible,
        );
        scene.apply_expansion(self.state.lattice_expansion);
        debug!(
            "Rebuilt lattice: {} {} with {} atoms",
            self.state.lattice_type,
            self.state.display_mode,
            scene.atoms.len()
        );
        self.lattice = Some(scene);
        Outcome::Rebuilt {
            scene: Rebuild::Lattice,
        }
    }

    // ---- frame loop ----

    /// One display frame: electrons advance along their orbits, then the
    /// presenter redraws.
    pub fn frame<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        if self.state.simulation_mode == SimulationMode::Atom {
            if let Some(scene) = self.atom.as_mut() {
                scene.advance();
            }
        }
        presenter.redraw(&self.snapshot());
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        let atom_mode = self.state.simulation_mode == SimulationMode::Atom;
        SceneSnapshot {
            mode: self.state.simulation_mode,
            theme: self.state.theme,
            is_3d: self.state.is_3d,
            state: self.state.clone(),
            atom: self.atom.as_ref().filter(|_| atom_mode).map(AtomView::from),
            lattice: self
                .lattice
                .as_ref()
                .filter(|_| !atom_mode)
                .map(LatticeView::from),
            pending: self.gate.pending().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Stability;
    use crate::geometry::distance;
    use crate::scene::LastFrame;

    fn seeded() -> Visualizer {
        Visualizer::new(&VisualizerConfig {
            seed: Some(1234),
            ..VisualizerConfig::default()
        })
    }

    fn counts(v: &Visualizer) -> (u32, u32, u32) {
        let s = v.state();
        (s.protons, s.neutrons, s.electrons)
    }

    #[test]
    fn test_adding_proton_adds_electron() {
        let mut v = seeded();
        let outcome = v.handle(Intent::AdjustCount {
            kind: ParticleKind::Proton,
            delta: 1,
        });
        assert_eq!(outcome, Outcome::Rebuilt { scene: Rebuild::Atom });
        assert_eq!(counts(&v), (2, 0, 2));
        let atom = v.atom_scene().unwrap();
        assert_eq!(atom.particles.len(), 2);
        assert_eq!(atom.electrons.len(), 2);
        assert_eq!(atom.info.name, "Helium");
    }

    #[test]
    fn test_out_of_bounds_leaves_state() {
        let mut v = seeded();
        let before = v.state().clone();
        let outcome = v.adjust_particle_count(ParticleKind::Proton, -1);
        assert!(outcome.is_rejected());
        assert_eq!(v.state(), &before);
        assert!(v.set_expansion_factor(0.5).is_rejected());
        assert!(v.set_expansion_factor(f32::NAN).is_rejected());
        assert!(v.set_lattice_expansion(-1.0).is_rejected());
        assert_eq!(v.state(), &before);
    }

    #[test]
    fn test_arrangement_toggle_twice_is_default() {
        let mut v = seeded();
        v.toggle_arrangement(NucleusArrangement::Structured);
        assert_eq!(v.state().arrangement, NucleusArrangement::Structured);
        v.toggle_arrangement(NucleusArrangement::Separated);
        assert_eq!(v.state().arrangement, NucleusArrangement::Separated);
        v.toggle_arrangement(NucleusArrangement::Separated);
        assert_eq!(v.state().arrangement, NucleusArrangement::Default);
    }

    #[test]
    fn test_high_z_selection_is_gated() {
        let mut v = seeded();
        let outcome = v.select_element(92);
        let ticket = match outcome {
            Outcome::Deferred { pending } => {
                assert_eq!(pending.atomic_number, 92);
                assert_eq!(pending.remaining, 5);
                pending.ticket
            }
            other => panic!("expected deferral, got {other:?}"),
        };
        assert_eq!(counts(&v), (1, 0, 1));

        // Confirmation refused while counting down
        for _ in 0..4 {
            v.tick_countdown(ticket);
            assert!(v.confirm_pending().is_rejected());
            assert_eq!(counts(&v), (1, 0, 1));
        }
        assert!(v.is_counting_down(ticket));
        assert_eq!(v.tick_countdown(ticket), Some(0));
        assert!(!v.is_counting_down(ticket));
        assert_eq!(counts(&v), (1, 0, 1));

        assert_eq!(v.confirm_pending(), Outcome::Rebuilt { scene: Rebuild::Atom });
        assert_eq!(counts(&v), (92, 146, 92));
        assert!(v.pending().is_none());
        assert_eq!(v.tick_countdown(ticket), None);
    }

    #[test]
    fn test_cancel_and_supersede() {
        let mut v = seeded();
        v.select_element(100);
        assert_eq!(v.cancel_pending(), Outcome::Updated);
        assert!(v.pending().is_none());
        assert!(v.cancel_pending().is_rejected());

        // A newer heavy request supersedes the older one
        let first = match v.select_element(90) {
            Outcome::Deferred { pending } => pending.ticket,
            other => panic!("expected deferral, got {other:?}"),
        };
        let second = match v.select_element(92) {
            Outcome::Deferred { pending } => pending.ticket,
            other => panic!("expected deferral, got {other:?}"),
        };
        assert_eq!(v.pending().map(|p| p.ticket), Some(second));
        assert!(!v.is_counting_down(first));
        assert!(v.is_counting_down(second));

        // A light element replaces a pending heavy one
        v.select_element(82);
        assert!(v.pending().is_some());
        v.select_element(6);
        assert!(v.pending().is_none());
        assert_eq!(counts(&v), (6, 6, 6));
        assert_eq!(v.atom_scene().unwrap().info.stability, Stability::Stable);

        assert!(v.select_element(0).is_rejected());
        assert!(v.select_element(119).is_rejected());
    }

    #[test]
    fn test_hexagonal_tiling_falls_back() {
        let mut v = seeded();
        v.set_simulation_mode(SimulationMode::Lattice);
        v.set_lattice_type(LatticeType::HexagonalClosePacked);
        v.set_lattice_display_mode(LatticeDisplayMode::EightCell);
        assert_eq!(v.state().lattice_type, LatticeType::SimpleCubic);
        let scene = v.lattice_scene().unwrap();
        assert_eq!(scene.lattice_type, LatticeType::SimpleCubic);
        assert_eq!(scene.atoms.len(), 27);
    }

    #[test]
    fn test_lattice_expansion_survives_rebuild() {
        let mut v = seeded();
        v.set_simulation_mode(SimulationMode::Lattice);
        v.set_lattice_display_mode(LatticeDisplayMode::Coordination);
        v.set_lattice_expansion(2.0);
        let scene = v.lattice_scene().unwrap();
        for bond in &scene.bonds {
            assert!((distance(bond.endpoints[0], bond.endpoints[1]) - 8.0).abs() < 1e-4);
        }
        v.set_lattice_type(LatticeType::BodyCentered);
        let center = v.lattice_scene().unwrap().atoms[0].position;
        let corner = v.lattice_scene().unwrap().atoms[1].position;
        // bcc center to corner is a√3/2, doubled
        assert!((distance(center, corner) - 4.0 * 3.0_f32.sqrt()).abs() < 1e-3);
    }

    #[test]
    fn test_outline_locked_in_contribution_and_tiling() {
        let mut v = seeded();
        v.set_simulation_mode(SimulationMode::Lattice);
        assert_eq!(v.toggle_outline(), Outcome::Updated);
        assert!(!v.state().outline_visible);
        assert!(!v.lattice_scene().unwrap().outlines[0].visible);
        v.set_lattice_display_mode(LatticeDisplayMode::Contribution);
        assert!(v.toggle_outline().is_rejected());
        v.set_lattice_display_mode(LatticeDisplayMode::TwentySevenCell);
        assert!(v.toggle_outline().is_rejected());
    }

    #[test]
    fn test_mode_switching_and_snapshots() {
        let mut v = seeded();
        let mut presenter = LastFrame::default();
        v.frame(&mut presenter);
        let snapshot = presenter.snapshot.as_ref().unwrap();
        assert!(snapshot.atom.is_some() && snapshot.lattice.is_none());

        assert_eq!(v.toggle_simulation_mode(), Outcome::Rebuilt { scene: Rebuild::Lattice });
        v.frame(&mut presenter);
        let snapshot = presenter.snapshot.as_ref().unwrap();
        assert_eq!(snapshot.mode, SimulationMode::Lattice);
        assert_eq!(snapshot.lattice.as_ref().unwrap().atoms.len(), 8);
        assert!(snapshot.atom.is_none());

        // Returning to atom mode reuses the existing atom
        assert_eq!(v.toggle_simulation_mode(), Outcome::Updated);
        assert_eq!(presenter.frames, 2);
    }

    #[test]
    fn test_frames_move_electrons_only_in_atom_mode() {
        let mut v = seeded();
        let mut presenter = LastFrame::default();
        let before = v.atom_scene().unwrap().electrons[0].angle;
        v.frame(&mut presenter);
        let moved = v.atom_scene().unwrap().electrons[0].angle;
        assert_ne!(before, moved);

        v.set_simulation_mode(SimulationMode::Lattice);
        v.frame(&mut presenter);
        assert_eq!(v.atom_scene().unwrap().electrons[0].angle, moved);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut a = seeded();
        let mut b = seeded();
        for v in [&mut a, &mut b] {
            v.select_element(30);
            v.toggle_view_dimension();
        }
        assert_eq!(a.atom_scene().unwrap().electrons, b.atom_scene().unwrap().electrons);
        assert!(!a.state().is_3d);
    }

    #[test]
    fn test_reset_atom() {
        let mut v = seeded();
        v.select_element(20);
        v.toggle_arrangement(NucleusArrangement::Expanded);
        v.set_expansion_factor(2.0);
        v.reset_atom();
        assert_eq!(counts(&v), (1, 0, 1));
        assert_eq!(v.state().arrangement, NucleusArrangement::Default);
        assert_eq!(v.state().expansion_factor, 1.0);
    }

    #[test]
    fn test_intent_parsing() {
        assert_eq!(
            "add=proton".parse::<Intent>().unwrap(),
            Intent::AdjustCount {
                kind: ParticleKind::Proton,
                delta: 1
            }
        );
        assert_eq!(
            "display=8-cells".parse::<Intent>().unwrap(),
            Intent::SetDisplayMode {
                mode: LatticeDisplayMode::EightCell
            }
        );
        assert_eq!(
            "element=92".parse::<Intent>().unwrap(),
            Intent::SelectElement { atomic_number: 92 }
        );
        assert_eq!("confirm".parse::<Intent>().unwrap(), Intent::ConfirmPending);
        assert!("element=abc".parse::<Intent>().is_err());
        assert!("lattice".parse::<Intent>().is_err());
        assert!("explode".parse::<Intent>().is_err());
    }

    #[test]
    fn test_intent_json() {
        let intent: Intent =
            serde_json::from_str(r#"{"intent": "set-lattice-type", "lattice_type": "fcc"}"#).unwrap();
        assert_eq!(
            intent,
            Intent::SetLatticeType {
                lattice_type: LatticeType::FaceCentered
            }
        );
        let intent: Intent =
            serde_json::from_str(r#"{"intent": "adjust-count", "kind": "neutron", "delta": -1}"#)
                .unwrap();
        assert!(matches!(intent, Intent::AdjustCount { delta: -1, .. }));
    }
}
