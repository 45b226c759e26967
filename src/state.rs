//! The single application state record and the small enums it is made of.
//!
//! Only [`crate::controller::Visualizer`] mutates this; layout engines read
//! it by reference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::lattice::LatticeDisplayMode;
use crate::lattice_defs::LatticeType;
use crate::nucleus::NucleusArrangement;

pub const MIN_PROTONS: u32 = 1;
pub const MAX_PROTONS: u32 = 118;
pub const MAX_NEUTRONS: u32 = 180;
pub const MAX_ELECTRONS: u32 = 118;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimulationMode {
    #[default]
    Atom,
    Lattice,
}

impl SimulationMode {
    pub fn other(self) -> SimulationMode {
        match self {
            SimulationMode::Atom => SimulationMode::Lattice,
            SimulationMode::Lattice => SimulationMode::Atom,
        }
    }
}

impl FromStr for SimulationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "atom" => Ok(SimulationMode::Atom),
            "lattice" => Ok(SimulationMode::Lattice),
            _ => Err(Error::UnknownVariant {
                kind: "simulation mode",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParticleKind {
    Proton,
    Neutron,
    Electron,
}

impl ParticleKind {
    /// Inclusive valid range for this kind's count.
    pub fn bounds(self) -> (u32, u32) {
        match self {
            ParticleKind::Proton => (MIN_PROTONS, MAX_PROTONS),
            ParticleKind::Neutron => (0, MAX_NEUTRONS),
            ParticleKind::Electron => (0, MAX_ELECTRONS),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ParticleKind::Proton => "proton",
            ParticleKind::Neutron => "neutron",
            ParticleKind::Electron => "electron",
        }
    }
}

impl fmt::Display for ParticleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParticleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().trim_end_matches('s') {
            "proton" => Ok(ParticleKind::Proton),
            "neutron" => Ok(ParticleKind::Neutron),
            "electron" => Ok(ParticleKind::Electron),
            _ => Err(Error::UnknownVariant {
                kind: "particle kind",
                value: s.to_string(),
            }),
        }
    }
}

/// Colour scheme. Presenters pick outline/orbit colours from it; it has no
/// geometric effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(Error::UnknownVariant {
                kind: "theme",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppState {
    pub simulation_mode: SimulationMode,

    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
    pub arrangement: NucleusArrangement,
    pub expansion_factor: f32,
    pub is_3d: bool,

    pub lattice_type: LatticeType,
    pub display_mode: LatticeDisplayMode,
    pub lattice_expansion: f32,
    pub outline_visible: bool,

    pub theme: Theme,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            simulation_mode: SimulationMode::Atom,
            protons: 1,
            neutrons: 0,
            electrons: 1,
            arrangement: NucleusArrangement::Default,
            expansion_factor: 1.0,
            is_3d: true,
            lattice_type: LatticeType::SimpleCubic,
            display_mode: LatticeDisplayMode::UnitCell,
            lattice_expansion: 1.0,
            outline_visible: true,
            theme: Theme::Light,
        }
    }
}

impl AppState {
    pub fn count(&self, kind: ParticleKind) -> u32 {
        match kind {
            ParticleKind::Proton => self.protons,
            ParticleKind::Neutron => self.neutrons,
            ParticleKind::Electron => self.electrons,
        }
    }

    fn count_mut(&mut self, kind: ParticleKind) -> &mut u32 {
        match kind {
            ParticleKind::Proton => &mut self.protons,
            ParticleKind::Neutron => &mut self.neutrons,
            ParticleKind::Electron => &mut self.electrons,
        }
    }

    /// Apply `delta` to one count. Returns `false` and leaves the state
    /// untouched if the result would leave the kind's bounds. A proton change
    /// drags the electron count along, clamped to its own bounds.
    pub fn adjust_count(&mut self, kind: ParticleKind, delta: i32) -> bool {
        let (min, max) = kind.bounds();
        let next = self.count(kind) as i64 + delta as i64;
        if next < min as i64 || next > max as i64 {
            return false;
        }
        *self.count_mut(kind) = next as u32;
        if kind == ParticleKind::Proton {
            let electrons = (self.electrons as i64 + delta as i64).clamp(0, MAX_ELECTRONS as i64);
            self.electrons = electrons as u32;
        }
        true
    }

    /// Restore every atom-mode field to its default.
    pub fn reset_atom(&mut self) {
        let defaults = AppState::default();
        self.protons = defaults.protons;
        self.neutrons = defaults.neutrons;
        self.electrons = defaults.electrons;
        self.arrangement = defaults.arrangement;
        self.expansion_factor = defaults.expansion_factor;
        self.is_3d = defaults.is_3d;
    }

    pub fn nucleon_count(&self) -> usize {
        (self.protons + self.neutrons) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = AppState::default();
        assert_eq!((state.protons, state.neutrons, state.electrons), (1, 0, 1));
        assert_eq!(state.lattice_type, LatticeType::SimpleCubic);
        assert_eq!(state.display_mode, LatticeDisplayMode::UnitCell);
        assert_eq!(state.simulation_mode, SimulationMode::Atom);
    }

    #[test]
    fn test_proton_drags_electron() {
        let mut state = AppState::default();
        assert!(state.adjust_count(ParticleKind::Proton, 1));
        assert_eq!((state.protons, state.neutrons, state.electrons), (2, 0, 2));

        // Electrons clamp while protons still move
        state.electrons = 0;
        assert!(state.adjust_count(ParticleKind::Proton, -1));
        assert_eq!((state.protons, state.electrons), (1, 0));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut state = AppState::default();
        assert!(!state.adjust_count(ParticleKind::Proton, -1));
        assert!(!state.adjust_count(ParticleKind::Neutron, -1));
        state.neutrons = MAX_NEUTRONS;
        assert!(!state.adjust_count(ParticleKind::Neutron, 1));
        state.electrons = MAX_ELECTRONS;
        assert!(!state.adjust_count(ParticleKind::Electron, 1));
        assert_eq!(state.protons, 1);
        assert_eq!(state.neutrons, MAX_NEUTRONS);
    }

    #[test]
    fn test_reset_atom_keeps_lattice_fields() {
        let mut state = AppState::default();
        state.protons = 50;
        state.arrangement = NucleusArrangement::Structured;
        state.lattice_type = LatticeType::FaceCentered;
        state.reset_atom();
        assert_eq!(state.protons, 1);
        assert_eq!(state.arrangement, NucleusArrangement::Default);
        assert_eq!(state.lattice_type, LatticeType::FaceCentered);
    }

    #[test]
    fn test_particle_kind_parsing() {
        assert_eq!("protons".parse::<ParticleKind>().ok(), Some(ParticleKind::Proton));
        assert_eq!("Electron".parse::<ParticleKind>().ok(), Some(ParticleKind::Electron));
        assert!("quark".parse::<ParticleKind>().is_err());
    }
}
