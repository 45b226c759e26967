//! Procedural layout engine for an atom / crystal-lattice visualizer.
//!
//! The crate computes where nucleons, electrons and lattice atoms go and
//! keeps the application state; drawing is left to a [`scene::Presenter`].

pub mod atom;
pub mod config;
pub mod controller;
pub mod electrons;
pub mod elements;
pub mod error;
pub mod gate;
pub mod geometry;
pub mod lattice;
pub mod lattice_defs;
pub mod nucleus;
pub mod scene;
pub mod state;

pub use config::VisualizerConfig;
pub use controller::{Intent, Outcome, Visualizer};
pub use error::{Error, Result};
