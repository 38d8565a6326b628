//! Keyboard layouts for keyboard-aware typo distance.
//!
//! This crate holds the static side of the typo model: which key a character
//! lives on, and which layouts are known by name. The cost model, distance
//! engine and enumerator live in `typo-engine`.
//!
//! # Architecture
//!
//! - [`layout`] -- Key grids, positions and the character index
//! - [`builtin`] -- Compile-time grids for the bundled layouts
//! - [`registry`] -- Name-to-layout registry and JSON layout configuration

pub mod builtin;
pub mod layout;
pub mod registry;

pub use layout::{KeyLocation, KeyboardLayout, Position, Shift};
pub use registry::{LayoutRegistry, LayoutSpec};

/// Error type shared by every typo crate.
#[derive(Debug, thiserror::Error)]
pub enum TypoError {
    #[error("unknown keyboard layout: {0}")]
    UnknownLayout(String),
    #[error("character {0:?} is not on the active keyboard layout")]
    UnsupportedCharacter(char),
    #[error("invalid keyboard layout {layout}: {reason}")]
    InvalidLayout { layout: String, reason: String },
    #[error("keyboard layout already registered: {0}")]
    DuplicateLayout(String),
    #[error("invalid cost weights: {0}")]
    InvalidCostWeights(String),
    #[error("failed to load configuration from {path}: {message}")]
    Config { path: String, message: String },
}

/// Name of the layout used when a caller does not pick one.
pub const DEFAULT_LAYOUT: &str = "QWERTY";
