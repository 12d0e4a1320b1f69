/// Built-in shadow presets
///
/// Presets are static configuration: a named, ordered list of shadow
/// parameters with no ids. The library ships inside the binary as JSON and is
/// decoded once at startup.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use super::edit::ShadowParams;

const BUILTIN_PRESETS: &str = include_str!("../../assets/presets.json");

/// Errors raised while decoding a preset library
#[derive(Error, Debug)]
pub enum PresetError {
    #[error("malformed preset data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("preset library is empty")]
    Empty,
    #[error("duplicate preset name: {0}")]
    DuplicateName(String),
}

/// A named starting point for the layer collection
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: String,
    pub layers: Vec<ShadowParams>,
}

/// The ordered set of presets offered to the user
#[derive(Debug, Clone, Default)]
pub struct PresetLibrary {
    presets: Vec<Preset>,
}

impl PresetLibrary {
    /// Decode the presets compiled into the binary
    pub fn builtin() -> Result<Self, PresetError> {
        Self::from_json(BUILTIN_PRESETS)
    }

    /// Decode and check a preset library from JSON text
    pub fn from_json(json: &str) -> Result<Self, PresetError> {
        let presets: Vec<Preset> = serde_json::from_str(json)?;
        if presets.is_empty() {
            return Err(PresetError::Empty);
        }

        let mut names = HashSet::new();
        for preset in &presets {
            if !names.insert(preset.name.as_str()) {
                return Err(PresetError::DuplicateName(preset.name.clone()));
            }
        }

        Ok(Self { presets })
    }

    /// The preset the editor opens with
    pub fn default_preset(&self) -> Option<&Preset> {
        self.presets.first()
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.name == name)
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
