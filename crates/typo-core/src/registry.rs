// Layout registry: keyboard layouts looked up by name.
//
// A registry is filled once (built-in layouts plus any configured ones) and
// then only read. Layout files are JSON, either a single layout object or an
// array of them:
//
//   {"name": "TINY", "unshifted": [["a", "b"]], "shifted": [["A", "B"]]}

use std::path::Path;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::TypoError;
use crate::builtin::{BUILTIN_LAYOUTS, to_grid};
use crate::layout::KeyboardLayout;

/// Serialized description of a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub name: String,
    pub unshifted: Vec<Vec<char>>,
    #[serde(default)]
    pub shifted: Vec<Vec<char>>,
}

/// One spec or many, so a file can hold either.
#[derive(Deserialize)]
#[serde(untagged)]
enum LayoutFile {
    One(LayoutSpec),
    Many(Vec<LayoutSpec>),
}

/// Keyboard layouts by name.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegistry {
    layouts: HashMap<String, KeyboardLayout>,
}

impl LayoutRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every bundled layout (`QWERTY`, `DVORAK`).
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for &(name, unshifted, shifted) in BUILTIN_LAYOUTS {
            let layout = KeyboardLayout::new(name, to_grid(unshifted), to_grid(shifted))
                .expect("bundled layouts are valid");
            registry.layouts.insert(name.to_string(), layout);
        }
        registry
    }

    /// Validate and register a layout from its grids.
    pub fn register(
        &mut self,
        name: &str,
        unshifted: Vec<Vec<char>>,
        shifted: Vec<Vec<char>>,
    ) -> Result<(), TypoError> {
        let layout = KeyboardLayout::new(name, unshifted, shifted)?;
        self.register_layout(layout)
    }

    /// Register an already-built layout under its own name.
    ///
    /// Names are never reused: registering a taken name fails with
    /// [`TypoError::DuplicateLayout`].
    pub fn register_layout(&mut self, layout: KeyboardLayout) -> Result<(), TypoError> {
        if self.layouts.contains_key(layout.name()) {
            return Err(TypoError::DuplicateLayout(layout.name().to_string()));
        }
        tracing::debug!(
            layout = layout.name(),
            keys = layout.key_count(),
            "registered keyboard layout"
        );
        self.layouts.insert(layout.name().to_string(), layout);
        Ok(())
    }

    /// Register every layout in a JSON document (one spec or an array).
    ///
    /// Returns the names registered, in document order. Every layout is
    /// validated first; if any is invalid or its name is taken, nothing is
    /// registered.
    pub fn register_json(&mut self, json: &str) -> Result<Vec<String>, TypoError> {
        self.register_json_from(json, "<inline>")
    }

    /// Read a JSON layout file and register its layouts.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<Vec<String>, TypoError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| TypoError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.register_json_from(&contents, &path.display().to_string())
    }

    fn register_json_from(&mut self, json: &str, source: &str) -> Result<Vec<String>, TypoError> {
        let file: LayoutFile = serde_json::from_str(json).map_err(|e| TypoError::Config {
            path: source.to_string(),
            message: e.to_string(),
        })?;
        let specs = match file {
            LayoutFile::One(spec) => vec![spec],
            LayoutFile::Many(specs) => specs,
        };

        let mut staged: Vec<KeyboardLayout> = Vec::with_capacity(specs.len());
        for spec in specs {
            let taken = self.layouts.contains_key(&spec.name)
                || staged.iter().any(|layout| layout.name() == spec.name);
            if taken {
                return Err(TypoError::DuplicateLayout(spec.name));
            }
            staged.push(KeyboardLayout::new(spec.name, spec.unshifted, spec.shifted)?);
        }

        let mut names = Vec::with_capacity(staged.len());
        for layout in staged {
            names.push(layout.name().to_string());
            self.register_layout(layout)?;
        }
        Ok(names)
    }

    /// Look a layout up by name.
    pub fn lookup(&self, name: &str) -> Result<&KeyboardLayout, TypoError> {
        self.layouts
            .get(name)
            .ok_or_else(|| TypoError::UnknownLayout(name.to_string()))
    }

    /// Registered layout names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.layouts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}
