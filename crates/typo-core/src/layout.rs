// Keyboard layout: two key grids and a character index over them.

use hashbrown::HashMap;

use crate::TypoError;

/// Which of a layout's two grids a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    /// Typed without holding shift.
    Unshifted,
    /// Typed while holding shift.
    Shifted,
}

/// Grid coordinates of a key. Rows count from the top, columns from the
/// left edge of the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    /// Straight-line distance between two key positions.
    pub fn euclidean_distance(self, other: Position) -> f64 {
        let dr = self.row as f64 - other.row as f64;
        let dc = self.column as f64 - other.column as f64;
        (dr * dr + dc * dc).sqrt()
    }
}

/// Where a character lives on a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyLocation {
    pub position: Position,
    pub shift: Shift,
}

/// A named keyboard layout: an unshifted grid and a shifted grid.
///
/// Every character appears at most once across both grids. The layout is
/// immutable after construction, so it can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct KeyboardLayout {
    name: String,
    unshifted: Vec<Vec<char>>,
    shifted: Vec<Vec<char>>,
    /// Character to location, built once from the grids.
    index: HashMap<char, KeyLocation>,
}

impl KeyboardLayout {
    /// Build a layout from its two grids.
    ///
    /// Fails with [`TypoError::InvalidLayout`] if a character appears twice
    /// (within a grid or across both) or if the layout has no keys.
    pub fn new(
        name: impl Into<String>,
        unshifted: Vec<Vec<char>>,
        shifted: Vec<Vec<char>>,
    ) -> Result<Self, TypoError> {
        let name = name.into();
        let mut index = HashMap::new();

        for (shift, grid) in [(Shift::Unshifted, &unshifted), (Shift::Shifted, &shifted)] {
            for (row, keys) in grid.iter().enumerate() {
                for (column, &c) in keys.iter().enumerate() {
                    let location = KeyLocation {
                        position: Position { row, column },
                        shift,
                    };
                    if let Some(previous) = index.insert(c, location) {
                        return Err(TypoError::InvalidLayout {
                            layout: name,
                            reason: format!(
                                "key {c:?} appears at {:?} row {} column {} and {:?} row {} column {}",
                                previous.shift,
                                previous.position.row,
                                previous.position.column,
                                shift,
                                row,
                                column
                            ),
                        });
                    }
                }
            }
        }

        if index.is_empty() {
            return Err(TypoError::InvalidLayout {
                layout: name,
                reason: "layout has no keys".to_string(),
            });
        }

        Ok(Self {
            name,
            unshifted,
            shifted,
            index,
        })
    }

    /// The name this layout was built with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Find the grid and position of `c`.
    pub fn locate(&self, c: char) -> Result<KeyLocation, TypoError> {
        self.index
            .get(&c)
            .copied()
            .ok_or(TypoError::UnsupportedCharacter(c))
    }

    /// Which grid `c` lives in.
    pub fn layout_of(&self, c: char) -> Result<Shift, TypoError> {
        self.locate(c).map(|location| location.shift)
    }

    /// Rows of the requested grid.
    pub fn grid(&self, shift: Shift) -> &[Vec<char>] {
        match shift {
            Shift::Unshifted => &self.unshifted,
            Shift::Shifted => &self.shifted,
        }
    }

    /// Whether `c` is on either grid.
    pub fn contains(&self, c: char) -> bool {
        self.index.contains_key(&c)
    }

    /// All keys: the unshifted grid, then the shifted grid, each read
    /// top-to-bottom and left-to-right.
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.unshifted
            .iter()
            .chain(self.shifted.iter())
            .flat_map(|row| row.iter().copied())
    }

    /// Number of distinct keys across both grids.
    pub fn key_count(&self) -> usize {
        self.index.len()
    }
}
