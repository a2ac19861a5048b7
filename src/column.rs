use std::collections::HashMap;

use crate::error::{InputError, Result};

/// A rock unit in the stratigraphic column.
///
/// Constructed once by the column builder; read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StratigraphicUnit {
    pub name: String,
    pub id: u32,
}

impl StratigraphicUnit {
    /// Creates a new unit with the given name and numeric id.
    #[must_use]
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self { name: name.into(), id }
    }
}

/// An ordered stratigraphic column, youngest unit first.
///
/// Ordering is a total order with no ties; each unit name appears exactly
/// once. Position 0 is the top of the column (youngest unit), the last
/// position is the base (oldest unit).
#[derive(Debug, Clone)]
pub struct StratigraphicColumn {
    units: Vec<StratigraphicUnit>,
    by_name: HashMap<String, usize>,
}

impl StratigraphicColumn {
    /// Builds a column from units ordered young to old.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::EmptyColumn`] for an empty sequence and
    /// [`InputError::DuplicateUnit`] if a unit name repeats.
    pub fn new(units: Vec<StratigraphicUnit>) -> Result<Self> {
        if units.is_empty() {
            return Err(InputError::EmptyColumn.into());
        }
        let mut by_name = HashMap::with_capacity(units.len());
        for (i, unit) in units.iter().enumerate() {
            if by_name.insert(unit.name.clone(), i).is_some() {
                return Err(InputError::DuplicateUnit(unit.name.clone()).into());
            }
        }
        Ok(Self { units, by_name })
    }

    /// Number of units in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the column has no units. Always false for a constructed
    /// column; provided for the conventional `len`/`is_empty` pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The unit at ordinal `position` (0 = youngest/top).
    #[must_use]
    pub fn unit(&self, position: usize) -> Option<&StratigraphicUnit> {
        self.units.get(position)
    }

    /// Ordinal position of the unit called `name`.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// The unit immediately above (younger than) the unit at `position`.
    #[must_use]
    pub fn above(&self, position: usize) -> Option<&StratigraphicUnit> {
        position.checked_sub(1).and_then(|p| self.units.get(p))
    }

    /// The unit immediately below (older than) the unit at `position`.
    #[must_use]
    pub fn below(&self, position: usize) -> Option<&StratigraphicUnit> {
        self.units.get(position + 1)
    }

    /// Iterates units in column order (young to old).
    pub fn iter(&self) -> std::slice::Iter<'_, StratigraphicUnit> {
        self.units.iter()
    }
}

impl<'a> IntoIterator for &'a StratigraphicColumn {
    type Item = &'a StratigraphicUnit;
    type IntoIter = std::slice::Iter<'a, StratigraphicUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}
