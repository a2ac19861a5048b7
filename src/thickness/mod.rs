mod interpolated_structure;

pub use interpolated_structure::InterpolatedStructure;

use crate::column::StratigraphicColumn;
use crate::contacts::ContactSet;
use crate::error::Result;
use crate::map_data::MapData;
use crate::observations::StructuralObservation;

/// Placeholder for a thickness that could not be computed, used instead of a
/// missing or NaN entry. Applies uniformly to units unbounded by geometry
/// (top/base of the column, absent contacts) and units with no usable
/// structural data.
pub const SENTINEL: f64 = -1.0;

/// One output row: summary statistics of a unit's thickness distribution.
///
/// All numeric fields are finite; "not computable" is [`SENTINEL`], never NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct ThicknessRow {
    pub unit_name: String,
    pub unit_id: u32,
    pub median: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl ThicknessRow {
    /// A row for a unit whose thickness could not be estimated.
    #[must_use]
    pub fn sentinel(unit_name: impl Into<String>, unit_id: u32) -> Self {
        Self {
            unit_name: unit_name.into(),
            unit_id,
            median: SENTINEL,
            mean: SENTINEL,
            std_dev: SENTINEL,
        }
    }
}

/// The estimator output: exactly one row per stratigraphic unit, in column
/// order (youngest first).
#[derive(Debug, Clone)]
pub struct ThicknessTable {
    rows: Vec<ThicknessRow>,
}

impl ThicknessTable {
    pub(crate) fn new(rows: Vec<ThicknessRow>) -> Self {
        Self { rows }
    }

    /// Rows in stratigraphic column order.
    #[must_use]
    pub fn rows(&self) -> &[ThicknessRow] {
        &self.rows
    }

    /// The row for `unit_name`, if the unit is in the column.
    #[must_use]
    pub fn get(&self, unit_name: &str) -> Option<&ThicknessRow> {
        self.rows.iter().find(|r| r.unit_name == unit_name)
    }

    /// Number of rows (= number of units in the column).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> IntoIterator for &'a ThicknessTable {
    type Item = &'a ThicknessRow;
    type IntoIter = std::slice::Iter<'a, ThicknessRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// A thickness-estimation strategy.
///
/// Strategies are interchangeable: callers select one at configuration time
/// and identify its output by [`label`](ThicknessCalculator::label) rather
/// than by inspecting the algorithm.
pub trait ThicknessCalculator {
    /// Fixed name identifying the strategy that produced a result.
    fn label(&self) -> &'static str;

    /// Estimates the thickness of every unit in the column.
    ///
    /// Returns one row per unit in column order. Units that cannot be
    /// estimated carry [`SENTINEL`] values; absence of data is never an
    /// error.
    ///
    /// # Errors
    ///
    /// Only global precondition violations (see [`crate::error::InputError`])
    /// fail the computation.
    fn compute(
        &self,
        column: &StratigraphicColumn,
        contacts: &ContactSet,
        samples: &[StructuralObservation],
        map_data: &MapData,
    ) -> Result<ThicknessTable>;
}
