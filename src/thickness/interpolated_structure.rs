use tracing::{debug, info};

use crate::column::StratigraphicColumn;
use crate::contacts::{resolve_bounds, ContactSet, UnitBounds};
use crate::error::Result;
use crate::interpolate::OrientationField;
use crate::map_data::MapData;
use crate::math::distance_2d::{closest_point_on_polyline, resample_polyline};
use crate::math::{stats, Point2};
use crate::observations::StructuralObservation;

use super::{ThicknessCalculator, ThicknessRow, ThicknessTable, SENTINEL};

/// Dips steeper than this are treated as vertical bedding: the perpendicular
/// thickness is clipped to the separation distance instead of following
/// `sin(θ)` into an unstable correspondence.
const NEAR_VERTICAL_DIP: f64 = 89.5;

/// Thickness estimator that projects the separation between a unit's two
/// bounding contacts onto the bedding plane implied by an interpolated
/// structural orientation field.
///
/// For each unit bounded below and above, the basal contact is resampled at
/// a fixed spacing; every sample is paired with the nearest point on the
/// upper contact, the separation is promoted to a 3D distance using the
/// terrain surface, and the local dip at the pair midpoint converts it to a
/// perpendicular thickness `t = d · sin(θ)`. The per-unit distribution is
/// reduced to median, mean and standard deviation.
///
/// Units at the top or base of the column, units with absent or degenerate
/// contacts, and units whose sampling yields no valid estimate all resolve
/// to [`SENTINEL`] rows; none of these conditions is an error.
#[derive(Debug, Clone)]
pub struct InterpolatedStructure {
    sample_spacing: f64,
}

impl InterpolatedStructure {
    /// The strategy label exposed through [`ThicknessCalculator::label`].
    pub const LABEL: &str = "InterpolatedStructure";

    /// Default arc-length spacing between contact sample locations, in map
    /// units.
    pub const DEFAULT_SAMPLE_SPACING: f64 = 100.0;

    /// Creates the estimator with the default sampling spacing.
    #[must_use]
    pub fn new() -> Self {
        Self { sample_spacing: Self::DEFAULT_SAMPLE_SPACING }
    }

    /// Overrides the contact sampling spacing. Non-positive values fall back
    /// to sampling at the contact's own vertices.
    #[must_use]
    pub fn with_sample_spacing(mut self, spacing: f64) -> Self {
        self.sample_spacing = spacing;
        self
    }

    /// Collects the thickness distribution for the unit at `position`.
    ///
    /// Returns an empty distribution when the unit is unbounded on either
    /// side or no sample location yields a usable estimate; individual
    /// degenerate correspondences are dropped, never escalated.
    fn estimate_unit(
        &self,
        column: &StratigraphicColumn,
        contacts: &ContactSet,
        field: &OrientationField,
        map_data: &MapData,
        position: usize,
    ) -> Vec<f64> {
        let Some(unit) = column.unit(position) else {
            return Vec::new();
        };
        let bounds: UnitBounds<'_> = resolve_bounds(column, contacts, position);
        let (Some(lower), Some(upper)) = (bounds.lower, bounds.upper) else {
            debug!(unit = %unit.name, "unit is unbounded, skipping estimation");
            return Vec::new();
        };

        let footprint = map_data.footprint_of(&unit.name);
        let mut thicknesses = Vec::new();

        for p in resample_polyline(&lower.vertices, self.sample_spacing) {
            let Some((q, horizontal)) = closest_point_on_polyline(p, &upper.vertices) else {
                continue;
            };
            let midpoint = Point2::new((p.x + q.x) * 0.5, (p.y + q.y) * 0.5);

            // Mask out correspondences that stray off the unit's footprint,
            // e.g. where the two contacts belong to disjoint outcrops.
            if footprint.is_some_and(|f| !f.contains(midpoint)) {
                continue;
            }
            let Some(orientation) = field.orientation_at(midpoint) else {
                continue;
            };

            let dz = map_data.elevation_at(q) - map_data.elevation_at(p);
            let separation = horizontal.hypot(dz);
            let thickness = if orientation.dip > NEAR_VERTICAL_DIP {
                separation
            } else {
                separation * orientation.dip.to_radians().sin()
            };
            if thickness.is_finite() && thickness >= 0.0 {
                thicknesses.push(thickness);
            }
        }
        thicknesses
    }

    fn row_from_distribution(unit_name: &str, unit_id: u32, samples: &[f64]) -> ThicknessRow {
        if samples.is_empty() {
            info!(unit = %unit_name, "no computable thickness, assigning sentinel");
            return ThicknessRow::sentinel(unit_name, unit_id);
        }
        debug!(unit = %unit_name, samples = samples.len(), "aggregating thickness distribution");
        ThicknessRow {
            unit_name: unit_name.to_owned(),
            unit_id,
            median: stats::median(samples).unwrap_or(SENTINEL),
            mean: stats::mean(samples).unwrap_or(SENTINEL),
            std_dev: stats::std_dev(samples).unwrap_or(SENTINEL),
        }
    }
}

impl Default for InterpolatedStructure {
    fn default() -> Self {
        Self::new()
    }
}

impl ThicknessCalculator for InterpolatedStructure {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn compute(
        &self,
        column: &StratigraphicColumn,
        contacts: &ContactSet,
        samples: &[StructuralObservation],
        map_data: &MapData,
    ) -> Result<ThicknessTable> {
        let field = OrientationField::from_observations(samples);
        debug!(observations = field.len(), units = column.len(), "starting thickness estimation");

        // Per-unit work is independent; distributions are collected by
        // column position so output order never depends on completion order.
        #[cfg(feature = "parallel")]
        let distributions: Vec<Vec<f64>> = {
            use rayon::prelude::*;
            (0..column.len())
                .into_par_iter()
                .map(|pos| self.estimate_unit(column, contacts, &field, map_data, pos))
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let distributions: Vec<Vec<f64>> = (0..column.len())
            .map(|pos| self.estimate_unit(column, contacts, &field, map_data, pos))
            .collect();

        let rows = column
            .iter()
            .zip(&distributions)
            .map(|(unit, dist)| Self::row_from_distribution(&unit.name, unit.id, dist))
            .collect();
        Ok(ThicknessTable::new(rows))
    }
}
