use std::collections::HashMap;

use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// A gridded terrain elevation surface with square cells, values at cell
/// centers, row-major storage with row 0 at the minimum y edge.
#[derive(Debug, Clone)]
pub struct ElevationGrid {
    origin: Point2,
    cell_size: f64,
    cols: usize,
    rows: usize,
    values: Vec<f64>,
}

impl ElevationGrid {
    /// Creates a grid from its geotransform and row-major cell values.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyGrid`] for a zero-extent grid and
    /// [`GeometryError::Degenerate`] if `values` does not hold
    /// `cols * rows` entries or `cell_size` is not a positive finite number.
    pub fn new(
        origin: Point2,
        cell_size: f64,
        cols: usize,
        rows: usize,
        values: Vec<f64>,
    ) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(GeometryError::EmptyGrid { cols, rows }.into());
        }
        if values.len() != cols * rows {
            return Err(GeometryError::Degenerate(format!(
                "elevation grid expects {} values, got {}",
                cols * rows,
                values.len()
            ))
            .into());
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(
                GeometryError::Degenerate(format!("invalid cell size {cell_size}")).into(),
            );
        }
        Ok(Self { origin, cell_size, cols, rows, values })
    }

    /// Creates a single-cell grid with a uniform elevation covering `extent`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for a non-positive extent.
    pub fn flat(origin: Point2, extent: f64, elevation: f64) -> Result<Self> {
        Self::new(origin, extent, 1, 1, vec![elevation])
    }

    /// Samples the surface at a map-plane coordinate by bilinear
    /// interpolation between cell centers, clamped to the grid edges.
    /// Deterministic: identical inputs always yield the same value.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample(&self, p: Point2) -> f64 {
        // Fractional cell-center coordinates, clamped to the value lattice.
        let u = ((p.x - self.origin.x) / self.cell_size - 0.5)
            .clamp(0.0, (self.cols - 1) as f64);
        let v = ((p.y - self.origin.y) / self.cell_size - 0.5)
            .clamp(0.0, (self.rows - 1) as f64);

        let i0 = u.floor() as usize;
        let j0 = v.floor() as usize;
        let i1 = (i0 + 1).min(self.cols - 1);
        let j1 = (j0 + 1).min(self.rows - 1);
        let fu = u - i0 as f64;
        let fv = v - j0 as f64;

        let at = |i: usize, j: usize| self.values[j * self.cols + i];
        let bottom = at(i0, j0) * (1.0 - fu) + at(i1, j0) * fu;
        let top = at(i0, j1) * (1.0 - fu) + at(i1, j1) * fu;
        bottom * (1.0 - fv) + top * fv
    }
}

/// The mapped footprint of one unit: one or more polygon rings.
#[derive(Debug, Clone)]
pub struct UnitFootprint {
    pub unit_name: String,
    pub rings: Vec<Vec<Point2>>,
}

impl UnitFootprint {
    /// Creates a footprint from polygon rings (closing edge implied).
    #[must_use]
    pub fn new(unit_name: impl Into<String>, rings: Vec<Vec<Point2>>) -> Self {
        Self { unit_name: unit_name.into(), rings }
    }

    /// Even-odd ray-cast containment test over all rings.
    #[must_use]
    pub fn contains(&self, p: Point2) -> bool {
        let mut inside = false;
        for ring in &self.rings {
            let n = ring.len();
            if n < 3 {
                continue;
            }
            let mut j = n - 1;
            for i in 0..n {
                let (a, b) = (ring[i], ring[j]);
                if (a.y > p.y) != (b.y > p.y)
                    && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x
                {
                    inside = !inside;
                }
                j = i;
            }
        }
        inside
    }
}

/// The geology map layers this core queries: per-unit footprint polygons and
/// a terrain elevation surface. Read-only, externally owned.
#[derive(Debug, Clone)]
pub struct MapData {
    footprints: HashMap<String, UnitFootprint>,
    elevation: ElevationGrid,
}

impl MapData {
    #[must_use]
    pub fn new(footprints: Vec<UnitFootprint>, elevation: ElevationGrid) -> Self {
        let footprints = footprints
            .into_iter()
            .map(|f| (f.unit_name.clone(), f))
            .collect();
        Self { footprints, elevation }
    }

    /// The mapped footprint of `unit_name`, if the map carries one.
    #[must_use]
    pub fn footprint_of(&self, unit_name: &str) -> Option<&UnitFootprint> {
        self.footprints.get(unit_name)
    }

    /// Ground elevation at a map-plane coordinate.
    #[must_use]
    pub fn elevation_at(&self, p: Point2) -> f64 {
        self.elevation.sample(p)
    }
}
