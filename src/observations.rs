use crate::math::Point2;

/// Feature type of a structural measurement. Thickness estimation operates
/// on bedding measurements only; other structure types are filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureType {
    Bedding,
    Foliation,
    Lineation,
    Other,
}

/// A structural orientation measurement at a map location.
///
/// `dip` is degrees from horizontal in [0, 90]; `dip_direction` is the
/// azimuth of maximum slope in degrees clockwise from north, normalized to
/// [0, 360).
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralObservation {
    pub position: Point2,
    pub dip: f64,
    pub dip_direction: f64,
    pub id: u64,
    pub feature_type: FeatureType,
}

impl StructuralObservation {
    /// Creates a bedding observation from dip and dip-direction.
    ///
    /// Returns `None` for a malformed measurement: non-finite coordinates or
    /// angles, or dip outside [0, 90]. Malformed measurements are discarded
    /// by callers, never escalated.
    #[must_use]
    pub fn new(position: Point2, dip: f64, dip_direction: f64, id: u64) -> Option<Self> {
        if !position.x.is_finite()
            || !position.y.is_finite()
            || !dip.is_finite()
            || !dip_direction.is_finite()
            || !(0.0..=90.0).contains(&dip)
        {
            return None;
        }
        Some(Self {
            position,
            dip,
            dip_direction: dip_direction.rem_euclid(360.0),
            id,
            feature_type: FeatureType::Bedding,
        })
    }

    /// Creates a bedding observation from dip and strike, using the
    /// right-hand convention `dip_direction = strike + 90°`.
    #[must_use]
    pub fn from_strike(position: Point2, dip: f64, strike: f64, id: u64) -> Option<Self> {
        Self::new(position, dip, strike + 90.0, id)
    }

    /// Tags the observation with a feature type other than bedding.
    #[must_use]
    pub fn with_feature_type(mut self, feature_type: FeatureType) -> Self {
        self.feature_type = feature_type;
        self
    }

    /// Whether this observation participates in thickness estimation.
    #[must_use]
    pub fn is_bedding(&self) -> bool {
        self.feature_type == FeatureType::Bedding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn rejects_out_of_range_dip() {
        let p = Point2::new(0.0, 0.0);
        assert!(StructuralObservation::new(p, -1.0, 0.0, 1).is_none());
        assert!(StructuralObservation::new(p, 90.5, 0.0, 1).is_none());
        assert!(StructuralObservation::new(p, f64::NAN, 0.0, 1).is_none());
    }

    #[test]
    fn rejects_non_finite_position() {
        let p = Point2::new(f64::INFINITY, 0.0);
        assert!(StructuralObservation::new(p, 45.0, 90.0, 1).is_none());
    }

    #[test]
    fn normalizes_azimuth_into_range() {
        let p = Point2::new(0.0, 0.0);
        let obs = StructuralObservation::new(p, 45.0, 370.0, 1);
        assert!(obs.is_some_and(|o| (o.dip_direction - 10.0).abs() < TOL));
        let obs = StructuralObservation::new(p, 45.0, -10.0, 1);
        assert!(obs.is_some_and(|o| (o.dip_direction - 350.0).abs() < TOL));
    }

    #[test]
    fn strike_converts_to_dip_direction() {
        let p = Point2::new(0.0, 0.0);
        let obs = StructuralObservation::from_strike(p, 45.0, 300.0, 1);
        assert!(obs.is_some_and(|o| (o.dip_direction - 30.0).abs() < TOL));
    }

    #[test]
    fn bedding_filter() {
        let p = Point2::new(0.0, 0.0);
        let obs = StructuralObservation::new(p, 45.0, 90.0, 1)
            .map(|o| o.with_feature_type(FeatureType::Foliation));
        assert!(obs.is_some_and(|o| !o.is_bedding()));
    }
}
