use spade::{
    DelaunayTriangulation, HasPosition, Point2 as SpadePoint2, Triangulation,
};
use tracing::debug;

use crate::math::{Point2, Vector3, TOLERANCE};
use crate::observations::StructuralObservation;

/// A bedding-plane orientation: dip in degrees from horizontal, dip-direction
/// azimuth in degrees clockwise from north, normalized to [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub dip: f64,
    pub dip_direction: f64,
}

impl Orientation {
    /// The upward unit normal of the bedding plane.
    ///
    /// With dip θ and dip-direction α (clockwise from north, i.e. from +y
    /// towards +x): `n = (sin θ · sin α, sin θ · cos α, cos θ)`.
    #[must_use]
    pub fn unit_normal(&self) -> Vector3 {
        let dip = self.dip.to_radians();
        let az = self.dip_direction.to_radians();
        Vector3::new(dip.sin() * az.sin(), dip.sin() * az.cos(), dip.cos())
    }

    /// Recomposes an orientation from a (not necessarily unit) upward plane
    /// normal. Returns `None` for a vanishing normal.
    #[must_use]
    pub fn from_normal(normal: Vector3) -> Option<Self> {
        let len = normal.norm();
        if !len.is_finite() || len < TOLERANCE {
            return None;
        }
        let n = normal / len;
        let dip = n.z.clamp(-1.0, 1.0).acos().to_degrees();
        let dip_direction = n.x.atan2(n.y).to_degrees().rem_euclid(360.0);
        Some(Self { dip, dip_direction })
    }
}

struct OrientationVertex {
    position: SpadePoint2<f64>,
    normal: Vector3,
}

impl HasPosition for OrientationVertex {
    type Scalar = f64;

    fn position(&self) -> SpadePoint2<f64> {
        self.position
    }
}

/// A continuous estimate of the bedding orientation field over the map plane,
/// built from scattered bedding observations.
///
/// Each observation is decomposed into the unit normal of its plane, so that
/// interpolation never averages raw azimuths across the 0°/360° boundary.
/// Queries inside the convex hull of the observations use natural-neighbor
/// interpolation over a Delaunay triangulation of the observation sites;
/// queries outside the hull (and degenerate observation sets, where
/// natural-neighbor coordinates are undefined) answer with the nearest
/// observation. Both paths are deterministic.
pub struct OrientationField {
    triangulation: DelaunayTriangulation<OrientationVertex>,
}

impl OrientationField {
    /// Builds the field from structural observations.
    ///
    /// Non-bedding observations are filtered out. An observation whose
    /// coordinates spade cannot index is a malformed sample: it is discarded
    /// and never aborts field construction. Duplicate positions keep the
    /// last observation inserted.
    #[must_use]
    pub fn from_observations(observations: &[StructuralObservation]) -> Self {
        let mut triangulation = DelaunayTriangulation::new();
        for obs in observations.iter().filter(|o| o.is_bedding()) {
            let orientation = Orientation { dip: obs.dip, dip_direction: obs.dip_direction };
            let vertex = OrientationVertex {
                position: SpadePoint2::new(obs.position.x, obs.position.y),
                normal: orientation.unit_normal(),
            };
            if let Err(e) = triangulation.insert(vertex) {
                debug!(id = obs.id, error = %e, "discarding unindexable observation");
            }
        }
        Self { triangulation }
    }

    /// Number of observations backing the field.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangulation.num_vertices()
    }

    /// Whether the field has no observations at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangulation.num_vertices() == 0
    }

    /// Interpolated orientation at a query location, or `None` when the
    /// field holds no observations. A field with a single observation
    /// answers every query with that observation's orientation.
    #[must_use]
    pub fn orientation_at(&self, p: Point2) -> Option<Orientation> {
        if self.is_empty() {
            return None;
        }
        let q = SpadePoint2::new(p.x, p.y);

        // Natural-neighbor coordinates only exist where the triangulation
        // has inner faces; fewer than three observations, or an all-collinear
        // set, must go straight to the nearest site.
        if self.triangulation.num_inner_faces() > 0 {
            let nn = self.triangulation.natural_neighbor();
            let interpolated = nn
                .interpolate(|v| v.data().normal.x, q)
                .zip(nn.interpolate(|v| v.data().normal.y, q))
                .zip(nn.interpolate(|v| v.data().normal.z, q))
                .and_then(|((x, y), z)| Orientation::from_normal(Vector3::new(x, y, z)));
            if interpolated.is_some() {
                return interpolated;
            }
        }

        // Outside the convex hull, or a degenerate observation set.
        self.triangulation
            .nearest_neighbor(q)
            .and_then(|v| Orientation::from_normal(v.data().normal))
    }
}
