use super::Point2;

/// Returns the closest point to `p` on the segment from `a` to `b`.
#[must_use]
pub fn closest_point_on_segment(p: Point2, a: Point2, b: Point2) -> Point2 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return a;
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    Point2::new(a.x + t * dx, a.y + t * dy)
}

/// Returns the minimum distance from point `p` to the segment from `a` to `b`.
#[must_use]
pub fn point_to_segment_dist(p: Point2, a: Point2, b: Point2) -> f64 {
    let c = closest_point_on_segment(p, a, b);
    ((p.x - c.x).powi(2) + (p.y - c.y).powi(2)).sqrt()
}

/// Finds the closest point to `p` over all segments of an open polyline,
/// together with its distance. Returns `None` for a polyline with fewer than
/// one vertex; a single-vertex polyline answers with that vertex.
///
/// Ties between segments resolve to the earliest segment in vertex order, so
/// the result is deterministic for identical inputs.
#[must_use]
pub fn closest_point_on_polyline(p: Point2, vertices: &[Point2]) -> Option<(Point2, f64)> {
    let first = *vertices.first()?;
    if vertices.len() == 1 {
        let d = ((p.x - first.x).powi(2) + (p.y - first.y).powi(2)).sqrt();
        return Some((first, d));
    }

    let mut best_point = first;
    let mut best_dist = f64::INFINITY;
    for pair in vertices.windows(2) {
        let c = closest_point_on_segment(p, pair[0], pair[1]);
        let d = ((p.x - c.x).powi(2) + (p.y - c.y).powi(2)).sqrt();
        if d < best_dist {
            best_dist = d;
            best_point = c;
        }
    }
    Some((best_point, best_dist))
}

/// Resamples an open polyline at a fixed arc-length `spacing`, always
/// including the first vertex. The last vertex is appended if the walk did
/// not land on it, so short contacts still yield their endpoints.
///
/// Zero or negative spacing returns the vertices unchanged.
#[must_use]
pub fn resample_polyline(vertices: &[Point2], spacing: f64) -> Vec<Point2> {
    if vertices.len() < 2 || spacing <= 0.0 {
        return vertices.to_vec();
    }

    let mut out = vec![vertices[0]];
    // Distance still to walk before emitting the next sample.
    let mut remaining = spacing;

    for pair in vertices.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let seg_len = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();
        if seg_len < 1e-20 {
            continue;
        }
        let mut walked = 0.0;
        while remaining <= seg_len - walked {
            walked += remaining;
            let t = walked / seg_len;
            out.push(Point2::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y)));
            remaining = spacing;
        }
        remaining -= seg_len - walked;
    }

    let last = vertices[vertices.len() - 1];
    let tail = out[out.len() - 1];
    if ((last.x - tail.x).powi(2) + (last.y - tail.y).powi(2)).sqrt() > 1e-10 {
        out.push(last);
    }
    out
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn segment_dist_perpendicular_projection() {
        // Point (1, 1) to segment (0,0)→(2,0). Closest at (1,0), dist = 1.
        let d = point_to_segment_dist(
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
        );
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_endpoint_closest() {
        let d = point_to_segment_dist(
            Point2::new(-1.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
        );
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_degenerate() {
        // Zero-length segment: distance is point-to-point.
        let d = point_to_segment_dist(
            Point2::new(3.0, 4.0),
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
        );
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn closest_on_polyline_middle_segment() {
        let verts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
        ];
        let (c, d) = closest_point_on_polyline(Point2::new(3.0, 1.0), &verts)
            .expect("non-empty polyline");
        assert!((c.x - 2.0).abs() < TOL && (c.y - 1.0).abs() < TOL);
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn closest_on_polyline_empty_and_single() {
        assert!(closest_point_on_polyline(Point2::new(0.0, 0.0), &[]).is_none());
        let (c, d) = closest_point_on_polyline(Point2::new(3.0, 4.0), &[Point2::new(0.0, 0.0)])
            .expect("single vertex");
        assert!((c.x).abs() < TOL && (c.y).abs() < TOL);
        assert!((d - 5.0).abs() < TOL);
    }

    #[test]
    fn resample_even_spacing() {
        let verts = vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)];
        let pts = resample_polyline(&verts, 2.5);
        assert_eq!(pts.len(), 5);
        assert!((pts[1].x - 2.5).abs() < TOL);
        assert!((pts[4].x - 10.0).abs() < TOL);
    }

    #[test]
    fn resample_keeps_endpoints_when_spacing_exceeds_length() {
        let verts = vec![Point2::new(0.0, 0.0), Point2::new(3.0, 0.0)];
        let pts = resample_polyline(&verts, 100.0);
        assert_eq!(pts.len(), 2);
        assert!((pts[1].x - 3.0).abs() < TOL);
    }

    #[test]
    fn resample_crosses_vertices() {
        // Two 5-unit segments, spacing 4: samples at arc lengths 0, 4, 8, 10.
        let verts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(5.0, 5.0),
        ];
        let pts = resample_polyline(&verts, 4.0);
        assert_eq!(pts.len(), 4);
        assert!((pts[1].x - 4.0).abs() < TOL);
        assert!((pts[2].x - 5.0).abs() < TOL && (pts[2].y - 3.0).abs() < TOL);
        assert!((pts[3].y - 5.0).abs() < TOL);
    }
}
