//! Spherical-earth distance and bearing

use super::GpsCoordinatePair;

/// Mean earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine great-circle distance in meters
pub fn distance_meters(a: &GpsCoordinatePair, b: &GpsCoordinatePair) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = b.longitude.to_radians() - a.longitude.to_radians();
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Forward azimuth from `a` to `b`, degrees clockwise from north in `[0, 360)`
pub fn heading_degrees(a: &GpsCoordinatePair, b: &GpsCoordinatePair) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let dlon = b.longitude.to_radians() - a.longitude.to_radians();
    let y = dlon.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlon.cos();
    let bearing = (y.atan2(x).to_degrees() + 360.0) % 360.0;
    // -0.0 + 360 can round to exactly 360
    if bearing >= 360.0 {
        0.0
    } else {
        bearing
    }
}

/// Summed distance between consecutive fixes, skipping no-fix samples
pub fn path_length_meters<'a, I>(points: I) -> f64
where
    I: IntoIterator<Item = &'a GpsCoordinatePair>,
{
    let mut total = 0.0;
    let mut previous: Option<&GpsCoordinatePair> = None;
    for point in points.into_iter().filter(|p| !p.is_zero()) {
        if let Some(prev) = previous {
            total += distance_meters(prev, point);
        }
        previous = Some(point);
    }
    total
}

/// Heading at each point towards the next valid fix
///
/// Output is index-aligned with `points`. No-fix samples and the final fix
/// carry the most recent heading; points before the first heading is known
/// get `None`.
pub fn track_headings(points: &[GpsCoordinatePair]) -> Vec<Option<f64>> {
    let valid: Vec<usize> = points
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_zero())
        .map(|(i, _)| i)
        .collect();

    let mut headings = vec![None; points.len()];
    for pair in valid.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        headings[from] = Some(heading_degrees(&points[from], &points[to]));
    }

    let mut last = None;
    for heading in headings.iter_mut() {
        match heading {
            Some(h) => last = Some(*h),
            None => *heading = last,
        }
    }
    headings
}
