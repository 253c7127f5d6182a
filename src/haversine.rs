use geo::Point;
use geo::{Distance, Haversine};

/// Great circle distance in metres between 2 positions, in degrees.
pub fn haversine_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    Haversine.distance(Point::new(lat1, lon1), Point::new(lat2, lon2))
}

pub fn haversine_m_fpair(lat_lon1: (f64, f64), lat_lon2: (f64, f64)) -> f64 {
    haversine_m(lat_lon1.0, lat_lon1.1, lat_lon2.0, lat_lon2.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_for_same_point() {
        assert_eq!(haversine_m(37.4205, -122.2046, 37.4205, -122.2046), 0.);
    }

    #[test]
    fn known_pair() {
        let d = haversine_m(37.4205, -122.2046, 37.5205, -122.3046);
        assert_eq!(d.round(), 12604.);
    }

    #[test]
    fn fpair_matches() {
        let a = (37.4205, -122.2046);
        let b = (37.5205, -122.3046);
        assert_eq!(haversine_m_fpair(a, b), haversine_m(a.0, a.1, b.0, b.1));
        // distance is symmetric
        assert_eq!(haversine_m_fpair(a, b), haversine_m_fpair(b, a));
    }
}
