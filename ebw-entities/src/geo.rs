use std::fmt;

// The Earth's radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographical position given as latitude/longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return None;
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return None;
        }
        Some(Self { lat, lng })
    }

    pub const fn lat_deg(&self) -> f64 {
        self.lat
    }

    pub const fn lng_deg(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance (haversine).
    pub fn distance(&self, other: &MapPoint) -> Distance {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlng = (other.lng - self.lng).to_radians();

        let a = (dlat / 2.0).sin() * (dlat / 2.0).sin()
            + lat1.cos() * lat2.cos() * (dlng / 2.0).sin() * (dlng / 2.0).sin();
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_kilometers(EARTH_RADIUS_KM * c)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// A non-negative distance in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_kilometers(km: f64) -> Self {
        Self(km)
    }

    pub const fn to_kilometers(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{:.1} km", self.0)
    }
}
