use serde::{Deserialize, Serialize};

use crate::models::Coordinate;

/// A visible map window: center point plus latitude/longitude spans.
/// This is the contract consumed by the map-rendering widget; tile
/// imagery is outside this crate's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.relative_position(coordinate).is_some()
    }

    /// Project a coordinate into fractional (x, y) inside the region,
    /// x growing east and y growing south (screen orientation).
    /// Returns `None` for degenerate spans or points outside the window.
    pub fn relative_position(&self, coordinate: Coordinate) -> Option<(f64, f64)> {
        if self.latitude_delta <= 0.0 || self.longitude_delta <= 0.0 {
            return None;
        }
        let west = self.longitude - self.longitude_delta / 2.0;
        let north = self.latitude + self.latitude_delta / 2.0;
        let x = (coordinate.longitude - west) / self.longitude_delta;
        let y = (north - coordinate.latitude) / self.latitude_delta;
        if (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y) {
            Some((x, y))
        } else {
            None
        }
    }
}

/// Downtown San Francisco, framing all three seeded lots.
pub fn default_region() -> MapRegion {
    MapRegion {
        latitude: 37.78825,
        longitude: -122.4324,
        latitude_delta: 0.0122,
        longitude_delta: 0.0121,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_lots;

    #[test]
    fn test_center_projects_to_middle() {
        let region = default_region();
        let center = Coordinate {
            latitude: region.latitude,
            longitude: region.longitude,
        };
        let (x, y) = region.relative_position(center).unwrap();
        assert!((x - 0.5).abs() < 1e-9);
        assert!((y - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_north_west_corner_projects_to_origin() {
        let region = default_region();
        let corner = Coordinate {
            latitude: region.latitude + region.latitude_delta / 2.0,
            longitude: region.longitude - region.longitude_delta / 2.0,
        };
        let (x, y) = region.relative_position(corner).unwrap();
        assert!((x - 0.0).abs() < 1e-9);
        assert!((y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_outside_region_is_none() {
        let region = default_region();
        let far = Coordinate {
            latitude: 40.0,
            longitude: -74.0,
        };
        assert_eq!(region.relative_position(far), None);
        assert!(!region.contains(far));
    }

    #[test]
    fn test_degenerate_region_is_none() {
        let region = MapRegion {
            latitude: 37.0,
            longitude: -122.0,
            latitude_delta: 0.0,
            longitude_delta: 0.0121,
        };
        let center = Coordinate {
            latitude: 37.0,
            longitude: -122.0,
        };
        assert_eq!(region.relative_position(center), None);
    }

    #[test]
    fn test_default_region_frames_all_seeded_lots() {
        let region = default_region();
        for lot in seed_lots() {
            assert!(
                region.contains(lot.coordinate),
                "lot {} should sit inside the default region",
                lot.id
            );
        }
    }
}
