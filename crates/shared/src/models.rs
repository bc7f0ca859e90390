use serde::{Deserialize, Serialize};

/// A WGS84 point. Only used for marker placement; no geodesic math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingLot {
    pub id: u32,
    pub title: String,
    /// Hourly rate in dollars.
    pub price: f64,
    pub rating: f64,
    pub total_spots: u32,
    pub free_spots: u32,
    pub coordinate: Coordinate,
    pub description: String,
}

impl ParkingLot {
    /// Price shown on the buy action: double the hourly rate.
    pub fn display_price(&self) -> f64 {
        self.price * 2.0
    }

    /// "(free/total)" availability label shown on map markers.
    pub fn availability(&self) -> String {
        format!("({}/{})", self.free_spots, self.total_spots)
    }
}

/// The three statically seeded downtown lots. There is no lot
/// lifecycle: this list is the entire data set for the screen.
pub fn seed_lots() -> Vec<ParkingLot> {
    vec![
        ParkingLot {
            id: 1,
            title: "Parking 1".to_string(),
            price: 5.0,
            rating: 4.2,
            total_spots: 20,
            free_spots: 10,
            coordinate: Coordinate {
                latitude: 37.78735,
                longitude: -122.4334,
            },
            description: "Open-air lot a block off Union Square. Pay at the kiosk, \
                          no height limit."
                .to_string(),
        },
        ParkingLot {
            id: 2,
            title: "Parking 2".to_string(),
            price: 7.0,
            rating: 3.9,
            total_spots: 14,
            free_spots: 19,
            coordinate: Coordinate {
                latitude: 37.78845,
                longitude: -122.4344,
            },
            description: "Covered garage with a 24/7 attendant and EV chargers on \
                          the first level."
                .to_string(),
        },
        ParkingLot {
            id: 3,
            title: "Parking 3".to_string(),
            price: 9.0,
            rating: 3.2,
            total_spots: 10,
            free_spots: 3,
            coordinate: Coordinate {
                latitude: 37.78615,
                longitude: -122.4314,
            },
            description: "Valet stand under the hotel tower. Clearance 6'8\", \
                          retrieval can take a few minutes at peak."
                .to_string(),
        },
    ]
}
