use dioxus::prelude::*;

use parkfinder_shared::models::{Coordinate, ParkingLot};
use parkfinder_shared::region::MapRegion;

use crate::state::{ScreenEvent, ScreenState};
use crate::theme;

/// CSS placement for a marker, or `None` when the lot falls outside
/// the visible region (skipped instead of drawn off-canvas).
fn marker_style(region: &MapRegion, coordinate: Coordinate) -> Option<String> {
    let (x, y) = region.relative_position(coordinate)?;
    Some(format!(
        "left: {:.2}%; top: {:.2}%; font-size: {}px;",
        x * 100.0,
        y * 100.0,
        theme::SIZES.font
    ))
}

fn marker_border(selected: bool) -> String {
    let color = if selected {
        theme::COLORS.red
    } else {
        theme::COLORS.white
    };
    format!("border-color: {color};")
}

/// The map-widget boundary: consumes a region plus the lot list and
/// renders one pin per lot. Tile imagery stays out of scope; the
/// container is a styled canvas.
#[component]
pub fn MapView(region: MapRegion, state: Signal<ScreenState>) -> Element {
    let selected = state.read().selected_lot_id();
    let lots: Vec<ParkingLot> = state.read().lots().to_vec();

    rsx! {
        div { class: "map-view",
            for lot in lots {
                {
                    let id = lot.id;
                    let is_selected = selected == Some(id);
                    let placement = marker_style(&region, lot.coordinate);
                    rsx! {
                        if let Some(placement) = placement {
                            button {
                                class: if is_selected { "marker selected" } else { "marker" },
                                style: "{placement} {marker_border(is_selected)}",
                                onclick: move |_| state.write().apply(ScreenEvent::MarkerTapped(id)),
                                span { class: "marker-price", "${lot.price}" }
                                span { class: "marker-status", "{lot.availability()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
