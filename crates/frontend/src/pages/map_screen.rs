use dioxus::prelude::*;

use parkfinder_shared::models::seed_lots;
use parkfinder_shared::region::default_region;

use crate::components::detail_sheet::DetailSheet;
use crate::components::header::Header;
use crate::components::lot_list::LotList;
use crate::components::map_view::MapView;
use crate::state::ScreenState;

/// The parking discovery screen: map with pins, paged lot cards, and
/// the modal booking sheet. Owns all screen state; children receive
/// the `Signal` handle and mutate only through `ScreenState::apply`.
#[component]
pub fn MapScreen() -> Element {
    let state = use_signal(|| ScreenState::new(seed_lots()));
    let region = default_region();

    rsx! {
        div { class: "screen",
            Header {}
            MapView { region: region, state: state }
            LotList { state: state }
            DetailSheet { state: state }
        }
    }
}
