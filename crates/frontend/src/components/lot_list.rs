use dioxus::prelude::*;

use parkfinder_shared::models::ParkingLot;

use crate::state::{ScreenEvent, ScreenState};
use crate::theme;

const LOT_LIST_ID: &str = "lot-list";

/// Hours offered by the per-card selector.
const HOUR_CHOICES: [u32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

fn list_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(LOT_LIST_ID)
}

/// Target offset for one-page-at-a-time paging. Clamps at both ends:
/// the list does not wrap around.
fn page_scroll_offset(current: f64, page_width: f64, max: f64, forward: bool) -> f64 {
    let target = if forward {
        current + page_width
    } else {
        current - page_width
    };
    target.clamp(0.0, max.max(0.0))
}

/// Scroll the card list by exactly one viewport width.
fn scroll_by_page(forward: bool) {
    let Some(el) = list_element() else { return };
    let page = f64::from(el.client_width());
    let max = f64::from(el.scroll_width() - el.client_width());
    let target = page_scroll_offset(f64::from(el.scroll_left()), page, max, forward);
    el.set_scroll_left(target as i32);
}

/// Horizontally paged lot summary cards, one per viewport width.
/// Card body tap selects the lot on the map; the buy action opens the
/// detail sheet.
#[component]
pub fn LotList(state: Signal<ScreenState>) -> Element {
    let lots: Vec<ParkingLot> = state.read().lots().to_vec();

    rsx! {
        div { class: "lot-list-wrap",
            button {
                class: "page-btn",
                "aria-label": "Previous lot",
                onclick: move |_| scroll_by_page(false),
                "\u{2039}"
            }
            div { id: LOT_LIST_ID, class: "lot-list",
                for lot in lots {
                    {
                        let id = lot.id;
                        let hours = state.read().booked_hours(id);
                        rsx! {
                            div {
                                class: "lot-card",
                                style: "padding: {theme::SIZES.base + 2.0}px;",
                                onclick: move |_| state.write().apply(ScreenEvent::MarkerTapped(id)),
                                div { class: "lot-card-info",
                                    p { class: "lot-card-title", "x {lot.total_spots} {lot.title}" }
                                    select {
                                        class: "hours-select",
                                        "aria-label": "Booked hours",
                                        value: "{hours}",
                                        onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                                        onchange: move |evt: Event<FormData>| {
                                            if let Ok(parsed) = evt.value().parse::<u32>() {
                                                state.write().apply(ScreenEvent::HoursSet {
                                                    lot_id: id,
                                                    hours: parsed,
                                                });
                                            }
                                        },
                                        for choice in HOUR_CHOICES {
                                            option {
                                                value: "{choice}",
                                                selected: hours == choice,
                                                "{choice}:00 hrs"
                                            }
                                        }
                                    }
                                    div { class: "lot-card-meta",
                                        span { class: "lot-card-price", "\u{1f3f7} ${lot.price}" }
                                        span { class: "lot-card-rating", "\u{2605} {lot.rating}" }
                                    }
                                }
                                button {
                                    class: "buy",
                                    onclick: move |evt: Event<MouseData>| {
                                        evt.stop_propagation();
                                        state.write().apply(ScreenEvent::DetailRequested(id));
                                    },
                                    div { class: "buy-total",
                                        span { class: "buy-price", "${lot.display_price()}" }
                                        span { class: "buy-hours", "{lot.price}x{hours} hrs" }
                                    }
                                    span { class: "buy-arrow", "\u{203a}" }
                                }
                            }
                        }
                    }
                }
            }
            button {
                class: "page-btn",
                "aria-label": "Next lot",
                onclick: move |_| scroll_by_page(true),
                "\u{203a}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DEFAULT_BOOKED_HOURS;

    #[test]
    fn test_page_forward_and_back() {
        assert!((page_scroll_offset(0.0, 320.0, 640.0, true) - 320.0).abs() < 1e-9);
        assert!((page_scroll_offset(320.0, 320.0, 640.0, false) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_page_clamps_at_start() {
        // No wraparound: paging back from the first card stays put
        assert!((page_scroll_offset(0.0, 320.0, 640.0, false) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_page_clamps_at_end() {
        assert!((page_scroll_offset(640.0, 320.0, 640.0, true) - 640.0).abs() < 1e-9);
        // Partial last page still clamps to max
        assert!((page_scroll_offset(500.0, 320.0, 640.0, true) - 640.0).abs() < 1e-9);
    }

    #[test]
    fn test_page_handles_unscrollable_list() {
        // A single card (or empty list) has max <= 0
        assert!((page_scroll_offset(0.0, 320.0, 0.0, true) - 0.0).abs() < 1e-9);
        assert!((page_scroll_offset(0.0, 320.0, -320.0, true) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_hour_choices_start_at_default() {
        assert_eq!(HOUR_CHOICES[0], DEFAULT_BOOKED_HOURS);
    }
}
