use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::state::{DismissReason, ScreenEvent, ScreenState};
use crate::theme;

/// Downward travel in pixels on the grab handle that counts as a
/// swipe-to-dismiss. Shorter drags are treated as taps and ignored.
const SWIPE_DISMISS_PX: f64 = 80.0;

fn swipe_closes(start_y: f64, end_y: f64) -> bool {
    end_y - start_y >= SWIPE_DISMISS_PX
}

/// Modal booking sheet. Renders nothing while no detail is active;
/// dismisses on close button, backdrop tap, or swipe-down.
#[component]
pub fn DetailSheet(state: Signal<ScreenState>) -> Element {
    let mut touch_start_y = use_signal(|| None::<f64>);
    let mut touch_last_y = use_signal(|| None::<f64>);

    let Some(lot) = state.read().active_detail().cloned() else {
        return rsx! {};
    };
    let hours = state.read().booked_hours(lot.id);
    let lot_id = lot.id;

    rsx! {
        div {
            class: "sheet-backdrop",
            onclick: move |_| {
                state.write().apply(ScreenEvent::DetailDismissed(DismissReason::Backdrop));
            },

            div {
                class: "sheet",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                div {
                    class: "sheet-handle",

                    ontouchstart: move |evt: Event<TouchData>| {
                        let touches = evt.data().touches();
                        if touches.len() == 1 {
                            let y = touches[0].client_coordinates().y;
                            touch_start_y.set(Some(y));
                            touch_last_y.set(Some(y));
                        }
                    },

                    ontouchmove: move |evt: Event<TouchData>| {
                        let touches = evt.data().touches();
                        if touches.len() == 1 {
                            touch_last_y.set(Some(touches[0].client_coordinates().y));
                        }
                    },

                    ontouchend: move |_evt: Event<TouchData>| {
                        let start = *touch_start_y.read();
                        let end = *touch_last_y.read();
                        touch_start_y.set(None);
                        touch_last_y.set(None);
                        if let (Some(start), Some(end)) = (start, end) {
                            if swipe_closes(start, end) {
                                state.write().apply(
                                    ScreenEvent::DetailDismissed(DismissReason::SwipeDown),
                                );
                            }
                        }
                    },

                    ontouchcancel: move |_evt: Event<TouchData>| {
                        touch_start_y.set(None);
                        touch_last_y.set(None);
                    },
                }

                div { class: "sheet-header",
                    h2 { "{lot.title}" }
                    button {
                        class: "sheet-close",
                        "aria-label": "Close",
                        style: "color: {theme::COLORS.gray}; font-size: {theme::SIZES.icon * 1.5}px;",
                        onclick: move |_| {
                            state.write().apply(
                                ScreenEvent::DetailDismissed(DismissReason::CloseButton),
                            );
                        },
                        "\u{00d7}"
                    }
                }

                p { class: "sheet-description", "{lot.description}" }

                div { class: "sheet-stats",
                    div { class: "stat",
                        span { class: "label", "Price" }
                        span { class: "value", "${lot.price}/hr" }
                    }
                    div { class: "stat",
                        span { class: "label", "Rating" }
                        span { class: "value", "\u{2605} {lot.rating}" }
                    }
                    div { class: "stat",
                        span { class: "label", "Spots" }
                        span { class: "value", "{lot.free_spots}/{lot.total_spots} free" }
                    }
                    div { class: "stat",
                        span { class: "label", "Booked" }
                        span { class: "value", "{hours} hrs" }
                    }
                }

                // Placeholder CTA: no payment flow behind it
                button {
                    class: "pay",
                    onclick: move |_| info!(lot_id, "pay tapped"),
                    "Proceed to pay $20"
                }
            }
        }
    }
}
