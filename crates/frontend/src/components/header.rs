use dioxus::prelude::*;

use crate::theme;

/// Static banner. Real device geolocation is an external collaborator;
/// the detected city is a fixed label here.
#[component]
pub fn Header() -> Element {
    let icon_style = format!(
        "font-size: {}px; color: {};",
        theme::SIZES.icon * 1.5,
        theme::COLORS.black
    );

    rsx! {
        div { class: "header",
            div { class: "header-location",
                span { class: "header-label", "Detected location" }
                span { class: "header-city", "San Francisco, US" }
            }
            button {
                class: "header-menu",
                "aria-label": "Menu",
                style: "{icon_style}",
                "\u{2630}"
            }
        }
    }
}
