use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn HeaderBar(is_dark: bool, on_toggle: EventHandler<()>) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let border = AppColors::border(is_dark);
    let toggle_icon = if is_dark { "☀️" } else { "🌙" };

    rsx! {
        header {
            style: "display: flex; align-items: center; justify-content: space-between; padding: {spacing::MD} {spacing::LG}; border-bottom: 1px solid {border};",
            h1 { style: "font-size: 1.25rem; margin: 0; color: {on_surface};",
                "Bill 🍕 Tip Calculator"
            }
            button {
                aria_label: "Toggle dark mode",
                onclick: move |_| on_toggle.call(()),
                style: "background: none; border: none; font-size: 1.25rem; cursor: pointer; padding: {spacing::XS};",
                "{toggle_icon}"
            }
        }
    }
}
