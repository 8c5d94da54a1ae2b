use dioxus::prelude::*;
use crate::theme::AppColors;

#[component]
pub fn PageBackground(is_dark: bool, children: Element) -> Element {
    let (bg_start, bg_end) = if is_dark {
        (AppColors::DARK_SURFACE, "#181410")
    } else {
        (AppColors::LIGHT_SURFACE, "#F0E4D2")
    };
    rsx! {
        div {
            style: "min-height: 100vh; background: linear-gradient(to bottom, {bg_start}, {bg_end});",
            {children}
        }
    }
}
