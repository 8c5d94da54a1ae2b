use dioxus::prelude::*;
use crate::theme::spacing;

#[component]
pub fn ReceiptCard(is_dark: bool, children: Element) -> Element {
    let surface = if is_dark { "rgba(44,38,32,0.95)" } else { "rgba(255,253,248,0.97)" };
    rsx! {
        div {
            style: "background: {surface}; border-radius: 12px; padding: {spacing::CARD_PADDING}; box-shadow: 0 2px 12px rgba(0,0,0,0.15);",
            {children}
        }
    }
}
