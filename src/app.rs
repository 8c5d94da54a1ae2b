use dioxus::document;
use dioxus::prelude::*;

use crate::prefs;
use crate::screens::{CalculatorScreen, HeaderBar};
use crate::theme::spacing;
use crate::widgets::PageBackground;

#[component]
pub fn App() -> Element {
    let mut is_dark = use_signal(prefs::load_dark_mode_pref);

    // Persist on every change and mirror the state onto the body class,
    // so external styling can follow the toggle.
    use_effect(move || {
        let dark = is_dark();
        prefs::save_dark_mode_pref(dark);
        let op = if dark { "add" } else { "remove" };
        let js = format!("document.body.classList.{op}('dark-mode');");
        spawn(async move {
            if let Err(err) = document::eval(&js).await {
                log::warn!("could not update body theme class: {err:?}");
            }
        });
    });

    let mode = if is_dark() { "dark" } else { "light" };

    rsx! {
        PageBackground { is_dark: is_dark(),
            div {
                class: "app {mode}",
                style: "font-family: system-ui, sans-serif; min-height: 100vh; display: flex; flex-direction: column;",
                HeaderBar {
                    is_dark: is_dark(),
                    on_toggle: move |_| {
                        let flipped = !is_dark();
                        is_dark.set(flipped);
                    },
                }
                main { style: "flex: 1; padding-top: {spacing::LG};",
                    CalculatorScreen { is_dark: is_dark() }
                }
            }
        }
    }
}
