use dioxus::document;
use dioxus::prelude::*;

use crate::calc::{self, Amounts, Field};
use crate::share::{self, ShareOutcome};
use crate::theme::{spacing, AppColors};
use crate::widgets::ReceiptCard;

#[component]
pub fn CalculatorScreen(is_dark: bool) -> Element {
    let mut amounts = use_signal(Amounts::default);
    let mut focused = use_signal(|| Option::<Field>::None);
    let mut sharing = use_signal(|| false);
    let mut status = use_signal(|| Option::<String>::None);

    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let border = AppColors::border(is_dark);
    let error_color = AppColors::error(is_dark);

    rsx! {
        div { style: "max-width: 420px; margin: 0 auto; padding: {spacing::SCREEN_PADDING};",
            ReceiptCard { is_dark,
                div { style: "text-align: center; margin-bottom: {spacing::LG};",
                    div { style: "font-size: 1.25rem; font-weight: bold; letter-spacing: 2px; color: {on_surface};",
                        "🍕 PIZZA PALACE"
                    }
                    div { style: "font-size: 0.85rem; opacity: 0.7; color: {on_surface};",
                        "Tip Calculator"
                    }
                }
                AmountField {
                    is_dark,
                    label: "Bill Amount",
                    value: amounts().bill,
                    focused: focused() == Some(Field::Bill),
                    oninput: move |ev: FormEvent| amounts.set(calc::apply_edit(&amounts(), Field::Bill, &ev.value())),
                    onfocus: move |_| focused.set(Some(Field::Bill)),
                    onblur: move |_| focused.set(None),
                }
                AmountField {
                    is_dark,
                    label: "Tip Amount",
                    value: amounts().tip,
                    focused: focused() == Some(Field::Tip),
                    oninput: move |ev: FormEvent| amounts.set(calc::apply_edit(&amounts(), Field::Tip, &ev.value())),
                    onfocus: move |_| focused.set(Some(Field::Tip)),
                    onblur: move |_| focused.set(None),
                }
                div { style: "border-top: 1px dashed {border}; margin: {spacing::MD} 0;" }
                AmountField {
                    is_dark,
                    label: "Total Amount",
                    value: amounts().total,
                    focused: focused() == Some(Field::Total),
                    oninput: move |ev: FormEvent| amounts.set(calc::apply_edit(&amounts(), Field::Total, &ev.value())),
                    onfocus: move |_| focused.set(Some(Field::Total)),
                    onblur: move |_| focused.set(None),
                }
                p { style: "text-align: center; font-size: 0.8rem; opacity: 0.7; color: {on_surface}; margin: {spacing::MD} 0 0;",
                    "💡 Enter any two values to calculate the third"
                }
            }
            if let Some(ref msg) = status() {
                p { style: "color: {error_color}; font-size: 0.875rem; margin: {spacing::SM} {spacing::SM} 0;",
                    "{msg}"
                }
            }
            div { style: "display: flex; gap: {spacing::MD}; margin-top: {spacing::MD}; padding: 0 {spacing::SM};",
                button {
                    onclick: move |_| {
                        amounts.set(Amounts::default());
                        focused.set(None);
                        status.set(None);
                    },
                    style: "flex: 1; padding: 12px; border-radius: 8px; border: 1px solid {border}; background: transparent; color: {on_surface}; cursor: pointer;",
                    "🔄 Reset"
                }
                button {
                    disabled: sharing(),
                    onclick: move |_| {
                        // One share flow in flight at a time; clicks while
                        // the sheet is open are ignored.
                        if sharing() {
                            return;
                        }
                        sharing.set(true);
                        status.set(None);
                        let summary = calc::share_summary(&amounts());
                        spawn(async move {
                            match request_platform_share(&summary).await {
                                ShareOutcome::Shared | ShareOutcome::Copied => {}
                                ShareOutcome::Failed => {
                                    log::warn!("share fallback copy failed");
                                    status.set(Some(
                                        "Could not copy results to the clipboard".to_string(),
                                    ));
                                }
                            }
                            sharing.set(false);
                        });
                    },
                    style: "flex: 1; padding: 12px; border-radius: 8px; border: none; background: {primary}; color: #2B1505; font-weight: 600; cursor: pointer;",
                    if sharing() { "Sharing…" } else { "📤 Share" }
                }
            }
        }
    }
}

#[component]
fn AmountField(
    is_dark: bool,
    label: String,
    value: String,
    focused: bool,
    oninput: EventHandler<FormEvent>,
    onfocus: EventHandler<()>,
    onblur: EventHandler<()>,
) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let border = if focused {
        AppColors::primary(is_dark)
    } else {
        AppColors::border(is_dark)
    };

    rsx! {
        div { style: "margin-bottom: {spacing::MD};",
            label { style: "display: block; margin-bottom: {spacing::XS}; color: {on_surface}; font-size: 0.875rem;",
                "{label}"
            }
            div { style: "position: relative;",
                span { style: "position: absolute; left: 12px; top: 50%; transform: translateY(-50%); color: {on_surface}; opacity: 0.6;",
                    "$"
                }
                input {
                    r#type: "text",
                    inputmode: "decimal",
                    placeholder: "0.00",
                    value: "{value}",
                    oninput: move |ev| oninput.call(ev),
                    onfocus: move |_| onfocus.call(()),
                    onblur: move |_| onblur.call(()),
                    style: "width: 100%; padding: 12px 12px 12px 28px; border-radius: 8px; border: 1px solid {border}; background: transparent; color: {on_surface}; box-sizing: border-box;",
                }
            }
        }
    }
}

/// One round of the platform share flow. The whole round lives in a
/// single eval so the share sheet keeps the click's user-activation
/// context; a rejected share falls through to the clipboard, and a
/// successful copy surfaces the blocking confirmation. Same fallback
/// order as `share::share_or_copy`; keep the two in sync.
async fn request_platform_share(text: &str) -> ShareOutcome {
    let js = format!(
        r#"
        const title = {title};
        const text = {body};
        if (navigator.share) {{
            try {{
                await navigator.share({{ title: title, text: text }});
                return {shared};
            }} catch (err) {{
                // cancelled or failed; fall through to the clipboard
            }}
        }}
        try {{
            await navigator.clipboard.writeText(text);
            alert({confirmation});
            return {copied};
        }} catch (err) {{
            return "failed";
        }}
        "#,
        title = share::js_string(share::SHARE_TITLE),
        body = share::js_string(text),
        confirmation = share::js_string(share::COPIED_CONFIRMATION),
        shared = share::js_string(ShareOutcome::SHARED_TOKEN),
        copied = share::js_string(ShareOutcome::COPIED_TOKEN),
    );
    match document::eval(&js).await {
        Ok(value) => ShareOutcome::from_token(value.as_str().unwrap_or_default()),
        Err(err) => {
            log::warn!("share eval failed: {err:?}");
            ShareOutcome::Failed
        }
    }
}
