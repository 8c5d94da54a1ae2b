//! Bill/tip/total arithmetic: keystroke sanitization, the two-filled
//! derivation rule, and the share summary. Pure functions over the raw
//! field texts, so everything here is testable without a running app.

/// One of the three amount fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Bill,
    Tip,
    Total,
}

/// Raw field texts as the user typed them, already sanitized.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Amounts {
    pub bill: String,
    pub tip: String,
    pub total: String,
}

impl Amounts {
    fn set(&mut self, field: Field, text: String) {
        match field {
            Field::Bill => self.bill = text,
            Field::Tip => self.tip = text,
            Field::Total => self.total = text,
        }
    }
}

/// Keystroke filter: digits with at most one decimal point, and the
/// text must still parse as a number ("12." and ".5" do, a lone "."
/// does not). Empty is allowed so a field can be cleared. Anything
/// else (letters, signs, a second dot) means the keystroke is dropped.
pub fn is_valid_amount(text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    text.chars().all(|c| c.is_ascii_digit() || c == '.')
        && text.matches('.').count() <= 1
        && text.parse::<f64>().is_ok()
}

/// Empty or unparsable text counts as zero.
pub fn parse_amount(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(0.0)
}

/// A field takes part in derivation only when the user actually typed
/// something and it parses to a positive amount.
pub fn is_filled(text: &str) -> bool {
    !text.is_empty() && parse_amount(text) > 0.0
}

fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Fill in the missing field when exactly two of the three are filled.
///
/// With 0, 1 or 3 filled fields the triple is returned unchanged; once
/// all three hold values nothing is overwritten, which keeps the last
/// user-edited field from being clobbered. A derived bill or tip is
/// only written when it comes out positive; the derived total is a sum
/// of two positives and is always written.
pub fn derive(amounts: &Amounts) -> Amounts {
    let bill = parse_amount(&amounts.bill);
    let tip = parse_amount(&amounts.tip);
    let total = parse_amount(&amounts.total);

    let has_bill = is_filled(&amounts.bill);
    let has_tip = is_filled(&amounts.tip);
    let has_total = is_filled(&amounts.total);

    let filled = [has_bill, has_tip, has_total].iter().filter(|f| **f).count();

    let mut next = amounts.clone();
    if filled != 2 {
        return next;
    }

    if !has_bill {
        let computed = total - tip;
        if computed > 0.0 {
            next.bill = format_amount(computed);
        }
    } else if !has_tip {
        let computed = total - bill;
        if computed > 0.0 {
            next.tip = format_amount(computed);
        }
    } else {
        next.total = format_amount(bill + tip);
    }
    next
}

/// Apply one edit to a field: sanitize, write the raw text, derive.
/// A rejected edit returns the triple untouched.
pub fn apply_edit(current: &Amounts, field: Field, text: &str) -> Amounts {
    if !is_valid_amount(text) {
        return current.clone();
    }
    let mut next = current.clone();
    next.set(field, text.to_string());
    derive(&next)
}

/// Multi-line summary for the share sheet. Only fields with a positive
/// parsed value are listed, each as "Label: $X.XX".
pub fn share_summary(amounts: &Amounts) -> String {
    let mut out = String::from("Bill 🍕 Tip Calculator Results:\n\n");
    for (label, text) in [
        ("Bill", &amounts.bill),
        ("Tip", &amounts.tip),
        ("Total", &amounts.total),
    ] {
        let value = parse_amount(text);
        if value > 0.0 {
            out.push_str(&format!("{}: ${}\n", label, format_amount(value)));
        }
    }
    out
}
