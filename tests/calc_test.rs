//! Derivation engine: sanitization, the two-filled rule, share summary.

use pretty_assertions::assert_eq;
use tiptally::calc::{self, Amounts, Field};

fn amounts(bill: &str, tip: &str, total: &str) -> Amounts {
    Amounts {
        bill: bill.to_string(),
        tip: tip.to_string(),
        total: total.to_string(),
    }
}

#[test]
fn derive_fills_total_from_bill_and_tip() {
    let result = calc::derive(&amounts("12.50", "2.50", ""));
    assert_eq!(result, amounts("12.50", "2.50", "15.00"));
}

#[test]
fn derive_fills_tip_from_bill_and_total() {
    let result = calc::derive(&amounts("20", "", "25"));
    assert_eq!(result, amounts("20", "5.00", "25"));
}

#[test]
fn derive_fills_bill_from_tip_and_total() {
    let result = calc::derive(&amounts("", "2.50", "15.00"));
    assert_eq!(result, amounts("12.50", "2.50", "15.00"));
}

#[test]
fn derive_suppresses_non_positive_tip() {
    // total <= bill would give a zero or negative tip; leave it empty
    let result = calc::derive(&amounts("20", "", "15"));
    assert_eq!(result, amounts("20", "", "15"));
    let result = calc::derive(&amounts("20", "", "20"));
    assert_eq!(result, amounts("20", "", "20"));
}

#[test]
fn derive_suppresses_non_positive_bill() {
    let result = calc::derive(&amounts("", "25", "20"));
    assert_eq!(result, amounts("", "25", "20"));
}

#[test]
fn derive_leaves_three_filled_fields_alone() {
    // Arithmetically inconsistent on purpose; nothing is rewritten.
    let triple = amounts("10", "5", "99");
    assert_eq!(calc::derive(&triple), triple);
}

#[test]
fn derive_needs_two_filled_fields() {
    let empty = amounts("", "", "");
    assert_eq!(calc::derive(&empty), empty);
    let one = amounts("10", "", "");
    assert_eq!(calc::derive(&one), one);
}

#[test]
fn zero_text_does_not_count_as_filled() {
    // non-empty but not positive
    let result = calc::derive(&amounts("0", "5", ""));
    assert_eq!(result, amounts("0", "5", ""));
    let result = calc::derive(&amounts("0.00", "5", ""));
    assert_eq!(result, amounts("0.00", "5", ""));
}

#[test]
fn derived_values_are_formatted_to_two_decimals() {
    // 0.1 + 0.2 must come out as "0.30", not "0.30000000000000004"
    let result = calc::derive(&amounts("0.1", "0.2", ""));
    assert_eq!(result.total, "0.30");
}

#[test]
fn apply_edit_rejects_a_second_decimal_point() {
    let before = amounts("1.2", "", "");
    let after = calc::apply_edit(&before, Field::Bill, "1.2.3");
    assert_eq!(after, before);
}

#[test]
fn apply_edit_rejects_non_numeric_characters() {
    let before = amounts("12", "", "");
    for bad in ["12a", "-5", "1,5", "$12", "12 "] {
        assert_eq!(calc::apply_edit(&before, Field::Bill, bad), before);
    }
}

#[test]
fn apply_edit_accepts_partial_decimals() {
    let before = amounts("", "", "");
    let after = calc::apply_edit(&before, Field::Bill, "12.");
    assert_eq!(after.bill, "12.");
    let after = calc::apply_edit(&before, Field::Bill, ".5");
    assert_eq!(after.bill, ".5");
    // clearing a field is always allowed
    let cleared = calc::apply_edit(&after, Field::Bill, "");
    assert_eq!(cleared.bill, "");
}

#[test]
fn apply_edit_rejects_a_lone_decimal_point() {
    // "." matches the digits/dot pattern but parses to nothing
    let after = calc::apply_edit(&Amounts::default(), Field::Bill, ".");
    assert_eq!(after.bill, "");
    let before = amounts("12", "", "");
    assert_eq!(calc::apply_edit(&before, Field::Tip, "."), before);
}

#[test]
fn apply_edit_derives_total_once_two_fields_are_filled() {
    let s = calc::apply_edit(&Amounts::default(), Field::Bill, "12.50");
    assert_eq!(s, amounts("12.50", "", ""));
    let s = calc::apply_edit(&s, Field::Tip, "2.50");
    assert_eq!(s, amounts("12.50", "2.50", "15.00"));
}

#[test]
fn apply_edit_derives_tip_from_bill_and_total() {
    let s = calc::apply_edit(&Amounts::default(), Field::Bill, "20");
    let s = calc::apply_edit(&s, Field::Total, "25");
    assert_eq!(s.tip, "5.00");
}

#[test]
fn apply_edit_leaves_tip_empty_when_total_is_below_bill() {
    let s = calc::apply_edit(&Amounts::default(), Field::Bill, "20");
    let s = calc::apply_edit(&s, Field::Total, "15");
    assert_eq!(s.tip, "");
}

#[test]
fn reset_state_is_all_empty() {
    let reset = Amounts::default();
    assert_eq!(reset, amounts("", "", ""));
}

#[test]
fn share_summary_lists_all_positive_fields() {
    let summary = calc::share_summary(&amounts("12.50", "2.50", "15.00"));
    assert_eq!(
        summary,
        "Bill 🍕 Tip Calculator Results:\n\nBill: $12.50\nTip: $2.50\nTotal: $15.00\n"
    );
}

#[test]
fn share_summary_skips_empty_and_zero_fields() {
    let summary = calc::share_summary(&amounts("20", "", "0"));
    assert_eq!(summary, "Bill 🍕 Tip Calculator Results:\n\nBill: $20.00\n");
}

#[test]
fn share_summary_with_no_amounts_is_just_the_header() {
    let summary = calc::share_summary(&Amounts::default());
    assert_eq!(summary, "Bill 🍕 Tip Calculator Results:\n\n");
}

#[test]
fn share_summary_normalizes_raw_text_to_two_decimals() {
    let summary = calc::share_summary(&amounts("20", "", ""));
    assert!(summary.contains("Bill: $20.00"));
}
