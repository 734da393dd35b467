use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::GstError;
use crate::types::*;
use crate::validation;

/// Round a monetary value to two decimal places (paise) with half-to-even.
///
/// Applied at every derived per-line step, so invoice aggregates, being
/// exact sums of already-rounded line values, agree with the line
/// figures to the paisa.
fn round_paise(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Resolve one line item to its monetary components.
///
/// Pure and total for validated input. The discount is percentage-based
/// when `discount_percent` is present and greater than zero, otherwise
/// the explicit `discount_amount` (default 0) — never both.
pub fn compute_line(item: &LineItem) -> LineCalculation {
    let line_total = round_paise(item.quantity * item.unit_price);

    let discount_amount = match item.discount_percent {
        Some(percent) if percent > Decimal::ZERO => {
            round_paise(line_total * percent / dec!(100))
        }
        _ => round_paise(item.discount_amount.unwrap_or(Decimal::ZERO)),
    };

    let taxable_amount = line_total - discount_amount;
    let tax_rate = item.tax_rate.unwrap_or(Decimal::ZERO);
    let tax_amount = round_paise(taxable_amount * tax_rate / dec!(100));
    let line_grand_total = taxable_amount + tax_amount;

    LineCalculation {
        line_total,
        discount_amount,
        taxable_amount,
        tax_amount,
        line_grand_total,
    }
}

/// Partition `total_tax` according to the place of supply.
///
/// Inter-state supplies carry the full amount as IGST. Intra-state
/// supplies split into equal CGST and SGST halves; an odd paisa in the
/// total lands on CGST, so the two halves always sum back to the total.
pub fn split_tax(total_tax: Decimal, place: PlaceOfSupply) -> TaxSplit {
    match place {
        PlaceOfSupply::InterState => TaxSplit {
            cgst: Decimal::ZERO,
            sgst: Decimal::ZERO,
            igst: total_tax,
        },
        PlaceOfSupply::IntraState => {
            let half = (total_tax / dec!(2)).round_dp_with_strategy(2, RoundingStrategy::ToZero);
            TaxSplit {
                cgst: total_tax - half,
                sgst: half,
                igst: Decimal::ZERO,
            }
        }
    }
}

/// Calculate invoice totals with the default policy
/// ([`DiscountOverflowPolicy::Reject`]).
pub fn calculate_invoice(
    items: &[LineItem],
    place: PlaceOfSupply,
) -> Result<InvoiceCalculations, GstError> {
    calculate_invoice_with(items, place, DiscountOverflowPolicy::default())
}

/// Calculate invoice totals: validate every item, resolve each line in
/// input order, sum the aggregates, and split the total tax per the
/// place of supply.
///
/// Stateless and referentially transparent — identical input yields
/// identical output, so callers may recompute on every edit. On invalid
/// input returns [`GstError::Validation`] with all collected errors;
/// nothing is partially computed.
pub fn calculate_invoice_with(
    items: &[LineItem],
    place: PlaceOfSupply,
    policy: DiscountOverflowPolicy,
) -> Result<InvoiceCalculations, GstError> {
    let errors = validation::validate_line_items(items, policy);
    if !errors.is_empty() {
        let msg = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(GstError::Validation(msg));
    }

    let line_items: Vec<LineCalculation> = items.iter().map(compute_line).collect();

    let mut subtotal = Decimal::ZERO;
    let mut total_discount = Decimal::ZERO;
    let mut taxable_amount = Decimal::ZERO;
    let mut total_tax = Decimal::ZERO;
    for line in &line_items {
        subtotal += line.line_total;
        total_discount += line.discount_amount;
        taxable_amount += line.taxable_amount;
        total_tax += line.tax_amount;
    }
    let grand_total = taxable_amount + total_tax;

    let TaxSplit { cgst, sgst, igst } = split_tax(total_tax, place);

    Ok(InvoiceCalculations {
        line_items,
        subtotal,
        total_discount,
        taxable_amount,
        cgst,
        sgst,
        igst,
        total_tax,
        grand_total,
    })
}
