use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::ValidationError;
use crate::types::*;

/// Validate raw line items at the engine boundary.
/// Returns all validation errors found (not just the first).
///
/// NaN and infinite values cannot be represented by [`Decimal`], so only
/// range checks remain here.
pub fn validate_line_items(
    items: &[LineItem],
    policy: DiscountOverflowPolicy,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (i, item) in items.iter().enumerate() {
        validate_line_item(item, i, policy, &mut errors);
    }
    errors
}

fn validate_line_item(
    item: &LineItem,
    index: usize,
    policy: DiscountOverflowPolicy,
    errors: &mut Vec<ValidationError>,
) {
    let prefix = format!("lines[{index}]");

    if item.quantity < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            "quantity must not be negative",
        ));
    }

    if item.unit_price < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.unit_price"),
            "unit price must not be negative",
        ));
    }

    if let Some(percent) = item.discount_percent {
        if percent < Decimal::ZERO || percent > dec!(100) {
            errors.push(ValidationError::new(
                format!("{prefix}.discount_percent"),
                format!("discount percent must be between 0 and 100, got {percent}"),
            ));
        }
    }

    if let Some(amount) = item.discount_amount {
        if amount < Decimal::ZERO {
            errors.push(ValidationError::new(
                format!("{prefix}.discount_amount"),
                "discount amount must not be negative",
            ));
        }
    }

    if let Some(rate) = item.tax_rate {
        if rate < Decimal::ZERO || rate > dec!(100) {
            errors.push(ValidationError::new(
                format!("{prefix}.tax_rate"),
                format!("tax rate must be between 0 and 100, got {rate}"),
            ));
        }
    }

    // A percentage discount within [0, 100] cannot exceed the line total,
    // so only the explicit-amount path can overflow.
    if policy == DiscountOverflowPolicy::Reject
        && !item
            .discount_percent
            .is_some_and(|p| p > Decimal::ZERO)
    {
        if let Some(amount) = item.discount_amount {
            let line_total = item.quantity * item.unit_price;
            if amount >= Decimal::ZERO && amount > line_total {
                errors.push(ValidationError::new(
                    format!("{prefix}.discount_amount"),
                    format!("discount amount {amount} exceeds line total {line_total}"),
                ));
            }
        }
    }
}

/// Re-check the arithmetic identities of a computed result.
/// Returns all inconsistencies found.
///
/// Every record produced by [`calculate_invoice`](crate::calculate_invoice)
/// passes; this is for callers that persist computed totals and want to
/// verify them later.
pub fn validate_calculations(calc: &InvoiceCalculations) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let expected_subtotal: Decimal = calc.line_items.iter().map(|l| l.line_total).sum();
    if calc.subtotal != expected_subtotal {
        errors.push(ValidationError::new(
            "subtotal",
            format!(
                "subtotal {} does not match sum of line totals {}",
                calc.subtotal, expected_subtotal
            ),
        ));
    }

    let expected_discount: Decimal = calc.line_items.iter().map(|l| l.discount_amount).sum();
    if calc.total_discount != expected_discount {
        errors.push(ValidationError::new(
            "total_discount",
            format!(
                "total discount {} does not match sum of line discounts {}",
                calc.total_discount, expected_discount
            ),
        ));
    }

    let expected_taxable = calc.subtotal - calc.total_discount;
    if calc.taxable_amount != expected_taxable {
        errors.push(ValidationError::new(
            "taxable_amount",
            format!(
                "taxable amount {} does not match subtotal {} - discount {}",
                calc.taxable_amount, calc.subtotal, calc.total_discount
            ),
        ));
    }

    let expected_tax: Decimal = calc.line_items.iter().map(|l| l.tax_amount).sum();
    if calc.total_tax != expected_tax {
        errors.push(ValidationError::new(
            "total_tax",
            format!(
                "total tax {} does not match sum of line taxes {}",
                calc.total_tax, expected_tax
            ),
        ));
    }

    let expected_grand = calc.taxable_amount + calc.total_tax;
    if calc.grand_total != expected_grand {
        errors.push(ValidationError::new(
            "grand_total",
            format!(
                "grand total {} does not match taxable {} + tax {}",
                calc.grand_total, calc.taxable_amount, calc.total_tax
            ),
        ));
    }

    if calc.cgst + calc.sgst + calc.igst != calc.total_tax {
        errors.push(ValidationError::new(
            "total_tax",
            format!(
                "cgst {} + sgst {} + igst {} does not equal total tax {}",
                calc.cgst, calc.sgst, calc.igst, calc.total_tax
            ),
        ));
    }

    let has_intra = calc.cgst != Decimal::ZERO || calc.sgst != Decimal::ZERO;
    if has_intra && calc.igst != Decimal::ZERO {
        errors.push(ValidationError::new(
            "igst",
            "an invoice carries either CGST + SGST or IGST, never both",
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::LineItemBuilder;
    use crate::calc::calculate_invoice;

    fn valid_item() -> LineItem {
        LineItemBuilder::new(dec!(2), dec!(500))
            .discount_percent(dec!(10))
            .tax_rate(dec!(18))
            .build()
    }

    #[test]
    fn valid_items_pass() {
        let errors = validate_line_items(&[valid_item()], DiscountOverflowPolicy::Reject);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn negative_quantity_rejected() {
        let mut item = valid_item();
        item.quantity = dec!(-1);

        let errors = validate_line_items(&[item], DiscountOverflowPolicy::Reject);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "lines[0].quantity");
    }

    #[test]
    fn negative_unit_price_rejected() {
        let mut item = valid_item();
        item.unit_price = dec!(-0.01);

        let errors = validate_line_items(&[item], DiscountOverflowPolicy::Reject);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "lines[0].unit_price");
    }

    #[test]
    fn out_of_range_percentages_rejected() {
        let mut item = valid_item();
        item.discount_percent = Some(dec!(101));
        item.tax_rate = Some(dec!(-5));

        let errors = validate_line_items(&[item], DiscountOverflowPolicy::Reject);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            ["lines[0].discount_percent", "lines[0].tax_rate"]
        );
    }

    #[test]
    fn negative_discount_amount_rejected() {
        let item = LineItemBuilder::new(dec!(1), dec!(100))
            .discount_amount(dec!(-10))
            .build();

        let errors = validate_line_items(&[item], DiscountOverflowPolicy::Reject);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "lines[0].discount_amount");
    }

    #[test]
    fn errors_collected_across_all_lines() {
        let mut bad_a = valid_item();
        bad_a.quantity = dec!(-1);
        let mut bad_b = valid_item();
        bad_b.tax_rate = Some(dec!(200));

        let errors =
            validate_line_items(&[bad_a, valid_item(), bad_b], DiscountOverflowPolicy::Reject);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["lines[0].quantity", "lines[2].tax_rate"]);
    }

    #[test]
    fn discount_overflow_rejected_by_default() {
        let item = LineItemBuilder::new(dec!(1), dec!(100))
            .discount_amount(dec!(150))
            .build();

        let errors = validate_line_items(&[item], DiscountOverflowPolicy::Reject);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("exceeds line total"));
    }

    #[test]
    fn discount_overflow_allowed_under_policy() {
        let item = LineItemBuilder::new(dec!(1), dec!(100))
            .discount_amount(dec!(150))
            .build();

        let errors = validate_line_items(&[item], DiscountOverflowPolicy::AllowNegative);
        assert!(errors.is_empty());
    }

    #[test]
    fn computed_result_passes_recheck() {
        let items = vec![
            valid_item(),
            LineItemBuilder::new(dec!(3), dec!(99.99))
                .tax_rate(dec!(5))
                .build(),
        ];
        let calc = calculate_invoice(&items, PlaceOfSupply::IntraState).unwrap();

        let errors = validate_calculations(&calc);
        assert!(errors.is_empty(), "arithmetic errors: {errors:?}");
    }

    #[test]
    fn tampered_totals_detected() {
        let calc = calculate_invoice(&[valid_item()], PlaceOfSupply::IntraState).unwrap();

        let mut tampered = calc.clone();
        tampered.grand_total += dec!(0.01);
        assert!(
            validate_calculations(&tampered)
                .iter()
                .any(|e| e.field == "grand_total")
        );

        let mut both_regimes = calc;
        both_regimes.igst = dec!(1);
        assert!(
            validate_calculations(&both_regimes)
                .iter()
                .any(|e| e.field == "igst")
        );
    }
}
