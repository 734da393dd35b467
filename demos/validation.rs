use bijak::*;
use rust_decimal_macros::dec;

fn main() {
    // Invalid input: negative quantity, out-of-range rate, oversized discount
    let items = vec![
        LineItemBuilder::new(dec!(-1), dec!(100))
            .tax_rate(dec!(18))
            .build(),
        LineItemBuilder::new(dec!(2), dec!(50))
            .tax_rate(dec!(130))
            .build(),
        LineItemBuilder::new(dec!(1), dec!(100))
            .discount_amount(dec!(150))
            .build(),
    ];

    let errors = validate_line_items(&items, DiscountOverflowPolicy::Reject);
    println!("Input validation: {} errors", errors.len());
    for e in &errors {
        println!("  {e}");
    }

    // calculate_invoice runs the same checks and refuses invalid input
    match calculate_invoice(&items, PlaceOfSupply::IntraState) {
        Ok(_) => println!("unexpected: calculation succeeded"),
        Err(e) => println!("\ncalculate_invoice: {e}"),
    }

    // The oversized discount becomes a credit under AllowNegative
    let credit = vec![items[2].clone()];
    let calc = calculate_invoice_with(
        &credit,
        PlaceOfSupply::InterState,
        DiscountOverflowPolicy::AllowNegative,
    )
    .expect("credit line is valid under AllowNegative");
    println!("\nCredit adjustment grand total: {}", calc.grand_total);

    // Rechecking a persisted result catches tampering
    let mut tampered = calc.clone();
    tampered.grand_total += dec!(1);
    let recheck = validate_calculations(&tampered);
    println!("Recheck after tampering: {} errors", recheck.len());
    for e in &recheck {
        println!("  {e}");
    }
}
