use bijak::*;
use rust_decimal_macros::dec;

fn main() {
    // A typical intra-state invoice: services plus a hosting line
    let items = vec![
        LineItemBuilder::new(dec!(80), dec!(120))
            .discount_percent(dec!(10))
            .tax_slab(GstSlab::Higher)
            .build(),
        LineItemBuilder::new(dec!(1), dec!(49.90))
            .tax_slab(GstSlab::Higher)
            .build(),
    ];

    let calc = calculate_invoice(&items, PlaceOfSupply::IntraState).expect("items should be valid");

    println!("Lines:");
    for line in &calc.line_items {
        println!(
            "  total {} - discount {} = taxable {}, tax {}",
            line.line_total, line.discount_amount, line.taxable_amount, line.tax_amount
        );
    }
    println!("---");
    println!("Subtotal:  {}", calc.subtotal);
    println!("Discount:  {}", calc.total_discount);
    println!("Taxable:   {}", calc.taxable_amount);
    println!("CGST:      {}", calc.cgst);
    println!("SGST:      {}", calc.sgst);
    println!("Total tax: {}", calc.total_tax);
    println!("Grand:     {}", calc.grand_total);

    // The same items shipped across state lines levy IGST instead
    let inter = calculate_invoice(&items, PlaceOfSupply::InterState).expect("items should be valid");
    println!("---");
    println!("Inter-state IGST: {}", inter.igst);
    println!("Grand total is unchanged: {}", inter.grand_total);
}
