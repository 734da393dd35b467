//! # bijak
//!
//! Indian GST invoice calculation library: per-line discounts and taxable
//! amounts, invoice aggregates, and the CGST/SGST/IGST split by place of
//! supply.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating
//! point. The engine is stateless: identical line items and place of
//! supply always produce identical totals, so callers can recompute on
//! every edit.
//!
//! ## Quick Start
//!
//! ```rust
//! use bijak::{calculate_invoice, LineItemBuilder, PlaceOfSupply};
//! use rust_decimal_macros::dec;
//!
//! let items = vec![
//!     LineItemBuilder::new(dec!(2), dec!(500))
//!         .discount_percent(dec!(10))
//!         .tax_rate(dec!(18))
//!         .build(),
//! ];
//!
//! let calc = calculate_invoice(&items, PlaceOfSupply::IntraState).unwrap();
//! assert_eq!(calc.taxable_amount, dec!(900));
//! assert_eq!(calc.cgst, dec!(81));
//! assert_eq!(calc.sgst, dec!(81));
//! assert_eq!(calc.grand_total, dec!(1062));
//! ```

mod builder;
mod calc;
mod error;
mod slabs;
mod types;
mod validation;

pub use builder::LineItemBuilder;
pub use calc::{calculate_invoice, calculate_invoice_with, compute_line, split_tax};
pub use error::{GstError, ValidationError};
pub use slabs::{is_standard_slab_rate, GstSlab};
pub use types::{
    DiscountOverflowPolicy, InvoiceCalculations, LineCalculation, LineItem, PlaceOfSupply,
    TaxSplit,
};
pub use validation::{validate_calculations, validate_line_items};
