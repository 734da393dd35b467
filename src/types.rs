use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One billable row on an invoice: quantity × unit price, with its own
/// discount and GST rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Invoiced quantity. Must be ≥ 0.
    pub quantity: Decimal,
    /// Net price per unit. Must be ≥ 0.
    pub unit_price: Decimal,
    /// Percentage discount in [0, 100]. When present and greater than
    /// zero it takes precedence over `discount_amount`.
    pub discount_percent: Option<Decimal>,
    /// Absolute discount on the line. Must be ≥ 0. Used only when
    /// `discount_percent` is absent or zero — the two are never combined.
    pub discount_amount: Option<Decimal>,
    /// GST rate percentage in [0, 100]. Absent or zero means untaxed.
    pub tax_rate: Option<Decimal>,
}

/// Jurisdiction of a supply under GST: whether seller and buyer are
/// registered in the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceOfSupply {
    /// Seller and buyer in the same state; tax splits into CGST + SGST.
    IntraState,
    /// Seller and buyer in different states; the full tax is levied as IGST.
    InterState,
}

impl PlaceOfSupply {
    /// Convert from the raw inter-state flag used by invoice forms.
    pub fn from_inter_state_flag(inter_state: bool) -> Self {
        if inter_state {
            Self::InterState
        } else {
            Self::IntraState
        }
    }

    pub fn is_inter_state(&self) -> bool {
        matches!(self, Self::InterState)
    }
}

/// How a discount larger than its line total is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DiscountOverflowPolicy {
    /// Reject the line with a validation error (default).
    #[default]
    Reject,
    /// Let the negative taxable amount flow through unclamped, producing
    /// negative tax and a negative line grand total. Used for credit
    /// adjustments.
    AllowNegative,
}

/// Resolved monetary components of a single line item.
///
/// All fields are derived by [`compute_line`](crate::compute_line) and
/// never independently mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineCalculation {
    /// quantity × unit price, before discount.
    pub line_total: Decimal,
    /// Resolved discount (percentage-based or explicit).
    pub discount_amount: Decimal,
    /// line_total − discount_amount; the base the tax rate applies to.
    pub taxable_amount: Decimal,
    /// taxable_amount × tax rate.
    pub tax_amount: Decimal,
    /// taxable_amount + tax_amount.
    pub line_grand_total: Decimal,
}

/// Partition of an invoice's total tax across the GST components.
///
/// Exactly one of {`cgst` + `sgst`, `igst`} is non-zero whenever the
/// total is non-zero; the components always sum back to the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxSplit {
    /// Central GST, half of the total on an intra-state supply.
    pub cgst: Decimal,
    /// State GST, the other half on an intra-state supply.
    pub sgst: Decimal,
    /// Integrated GST, the full total on an inter-state supply.
    pub igst: Decimal,
}

/// Invoice-level totals with the GST split applied.
///
/// Produced complete by [`calculate_invoice`](crate::calculate_invoice);
/// never partially populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceCalculations {
    /// Per-line results, in input order.
    pub line_items: Vec<LineCalculation>,
    /// Sum of line totals before discount.
    pub subtotal: Decimal,
    /// Sum of line discounts.
    pub total_discount: Decimal,
    /// subtotal − total_discount.
    pub taxable_amount: Decimal,
    /// Central GST share of `total_tax`.
    pub cgst: Decimal,
    /// State GST share of `total_tax`.
    pub sgst: Decimal,
    /// Integrated GST share of `total_tax`.
    pub igst: Decimal,
    /// Sum of line tax amounts; equals cgst + sgst + igst.
    pub total_tax: Decimal,
    /// taxable_amount + total_tax.
    pub grand_total: Decimal,
}
