use rust_decimal::Decimal;

use crate::slabs::GstSlab;
use crate::types::LineItem;

/// Builder for [`LineItem`].
///
/// ```
/// use bijak::{GstSlab, LineItemBuilder};
/// use rust_decimal_macros::dec;
///
/// let item = LineItemBuilder::new(dec!(2), dec!(500))
///     .discount_percent(dec!(10))
///     .tax_slab(GstSlab::Higher)
///     .build();
///
/// assert_eq!(item.tax_rate, Some(dec!(18)));
/// ```
pub struct LineItemBuilder {
    quantity: Decimal,
    unit_price: Decimal,
    discount_percent: Option<Decimal>,
    discount_amount: Option<Decimal>,
    tax_rate: Option<Decimal>,
}

impl LineItemBuilder {
    pub fn new(quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            quantity,
            unit_price,
            discount_percent: None,
            discount_amount: None,
            tax_rate: None,
        }
    }

    pub fn discount_percent(mut self, percent: Decimal) -> Self {
        self.discount_percent = Some(percent);
        self
    }

    pub fn discount_amount(mut self, amount: Decimal) -> Self {
        self.discount_amount = Some(amount);
        self
    }

    pub fn tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = Some(rate);
        self
    }

    /// Set the tax rate from one of the standard GST slabs.
    pub fn tax_slab(mut self, slab: GstSlab) -> Self {
        self.tax_rate = Some(slab.rate());
        self
    }

    /// Build the line item. Validation happens at calculation time, so
    /// out-of-range values are representable here — useful for importing
    /// external data that will be validated later.
    pub fn build(self) -> LineItem {
        LineItem {
            quantity: self.quantity,
            unit_price: self.unit_price,
            discount_percent: self.discount_percent,
            discount_amount: self.discount_amount,
            tax_rate: self.tax_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_are_absent() {
        let item = LineItemBuilder::new(dec!(1), dec!(99.50)).build();
        assert_eq!(item.quantity, dec!(1));
        assert_eq!(item.unit_price, dec!(99.50));
        assert_eq!(item.discount_percent, None);
        assert_eq!(item.discount_amount, None);
        assert_eq!(item.tax_rate, None);
    }

    #[test]
    fn slab_sets_rate() {
        let item = LineItemBuilder::new(dec!(1), dec!(100))
            .tax_slab(GstSlab::Reduced)
            .build();
        assert_eq!(item.tax_rate, Some(dec!(5)));
    }

    #[test]
    fn explicit_rate_overrides_slab() {
        let item = LineItemBuilder::new(dec!(1), dec!(100))
            .tax_slab(GstSlab::Higher)
            .tax_rate(dec!(12))
            .build();
        assert_eq!(item.tax_rate, Some(dec!(12)));
    }
}
