//! Standard GST rate slabs.
//!
//! The engine never derives a rate from an item — callers supply the
//! rate on each line. The slab table is vocabulary for callers that
//! want to name the statutory rates instead of spelling out numbers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The five GST rate slabs in force since the 2017 rollout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GstSlab {
    /// 0%: unprocessed food, books, essential goods.
    Essential,
    /// 5%: household necessities, transport.
    Reduced,
    /// 12%: processed food, business-class travel.
    Standard,
    /// 18%: most goods and services.
    Higher,
    /// 28%: luxury and sin goods.
    Luxury,
}

impl GstSlab {
    pub const ALL: [GstSlab; 5] = [
        GstSlab::Essential,
        GstSlab::Reduced,
        GstSlab::Standard,
        GstSlab::Higher,
        GstSlab::Luxury,
    ];

    /// The slab's rate as a percentage.
    pub fn rate(&self) -> Decimal {
        match self {
            GstSlab::Essential => Decimal::ZERO,
            GstSlab::Reduced => dec!(5),
            GstSlab::Standard => dec!(12),
            GstSlab::Higher => dec!(18),
            GstSlab::Luxury => dec!(28),
        }
    }

    /// Look up the slab for an exact rate, if one matches.
    pub fn from_rate(rate: Decimal) -> Option<Self> {
        Self::ALL.into_iter().find(|slab| slab.rate() == rate)
    }
}

/// Whether a rate is one of the standard slab rates.
pub fn is_standard_slab_rate(rate: Decimal) -> bool {
    GstSlab::from_rate(rate).is_some()
}
