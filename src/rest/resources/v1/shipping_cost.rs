//! Shipping cost estimates.

use serde::{Deserialize, Serialize};

/// Shipping cost estimate returned by
/// [`Order::calculate_shipping`](super::Order::calculate_shipping).
///
/// Amounts are returned exactly as Printify reports them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingCost {
    /// Cost of standard shipping.
    pub standard: f64,
    /// Cost of express shipping.
    pub express: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_cost_is_returned_verbatim() {
        let cost: ShippingCost = serde_json::from_str(r#"{"standard":4.99,"express":9.99}"#).unwrap();
        assert_eq!(
            cost,
            ShippingCost {
                standard: 4.99,
                express: 9.99
            }
        );
    }

    #[test]
    fn test_shipping_cost_requires_both_rates() {
        assert!(serde_json::from_str::<ShippingCost>(r#"{"standard":4.99}"#).is_err());
    }
}
