// Checkout view state.
// Shipping choice, order pricing, and the simulated payment busy flag.

use rust_decimal::Decimal;

use crate::config::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
}

impl ShippingMethod {
    pub fn label(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standard (5-7 days)",
            ShippingMethod::Express => "Express (1-2 days)",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            ShippingMethod::Standard => ShippingMethod::Express,
            ShippingMethod::Express => ShippingMethod::Standard,
        }
    }
}

/// Price breakdown shown next to the pay button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderSummary {
    /// Price an order. Tax applies to the subtotal only and is rounded to cents.
    pub fn compute(subtotal: Decimal, method: ShippingMethod, settings: &Settings) -> Self {
        let shipping = match method {
            ShippingMethod::Standard => Decimal::ZERO,
            ShippingMethod::Express => settings.express_shipping,
        };
        let tax = (subtotal * settings.tax_rate).round_dp(2);
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// State for the checkout view.
#[derive(Debug, Clone, Default)]
pub struct CheckoutState {
    pub shipping: ShippingMethod,
    /// Payment is in flight; the pay button is disabled.
    pub processing: bool,
}

impl CheckoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_shipping(&mut self) {
        if !self.processing {
            self.shipping = self.shipping.toggle();
        }
    }

    /// Start payment. Returns false if a payment is already processing.
    pub fn begin_payment(&mut self) -> bool {
        if self.processing {
            return false;
        }
        self.processing = true;
        true
    }

    pub fn finish_payment(&mut self) {
        self.processing = false;
    }

    pub fn summary(&self, subtotal: Decimal, settings: &Settings) -> OrderSummary {
        OrderSummary::compute(subtotal, self.shipping, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_shipping_is_free() {
        let settings = Settings::default();
        let summary = OrderSummary::compute(Decimal::from(100), ShippingMethod::Standard, &settings);
        assert_eq!(summary.shipping, Decimal::ZERO);
        assert_eq!(summary.tax, Decimal::new(700, 2));
        assert_eq!(summary.total, Decimal::new(10700, 2));
    }

    #[test]
    fn test_express_shipping_adds_fee() {
        let settings = Settings::default();
        let summary = OrderSummary::compute(Decimal::from(205), ShippingMethod::Express, &settings);
        assert_eq!(summary.shipping, Decimal::from(15));
        assert_eq!(summary.tax, Decimal::new(1435, 2));
        assert_eq!(summary.total, Decimal::new(23435, 2));
    }

    #[test]
    fn test_tax_rounds_to_cents() {
        let settings = Settings::default();
        // 0.07 * 35.55 = 2.4885
        let summary = OrderSummary::compute(Decimal::new(3555, 2), ShippingMethod::Standard, &settings);
        assert_eq!(summary.tax, Decimal::new(249, 2));
    }

    #[test]
    fn test_payment_not_reentrant() {
        let mut state = CheckoutState::new();
        assert!(state.begin_payment());
        assert!(!state.begin_payment());

        // Shipping is locked once payment starts
        state.toggle_shipping();
        assert_eq!(state.shipping, ShippingMethod::Standard);
    }
}
