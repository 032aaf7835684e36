//! Strategy: a shopping cart with a swappable payment method.

use std::fmt;

use crate::narrate::Narrator;

pub mod demo {
    use super::{CreditCardPayment, PayPalPayment, ShoppingCart};
    use crate::narrate::Narrator;

    pub const PRICES: [u64; 2] = [1000, 500];
    pub const CARD_NUMBER: &str = "1234-5678";
    pub const CARD_CVC: &str = "123";
    pub const PAYPAL_EMAIL: &str = "user@example.com";

    pub fn run(out: &dyn Narrator) {
        let mut cart = ShoppingCart::new();
        for price in PRICES {
            cart.add_item(price);
        }

        out.say("--- Checkout before choosing a payment method ---");
        cart.checkout(out);

        out.say("");
        out.say("--- Pay by credit card ---");
        cart.set_payment_strategy(Box::new(CreditCardPayment::new(CARD_NUMBER, CARD_CVC)));
        cart.checkout(out);

        // Same cart, only the payment method changes.
        out.say("");
        out.say("--- Pay with PayPal ---");
        cart.set_payment_strategy(Box::new(PayPalPayment::new(PAYPAL_EMAIL)));
        cart.checkout(out);
    }
}

/// A way to pay a checkout total. Implementations narrate the payment.
pub trait PaymentStrategy {
    fn pay(&self, amount: u64, out: &dyn Narrator);

    /// Short label used in checkout outcomes.
    fn method_name(&self) -> String;
}

pub struct CreditCardPayment {
    card_number: String,
    cvc: String,
}

impl CreditCardPayment {
    pub fn new(card_number: impl Into<String>, cvc: impl Into<String>) -> Self {
        CreditCardPayment {
            card_number: card_number.into(),
            cvc: cvc.into(),
        }
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }
}

impl fmt::Debug for CreditCardPayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCardPayment")
            .field("card_number", &self.card_number)
            .field("cvc", &"*".repeat(self.cvc.len()))
            .finish()
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: u64, out: &dyn Narrator) {
        out.say(&format!("Paid {} yen with {}.", amount, self.method_name()));
    }

    fn method_name(&self) -> String {
        format!("credit card {}", self.card_number())
    }
}

#[derive(Debug, Clone)]
pub struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    pub fn new(email: impl Into<String>) -> Self {
        PayPalPayment {
            email: email.into(),
        }
    }
}

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: u64, out: &dyn Narrator) {
        out.say(&format!(
            "Paid {} yen with PayPal account {}.",
            amount, self.email
        ));
    }

    fn method_name(&self) -> String {
        format!("PayPal {}", self.email)
    }
}

// =============================================================================
// Context
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Paid { method: String, total: u64 },
    NoPaymentMethod { total: u64 },
}

impl CheckoutOutcome {
    pub fn total(&self) -> u64 {
        match self {
            CheckoutOutcome::Paid { total, .. } | CheckoutOutcome::NoPaymentMethod { total } => {
                *total
            }
        }
    }
}

#[derive(Default)]
pub struct ShoppingCart {
    items: Vec<u64>,
    payment_strategy: Option<Box<dyn PaymentStrategy>>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, price: u64) {
        self.items.push(price);
    }

    pub fn items(&self) -> &[u64] {
        &self.items
    }

    /// Saturates at `u64::MAX` instead of overflowing.
    pub fn total(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, &price| acc.saturating_add(price))
    }

    pub fn set_payment_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        tracing::debug!(method = %strategy.method_name(), "payment strategy set");
        self.payment_strategy = Some(strategy);
    }

    pub fn clear_payment_strategy(&mut self) {
        self.payment_strategy = None;
    }

    pub fn has_payment_strategy(&self) -> bool {
        self.payment_strategy.is_some()
    }

    /// Items are kept after checkout, so the same cart can be paid again.
    pub fn checkout(&self, out: &dyn Narrator) -> CheckoutOutcome {
        let total = self.total();

        match &self.payment_strategy {
            Some(strategy) => {
                strategy.pay(total, out);
                CheckoutOutcome::Paid {
                    method: strategy.method_name(),
                    total,
                }
            }
            None => {
                out.say("No payment method has been set.");
                CheckoutOutcome::NoPaymentMethod { total }
            }
        }
    }
}

impl fmt::Debug for ShoppingCart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShoppingCart")
            .field("items", &self.items)
            .field(
                "payment_strategy",
                &self.payment_strategy.as_ref().map(|s| s.method_name()),
            )
            .finish()
    }
}
