// Strategy: the caller swaps the payment method held by the context.

use std::io::{self, Write};

use crate::error::Result;

pub trait PaymentStrategy {
    fn pay(&self, amount: f64, out: &mut dyn Write) -> io::Result<()>;
    fn name(&self) -> &str;
}

pub struct CreditCardPayment;

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: f64, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Paying {amount:?} with Credit Card")
    }

    fn name(&self) -> &str {
        "Credit Card"
    }
}

pub struct PayPalPayment;

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: f64, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Paying {amount:?} with PayPal")
    }

    fn name(&self) -> &str {
        "PayPal"
    }
}

pub struct BankTransferPayment;

impl PaymentStrategy for BankTransferPayment {
    fn pay(&self, amount: f64, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Paying {amount:?} with Bank Transfer")
    }

    fn name(&self) -> &str {
        "Bank Transfer"
    }
}

pub struct PaymentContext {
    payment_strategy: Box<dyn PaymentStrategy>,
}

impl PaymentContext {
    pub fn new(payment_strategy: Box<dyn PaymentStrategy>) -> Self {
        Self { payment_strategy }
    }

    pub fn change_payment_strategy(&mut self, new_payment_strategy: Box<dyn PaymentStrategy>) {
        tracing::debug!(
            from = self.payment_strategy.name(),
            to = new_payment_strategy.name(),
            "payment strategy changed"
        );
        self.payment_strategy = new_payment_strategy;
    }

    pub fn process_payment(&self, amount: f64, out: &mut dyn Write) -> io::Result<()> {
        self.payment_strategy.pay(amount, out)
    }

    pub fn strategy_name(&self) -> &str {
        self.payment_strategy.name()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut payment_context = PaymentContext::new(Box::new(CreditCardPayment));

    payment_context.process_payment(50.0, out)?;

    payment_context.change_payment_strategy(Box::new(PayPalPayment));

    payment_context.process_payment(30.0, out)?;
    Ok(())
}
