// Factory Method: each factory creates a single kind of biller.

use std::io::{self, Write};

use crate::error::Result;

pub trait MethodOfBill {
    fn on_bill(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub struct PaymentType;

impl MethodOfBill for PaymentType {
    fn on_bill(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "You must pay the bill!!")
    }
}

pub struct PurchaseType;

impl MethodOfBill for PurchaseType {
    fn on_bill(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "You can also doing top up >.<")
    }
}

pub trait BillerFactory {
    fn create_biller(&self) -> Box<dyn MethodOfBill>;
}

pub struct PaymentFactory;

impl BillerFactory for PaymentFactory {
    fn create_biller(&self) -> Box<dyn MethodOfBill> {
        Box::new(PaymentType)
    }
}

pub struct PurchaseFactory;

impl BillerFactory for PurchaseFactory {
    fn create_biller(&self) -> Box<dyn MethodOfBill> {
        Box::new(PurchaseType)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let payment_factory: Box<dyn BillerFactory> = Box::new(PaymentFactory);
    let purchase_factory: Box<dyn BillerFactory> = Box::new(PurchaseFactory);

    let payment_type = payment_factory.create_biller();
    let purchase_type = purchase_factory.create_biller();

    payment_type.on_bill(out)?;
    purchase_type.on_bill(out)?;
    Ok(())
}
