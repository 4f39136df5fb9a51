// Adapter: wrap an incompatible adaptee behind the target interface.

use std::io::Write;

use crate::error::Result;

// Target interface your code expects
pub trait Target {
    fn request(&self) -> String;
}

// Existing type with an incompatible interface
pub struct Adaptee;

impl Adaptee {
    pub fn specific_request(&self) -> String {
        "Specific request from Adaptee".to_string()
    }
}

pub struct Adapter {
    adaptee: Adaptee,
}

impl Adapter {
    pub fn new(adaptee: Adaptee) -> Self {
        Self { adaptee }
    }
}

impl Target for Adapter {
    fn request(&self) -> String {
        format!("Adapter: {}", self.adaptee.specific_request())
    }
}

fn use_target(target: &dyn Target) -> String {
    target.request()
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let adapter = Adapter::new(Adaptee);

    writeln!(out, "Using Adapter: {}", use_target(&adapter))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_translates_request() {
        let adapter = Adapter::new(Adaptee);
        assert_eq!(adapter.request(), "Adapter: Specific request from Adaptee");
    }

    #[test]
    fn test_run_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Using Adapter: Adapter: Specific request from Adaptee\n"
        );
    }
}
