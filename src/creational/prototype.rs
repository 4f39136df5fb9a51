// Prototype: cloning yields an independent record, sequence included.

use std::io::Write;

use crate::error::Result;

pub trait Prototype {
    /// A new, independent copy of `self`.
    fn clone_prototype(&self) -> Self
    where
        Self: Sized;
}

#[derive(Debug, PartialEq, Eq)]
pub struct ConcretePrototype {
    pub property1: String,
    pub property2: i32,
    pub property3: Vec<String>,
}

impl Prototype for ConcretePrototype {
    fn clone_prototype(&self) -> Self {
        Self {
            property1: self.property1.clone(),
            property2: self.property2,
            property3: self.property3.to_vec(),
        }
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    // A single element, not three.
    let prototype = ConcretePrototype {
        property1: "Value1".to_string(),
        property2: 1,
        property3: vec!["Item1, Item2, Item3".to_string()],
    };

    let mut copy1 = prototype.clone_prototype();
    let mut copy2 = prototype.clone_prototype();

    copy1.property1 = "Value2".to_string();
    copy2.property2 = 2;
    writeln!(out, "{copy1:?}")?;
    writeln!(out, "{copy2:?}")?;
    Ok(())
}
