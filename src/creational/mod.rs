//! Creational patterns: how objects get constructed.

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod prototype;
pub mod singleton;
