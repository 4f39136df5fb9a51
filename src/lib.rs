// Design Patterns Catalogue
// Runnable examples of the classic object-oriented patterns, written in Rust.

pub mod behavioral;
pub mod catalogue;
pub mod config;
pub mod creational;
pub mod error;
pub mod logging;
pub mod structural;

pub use catalogue::{Category, Pattern};
pub use config::CatalogueConfig;
pub use error::{PatternError, Result};

pub mod examples {
    //! # Design Patterns Quick Reference
    //!
    //! Every example is a self-contained module with a `run` driver that
    //! writes its transcript to any `std::io::Write`.
    //!
    //! ## Behavioral
    //! - Chain of Responsibility (click handlers with successors)
    //! - Command (remote control and light)
    //! - Iterator (library of books, explicit cursor)
    //! - Mediator (button notifies a text view through a mediator)
    //! - Memento (text editor history)
    //! - Observer (explicit observer registry)
    //! - State (traffic light)
    //! - Strategy (payment methods)
    //! - Template Method (activity lifecycle)
    //! - Visitor (highlighting view elements)
    //!
    //! ## Creational
    //! - Builder (form director, person builder)
    //! - Abstract Factory (transport families)
    //! - Factory Method (biller types)
    //! - Prototype (deep-copying clone)
    //! - Singleton (double-checked holder, lazy static)
    //!
    //! ## Structural
    //! - Adapter, Bridge, Composite, Decorator, Facade, Flyweight, Proxy
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin observer
    //! cargo run --bin patterns -- run state visitor
    //! cargo run --bin patterns -- all
    //! ```
}
