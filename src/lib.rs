// Design Patterns Catalog: decoration, facade, factory, singleton
// Each module is self-contained and backs one binary in src/bin.

pub mod config;
pub mod console;
pub mod decorators;
pub mod error;
pub mod facade;
pub mod factory;
pub mod singleton;
pub mod telemetry;

pub use config::DemoConfig;
pub use console::Console;
pub use error::{DemoError, Result};

pub mod examples {
    //! # Design Patterns Quick Reference
    //!
    //! ## Pattern 1: Decoration
    //! - Constructor wrapping (logs every construction)
    //! - Method wrapping (strips fields from an async fetch result)
    //! - Property declaration logging
    //!
    //! ## Pattern 2: Facade
    //! - One `welcome_new_student` call over three collaborators
    //!
    //! ## Pattern 3: Factory
    //! - Tag-keyed creation of teacher variants
    //! - Variant inspection
    //!
    //! ## Pattern 4: Singleton
    //! - Process-wide instance behind `OnceLock`
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin decorators
    //! cargo run --bin facade
    //! cargo run --bin factory
    //! cargo run --bin singleton
    //! ```
}
