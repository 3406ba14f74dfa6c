//! epiwatch-context — Regional environmental and facility context.
//!
//! Both lookups are total functions: unknown regions degrade to a default
//! AQI or an empty facility list, never an error.

pub mod directory;

pub use directory::ContextDirectory;
