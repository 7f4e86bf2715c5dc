pub mod executor;
pub mod formats;
pub mod model;
pub mod traits;

// Re-export common types for convenience
pub use executor::*;
pub use formats::pip::PipRequirementsParser;
pub use model::*;
pub use traits::*;
