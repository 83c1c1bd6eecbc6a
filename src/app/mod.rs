pub mod context;
pub mod error;

pub use context::{AppContext, SourceChoice};
pub use error::{DeckError, Result};
