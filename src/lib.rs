//! SMS Forge - bulk SMS message variant generation
//!
//! Expands a parameterized template (literal values, numeric ranges, named
//! phrase groups) into every combination and scores each message against the
//! 70-character SMS budget under a per-position encoding model.

pub mod engine;
pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SmsForgeError};
pub use types::{
    Encoding, GenerateMode, GenerateRequest, GenerateResponse, GeneratedResult, PhraseGroup,
    MAX_CHARS_PER_SMS,
};

// Re-export main functionality
pub use engine::{MessageGenerator, PhraseLookup};
pub use store::{PhraseGroupRequest, PhraseGroupUpdate, PhraseStore, PositionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
