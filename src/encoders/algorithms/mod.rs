pub mod chunker;
pub mod engine;
pub mod errors;
pub mod numeric;

// Re-export error types for public API
pub use chunker::Chunker;
pub use errors::{
    AlphabetError, AlphabetNotFoundError, DecodeError, InvalidParameter, find_closest_alphabet,
};
