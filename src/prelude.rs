//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use base8x::prelude::*;
//!
//! let registry = AlphabetRegistry::load_default().unwrap();
//! let codec = registry.codec("adobe85").unwrap();
//! assert_eq!(codec.encode(&[0xff; 4]), "s8W-!");
//! ```

pub use crate::{
    AlphabetError, AlphabetRegistry, Codec, DecodeError, Z85,
    // Z85 shortcuts
    decode, encode,
};
