//! Data model module.
//!
//! Wire types shared with the remote departments API.

mod department;

pub use department::*;
