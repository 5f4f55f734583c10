//! Core types for the simvec sequence container.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared by the buffer and container crates: error
//! enums, the [`GrowthPolicy`] configuration, and the [`CapacityHint`]
//! pre-reservation tag.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hint;
pub mod policy;

pub use error::{BufferError, PolicyError, VectorError};
pub use hint::{reserve, CapacityHint};
pub use policy::GrowthPolicy;
