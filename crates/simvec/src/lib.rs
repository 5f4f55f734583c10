//! simvec: a dynamically-resizable sequence container.
//!
//! [`SimpleVector`] owns a contiguous heap buffer, exposes random access,
//! and grows automatically on append and insert. Its growth contract is
//! explicit and observable: capacity doubles when full (zero becomes
//! one), `reserve` sizes exactly, `clear` and `pop_back` never release
//! memory, and every reallocation advances a generation counter that
//! invalidates outstanding [`Position`] handles.
//!
//! # Architecture
//!
//! ```text
//! SimpleVector<T>
//! ├── OwnedBuffer<T>   (simvec-buffer: fixed-length Box<[T]>, swap-only ownership)
//! ├── size             (logical length, <= buffer length)
//! ├── generation       (bumped on every reallocation)
//! └── GrowthPolicy     (simvec-core: doubling / headroom / clone sizing)
//! ```
//!
//! # Access tiers
//!
//! - `v[i]` is the unchecked accessor: indexing past `len()` is a contract
//!   violation caught by a debug assertion.
//! - [`SimpleVector::at`] is the checked accessor and returns
//!   [`VectorError::OutOfRange`].
//!
//! # Quick start
//!
//! ```rust
//! use simvec::prelude::*;
//!
//! let mut v = SimpleVector::new();
//! v.push_back(1);
//! v.push_back(2);
//! v.push_back(3);
//! assert_eq!((v.len(), v.capacity()), (3, 4));
//!
//! v.insert(v.begin() + 1, 9).unwrap();
//! assert_eq!(v, [1, 9, 2, 3]);
//!
//! v.erase(v.begin() + 2).unwrap();
//! assert_eq!(v, [1, 9, 3]);
//!
//! assert!(matches!(v.at(5), Err(VectorError::OutOfRange { .. })));
//!
//! let pre_sized: SimpleVector<u8> = SimpleVector::from(reserve(64));
//! assert_eq!((pre_sized.len(), pre_sized.capacity()), (0, 64));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod cmp;
pub mod iter;
mod macros;
pub mod position;
pub mod vector;

pub use iter::IntoIter;
pub use position::Position;
pub use vector::SimpleVector;

pub use simvec_buffer::OwnedBuffer;
pub use simvec_core::{
    reserve, BufferError, CapacityHint, GrowthPolicy, PolicyError, VectorError,
};

/// Common imports for working with simvec.
///
/// ```rust
/// use simvec::prelude::*;
/// ```
pub mod prelude {
    pub use crate::simple_vector;
    pub use crate::{reserve, CapacityHint, GrowthPolicy, Position, SimpleVector, VectorError};
}
