//! Single-owner heap buffers for the simvec container.
//!
//! An [`OwnedBuffer`] owns exactly one block of default-constructed slots.
//! It never grows or shrinks: the container replaces it wholesale when it
//! needs more room, exchanging ownership through [`OwnedBuffer::swap`].
//! All storage is safe `Box<[T]>`; this crate contains no `unsafe`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;

pub use buffer::OwnedBuffer;
pub use simvec_core::BufferError;
