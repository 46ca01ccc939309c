//! # Error Types for the B+ Tree Map
//!
//! The map has exactly one user-visible failure path: asking for a key
//! that is not present through the checked accessors [`at`] and
//! [`at_mut`]. Every other operation either succeeds or reports absence
//! through its return type (`Option`, `bool`, a cursor at the end
//! position).
//!
//! Programming errors such as dereferencing a position into a recycled
//! node slot are bugs in the tree itself and panic with an invariant
//! message instead of surfacing here.
//!
//! [`at`]: crate::GenericMap::at
//! [`at_mut`]: crate::GenericMap::at_mut

use thiserror::Error;

/// Errors reported by checked map accessors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// The requested key is not present in the map.
	///
	/// Returned by [`at`](crate::GenericMap::at) and
	/// [`at_mut`](crate::GenericMap::at_mut). Callers that prefer an
	/// `Option` should use [`get`](crate::GenericMap::get) instead.
	#[error("key not found")]
	KeyNotFound,
}

/// A Result type alias using the map's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
