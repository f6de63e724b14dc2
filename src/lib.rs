//! Justified image-row layout computation for photo-gallery grids.
//!
//! Partitions an ordered strip of images into rows and computes a uniform
//! per-row height so each row exactly fills the container width, capped at
//! a maximum height. Pure geometry — no pixel operations, no DOM; hosts
//! apply the computed placements. `no_std` compatible.
//!
//! # Modules
//!
//! - [`row`] — fill-height formula, layout constraint, per-image spacing
//! - [`gallery`] — group/row partitioning and per-image placements
//! - [`watch`] — typed recompute triggers and debounce coalescing
//! - [`svg`] — debug rendering of computed rows

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod row;

#[cfg(feature = "alloc")]
pub mod gallery;

#[cfg(feature = "std")]
pub mod watch;

#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types from row and gallery modules
pub use row::{Justify, LayoutError, NaturalSize, Spacing};

#[cfg(feature = "alloc")]
pub use gallery::{GalleryImage, Placement, Row, RowItem};

#[cfg(feature = "std")]
pub use watch::{Debounce, Trigger};
