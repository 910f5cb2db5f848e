//! # hsimg-ops
//!
//! Pixel operations for HSDEC images.
//!
//! # Modules
//!
//! - [`monochrome`] - Rec.601 luma conversion (pure, returns a new image)
//! - [`normalize`] - global min-max intensity stretch (in place)
//! - [`stats`] - channel statistics shared by the transforms
//!
//! The two transforms deliberately keep distinct ownership contracts: the
//! pure one borrows and returns a fresh [`hsimg_core::Image`], the in-place
//! one takes an exclusive mutable reference. They are not unified behind a
//! common signature.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod monochrome;
pub mod normalize;
pub mod stats;

pub use monochrome::to_monochrome;
pub use normalize::normalize;
pub use stats::global_min_max;
