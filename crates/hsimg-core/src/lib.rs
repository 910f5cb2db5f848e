//! # hsimg-core
//!
//! Core types for HSDEC image processing.
//!
//! This crate provides the foundational types used throughout the hsimg
//! workspace:
//!
//! - [`Pixel`] - An RGB triple with unclamped integer channels
//! - [`Image`] - A rectangular, row-major pixel buffer
//! - [`Error`] - Unified error type for buffer construction and access
//!
//! ## Design Philosophy
//!
//! An [`Image`] can only be obtained in a fully valid state: every
//! constructor either returns a buffer whose pixel count matches its
//! dimensions or an error. There is no partially-initialized image to
//! observe, and no manual release step - storage is dropped with the value.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies. The other hsimg crates build on it:
//!
//! ```text
//! hsimg-core (this crate)
//!    ^
//!    |
//!    +-- hsimg-io  (HSDEC codec)
//!    +-- hsimg-ops (monochrome, normalize)
//!    +-- hsimg-cli (driver binary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::Image;
pub use pixel::{luma, Pixel, LUMA_B, LUMA_G, LUMA_R};
