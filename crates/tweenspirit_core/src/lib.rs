//! Tweenspirit Core
//!
//! Plain value types shared by the animation crate:
//!
//! - **Geometry**: `Point`, `Size`, `Rect` and the 2x3 `Affine2D` matrix
//! - **Color**: RGBA with channels in `0.0..=1.0`
//!
//! Every type has a fixed component layout so tracks can interpolate it
//! channel by channel.
//!
//! # Example
//!
//! ```rust
//! use tweenspirit_core::{Color, Rect};
//!
//! assert_eq!(Rect::new(1.0, 2.0, 100.0, 50.0).to_array(), [1.0, 2.0, 100.0, 50.0]);
//! assert_eq!(Color::from_hex(0xFF0000).to_array(), [1.0, 0.0, 0.0, 1.0]);
//! ```

pub mod color;
pub mod geometry;

pub use color::Color;
pub use geometry::{Affine2D, Point, Rect, Size};
