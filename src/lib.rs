//! # zz-extension
//!
//! Namespaced convenience helpers for standard and platform types.
//!
//! Every helper is reached through the [`Zz`] wrapper instead of being added
//! to the host type directly, so library behaviour never collides with the
//! type's own methods:
//!
//! ```
//! use zz_extension::{ZzCompatible, ZzType};
//!
//! assert!("john@doe.com".zz().is_valid_email());
//! assert_eq!(3.14159_f64.zz().rounded(2), 3.14);
//! assert_eq!(ZzType::<str>::random(18).chars().count(), 18);
//! ```
//!
//! ## Capability groups
//!
//! - [`numeric`] - sign checks, parity, decimal rounding
//! - [`sequence`] - random sampling and bounded prefixes
//! - [`string`] - validation predicates, transforms, safe indexing, generators
//! - [`date`] - calendar checks and formatting
//! - [`path`] - well-known directories, on-disk sizes, MIME types
//! - [`ui`] - colors, offscreen images, view hierarchies, scroll and table views

pub mod compat;
pub mod config;
pub mod date;
pub mod error;
pub mod numeric;
pub mod output;
pub mod path;
pub mod sequence;
pub mod string;
pub mod ui;

pub use compat::{Zz, ZzCompatible, ZzType};
pub use error::{Error, Result};
