//! Deterministic fixed-point arithmetic.
//!
//! Two kernels over plain integer raw values:
//!
//! - [`fixed64`]: signed 32.32 format on `i64`
//! - [`fixed32`]: signed 16.16 format on `i32`
//!
//! Every operation is built from integer adds, multiplies, shifts and
//! leading-zero counts, so identical inputs produce bit-identical outputs on
//! every platform, build and run. No floating point participates outside the
//! explicit conversion helpers.
//!
//! Transcendental functions come in three precision tiers selected by name:
//! the bare name (`sin`, `div`, `sqrt`) is the precise tier, with `_fast` and
//! `_fastest` variants trading accuracy for fewer polynomial terms. Invalid
//! inputs return fixed sentinel values instead of panicking; division by zero
//! returns 0 and out-of-domain arguments to `sqrt`, `log` or `asin` return 0.
//!
//! ```
//! use fixr::fixed64;
//!
//! let area = fixr::fixed64::from_str("200.0")?;
//! let side = fixed64::sqrt(area);
//! let rounded = fixed64::round_to_int(side);
//! assert_eq!(rounded, 14);
//! # Ok::<(), fixr::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod error;
pub mod fixed32;
pub mod fixed64;
pub mod poly;

pub use error::{Error, Result};
