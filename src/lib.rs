// ============================================================================
// Scaled Decimal Library
// Exact fixed-point decimal arithmetic over arbitrary-precision integers
// ============================================================================

//! # Scaled Decimal
//!
//! Exact, rounding-controlled decimal arithmetic for applications that mix
//! quantities expressed at different fixed precisions (6, 8, 18 decimal
//! places) and cannot tolerate binary floating-point drift.
//!
//! ## Features
//!
//! - **Arbitrary-precision backing** via `num-bigint`: multiplying two
//!   18-decimal values needs 36 decimal digits of integer headroom, well past
//!   fixed-width range
//! - **Explicit rounding contract**: only division and raw extraction round,
//!   using round-half-away-from-zero; everything else is exact
//! - **Cross-precision operands**: add, subtract, multiply, and compare mix
//!   precisions freely, upscaling exactly where needed
//! - **Immutable value semantics**: every operation returns a new value, so
//!   values share safely across threads without synchronization
//!
//! ## Example
//!
//! ```rust
//! use scaled_decimal::{DecimalError, ScaledDecimal};
//! use num_bigint::BigInt;
//!
//! // A 3-decimal balance and a 5-decimal balance of the same token
//! let a = ScaledDecimal::parse("34.567", 3)?;
//! let b = ScaledDecimal::parse("45.1234", 5)?;
//!
//! // Addition is exact; the sum carries the larger precision
//! let total = a.add(&b);
//! assert_eq!(total.to_raw(5)?, BigInt::from(7_969_040));
//!
//! // Extraction at a coarser precision rounds half away from zero, once
//! assert_eq!(total.to_raw(2)?, BigInt::from(7969));
//! # Ok::<(), DecimalError>(())
//! ```

mod errors;
mod scaled_decimal;

pub use errors::{DecimalError, DecimalResult};
pub use scaled_decimal::ScaledDecimal;
