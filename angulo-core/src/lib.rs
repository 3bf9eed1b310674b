//! Core type system for strongly typed angles.
//!
//! `angulo-core` provides a minimal, zero-cost angle model:
//!
//! - A *unit tag* is a zero-sized marker type implementing [`AngleUnit`].
//! - An angle magnitude tagged with a unit is an [`Angle<T, U>`], backed by a
//!   plain floating-point scalar.
//! - Conversion is an explicit, type-checked cast via [`Angle::to`] or
//!   [`angle_cast`]; a unit pair with no registered rule does not compile.
//! - Forward trigonometry is available on angles of any unit; inverse
//!   trigonometry returns radian-tagged angles.
//!
//! Most users should depend on `angulo` (the facade crate) unless they need
//! direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of degree-valued and radian-valued angles.
//! - Zero runtime overhead for unit tags (phantom types only).
//! - Explicit conversion with one formula per concrete unit pair, rather
//!   than routing everything through a canonical unit.
//!
//! # What this crate does not try to solve
//!
//! - General dimensional analysis (no compound or derived units).
//! - Exact arithmetic ([`Angle`] is backed by `f32` or `f64`).
//! - Range normalization or wrapping; magnitudes are kept as given.
//!
//! # Quick start
//!
//! Convert between degrees and radians and evaluate a trig function:
//!
//! ```rust
//! use angulo_core::{degrees, Radian};
//!
//! let a = degrees(90.0_f64);
//! let r = a.to::<Radian>();
//! assert!((r.value() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! assert!((a.sin() - 1.0).abs() < 1e-12);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `angulo-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! angulo-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in
//! `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for [`Angle<T, U>`]; serialization is
//!   the raw scalar value only.
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result`
//! from its core operations. Conversions and arithmetic are pure
//! floating-point computations; they do not panic on their own, but they
//! follow IEEE-754 behavior (NaN and infinities propagate according to the
//! underlying operation).

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod angle;
mod cast;
mod display;
mod functions;
mod literals;
mod macros;
mod scalar;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use angle::Angle;
pub use cast::{angle_cast, CastFrom};
pub use functions::{acos, asin, atan, atan2};
pub use literals::{degd, degf, radd, radf};
pub use scalar::Scalar;
pub use unit::{degrees, radians, AngleUnit, Degree, Degrees, Radian, Radians};
