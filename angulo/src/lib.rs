//! Strongly typed angles: degrees and radians kept apart at compile time.
//!
//! `angulo` is the user-facing crate in this workspace. It re-exports the
//! full API from `angulo-core`.
//!
//! The core idea is: an angle is always an [`Angle<T, U>`], where `T` is the
//! floating-point scalar (`f32` or `f64`) and `U` is a zero-sized type
//! naming the unit. This keeps the unit at compile time with no runtime
//! overhead beyond the scalar itself.
//!
//! # What this crate solves
//!
//! - Prevents passing degrees where radians are expected (and vice versa) —
//!   mixing units is a type error, not a runtime bug.
//! - Makes unit conversion explicit and type-checked
//!   ([`Angle::to::<TargetUnit>()`](Angle::to) or [`angle_cast`]).
//! - Wraps the trig primitives so forward trig accepts any unit and inverse
//!   trig always returns radian-tagged results.
//!
//! # What this crate does not try to solve
//!
//! - General units-of-measurement or dimensional analysis (no compound
//!   units); exactly two angle units exist.
//! - Arbitrary-precision arithmetic: angles are backed by `f32`/`f64`, and
//!   NaN/Infinity propagate per IEEE-754.
//!
//! # Quick start
//!
//! ```rust
//! use angulo::{degrees, Radian};
//!
//! let a = degrees(45.0_f64);
//! let r = a.to::<Radian>();
//! assert!((r.value() - core::f64::consts::FRAC_PI_4).abs() < 1e-12);
//! assert!((a.tan() - 1.0).abs() < 1e-12);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use angulo::{degrees, radians};
//!
//! let d = degrees(90.0_f64);
//! let r = radians(1.0_f64);
//! let _ = d + r; // cannot add angles with different unit tags
//! ```
//!
//! Scalar precisions do not mix either:
//!
//! ```compile_fail
//! use angulo::degrees;
//!
//! let _ = degrees(1.0_f32) + degrees(1.0_f64);
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `angulo-core`.
//! - `serde`: enables `serde` support for [`Angle<T, U>`]; serialization is
//!   the raw scalar value only.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! angulo = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result`
//! from its core operations. Conversions and arithmetic are pure
//! floating-point computations; they do not panic on their own, but they
//! follow IEEE-754 behavior (NaN and infinities propagate according to the
//! underlying operation).

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use angulo_core::*;
