//! Error types and result definitions for the vecstats crates.
//!
//! This crate provides the single error type ([`Error`]) and result alias
//! ([`Result<T>`]) used across the workspace, so failures propagate across
//! crate boundaries with `?` and remain matchable by variant.
//!
//! # Error Categories
//!
//! - **Context errors** ([`Error::ContextError`]): entry point called outside an
//!   aggregation, or a running state used by the wrong group
//! - **Input contract errors** ([`Error::TypeError`], [`Error::ShapeError`],
//!   [`Error::LengthError`]): the input vector does not have the required kind,
//!   dimensionality or arity
//! - **Guard errors** ([`Error::UnsupportedKind`]): dispatch reached a kind it
//!   has no arm for
//! - **Arithmetic errors** ([`Error::Overflow`]): running sum or count overflow
//! - **Configuration errors** ([`Error::InvalidArgumentError`])
//! - **Data format errors** ([`Error::Arrow`])
//! - **Internal errors** ([`Error::Internal`]): bugs or unexpected states

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
