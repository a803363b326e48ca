//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped by the substance or domain they describe. Each
//! [`twine_core::Model`] implementation is a thin adapter over the
//! computation in [`crate::support`], so the same core can be exposed
//! through several adapters with different inputs and outputs.

pub mod water;
