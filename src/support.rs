//! Supporting utilities used by models.
//!
//! These modules are public because they are useful on their own, but their
//! APIs are not yet stable.

pub mod constraint;
pub mod if97;
pub mod units;
