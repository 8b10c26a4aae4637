//! Infrastructure layer implementing domain interfaces.
//!
//! - [`persistence`] - Repository implementations

pub mod persistence;
