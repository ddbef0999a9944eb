//! Primitive Components
//!
//! Basic building blocks like buttons and selects.

pub mod button;
pub mod select;
