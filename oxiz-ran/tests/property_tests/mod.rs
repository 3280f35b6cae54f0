//! Property-based tests for oxiz-ran
//!
//! This module contains property tests for:
//! - Univariate polynomial arithmetic
//! - Real root isolation
//! - Comparison and evaluation of real algebraic numbers

mod polynomial_properties;
mod ran_properties;
mod root_properties;
