//! # Base types for rookery
//!
//! This is an auxiliary crate for `rookery`, which contains the plain value types: squares, sides,
//! roles, cells and square sets. It has no chess rules in it.
//!
//! Normally you don't want to use this crate directly. Use `rookery` instead.

pub mod bitboard;
pub mod geometry;
pub mod types;
