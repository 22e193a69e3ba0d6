//! Constant values for the edukyber library
//!
//! Plain data only: no arithmetic and no dependencies, so every other crate in
//! the workspace can depend on it.

#![no_std]

pub mod pqc;
