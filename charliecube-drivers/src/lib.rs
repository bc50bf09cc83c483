//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in charliecube-core:
//!
//! - Port-register LED driver (logical pin to port group bits)

#![no_std]
#![deny(unsafe_code)]

pub mod port;
