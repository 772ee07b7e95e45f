//! # xorpad Core Library
//!
//! This crate provides the core functionality for the `xorpad` file cipher.
//!
//! It is designed to be used by the `xorpad` command-line application, but
//! its public API can also be used to transform byte buffers directly.
//!
//! ## Key Modules
//!
//! - [`keystream`]: Generates the LCG-derived pseudorandom pad.
//! - [`partition`]: Splits the byte range into one chunk per worker.
//! - [`workers`]: Applies the XOR pass in parallel over the chunks.
//! - [`fsx`]: Cross-platform file loading (mmap or heap) and writing.
//! - [`cli`]: Command-line argument definitions.

pub mod cli;
pub mod cli_runner;
pub mod error;
pub use error::CipherError;

pub mod fsx;
pub mod keystream;
pub mod partition;
pub mod workers;
