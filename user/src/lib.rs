//! Programs that run on top of `rt`.
//!
//! Each program is a plain function over an [`Argv`](rt::Argv) and a
//! [`RawWrite`](rt::RawWrite) sink, so the same code runs as a freestanding
//! binary (see `bin/`) and under the host test harness.
#![cfg_attr(not(test), no_std)]

pub mod echo;
pub mod hello;
