//! Freestanding user runtime.
//!
//! Provides the process entry point and raw system calls for programs
//! running without a libc. A program registers its entry function with
//! [`entry!`] and talks to the kernel through [`write`] and [`exit`].
#![cfg_attr(not(test), no_std)]

#[cfg(not(any(target_arch = "riscv64", target_arch = "x86_64")))]
compile_error!("rt only knows the syscall ABI of riscv64 (and x86_64 for host tests)");

#[macro_use]
mod io;
pub mod abi;
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod logger;
pub mod param;
pub mod syscall;

pub use args::*;
pub use entry::{EntryPoint, start_main};
pub use error::Errno;
pub use io::*;
pub use syscall::*;

#[cfg(target_os = "none")]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    eprintln!("! {}", info);
    exit(param::PANIC_EXIT_CODE)
}
