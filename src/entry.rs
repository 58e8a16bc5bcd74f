//! Process entry.
//!
//! The loader jumps to `_start` with `sp` pointing at the init block.
//! `_start` passes `sp` to `__start_main`, which the program defines through
//! [`entry!`](crate::entry!). From there [`start_main`] decodes the block,
//! runs the program's entry point and exits with its return value.

use log::{debug, trace};

use crate::args::{Argv, InitBlock};
use crate::config::Config;
use crate::logger;
use crate::syscall::exit;

/// A program's `main`: receives `argc` and `argv`, returns the exit code.
pub type EntryPoint = fn(usize, Argv) -> i32;

/// Hands control from the loader to `main` and terminates the process.
///
/// # Safety
/// `sp` must be the stack pointer the loader handed to `_start`, pointing at
/// the full standard image: argv's NULL terminator, the NULL-terminated
/// environment and the auxv must all be present, since the log level is
/// read from the environment before `main` runs.
pub unsafe fn start_main(sp: *const usize, main: EntryPoint) -> ! {
    let block = unsafe { InitBlock::from_raw(sp) };

    let config = Config::from_env(&block);
    logger::init(config.log_level);
    trace!("init block at {:p}, argc {}", sp, block.argc());

    let code = run(&block, main);

    debug!("main returned {}, exiting", code);
    exit(code)
}

/// Calls `main` with the arguments of `block` and returns its exit code
/// unchanged.
pub fn run(block: &InitBlock, main: EntryPoint) -> i32 {
    main(block.argc(), block.argv())
}

/// Registers `main` as the program entry point.
///
/// ```ignore
/// fn main(argc: usize, argv: rt::Argv) -> i32 { 0 }
/// rt::entry!(main);
/// ```
#[macro_export]
macro_rules! entry {
    ($main:path) => {
        #[unsafe(no_mangle)]
        unsafe extern "C" fn __start_main(sp: *const usize) -> ! {
            let main: $crate::EntryPoint = $main;
            unsafe { $crate::entry::start_main(sp, main) }
        }
    };
}

// The loader leaves `sp` 16-byte aligned.
#[cfg(all(target_arch = "riscv64", target_os = "none"))]
core::arch::global_asm!(
    ".section .text.entry, \"ax\"",
    ".globl _start",
    "_start:",
    "mv a0, sp",
    "li fp, 0", // end of frame chain
    "call __start_main",
    // not reached
    "unimp",
);
