pub mod raw {
    use core::arch::asm;

    use crate::abi::Syscall;

    /// Traps into the kernel with syscall `number` and three word arguments.
    ///
    /// Returns the kernel's result word unmodified: a non-negative value on
    /// success or `-errno` on failure. Unknown numbers are not filtered here,
    /// the kernel answers them with `-ENOSYS`.
    ///
    /// # Safety
    /// The arguments must be what the kernel expects for `number`. Pointer
    /// arguments must be valid for the access the syscall performs.
    #[cfg(target_arch = "riscv64")]
    #[inline(always)]
    pub unsafe fn raw_syscall(number: usize, a0: usize, a1: usize, a2: usize) -> isize {
        let ret: isize;
        unsafe {
            asm!(
                "ecall",
                in("a7") number,
                inlateout("a0") a0 => ret,
                in("a1") a1,
                in("a2") a2,
                options(nostack),
            );
        }
        ret
    }

    /// Traps into the kernel with syscall `number` and three word arguments.
    ///
    /// # Safety
    /// See the riscv64 variant.
    #[cfg(target_arch = "x86_64")]
    #[inline(always)]
    pub unsafe fn raw_syscall(number: usize, a0: usize, a1: usize, a2: usize) -> isize {
        let ret: isize;
        unsafe {
            asm!(
                "syscall",
                inlateout("rax") number as isize => ret,
                in("rdi") a0,
                in("rsi") a1,
                in("rdx") a2,
                // clobbered by the syscall instruction
                lateout("rcx") _,
                lateout("r11") _,
                options(nostack),
            );
        }
        ret
    }

    pub fn exit(code: usize) -> ! {
        unsafe { raw_syscall(Syscall::Exit as usize, code, 0, 0) };
        unreachable!();
    }

    pub fn write(fd: usize, buf: *const u8, len: usize) -> isize {
        unsafe { raw_syscall(Syscall::Write as usize, fd, buf as usize, len) }
    }

    pub fn getpid() -> isize {
        unsafe { raw_syscall(Syscall::Getpid as usize, 0, 0, 0) }
    }

    pub fn sched_yield() -> isize {
        unsafe { raw_syscall(Syscall::SchedYield as usize, 0, 0, 0) }
    }
}

pub use raw::raw_syscall;

use crate::abi::{STDERR, STDIN, STDOUT};
use crate::error::Errno;

/// A file descriptor passed to syscalls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fd(usize);

impl Fd {
    pub const STDIN: Fd = Fd(STDIN);
    pub const STDOUT: Fd = Fd(STDOUT);
    pub const STDERR: Fd = Fd(STDERR);

    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw file descriptor number.
    pub fn as_raw(&self) -> usize {
        self.0
    }
}

impl core::fmt::Display for Fd {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Converts a raw syscall return into `Result`, treating `-errno` as error.
#[inline(always)]
pub fn check(ret: isize) -> Result<usize, Errno> {
    match Errno::from_ret(ret) {
        Some(errno) => Err(errno),
        None => Ok(ret as usize),
    }
}

/// Terminates the process with `code`. Never returns.
pub fn exit(code: i32) -> ! {
    // the kernel reads the status as a C int, sign extension is harmless
    raw::exit(code as isize as usize)
}

/// Writes `buf` to `fd` with a single syscall.
///
/// Returns the number of bytes written or `-errno`. A short write is
/// reported as-is; there is no retry loop.
pub fn write(fd: usize, buf: &[u8]) -> isize {
    raw::write(fd, buf.as_ptr(), buf.len())
}

/// Like [`write`], with the result checked.
pub fn try_write(fd: Fd, buf: &[u8]) -> Result<usize, Errno> {
    check(write(fd.as_raw(), buf))
}

pub fn getpid() -> usize {
    // getpid cannot fail
    raw::getpid() as usize
}

pub fn sched_yield() -> Result<(), Errno> {
    check(raw::sched_yield()).map(|_| ())
}
