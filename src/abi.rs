/// System call numbers
///
/// The kernel implements the Linux generic syscall table, so these match the
/// riscv64 numbers from `asm-generic/unistd.h`.
#[cfg(target_arch = "riscv64")]
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syscall {
    Write = 64,
    Exit = 93,
    SchedYield = 124,
    Getpid = 172,
}

/// System call numbers of the x86_64 host, used when running the test suite.
#[cfg(target_arch = "x86_64")]
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syscall {
    Write = 1,
    SchedYield = 24,
    Getpid = 39,
    Exit = 60,
}

/// Well-known file descriptors
pub const STDIN: usize = 0;
pub const STDOUT: usize = 1;
pub const STDERR: usize = 2;

/// Auxiliary vector keys placed by the loader after the environment.
pub mod aux {
    /// Terminates the vector
    pub const AT_NULL: usize = 0;
    pub const AT_IGNORE: usize = 1;
    pub const AT_EXECFD: usize = 2;
    /// Program headers
    pub const AT_PHDR: usize = 3;
    pub const AT_PHENT: usize = 4;
    pub const AT_PHNUM: usize = 5;
    pub const AT_PAGESZ: usize = 6;
    pub const AT_BASE: usize = 7;
    pub const AT_FLAGS: usize = 8;
    /// Program entry point
    pub const AT_ENTRY: usize = 9;
    pub const AT_UID: usize = 11;
    pub const AT_EUID: usize = 12;
    pub const AT_GID: usize = 13;
    pub const AT_EGID: usize = 14;
    pub const AT_HWCAP: usize = 16;
    pub const AT_CLKTCK: usize = 17;
    pub const AT_SECURE: usize = 23;
    /// Address of 16 random bytes on the stack
    pub const AT_RANDOM: usize = 25;
    pub const AT_EXECFN: usize = 31;
}
