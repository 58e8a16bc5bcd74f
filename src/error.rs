/// Error number reported by the kernel.
///
/// Raw syscalls return `-errno` on failure; [`crate::syscall::check`] turns
/// such a return into `Err(Errno(errno))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Errno(pub i32);

impl Errno {
    pub const EPERM: Errno = Errno(1);
    pub const EINTR: Errno = Errno(4);
    pub const EIO: Errno = Errno(5);
    pub const EBADF: Errno = Errno(9);
    pub const EAGAIN: Errno = Errno(11);
    pub const EFAULT: Errno = Errno(14);
    pub const EINVAL: Errno = Errno(22);
    pub const EPIPE: Errno = Errno(32);
    pub const ENOSYS: Errno = Errno(38);

    /// Largest errno the kernel hands back. Anything more negative is a
    /// valid result (e.g. an address), not an error.
    pub const MAX: i32 = 4095;

    /// Interprets a raw syscall return value.
    pub fn from_ret(ret: isize) -> Option<Errno> {
        if (-(Self::MAX as isize)..0).contains(&ret) {
            Some(Errno(-ret as i32))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Errno::EPERM => "operation not permitted",
            Errno::EINTR => "interrupted system call",
            Errno::EIO => "i/o error",
            Errno::EBADF => "bad file descriptor",
            Errno::EAGAIN => "try again",
            Errno::EFAULT => "bad address",
            Errno::EINVAL => "invalid argument",
            Errno::EPIPE => "broken pipe",
            Errno::ENOSYS => "function not implemented",
            _ => "unknown error",
        }
    }
}

impl core::fmt::Display for Errno {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (errno {})", self.as_str(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_returns_in_range_are_errors() {
        assert_eq!(Errno::from_ret(-9), Some(Errno::EBADF));
        assert_eq!(Errno::from_ret(-4095), Some(Errno(4095)));
    }

    #[test]
    fn other_returns_are_not_errors() {
        assert_eq!(Errno::from_ret(0), None);
        assert_eq!(Errno::from_ret(15), None);
        assert_eq!(Errno::from_ret(-4096), None);
    }

    #[test]
    fn display_names_the_error() {
        assert_eq!(
            std::format!("{}", Errno::ENOSYS),
            "function not implemented (errno 38)"
        );
    }
}
