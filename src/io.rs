use crate::syscall::{Fd, write};

/// A byte sink that hands back the raw kernel result of each write.
///
/// Programs written against this trait can be pointed at a file descriptor
/// at runtime and at a recording buffer in tests.
pub trait RawWrite {
    /// Writes `buf` once. Returns the number of bytes taken or `-errno`.
    fn raw_write(&mut self, buf: &[u8]) -> isize;
}

impl RawWrite for Fd {
    fn raw_write(&mut self, buf: &[u8]) -> isize {
        write(self.as_raw(), buf)
    }
}

impl<W: RawWrite + ?Sized> RawWrite for &mut W {
    fn raw_write(&mut self, buf: &[u8]) -> isize {
        (**self).raw_write(buf)
    }
}

/// Formats through a single write per piece. A short or failed write is
/// reported as `fmt::Error`, never retried.
fn write_all_once(fd: Fd, s: &str) -> core::fmt::Result {
    let len = write(fd.as_raw(), s.as_bytes());
    if len >= 0 && len as usize == s.len() {
        Ok(())
    } else {
        Err(core::fmt::Error)
    }
}

pub struct Stdout;

impl core::fmt::Write for Stdout {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        write_all_once(Fd::STDOUT, s)
    }
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        // output errors are dropped, like printf(3)
        let _ = <$crate::Stdout as core::fmt::Write>::write_fmt(
            &mut $crate::Stdout,
            format_args!($($arg)*),
        );
    };
}

#[macro_export]
macro_rules! println {
    () => {
        $crate::print!("\n")
    };

    ($($arg:tt)*) => {
        $crate::print!("{}\n", format_args!($($arg)*))
    };
}

pub struct Stderr;

impl core::fmt::Write for Stderr {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        write_all_once(Fd::STDERR, s)
    }
}

#[macro_export]
macro_rules! eprint {
    ($($arg:tt)*) => {
        let _ = <$crate::Stderr as core::fmt::Write>::write_fmt(
            &mut $crate::Stderr,
            format_args!($($arg)*),
        );
    };
}

#[macro_export]
macro_rules! eprintln {
    () => {
        $crate::eprint!("\n")
    };

    ($($arg:tt)*) => {
        $crate::eprint!("{}\n", format_args!($($arg)*))
    };
}
