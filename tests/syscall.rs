#![cfg(target_os = "linux")]

use std::fs::{self, File};
use std::os::fd::AsRawFd;
use std::path::PathBuf;

use rt::abi::Syscall;
use rt::{Errno, Fd, RawWrite, check, raw_syscall, try_write, write};

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rt-{}-{}", std::process::id(), name))
}

#[test]
fn write_transfers_the_whole_buffer() {
    let path = scratch("whole");
    let file = File::create(&path).unwrap();

    let n = write(file.as_raw_fd() as usize, b"my name is ");
    drop(file);

    assert_eq!(n, 11);
    assert_eq!(fs::read(&path).unwrap(), b"my name is ");
    fs::remove_file(&path).unwrap();
}

#[test]
fn repeated_writes_repeat_output() {
    let path = scratch("twice");
    let file = File::create(&path).unwrap();
    let mut fd = Fd::new(file.as_raw_fd() as usize);

    assert_eq!(fd.raw_write(b"ab"), 2);
    assert_eq!(fd.raw_write(b"ab"), 2);
    drop(file);

    assert_eq!(fs::read(&path).unwrap(), b"abab");
    fs::remove_file(&path).unwrap();
}

#[test]
fn empty_write_returns_zero_without_output() {
    let path = scratch("empty");
    let file = File::create(&path).unwrap();

    assert_eq!(write(file.as_raw_fd() as usize, b""), 0);
    drop(file);

    assert!(fs::read(&path).unwrap().is_empty());
    fs::remove_file(&path).unwrap();
}

#[test]
fn write_never_exceeds_len() {
    let file = File::options().write(true).open("/dev/null").unwrap();
    let buf = [0x41u8; 4096];

    for len in [0, 1, 17, 4096] {
        let n = write(file.as_raw_fd() as usize, &buf[..len]);
        assert!(n >= 0 && n as usize <= len);
        // /dev/null always takes everything
        assert_eq!(n as usize, len);
    }
}

#[test]
fn bad_descriptor_is_passed_through() {
    let n = write(usize::MAX, b"lost");
    assert_eq!(n, -9);
    assert_eq!(check(n), Err(Errno::EBADF));
    assert_eq!(try_write(Fd::new(usize::MAX), b"lost"), Err(Errno::EBADF));
}

#[test]
fn unknown_syscall_reports_enosys() {
    let ret = unsafe { raw_syscall(100_000, 0, 0, 0) };
    assert_eq!(check(ret), Err(Errno::ENOSYS));
}

#[test]
fn getpid_is_idempotent() {
    let a = unsafe { raw_syscall(Syscall::Getpid as usize, 0, 0, 0) };
    let b = unsafe { raw_syscall(Syscall::Getpid as usize, 0, 0, 0) };

    assert_eq!(a, b);
    assert_eq!(rt::getpid(), std::process::id() as usize);
}

#[test]
fn sched_yield_succeeds() {
    assert_eq!(rt::sched_yield(), Ok(()));
}
