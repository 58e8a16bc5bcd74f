//! Decoding of the process init block.
//!
//! At process entry `sp` points at the init block the loader built:
//!
//! ```text
//! sp ->  argc                  one native word
//!        argv[0] .. argv[argc-1]  one pointer-sized slot each
//!        NULL
//!        envp[0] .. envp[n-1]
//!        NULL
//!        (key, value) pairs    auxiliary vector
//!        (AT_NULL, 0)
//! ```
//!
//! Every string is NUL-terminated and lives above the block. The whole
//! region belongs to the loader, stays valid for the lifetime of the process
//! and is never written, so everything here hands out `'static` borrows.
//!
//! `argc` and `argv` only depend on the first `argc + 1` words. Environment
//! and auxv lookups walk past argv's NULL and rely on the full image.

use core::ffi::CStr;
use core::iter::FusedIterator;

use crate::abi::aux::AT_NULL;

/// The decoded process init block.
#[derive(Debug, Clone, Copy)]
pub struct InitBlock {
    argc: usize,
    argv: Argv,
}

impl InitBlock {
    /// Decodes the init block located at `sp`.
    ///
    /// This is the only place the raw layout is interpreted. Nothing is
    /// copied; the returned view refers to the slots in place.
    ///
    /// # Safety
    /// `sp` must point at a well-formed init block that stays valid and
    /// unmodified for the rest of the program. A malformed block is not
    /// detected.
    pub unsafe fn from_raw(sp: *const usize) -> Self {
        debug_assert!(!sp.is_null());
        debug_assert!(sp.is_aligned());

        let argc = unsafe { sp.read() };
        let base = unsafe { sp.add(1) }.cast::<*const u8>();

        Self {
            argc,
            argv: Argv { base, len: argc },
        }
    }

    /// Number of arguments, including the program name.
    pub fn argc(&self) -> usize {
        self.argc
    }

    pub fn argv(&self) -> Argv {
        self.argv
    }

    /// Iterates the environment as `name=value` strings.
    pub fn env(&self) -> EnvIter {
        // skip argv and its NULL terminator
        let envp = unsafe { self.argv.base.add(self.argc + 1) };
        EnvIter { next: envp }
    }

    /// Returns the value of environment variable `name`, if set.
    pub fn var(&self, name: &str) -> Option<&'static CStr> {
        let name = name.as_bytes();
        self.env().find_map(|entry| {
            let bytes = entry.to_bytes_with_nul();
            if bytes.len() > name.len()
                && bytes.starts_with(name)
                && bytes[name.len()] == b'='
            {
                CStr::from_bytes_with_nul(&bytes[name.len() + 1..]).ok()
            } else {
                None
            }
        })
    }

    /// Iterates the auxiliary vector, excluding the `AT_NULL` terminator.
    pub fn auxv(&self) -> AuxIter {
        let mut slot = self.env().next;
        // step over the remaining env entries and the NULL after them
        unsafe {
            while !slot.read().is_null() {
                slot = slot.add(1);
            }
            slot = slot.add(1);
        }
        AuxIter {
            next: slot.cast::<usize>(),
        }
    }

    /// Looks up auxiliary vector entry `key`.
    pub fn aux(&self, key: usize) -> Option<usize> {
        self.auxv().find(|&(k, _)| k == key).map(|(_, v)| v)
    }
}

/// In-place view of the argument pointer array.
///
/// Length is exactly `argc`. Indexing past the end yields `None` instead of
/// touching the NULL terminator or beyond.
#[derive(Debug, Clone, Copy)]
pub struct Argv {
    base: *const *const u8,
    len: usize,
}

impl Argv {
    /// Returns the number of command-line arguments, including the program name.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Address of `argv[0]`, as a C `char **`.
    pub fn as_ptr(&self) -> *const *const u8 {
        self.base
    }

    /// Gets the argument at the specified index.
    pub fn get(&self, index: usize) -> Option<&'static CStr> {
        if index >= self.len {
            return None;
        }

        // SAFETY: slots below `len` hold NUL-terminated strings owned by the loader
        unsafe {
            let ptr = self.base.add(index).read();
            Some(CStr::from_ptr(ptr.cast()))
        }
    }

    /// Gets the program name.
    pub fn program(&self) -> Option<&'static CStr> {
        self.get(0)
    }

    /// Iterates args, including the program name.
    pub fn iter(&self) -> ArgvIter {
        ArgvIter {
            argv: *self,
            current: 0,
        }
    }

    /// Iterates args, excluding the program name.
    pub fn args(&self) -> ArgvIter {
        ArgvIter {
            argv: *self,
            current: self.len.min(1),
        }
    }

    /// Iterates args as `&str`, including the program name.
    pub fn iter_as_str(&self) -> ArgvStrIter {
        ArgvStrIter { iter: self.iter() }
    }

    /// Iterates args as `&str`, excluding the program name.
    pub fn args_as_str(&self) -> ArgvStrIter {
        ArgvStrIter { iter: self.args() }
    }
}

/// Iterator over command-line arguments.
pub struct ArgvIter {
    argv: Argv,
    current: usize,
}

impl Iterator for ArgvIter {
    type Item = &'static CStr;

    fn next(&mut self) -> Option<Self::Item> {
        let arg = self.argv.get(self.current)?;
        self.current += 1;
        Some(arg)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.argv.len - self.current;
        (left, Some(left))
    }
}

impl ExactSizeIterator for ArgvIter {}
impl FusedIterator for ArgvIter {}

/// Yields the arguments that are valid UTF-8, skipping the rest.
pub struct ArgvStrIter {
    iter: ArgvIter,
}

impl Iterator for ArgvStrIter {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.by_ref().find_map(|arg| arg.to_str().ok())
    }
}

impl IntoIterator for &Argv {
    type Item = &'static CStr;

    type IntoIter = ArgvIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over environment entries.
pub struct EnvIter {
    next: *const *const u8,
}

impl Iterator for EnvIter {
    type Item = &'static CStr;

    fn next(&mut self) -> Option<Self::Item> {
        unsafe {
            let ptr = self.next.read();
            if ptr.is_null() {
                return None;
            }
            self.next = self.next.add(1);
            Some(CStr::from_ptr(ptr.cast()))
        }
    }
}

impl FusedIterator for EnvIter {}

/// Iterator over `(key, value)` auxiliary vector entries.
pub struct AuxIter {
    next: *const usize,
}

impl Iterator for AuxIter {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        unsafe {
            let key = self.next.read();
            if key == AT_NULL {
                return None;
            }
            let value = self.next.add(1).read();
            self.next = self.next.add(2);
            Some((key, value))
        }
    }
}

impl FusedIterator for AuxIter {}

const _: () = assert!(size_of::<*const u8>() == size_of::<usize>());
