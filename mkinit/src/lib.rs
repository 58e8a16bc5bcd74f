// Init Block Layout (addresses grow upwards):
// sp -> [ argc | argv.. | NULL | envp.. | NULL | auxv pairs | AT_NULL 0 | pad | random | strings ] <- stack_top
//
// This is the image the loader leaves on a fresh user stack before jumping to
// `_start`, built here on the host so it can be inspected or mapped into tests.

use std::fmt;

use bytemuck::{Pod, Zeroable};

/// Native word size of the target
pub const WORD: usize = size_of::<usize>();
/// Required alignment of `sp` at process entry
pub const STACK_ALIGN: usize = 16;
/// Number of bytes `AT_RANDOM` points at
pub const RANDOM_LEN: usize = 16;

pub use rt::abi::aux::{AT_ENTRY, AT_NULL, AT_PAGESZ, AT_PHDR, AT_PHENT, AT_PHNUM, AT_RANDOM};

/// One auxiliary vector entry, as laid out in memory
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct AuxEntry {
    pub key: usize,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// An argument contains a NUL byte
    ArgNul(usize),
    /// An environment entry contains a NUL byte
    EnvNul(usize),
    /// `stack_top` is not aligned to `STACK_ALIGN`
    MisalignedTop(usize),
    /// The image does not fit below `stack_top`
    TooLarge,
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::ArgNul(i) => write!(f, "argument {i} contains a NUL byte"),
            ImageError::EnvNul(i) => write!(f, "environment entry {i} contains a NUL byte"),
            ImageError::MisalignedTop(top) => {
                write!(f, "stack top {top:#x} is not {STACK_ALIGN}-byte aligned")
            }
            ImageError::TooLarge => write!(f, "image does not fit below the stack top"),
        }
    }
}

impl std::error::Error for ImageError {}

/// Contents of a process init block.
#[derive(Debug, Clone, Default)]
pub struct InitImage {
    args: Vec<Vec<u8>>,
    envs: Vec<Vec<u8>>,
    auxv: Vec<AuxEntry>,
    random: [u8; RANDOM_LEN],
}

impl InitImage {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        Self {
            args: args.into_iter().map(|a| a.as_ref().to_vec()).collect(),
            ..Self::default()
        }
    }

    /// Appends a `name=value` environment entry.
    pub fn env(mut self, entry: impl AsRef<[u8]>) -> Self {
        self.envs.push(entry.as_ref().to_vec());
        self
    }

    /// Sets auxiliary vector entry `key`, replacing an earlier value.
    pub fn aux(mut self, key: usize, value: usize) -> Self {
        match self.auxv.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.value = value,
            None => self.auxv.push(AuxEntry { key, value }),
        }
        self
    }

    /// Sets the bytes `AT_RANDOM` points at.
    pub fn random(mut self, bytes: [u8; RANDOM_LEN]) -> Self {
        self.random = bytes;
        self
    }

    pub fn args(&self) -> &[Vec<u8>] {
        &self.args
    }

    fn validate(&self) -> Result<(), ImageError> {
        if let Some(i) = self.args.iter().position(|a| a.contains(&0)) {
            return Err(ImageError::ArgNul(i));
        }
        if let Some(i) = self.envs.iter().position(|e| e.contains(&0)) {
            return Err(ImageError::EnvNul(i));
        }
        Ok(())
    }

    fn strings_len(&self) -> usize {
        self.args
            .iter()
            .chain(self.envs.iter())
            .map(|s| s.len() + 1)
            .sum()
    }

    /// argc, argv + NULL, envp + NULL, auxv (with `AT_RANDOM`) + `AT_NULL`
    fn words_len(&self) -> usize {
        let aux_entries = self.auxv.iter().filter(|e| e.key != AT_RANDOM).count() + 2;
        1 + self.args.len() + 1 + self.envs.len() + 1 + aux_entries * 2
    }

    /// Upper bound of the serialized size, padding included.
    pub fn size_bound(&self) -> usize {
        self.strings_len() + RANDOM_LEN + self.words_len() * WORD + STACK_ALIGN
    }

    /// Lays out the image so that it ends at `stack_top`.
    ///
    /// Returns the image bytes; the process `sp` is
    /// `stack_top - image.len()` and is `STACK_ALIGN`-aligned.
    pub fn serialize(&self, stack_top: usize) -> Result<Vec<u8>, ImageError> {
        self.validate()?;
        if stack_top % STACK_ALIGN != 0 {
            return Err(ImageError::MisalignedTop(stack_top));
        }
        if stack_top < self.size_bound() {
            return Err(ImageError::TooLarge);
        }

        // strings go right below the top, args first
        let strings_start = stack_top - self.strings_len();
        let random_addr = strings_start - RANDOM_LEN;

        let mut words: Vec<usize> = Vec::with_capacity(self.words_len());
        let mut strings: Vec<u8> = Vec::with_capacity(self.strings_len());
        let mut place = |s: &[u8]| {
            let addr = strings_start + strings.len();
            strings.extend_from_slice(s);
            strings.push(0);
            addr
        };

        words.push(self.args.len());
        for arg in &self.args {
            words.push(place(arg));
        }
        words.push(0);
        for env in &self.envs {
            words.push(place(env));
        }
        words.push(0);

        let mut auxv: Vec<AuxEntry> = self
            .auxv
            .iter()
            .copied()
            .filter(|e| e.key != AT_RANDOM)
            .collect();
        auxv.push(AuxEntry {
            key: AT_RANDOM,
            value: random_addr,
        });
        auxv.push(AuxEntry {
            key: AT_NULL,
            value: 0,
        });
        words.extend_from_slice(bytemuck::cast_slice(&auxv));

        let words_bytes: &[u8] = bytemuck::cast_slice(&words);
        let sp = (random_addr - words_bytes.len()) & !(STACK_ALIGN - 1);

        let mut image = vec![0u8; stack_top - sp];
        image[..words_bytes.len()].copy_from_slice(words_bytes);
        let off = random_addr - sp;
        image[off..off + RANDOM_LEN].copy_from_slice(&self.random);
        let off = strings_start - sp;
        image[off..].copy_from_slice(&strings);

        Ok(image)
    }

    /// Serializes the image into host memory so it can be decoded in place.
    pub fn load(&self) -> Result<LoadedImage, ImageError> {
        let chunks = self.size_bound().div_ceil(STACK_ALIGN);
        // u128 is 16-byte aligned, so the top of the buffer is too
        let mut mem = vec![0u128; chunks];
        let base = mem.as_ptr() as usize;
        let stack_top = base + chunks * STACK_ALIGN;

        let image = self.serialize(stack_top)?;
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut mem[..]);
        let start = bytes.len() - image.len();
        bytes[start..].copy_from_slice(&image);

        Ok(LoadedImage {
            mem,
            sp: base + start,
        })
    }
}

/// An init block living in host memory.
pub struct LoadedImage {
    mem: Vec<u128>,
    sp: usize,
}

impl LoadedImage {
    /// The stack pointer a process would start with.
    pub fn sp(&self) -> *const usize {
        self.sp as *const usize
    }

    pub fn stack_top(&self) -> usize {
        self.mem.as_ptr() as usize + self.mem.len() * STACK_ALIGN
    }
}
