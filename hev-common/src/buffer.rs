//! Fixed-capacity, NUL-terminated byte buffers borrowed from the caller.
//!
//! A [`BoundedBuffer`] wraps storage the caller owns. Its capacity is the
//! length of that storage and counts the terminator, so at most
//! `capacity - 1` content bytes ever fit. The occupied length is the offset
//! of the first NUL byte.
//!
//! Writes never touch a byte at or beyond the capacity, and every write
//! either fails before modifying anything or leaves the buffer terminated.

use crate::errors::GuardError;
use memchr::memchr;
use std::fmt;

/// Caller-owned buffer with a declared capacity.
pub struct BoundedBuffer<'a> {
    storage: &'a mut [u8],
}

impl<'a> BoundedBuffer<'a> {
    /// Wrap caller storage. Existing bytes are kept as the initial content.
    pub fn new(storage: &'a mut [u8]) -> Self {
        Self { storage }
    }

    /// Total capacity in bytes, terminator included.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Bytes before the first NUL. A buffer with no NUL counts as full.
    pub fn len(&self) -> usize {
        memchr(0, self.storage).unwrap_or(self.storage.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Content bytes that can still be appended while keeping the terminator.
    pub fn remaining(&self) -> usize {
        self.capacity().saturating_sub(self.len() + 1)
    }

    /// Occupied bytes, terminator excluded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.len()]
    }

    /// Occupied bytes as text.
    ///
    /// Truncation can split a multi-byte character; only the longest valid
    /// UTF-8 prefix is returned in that case.
    pub fn as_str(&self) -> &str {
        let bytes = self.as_bytes();
        match std::str::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
        }
    }

    /// Reset the content to the empty string.
    pub fn clear(&mut self) {
        if let Some(first) = self.storage.first_mut() {
            *first = 0;
        }
    }

    /// Replace the content with `src`, truncating silently to `capacity - 1`
    /// bytes.
    ///
    /// Fails with [`GuardError::InvalidParameter`] when `src` is absent or the
    /// capacity is zero; the buffer is untouched in that case.
    pub fn copy_from<'s>(&mut self, src: impl Into<Option<&'s str>>) -> Result<(), GuardError> {
        let src = src.into().ok_or(GuardError::InvalidParameter("source"))?;
        if self.storage.is_empty() {
            return Err(GuardError::InvalidParameter("destination capacity"));
        }

        let src = c_bytes(src);
        let copy_len = src.len().min(self.capacity() - 1);
        self.storage[..copy_len].copy_from_slice(&src[..copy_len]);
        self.storage[copy_len] = 0;
        Ok(())
    }

    /// Append `src` after the current content, truncating silently to the
    /// remaining space.
    ///
    /// Fails with [`GuardError::InvalidParameter`] on absent input or zero
    /// capacity, and with [`GuardError::BufferFull`] when no content byte is
    /// left. The buffer is untouched on failure.
    pub fn append<'s>(&mut self, src: impl Into<Option<&'s str>>) -> Result<(), GuardError> {
        let src = src.into().ok_or(GuardError::InvalidParameter("source"))?;
        if self.storage.is_empty() {
            return Err(GuardError::InvalidParameter("destination capacity"));
        }

        let len = self.len();
        let remaining = self.remaining();
        if remaining == 0 {
            return Err(GuardError::BufferFull {
                len,
                capacity: self.capacity(),
            });
        }

        let src = c_bytes(src);
        let copy_len = src.len().min(remaining);
        self.storage[len..len + copy_len].copy_from_slice(&src[..copy_len]);
        self.storage[len + copy_len] = 0;
        Ok(())
    }
}

impl fmt::Debug for BoundedBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedBuffer")
            .field("content", &self.as_str())
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// Source bytes up to, not including, the first NUL.
fn c_bytes(src: &str) -> &[u8] {
    let bytes = src.as_bytes();
    memchr(0, bytes).map_or(bytes, |end| &bytes[..end])
}

/// Copy `src` into `dest`. See [`BoundedBuffer::copy_from`].
pub fn bounded_copy<'s>(
    dest: &mut BoundedBuffer<'_>,
    src: impl Into<Option<&'s str>>,
) -> Result<(), GuardError> {
    dest.copy_from(src)
}

/// Append `src` to `dest`. See [`BoundedBuffer::append`].
pub fn bounded_append<'s>(
    dest: &mut BoundedBuffer<'_>,
    src: impl Into<Option<&'s str>>,
) -> Result<(), GuardError> {
    dest.append(src)
}
