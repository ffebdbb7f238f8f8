// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — Exponential ElGamal FFI Bindings
// Licensed under the MIT License

use elgamal_core::types::SecureBytes;
use zeroize::Zeroize;

/// A byte buffer allocated by this library and owned by the caller.
///
/// The callee allocates; the caller releases the memory exactly once with
/// [`elgamal_buffer_free`]. An empty buffer has a null `data` pointer.
#[repr(C)]
#[derive(Debug)]
pub struct ElGamalBuffer {
    pub data: *mut u8,
    pub len: usize,
}

impl ElGamalBuffer {
    /// A buffer that owns nothing.
    pub const fn empty() -> Self {
        Self {
            data: std::ptr::null_mut(),
            len: 0,
        }
    }

    /// Transfers ownership of `bytes` to the caller.
    pub(crate) fn from_secure(bytes: SecureBytes) -> Self {
        let boxed = bytes.into_boxed_slice();
        let len = boxed.len();
        let data = Box::into_raw(boxed) as *mut u8;
        Self { data, len }
    }

    pub(crate) fn from_slice(bytes: &[u8]) -> Self {
        Self::from_secure(SecureBytes::from_slice(bytes))
    }

    /// Returns the bytes as a slice, or an empty slice if nothing is owned.
    ///
    /// # Safety
    ///
    /// `data` and `len` must come from this library and not have been freed.
    pub unsafe fn as_slice(&self) -> &[u8] {
        if self.data.is_null() {
            return &[];
        }
        std::slice::from_raw_parts(self.data, self.len)
    }

    /// Scrubs and frees the owned bytes, leaving the buffer empty.
    ///
    /// # Safety
    ///
    /// `data` and `len` must come from this library and not have been freed.
    unsafe fn release(&mut self) {
        if !self.data.is_null() {
            let slice = std::slice::from_raw_parts_mut(self.data, self.len);
            slice.zeroize();
            drop(Box::from_raw(slice as *mut [u8]));
            tracing::trace!(len = self.len, "released buffer");
        }
        *self = Self::empty();
    }
}

impl Default for ElGamalBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

/// Zeroizes and frees a buffer previously returned by this library.
///
/// Passing a null pointer or an already-empty buffer is a no-op.
///
/// # Safety
///
/// `buffer` must be null or point to an `ElGamalBuffer` populated by this
/// library that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn elgamal_buffer_free(buffer: *mut ElGamalBuffer) {
    if let Some(buffer) = buffer.as_mut() {
        buffer.release();
    }
}
