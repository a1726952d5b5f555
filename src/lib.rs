// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`pixelfilters` provides in-place photo filters for raw RGBA pixel buffers.

`pixelfilters` implements just the per-pixel kernels. Image decoding,
buffer allocation and presentation of the result should be implemented
by the caller, which is expected to:

1. allocate a writable buffer of `width * height * 4` bytes
   in R,G,B,A byte order, tightly packed and row-major (no row padding);
2. fill it with pixel data before the call;
3. consume the mutated buffer afterwards.

## Implemented filters

- [`grayscale`](fn.grayscale.html) — grayscale conversion using the average method.
- [`sepia`](fn.sepia.html) — sepia toning using fixed linear-combination coefficients.

Both filters mutate the buffer they are given and never read or write
the alpha channel.

## Performance

All methods are allocation free and run in a single pass over the buffer.
*/

#![doc(html_root_url = "https://docs.rs/pixelfilters/0.1.0")]

#![no_std]

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use core::fmt;

use rgb::FromSlice;
pub use rgb::RGBA8;

mod grayscale;
mod sepia;

pub use crate::grayscale::grayscale;
pub use crate::sepia::sepia;


/// List of all errors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Error {
    /// The buffer length doesn't match the provided image dimensions.
    InvalidBufferLength {
        /// The length the dimensions require.
        expected: usize,
        /// The length of the provided buffer.
        actual: usize,
    },

    /// `width * height * 4` doesn't fit into `usize`.
    SizeOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidBufferLength { expected, actual } => {
                write!(f, "pixel buffer length {} doesn't match the image dimensions (expected {})",
                       actual, expected)
            }
            Error::SizeOverflow => {
                write!(f, "image dimensions are too large")
            }
        }
    }
}


/// A mutable pixel buffer view.
///
/// Pixels are stored in RGBA order, row-major, without any row padding.
///
/// The view borrows the caller's memory. It never allocates, frees or
/// resizes the underlying buffer. Construction validates that the buffer
/// length matches the provided dimensions, so a filter can never read or
/// write out of bounds.
#[derive(Debug)]
pub struct PixelBufferMut<'a> {
    data: &'a mut [RGBA8],
    width: u32,
    height: u32,
}

impl<'a> PixelBufferMut<'a> {
    /// Creates a view over a pixel slice.
    ///
    /// Doesn't clone the provided data.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidBufferLength`] when `data.len() != width * height`.
    /// - [`Error::SizeOverflow`] when `width * height` doesn't fit into `usize`.
    ///
    /// [`Error::InvalidBufferLength`]: enum.Error.html#variant.InvalidBufferLength
    /// [`Error::SizeOverflow`]: enum.Error.html#variant.SizeOverflow
    pub fn new(data: &'a mut [RGBA8], width: u32, height: u32) -> Result<Self, Error> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::SizeOverflow)?;

        if data.len() != expected {
            return Err(Error::InvalidBufferLength { expected, actual: data.len() });
        }

        Ok(PixelBufferMut { data, width, height })
    }

    /// Creates a view over a raw byte slice.
    ///
    /// The bytes are reinterpreted as RGBA pixels, four bytes per pixel
    /// in R,G,B,A order. Doesn't clone the provided data.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidBufferLength`] when `data.len() != width * height * 4`.
    /// - [`Error::SizeOverflow`] when `width * height * 4` doesn't fit into `usize`.
    ///
    /// [`Error::InvalidBufferLength`]: enum.Error.html#variant.InvalidBufferLength
    /// [`Error::SizeOverflow`]: enum.Error.html#variant.SizeOverflow
    pub fn from_bytes(data: &'a mut [u8], width: u32, height: u32) -> Result<Self, Error> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(Error::SizeOverflow)?;

        if data.len() != expected {
            return Err(Error::InvalidBufferLength { expected, actual: data.len() });
        }

        Ok(PixelBufferMut { data: data.as_rgba_mut(), width, height })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }
}


#[inline]
fn f64_bound(min: f64, val: f64, max: f64) -> f64 {
    debug_assert!(min.is_finite());
    debug_assert!(val.is_finite());
    debug_assert!(max.is_finite());

    if val > max {
        max
    } else if val < min {
        min
    } else {
        val
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_zero_width() {
        let mut data: [u8; 0] = [];
        let buf = PixelBufferMut::from_bytes(&mut data, 0, 10).unwrap();
        assert_eq!(buf.width(), 0);
        assert_eq!(buf.height(), 10);
    }

    #[test]
    fn empty_buffer_zero_height() {
        let mut data: [u8; 0] = [];
        assert!(PixelBufferMut::from_bytes(&mut data, 10, 0).is_ok());
    }

    #[test]
    fn short_buffer() {
        let mut data = [0u8; 15];
        assert_eq!(
            PixelBufferMut::from_bytes(&mut data, 2, 2).unwrap_err(),
            Error::InvalidBufferLength { expected: 16, actual: 15 },
        );
    }

    #[test]
    fn long_buffer() {
        let mut data = [0u8; 20];
        assert_eq!(
            PixelBufferMut::from_bytes(&mut data, 2, 2).unwrap_err(),
            Error::InvalidBufferLength { expected: 16, actual: 20 },
        );
    }

    #[test]
    fn not_a_pixel_multiple() {
        let mut data = [0u8; 7];
        assert!(PixelBufferMut::from_bytes(&mut data, 1, 2).is_err());
    }

    #[test]
    fn pixel_count_mismatch() {
        let mut data = [RGBA8::new(0, 0, 0, 0); 3];
        assert_eq!(
            PixelBufferMut::new(&mut data, 2, 2).unwrap_err(),
            Error::InvalidBufferLength { expected: 4, actual: 3 },
        );
    }

    #[test]
    fn huge_dimensions() {
        let mut data: [u8; 0] = [];
        assert_eq!(
            PixelBufferMut::from_bytes(&mut data, core::u32::MAX, core::u32::MAX).unwrap_err(),
            Error::SizeOverflow,
        );
    }
}
