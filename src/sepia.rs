// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{f64_bound, PixelBufferMut};

/// Applies a sepia tone to an image.
///
/// Each pixel's red, green and blue channels are replaced with a fixed
/// linear combination of their original values:
///
/// ```text
/// r' = 0.393*r + 0.769*g + 0.189*b
/// g' = 0.349*r + 0.686*g + 0.168*b
/// b' = 0.272*r + 0.534*g + 0.131*b
/// ```
///
/// Results are truncated, not rounded, and clamped to 255.
/// The alpha channel is left unchanged.
///
/// Unlike [`grayscale`](fn.grayscale.html), the filter is not idempotent:
/// reapplying it keeps shifting the colors.
pub fn sepia(src: PixelBufferMut) {
    for pixel in src.data {
        let r = pixel.r as f64;
        let g = pixel.g as f64;
        let b = pixel.b as f64;

        pixel.r = to_channel(0.393 * r + 0.769 * g + 0.189 * b);
        pixel.g = to_channel(0.349 * r + 0.686 * g + 0.168 * b);
        pixel.b = to_channel(0.272 * r + 0.534 * g + 0.131 * b);
    }
}

#[inline]
fn to_channel(c: f64) -> u8 {
    f64_bound(0.0, c, 255.0) as u8
}
