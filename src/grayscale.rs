// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::PixelBufferMut;

/// Converts an image to grayscale using the average method.
///
/// Each pixel's red, green and blue channels are replaced with
/// `(r + g + b) / 3`, with truncating integer division.
/// The alpha channel is left unchanged.
///
/// Applying the filter a second time doesn't change the image:
/// once `r == g == b`, the average equals any single channel.
pub fn grayscale(src: PixelBufferMut) {
    for pixel in src.data {
        let gray = ((pixel.r as u16 + pixel.g as u16 + pixel.b as u16) / 3) as u8;
        pixel.r = gray;
        pixel.g = gray;
        pixel.b = gray;
    }
}
