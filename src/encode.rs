/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::bits::fast_extract_exponent;
use crate::err::{MismatchedSize, RgbeError};
use crate::layout::RgbeLayout;
use crate::logging::debug;
use num_traits::AsPrimitive;

const RGBE_EXPONENT_BIAS: i32 = 128;
/// Brightest channel below this encodes as black
const RGBE_BLACK_THRESHOLD: f64 = 1e-32;

/// Float to byte conversion rounding toward zero and wrapping on overflow.
///
/// Goes through `i32` on purpose: a direct `as u8` saturates,
/// here `256.0` becomes `0` and `-1.0` becomes `255`.
#[inline(always)]
pub(crate) fn truncate_to_u8(v: f32) -> u8 {
    let w: i32 = v.as_();
    w.as_()
}

#[inline(always)]
fn encode_pixel(src: &[f32], rgbe: &mut [u8]) {
    let r = src[0];
    let g = src[1];
    let b = src[2];

    let mut max = r;
    if g > max {
        max = g;
    }
    if b > max {
        max = b;
    }

    if f64::from(max) < RGBE_BLACK_THRESHOLD {
        rgbe[..4].fill(0);
        return;
    }

    let (frac, exp) = fast_extract_exponent(max);
    let f = frac * 256f32 / max;
    rgbe[0] = truncate_to_u8(r * f);
    rgbe[1] = truncate_to_u8(g * f);
    rgbe[2] = truncate_to_u8(b * f);
    rgbe[3] = (exp + RGBE_EXPONENT_BIAS).as_();
}

/// Encodes whole pixels until either `src` or `dst` runs out,
/// returns the number of bytes written.
pub(crate) fn encode_rgbe_impl<const CN: usize>(src: &[f32], dst: &mut [u8]) -> usize {
    assert!(CN == 3 || CN == 4);
    let mut written = 0usize;
    for (pixel, rgbe) in src.chunks_exact(CN).zip(dst.chunks_exact_mut(4)) {
        encode_pixel(pixel, rgbe);
        written += 4;
    }
    written
}

/// Packs floating point RGB or RGBA into RGBE pixels.
///
/// Only red, green and blue are encoded, alpha is read past and dropped.
/// Channel values are not clamped: negative or oversized components wrap
/// around in their byte instead of saturating.
///
/// # Arguments
///
/// * `channels`: 3 for RGB input, 4 for RGBA input
/// * `src`: interleaved pixels, a trailing partial pixel is ignored
/// * `dst`: destination, should hold `(src.len() / channels) * 4` bytes
///
/// returns: number of bytes written, or 0 and `dst` untouched when `channels`
/// is neither 3 nor 4
pub fn encode_rgbe(channels: usize, src: &[f32], dst: &mut [u8]) -> usize {
    match channels {
        3 => encode_rgbe_impl::<3>(src, dst),
        4 => encode_rgbe_impl::<4>(src, dst),
        _ => 0,
    }
}

pub(crate) fn check_unpacked_source(layout: RgbeLayout, src: &[f32]) -> Result<(), RgbeError> {
    if src.len() % layout.channels() != 0 {
        debug!(
            "Source of {} floats is not a multiple of {} channels",
            src.len(),
            layout.channels()
        );
        return Err(RgbeError::SourceNotMultipleOf(MismatchedSize {
            expected: layout.channels(),
            received: src.len(),
        }));
    }
    Ok(())
}

/// Encodes into a pre-allocated buffer, validating both sides first.
///
/// `src` must hold whole pixels, and `dst` must fit all of them, extra space
/// at the end of `dst` is left untouched.
pub fn encode_rgbe_into(
    layout: RgbeLayout,
    src: &[f32],
    dst: &mut [u8],
) -> Result<usize, RgbeError> {
    check_unpacked_source(layout, src)?;
    let required = layout.packed_len(src.len());
    if dst.len() < required {
        debug!(
            "Encode destination holds {} bytes, {} required",
            dst.len(),
            required
        );
        return Err(RgbeError::MinimumSliceSizeMismatch(MismatchedSize {
            expected: required,
            received: dst.len(),
        }));
    }
    Ok(encode_rgbe(layout.channels(), src, dst))
}

/// Encodes pixels into a newly allocated buffer
pub fn encode_rgbe_to_vec(src: &[f32], layout: RgbeLayout) -> Result<Vec<u8>, RgbeError> {
    check_unpacked_source(layout, src)?;
    let mut dst = vec![0u8; layout.packed_len(src.len())];
    encode_rgbe(layout.channels(), src, &mut dst);
    Ok(dst)
}

macro_rules! define_encode {
    ($method: ident, $cn: expr, $name: expr) => {
        #[doc = concat!("Encodes ", $name, " pixels into packed RGBE

# Arguments

* `src`: interleaved ", $name, " pixels, a trailing partial pixel is ignored
* `dst`: destination, should hold `(src.len() / ", $cn, ") * 4` bytes

returns: number of bytes written")]
        pub fn $method(src: &[f32], dst: &mut [u8]) -> usize {
            encode_rgbe_impl::<$cn>(src, dst)
        }
    };
}

define_encode!(encode_rgb_to_rgbe, 3, "RGB");
define_encode!(encode_rgba_to_rgbe, 4, "RGBA");
