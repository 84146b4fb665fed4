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
use crate::bits::fast_exponent_scale;
use crate::err::{MismatchedSize, RgbeError};
use crate::layout::RgbeLayout;
use crate::logging::debug;
use num_traits::AsPrimitive;

/// Shared exponent bias plus the 8 bits of mantissa normalization
const RGBE_DECODE_BIAS: i32 = 128 + 8;

#[inline(always)]
fn decode_pixel<const CN: usize>(rgbe: &[u8], dst: &mut [f32]) {
    let e = rgbe[3];
    if e == 0 {
        dst[..CN].fill(0.);
        return;
    }
    let scale = fast_exponent_scale(1f32, e as i32 - RGBE_DECODE_BIAS);
    let r: f32 = rgbe[0].as_();
    let g: f32 = rgbe[1].as_();
    let b: f32 = rgbe[2].as_();
    dst[0] = r * scale;
    dst[1] = g * scale;
    dst[2] = b * scale;
    if CN == 4 {
        dst[3] = 1f32;
    }
}

/// Decodes whole pixels until either `src` or `dst` runs out,
/// returns the number of floats written.
pub(crate) fn decode_rgbe_impl<const CN: usize>(src: &[u8], dst: &mut [f32]) -> usize {
    assert!(CN == 3 || CN == 4);
    let mut written = 0usize;
    for (rgbe, dst) in src.chunks_exact(4).zip(dst.chunks_exact_mut(CN)) {
        decode_pixel::<CN>(rgbe, dst);
        written += CN;
    }
    written
}

/// Unpacks RGBE pixels into floating point RGB or RGBA.
///
/// Every 4 bytes of `src` make one pixel, a trailing partial pixel is ignored.
/// Pixels with a zero exponent decode to zero in every channel, alpha
/// included, other pixels get alpha of exactly `1.0`.
///
/// # Arguments
///
/// * `channels`: 3 for RGB output, 4 for RGBA output
/// * `src`: packed R, G, B, E bytes
/// * `dst`: destination, should hold `(src.len() / 4) * channels` floats
///
/// returns: number of floats written, or 0 and `dst` untouched when `channels`
/// is neither 3 nor 4
pub fn decode_rgbe(channels: usize, src: &[u8], dst: &mut [f32]) -> usize {
    match channels {
        3 => decode_rgbe_impl::<3>(src, dst),
        4 => decode_rgbe_impl::<4>(src, dst),
        _ => 0,
    }
}

pub(crate) fn check_packed_source(src: &[u8]) -> Result<(), RgbeError> {
    if src.len() % 4 != 0 {
        debug!("Packed source of {} bytes is not whole pixels", src.len());
        return Err(RgbeError::SourceNotMultipleOf(MismatchedSize {
            expected: 4,
            received: src.len(),
        }));
    }
    Ok(())
}

/// Decodes into a pre-allocated buffer, validating both sides first.
///
/// `src` must hold whole pixels, and `dst` must fit all of them, extra space
/// at the end of `dst` is left untouched.
pub fn decode_rgbe_into(
    layout: RgbeLayout,
    src: &[u8],
    dst: &mut [f32],
) -> Result<usize, RgbeError> {
    check_packed_source(src)?;
    let required = layout.unpacked_len(src.len());
    if dst.len() < required {
        debug!(
            "Decode destination holds {} floats, {} required",
            dst.len(),
            required
        );
        return Err(RgbeError::MinimumSliceSizeMismatch(MismatchedSize {
            expected: required,
            received: dst.len(),
        }));
    }
    Ok(decode_rgbe(layout.channels(), src, dst))
}

/// Decodes packed pixels into a newly allocated buffer
pub fn decode_rgbe_to_vec(src: &[u8], layout: RgbeLayout) -> Result<Vec<f32>, RgbeError> {
    check_packed_source(src)?;
    let mut dst = vec![0f32; layout.unpacked_len(src.len())];
    decode_rgbe(layout.channels(), src, &mut dst);
    Ok(dst)
}

macro_rules! define_decode {
    ($method: ident, $cn: expr, $name: expr) => {
        #[doc = concat!("Decodes packed RGBE pixels into ", $name, "

# Arguments

* `src`: packed R, G, B, E bytes, a trailing partial pixel is ignored
* `dst`: destination, should hold `(src.len() / 4) * ", $cn, "` floats

returns: number of floats written")]
        pub fn $method(src: &[u8], dst: &mut [f32]) -> usize {
            decode_rgbe_impl::<$cn>(src, dst)
        }
    };
}

define_decode!(decode_rgbe_to_rgb, 3, "RGB");
define_decode!(decode_rgbe_to_rgba, 4, "RGBA");
