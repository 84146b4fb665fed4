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
//! IEEE-754 single precision exponent fiddling used by the RGBE transforms.
//!
//! Both helpers work directly on the exponent field of `f32` and do no range
//! checks at all. They are exact for the exponents the RGBE format produces,
//! and only bit-defined outside of them.

const EXPONENT_MASK: u32 = 0xff;
const SIGN_AND_MANTISSA_MASK: u32 = 0x807f_ffff;
/// Exponent field of `0.5`
const HALF_EXPONENT_BITS: u32 = 0x3f00_0000;

/// Computes `value * 2^pw2` by adding `pw2` to the biased exponent field.
///
/// The new exponent wraps to 8 bits: nothing saturates to infinity or
/// flushes to zero, and zero or subnormal input gets a brand new exponent
/// instead of staying zero.
#[inline(always)]
pub fn fast_exponent_scale(value: f32, pw2: i32) -> f32 {
    let bits = value.to_bits();
    let exponent = ((bits >> 23) & EXPONENT_MASK).wrapping_add(pw2 as u32);
    f32::from_bits(((exponent & EXPONENT_MASK) << 23) | (bits & SIGN_AND_MANTISSA_MASK))
}

/// Splits `value` into a mantissa in `[0.5, 1.0)` and a power of two exponent.
///
/// Valid for positive normal numbers only, callers must filter
/// zero and negatives out beforehand.
#[inline(always)]
pub fn fast_extract_exponent(value: f32) -> (f32, i32) {
    let bits = value.to_bits();
    let exponent = ((bits >> 23) & EXPONENT_MASK) as i32 - 0x7e;
    let mantissa = f32::from_bits((bits & SIGN_AND_MANTISSA_MASK) | HALF_EXPONENT_BITS);
    (mantissa, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn ldexp_scales_normal_numbers() {
        assert_eq!(fast_exponent_scale(1.0, 0), 1.0);
        assert_eq!(fast_exponent_scale(1.0, -7), 1.0 / 128.0);
        assert_eq!(fast_exponent_scale(3.0, 2), 12.0);
        assert_eq!(fast_exponent_scale(-1.5, 3), -12.0);
        assert_eq!(fast_exponent_scale(0.75, -2), 0.1875);
    }

    #[test]
    fn ldexp_exponent_wraps() {
        // 127 + 128 lands in the infinity/NaN exponent
        assert_eq!(fast_exponent_scale(1.0, 128), f32::INFINITY);
        // 127 - 127 clears the exponent and mantissa of 1.0 is empty
        assert_eq!(fast_exponent_scale(1.0, -127).to_bits(), 0);
        // 127 - 128 wraps around to 255
        assert_eq!(fast_exponent_scale(1.0, -128), f32::INFINITY);
        // 127 + 130 wraps around to 1
        assert_eq!(fast_exponent_scale(1.0, 130).to_bits(), 1 << 23);
    }

    #[test]
    fn ldexp_degenerate_inputs() {
        assert_eq!(fast_exponent_scale(0.0, 5).to_bits(), 5 << 23);
        assert_eq!(fast_exponent_scale(-0.0, 0).to_bits(), 0x8000_0000);
        let subnormal = f32::from_bits(0x0000_0003);
        assert_eq!(fast_exponent_scale(subnormal, 1).to_bits(), (1 << 23) | 3);
    }

    #[test]
    fn frexp_known_values() {
        assert_eq!(fast_extract_exponent(1.0), (0.5, 1));
        assert_eq!(fast_extract_exponent(100.0), (0.78125, 7));
        assert_eq!(fast_extract_exponent(0.75), (0.75, 0));
        assert_eq!(fast_extract_exponent(1.0 / 1024.0), (0.5, -9));
        assert_eq!(fast_extract_exponent(f32::MAX).1, 128);
    }

    #[test]
    fn frexp_recomposes() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..10_000 {
            let value: f32 = rng.gen_range(1e-30f32..1e30f32);
            let (mantissa, exponent) = fast_extract_exponent(value);
            assert!((0.5..1.0).contains(&mantissa), "{value} -> {mantissa}");
            assert_eq!(fast_exponent_scale(mantissa, exponent), value);
        }
    }
}
