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
use crate::decode::decode_rgbe_impl;
use crate::encode::encode_rgbe_impl;
use crate::logging::trace;
use rayon::prelude::*;

/// Pixels handed to a single worker at once
const PIXELS_PER_TASK: usize = 4096;

fn decode_rgbe_par_impl<const CN: usize>(src: &[u8], dst: &mut [f32]) -> usize {
    let pixels = (src.len() / 4).min(dst.len() / CN);
    let src = &src[..pixels * 4];
    let dst = &mut dst[..pixels * CN];
    src.par_chunks(PIXELS_PER_TASK * 4)
        .zip(dst.par_chunks_mut(PIXELS_PER_TASK * CN))
        .map(|(src, dst)| decode_rgbe_impl::<CN>(src, dst))
        .sum()
}

fn encode_rgbe_par_impl<const CN: usize>(src: &[f32], dst: &mut [u8]) -> usize {
    let pixels = (src.len() / CN).min(dst.len() / 4);
    let src = &src[..pixels * CN];
    let dst = &mut dst[..pixels * 4];
    src.par_chunks(PIXELS_PER_TASK * CN)
        .zip(dst.par_chunks_mut(PIXELS_PER_TASK * 4))
        .map(|(src, dst)| encode_rgbe_impl::<CN>(src, dst))
        .sum()
}

/// Same as [decode_rgbe](crate::decode_rgbe) but spreads pixels across the rayon thread pool
pub fn decode_rgbe_par(channels: usize, src: &[u8], dst: &mut [f32]) -> usize {
    let written = match channels {
        3 => decode_rgbe_par_impl::<3>(src, dst),
        4 => decode_rgbe_par_impl::<4>(src, dst),
        _ => 0,
    };
    trace!("Decoded {} floats in parallel", written);
    written
}

/// Same as [encode_rgbe](crate::encode_rgbe) but spreads pixels across the rayon thread pool
pub fn encode_rgbe_par(channels: usize, src: &[f32], dst: &mut [u8]) -> usize {
    let written = match channels {
        3 => encode_rgbe_par_impl::<3>(src, dst),
        4 => encode_rgbe_par_impl::<4>(src, dst),
        _ => 0,
    };
    trace!("Encoded {} bytes in parallel", written);
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode_rgbe, encode_rgbe};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn matches_sequential() {
        let mut rng = StdRng::seed_from_u64(42);
        for channels in [3usize, 4] {
            let pixels = 3 * PIXELS_PER_TASK + 17;
            let src: Vec<f32> = (0..pixels * channels)
                .map(|_| rng.gen_range(0f32..1000f32))
                .collect();

            let mut packed = vec![0u8; pixels * 4];
            let mut packed_par = vec![0u8; pixels * 4];
            assert_eq!(encode_rgbe(channels, &src, &mut packed), pixels * 4);
            assert_eq!(encode_rgbe_par(channels, &src, &mut packed_par), pixels * 4);
            assert_eq!(packed, packed_par);

            let mut unpacked = vec![0f32; pixels * channels];
            let mut unpacked_par = vec![0f32; pixels * channels];
            assert_eq!(decode_rgbe(channels, &packed, &mut unpacked), pixels * channels);
            assert_eq!(
                decode_rgbe_par(channels, &packed, &mut unpacked_par),
                pixels * channels
            );
            assert_eq!(unpacked, unpacked_par);
        }
    }

    #[test]
    fn invalid_channels_is_noop() {
        let mut floats = [-1f32; 8];
        let mut bytes = [0xaau8; 8];
        assert_eq!(decode_rgbe_par(2, &[1, 2, 3, 4], &mut floats), 0);
        assert_eq!(encode_rgbe_par(5, &[1.; 10], &mut bytes), 0);
        assert!(floats.iter().all(|&v| v == -1.));
        assert!(bytes.iter().all(|&v| v == 0xaa));
    }

    #[test]
    fn partial_pixels_are_ignored() {
        let mut floats = [0f32; 6];
        assert_eq!(
            decode_rgbe_par(3, &[255, 255, 255, 136, 1, 2], &mut floats),
            3
        );
        assert_eq!(&floats[..3], &[255., 255., 255.]);
    }
}
