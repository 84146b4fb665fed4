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
//! Conversion between linear floating point RGB(A) and packed RGBE pixels,
//! the 4 byte shared exponent pixel format of Radiance HDR images.
//!
//! Only the pixel packing is handled here, headers and run length
//! encoding of `.hdr` files are left to the container reader or writer.
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
mod bits;
mod decode;
mod encode;
mod err;
mod layout;
mod logging;
#[cfg(feature = "rayon")]
mod parallel;
mod stream;

pub use bits::{fast_exponent_scale, fast_extract_exponent};
pub use decode::{
    decode_rgbe, decode_rgbe_into, decode_rgbe_to_rgb, decode_rgbe_to_rgba, decode_rgbe_to_vec,
};
pub use encode::{
    encode_rgb_to_rgbe, encode_rgba_to_rgbe, encode_rgbe, encode_rgbe_into, encode_rgbe_to_vec,
};
pub use err::{MismatchedSize, RgbeError};
pub use layout::RgbeLayout;
#[cfg(feature = "rayon")]
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
pub use parallel::{decode_rgbe_par, encode_rgbe_par};
pub use stream::{decode_rgbe_stream, encode_rgbe_stream};
