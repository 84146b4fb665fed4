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
use crate::err::RgbeError;

/// Channel arrangement of the unpacked floating point side.
///
/// Packed RGBE pixels are always 4 bytes, whatever the layout is.
#[derive(Debug, Default, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum RgbeLayout {
    #[default]
    Rgb,
    /// Alpha is dropped on encoding and restored as fully opaque on decoding
    Rgba,
}

impl RgbeLayout {
    #[inline]
    pub const fn channels(self) -> usize {
        match self {
            RgbeLayout::Rgb => 3,
            RgbeLayout::Rgba => 4,
        }
    }

    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, RgbeLayout::Rgba)
    }

    /// Number of floats needed to hold the unpacked form of `packed_len` bytes
    #[inline]
    pub const fn unpacked_len(self, packed_len: usize) -> usize {
        (packed_len / 4) * self.channels()
    }

    /// Number of bytes needed to hold the packed form of `unpacked_len` floats
    #[inline]
    pub const fn packed_len(self, unpacked_len: usize) -> usize {
        (unpacked_len / self.channels()) * 4
    }
}

impl TryFrom<usize> for RgbeLayout {
    type Error = RgbeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(RgbeLayout::Rgb),
            4 => Ok(RgbeLayout::Rgba),
            _ => Err(RgbeError::InvalidChannelCount(value)),
        }
    }
}
