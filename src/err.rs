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
use std::error::Error;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
/// Shows size mismatching
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug)]
pub enum RgbeError {
    /// Channel count is neither 3 nor 4
    InvalidChannelCount(usize),
    /// Source length is not a whole number of pixels,
    /// `expected` holds the pixel stride and `received` the source length
    SourceNotMultipleOf(MismatchedSize),
    MinimumSliceSizeMismatch(MismatchedSize),
    Io(std::io::Error),
}

impl Display for RgbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RgbeError::InvalidChannelCount(channels) => {
                write!(f, "Channel count must be 3 or 4, but it is {}", channels)
            }
            RgbeError::SourceNotMultipleOf(size) => f.write_fmt(format_args!(
                "Source length {} is not a multiple of {}",
                size.received, size.expected
            )),
            RgbeError::MinimumSliceSizeMismatch(size) => f.write_fmt(format_args!(
                "Minimum destination slice size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            RgbeError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for RgbeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RgbeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RgbeError {
    fn from(value: std::io::Error) -> Self {
        RgbeError::Io(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_is_exposed_as_source() {
        let err = RgbeError::from(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "short read",
        ));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("short read"));
    }

    #[test]
    fn size_errors_report_both_sides() {
        let err = RgbeError::MinimumSliceSizeMismatch(MismatchedSize {
            expected: 12,
            received: 9,
        });
        assert!(err.source().is_none());
        assert_eq!(
            err.to_string(),
            "Minimum destination slice size mismatch: expected=12, received=9"
        );
        assert_eq!(
            RgbeError::InvalidChannelCount(5).to_string(),
            "Channel count must be 3 or 4, but it is 5"
        );
    }
}
