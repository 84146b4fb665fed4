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
use crate::decode::{check_packed_source, decode_rgbe};
use crate::encode::{check_unpacked_source, encode_rgbe};
use crate::err::RgbeError;
use crate::layout::RgbeLayout;
use crate::logging::trace;
use std::io::{ErrorKind, Read, Write};

/// 16 KiB of packed pixels are handled at once
const PACKED_CHUNK_SIZE: usize = 16384;
const PIXELS_PER_CHUNK: usize = PACKED_CHUNK_SIZE / 4;

/// Reads until `buf` is full or the reader is exhausted
fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0usize;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Decodes a stream of packed RGBE pixels until the reader is exhausted.
///
/// The stream must contain whole pixels, a trailing partial pixel is
/// an error here, unlike [decode_rgbe](crate::decode_rgbe).
pub fn decode_rgbe_stream<R: Read>(
    mut reader: R,
    layout: RgbeLayout,
) -> Result<Vec<f32>, RgbeError> {
    let mut chunk = vec![0u8; PACKED_CHUNK_SIZE];
    let mut decoded = Vec::new();
    loop {
        let read = read_chunk(&mut reader, &mut chunk)?;
        if read == 0 {
            break;
        }
        let packed = &chunk[..read];
        check_packed_source(packed)?;

        let start = decoded.len();
        decoded.resize(start + layout.unpacked_len(read), 0f32);
        let written = decode_rgbe(layout.channels(), packed, &mut decoded[start..]);
        trace!("Decoded {} RGBE pixels", written / layout.channels());

        if read < chunk.len() {
            break;
        }
    }
    Ok(decoded)
}

/// Encodes `data` and writes the packed pixels into `writer`.
///
/// Pixels are encoded through a 16 KiB scratch buffer, so `writer` sees
/// several writes for large images. `data` must contain whole pixels.
///
/// returns: number of bytes written
pub fn encode_rgbe_stream<W: Write>(
    mut writer: W,
    data: &[f32],
    layout: RgbeLayout,
) -> Result<usize, RgbeError> {
    check_unpacked_source(layout, data)?;
    let mut chunk = vec![0u8; PACKED_CHUNK_SIZE];
    let mut total = 0usize;
    for pixels in data.chunks(PIXELS_PER_CHUNK * layout.channels()) {
        let written = encode_rgbe(layout.channels(), pixels, &mut chunk);
        writer.write_all(&chunk[..written])?;
        trace!("Encoded {} RGBE pixels", written / 4);
        total += written;
    }
    writer.flush()?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode_rgbe_to_vec, encode_rgbe_to_vec};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::io::Cursor;

    /// Hands out at most 3 bytes per read
    struct Trickle<'a> {
        data: &'a [u8],
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let n = self.data.len().min(buf.len()).min(3);
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(ErrorKind::BrokenPipe, "gone"))
        }
    }

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(ErrorKind::BrokenPipe, "gone"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn random_pixels(count: usize, seed: u64) -> Vec<f32> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count).map(|_| rng.gen_range(0f32..100f32)).collect()
    }

    #[test]
    fn stream_matches_buffer_encoding() {
        for layout in [RgbeLayout::Rgb, RgbeLayout::Rgba] {
            // spans several chunks with a partial one at the end
            let data = random_pixels(10_001 * layout.channels(), 7);
            let mut out = Vec::<u8>::new();
            let n = encode_rgbe_stream(&mut out, &data, layout).unwrap();
            assert_eq!(n, 10_001 * 4);
            assert_eq!(out, encode_rgbe_to_vec(&data, layout).unwrap());

            let decoded = decode_rgbe_stream(Cursor::new(&out), layout).unwrap();
            assert_eq!(decoded, decode_rgbe_to_vec(&out, layout).unwrap());
        }
    }

    #[test]
    fn short_reads_fill_chunks() {
        let data = random_pixels(5000 * 3, 11);
        let packed = encode_rgbe_to_vec(&data, RgbeLayout::Rgb).unwrap();
        let decoded = decode_rgbe_stream(Trickle { data: &packed }, RgbeLayout::Rgb).unwrap();
        assert_eq!(decoded, decode_rgbe_to_vec(&packed, RgbeLayout::Rgb).unwrap());
    }

    #[test]
    fn empty_stream() {
        let decoded =
            decode_rgbe_stream(Cursor::new(Vec::<u8>::new()), RgbeLayout::Rgba).unwrap();
        assert!(decoded.is_empty());
        let mut out = Vec::<u8>::new();
        assert_eq!(encode_rgbe_stream(&mut out, &[], RgbeLayout::Rgb).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn partial_pixels_are_rejected() {
        assert!(matches!(
            decode_rgbe_stream(Cursor::new(&[1u8, 2, 3, 130, 5]), RgbeLayout::Rgb),
            Err(RgbeError::SourceNotMultipleOf(_))
        ));
        let mut out = Vec::<u8>::new();
        assert!(matches!(
            encode_rgbe_stream(&mut out, &[1., 2., 3., 4.], RgbeLayout::Rgb),
            Err(RgbeError::SourceNotMultipleOf(_))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn io_errors_propagate() {
        assert!(matches!(
            decode_rgbe_stream(Broken, RgbeLayout::Rgb),
            Err(RgbeError::Io(e)) if e.kind() == ErrorKind::BrokenPipe
        ));
        assert!(matches!(
            encode_rgbe_stream(Broken, &[1., 2., 3.], RgbeLayout::Rgb),
            Err(RgbeError::Io(e)) if e.kind() == ErrorKind::BrokenPipe
        ));
    }
}
