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
use rgbeforge::{decode_rgbe_par, encode_rgbe_par, encode_rgbe_stream, RgbeLayout};
use std::fs::File;
use std::io::BufWriter;

fn max_relative_error(source: &[f32], decoded: &[f32]) -> f32 {
    let mut worst = 0f32;
    for (src, dst) in source.chunks_exact(3).zip(decoded.chunks_exact(3)) {
        let max = src[0].max(src[1]).max(src[2]);
        if max <= 0. {
            continue;
        }
        for c in 0..3 {
            worst = worst.max((src[c] - dst[c]).abs() / max);
        }
    }
    worst
}

fn main() {
    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "./assets/sample.hdr".to_string());
    let output = args.next().unwrap_or_else(|| "./packed.rgbe".to_string());

    let img = image::open(&input)
        .expect("Failed to open image")
        .to_rgb32f();
    let (width, height) = img.dimensions();
    let source = img.as_raw();
    println!("{} {}x{}", input, width, height);

    let mut packed = vec![0u8; RgbeLayout::Rgb.packed_len(source.len())];
    let instant = std::time::Instant::now();
    let written = encode_rgbe_par(3, source, &mut packed);
    println!("Encoded {} bytes in {:?}", written, instant.elapsed());

    let mut decoded = vec![0f32; source.len()];
    let instant = std::time::Instant::now();
    let decoded_count = decode_rgbe_par(3, &packed, &mut decoded);
    println!("Decoded {} floats in {:?}", decoded_count, instant.elapsed());

    println!(
        "Max relative error {}",
        max_relative_error(source, &decoded)
    );

    let file = File::create(&output).expect("Failed to create output file");
    encode_rgbe_stream(BufWriter::new(file), source, RgbeLayout::Rgb)
        .expect("Failed to write packed pixels");

    image::Rgb32FImage::from_raw(width, height, decoded)
        .expect("Decoded buffer does not match dimensions")
        .save("decoded.exr")
        .unwrap();
}
