use etc1_compression::{
    blocks_byte_size, bytes_per_row, decode::decompress_blocks, encode::compress_pixels,
    Etc1Error, PixelFormat,
};

use crate::common::{gradient_image, noise_image, surface_bytes, ODD_SIZE};

mod common;

fn round_trip_with_padding(format: PixelFormat, padding: usize) {
    let (width, height) = ODD_SIZE;
    let image = noise_image(width, height, 3);
    let (pixel_data, stride) = surface_bytes(&image, format, padding);

    let mut blocks = vec![0; blocks_byte_size(width, height)];
    compress_pixels(format, &pixel_data, &mut blocks, width, height, stride).unwrap();

    let mut output = vec![0xCD; pixel_data.len()];
    decompress_blocks(format, width, height, &blocks, &mut output, stride).unwrap();

    let row_size = width as usize * format.bytes_per_pixel() as usize;
    for row in output.chunks(stride as usize) {
        assert!(row[row_size..].iter().all(|&byte| byte == 0xCD));
    }
}

#[test]
fn rgb8_padding_is_preserved() {
    round_trip_with_padding(PixelFormat::Rgb8, 5);
}

#[test]
fn rgb565_padding_is_preserved() {
    round_trip_with_padding(PixelFormat::Rgb565, 6);
}

#[test]
fn stride_does_not_change_the_blocks() {
    let (width, height) = ODD_SIZE;
    let image = gradient_image(width, height);

    let (packed, packed_stride) = surface_bytes(&image, PixelFormat::Rgb8, 0);
    let (padded, padded_stride) = surface_bytes(&image, PixelFormat::Rgb8, 13);

    let mut packed_blocks = vec![0; blocks_byte_size(width, height)];
    let mut padded_blocks = vec![0; blocks_byte_size(width, height)];

    compress_pixels(
        PixelFormat::Rgb8,
        &packed,
        &mut packed_blocks,
        width,
        height,
        packed_stride,
    )
    .unwrap();
    compress_pixels(
        PixelFormat::Rgb8,
        &padded,
        &mut padded_blocks,
        width,
        height,
        padded_stride,
    )
    .unwrap();

    assert_eq!(packed_blocks, padded_blocks);
}

#[test]
fn last_row_may_omit_padding() {
    let image = gradient_image(8, 8);
    let (pixel_data, stride) = surface_bytes(&image, PixelFormat::Rgb8, 4);
    let trimmed = &pixel_data[..pixel_data.len() - 4];

    let mut blocks = vec![0; blocks_byte_size(8, 8)];
    assert_eq!(
        compress_pixels(PixelFormat::Rgb8, trimmed, &mut blocks, 8, 8, stride),
        Ok(())
    );
    assert_eq!(
        compress_pixels(
            PixelFormat::Rgb8,
            &trimmed[..trimmed.len() - 1],
            &mut blocks,
            8,
            8,
            stride
        ),
        Err(Etc1Error::PixelBufferTooSmall {
            needed: trimmed.len(),
            actual: trimmed.len() - 1,
        })
    );
}

#[test]
fn oversized_blocks_buffer_keeps_its_tail() {
    let image = gradient_image(4, 4);
    let (pixel_data, stride) = surface_bytes(&image, PixelFormat::Rgb8, 0);

    let mut blocks = vec![0xEE; blocks_byte_size(4, 4) + 8];
    compress_pixels(PixelFormat::Rgb8, &pixel_data, &mut blocks, 4, 4, stride).unwrap();

    assert_eq!(&blocks[8..], &[0xEEu8; 8]);
}

#[test]
fn block_rows_match_bytes_per_row() {
    let (width, height) = ODD_SIZE;

    assert_eq!(
        blocks_byte_size(width, height),
        bytes_per_row(width) as usize * height.div_ceil(4) as usize
    );
}

#[test]
fn empty_surfaces_are_a_no_op() {
    let mut blocks = [0u8; 0];

    assert_eq!(
        compress_pixels(PixelFormat::Rgb8, &[], &mut blocks, 0, 16, 0),
        Ok(())
    );
    assert_eq!(
        compress_pixels(PixelFormat::Rgb565, &[], &mut blocks, 16, 0, 32),
        Ok(())
    );
}

#[test]
fn errors_describe_the_violation() {
    let error = Etc1Error::BlocksBufferTooSmall {
        needed: 16,
        actual: 8,
    };

    assert_eq!(
        error.to_string(),
        "Blocks buffer too small: needed 16, got 8"
    );
}
