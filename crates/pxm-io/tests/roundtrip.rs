//! On-disk round-trip and rejection tests for the P6 reader/writer.

use pxm_io::{IoError, PpmImage, Rgb, ppm};
use std::fs;
use std::io::ErrorKind;

fn sample_image() -> PpmImage {
    let mut img = PpmImage::new(3, 2);
    img.set_comment("created by pxm tests");
    for y in 0..2 {
        for x in 0..3 {
            img.set_pixel(
                x,
                y,
                Rgb {
                    r: (x * 40) as u8,
                    g: (y * 100) as u8,
                    b: 200,
                },
            );
        }
    }
    img
}

#[test]
fn save_load_is_byte_exact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.ppm");

    let img = sample_image();
    ppm::write(&path, &img).unwrap();
    let loaded = ppm::read(&path).unwrap();

    assert_eq!(loaded.width(), img.width());
    assert_eq!(loaded.height(), img.height());
    assert_eq!(loaded.comment(), img.comment());
    assert_eq!(loaded.as_bytes(), img.as_bytes());

    // Writing the loaded image again reproduces the file byte for byte.
    let path2 = dir.path().join("roundtrip2.ppm");
    ppm::write(&path2, &loaded).unwrap();
    assert_eq!(fs::read(&path).unwrap(), fs::read(&path2).unwrap());
}

#[test]
fn written_header_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.ppm");

    let img = sample_image();
    ppm::write(&path, &img).unwrap();

    let bytes = fs::read(&path).unwrap();
    let header = b"P6\ncreated by pxm tests\n3 2\n255";
    assert_eq!(&bytes[..header.len()], header);
    // No separator after the max value: the payload follows immediately.
    assert_eq!(bytes.len(), header.len() + 3 * 2 * 3);
}

#[test]
fn reads_conventional_newline_terminated_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("newline.ppm");

    let mut bytes = b"P6\n# netpbm style\n2 1\n255\n".to_vec();
    bytes.extend_from_slice(&[10, 20, 30, 40, 50, 60]);
    fs::write(&path, &bytes).unwrap();

    let img = ppm::read(&path).unwrap();
    assert_eq!((img.width(), img.height()), (2, 1));
    assert_eq!(img.comment(), "# netpbm style");
    assert_eq!(img.get_pixel(0, 0), Rgb { r: 10, g: 20, b: 30 });
    assert_eq!(img.get_pixel(1, 0), Rgb { r: 40, g: 50, b: 60 });
}

#[test]
fn wrong_magic_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("p5.ppm");
    fs::write(&path, b"P5\nc\n1 1\n255\n\x00").unwrap();

    assert!(matches!(ppm::read(&path), Err(IoError::Format(_))));
}

#[test]
fn unsupported_max_value_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("maxval.ppm");
    fs::write(&path, b"P6\nc\n1 1\n65535\n\x00\x00\x00").unwrap();

    let err = ppm::read(&path).unwrap_err();
    assert!(matches!(err, IoError::Format(ref m) if m.contains("max value")));

    // The diagnostic quotes the declared value verbatim.
    let path = dir.path().join("maxval99999.ppm");
    fs::write(&path, b"P6\nc\n1 1\n99999\n\x00\x00\x00").unwrap();
    let err = ppm::read(&path).unwrap_err();
    assert!(matches!(err, IoError::Format(ref m) if m.contains("99999")));
}

#[test]
fn overflowing_dimensions_are_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.ppm");
    fs::write(&path, b"P6\nc\n4294967295 4294967295\n255\n").unwrap();

    let err = ppm::read(&path).unwrap_err();
    assert!(matches!(err, IoError::Format(ref m) if m.contains("overflow")));
}

#[test]
fn truncated_payload_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.ppm");

    // Declares 2x2 but carries only one pixel.
    let mut bytes = b"P6\nc\n2 2\n255\n".to_vec();
    bytes.extend_from_slice(&[1, 2, 3]);
    fs::write(&path, &bytes).unwrap();

    match ppm::read(&path) {
        Err(IoError::Io(err)) => assert_eq!(err.kind(), ErrorKind::UnexpectedEof),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.ppm");
    assert!(matches!(ppm::read(&path), Err(IoError::Io(_))));
}
