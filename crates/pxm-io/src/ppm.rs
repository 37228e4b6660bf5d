//! PPM (P6) reading and writing.
//!
//! The header is parsed byte-exactly: magic line, one verbatim comment
//! line, a dimensions line, then the max-value token. The writer emits no
//! separator after the max value (the payload starts immediately), and the
//! reader consumes the byte terminating that token only when it is
//! whitespace, so both our own output and conventional `255\n` headers
//! round-trip without shifting the payload.

use crate::{IoError, IoResult, PpmImage};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, trace};

const PPM_MAGIC: &str = "P6";

/// The only per-channel maximum this implementation accepts.
pub const PPM_MAX_VALUE: u16 = 255;

/// Reads a binary PPM (P6) file.
///
/// # Errors
///
/// - [`IoError::Io`] if the file cannot be opened or the payload is
///   shorter than `width * height * 3` bytes.
/// - [`IoError::Format`] if the magic token is not `P6`, the header is
///   truncated or malformed, or the max value is not 255.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PpmImage> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let (width, height, comment) = read_header(&mut reader)?;
    let max_value = read_max_value(&mut reader)?;
    if max_value != u32::from(PPM_MAX_VALUE) {
        return Err(IoError::Format(format!(
            "unsupported max value {} (expected {})",
            max_value, PPM_MAX_VALUE
        )));
    }

    trace!(width, height, "reading PPM payload");

    let size = crate::payload_len(width, height).ok_or_else(|| {
        IoError::Format(format!(
            "image dimensions {}x{} overflow the payload size",
            width, height
        ))
    })?;
    let mut data = vec![0u8; size];
    reader.read_exact(&mut data)?;

    let mut image = PpmImage::from_raw(width, height, data)?;
    image.set_comment(comment);
    Ok(image)
}

/// Writes a binary PPM (P6) file.
///
/// Every channel is validated against the image's max value before its
/// pixel is written; a violation aborts the write and may leave a partial
/// file on disk.
///
/// # Errors
///
/// - [`IoError::Io`] if the file cannot be created or written.
/// - [`IoError::Format`] if a channel value exceeds the max value.
pub fn write<P: AsRef<Path>>(path: P, image: &PpmImage) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    trace!(width = image.width(), height = image.height(), "writing PPM");

    writeln!(writer, "{}", PPM_MAGIC)?;
    writeln!(writer, "{}", image.comment())?;
    write!(
        writer,
        "{} {}\n{}",
        image.width(),
        image.height(),
        image.max_value()
    )?;

    let max = image.max_value();
    for pixel in image.as_bytes().chunks_exact(3) {
        if pixel.iter().any(|&c| u16::from(c) > max) {
            return Err(IoError::Format("channel value out of range".into()));
        }
        writer.write_all(pixel)?;
    }

    writer.flush()?;
    Ok(())
}

/// Parses the three header lines: magic, comment, dimensions.
fn read_header<R: BufRead>(reader: &mut R) -> IoResult<(u32, u32, String)> {
    let magic_line = read_header_line(reader)?;
    if magic_line.split_whitespace().next() != Some(PPM_MAGIC) {
        return Err(IoError::Format("wrong PPM magic".into()));
    }

    let comment = read_header_line(reader)?;

    let dims_line = read_header_line(reader)?;
    let mut tokens = dims_line.split_whitespace();
    let width = parse_dimension(tokens.next())?;
    let height = parse_dimension(tokens.next())?;

    Ok((width, height, comment))
}

fn read_header_line<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(IoError::Format("truncated header".into()));
    }
    Ok(trim_line(&line).to_string())
}

fn parse_dimension(token: Option<&str>) -> IoResult<u32> {
    let value: u32 = token
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| IoError::Format("malformed dimensions line".into()))?;
    if value == 0 {
        return Err(IoError::Format("image dimensions must be positive".into()));
    }
    Ok(value)
}

/// Reads the max-value token.
///
/// Skips whitespace before the token, accumulates digits, then consumes
/// exactly one trailing whitespace byte if present. A non-whitespace byte
/// after the digits is the first payload byte and stays in the stream.
fn read_max_value<R: BufRead>(reader: &mut R) -> IoResult<u32> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Err(IoError::Format("truncated header".into()));
        }
        if buf[0].is_ascii_whitespace() {
            reader.consume(1);
        } else {
            break;
        }
    }

    let mut value: u32 = 0;
    let mut digits = 0usize;
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let byte = buf[0];
        if byte.is_ascii_digit() {
            value = value * 10 + u32::from(byte - b'0');
            digits += 1;
            if digits > 5 {
                return Err(IoError::Format("malformed max value token".into()));
            }
            reader.consume(1);
        } else {
            if byte.is_ascii_whitespace() {
                reader.consume(1);
            }
            break;
        }
    }

    if digits == 0 {
        return Err(IoError::Format("malformed max value token".into()));
    }
    Ok(value)
}

fn trim_line(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}
