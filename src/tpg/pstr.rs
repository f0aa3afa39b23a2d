//! Length-prefixed strings: one length byte followed by that many raw bytes.

use super::consts::MAX_STRING_SIZE;
use encoding_rs::{EncoderResult, WINDOWS_1252};
use std::io::{self, Read, Write};

pub fn read_pstr<R: Read>(reader: &mut R) -> io::Result<String> {
    let mut len = [0u8; 1];
    reader.read_exact(&mut len)?;

    let mut buf = vec![0u8; len[0] as usize];
    reader.read_exact(&mut buf)?;

    let (value, _) = WINDOWS_1252.decode_without_bom_handling(&buf);
    Ok(value.into_owned())
}

/// Writes `bytes` with a length prefix, truncating to 255 bytes.
///
/// Returns the number of content bytes written, which always equals the
/// emitted length byte.
pub fn write_pstr<W: Write>(writer: &mut W, bytes: &[u8]) -> io::Result<usize> {
    let len = bytes.len().min(MAX_STRING_SIZE);
    writer.write_all(&[len as u8])?;
    writer.write_all(&bytes[..len])?;
    Ok(len)
}

/// Converts `value` to Windows-1252, replacing unmappable characters with `?`.
pub fn encode_string(value: &str) -> Vec<u8> {
    let mut encoder = WINDOWS_1252.new_encoder();
    let mut bytes = Vec::with_capacity(value.len());
    let mut rest = value;
    loop {
        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(rest, &mut bytes, true);
        rest = &rest[read..];
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => bytes.reserve(rest.len().max(1)),
            EncoderResult::Unmappable(_) => bytes.push(b'?'),
        }
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reading_works() {
        let mut data: &[u8] = b"\x05HELLO\x00rest";
        assert_eq!(read_pstr(&mut data).unwrap(), "HELLO");
        assert_eq!(read_pstr(&mut data).unwrap(), "");
        assert_eq!(data, b"rest");
    }

    #[test]
    fn reading_decodes_windows_1252() {
        let mut data: &[u8] = b"\x04Caf\xe9";
        assert_eq!(read_pstr(&mut data).unwrap(), "Café");
    }

    #[test]
    fn reading_fails_for_short_string() {
        let mut data: &[u8] = b"\x0aABC";
        let err = read_pstr(&mut data).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn writing_truncates_to_255_bytes() {
        let mut out = Vec::new();
        let written = write_pstr(&mut out, &[b'A'; 300]).unwrap();
        assert_eq!(written, 255);
        assert_eq!(out[0], 255);
        assert_eq!(out.len(), 256);
    }

    #[test]
    fn encoding_replaces_unmappable_characters() {
        assert_eq!(encode_string("Café ☕ ok"), b"Caf\xe9 ? ok");
    }

    proptest! {
        #[test]
        fn length_prefix_matches_emitted_bytes(s in ".{0,300}") {
            let mut out = Vec::new();
            let written = write_pstr(&mut out, &encode_string(&s)).unwrap();
            prop_assert_eq!(out[0] as usize, written);
            prop_assert_eq!(out.len() - 1, written);
        }
    }
}
