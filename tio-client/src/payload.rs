//! Wire format of the tio.run run API.
//!
//! A request is a sequence of records, deflated without a zlib header:
//!
//! - variables: `V<name>\0<count>\0<item>\0...`
//! - files: `F<name>\0<byte length>\0<contents>\0`
//!
//! terminated by a single `R`. The response starts with a 16 character
//! separator that also delimits the program output from the debug output.

use code_exec::ExecutionRequest;
use flate2::{write::DeflateEncoder, Compression};
use std::io::Write;

use crate::error::Error;

const SEPARATOR_LEN: usize = 16;

fn push_variable(buffer: &mut Vec<u8>, name: &str, values: &[String]) {
    buffer.push(b'V');
    buffer.extend_from_slice(name.as_bytes());
    buffer.push(0);
    buffer.extend_from_slice(values.len().to_string().as_bytes());
    buffer.push(0);
    for value in values {
        buffer.extend_from_slice(value.as_bytes());
        buffer.push(0);
    }
}

fn push_file(buffer: &mut Vec<u8>, name: &str, contents: &str) {
    buffer.push(b'F');
    buffer.extend_from_slice(name.as_bytes());
    buffer.push(0);
    buffer.extend_from_slice(contents.len().to_string().as_bytes());
    buffer.push(0);
    buffer.extend_from_slice(contents.as_bytes());
    buffer.push(0);
}

/// Serialises a request into uncompressed records.
pub fn encode_records(request: &ExecutionRequest) -> Vec<u8> {
    let mut buffer = Vec::new();
    push_variable(&mut buffer, "lang", std::slice::from_ref(&request.language));
    push_file(&mut buffer, ".code.tio", &request.code);
    push_file(&mut buffer, ".input.tio", &request.stdin);
    push_variable(&mut buffer, "TIO_CFLAGS", &request.compiler_flags);
    push_variable(&mut buffer, "TIO_OPTIONS", &request.command_line_options);
    push_variable(&mut buffer, "args", &request.arguments);
    buffer.push(b'R');
    buffer
}

/// Serialises and deflates a request body.
pub fn encode_request(request: &ExecutionRequest) -> Result<Vec<u8>, Error> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&encode_records(request))?;
    Ok(encoder.finish()?)
}

/// Removes every occurrence of the leading separator token.
pub fn decode_response(body: &str) -> Result<String, Error> {
    let separator: String = body.chars().take(SEPARATOR_LEN).collect();
    if separator.chars().count() < SEPARATOR_LEN {
        return Err(Error::InvalidResponse(format!(
            "response shorter than its {} character separator",
            SEPARATOR_LEN
        )));
    }
    Ok(body.replace(&separator, ""))
}
