/*++

Licensed under the Apache-2.0 license.

File Name:

   keys.rs

Abstract:

    File contains the RSA key material model and the decoders that parse it
    from its on-disk text forms.

--*/

use std::fmt::Display;

/// Key material consumed by the generator: RSA public key parts plus the
/// firmware signature the bootloader verifies at boot.
pub struct KeyMaterial {
    pub modulus: Vec<u8>,
    pub exponent: u32,
    pub signature: Vec<u8>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormatError {
    OddHexLength(usize),
    BadHexDigit(char),
    BadExponent(String),
}
impl std::error::Error for FormatError {}
impl Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OddHexLength(len) => {
                write!(f, "hex string has an odd number of digits ({len})")
            }
            Self::BadHexDigit(c) => write!(f, "invalid hex digit {c:?}"),
            Self::BadExponent(text) => write!(
                f,
                "invalid exponent {text:?}: expected a base-10 integer that fits in 32 bits"
            ),
        }
    }
}

/// Decode a hex string into bytes. Byte pairs may be separated by colons or
/// whitespace (OpenSSL prints moduli as `DE:AD:BE:EF` across multiple lines).
pub fn decode_hex(text: &str) -> Result<Vec<u8>, FormatError> {
    let clean: String = text
        .chars()
        .filter(|c| *c != ':' && !c.is_ascii_whitespace())
        .collect();
    hex::decode(&clean).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, .. } => FormatError::BadHexDigit(c),
        _ => FormatError::OddHexLength(clean.len()),
    })
}

/// Parse the public exponent from its base-10 text form.
pub fn parse_exponent(text: &str) -> Result<u32, FormatError> {
    let text = text.trim();
    text.parse::<u32>()
        .map_err(|_| FormatError::BadExponent(text.to_string()))
}
