use encoding_rs::WINDOWS_1250;
use std::borrow::Cow;
use tracing::warn;

/// Decode bytes written by the invoicing export tool.
///
/// The tool writes Polish diacritics in the Windows-1250 code page, so the
/// buffer is never treated as UTF-8. Bytes the code page leaves undefined
/// become U+FFFD.
pub fn decode_windows_1250(bytes: &[u8]) -> Cow<'_, str> {
    let (text, had_errors) = WINDOWS_1250.decode_without_bom_handling(bytes);
    if had_errors {
        warn!("input contains bytes undefined in Windows-1250; replaced with U+FFFD");
    }
    text
}

/// Encode text back into Windows-1250.
///
/// Characters outside the code page are written as HTML numeric character
/// references by the encoder.
pub fn encode_windows_1250(text: &str) -> Vec<u8> {
    let (bytes, _, had_unmappable) = WINDOWS_1250.encode(text);
    if had_unmappable {
        warn!("text contains characters outside Windows-1250; written as character references");
    }
    bytes.into_owned()
}
