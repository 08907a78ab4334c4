//! Parsers for the heterogeneous string encodings found in drone image
//! metadata.
//!
//! EXIF/XMP extraction itself is out of scope; these functions take the raw
//! tag strings an extractor yields and turn them into plain numbers:
//!
//! - `"4.5 mm"` → [`strip_unit`] → `4.5`
//! - `"37 deg 58' 30.12\" N"` → [`dms_to_decimal`] → `37.975033…`
//! - `"Above Sea Level: 142.7 m"` → [`extract_first_float`] → `Some(142.7)`
//!
//! Malformed input is always a [`Error::Parse`] carrying the offending
//! string; the single deliberate exception is [`extract_first_float`], which
//! reports "no number present" as `None` so a caller can fall back to an
//! alternate altitude source instead of aborting.

use crate::error::{Error, Result};

/// Default token separating degrees from minutes in DMS strings, as emitted
/// by exiftool. Sources that use a literal `°` can pass it to
/// [`dms_to_decimal_with`] instead.
pub const DEFAULT_DEGREE_TOKEN: &str = "deg";

/// Parse a number with a single trailing unit suffix, e.g. `"35 mm"` → 35.0.
///
/// The suffix is one word token (alphabetic run) after optional whitespace.
/// A bare number with no suffix parses as well.
pub fn strip_unit(text: &str) -> Result<f64> {
    let numeric = text
        .trim_end()
        .trim_end_matches(|c: char| c.is_alphabetic())
        .trim_end();
    if numeric.is_empty() {
        return Err(Error::parse("number with unit suffix", text));
    }
    numeric
        .parse::<f64>()
        .map_err(|_| Error::parse("number with unit suffix", text))
}

/// Parse a DMS-with-hemisphere angle using the default `"deg"` degree token.
///
/// `"37 deg 58' 30.12\" N"` → `37.975033…`; `S` and `W` hemispheres negate.
pub fn dms_to_decimal(text: &str) -> Result<f64> {
    dms_to_decimal_with(text, DEFAULT_DEGREE_TOKEN)
}

/// Parse a `D <token> M' S" H` angle into signed decimal degrees.
///
/// The degree delimiter is caller-supplied because metadata sources disagree
/// on it (`"deg"`, `"°"`, …). Minutes end at an apostrophe, seconds at a
/// double quote, and the trailing hemisphere letter must be one of N/S/E/W.
pub fn dms_to_decimal_with(text: &str, degree_token: &str) -> Result<f64> {
    let malformed = || Error::parse("DMS angle", text);

    let (deg_text, rest) = text.split_once(degree_token).ok_or_else(malformed)?;
    let (min_text, rest) = rest.split_once('\'').ok_or_else(malformed)?;
    let (sec_text, hemi_text) = rest.split_once('"').ok_or_else(malformed)?;

    let degrees: f64 = deg_text.trim().parse().map_err(|_| malformed())?;
    let minutes: f64 = min_text.trim().parse().map_err(|_| malformed())?;
    let seconds: f64 = sec_text.trim().parse().map_err(|_| malformed())?;

    let sign = match hemi_text.trim() {
        "N" | "E" => 1.0,
        "S" | "W" => -1.0,
        _ => return Err(malformed()),
    };

    Ok(sign * dms_components_to_decimal(degrees, minutes, seconds))
}

/// Combine already-split degree/minute/second components into decimal
/// degrees. Useful for metadata sources that deliver the three rationals
/// separately rather than as one formatted string.
pub fn dms_components_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

/// Find the first optionally-signed decimal number embedded in free text.
///
/// Returns `None` when the text contains no number at all — for altitude
/// tags this means "altitude unavailable", which the caller must resolve
/// from another source rather than have this function guess.
pub fn extract_first_float(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        // Widen left over an optional leading '.' and sign.
        let mut start = i;
        if start > 0 && bytes[start - 1] == b'.' {
            start -= 1;
        }
        if start > 0 && (bytes[start - 1] == b'-' || bytes[start - 1] == b'+') {
            start -= 1;
        }
        // Widen right over digits and at most one decimal point.
        let mut end = i + 1;
        let mut seen_dot = text[start..i].contains('.');
        while end < bytes.len() {
            match bytes[end] {
                b'0'..=b'9' => end += 1,
                b'.' if !seen_dot => {
                    seen_dot = true;
                    end += 1;
                }
                _ => break,
            }
        }
        if let Ok(value) = text[start..end].parse::<f64>() {
            return Some(value);
        }
        i = end;
    }
    None
}
