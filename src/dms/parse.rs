use crate::error::{Error, Result};
use crate::types::{Degrees, Hemisphere};
use tracing::debug;

fn is_coordinate_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ':' | ',' | '°' | 'º' | '′' | '″' | '\'' | '"')
}

fn is_bearing_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ':' | '°' | 'º' | '′' | '″' | '\'' | '"')
}

/// Parse a latitude or longitude in degree/minute/second notation
///
/// The text must end with a compass letter (`N`, `S`, `E` or `W`, any case).
/// The remainder is split on whitespace, `:`, `,` and the degree, minute and
/// second glyphs (`°`, `º`, `′`, `″`, `'`, `"`):
///
/// - three fields are degrees, minutes and seconds
/// - two fields are degrees and decimal minutes
/// - a single field is the packed `dddmmss` form; latitudes are left-padded
///   with one `0` so that their degrees also take three characters
///
/// South and west are negated.
///
/// # Returns
///
/// The angle in radians, or an error describing why the text was rejected
pub fn parse_coordinate(text: &str) -> Result<f64> {
    let text = text.trim_end();

    let last = text.chars().next_back();
    let hemisphere = last
        .and_then(Hemisphere::from_char)
        .ok_or(Error::MissingHemisphere { found: last })?;

    // compass letters are ASCII
    let body = &text[..text.len() - 1];

    let mut fields: Vec<&str> = body.split(is_coordinate_separator).collect();
    if fields.last() == Some(&"") {
        fields.pop();
    }

    let degrees = match fields.as_slice() {
        [d, m, s] => number(d)? + number(m)? / 60.0 + number(s)? / 3600.0,
        [d, m] => number(d)? + number(m)? / 60.0,
        [packed] => packed_dms(packed, hemisphere)?,
        other => return Err(Error::SegmentCount(other.len())),
    };

    let degrees = if hemisphere.is_negative() {
        -degrees
    } else {
        degrees
    };

    Ok(degrees.to_radians())
}

/// Parse a bearing in degree/minute/second or decimal notation
///
/// Unlike [`parse_coordinate`] there is no compass letter and no sign flip.
/// Three fields are degrees, minutes and seconds, two fields are degrees and
/// minutes; anything else is read as a plain decimal number, taking the
/// longest numeric prefix of the text.
pub fn parse_bearing(text: &str) -> Result<f64> {
    let mut fields: Vec<&str> = text.split(is_bearing_separator).collect();
    if fields.last() == Some(&"") {
        fields.pop();
    }

    let degrees = match fields.as_slice() {
        [d, m, s] => number(d)? + number(m)? / 60.0 + number(s)? / 3600.0,
        [d, m] => number(d)? + number(m)? / 60.0,
        _ => leading_number(text)?,
    };

    Ok(degrees.to_radians())
}

/// Convert a latitude or longitude to radians, yielding `NaN` for bad text
///
/// Decimal degrees are converted directly. Text is parsed with
/// [`parse_coordinate`].
pub fn ll_to_rad<'a>(value: impl Into<Degrees<'a>>) -> f64 {
    match value.into() {
        Degrees::Decimal(degrees) => degrees.to_radians(),
        Degrees::Text(text) => parse_coordinate(text).unwrap_or_else(|error| {
            debug!(%error, text, "Unparseable coordinate");
            f64::NAN
        }),
    }
}

/// Convert a bearing to radians, yielding `NaN` for bad text
///
/// Decimal degrees are converted directly. Text is parsed with
/// [`parse_bearing`].
pub fn deg_to_rad<'a>(value: impl Into<Degrees<'a>>) -> f64 {
    match value.into() {
        Degrees::Decimal(degrees) => degrees.to_radians(),
        Degrees::Text(text) => parse_bearing(text).unwrap_or_else(|error| {
            debug!(%error, text, "Unparseable bearing");
            f64::NAN
        }),
    }
}

/// Decode the unseparated `dddmmss` form
fn packed_dms(digits: &str, hemisphere: Hemisphere) -> Result<f64> {
    let mut chars = Vec::with_capacity(digits.len() + 1);
    if hemisphere.is_latitude() {
        chars.push('0');
    }
    chars.extend(digits.chars());

    let len = chars.len();
    let slice = |from: usize, to: usize| -> String {
        chars[from.min(len)..to.min(len)].iter().collect()
    };

    let degrees = number(&slice(0, 3))?;
    let minutes = number(&slice(3, 5))?;
    let seconds = number(&slice(5, len))?;

    Ok(degrees + minutes / 60.0 + seconds / 3600.0)
}

/// Coerce a single field to a number
///
/// Empty fields count as zero, so `"51°N"` and `"5N"` still parse.
fn number(field: &str) -> Result<f64> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(0.0);
    }

    let is_decimal_literal = field
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));

    is_decimal_literal
        .then(|| field.parse::<f64>().ok())
        .flatten()
        .ok_or_else(|| Error::InvalidNumber(field.to_string()))
}

/// Read the longest decimal literal at the start of `text`
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"96.5 true"`
/// reads as `96.5`.
fn leading_number(text: &str) -> Result<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let integer_digits = digits_from(end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digits_from(end + 1);
        if integer_digits + fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits + fraction_digits == 0 {
        return Err(Error::InvalidNumber(text.to_string()));
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = digits_from(exponent_end);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .map_err(|_| Error::InvalidNumber(text.to_string()))
}
