/// An angle as entered by a caller, in degrees
///
/// Coordinates and bearings can be given either as signed decimal degrees or
/// as degree/minute/second text. The variant is fixed once at the API
/// boundary; text is always parsed as DMS, so a bare number inside a string
/// (e.g. `"51.5"`) is not reinterpreted as decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Degrees<'a> {
    /// Signed decimal degrees
    Decimal(f64),
    /// Degree/minute/second text such as `51°28′40″N` or `0512840N`
    Text(&'a str),
}

impl From<f64> for Degrees<'_> {
    fn from(value: f64) -> Self {
        Degrees::Decimal(value)
    }
}

impl<'a> From<&'a str> for Degrees<'a> {
    fn from(text: &'a str) -> Self {
        Degrees::Text(text)
    }
}

impl<'a> From<&'a String> for Degrees<'a> {
    fn from(text: &'a String) -> Self {
        Degrees::Text(text.as_str())
    }
}
