//! Quote sanitisation for free-text fields.
//!
//! Free text ends up inside single-quoted literals, so any embedded `'`
//! would terminate the literal early. These helpers remove the character
//! outright; they are not a general escaper and leave every other
//! character untouched.

const QUOTE: char = '\'';

/// Replace every single quote with a space ("O'Hara" -> "O Hara").
///
/// Used for person and place names where dropping the quote would glue
/// two words together.
pub fn replace_quotes(value: String) -> String {
    if value.contains(QUOTE) {
        value.replace(QUOTE, " ")
    } else {
        value
    }
}

/// Remove every single quote ("Tom's Guide" -> "Toms Guide").
pub fn strip_quotes(value: String) -> String {
    if value.contains(QUOTE) {
        value.replace(QUOTE, "")
    } else {
        value
    }
}
