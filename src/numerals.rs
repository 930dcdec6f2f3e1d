//! Conversion between ASCII and Marathi (Devanagari) digits.

use phf::phf_map;
use std::fmt::Display;

static TO_LOCAL: phf::Map<char, char> = phf_map! {
    '0' => '०',
    '1' => '१',
    '2' => '२',
    '3' => '३',
    '4' => '४',
    '5' => '५',
    '6' => '६',
    '7' => '७',
    '8' => '८',
    '9' => '९',
};

static FROM_LOCAL: phf::Map<char, char> = phf_map! {
    '०' => '0',
    '१' => '1',
    '२' => '2',
    '३' => '3',
    '४' => '4',
    '५' => '5',
    '६' => '6',
    '७' => '7',
    '८' => '8',
    '९' => '9',
};

/// Replaces every ASCII digit in the displayed form of `value` with its
/// Marathi counterpart. All other characters are kept as they are.
pub fn to_local_digits<T: Display + ?Sized>(value: &T) -> String {
    value
        .to_string()
        .chars()
        .map(|c| TO_LOCAL.get(&c).copied().unwrap_or(c))
        .collect()
}

/// Inverse of [`to_local_digits`].
pub fn from_local_digits(value: &str) -> String {
    value
        .chars()
        .map(|c| FROM_LOCAL.get(&c).copied().unwrap_or(c))
        .collect()
}
