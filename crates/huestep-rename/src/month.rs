use huestep_common::RenameError;

/// Month names indexed like a calendar: slot 0 is empty, January is 1.
pub const MONTHS: [&str; 13] = [
    "",
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Index of `name` in [`MONTHS`], ignoring case.
pub fn month_index(name: &str) -> Result<usize, RenameError> {
    let lower = name.to_lowercase();
    MONTHS
        .iter()
        .skip(1)
        .position(|m| *m == lower)
        .map(|i| i + 1)
        .ok_or_else(|| RenameError::UnknownMonth(name.to_string()))
}
