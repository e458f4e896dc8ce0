use chrono::Utc;

/// Derive a pseudo-unique, letters-only token from the current wall-clock
/// time, for use as a placeholder surname value.
///
/// The Unix time (including fractional seconds) is rendered as decimal text
/// and each digit is mapped to the letter `A`–`J` at the same offset; other
/// characters are dropped. Deterministic for a fixed timestamp, and only
/// statistically unique: two calls within the same clock tick return the
/// identical token.
pub fn surname_token() -> String {
    let now = Utc::now();
    letters_for(now.timestamp(), now.timestamp_subsec_micros())
}

/// Deterministic core of [`surname_token`] for a fixed timestamp, split into
/// whole seconds and microseconds.
pub fn letters_for(seconds: i64, micros: u32) -> String {
    encode_digits(&format!("{}.{:06}", seconds, micros))
}

fn encode_digits(rendered: &str) -> String {
    rendered
        .chars()
        .filter(char::is_ascii_digit)
        .map(|digit| (b'A' + (digit as u8 - b'0')) as char)
        .collect()
}
