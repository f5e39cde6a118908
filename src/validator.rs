use serde_json::Value;

use crate::error::InvalidType;

/// Checks a dynamically typed value for a dotted-decimal IPv4 address.
///
/// Non-string values are a usage error and come back as `Err`, never as
/// `Ok(false)`. Strings are handed to [`is_ipv4`].
pub fn is_valid_ipv4(value: &Value) -> Result<bool, InvalidType>
{
    match value
    {
        Value::String(s) => Ok(is_ipv4(s)),
        other => Err(InvalidType::of(other)),
    }
}

/// Returns true if `s`, once surrounding whitespace is trimmed, is four
/// dot-separated decimal octets in 0..=255 with no leading zeros.
pub fn is_ipv4(s: &str) -> bool
{
    let s = s.trim_matches(is_space);

    let mut count = 0;
    for octet in s.split('.')
    {
        count += 1;

        if count > 4 || !check_octet(octet) { return false; }
    }

    count == 4
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators.
fn is_space(c: char) -> bool
{
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn check_octet(octet: &str) -> bool
{
    if octet.is_empty() || !octet.bytes().all(|b| b.is_ascii_digit())
    {
        return false;
    }

    if octet.len() > 1 && octet.starts_with('0')
    {
        return false;
    }

    // digits only at this point, so the only parse failure left is overflow
    octet.parse::<u8>().is_ok()
}
