//! Conversions between stored transparency bytes and editor percentages.
//!
//! Transparency fields hold 0-255; the editor shows them as 0-100 percent.

/// Converts a percentage to a stored byte, rounding and clamping to 0-255.
///
/// NaN maps to 0.
pub fn from_percent(percent: f64) -> u8 {
	if percent.is_nan() {
		return 0;
	}
	(percent * 2.55).round().clamp(0.0, 255.0) as u8
}

/// Parses user input such as `"42.5"` or `"80 %"` into a stored byte.
///
/// Only the leading number is considered; input without one maps to 0.
/// A signed or unsigned `Infinity` prefix counts as a number and clamps.
pub fn parse_percent(text: &str) -> u8 {
	from_percent(leading_number(text).unwrap_or(0.0))
}

/// Formats a stored byte as a percentage with at most two decimals.
///
/// ```
/// use ann_types::file::opacity::to_percent;
///
/// assert_eq!(to_percent(255), "100");
/// assert_eq!(to_percent(128), "50.2");
/// assert_eq!(to_percent(1), "0.39");
/// ```
pub fn to_percent(value: u8) -> String {
	let text = format!("{:.2}", f64::from(value) / 2.55);
	if let Some(whole) = text.strip_suffix(".00") {
		whole.to_string()
	} else if let Some(short) = text.strip_suffix('0') {
		short.to_string()
	} else {
		text
	}
}

fn leading_number(text: &str) -> Option<f64> {
	let text = text.trim_start();
	let (sign, unsigned) = match text.as_bytes().first() {
		Some(b'-') => (-1.0, &text[1..]),
		Some(b'+') => (1.0, &text[1..]),
		_ => (1.0, text),
	};
	if unsigned.starts_with("Infinity") {
		return Some(sign * f64::INFINITY);
	}

	let end = text
		.char_indices()
		.find(|&(_, c)| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
		.map_or(text.len(), |(i, _)| i);

	(1..=end).rev().find_map(|len| text[..len].parse::<f64>().ok())
}
