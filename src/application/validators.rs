use once_cell::sync::Lazy;
use regex::Regex;

// Whitespace as browsers define `\s`, which differs from Unicode White_Space:
// U+FEFF counts, U+0085 does not.
const PART: &str = r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+";

// local@domain.tld, none of the parts containing whitespace or '@'.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{PART}@{PART}\.{PART}$")).expect("email pattern must compile")
});

/// Syntactic email check on the raw input. Surrounding whitespace makes it invalid.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// True when nothing but whitespace was entered.
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}
