//! Structural scanning of decimal grade text.
//!
//! The canonical shape is `^\d{0,2}(\.\d{0,2})?$` once `,` has been folded
//! into `.`. Scanning is split from the range/overflow rules so the masking
//! engine and the validator share one notion of "well formed".

pub const DOT: char = '.';
pub const COMMA: char = ',';

pub const MAX_INT_DIGITS: usize = 2;
pub const MAX_FRAC_DIGITS: usize = 2;

#[inline]
pub fn is_separator(c: char) -> bool {
    c == DOT || c == COMMA
}

pub fn has_separator(text: &str) -> bool {
    text.contains(is_separator)
}

/// Folds every `,` into `.`.
pub fn normalize_separators(text: &str) -> String {
    text.replace(COMMA, ".")
}

/// Integer and fractional digit runs of a normalized decimal text.
///
/// `frac` is `Some("")` for an in-progress value such as `7.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalParts<'a> {
    pub int: &'a str,
    pub frac: Option<&'a str>,
}

impl<'a> DecimalParts<'a> {
    /// Accepts only ASCII digits around at most one `.`; digit counts are
    /// not limited here.
    pub fn scan(normalized: &'a str) -> Option<Self> {
        let (int, frac) = match normalized.split_once(DOT) {
            Some((int, frac)) => (int, Some(frac)),
            None => (normalized, None),
        };

        if !all_digits(int) || !frac.map_or(true, all_digits) {
            return None;
        }
        Some(Self { int, frac })
    }

    pub fn ends_with_separator(&self) -> bool {
        self.frac == Some("")
    }

    pub fn frac_len(&self) -> usize {
        self.frac.map_or(0, str::len)
    }

    pub fn fits_canonical(&self, min_int_digits: usize) -> bool {
        (min_int_digits..=MAX_INT_DIGITS).contains(&self.int.len())
            && self.frac_len() <= MAX_FRAC_DIGITS
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// `^\d{0,2}[.,]$`: digits typed so far followed by a bare separator.
pub fn is_in_progress(text: &str) -> bool {
    match text.char_indices().last() {
        Some((idx, last)) if is_separator(last) => {
            let head = &text[..idx];
            head.len() <= MAX_INT_DIGITS && all_digits(head)
        }
        _ => false,
    }
}

/// Parses grade text the way the snapshot does: separator folded, anything
/// unparseable or non-finite becomes `0.0`.
pub fn parse_grade(text: &str) -> f64 {
    normalize_separators(text)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_splits_on_first_dot() {
        let parts = DecimalParts::scan("7.25").unwrap();
        assert_eq!(parts.int, "7");
        assert_eq!(parts.frac, Some("25"));
        assert!(DecimalParts::scan("7.2.5").is_none());
        assert!(DecimalParts::scan("-1").is_none());
        assert!(DecimalParts::scan("1e1").is_none());
    }

    #[test]
    fn scan_keeps_long_runs_for_the_caller() {
        let parts = DecimalParts::scan("123.456").unwrap();
        assert!(!parts.fits_canonical(1));
        assert_eq!(parts.frac_len(), 3);
    }

    #[test]
    fn in_progress_shapes() {
        assert!(is_in_progress("7."));
        assert!(is_in_progress("10,"));
        assert!(is_in_progress("."));
        assert!(!is_in_progress("123."));
        assert!(!is_in_progress("7.5"));
        assert!(!is_in_progress(""));
    }

    #[test]
    fn parse_grade_defaults_to_zero() {
        assert_eq!(parse_grade("7,5"), 7.5);
        assert_eq!(parse_grade("7."), 7.0);
        assert_eq!(parse_grade(""), 0.0);
        assert_eq!(parse_grade("."), 0.0);
        assert_eq!(parse_grade("NaN"), 0.0);
    }
}
