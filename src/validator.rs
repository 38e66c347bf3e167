use crate::field::Field;
use crate::mask::grammar::{self, DecimalParts};
use crate::mask::{GrammarMode, MAX_GRADE};

/// Re-derives a field's validity from its text alone, so validity can be
/// recomputed on blur or submit without a keystroke.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    grammar: GrammarMode,
}

impl Validator {
    pub fn new(grammar: GrammarMode) -> Self {
        Self { grammar }
    }

    pub fn is_valid(&self, text: &str) -> bool {
        if text.is_empty() || grammar::is_in_progress(text) {
            return true;
        }

        let folded = grammar::normalize_separators(text);
        let Some(parts) = DecimalParts::scan(&folded) else {
            return false;
        };

        let min_int_digits = match self.grammar {
            GrammarMode::Lenient if parts.frac_len() > 0 => 0,
            _ => 1,
        };
        if !parts.fits_canonical(min_int_digits) {
            return false;
        }

        match folded.parse::<f64>() {
            Ok(value) if !value.is_nan() => (0.0..=MAX_GRADE).contains(&value),
            _ => false,
        }
    }

    /// Checks the field and sets or clears its invalid marker.
    pub fn validate_field(&self, field: &mut Field) -> bool {
        let valid = self.is_valid(field.text());
        field.set_invalid(!valid);
        valid
    }
}
