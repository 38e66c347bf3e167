use crate::mask::grammar;

/// One grade input: what is shown, what the mask last accepted, and whether
/// it is currently flagged invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    id: String,
    text: String,
    last_good: String,
    invalid: bool,
}

impl Field {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
            last_good: String::new(),
            invalid: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Live text as currently displayed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn last_good(&self) -> &str {
        &self.last_good
    }

    pub fn is_marked_invalid(&self) -> bool {
        self.invalid
    }

    /// Overwrites the displayed text without masking (a programmatic write).
    /// The last known-good text is left alone.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Stores text the mask accepted as both displayed and known-good.
    pub fn accept(&mut self, text: String) {
        self.last_good.clone_from(&text);
        self.text = text;
    }

    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    /// Numeric value with `,` folded into `.`; `0.0` when unparseable.
    pub fn numeric_value(&self) -> f64 {
        grammar::parse_grade(&self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.last_good.clear();
        self.invalid = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_text_keeps_last_good() {
        let mut field = Field::new("M17");
        field.accept("7.5".to_string());
        field.set_text("abc");
        assert_eq!(field.text(), "abc");
        assert_eq!(field.last_good(), "7.5");
        assert_eq!(field.numeric_value(), 0.0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut field = Field::new("M17");
        field.accept("9".to_string());
        field.set_invalid(true);
        field.clear();
        assert_eq!(field, Field::new("M17"));
    }
}
