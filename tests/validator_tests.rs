use gradeform::field::Field;
use gradeform::mask::GrammarMode;
use gradeform::validator::Validator;
use rstest::rstest;

#[rstest]
#[case("", true)]
#[case("0", true)]
#[case("10", true)]
#[case("10.0", true)]
#[case("10.00", true)]
#[case("7.5", true)]
#[case("7,5", true)]
#[case("7.", true)] // in progress
#[case("7,", true)]
#[case("10.", true)]
#[case(".", true)] // bare separator still counts as in progress
#[case("9.99", true)]
#[case("10.01", false)]
#[case("11", false)]
#[case("7.555", false)]
#[case("123", false)]
#[case("-1", false)]
#[case("7.5.", false)]
#[case("abc", false)]
#[case("NaN", false)]
#[case("1e1", false)]
fn test_validity_rules(#[case] text: &str, #[case] expected: bool) {
    for grammar in [GrammarMode::Strict, GrammarMode::Lenient] {
        assert_eq!(
            Validator::new(grammar).is_valid(text),
            expected,
            "{:?} under {:?}",
            text,
            grammar
        );
    }
}

#[rstest]
#[case(GrammarMode::Strict, false)]
#[case(GrammarMode::Lenient, true)]
fn test_leading_separator_depends_on_grammar(#[case] grammar: GrammarMode, #[case] expected: bool) {
    assert_eq!(Validator::new(grammar).is_valid(".5"), expected);
    assert_eq!(Validator::new(grammar).is_valid(",25"), expected);
}

#[test]
fn test_validate_field_toggles_marker() {
    let validator = Validator::new(GrammarMode::Lenient);
    let mut field = Field::new("TBCT");

    field.set_text("42");
    assert!(!validator.validate_field(&mut field));
    assert!(field.is_marked_invalid());

    field.set_text("4.2");
    assert!(validator.validate_field(&mut field));
    assert!(!field.is_marked_invalid());
}
