mod common;

use gradeform::fields::FieldSet;
use gradeform::keys::{Key, KeyPress};
use gradeform::mask::{GrammarMode, KeyDecision, MaskEngine, MaskPolicy, OverflowPolicy};
use gradeform::validator::Validator;
use proptest::prelude::*;
use regex::Regex;

// --- STRATEGIES ---

fn arb_grammar() -> impl Strategy<Value = GrammarMode> {
    prop_oneof![Just(GrammarMode::Strict), Just(GrammarMode::Lenient)]
}

fn arb_overflow() -> impl Strategy<Value = OverflowPolicy> {
    prop_oneof![Just(OverflowPolicy::Clamp), Just(OverflowPolicy::Revert)]
}

prop_compose! {
    fn arb_policy()(grammar in arb_grammar(), overflow in arb_overflow()) -> MaskPolicy {
        MaskPolicy { grammar, overflow }
    }
}

/// Keystrokes made of digits and separators only.
fn arb_numeric_keys() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9.,]{0,12}").unwrap()
}

/// Anything a user might paste.
fn arb_raw_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9.,a-z -]{0,10}").unwrap()
}

fn canonical() -> Regex {
    Regex::new(r"^\d{0,2}(\.\d{0,2})?$").unwrap()
}

fn in_range_or_in_progress(text: &str) -> bool {
    text.is_empty() || text.ends_with('.') || {
        let v: f64 = text.parse().unwrap();
        (0.0..=10.0).contains(&v)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn typed_text_matches_grammar(policy in arb_policy(), keys in arb_numeric_keys()) {
        let mut form = common::form(FieldSet::Core, policy.grammar, policy.overflow);
        let text = form.type_text("M19", &keys).unwrap().to_string();

        prop_assert!(canonical().is_match(&text), "{:?} -> {:?}", keys, text);
        prop_assert!(text.matches('.').count() <= 1);
        prop_assert!(!text.contains(','));
        prop_assert!(in_range_or_in_progress(&text), "{:?} -> {:?}", keys, text);
        prop_assert!(Validator::new(policy.grammar).is_valid(&text));
    }

    #[test]
    fn normalized_text_is_in_range(policy in arb_policy(), raw in arb_raw_text()) {
        let out = MaskEngine::new(policy).normalize(&raw, "");
        prop_assert!(canonical().is_match(&out.text), "{:?} -> {:?}", raw, out.text);
        prop_assert!(in_range_or_in_progress(&out.text), "{:?} -> {:?}", raw, out.text);
    }

    #[test]
    fn normalization_is_idempotent(policy in arb_policy(), raw in arb_raw_text(), last in arb_numeric_keys()) {
        let engine = MaskEngine::new(policy);
        let last_good = engine.normalize(&last, "").text;
        let once = engine.normalize(&raw, &last_good).text;
        let twice = engine.normalize(&once, &once).text;
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn separator_key_never_doubles(policy in arb_policy(), keys in arb_numeric_keys()) {
        let engine = MaskEngine::new(policy);
        let mut form = common::form(FieldSet::Full, policy.grammar, policy.overflow);
        let current = form.type_text("M22", &keys).unwrap().to_string();
        if current.contains('.') {
            for sep in ['.', ','] {
                prop_assert_eq!(
                    engine.filter_key(&current, &KeyPress::plain(Key::Char(sep))),
                    KeyDecision::Suppress
                );
            }
        }
    }
}
