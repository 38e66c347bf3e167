#![allow(dead_code)]

use gradeform::fields::{FieldRegistry, FieldSet};
use gradeform::form::Form;
use gradeform::mask::{GrammarMode, MaskEngine, MaskPolicy, OverflowPolicy};

pub fn policy(grammar: GrammarMode, overflow: OverflowPolicy) -> MaskPolicy {
    MaskPolicy { grammar, overflow }
}

pub fn engine(grammar: GrammarMode, overflow: OverflowPolicy) -> MaskEngine {
    MaskEngine::new(policy(grammar, overflow))
}

pub fn form(set: FieldSet, grammar: GrammarMode, overflow: OverflowPolicy) -> Form {
    Form::new(FieldRegistry::from_set(set), policy(grammar, overflow))
}

/// Core (16-field) form with every field typed as `value`.
pub fn filled_core_form(value: &str) -> Form {
    let mut form = form(FieldSet::Core, GrammarMode::Lenient, OverflowPolicy::Clamp);
    let ids = form.registry().ids().to_vec();
    for id in ids {
        form.type_text(&id, value).unwrap();
    }
    form
}
