use crate::config::EngineConfig;
use crate::error::{GfResult, GradeFormError};
use crate::field::Field;
use crate::fields::{FieldRegistry, SAMPLE_GRADES};
use crate::keys::KeyPress;
use crate::mask::{KeyDecision, MaskEngine, MaskOutcome, MaskPolicy};
use crate::snapshot::FormSnapshot;
use crate::validator::Validator;
use tracing::debug;

/// Everything the event handlers work on: the registry, the engine settings
/// and one [`Field`] per registered id. Built once, then passed around.
#[derive(Debug, Clone)]
pub struct Form {
    registry: FieldRegistry,
    engine: MaskEngine,
    validator: Validator,
    fields: Vec<Field>,
}

impl Form {
    pub fn new(registry: FieldRegistry, policy: MaskPolicy) -> Self {
        let fields = registry.ids().iter().map(Field::new).collect();
        Self {
            registry,
            engine: MaskEngine::new(policy),
            validator: Validator::new(policy.grammar),
            fields,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(FieldRegistry::from_set(config.field_set), config.policy())
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn engine(&self) -> &MaskEngine {
        &self.engine
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> GfResult<&Field> {
        self.registry
            .position(id)
            .map(|pos| &self.fields[pos])
            .ok_or_else(|| GradeFormError::UnknownField(id.to_string()))
    }

    fn field_mut(&mut self, id: &str) -> GfResult<&mut Field> {
        match self.registry.position(id) {
            Some(pos) => Ok(&mut self.fields[pos]),
            None => Err(GradeFormError::UnknownField(id.to_string())),
        }
    }

    /// Keydown on field `id`: whether the key may change the text.
    pub fn key_down(&self, id: &str, press: &KeyPress) -> GfResult<KeyDecision> {
        let field = self.field(id)?;
        Ok(self.engine.filter_key(field.text(), press))
    }

    /// Value change on field `id` (after a keystroke or a paste).
    pub fn input(&mut self, id: &str, raw: &str) -> GfResult<MaskOutcome> {
        let engine = self.engine;
        let validator = self.validator;
        let field = self.field_mut(id)?;
        let outcome = engine.apply_input(field, raw);
        validator.validate_field(field);
        Ok(outcome)
    }

    /// Focus left field `id`; recomputes its marker.
    pub fn blur(&mut self, id: &str) -> GfResult<bool> {
        let validator = self.validator;
        let field = self.field_mut(id)?;
        Ok(validator.validate_field(field))
    }

    /// Types `text` into field `id` one key at a time, caret at the end.
    /// Suppressed keys are dropped exactly as a keydown filter would.
    pub fn type_text(&mut self, id: &str, text: &str) -> GfResult<&str> {
        for c in text.chars() {
            let press = KeyPress::char(c);
            if self.key_down(id, &press)? == KeyDecision::Suppress {
                debug!(field = id, key = %c, "key suppressed");
                continue;
            }
            let mut raw = self.field(id)?.text().to_string();
            raw.push(c);
            self.input(id, &raw)?;
        }
        Ok(self.field(id)?.text())
    }

    /// Programmatic write to field `id` that bypasses the mask, like setting
    /// an input's value from script. The marker is not touched.
    pub fn set_text(&mut self, id: &str, text: &str) -> GfResult<()> {
        self.field_mut(id)?.set_text(text);
        Ok(())
    }

    pub fn clear_field(&mut self, id: &str) -> GfResult<()> {
        self.field_mut(id)?.clear();
        Ok(())
    }

    /// Recomputes every marker; returns the ids that failed.
    pub fn validate_all(&mut self) -> Vec<String> {
        let validator = self.validator;
        self.fields
            .iter_mut()
            .filter_map(|field| {
                if validator.validate_field(field) {
                    None
                } else {
                    Some(field.id().to_string())
                }
            })
            .collect()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let mut snapshot = FormSnapshot::new();
        for field in &self.fields {
            snapshot.insert(field.id(), field.numeric_value());
        }
        snapshot
    }

    pub fn clear_all(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
    }

    /// Types the development sample grades into the fields that exist in
    /// this registry. Returns how many fields were filled.
    pub fn fill_sample(&mut self) -> GfResult<usize> {
        let mut filled = 0;
        for (id, value) in SAMPLE_GRADES {
            if self.registry.contains(id) {
                self.clear_field(id)?;
                self.type_text(id, value)?;
                filled += 1;
            }
        }
        Ok(filled)
    }
}
