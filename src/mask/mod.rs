pub mod grammar;

use crate::field::Field;
use crate::keys::{Key, KeyPress};
use clap::ValueEnum;
use grammar::{DecimalParts, MAX_FRAC_DIGITS};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use tracing::debug;

/// Upper bound of every grade field.
pub const MAX_GRADE: f64 = 10.0;

/// How a value with no integer digits (`.5`) is treated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GrammarMode {
    /// At least one integer digit is required; `.5` is rejected.
    Strict,
    /// A bare leading separator is completed with `0` (`.5` -> `0.5`).
    #[default]
    Lenient,
}

/// What happens when a complete value exceeds [`MAX_GRADE`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OverflowPolicy {
    /// Write exactly `10`.
    #[default]
    Clamp,
    /// Restore the last known-good text.
    Revert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaskPolicy {
    pub grammar: GrammarMode,
    pub overflow: OverflowPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDecision {
    Pass,
    Suppress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskAction {
    /// Written back unchanged (apart from separator folding).
    Accepted,
    /// Leading `0` added or fraction truncated.
    Adjusted,
    Clamped,
    Reverted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskOutcome {
    pub text: String,
    pub action: MaskAction,
}

impl MaskOutcome {
    fn new(text: impl Into<String>, action: MaskAction) -> Self {
        Self {
            text: text.into(),
            action,
        }
    }
}

/// Keystroke and value filter for one grade field.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaskEngine {
    policy: MaskPolicy,
}

impl MaskEngine {
    pub fn new(policy: MaskPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MaskPolicy {
        self.policy
    }

    /// Decides whether a keydown may reach the field holding `current`.
    pub fn filter_key(&self, current: &str, press: &KeyPress) -> KeyDecision {
        if press.key.is_navigation() || press.is_clipboard_combo() {
            return KeyDecision::Pass;
        }

        match press.key {
            Key::Char(c) if c.is_ascii_digit() => KeyDecision::Pass,
            Key::Char(c) if grammar::is_separator(c) && !grammar::has_separator(current) => {
                KeyDecision::Pass
            }
            _ => KeyDecision::Suppress,
        }
    }

    /// Maps a raw field value to the text the field should hold.
    ///
    /// `last_good` is what a rejected value reverts to. The result always
    /// satisfies `normalize(result, _) == result`.
    pub fn normalize(&self, raw: &str, last_good: &str) -> MaskOutcome {
        if raw.is_empty() {
            return MaskOutcome::new("", MaskAction::Accepted);
        }

        let revert = || MaskOutcome::new(last_good, MaskAction::Reverted);

        let folded = grammar::normalize_separators(raw);
        let Some(parts) = DecimalParts::scan(&folded) else {
            return revert();
        };
        if parts.int.len() > grammar::MAX_INT_DIGITS {
            return revert();
        }

        let mut action = MaskAction::Accepted;

        let int = if parts.int.is_empty() {
            match self.policy.grammar {
                GrammarMode::Strict => return revert(),
                GrammarMode::Lenient => {
                    action = MaskAction::Adjusted;
                    "0"
                }
            }
        } else {
            parts.int
        };

        let frac = parts.frac.map(|frac| {
            if frac.len() > MAX_FRAC_DIGITS {
                action = MaskAction::Adjusted;
                &frac[..MAX_FRAC_DIGITS]
            } else {
                frac
            }
        });

        let text = match frac {
            Some(frac) => format!("{int}.{frac}"),
            None => int.to_string(),
        };

        if parts.ends_with_separator() {
            return MaskOutcome::new(text, action);
        }

        match text.parse::<f64>() {
            Ok(value) if value > MAX_GRADE => match self.policy.overflow {
                OverflowPolicy::Clamp => MaskOutcome::new("10", MaskAction::Clamped),
                OverflowPolicy::Revert => revert(),
            },
            Ok(_) => MaskOutcome::new(text, action),
            Err(_) => revert(),
        }
    }

    /// Runs [`normalize`](Self::normalize) against the field's last
    /// known-good text and writes the result back.
    pub fn apply_input(&self, field: &mut Field, raw: &str) -> MaskOutcome {
        let outcome = self.normalize(raw, field.last_good());
        if outcome.action != MaskAction::Accepted {
            debug!(
                field = field.id(),
                raw,
                text = %outcome.text,
                action = ?outcome.action,
                "masked input"
            );
        }
        field.accept(outcome.text.clone());
        outcome
    }
}
