use crate::client::PredictionBackend;
use crate::error::{GfResult, GradeFormError};
use crate::field::Field;
use crate::form::Form;
use crate::keys::{KeyPress, Shortcut};
use crate::mask::{KeyDecision, MaskOutcome};
use crate::protocol::Prediction;
use std::time::Duration;
use tracing::{error, info, warn};

pub const VALIDATION_FAILED_MESSAGE: &str =
    "Vui lòng điền đầy đủ và chính xác tất cả các trường!";
pub const CLEARED_MESSAGE: &str = "✅ Đã xóa tất cả dữ liệu!";
pub const ERROR_PREFIX: &str = "❌ Lỗi: ";

pub const SUCCESS_AUTO_HIDE: Duration = Duration::from_secs(5);
pub const CLEARED_AUTO_HIDE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultMessage {
    pub text: String,
    pub kind: ResultKind,
    /// The host hides the message after this long; `None` keeps it up.
    pub auto_hide: Option<Duration>,
}

impl ResultMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ResultKind::Success,
            auto_hide: Some(SUCCESS_AUTO_HIDE),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ResultKind::Error,
            auto_hide: None,
        }
    }

    pub fn hide_after(mut self, delay: Duration) -> Self {
        self.auto_hide = Some(delay);
        self
    }
}

/// The presentation surface the orchestrator drives.
pub trait FormView {
    /// Shows/hides the loading indicator and disables/enables submit.
    fn set_loading(&mut self, loading: bool);

    fn show_result(&mut self, message: &ResultMessage);

    fn hide_result(&mut self);

    /// Field texts or invalid markers changed.
    fn render_fields(&mut self, _fields: &[Field]) {}
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Blocked locally; nothing was sent. Holds the failing field ids.
    Invalid(Vec<String>),
    Predicted(Prediction),
    Failed(GradeFormError),
}

impl SubmitOutcome {
    pub fn is_predicted(&self) -> bool {
        matches!(self, SubmitOutcome::Predicted(_))
    }
}

/// Wires form events, submission and result display together.
///
/// Every handler takes `&mut self`, so a second submit cannot start while a
/// request is still pending.
pub struct Orchestrator<B, V> {
    form: Form,
    backend: B,
    view: V,
}

impl<B: PredictionBackend, V: FormView> Orchestrator<B, V> {
    pub fn new(form: Form, backend: B, view: V) -> Self {
        Self {
            form,
            backend,
            view,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_parts(self) -> (Form, B, V) {
        (self.form, self.backend, self.view)
    }

    pub fn key_down(&self, id: &str, press: &KeyPress) -> GfResult<KeyDecision> {
        self.form.key_down(id, press)
    }

    pub fn input(&mut self, id: &str, raw: &str) -> GfResult<MaskOutcome> {
        let outcome = self.form.input(id, raw)?;
        self.view.render_fields(self.form.fields());
        Ok(outcome)
    }

    pub fn blur(&mut self, id: &str) -> GfResult<bool> {
        let valid = self.form.blur(id)?;
        self.view.render_fields(self.form.fields());
        Ok(valid)
    }

    /// Validates everything, then sends exactly one request if all fields
    /// pass. The loading state is off again on every exit path.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let invalid = self.form.validate_all();
        self.view.render_fields(self.form.fields());

        if !invalid.is_empty() {
            warn!("Submit blocked, invalid fields: {}", invalid.join(", "));
            self.view
                .show_result(&ResultMessage::error(VALIDATION_FAILED_MESSAGE));
            self.view.set_loading(false);
            return SubmitOutcome::Invalid(invalid);
        }

        let snapshot = self.form.snapshot();

        self.view.set_loading(true);
        let result = self.backend.predict(&snapshot).await;

        let outcome = match result {
            Ok(prediction) => {
                self.view
                    .show_result(&ResultMessage::success(prediction.label.clone()));
                SubmitOutcome::Predicted(prediction)
            }
            Err(e) => {
                error!("Prediction error: {}", e);
                self.view
                    .show_result(&ResultMessage::error(format!("{ERROR_PREFIX}{e}")));
                SubmitOutcome::Failed(e)
            }
        };
        self.view.set_loading(false);

        outcome
    }

    /// Empties every field and flashes a short confirmation.
    pub fn clear_all(&mut self) {
        self.form.clear_all();
        self.view.render_fields(self.form.fields());

        self.view.hide_result();
        self.view
            .show_result(&ResultMessage::success(CLEARED_MESSAGE).hide_after(CLEARED_AUTO_HIDE));
        info!("Cleared {} fields", self.form.fields().len());
    }

    /// Page-level keydown. Returns the shortcut that fired; the host must
    /// then suppress the key's default action (e.g. page reload on Ctrl+R).
    pub async fn handle_shortcut(&mut self, press: &KeyPress) -> Option<Shortcut> {
        let shortcut = Shortcut::from_press(press)?;
        match shortcut {
            Shortcut::Submit => {
                self.submit().await;
            }
            Shortcut::ClearAll => self.clear_all(),
        }
        Some(shortcut)
    }

    pub fn fill_sample(&mut self) -> GfResult<usize> {
        let filled = self.form.fill_sample()?;
        self.view.render_fields(self.form.fields());
        Ok(filled)
    }
}
