use gradeform::field::Field;
use gradeform::orchestrator::{FormView, ResultKind, ResultMessage};
use tracing::debug;

const BUSY_LABEL: &str = "⏳ Đang xử lý...";

/// Prints what the page would show: the loading state and result banners.
/// A printed banner cannot be taken back, so hiding is a no-op.
#[derive(Default)]
pub struct TerminalView {
    quiet: bool,
    loading: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints nothing; batch runs report everything in one table.
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }
}

impl FormView for TerminalView {
    fn set_loading(&mut self, loading: bool) {
        if loading && !self.loading && !self.quiet {
            println!("{}", BUSY_LABEL);
        }
        self.loading = loading;
    }

    fn show_result(&mut self, message: &ResultMessage) {
        if self.quiet {
            return;
        }
        match message.kind {
            ResultKind::Success => println!("\n{}", message.text),
            ResultKind::Error => eprintln!("\n{}", message.text),
        }
    }

    fn hide_result(&mut self) {}

    fn render_fields(&mut self, fields: &[Field]) {
        for field in fields.iter().filter(|f| f.is_marked_invalid()) {
            debug!(field = field.id(), text = field.text(), "field marked invalid");
        }
    }
}
