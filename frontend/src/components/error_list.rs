use leptos::*;
use std::collections::HashMap;

/// One rendered line of the error banner.
///
/// `key` is the error text itself. Identical messages share a key, so
/// `occurrence` numbers the repeats to keep keyed reconciliation unambiguous.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorLine {
    pub key: String,
    pub occurrence: usize,
    pub message: String,
}

impl ErrorLine {
    pub fn identity(&self) -> (String, usize) {
        (self.key.clone(), self.occurrence)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorListView {
    Empty,
    Lines(Vec<ErrorLine>),
}

pub fn error_lines(errors: &[String]) -> Vec<ErrorLine> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    errors
        .iter()
        .map(|message| {
            let count = seen.entry(message.as_str()).or_default();
            let occurrence = *count;
            *count += 1;
            ErrorLine {
                key: message.clone(),
                occurrence,
                message: message.clone(),
            }
        })
        .collect()
}

pub fn error_list_view(errors: &[String]) -> ErrorListView {
    if errors.is_empty() {
        ErrorListView::Empty
    } else {
        ErrorListView::Lines(error_lines(errors))
    }
}

/// Close button handler. Each activation forwards exactly one call.
#[derive(Clone, Copy)]
pub struct DismissControl {
    on_clear: Callback<()>,
}

impl DismissControl {
    pub fn new(on_clear: Callback<()>) -> Self {
        Self { on_clear }
    }

    pub fn activate(&self) {
        self.on_clear.call(());
    }
}
