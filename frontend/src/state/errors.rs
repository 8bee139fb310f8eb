use leptos::*;
use std::fmt::Display;

/// Errors waiting to be shown in the banner. Owned here, read by the view.
#[derive(Clone, Copy, Debug)]
pub struct ErrorsState {
    errors: RwSignal<Vec<String>>,
}

impl ErrorsState {
    pub fn new() -> Self {
        Self {
            errors: create_rw_signal(Vec::new()),
        }
    }

    pub fn report(&self, error: impl Display) {
        let message = error.to_string();
        log::warn!("{}", message);
        self.errors.update(|errors| errors.push(message));
    }

    pub fn clear(&self) {
        let count = self.errors.with_untracked(Vec::len);
        if count == 0 {
            return;
        }
        log::debug!("clearing {} error(s)", count);
        self.errors.set(Vec::new());
    }

    pub fn errors(&self) -> Signal<Vec<String>> {
        self.errors.into()
    }

    pub fn clear_callback(&self) -> Callback<()> {
        let state = *self;
        Callback::new(move |_| state.clear())
    }
}

impl Default for ErrorsState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_errors() -> ErrorsState {
    let state = ErrorsState::new();
    provide_context(state);
    state
}

pub fn use_errors() -> ErrorsState {
    match use_context::<ErrorsState>() {
        Some(state) => state,
        None => provide_errors(),
    }
}
