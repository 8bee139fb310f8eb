use crate::components::error_list::{error_lines, DismissControl, ErrorLine};
use leptos::*;

/// Dismissible banner listing every error in `errors`, in order.
///
/// Renders nothing while `errors` is empty. The close button invokes
/// `on_clear`; the list itself is never modified here.
#[component]
pub fn ErrorMessages(
    #[prop(into)] errors: MaybeSignal<Vec<String>>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let lines = Signal::derive(move || errors.with(|errors| error_lines(errors)));
    let dismiss = DismissControl::new(on_clear);

    view! {
        <Show when=move || lines.with(|lines| !lines.is_empty()) fallback=|| ()>
            <div class="container mx-auto mt-4" role="alert">
                <div class="bg-status-error-bg border border-status-error-border text-status-error-text shadow rounded px-4 py-3">
                    <div class="flex items-center gap-3">
                        <button
                            type="button"
                            aria-label="Dismiss errors"
                            class="shrink-0 text-status-error-text hover:opacity-75"
                            on:click=move |_| {
                                log::debug!("error banner dismissed");
                                dismiss.activate();
                            }
                        >
                            {"✕"}
                        </button>
                        <ul class="flex-1 space-y-1">
                            <For
                                each=move || lines.get()
                                key=ErrorLine::identity
                                children=|line: ErrorLine| {
                                    view! { <li class="text-lg">{line.message}</li> }
                                }
                            />
                        </ul>
                    </div>
                </div>
            </div>
        </Show>
    }
}
