use crate::components::error_messages::ErrorMessages;
use crate::state::errors::provide_errors;
use leptos::*;

#[component]
pub fn App(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    let errors = provide_errors();

    view! {
        <div class="min-h-screen bg-surface text-fg">
            <ErrorMessages errors=errors.errors() on_clear=errors.clear_callback() />
            <main class="container mx-auto p-4">
                {children.map(|children| children())}
            </main>
        </div>
    }
}
