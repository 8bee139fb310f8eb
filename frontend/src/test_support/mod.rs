#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use leptos::*;

    pub fn messages(errors: &[&str]) -> Vec<String> {
        errors.iter().map(|e| e.to_string()).collect()
    }

    /// Clear handler that counts how often it ran.
    pub fn click_counter() -> (RwSignal<usize>, Callback<()>) {
        let clicks = create_rw_signal(0usize);
        (clicks, Callback::new(move |_| clicks.update(|c| *c += 1)))
    }
}
