use leptos::*;

/// Runs `test` inside a fresh reactive runtime, disposing it afterwards.
pub fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let output = test();
    runtime.dispose();
    output
}

pub fn render_to_string<F, N>(component: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| component().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Number of opening `<tag>` elements in rendered HTML.
pub fn count_tags(html: &str, tag: &str) -> usize {
    let open = format!("<{tag}");
    html.match_indices(&open)
        .filter(|(at, _)| {
            matches!(
                html[at + open.len()..].chars().next(),
                Some(' ' | '>' | '/')
            )
        })
        .count()
}

/// Drops hydration keys, which come from a global counter and differ
/// between otherwise identical renders.
///
/// Handles both ` data-hk="…"` attributes and `<!--hk=…|marker-->` comments.
pub fn strip_hydration_keys(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(at) = rest.find("hk=") {
        let (before, after) = rest.split_at(at);
        let after = &after["hk=".len()..];
        if let Some(prefix) = before.strip_suffix(" data-") {
            out.push_str(prefix);
            let value = after.strip_prefix('"').unwrap_or(after);
            rest = match value.find('"') {
                Some(end) => &value[end + 1..],
                None => "",
            };
        } else if before.ends_with("<!--") {
            out.push_str(before);
            let close = after.find("-->").unwrap_or(after.len());
            rest = match after[..close].find('|') {
                Some(pipe) => &after[pipe + 1..],
                None => &after[close..],
            };
        } else {
            out.push_str(before);
            out.push_str("hk=");
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_attribute_and_comment_keys() {
        let html = r#"<div data-hk="0-0-0-1" role="alert"><!--hk=0-0-0-2o|leptos-show-start--><li>x</li><!--hk=0-0-0-3--></div>"#;
        assert_eq!(
            strip_hydration_keys(html),
            r#"<div role="alert"><!--leptos-show-start--><li>x</li><!----></div>"#
        );
    }

    #[test]
    fn keeps_text_that_merely_mentions_hk() {
        assert_eq!(strip_hydration_keys("<li>chk=1</li>"), "<li>chk=1</li>");
    }

    #[test]
    fn counts_only_whole_tag_names() {
        assert_eq!(count_tags("<li>a</li><link/><li class=\"x\">b</li>", "li"), 2);
    }
}
