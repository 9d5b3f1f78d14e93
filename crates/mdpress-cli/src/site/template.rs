use mdpress_engine::Page;

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Substitutes a converted page into an HTML template.
///
/// Root-relative `href="/` and `src="/` references are rewritten to start
/// with `base_path`, so a site can be served from a sub-path.
pub fn fill_template(template: &str, page: &Page, base_path: &str) -> String {
    let filled = template
        .replace(TITLE_PLACEHOLDER, &page.title)
        .replace(CONTENT_PLACEHOLDER, &page.html);

    if base_path == "/" {
        return filled;
    }
    filled
        .replace(r#"href="/"#, &format!(r#"href="{base_path}"#))
        .replace(r#"src="/"#, &format!(r#"src="{base_path}"#))
}
