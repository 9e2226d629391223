use std::path::Path;

use anyhow::Context;
use handlebars::{handlebars_helper, Handlebars};

// "Rust, axum , tokio" -> ["Rust", "axum", "tokio"]
handlebars_helper!(stack_items: |stack: str| {
    stack
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
});

// query-string safe: "c++" -> "c%2B%2B"
handlebars_helper!(url_encode: |value: str| {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect::<String>()
});

pub(crate) fn generate_renderer(template_dir: &Path) -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    handlebars.register_helper("stack_items", Box::new(stack_items));
    handlebars.register_helper("url_encode", Box::new(url_encode));
    handlebars
        .register_template_file("index", template_dir.join("index.hbs"))
        .context("index.hbs")?;
    handlebars
        .register_template_file("project", template_dir.join("project.hbs"))
        .context("project.hbs")?;
    handlebars.register_partial(
        "layout",
        std::fs::read_to_string(template_dir.join("layout.hbs")).context("layout.hbs")?,
    )?;

    Ok(handlebars)
}

#[cfg(test)]
pub(crate) fn bundled_templates() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}
