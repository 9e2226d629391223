use log::warn;
use pulldown_cmark::{html, Options, Parser};

use super::data::{Link, RenderedHtml};

/// Parses a `title>url,title>url` list. Malformed tokens are dropped.
pub(crate) fn parse_links(value: &str) -> Vec<Link> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.split_once('>') {
            Some((title, link)) if !title.trim().is_empty() && !link.trim().is_empty() => {
                Some(Link {
                    title: title.trim().to_string(),
                    link: link.trim().to_string(),
                })
            }
            _ => {
                warn!("Skipping malformed link {token:?} (expected `title>url`)");
                None
            }
        })
        .collect()
}

pub(crate) fn render_markdown(body: &str) -> RenderedHtml {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(body, options);
    let mut out = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut out, parser);
    RenderedHtml(out)
}
