use std::path::PathBuf;

use handlebars::Handlebars;

/// Everything a request handler needs, built once in `main` and shared.
#[derive(Debug)]
pub(crate) struct Context {
    pub projects_dir: PathBuf,
    pub public_dir: PathBuf,
    pub site_name: String,

    pub handlebars: Handlebars<'static>,
}

impl Context {
    pub fn new(
        projects_dir: PathBuf,
        public_dir: PathBuf,
        site_name: String,
        handlebars: Handlebars<'static>,
    ) -> Self {
        Self {
            projects_dir,
            public_dir,
            site_name,
            handlebars,
        }
    }
}
