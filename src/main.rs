use std::path::PathBuf;

use anyhow::bail;
use clap::{command, value_parser, Arg};
use log::info;

use context::Context;
use renderer::generate_renderer;

mod context;
mod error;
mod metadata;
mod project;
mod renderer;
mod server;

fn existing_dir<'a>(matches: &'a clap::ArgMatches, id: &str) -> anyhow::Result<&'a PathBuf> {
    let Some(dir) = matches.get_one::<PathBuf>(id) else {
        bail!("{id} is required.");
    };
    if !dir.is_dir() {
        bail!("{id} must be a directory: {dir:?}");
    }
    Ok(dir)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args(&[
            Arg::new("projects_dir")
                .long("projects-dir")
                .env("PROJECTS_DIR")
                .help("Directory of project Markdown files")
                .value_parser(value_parser!(PathBuf))
                .default_value("projects"),
            Arg::new("public_dir")
                .long("public-dir")
                .env("PUBLIC_DIR")
                .help("Directory served as-is under /public")
                .value_parser(value_parser!(PathBuf))
                .default_value("public"),
            Arg::new("template_dir")
                .long("template-dir")
                .env("TEMPLATE_DIR")
                .help("Directory of index.hbs, project.hbs and layout.hbs")
                .value_parser(value_parser!(PathBuf))
                .default_value("templates"),
            Arg::new("port")
                .long("port")
                .env("PORT")
                .help("Port to listen on")
                .value_parser(value_parser!(u16))
                .default_value("8080"),
            Arg::new("site_name")
                .long("site-name")
                .env("SITE_NAME")
                .help("Name shown in the page header")
                .default_value(""),
        ])
        .get_matches();

    let projects_dir = existing_dir(&matches, "projects_dir")?;
    let public_dir = existing_dir(&matches, "public_dir")?;
    let template_dir = existing_dir(&matches, "template_dir")?;
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);
    let site_name = matches
        .get_one::<String>("site_name")
        .cloned()
        .unwrap_or_default();

    let handlebars = generate_renderer(template_dir)?;
    info!("serving projects from {projects_dir:?}");

    let ctx = Context::new(
        projects_dir.to_owned(),
        public_dir.to_owned(),
        site_name,
        handlebars,
    );
    server::serve(ctx, port).await
}
