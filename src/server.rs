use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use log::{debug, info};
use serde::Deserialize;
use tokio::{net::TcpListener, task::spawn_blocking};
use tower_http::services::ServeDir;

use crate::{
    context::Context,
    error::Result,
    project::{list_cards, load_project, project_path, ListPageData, ProjectPageData},
};

#[derive(Debug, Deserialize)]
struct ProjectParams {
    project: Option<String>,
}

pub(crate) fn create_router(ctx: Arc<Context>) -> Router {
    let public = ServeDir::new(&ctx.public_dir);

    Router::new()
        .route("/", get(index))
        .route("/project", get(project))
        .route("/health", get(|| async { "ok" }))
        .nest_service("/public", public)
        .with_state(ctx)
}

pub(crate) async fn serve(ctx: Context, port: u16) -> anyhow::Result<()> {
    let app = create_router(Arc::new(ctx));
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;

    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await?;

    Ok(())
}

async fn index(State(ctx): State<Arc<Context>>) -> Result<Html<String>> {
    let projects_dir = ctx.projects_dir.clone();
    let projects = spawn_blocking(move || list_cards(&projects_dir)).await??;
    debug!("listing {} projects", projects.len());

    let data = ListPageData {
        site_name: &ctx.site_name,
        projects,
    };
    Ok(Html(ctx.handlebars.render("index", &data)?))
}

async fn project(
    State(ctx): State<Arc<Context>>,
    Query(params): Query<ProjectParams>,
) -> Result<Html<String>> {
    let name = params.project.unwrap_or_default();
    let path = project_path(&ctx.projects_dir, &name)?;
    debug!("rendering project {name:?} from {path:?}");

    let project = spawn_blocking(move || load_project(&path)).await??;

    let data = ProjectPageData {
        site_name: &ctx.site_name,
        project,
    };
    Ok(Html(ctx.handlebars.render("project", &data)?))
}
