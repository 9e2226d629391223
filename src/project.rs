use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::{
    error::{Error, Result},
    metadata::{read_metadata, Metadata},
};

pub(crate) mod data;
mod utils;

pub(crate) use data::{ListPageData, Project, ProjectCard, ProjectPageData};
use utils::{parse_links, render_markdown};

const PROJECT_EXTENSION: &str = "md";

fn slug_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn card_from(slug: String, metadata: &Metadata) -> ProjectCard {
    ProjectCard {
        slug,
        title: metadata.get("Title").to_string(),
        description: metadata.get("Description").to_string(),
        image: metadata.get("Image").to_string(),
        stack: metadata.get("Stack").to_string(),
    }
}

/// Resolves a project name from a request to its file under `projects_dir`.
pub(crate) fn project_path(projects_dir: &Path, name: &str) -> Result<PathBuf> {
    let name = name.trim();
    if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
        return Err(Error::NotFound(name.to_string()));
    }
    Ok(projects_dir.join(format!("{name}.{PROJECT_EXTENSION}")))
}

pub(crate) fn load_card(path: &Path) -> Result<ProjectCard> {
    let (metadata, _) = read_metadata(path)?;
    Ok(card_from(slug_of(path), &metadata))
}

pub(crate) fn load_project(path: &Path) -> Result<Project> {
    if path.is_dir() {
        return Err(Error::NotFound(slug_of(path)));
    }
    let (metadata, body) = read_metadata(path)?;
    debug!("{path:?}: {} metadata keys", metadata.len());

    let ProjectCard {
        slug,
        title,
        description,
        image,
        stack,
    } = card_from(slug_of(path), &metadata);

    Ok(Project {
        slug,
        title,
        description,
        image,
        stack,
        links: parse_links(metadata.get("Links")),
        html: render_markdown(&body),
    })
}

/// Cards for every `.md` file in `projects_dir`, ordered by file name.
/// A file that cannot be read or has no front matter is left out rather than
/// failing the listing.
pub(crate) fn list_cards(projects_dir: &Path) -> Result<Vec<ProjectCard>> {
    let read_dir_err = |source| Error::Io {
        path: projects_dir.to_path_buf(),
        source,
    };

    let mut paths = vec![];
    for entry in std::fs::read_dir(projects_dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        // follows symlinks, like the detail view does
        if !path.is_file() {
            continue;
        }
        if path.extension().map_or(true, |ext| ext != PROJECT_EXTENSION) {
            debug!("Ignoring non-project file {path:?}");
            continue;
        }
        paths.push(path);
    }
    paths.sort();

    let mut cards = Vec::with_capacity(paths.len());
    for path in paths {
        match load_card(&path) {
            Ok(card) => cards.push(card),
            Err(e) => warn!("{:#}, leaving it out of the listing", anyhow::Error::from(e)),
        }
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::{data::Link, *};

    const FOLIO: &str = "---
Title: Folio
Description: This very site
Image: /public/img/folio.png
Stack: Rust, axum
Links: GitHub>https://github.com/x,Site>https://x.dev
---
# Folio

*Markdown* in, HTML out.
";

    fn fixture(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn loads_full_project() {
        let dir = fixture(&[("folio.md", FOLIO)]);
        let project = load_project(&dir.path().join("folio.md")).unwrap();

        assert_eq!(project.slug, "folio");
        assert_eq!(project.title, "Folio");
        assert_eq!(project.description, "This very site");
        assert_eq!(project.image, "/public/img/folio.png");
        assert_eq!(project.stack, "Rust, axum");
        assert_eq!(
            project.links,
            vec![
                Link {
                    title: "GitHub".into(),
                    link: "https://github.com/x".into()
                },
                Link {
                    title: "Site".into(),
                    link: "https://x.dev".into()
                },
            ]
        );
        assert!(project.html.0.contains("<h1>Folio</h1>"));
        assert!(project.html.0.contains("<em>Markdown</em>"));
        assert!(!project.html.0.contains("Title:"));
    }

    #[test]
    fn project_without_links_key_has_no_links() {
        let dir = fixture(&[("plain.md", "---\nTitle: Plain\n---\nbody\n")]);
        let project = load_project(&dir.path().join("plain.md")).unwrap();
        assert!(project.links.is_empty());
    }

    #[test]
    fn listing_filters_and_orders_files() {
        let dir = fixture(&[
            ("zeta.md", "---\nTitle: Zeta\n---\n"),
            ("alpha.md", "---\nTitle: Alpha\nStack: Go\n---\n"),
            ("notes.txt", "---\nTitle: Not a project\n---\n"),
            ("broken.md", "no front matter"),
        ]);
        fs::create_dir(dir.path().join("drafts.md")).unwrap();

        let cards = list_cards(dir.path()).unwrap();
        let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Zeta"]);
        assert_eq!(cards[0].slug, "alpha");
        assert_eq!(cards[0].stack, "Go");
    }

    #[test]
    fn listing_skips_unreadable_file() {
        let dir = fixture(&[("good.md", "---\nTitle: Good\n---\n")]);
        fs::write(dir.path().join("bad.md"), b"---\nTitle: \xff\xfe\n---\n").unwrap();

        let cards = list_cards(dir.path()).unwrap();
        let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Good"]);
    }

    #[cfg(unix)]
    #[test]
    fn listing_follows_symlinked_files() {
        let dir = fixture(&[("real.txt", "---\nTitle: Linked\n---\n")]);
        std::os::unix::fs::symlink(dir.path().join("real.txt"), dir.path().join("linked.md"))
            .unwrap();

        let cards = list_cards(dir.path()).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].slug, "linked");
        assert_eq!(cards[0].title, "Linked");
    }

    #[test]
    fn directory_named_like_a_project_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("drafts.md")).unwrap();
        let err = load_project(&dir.path().join("drafts.md")).unwrap_err();
        assert!(matches!(err, Error::NotFound(ref name) if name == "drafts"));
    }

    #[test]
    fn listing_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_cards(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn project_names_cannot_escape_the_directory() {
        let dir = Path::new("projects");
        assert_eq!(
            project_path(dir, "folio").unwrap(),
            PathBuf::from("projects/folio.md")
        );
        for name in ["", "  ", "../secret", "a/b", "a\\b", ".hidden"] {
            assert!(
                matches!(project_path(dir, name), Err(Error::NotFound(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn missing_project_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_project(&dir.path().join("ghost.md")).unwrap_err();
        assert!(matches!(err, Error::NotFound(ref name) if name == "ghost"));
    }
}
