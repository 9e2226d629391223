use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Link {
    pub title: String,
    pub link: String,
}

/// HTML produced from trusted project files; templates emit it unescaped.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub(crate) struct RenderedHtml(pub String);

#[derive(Serialize, Debug, Clone)]
pub(crate) struct ProjectCard {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub stack: String,
}

#[derive(Serialize, Debug, Clone)]
pub(crate) struct Project {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub stack: String,
    pub links: Vec<Link>,
    pub html: RenderedHtml,
}

#[derive(Serialize, Debug)]
pub(crate) struct ListPageData<'a> {
    pub site_name: &'a str,
    pub projects: Vec<ProjectCard>,
}

#[derive(Serialize, Debug)]
pub(crate) struct ProjectPageData<'a> {
    pub site_name: &'a str,
    pub project: Project,
}
