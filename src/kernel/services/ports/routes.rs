/// Builds editor URLs for a page.
pub trait RouteBuilder {
    fn builder_url(&self, page_id: &str, hash: Option<&str>) -> String;
}

#[derive(Debug, Clone)]
pub struct BuilderRoutes {
    app_slug: String,
}

impl BuilderRoutes {
    pub fn new(app_slug: impl Into<String>) -> Self {
        Self {
            app_slug: app_slug.into(),
        }
    }
}

impl Default for BuilderRoutes {
    fn default() -> Self {
        Self::new("application")
    }
}

impl RouteBuilder for BuilderRoutes {
    fn builder_url(&self, page_id: &str, hash: Option<&str>) -> String {
        let mut url = format!("/app/{}/page-{}/edit", self.app_slug, page_id);
        if let Some(hash) = hash.filter(|h| !h.is_empty()) {
            url.push('#');
            url.push_str(hash);
        }
        url
    }
}
