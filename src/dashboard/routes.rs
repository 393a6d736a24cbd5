//! Router contract: relative paths understood by the tracker front end

/// A navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Projects,
    Users,
    Issues,
    SingleProject(String),
    SingleUser(String),
    Issue(String),
}

impl Route {
    /// Relative path handed to the router
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "dashboard".to_string(),
            Route::Projects => "projects".to_string(),
            Route::Users => "users".to_string(),
            Route::Issues => "issues".to_string(),
            Route::SingleProject(id) => format!("singleProject/{}", id),
            Route::SingleUser(id) => format!("singleUser/{}", id),
            Route::Issue(id) => format!("issue/{}", id),
        }
    }

    /// Absolute URL under a web front end root
    pub fn url(&self, web_base_url: &str) -> String {
        format!("{}/{}", web_base_url.trim_end_matches('/'), self.path())
    }
}
