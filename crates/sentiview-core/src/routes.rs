use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ValidationError;

/// Views a route can point at. Rendering them is the front end's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    SentimentDashboard,
}

impl View {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SentimentDashboard => "SentimentDashboard",
        }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    pub name: String,
    pub view: View,
}

impl Route {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }
}

/// Navigation table handed to the router at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Result<Self, ValidationError> {
        if routes.is_empty() {
            return Err(ValidationError::EmptyRouteTable);
        }

        let mut paths = HashSet::with_capacity(routes.len());
        let mut names = HashSet::with_capacity(routes.len());
        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(ValidationError::InvalidRoutePath {
                    path: route.path.clone(),
                });
            }
            if !paths.insert(route.path.as_str()) {
                return Err(ValidationError::DuplicateRoute {
                    kind: "path",
                    value: route.path.clone(),
                });
            }
            if !names.insert(route.name.as_str()) {
                return Err(ValidationError::DuplicateRoute {
                    kind: "name",
                    value: route.name.clone(),
                });
            }
        }

        Ok(Self { routes })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Exact path match; no parameters or wildcards.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        let route = self.routes.iter().find(|route| route.path == path);
        debug!(path, matched = route.is_some(), "route lookup");
        route
    }

    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }
}

impl Default for RouteTable {
    /// The single dashboard route: `/` named `home`.
    fn default() -> Self {
        Self {
            routes: vec![Route::new("/", "home", View::SentimentDashboard)],
        }
    }
}
