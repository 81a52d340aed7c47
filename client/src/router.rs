//! Client-side route table.
//!
//! A static table maps URL paths to views under a shared layout, with one
//! parameterized entry (`/tasks/:id`). There is no fallback entry: an
//! unregistered path resolves to `None` and the caller decides what the
//! unmatched-route state looks like.

use std::collections::HashMap;

/// Views the application can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Overview,
    TasksHistory,
    TaskDetail,
    CreateTask,
}

/// Layout wrapping a view. Only the default layout exists today.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Default,
}

struct RouteDef {
    path: &'static str,
    name: &'static str,
    view: View,
    layout: Layout,
}

const ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "/",
        name: "default-layout",
        view: View::Overview,
        layout: Layout::Default,
    },
    RouteDef {
        path: "/tasks/:id",
        name: "task-view",
        view: View::TaskDetail,
        layout: Layout::Default,
    },
    RouteDef {
        path: "/tasks",
        name: "tasks-history",
        view: View::TasksHistory,
        layout: Layout::Default,
    },
    RouteDef {
        path: "/create-task",
        name: "create-task-view",
        view: View::CreateTask,
        layout: Layout::Default,
    },
];

/// A resolved route: the matched view plus captured `:param` values.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteMatch {
    pub name: &'static str,
    pub view: View,
    pub layout: Layout,
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    /// Captured parameter value, unparsed.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Resolve a path against the route table. The query string and fragment
/// are ignored for matching.
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    ROUTES.iter().find_map(|def| match_route(def, path))
}

fn match_route(def: &RouteDef, path: &str) -> Option<RouteMatch> {
    let pattern = segments(def.path);
    let given = segments(path);
    if pattern.len() != given.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (pat, seg) in pattern.iter().zip(&given) {
        match pat.strip_prefix(':') {
            Some(key) => {
                params.insert(key.to_string(), (*seg).to_string());
            }
            None if pat == seg => {}
            None => return None,
        }
    }

    Some(RouteMatch {
        name: def.name,
        view: def.view,
        layout: def.layout,
        params,
    })
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
