//! Routes: the two navigable locations and their paths.

use std::fmt;
use std::str::FromStr;

pub const LIST_PATH: &str = "/products/list";

/// A location in the app, addressed by path like a web router.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/products/list`
    #[default]
    List,
    /// `/products/{pid}`. The id is kept verbatim; an empty id is allowed
    /// and simply never fetches.
    Detail(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::List => LIST_PATH.to_string(),
            Self::Detail(pid) => format!("/products/{pid}"),
        }
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        match trimmed {
            "" | "/products" | LIST_PATH => return Ok(Self::List),
            _ => {}
        }
        match trimmed.strip_prefix("/products/") {
            Some(pid) if !pid.contains('/') => Ok(Self::Detail(pid.to_string())),
            _ => Err(format!("no route for path '{path}'")),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
