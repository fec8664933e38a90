//! Hash-fragment routing for the site.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum Route {
    Home,
    Products,
    Category {
        category: String,
    },
    Subcategory {
        category: String,
        subcategory: String,
    },
    Product {
        category: String,
        subcategory: String,
        id: String,
    },
    Catalogues,
    About,
    Contact,
    Blog,
    NotFound,
}

impl Route {
    /// Parse `location.hash`. Accepts `#/x`, `#x`, `/x` and a trailing slash;
    /// query strings are ignored.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let path = path.split('?').next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["products"] => Route::Products,
            ["products", category] => Route::Category {
                category: decode(category),
            },
            ["products", category, subcategory] => Route::Subcategory {
                category: decode(category),
                subcategory: decode(subcategory),
            },
            ["products", category, subcategory, id] => Route::Product {
                category: decode(category),
                subcategory: decode(subcategory),
                id: decode(id),
            },
            ["catalogues"] => Route::Catalogues,
            ["about"] => Route::About,
            ["contact"] => Route::Contact,
            ["blog"] => Route::Blog,
            _ => Route::NotFound,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Products => "#/products".to_string(),
            Route::Category { category } => format!("#/products/{category}"),
            Route::Subcategory {
                category,
                subcategory,
            } => format!("#/products/{category}/{subcategory}"),
            Route::Product {
                category,
                subcategory,
                id,
            } => format!("#/products/{category}/{subcategory}/{id}"),
            Route::Catalogues => "#/catalogues".to_string(),
            Route::About => "#/about".to_string(),
            Route::Contact => "#/contact".to_string(),
            Route::Blog => "#/blog".to_string(),
            Route::NotFound => "#/404".to_string(),
        }
    }

    /// Path without the leading `#`, used to mark the active nav item.
    pub fn path(&self) -> String {
        self.to_hash().trim_start_matches('#').to_string()
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home)
    }

    /// Whether a nav item with `nav_path` should be highlighted.
    pub fn is_under(&self, nav_path: &str) -> bool {
        let path = self.path();
        if nav_path == "/" {
            return path == "/";
        }
        path == nav_path || path.starts_with(&format!("{nav_path}/"))
    }
}

fn decode(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}
