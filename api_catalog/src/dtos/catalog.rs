use serde::Deserialize;

/// Pseudo-category that selects the whole catalog.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
}

impl CatalogQuery {
    /// The requested category, `All` when absent or blank. Anything else is
    /// passed through untouched and matched exactly.
    pub fn selected(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.trim().is_empty() => category,
            _ => ALL_CATEGORIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_category_selects_all() {
        assert_eq!(CatalogQuery { category: None }.selected(), "All");
        assert_eq!(CatalogQuery { category: Some(" ".into()) }.selected(), "All");
        assert_eq!(CatalogQuery { category: Some("Books & Media".into()) }.selected(), "Books & Media");
    }

    #[test]
    fn category_is_not_trimmed() {
        let query = CatalogQuery {
            category: Some(" Clothing".into()),
        };
        assert_eq!(query.selected(), " Clothing");
    }
}
