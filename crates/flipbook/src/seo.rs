//! Document title and head meta tags for catalog pages.

use crate::types::{Category, Product, Subcategory};

pub const SITE_NAME: &str = "Smith Instruments";

const PRODUCTS_KEYWORDS: &str =
    "surgical instruments, medical tools, general surgery, dental instruments, cardiovascular tools";

/// A head `<meta>` entry the site manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    Description,
    Keywords,
    OgTitle,
    OgDescription,
    OgType,
}

impl MetaKey {
    pub const ALL: [MetaKey; 5] = [
        MetaKey::Description,
        MetaKey::Keywords,
        MetaKey::OgTitle,
        MetaKey::OgDescription,
        MetaKey::OgType,
    ];

    /// Attribute that identifies the tag: `name` for plain meta, `property`
    /// for Open Graph.
    pub fn attribute(self) -> &'static str {
        match self {
            MetaKey::Description | MetaKey::Keywords => "name",
            MetaKey::OgTitle | MetaKey::OgDescription | MetaKey::OgType => "property",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MetaKey::Description => "description",
            MetaKey::Keywords => "keywords",
            MetaKey::OgTitle => "og:title",
            MetaKey::OgDescription => "og:description",
            MetaKey::OgType => "og:type",
        }
    }

    /// CSS selector for the tag in `<head>`.
    pub fn selector(self) -> String {
        format!("meta[{}=\"{}\"]", self.attribute(), self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            keywords: None,
        }
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn products_index() -> Self {
        Self::new(
            "Surgical Instruments Categories",
            "Browse our comprehensive range of surgical instruments by category.",
        )
        .with_keywords(PRODUCTS_KEYWORDS)
    }

    pub fn category(category: &Category) -> Self {
        Self::new(
            format!("{} Instruments", category.name),
            format!("Browse {} subcategories and instruments.", category.name),
        )
    }

    pub fn subcategory(category: &Category, sub: &Subcategory) -> Self {
        Self::new(
            format!("{} - {}", sub.name, category.name),
            format!("Browse our range of {} for {}.", sub.name, category.name),
        )
    }

    pub fn product(product: &Product) -> Self {
        Self::new(
            format!("{} | {}", product.name, product.sku),
            format!("{} ({}) - {}", product.name, product.sku, product.description),
        )
    }

    /// Title-only entry for a lookup that failed.
    pub fn not_found(title: impl Into<String>) -> Self {
        Self::new(title, "")
    }

    pub fn document_title(&self) -> String {
        format!("{} | {SITE_NAME}", self.title)
    }

    /// Content for `key`, or `None` when the tag should be absent.
    pub fn content(&self, key: MetaKey) -> Option<&str> {
        let value = match key {
            MetaKey::Description | MetaKey::OgDescription => self.description.as_str(),
            MetaKey::Keywords => self.keywords.as_deref()?,
            MetaKey::OgTitle => self.title.as_str(),
            MetaKey::OgType => "website",
        };
        (!value.is_empty()).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{category_by_slug, product_by_id, subcategory};

    #[test]
    fn test_product_meta() {
        let product = product_by_id("gs-001").unwrap();
        let meta = PageMeta::product(product);
        assert_eq!(meta.title, "Mayo Surgical Scissors Straight | SI-100-01");
        assert_eq!(
            meta.document_title(),
            "Mayo Surgical Scissors Straight | SI-100-01 | Smith Instruments"
        );
        assert_eq!(
            meta.content(MetaKey::Description),
            Some("Mayo Surgical Scissors Straight (SI-100-01) - Standard dissecting scissors with beveled blades, used for cutting fascia and sutures.")
        );
        assert_eq!(meta.content(MetaKey::OgDescription), meta.content(MetaKey::Description));
        assert_eq!(meta.content(MetaKey::OgTitle), Some(meta.title.as_str()));
        assert_eq!(meta.content(MetaKey::OgType), Some("website"));
        assert_eq!(meta.content(MetaKey::Keywords), None);
    }

    #[test]
    fn test_category_and_subcategory_meta() {
        let category = category_by_slug("general-surgery").unwrap();
        let meta = PageMeta::category(category);
        assert_eq!(meta.title, "General Surgery Instruments");
        assert_eq!(meta.description, "Browse General Surgery subcategories and instruments.");

        let sub = subcategory("general-surgery", "scissors").unwrap();
        let meta = PageMeta::subcategory(category, sub);
        assert_eq!(meta.title, "Scissors - General Surgery");
        assert_eq!(meta.description, "Browse our range of Scissors for General Surgery.");
    }

    #[test]
    fn test_keywords_only_when_set() {
        let index = PageMeta::products_index();
        assert_eq!(index.content(MetaKey::Keywords), Some(PRODUCTS_KEYWORDS));
        let category = PageMeta::category(category_by_slug("dental").unwrap());
        assert_eq!(category.content(MetaKey::Keywords), None);
        let tagged = category.with_keywords("");
        assert_eq!(tagged.content(MetaKey::Keywords), None);
    }

    #[test]
    fn test_not_found_drops_descriptions() {
        let meta = PageMeta::not_found("Product not found");
        assert_eq!(meta.document_title(), "Product not found | Smith Instruments");
        assert_eq!(meta.content(MetaKey::Description), None);
        assert_eq!(meta.content(MetaKey::OgDescription), None);
        assert_eq!(meta.content(MetaKey::OgTitle), Some("Product not found"));
    }

    #[test]
    fn test_selectors() {
        assert_eq!(MetaKey::Description.selector(), "meta[name=\"description\"]");
        assert_eq!(MetaKey::OgType.selector(), "meta[property=\"og:type\"]");
        let names: Vec<_> = MetaKey::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, ["description", "keywords", "og:title", "og:description", "og:type"]);
    }
}
