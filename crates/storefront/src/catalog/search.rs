//! Case-insensitive substring search over the catalog.
//!
//! A product matches when the lower-cased query appears in its name,
//! description, category, or artist. There is no tokenization or ranking;
//! matches keep catalog order.

use crate::models::Product;

/// Outcome of a catalog search.
///
/// A blank query and a query with zero hits are different states: the first
/// shows the featured collection, the second shows "No products found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResults<'a> {
    /// The query was blank; this is the full catalog in its original order.
    All(&'a [Product]),
    /// Products matching a non-blank query, in catalog order. May be empty.
    Matches(Vec<&'a Product>),
}

impl<'a> SearchResults<'a> {
    /// Iterate over the resulting products.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &'a Product> + '_> {
        match self {
            Self::All(products) => Box::new(products.iter()),
            Self::Matches(matches) => Box::new(matches.iter().copied()),
        }
    }

    /// Collect the resulting products.
    #[must_use]
    pub fn products(&self) -> Vec<&'a Product> {
        self.iter().collect()
    }

    /// Number of resulting products.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::All(products) => products.len(),
            Self::Matches(matches) => matches.len(),
        }
    }

    /// Returns `true` if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if a non-blank query was applied.
    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        matches!(self, Self::Matches(_))
    }
}

/// Search `products` for `query`.
#[must_use]
pub fn search<'a>(query: &str, products: &'a [Product]) -> SearchResults<'a> {
    if query.trim().is_empty() {
        return SearchResults::All(products);
    }

    let needle = query.to_lowercase();
    SearchResults::Matches(
        products
            .iter()
            .filter(|product| matches_lowered(product, &needle))
            .collect(),
    )
}

/// Returns `true` if `product` contains `query` (case-insensitive) in any
/// searchable field.
#[must_use]
pub fn matches_query(product: &Product, query: &str) -> bool {
    matches_lowered(product, &query.to_lowercase())
}

fn matches_lowered(product: &Product, needle: &str) -> bool {
    [
        Some(product.name.as_str()),
        Some(product.description.as_str()),
        Some(product.category.as_str()),
        product.artist.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ids(results: &SearchResults<'_>) -> Vec<String> {
        results.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_blank_query_returns_full_catalog_in_order() {
        let catalog = Catalog::gallery();
        for query in ["", "   ", "\t"] {
            let results = catalog.search(query);
            assert!(!results.is_filtered());
            assert_eq!(ids(&results), vec!["1", "2", "3", "4", "5", "6"]);
        }
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let catalog = Catalog::gallery();
        assert_eq!(ids(&catalog.search("VENUS")), vec!["1"]);
    }

    #[test]
    fn test_matches_category_and_description() {
        let catalog = Catalog::gallery();
        assert_eq!(ids(&catalog.search("decorations")), vec!["3", "5"]);
        assert_eq!(ids(&catalog.search("glazing")), vec!["3"]);
    }

    #[test]
    fn test_matches_artist() {
        let catalog = Catalog::gallery();
        assert_eq!(ids(&catalog.search("rodriguez")), vec!["2"]);
    }

    #[test]
    fn test_material_is_not_searched() {
        let catalog = Catalog::gallery();
        // "Carrara" only appears in the material field
        let results = catalog.search("carrara");
        assert!(results.is_filtered());
        assert!(results.is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed_when_matching() {
        let catalog = Catalog::gallery();
        // Inner text with a leading space still must appear verbatim
        assert_eq!(ids(&catalog.search(" modern")), vec!["2", "5", "6"]);
    }

    #[test]
    fn test_every_result_matches_and_every_non_result_does_not() {
        let catalog = Catalog::gallery();
        for query in ["sculpture", "bronze", "ar", "set", "zzz", "Studio"] {
            let results = catalog.search(query);
            let hit_ids = ids(&results);
            for product in catalog.products() {
                let hit = hit_ids.contains(&product.id.to_string());
                assert_eq!(
                    hit,
                    matches_query(product, query),
                    "query {query:?} product {}",
                    product.id
                );
            }
        }
    }

    #[test]
    fn test_no_match_is_distinct_from_no_query() {
        let catalog = Catalog::gallery();
        let none = catalog.search("unicorn");
        assert_eq!(none, SearchResults::Matches(Vec::new()));
        assert_ne!(none, catalog.search(""));
    }
}
