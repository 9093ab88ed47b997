//! # Catalog Query Engine
//!
//! Turns (catalog, filter criteria, sort key) into the ordered product list
//! shown on the products page. Pure: the same inputs always give the same
//! output and the catalog is never modified.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  catalog (input order)                                                  │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  1. category filter   (skipped when no category is selected)           │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  2. price filter      min ≤ price ≤ max                                │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  3. rating filter     rating ≥ min_rating (when set)                   │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  4. sort              stable: ties keep catalog order                  │
//! │       featured    → featured items first, both groups in catalog order │
//! │       price-asc   → cheapest first                                     │
//! │       price-desc  → most expensive first                               │
//! │       rating      → best rated first                                   │
//! │       newest      → catalog order (products carry no timestamp)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{CategorySummary, Product};
use crate::validation::{validate_price_range, validate_product, validate_rating, ValidationResult};

/// Upper end of the price slider ($1000.00).
pub const DEFAULT_MAX_PRICE_CENTS: i64 = 100_000;

// =============================================================================
// Sort Key
// =============================================================================

/// Ordering mode for catalog queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SortKey {
    /// Featured products first, otherwise catalog order.
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    /// Highest rating first.
    Rating,
    /// Catalog order. There is no creation date to sort on, so this is a
    /// pass-through rather than a real recency sort.
    Newest,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Rating,
        SortKey::Newest,
    ];

    /// Wire token used by the frontend.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
        }
    }

    /// Parses a sort token, falling back to [`SortKey::Featured`] for
    /// anything unrecognized.
    ///
    /// ```rust
    /// use storefront_core::SortKey;
    ///
    /// assert_eq!(SortKey::parse_or_default("price-desc"), SortKey::PriceDesc);
    /// assert_eq!(SortKey::parse_or_default("cheapest"), SortKey::Featured);
    /// ```
    pub fn parse_or_default(token: &str) -> SortKey {
        token.parse().unwrap_or_else(|err: CoreError| {
            tracing::warn!(token, error = %err, "falling back to featured sort");
            SortKey::Featured
        })
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == token)
            .ok_or_else(|| CoreError::UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Filter Criteria
// =============================================================================

/// Inclusive price bounds in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PriceRange {
    pub min_cents: i64,
    pub max_cents: i64,
}

impl PriceRange {
    /// Creates a range, rejecting `min > max` and negative bounds.
    pub fn new(min_cents: i64, max_cents: i64) -> ValidationResult<Self> {
        validate_price_range(min_cents, max_cents)?;
        Ok(PriceRange {
            min_cents,
            max_cents,
        })
    }

    pub fn contains(&self, price: Money) -> bool {
        (self.min_cents..=self.max_cents).contains(&price.cents())
    }

    /// Whether the range is narrower than the full slider.
    pub fn is_narrowed(&self) -> bool {
        *self != PriceRange::default()
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        PriceRange {
            min_cents: 0,
            max_cents: DEFAULT_MAX_PRICE_CENTS,
        }
    }
}

/// What the shopper selected in the filter sidebar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FilterCriteria {
    /// Selected categories; empty means every category.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub price_range: PriceRange,
    #[serde(default)]
    pub min_rating: Option<f64>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for category in categories {
            let category = category.into();
            if !self.categories.contains(&category) {
                self.categories.push(category);
            }
        }
        self
    }

    pub fn with_price_range(mut self, min_cents: i64, max_cents: i64) -> ValidationResult<Self> {
        self.price_range = PriceRange::new(min_cents, max_cents)?;
        Ok(self)
    }

    pub fn with_min_rating(mut self, rating: f64) -> ValidationResult<Self> {
        validate_rating(rating)?;
        self.min_rating = Some(rating);
        Ok(self)
    }

    /// Checkbox behavior: selects the category, or deselects it if it was
    /// already selected.
    pub fn toggle_category(&mut self, category: &str) {
        if let Some(pos) = self.categories.iter().position(|c| c == category) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category.to_string());
        }
    }

    /// Back to "everything": no categories, full price range, no rating.
    pub fn reset(&mut self) {
        *self = FilterCriteria::default();
    }

    /// Whether any filter chip should be shown.
    pub fn is_active(&self) -> bool {
        !self.categories.is_empty() || self.price_range.is_narrowed() || self.min_rating.is_some()
    }

    /// Re-checks criteria that arrived through deserialization.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_price_range(self.price_range.min_cents, self.price_range.max_cents)?;
        if let Some(rating) = self.min_rating {
            validate_rating(rating)?;
        }
        Ok(())
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.categories.is_empty() || self.categories.contains(&product.category)
    }

    fn matches_rating(&self, product: &Product) -> bool {
        self.min_rating.map_or(true, |min| product.rating >= min)
    }
}

// =============================================================================
// Query
// =============================================================================

/// Runs the filter/sort pipeline over `products`.
///
/// ```rust
/// use storefront_core::{query, FilterCriteria, Product, SortKey};
///
/// let json = r#"[
///   {"id":"a","name":"A","priceCents":3000,"category":"Books","rating":4.0,"inStock":true},
///   {"id":"b","name":"B","priceCents":1000,"category":"Books","rating":4.0,"inStock":true,"featured":true},
///   {"id":"c","name":"C","priceCents":2000,"category":"Books","rating":4.0,"inStock":true}
/// ]"#;
/// let products: Vec<Product> = serde_json::from_str(json).unwrap();
///
/// let ids = |sort| -> Vec<String> {
///     query(&products, &FilterCriteria::default(), sort)
///         .into_iter()
///         .map(|p| p.id.clone())
///         .collect()
/// };
/// assert_eq!(ids(SortKey::PriceAsc), ["b", "c", "a"]);
/// assert_eq!(ids(SortKey::Featured), ["b", "a", "c"]);
/// ```
pub fn query<'a>(
    products: &'a [Product],
    criteria: &FilterCriteria,
    sort: SortKey,
) -> Vec<&'a Product> {
    let mut results: Vec<&Product> = products
        .iter()
        .filter(|p| criteria.matches_category(p))
        .filter(|p| criteria.price_range.contains(p.price()))
        .filter(|p| criteria.matches_rating(p))
        .collect();

    sort_products(&mut results, sort);
    results
}

/// Orders `products` in place. Every ordering is stable.
pub fn sort_products(products: &mut [&Product], sort: SortKey) {
    match sort {
        SortKey::Featured => products.sort_by_key(|p| !p.featured),
        SortKey::PriceAsc => products.sort_by_key(|p| p.price_cents),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Newest => {}
    }
}

/// Categories in order of first appearance, with product counts.
pub fn categories(products: &[Product]) -> Vec<CategorySummary> {
    let mut summaries: Vec<CategorySummary> = Vec::new();
    for product in products {
        match summaries.iter_mut().find(|s| s.name == product.category) {
            Some(summary) => summary.product_count += 1,
            None => summaries.push(CategorySummary {
                name: product.category.clone(),
                product_count: 1,
            }),
        }
    }
    summaries
}

/// Products flagged as featured, in catalog order.
pub fn featured(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.featured).collect()
}

/// Up to `limit` other products from the same category as `product_id`.
///
/// Empty when the id is unknown.
pub fn related<'a>(products: &'a [Product], product_id: &str, limit: usize) -> Vec<&'a Product> {
    let Some(anchor) = products.iter().find(|p| p.id == product_id) else {
        return Vec::new();
    };

    products
        .iter()
        .filter(|p| p.category == anchor.category && p.id != anchor.id)
        .take(limit)
        .collect()
}

// =============================================================================
// Catalog
// =============================================================================

/// A validated, read-only product collection.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Validates every product and checks ids are unique.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            validate_product(product)?;
            if !seen.insert(product.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id.clone(),
                }
                .into());
            }
        }

        Ok(Catalog { products })
    }

    /// Parses a JSON array of products.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidCatalog(e.to_string()))?;
        Catalog::new(products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn query(&self, criteria: &FilterCriteria, sort: SortKey) -> Vec<&Product> {
        query(&self.products, criteria, sort)
    }

    pub fn categories(&self) -> Vec<CategorySummary> {
        categories(&self.products)
    }

    pub fn featured(&self) -> Vec<&Product> {
        featured(&self.products)
    }

    pub fn related(&self, product_id: &str, limit: usize) -> Vec<&Product> {
        related(&self.products, product_id, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tests::product;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    fn three_priced() -> Vec<Product> {
        vec![
            product("thirty", 3000, "Books"),
            product("ten", 1000, "Books"),
            product("twenty", 2000, "Books"),
        ]
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let catalog = vec![
            product("e1", 100, "Electronics"),
            product("b1", 100, "Books"),
            product("e2", 100, "Electronics"),
            product("b2", 100, "Books"),
            product("e3", 100, "Electronics"),
        ];
        let criteria = FilterCriteria::new().with_categories(["Electronics"]);

        let out = query(&catalog, &criteria, SortKey::Newest);
        assert_eq!(ids(&out), ["e1", "e2", "e3"]);
    }

    #[test]
    fn test_empty_category_set_keeps_all() {
        let catalog = three_priced();
        let out = query(&catalog, &FilterCriteria::default(), SortKey::Newest);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_price_filter_inclusive() {
        let catalog = three_priced();
        let criteria = FilterCriteria::new().with_price_range(1000, 2000).unwrap();

        let out = query(&catalog, &criteria, SortKey::Newest);
        assert_eq!(ids(&out), ["ten", "twenty"]);
    }

    #[test]
    fn test_rating_filter() {
        let mut catalog = three_priced();
        catalog[0].rating = 4.8;
        catalog[1].rating = 3.9;
        catalog[2].rating = 4.0;
        let criteria = FilterCriteria::new().with_min_rating(4.0).unwrap();

        let out = query(&catalog, &criteria, SortKey::Newest);
        assert_eq!(ids(&out), ["thirty", "twenty"]);
    }

    #[test]
    fn test_price_sorts() {
        let catalog = three_priced();
        let all = FilterCriteria::default();

        assert_eq!(
            ids(&query(&catalog, &all, SortKey::PriceAsc)),
            ["ten", "twenty", "thirty"]
        );
        assert_eq!(
            ids(&query(&catalog, &all, SortKey::PriceDesc)),
            ["thirty", "twenty", "ten"]
        );
    }

    #[test]
    fn test_featured_is_stable_partition() {
        let mut catalog = three_priced();
        catalog[1].featured = true;

        let out = query(&catalog, &FilterCriteria::default(), SortKey::Featured);
        assert_eq!(ids(&out), ["ten", "thirty", "twenty"]);
    }

    #[test]
    fn test_featured_keeps_order_within_groups() {
        let mut catalog: Vec<Product> = (1..=6)
            .map(|i| product(&i.to_string(), 100, "Books"))
            .collect();
        catalog[1].featured = true;
        catalog[4].featured = true;

        let out = query(&catalog, &FilterCriteria::default(), SortKey::Featured);
        assert_eq!(ids(&out), ["2", "5", "1", "3", "4", "6"]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let mut catalog = vec![
            product("a", 500, "Books"),
            product("b", 100, "Books"),
            product("c", 500, "Books"),
            product("d", 100, "Books"),
        ];
        for p in &mut catalog {
            p.rating = 4.5;
        }

        let all = FilterCriteria::default();
        assert_eq!(ids(&query(&catalog, &all, SortKey::PriceAsc)), ["b", "d", "a", "c"]);
        assert_eq!(ids(&query(&catalog, &all, SortKey::PriceDesc)), ["a", "c", "b", "d"]);
        assert_eq!(ids(&query(&catalog, &all, SortKey::Rating)), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_rating_sort_descending() {
        let mut catalog = three_priced();
        catalog[0].rating = 3.5;
        catalog[1].rating = 4.9;
        catalog[2].rating = 4.2;

        let out = query(&catalog, &FilterCriteria::default(), SortKey::Rating);
        assert_eq!(ids(&out), ["ten", "twenty", "thirty"]);
    }

    #[test]
    fn test_newest_is_pass_through() {
        let mut catalog = three_priced();
        catalog[2].featured = true;

        let out = query(&catalog, &FilterCriteria::default(), SortKey::Newest);
        assert_eq!(ids(&out), ["thirty", "ten", "twenty"]);
    }

    #[test]
    fn test_query_is_idempotent() {
        let mut catalog = three_priced();
        catalog[2].featured = true;
        let before = catalog.clone();
        let criteria = FilterCriteria::new().with_price_range(0, 2500).unwrap();

        for sort in SortKey::ALL {
            let first = ids(&query(&catalog, &criteria, sort));
            let second = ids(&query(&catalog, &criteria, sort));
            assert_eq!(first, second);
        }
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_sort_key_parsing() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert!(matches!(
            "cheapest".parse::<SortKey>(),
            Err(CoreError::UnknownSortKey(_))
        ));
        assert_eq!(SortKey::parse_or_default("cheapest"), SortKey::Featured);
        assert_eq!(SortKey::parse_or_default(""), SortKey::Featured);
        assert_eq!(SortKey::parse_or_default("rating"), SortKey::Rating);
    }

    #[test]
    fn test_sort_key_serde_tokens() {
        let json = serde_json::to_string(&SortKey::PriceDesc).unwrap();
        assert_eq!(json, "\"price-desc\"");
        let key: SortKey = serde_json::from_str("\"price-asc\"").unwrap();
        assert_eq!(key, SortKey::PriceAsc);
    }

    #[test]
    fn test_price_range_rejects_inverted_bounds() {
        assert!(PriceRange::new(2000, 1000).is_err());
        assert!(FilterCriteria::new().with_price_range(2000, 1000).is_err());
        assert!(FilterCriteria::new().with_min_rating(6.0).is_err());
    }

    #[test]
    fn test_criteria_toggle_and_reset() {
        let mut criteria = FilterCriteria::default();
        assert!(!criteria.is_active());

        criteria.toggle_category("Books");
        criteria.toggle_category("Electronics");
        assert_eq!(criteria.categories, ["Books", "Electronics"]);
        assert!(criteria.is_active());

        criteria.toggle_category("Books");
        assert_eq!(criteria.categories, ["Electronics"]);

        criteria = criteria.with_price_range(0, 50_000).unwrap();
        criteria.toggle_category("Electronics");
        assert!(criteria.is_active());

        criteria.reset();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_criteria_deserialize_defaults() {
        let criteria: FilterCriteria = serde_json::from_str(r#"{"categories":["Books"]}"#).unwrap();
        assert_eq!(criteria.price_range, PriceRange::default());
        assert!(criteria.min_rating.is_none());

        let inverted: FilterCriteria =
            serde_json::from_str(r#"{"priceRange":{"minCents":900,"maxCents":100}}"#).unwrap();
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_categories_summary() {
        let catalog = vec![
            product("1", 100, "Electronics"),
            product("2", 100, "Books"),
            product("3", 100, "Electronics"),
        ];
        let summary = categories(&catalog);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].name, "Electronics");
        assert_eq!(summary[0].product_count, 2);
        assert_eq!(summary[1].name, "Books");
        assert_eq!(summary[1].product_count, 1);
    }

    #[test]
    fn test_related_products() {
        let catalog = vec![
            product("1", 100, "Electronics"),
            product("2", 100, "Books"),
            product("3", 100, "Electronics"),
            product("4", 100, "Electronics"),
            product("5", 100, "Electronics"),
        ];
        assert_eq!(ids(&related(&catalog, "3", 4)), ["1", "4", "5"]);
        assert_eq!(ids(&related(&catalog, "3", 2)), ["1", "4"]);
        assert!(related(&catalog, "2", 4).is_empty());
        assert!(related(&catalog, "missing", 4).is_empty());
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"[
            {"id":"1","name":"Lamp","priceCents":2500,"category":"Home","rating":4.1,"inStock":true,"featured":true},
            {"id":"2","name":"Novel","priceCents":1299,"category":"Books","rating":4.7,"inStock":false}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("2").map(|p| p.name.as_str()), Some("Novel"));
        assert_eq!(ids(&catalog.featured()), ["1"]);
    }

    #[test]
    fn test_catalog_rejects_bad_data() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CoreError::InvalidCatalog(_))
        ));

        let dup = vec![product("1", 100, "Books"), product("1", 200, "Books")];
        assert!(matches!(
            Catalog::new(dup),
            Err(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));

        let mut bad_rating = product("1", 100, "Books");
        bad_rating.rating = 7.0;
        assert!(Catalog::new(vec![bad_rating]).is_err());
    }
}
