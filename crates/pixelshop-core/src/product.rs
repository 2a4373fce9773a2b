use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product, normalized at the fetch boundary for in-memory
/// querying. The catalog is read-only after load, so every field is plain
/// owned data with no interior mutability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Source numeric product ID. Unique and stable across fetches.
    pub id: i64,
    /// Display name; the only field free-text search matches against.
    pub title: String,
    /// Price in the source's currency. `Decimal` so price-bound filters and
    /// price sorting compare exactly and totally.
    pub price: Decimal,
    /// Plain-text description. Absent when the source sends none.
    pub description: Option<String>,
    /// Source category slug, e.g. `"smartphones"`.
    pub category: String,
    /// Brand name; not every source record carries one.
    pub brand: Option<String>,
    /// Thumbnail URL for card rendering.
    pub image: Option<String>,
    /// Normalized rating signal.
    pub rating: Rating,
    /// Derived availability flag. Always computed deterministically at the
    /// normalize boundary — never read directly from the payload.
    pub in_stock: bool,
}

/// A product's rating signal.
///
/// Sources disagree on shape: some send a bare 0–5 scalar, others a
/// `{rate, count}` pair. Both normalize to this type; `count` is `None`
/// when the source does not report review volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: Option<u64>,
}

impl Rating {
    /// Returns `true` if the source reported any rating signal at all.
    #[must_use]
    pub fn is_rated(&self) -> bool {
        self.rate > 0.0 || self.count.is_some()
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self {
            rate: 0.0,
            count: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: i64, title: &str, price: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: price.parse().expect("test price"),
            description: Some("A thing.".to_string()),
            category: "smartphones".to_string(),
            brand: Some("Acme".to_string()),
            image: Some("https://cdn.example.com/1/thumb.jpg".to_string()),
            rating: Rating {
                rate: 4.5,
                count: Some(120),
            },
            in_stock: true,
        }
    }

    #[test]
    fn rating_default_is_unrated() {
        let rating = Rating::default();
        assert!(!rating.is_rated());
        assert_eq!(rating.rate, 0.0);
        assert!(rating.count.is_none());
    }

    #[test]
    fn rating_with_scalar_only_counts_as_rated() {
        let rating = Rating {
            rate: 3.2,
            count: None,
        };
        assert!(rating.is_rated());
    }

    #[test]
    fn rating_with_zero_rate_but_count_counts_as_rated() {
        let rating = Rating {
            rate: 0.0,
            count: Some(1),
        };
        assert!(rating.is_rated());
    }

    #[test]
    fn serde_roundtrip_product() {
        let product = make_product(7, "Pixel Stand", "29.99");
        let json = serde_json::to_string(&product).expect("serialization failed");
        let decoded: Product = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded.id, product.id);
        assert_eq!(decoded.title, product.title);
        assert_eq!(decoded.price, product.price);
        assert_eq!(decoded.rating, product.rating);
        assert!(decoded.in_stock);
    }
}
