use crate::shared::listing::CatalogItem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Product
// ============================================================================

/// Catalog entry as published by the remote products feed.
///
/// Read-only on the client: records are loaded wholesale on every page visit
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub in_stock: bool,
    pub stock_quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings: Option<Ratings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_details: Option<ShippingDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    pub average: f64,
    pub reviews_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub user: String,
    pub rating: f64,
    pub comment: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub weight: String,
    pub dimensions: String,
    pub shipping_cost: f64,
    pub estimated_delivery_time: String,
}

impl Product {
    /// Stock column of the grid card: the quantity, or a marker when sold out.
    pub fn stock_label(&self) -> String {
        if self.in_stock {
            self.stock_quantity.to_string()
        } else {
            "(Out of stock)".to_string()
        }
    }

    /// `True` / `False`, as shown in the table.
    pub fn in_stock_title(&self) -> &'static str {
        if self.in_stock {
            "True"
        } else {
            "False"
        }
    }

    /// `Yes` / `No`, as shown on the details card.
    pub fn in_stock_answer(&self) -> &'static str {
        if self.in_stock {
            "Yes"
        } else {
            "No"
        }
    }

    /// Average rating with one decimal, `-` when the product has no ratings.
    pub fn rating_cell(&self) -> String {
        match &self.ratings {
            Some(r) => format!("{:.1}", r.average),
            None => "-".to_string(),
        }
    }

    /// Average rating for the details card. A missing or zero average is `Unknown`.
    pub fn rating_summary(&self) -> String {
        match &self.ratings {
            Some(r) if r.average != 0.0 => r.average.to_string(),
            _ => "Unknown".to_string(),
        }
    }
}

impl CatalogItem for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }
}

#[cfg(test)]
pub(crate) fn sample(id: &str, name: &str, category: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: String::new(),
        price: 10.0,
        in_stock: true,
        stock_quantity: 3,
        specifications: None,
        ratings: None,
        reviews: None,
        shipping_details: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let value = json!({
            "id": "p-001",
            "name": "Widget",
            "category": "Tools",
            "description": "A widget",
            "price": 19.99,
            "inStock": true,
            "stockQuantity": 42,
            "specifications": { "color": "red" },
            "ratings": { "average": 4.5, "reviewsCount": 12 },
            "reviews": [
                { "user": "ann", "rating": 5, "comment": "great", "date": "2024-01-02" }
            ],
            "shippingDetails": {
                "weight": "1kg",
                "dimensions": "10x10x10",
                "shippingCost": 4.5,
                "estimatedDeliveryTime": "3 days"
            }
        });

        let product: Product = serde_json::from_value(value).unwrap();
        assert_eq!(product.id, "p-001");
        assert_eq!(product.stock_quantity, 42);
        assert_eq!(product.ratings.as_ref().unwrap().reviews_count, 12);
        assert_eq!(product.reviews.as_ref().unwrap()[0].user, "ann");
        assert_eq!(
            product.shipping_details.as_ref().unwrap().estimated_delivery_time,
            "3 days"
        );
        assert_eq!(
            product.specifications.as_ref().unwrap().get("color").map(String::as_str),
            Some("red")
        );
    }

    #[test]
    fn test_deserialize_without_optional_groups() {
        let value = json!({
            "id": "p-002",
            "name": "Rake",
            "category": "Garden",
            "price": 7,
            "inStock": false,
            "stockQuantity": 0
        });

        let product: Product = serde_json::from_value(value).unwrap();
        assert_eq!(product.description, "");
        assert!(product.ratings.is_none());
        assert!(product.reviews.is_none());
        assert!(product.shipping_details.is_none());
        assert_eq!(product.price, 7.0);
    }

    #[test]
    fn test_stock_labels() {
        let mut product = sample("1", "Widget", "Tools");
        assert_eq!(product.stock_label(), "3");
        assert_eq!(product.in_stock_title(), "True");
        assert_eq!(product.in_stock_answer(), "Yes");

        product.in_stock = false;
        assert_eq!(product.stock_label(), "(Out of stock)");
        assert_eq!(product.in_stock_title(), "False");
        assert_eq!(product.in_stock_answer(), "No");
    }

    #[test]
    fn test_rating_labels() {
        let mut product = sample("1", "Widget", "Tools");
        assert_eq!(product.rating_cell(), "-");
        assert_eq!(product.rating_summary(), "Unknown");

        product.ratings = Some(Ratings {
            average: 4.26,
            reviews_count: 8,
        });
        assert_eq!(product.rating_cell(), "4.3");
        assert_eq!(product.rating_summary(), "4.26");

        product.ratings = Some(Ratings {
            average: 0.0,
            reviews_count: 0,
        });
        assert_eq!(product.rating_cell(), "0.0");
        assert_eq!(product.rating_summary(), "Unknown");
    }
}
