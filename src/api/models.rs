//! The response records returned by the sales API.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// A product listing and whether it sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The API's ID for the record, if it sends one.
    #[serde(default)]
    pub id: Option<i64>,
    /// The product name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// The product description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// The listed price.
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    /// The sale date, displayed exactly as the API formats it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_of_sale: String,
    /// Whether the item sold.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sold: bool,
    /// The product category.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
}

/// Sale totals for a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// The sum of the prices of sold items. The API sends `null` when nothing sold.
    #[serde(default)]
    pub total_sale_amount: Option<f64>,
    /// The number of items sold.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_sold_items: u64,
    /// The number of items not sold.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_not_sold_items: u64,
}

/// The number of items whose price falls in a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRangeBucket {
    /// The label of the range, e.g. "0-100".
    pub price_range: String,
    /// The number of items in the range.
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
}

/// The number of items in a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    /// The category name.
    pub category: String,
    /// The number of items in the category.
    pub count: u64,
}

impl CategoryCount {
    /// Convert the API's `{category: count}` object into a list sorted by category.
    pub fn from_map(counts: BTreeMap<String, u64>) -> Vec<Self> {
        counts
            .into_iter()
            .map(|(category, count)| Self { category, count })
            .collect()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
