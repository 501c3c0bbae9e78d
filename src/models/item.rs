use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use crate::models::InventoryError;

/// Longest name accepted by a partial update
pub const UPDATE_NAME_MAX_CHARS: usize = 8;

/// Category of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tools,
    Consumables,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tools => "tools",
            Category::Consumables => "consumables",
        }
    }
}

/// One inventory line.
///
/// Only constructible through [`Item::new`] (or `TryFrom<ItemPayload>`), which
/// rejects punctuation in the name, a negative count and a negative or
/// non-finite price. Later partial
/// updates are checked against [`ItemUpdate::validate`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Item {
    /// Unique integer that specifies this item
    id: i64,
    /// Name of the item
    name: String,
    /// Price of the item in Euro
    price: f64,
    /// Amount of instances of this item in stock
    count: i64,
    /// Category this item belongs to
    category: Category,
}

impl Item {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: f64,
        count: i64,
        category: Category,
    ) -> Result<Self, InventoryError> {
        let name = name.into();
        validate_name(&name)?;
        validate_non_negative_price(price)?;
        validate_non_negative_count(count)?;

        Ok(Self { id, name, price, count, category })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Overwrite only the fields present in `update`. The update is expected
    /// to have passed [`ItemUpdate::validate`].
    pub(crate) fn apply(&mut self, update: ItemUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(count) = update.count {
            self.count = count;
        }
    }
}

/// Request body for adding an item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemPayload {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub count: i64,
    pub category: Category,
}

impl TryFrom<ItemPayload> for Item {
    type Error = InventoryError;

    fn try_from(payload: ItemPayload) -> Result<Self, Self::Error> {
        Item::new(payload.id, payload.name, payload.price, payload.count, payload.category)
    }
}

/// Partial update taken from the query string of `PUT /items/{item_id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemUpdate {
    /// New name, 1 to 8 characters
    pub name: Option<String>,
    /// New price, strictly positive
    pub price: Option<f64>,
    /// New stock count, zero or more
    pub count: Option<i64>,
}

impl ItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.count.is_none()
    }

    /// Check the per-parameter bounds of a partial update.
    pub fn validate(&self) -> Result<(), InventoryError> {
        if let Some(name) = &self.name {
            let len = name.chars().count();
            if len == 0 || len > UPDATE_NAME_MAX_CHARS {
                return Err(InventoryError::Validation(format!(
                    "name must be between 1 and {} characters.",
                    UPDATE_NAME_MAX_CHARS
                )));
            }
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price <= 0.0 {
                return Err(InventoryError::Validation(
                    "price must be a finite number greater than 0.".to_string(),
                ));
            }
        }
        if let Some(count) = self.count {
            validate_non_negative_count(count)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), InventoryError> {
    if name.is_empty() {
        return Err(InventoryError::Validation("Name must not be empty.".to_string()));
    }
    if name.chars().any(|c| c.is_ascii_punctuation()) {
        return Err(InventoryError::Validation(
            "Name must not include punctuation.".to_string(),
        ));
    }
    Ok(())
}

fn validate_non_negative_price(price: f64) -> Result<(), InventoryError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(InventoryError::Validation("Numbers must be positive.".to_string()))
    }
}

fn validate_non_negative_count(count: i64) -> Result<(), InventoryError> {
    if count >= 0 {
        Ok(())
    } else {
        Err(InventoryError::Validation("Numbers must be positive.".to_string()))
    }
}
