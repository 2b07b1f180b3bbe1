//! Cart types and request validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::product::Product;
use crate::GUEST_SESSION_ID;

/// A line in a session-scoped cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: i32,
    pub user_id: Option<i32>,
    pub product_id: i32,
    pub quantity: u32,
    pub color: Option<String>,
    pub session_id: String,
}

/// Cart line before an id is assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertCartItem {
    pub user_id: Option<i32>,
    pub product_id: i32,
    pub quantity: u32,
    pub color: Option<String>,
    pub session_id: String,
}

impl CartItem {
    pub fn from_insert(id: i32, insert: InsertCartItem) -> Self {
        Self {
            id,
            user_id: insert.user_id,
            product_id: insert.product_id,
            quantity: insert.quantity,
            color: insert.color,
            session_id: insert.session_id,
        }
    }

    /// Two lines are the same cart entry when product, session and color all agree
    pub fn same_entry(&self, other: &InsertCartItem) -> bool {
        self.product_id == other.product_id
            && self.session_id == other.session_id
            && self.color == other.color
    }
}

/// Cart item joined with its product at read time. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItemWithProduct {
    #[serde(flatten)]
    pub item: CartItem,
    pub product: Option<Product>,
}

impl CartItemWithProduct {
    /// Line total at the product's effective price, zero when the product is gone
    pub fn line_total(&self) -> u64 {
        self.product
            .as_ref()
            .map(|p| p.effective_price().saturating_mul(u64::from(self.item.quantity)))
            .unwrap_or(0)
    }
}

/// Totals for one session's cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub session_id: String,
    pub line_count: usize,
    pub item_count: u64,
    pub subtotal: u64,
}

impl CartSummary {
    pub fn from_lines(session_id: &str, lines: &[CartItemWithProduct]) -> Self {
        Self {
            session_id: session_id.to_string(),
            line_count: lines.len(),
            item_count: lines.iter().map(|l| u64::from(l.item.quantity)).sum(),
            subtotal: lines
                .iter()
                .fold(0u64, |acc, l| acc.saturating_add(l.line_total())),
        }
    }
}

/// Request validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("quantity must be a positive integer, got {0}")]
    NonPositiveQuantity(i64),

    #[error("quantity {0} is too large")]
    QuantityTooLarge(i64),

    #[error("sessionId must not be blank")]
    BlankSessionId,

    #[error("minPrice {min} is greater than maxPrice {max}")]
    InvalidPriceRange { min: u64, max: u64 },
}

fn validate_quantity(quantity: i64) -> Result<u32, ValidationError> {
    if quantity < 1 {
        return Err(ValidationError::NonPositiveQuantity(quantity));
    }
    u32::try_from(quantity).map_err(|_| ValidationError::QuantityTooLarge(quantity))
}

/// Body of `POST /api/cart`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: i32,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<i32>,
}

impl AddToCartRequest {
    /// Check the body and turn it into an insertable cart line.
    ///
    /// A missing quantity means one unit; a missing session id means the guest cart.
    pub fn validate(self) -> Result<InsertCartItem, ValidationError> {
        let quantity = validate_quantity(self.quantity.unwrap_or(1))?;

        let session_id = match self.session_id {
            Some(id) if id.trim().is_empty() => return Err(ValidationError::BlankSessionId),
            Some(id) => id,
            None => GUEST_SESSION_ID.to_string(),
        };

        Ok(InsertCartItem {
            user_id: self.user_id,
            product_id: self.product_id,
            quantity,
            color: self.color,
            session_id,
        })
    }
}

/// Body of `PUT /api/cart/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCartItemRequest {
    pub quantity: i64,
}

impl UpdateCartItemRequest {
    pub fn validate(&self) -> Result<u32, ValidationError> {
        validate_quantity(self.quantity)
    }
}
