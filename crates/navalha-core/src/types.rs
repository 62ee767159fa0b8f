//! # Domain Types
//!
//! Core domain types used throughout Navalha POS.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐
//! │    Product      │   │      Sale       │   │    Outflow      │
//! │  ─────────────  │   │  ─────────────  │   │  ─────────────  │
//! │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │
//! │  name           │◄──┤  product_id     │   │  description    │
//! │  purchase_price │   │  quantity       │   │  amount_cents   │
//! │  sale_price     │   │  discount_cents │   │  outflow_date   │
//! │  quantity_on_   │   │  payment_method │   └─────────────────┘
//! │    hand         │   │  sale_date      │
//! └─────────────────┘   └─────────────────┘
//! ```
//!
//! A Sale decrements its Product's `quantity_on_hand` at creation time and is
//! immutable afterwards; an Outflow is a create-only cash expenditure.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Payment Method
// =============================================================================

/// How a sale was paid.
///
/// The fixed set the register knows about: cash, the two card kinds, and Pix
/// (instant transfer). Stored as a snake_case string in the database.
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash. The only bucket outflows are subtracted from at
    /// register closing.
    Cash,
    /// Credit card on an external terminal.
    CreditCard,
    /// Debit card on an external terminal.
    DebitCard,
    /// Pix instant transfer.
    Pix,
}

impl PaymentMethod {
    /// All methods, in display order.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Pix,
    ];

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::Pix => "Pix",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses the tokens accepted on the command line (`cash`, `credit-card`,
/// `debit-card`, `pix`; underscores and short forms also accepted).
impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "credit-card" | "credit_card" | "credit" => Ok(PaymentMethod::CreditCard),
            "debit-card" | "debit_card" | "debit" => Ok(PaymentMethod::DebitCard),
            "pix" => Ok(PaymentMethod::Pix),
            _ => Err(ValidationError::NotAllowed {
                field: "payment_method".to_string(),
                allowed: vec![
                    "cash".to_string(),
                    "credit-card".to_string(),
                    "debit-card".to_string(),
                    "pix".to_string(),
                ],
            }),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A sellable stock item.
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4), immutable.
    pub id: String,

    /// Display name; non-empty, unique enough for report grouping.
    pub name: String,

    /// What the shop pays per unit, in cents.
    pub purchase_price_cents: i64,

    /// What the customer pays per unit, in cents. Not required to exceed
    /// the purchase price.
    pub sale_price_cents: i64,

    /// Current stock level; never negative.
    pub quantity_on_hand: i64,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated (edit or stock decrement).
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Builds a new product with a generated id and current timestamps.
    pub fn new(name: impl Into<String>, purchase_price: Money, sale_price: Money, quantity: i64) -> Self {
        let now = Utc::now();
        Product {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            purchase_price_cents: purchase_price.cents(),
            sale_price_cents: sale_price.cents(),
            quantity_on_hand: quantity,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the purchase price as Money.
    #[inline]
    pub fn purchase_price(&self) -> Money {
        Money::from_cents(self.purchase_price_cents)
    }

    /// Returns the sale price as Money.
    #[inline]
    pub fn sale_price(&self) -> Money {
        Money::from_cents(self.sale_price_cents)
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A ledger entry recording one sale of one product.
///
/// Created only through the sale operation, which atomically decrements the
/// product's stock; immutable thereafter.
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,

    /// The product sold; always references an existing product.
    pub product_id: String,

    /// Units sold; at least 1, at most the stock on hand at creation time.
    pub quantity: i64,

    /// Flat discount in cents. Not validated against the sale value and can
    /// exceed it.
    pub discount_cents: i64,

    pub payment_method: PaymentMethod,

    /// The register day this sale belongs to; defaults to today.
    pub sale_date: NaiveDate,

    pub created_at: DateTime<Utc>,
}

impl Sale {
    /// Returns the discount as Money.
    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_cents(self.discount_cents)
    }

    /// Net value of this sale: unit sale price × quantity − discount.
    pub fn net_value(&self, unit_sale_price: Money) -> Money {
        unit_sale_price.multiply_quantity(self.quantity) - self.discount()
    }
}

// =============================================================================
// Outflow
// =============================================================================

/// A non-sales cash expenditure recorded against a register day.
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outflow {
    pub id: String,

    /// What the money went to; non-empty.
    pub description: String,

    /// Amount in cents; never negative.
    pub amount_cents: i64,

    /// The register day; defaults to today.
    pub outflow_date: NaiveDate,

    pub created_at: DateTime<Utc>,
}

impl Outflow {
    /// Builds a new outflow dated today (local register day).
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Outflow {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            amount_cents: amount.cents(),
            outflow_date: Local::now().date_naive(),
            created_at: Utc::now(),
        }
    }

    /// Returns the amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_parsing() {
        assert_eq!("cash".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert_eq!(
            "credit-card".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::CreditCard
        );
        assert_eq!(
            "debit_card".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::DebitCard
        );
        assert_eq!("Pix".parse::<PaymentMethod>().unwrap(), PaymentMethod::Pix);
        assert!("cheque".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn payment_method_labels() {
        assert_eq!(PaymentMethod::Cash.to_string(), "Cash");
        assert_eq!(PaymentMethod::CreditCard.to_string(), "Credit Card");
        assert_eq!(PaymentMethod::Pix.to_string(), "Pix");
    }

    #[test]
    fn payment_method_serde_token() {
        let json = serde_json::to_string(&PaymentMethod::CreditCard).unwrap();
        assert_eq!(json, "\"credit_card\"");
    }

    #[test]
    fn product_new_generates_identity() {
        let p = Product::new("Pomade", Money::from_cents(1000), Money::from_cents(2500), 10);
        assert_eq!(p.name, "Pomade");
        assert_eq!(p.sale_price().cents(), 2500);
        assert_eq!(p.quantity_on_hand, 10);
        assert!(uuid::Uuid::parse_str(&p.id).is_ok());
    }

    #[test]
    fn sale_net_value() {
        let sale = Sale {
            id: "s1".to_string(),
            product_id: "p1".to_string(),
            quantity: 2,
            discount_cents: 1000,
            payment_method: PaymentMethod::Cash,
            sale_date: NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
            created_at: Utc::now(),
        };
        // 2 × R$ 50.00 − R$ 10.00 = R$ 90.00
        assert_eq!(sale.net_value(Money::from_cents(5000)).cents(), 9000);
    }

    #[test]
    fn discount_may_exceed_sale_value() {
        let sale = Sale {
            id: "s1".to_string(),
            product_id: "p1".to_string(),
            quantity: 1,
            discount_cents: 10_000,
            payment_method: PaymentMethod::Pix,
            sale_date: NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
            created_at: Utc::now(),
        };
        assert_eq!(sale.net_value(Money::from_cents(2000)).cents(), -8000);
    }
}
