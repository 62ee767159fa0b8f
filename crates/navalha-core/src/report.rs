//! # Report Computation
//!
//! Pure aggregation logic behind the daily and monthly reports. The reporting
//! service feeds these functions plain row data read from the store; nothing
//! here performs I/O.
//!
//! ## Daily report (for register day D)
//! ```text
//! sales on D ──┬── units sold per product name
//!              ├── gross per payment method (price × qty − discount)
//!              └── distribution (% of the day's total)
//! outflows on D ── total, subtracted from the Cash bucket only
//!                          │
//!                          ▼
//!              closing balance per payment method
//! ```
//!
//! ## Monthly report (for month M of year Y)
//! Covers every product, sold or not, over the inclusive month range, and
//! produces the grand totals exported to the XLSX artifact.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{PaymentMethod, Product};

// =============================================================================
// Input rows
// =============================================================================

/// One sale row joined with its product, as the daily report consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleFact {
    pub product_name: String,
    pub unit_sale_price: Money,
    pub quantity: i64,
    pub discount: Money,
    pub payment_method: PaymentMethod,
}

impl SaleFact {
    /// Net value of this sale: unit price × quantity − discount.
    pub fn net_value(&self) -> Money {
        self.unit_sale_price.multiply_quantity(self.quantity) - self.discount
    }
}

/// One outflow line as the daily report consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutflowLine {
    pub description: String,
    pub amount: Money,
}

/// One sale row as the monthly report consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySaleRow {
    pub product_id: String,
    pub quantity: i64,
    pub discount: Money,
}

// =============================================================================
// Daily report
// =============================================================================

/// A payment method's share of the day's gross.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodShare {
    pub method: PaymentMethod,
    pub percent: f64,
}

/// The daily financial report for one register day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: NaiveDate,

    /// Units sold per product name.
    pub units_by_product: BTreeMap<String, i64>,

    /// Gross (net of discount) per payment method.
    pub gross_by_method: BTreeMap<PaymentMethod, Money>,

    /// Each method's gross as a percentage of the day's total. Empty when
    /// there were no sales (or the day's total is zero).
    pub distribution: Vec<MethodShare>,

    /// The day's outflow lines.
    pub outflows: Vec<OutflowLine>,

    /// Sum of the day's outflows.
    pub total_outflows: Money,

    /// Closing balance per payment method. Equal to the gross, except Cash,
    /// which additionally absorbs the outflow total. Cash always appears,
    /// even with no cash sales.
    pub closing_balances: BTreeMap<PaymentMethod, Money>,
}

/// Computes the daily report for `date` from the day's sales and outflows.
pub fn daily_report(date: NaiveDate, sales: &[SaleFact], outflows: &[OutflowLine]) -> DailyReport {
    let mut units_by_product: BTreeMap<String, i64> = BTreeMap::new();
    let mut gross_by_method: BTreeMap<PaymentMethod, Money> = BTreeMap::new();

    for sale in sales {
        *units_by_product.entry(sale.product_name.clone()).or_insert(0) += sale.quantity;
        *gross_by_method
            .entry(sale.payment_method)
            .or_insert_with(Money::zero) += sale.net_value();
    }

    let day_total: Money = gross_by_method.values().copied().sum();

    // Short-circuit on an empty day (or an all-zero one): a distribution over
    // a zero total is undefined.
    let distribution = if sales.is_empty() || day_total.is_zero() {
        Vec::new()
    } else {
        gross_by_method
            .iter()
            .map(|(&method, &gross)| MethodShare {
                method,
                percent: gross.cents() as f64 * 100.0 / day_total.cents() as f64,
            })
            .collect()
    };

    let total_outflows: Money = outflows.iter().map(|o| o.amount).sum();

    let mut closing_balances = gross_by_method.clone();
    // Outflows only ever leave the cash drawer. The Cash bucket appears even
    // when it had no sales, carrying 0 − total_outflows.
    *closing_balances
        .entry(PaymentMethod::Cash)
        .or_insert_with(Money::zero) -= total_outflows;

    DailyReport {
        date,
        units_by_product,
        gross_by_method,
        distribution,
        outflows: outflows.to_vec(),
        total_outflows,
        closing_balances,
    }
}

// =============================================================================
// Monthly report
// =============================================================================

/// Per-product line of the monthly report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSummary {
    pub name: String,
    pub units_sold: i64,

    /// Σ(sale price × quantity − discount) over the month.
    pub net_revenue: Money,

    /// Σ((sale price − purchase price) × quantity) over the month. The
    /// discount is not subtracted here; only net revenue carries it.
    pub gross_margin: Money,
}

/// The monthly financial report, one line per product plus grand totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub month: u32,
    pub year: i32,

    /// First day of the month.
    pub start: NaiveDate,

    /// Last day of the month (leap-year aware).
    pub end: NaiveDate,

    /// One line per registered product, sold or not.
    pub products: Vec<ProductSummary>,

    pub total_net_revenue: Money,
    pub total_gross_margin: Money,
    pub total_outflows: Money,

    /// total_net_revenue − total_outflows.
    pub cash_total: Money,

    /// total_net_revenue − total_gross_margin − total_outflows.
    pub profit: Money,
}

/// Returns the inclusive [first day, last day] range of a month.
///
/// The last day is computed as the first day of the next month minus one day,
/// which handles 28/29/30/31-day months uniformly.
pub fn month_range(year: i32, month: u32) -> ValidationResult<(NaiveDate, NaiveDate)> {
    let out_of_range = || ValidationError::OutOfRange {
        field: "month".to_string(),
        min: 1,
        max: 12,
    };

    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .ok_or_else(out_of_range)?;

    Ok((start, end))
}

/// Computes the monthly report from the month's sales rows, the full product
/// list, and the month's outflow total.
///
/// `products` must be the complete registry: products with no sales in the
/// month still get a line with zeroed figures.
pub fn monthly_report(
    year: i32,
    month: u32,
    products: &[Product],
    sales: &[MonthlySaleRow],
    total_outflows: Money,
) -> ValidationResult<MonthlyReport> {
    let (start, end) = month_range(year, month)?;

    // Accumulate units and discounts per product id; prices are constant per
    // product, so revenue and margin fall out of the totals.
    let mut sold: HashMap<&str, (i64, Money)> = HashMap::new();
    for row in sales {
        let entry = sold
            .entry(row.product_id.as_str())
            .or_insert((0, Money::zero()));
        entry.0 += row.quantity;
        entry.1 += row.discount;
    }

    let mut summaries = Vec::with_capacity(products.len());
    let mut total_net_revenue = Money::zero();
    let mut total_gross_margin = Money::zero();

    for product in products {
        let (units_sold, discounts) = sold
            .get(product.id.as_str())
            .copied()
            .unwrap_or((0, Money::zero()));

        let net_revenue = product.sale_price().multiply_quantity(units_sold) - discounts;
        let gross_margin =
            (product.sale_price() - product.purchase_price()).multiply_quantity(units_sold);

        total_net_revenue += net_revenue;
        total_gross_margin += gross_margin;

        summaries.push(ProductSummary {
            name: product.name.clone(),
            units_sold,
            net_revenue,
            gross_margin,
        });
    }

    Ok(MonthlyReport {
        month,
        year,
        start,
        end,
        products: summaries,
        total_net_revenue,
        total_gross_margin,
        total_outflows,
        cash_total: total_net_revenue - total_outflows,
        profit: total_net_revenue - total_gross_margin - total_outflows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fact(name: &str, price: i64, qty: i64, discount: i64, method: PaymentMethod) -> SaleFact {
        SaleFact {
            product_name: name.to_string(),
            unit_sale_price: Money::from_cents(price),
            quantity: qty,
            discount: Money::from_cents(discount),
            payment_method: method,
        }
    }

    fn product(name: &str, purchase: i64, sale: i64) -> Product {
        Product::new(
            name,
            Money::from_cents(purchase),
            Money::from_cents(sale),
            0,
        )
    }

    #[test]
    fn daily_closing_balances_subtract_outflows_from_cash_only() {
        // One cash sale of R$ 100.00 with R$ 10.00 discount, one Pix sale of
        // R$ 50.00, one R$ 20.00 outflow.
        let sales = vec![
            fact("Haircut Gel", 10_000, 1, 1_000, PaymentMethod::Cash),
            fact("Shampoo", 5_000, 1, 0, PaymentMethod::Pix),
        ];
        let outflows = vec![OutflowLine {
            description: "Coffee".to_string(),
            amount: Money::from_cents(2_000),
        }];

        let report = daily_report(date(2026, 8, 4), &sales, &outflows);

        assert_eq!(report.gross_by_method[&PaymentMethod::Cash].cents(), 9_000);
        assert_eq!(report.gross_by_method[&PaymentMethod::Pix].cents(), 5_000);
        assert_eq!(report.total_outflows.cents(), 2_000);

        // Cash: 100 − 10 − 20 = 70; Pix untouched at 50.
        assert_eq!(report.closing_balances[&PaymentMethod::Cash].cents(), 7_000);
        assert_eq!(report.closing_balances[&PaymentMethod::Pix].cents(), 5_000);
    }

    #[test]
    fn daily_units_grouped_by_product_name() {
        let sales = vec![
            fact("Shampoo", 5_000, 2, 0, PaymentMethod::Cash),
            fact("Shampoo", 5_000, 3, 0, PaymentMethod::Pix),
            fact("Pomade", 2_500, 1, 0, PaymentMethod::Cash),
        ];

        let report = daily_report(date(2026, 8, 4), &sales, &[]);

        assert_eq!(report.units_by_product["Shampoo"], 5);
        assert_eq!(report.units_by_product["Pomade"], 1);
    }

    #[test]
    fn daily_distribution_percentages() {
        let sales = vec![
            fact("A", 7_500, 1, 0, PaymentMethod::Cash),
            fact("B", 2_500, 1, 0, PaymentMethod::Pix),
        ];

        let report = daily_report(date(2026, 8, 4), &sales, &[]);

        assert_eq!(report.distribution.len(), 2);
        let cash = report
            .distribution
            .iter()
            .find(|s| s.method == PaymentMethod::Cash)
            .unwrap();
        let pix = report
            .distribution
            .iter()
            .find(|s| s.method == PaymentMethod::Pix)
            .unwrap();
        assert!((cash.percent - 75.0).abs() < 1e-9);
        assert!((pix.percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn daily_empty_day_has_no_distribution_but_cash_still_closes() {
        let outflows = vec![OutflowLine {
            description: "Rent".to_string(),
            amount: Money::from_cents(80_000),
        }];

        let report = daily_report(date(2026, 8, 4), &[], &outflows);

        assert!(report.units_by_product.is_empty());
        assert!(report.gross_by_method.is_empty());
        assert!(report.distribution.is_empty());
        // Cash shows 0 − outflows even though nothing was sold.
        assert_eq!(
            report.closing_balances[&PaymentMethod::Cash].cents(),
            -80_000
        );
        assert_eq!(report.closing_balances.len(), 1);
    }

    #[test]
    fn daily_zero_total_day_has_no_distribution() {
        // A fully discounted sale: the day's total is zero, so percentages
        // are undefined and must not be emitted.
        let sales = vec![fact("A", 1_000, 1, 1_000, PaymentMethod::Cash)];

        let report = daily_report(date(2026, 8, 4), &sales, &[]);

        assert!(report.distribution.is_empty());
        assert_eq!(report.gross_by_method[&PaymentMethod::Cash].cents(), 0);
    }

    #[test]
    fn month_range_handles_leap_years() {
        assert_eq!(
            month_range(2024, 2).unwrap(),
            (date(2024, 2, 1), date(2024, 2, 29))
        );
        assert_eq!(
            month_range(2023, 2).unwrap(),
            (date(2023, 2, 1), date(2023, 2, 28))
        );
        assert_eq!(
            month_range(2026, 12).unwrap(),
            (date(2026, 12, 1), date(2026, 12, 31))
        );
        assert_eq!(
            month_range(2026, 4).unwrap(),
            (date(2026, 4, 1), date(2026, 4, 30))
        );
    }

    #[test]
    fn month_range_rejects_bad_month() {
        assert!(month_range(2026, 0).is_err());
        assert!(month_range(2026, 13).is_err());
    }

    #[test]
    fn monthly_report_totals_and_profit() {
        let shampoo = product("Shampoo", 2_000, 5_000);
        let pomade = product("Pomade", 1_000, 2_500);
        let products = vec![shampoo.clone(), pomade.clone()];

        let sales = vec![
            MonthlySaleRow {
                product_id: shampoo.id.clone(),
                quantity: 4,
                discount: Money::from_cents(1_000),
            },
            MonthlySaleRow {
                product_id: pomade.id.clone(),
                quantity: 2,
                discount: Money::zero(),
            },
        ];

        let report =
            monthly_report(2026, 8, &products, &sales, Money::from_cents(3_000)).unwrap();

        // Shampoo: net = 4×50 − 10 = 190; margin = 4×(50−20) = 120.
        let line = &report.products[0];
        assert_eq!(line.units_sold, 4);
        assert_eq!(line.net_revenue.cents(), 19_000);
        assert_eq!(line.gross_margin.cents(), 12_000);

        // Pomade: net = 2×25 = 50; margin = 2×(25−10) = 30.
        let line = &report.products[1];
        assert_eq!(line.net_revenue.cents(), 5_000);
        assert_eq!(line.gross_margin.cents(), 3_000);

        assert_eq!(report.total_net_revenue.cents(), 24_000);
        assert_eq!(report.total_gross_margin.cents(), 15_000);
        assert_eq!(report.total_outflows.cents(), 3_000);
        // cash total = 240 − 30 = 210; profit = 240 − 150 − 30 = 60.
        assert_eq!(report.cash_total.cents(), 21_000);
        assert_eq!(report.profit.cents(), 6_000);
    }

    #[test]
    fn monthly_margin_ignores_discount() {
        let p = product("Shampoo", 2_000, 5_000);
        let sales = vec![MonthlySaleRow {
            product_id: p.id.clone(),
            quantity: 1,
            discount: Money::from_cents(4_000),
        }];

        let report = monthly_report(2026, 8, &[p], &sales, Money::zero()).unwrap();

        // Net carries the discount, margin does not.
        assert_eq!(report.products[0].net_revenue.cents(), 1_000);
        assert_eq!(report.products[0].gross_margin.cents(), 3_000);
    }

    #[test]
    fn monthly_report_lists_unsold_products() {
        let sold = product("Shampoo", 2_000, 5_000);
        let unsold = product("Beard Oil", 1_500, 4_000);
        let sales = vec![MonthlySaleRow {
            product_id: sold.id.clone(),
            quantity: 1,
            discount: Money::zero(),
        }];

        let report =
            monthly_report(2026, 8, &[sold, unsold], &sales, Money::zero()).unwrap();

        assert_eq!(report.products.len(), 2);
        let line = &report.products[1];
        assert_eq!(line.name, "Beard Oil");
        assert_eq!(line.units_sold, 0);
        assert_eq!(line.net_revenue.cents(), 0);
        assert_eq!(line.gross_margin.cents(), 0);
    }
}
