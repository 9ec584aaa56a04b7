//! Cash flow types for exit-scenario analytics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// Type of cash flow in a bond purchase-and-exit scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowType {
    /// Initial acquisition outlay (price, accrued interest, brokerage)
    Purchase,
    /// Regular net monthly coupon
    Coupon,
    /// Final month: net coupon paid together with sale proceeds
    CouponAndSale,
}

impl fmt::Display for CashFlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowType::Purchase => "Purchase",
            CashFlowType::Coupon => "Coupon",
            CashFlowType::CouponAndSale => "Coupon+Sale",
        };
        write!(f, "{name}")
    }
}

/// A dated, signed cash flow.
///
/// Sign convention: outflows (the acquisition) are negative, inflows
/// (coupons and sale proceeds) are positive.
///
/// # Example
///
/// ```rust
/// use yieldgrid_core::types::{CashFlow, Date};
/// use rust_decimal_macros::dec;
///
/// let cf = CashFlow::coupon(Date::from_ymd(2025, 11, 3).unwrap(), dec!(892.50));
/// assert!(cf.is_inflow());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date
    date: Date,
    /// Signed amount in currency units
    amount: Decimal,
    /// Type of cash flow
    cf_type: CashFlowType,
}

impl CashFlow {
    /// Creates a new cash flow with an explicit signed amount.
    #[must_use]
    pub fn new(date: Date, amount: Decimal, cf_type: CashFlowType) -> Self {
        Self {
            date,
            amount,
            cf_type,
        }
    }

    /// Creates the acquisition cash flow from the (positive) total cost.
    ///
    /// The stored amount is negated: the full cost is sunk at purchase.
    #[must_use]
    pub fn purchase(date: Date, total_cost: Decimal) -> Self {
        Self::new(date, -total_cost, CashFlowType::Purchase)
    }

    /// Creates a net monthly coupon cash flow.
    #[must_use]
    pub fn coupon(date: Date, amount: Decimal) -> Self {
        Self::new(date, amount, CashFlowType::Coupon)
    }

    /// Creates the final cash flow: net coupon plus sale proceeds,
    /// paid together as a single entry.
    #[must_use]
    pub fn coupon_and_sale(date: Date, coupon: Decimal, proceeds: Decimal) -> Self {
        Self::new(date, coupon + proceeds, CashFlowType::CouponAndSale)
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the signed cash flow amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the cash flow type.
    #[must_use]
    pub fn cf_type(&self) -> CashFlowType {
        self.cf_type
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_inflow(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Returns true if the amount is strictly negative.
    #[must_use]
    pub fn is_outflow(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.date, self.amount, self.cf_type)
    }
}

/// An ordered schedule of cash flows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSchedule {
    /// Ordered list of cash flows
    cash_flows: Vec<CashFlow>,
}

impl CashFlowSchedule {
    /// Creates a new empty cash flow schedule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cash_flows: Vec::new(),
        }
    }

    /// Creates a schedule with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cash_flows: Vec::with_capacity(capacity),
        }
    }

    /// Adds a cash flow to the schedule.
    pub fn push(&mut self, cf: CashFlow) {
        self.cash_flows.push(cf);
    }

    /// Returns the cash flows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.cash_flows
    }

    /// Returns the number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cash_flows.len()
    }

    /// Returns true if there are no cash flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cash_flows.is_empty()
    }

    /// Returns an iterator over the cash flows.
    pub fn iter(&self) -> impl Iterator<Item = &CashFlow> {
        self.cash_flows.iter()
    }

    /// Returns the first cash flow, if any.
    #[must_use]
    pub fn first(&self) -> Option<&CashFlow> {
        self.cash_flows.first()
    }

    /// Returns the last cash flow, if any.
    #[must_use]
    pub fn last(&self) -> Option<&CashFlow> {
        self.cash_flows.last()
    }

    /// Returns the sum of all signed amounts.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cash_flows.iter().map(|cf| cf.amount).sum()
    }

    /// Sorts cash flows ascending by date.
    pub fn sort_by_date(&mut self) {
        self.cash_flows.sort_by_key(|cf| cf.date);
    }
}

impl IntoIterator for CashFlowSchedule {
    type Item = CashFlow;
    type IntoIter = std::vec::IntoIter<CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.into_iter()
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.iter()
    }
}

impl FromIterator<CashFlow> for CashFlowSchedule {
    fn from_iter<I: IntoIterator<Item = CashFlow>>(iter: I) -> Self {
        Self {
            cash_flows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_purchase_is_negated() {
        let cf = CashFlow::purchase(date(2025, 10, 3), dec!(102858.63));
        assert_eq!(cf.amount(), dec!(-102858.63));
        assert!(cf.is_outflow());
    }

    #[test]
    fn test_coupon_and_sale_combines_amounts() {
        let cf = CashFlow::coupon_and_sale(date(2030, 10, 3), dec!(892.50), dec!(100000));
        assert_eq!(cf.amount(), dec!(100892.50));
        assert_eq!(cf.cf_type(), CashFlowType::CouponAndSale);
    }

    #[test]
    fn test_schedule_total_and_sort() {
        let mut schedule = CashFlowSchedule::new();
        schedule.push(CashFlow::coupon(date(2025, 12, 3), dec!(892.50)));
        schedule.push(CashFlow::purchase(date(2025, 10, 3), dec!(102858.63)));
        schedule.push(CashFlow::coupon(date(2025, 11, 3), dec!(892.50)));

        schedule.sort_by_date();

        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.first().unwrap().date(), date(2025, 10, 3));
        assert_eq!(schedule.total(), dec!(-101073.63));
    }

    #[test]
    fn test_serde_round_trip() {
        let cf = CashFlow::coupon(date(2025, 11, 3), dec!(892.50));
        let json = serde_json::to_string(&cf).unwrap();
        let back: CashFlow = serde_json::from_str(&json).unwrap();
        assert_eq!(cf, back);
    }
}
