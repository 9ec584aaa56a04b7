//! Acquisition cost and coupon calculations.
//!
//! Standalone, stateless functions: each validates its own inputs and
//! returns immediately. They are safe to call concurrently from multiple
//! scenario evaluations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use yieldgrid_core::BondTerms;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Months per coupon year; coupons are strictly monthly.
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Total acquisition cost of the bond.
///
/// `face_value × purchase_price_pct / 100 + accrued_interest + brokerage`
///
/// # Errors
///
/// `InvalidInput` when `face_value <= 0`, `purchase_price_pct <= 0`,
/// `accrued_interest < 0`, or `brokerage < 0`.
///
/// # Example
///
/// ```rust
/// use yieldgrid_analytics::cost::total_cost;
/// use rust_decimal_macros::dec;
///
/// let cost = total_cost(dec!(100000), dec!(102.5), dec!(358.63), dec!(0)).unwrap();
/// assert_eq!(cost, dec!(102858.63));
/// ```
pub fn total_cost(
    face_value: Decimal,
    purchase_price_pct: Decimal,
    accrued_interest: Decimal,
    brokerage: Decimal,
) -> AnalyticsResult<Decimal> {
    if face_value <= Decimal::ZERO {
        return Err(AnalyticsError::invalid_input(format!(
            "face value must be positive, got {face_value}"
        )));
    }
    if purchase_price_pct <= Decimal::ZERO {
        return Err(AnalyticsError::invalid_input(format!(
            "purchase price must be positive, got {purchase_price_pct}"
        )));
    }
    if accrued_interest < Decimal::ZERO {
        return Err(AnalyticsError::invalid_input(format!(
            "accrued interest must not be negative, got {accrued_interest}"
        )));
    }
    if brokerage < Decimal::ZERO {
        return Err(AnalyticsError::invalid_input(format!(
            "brokerage must not be negative, got {brokerage}"
        )));
    }

    Ok(face_value * purchase_price_pct / Decimal::ONE_HUNDRED + accrued_interest + brokerage)
}

/// Gross monthly coupon amount.
///
/// `face_value × coupon_rate_pct / 100 / 12`
///
/// # Errors
///
/// `InvalidInput` when `face_value <= 0` or `coupon_rate_pct < 0`.
pub fn monthly_coupon(face_value: Decimal, coupon_rate_pct: Decimal) -> AnalyticsResult<Decimal> {
    if face_value <= Decimal::ZERO {
        return Err(AnalyticsError::invalid_input(format!(
            "face value must be positive, got {face_value}"
        )));
    }
    if coupon_rate_pct < Decimal::ZERO {
        return Err(AnalyticsError::invalid_input(format!(
            "coupon rate must not be negative, got {coupon_rate_pct}"
        )));
    }

    Ok(face_value * coupon_rate_pct / Decimal::ONE_HUNDRED / MONTHS_PER_YEAR)
}

/// Monthly coupon net of tax withheld at source.
///
/// `monthly_coupon × (1 − tds_rate_pct / 100)`
///
/// # Errors
///
/// `InvalidInput` when `monthly_coupon < 0` or `tds_rate_pct` is outside
/// `[0, 100]`.
pub fn net_monthly_coupon(
    monthly_coupon: Decimal,
    tds_rate_pct: Decimal,
) -> AnalyticsResult<Decimal> {
    if monthly_coupon < Decimal::ZERO {
        return Err(AnalyticsError::invalid_input(format!(
            "monthly coupon must not be negative, got {monthly_coupon}"
        )));
    }
    if tds_rate_pct < Decimal::ZERO || tds_rate_pct > Decimal::ONE_HUNDRED {
        return Err(AnalyticsError::invalid_input(format!(
            "TDS rate must be between 0 and 100, got {tds_rate_pct}"
        )));
    }

    Ok(monthly_coupon * (Decimal::ONE - tds_rate_pct / Decimal::ONE_HUNDRED))
}

/// Headline cost and coupon figures for a bond purchase.
///
/// The presentation layer shows these alongside the scenario matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Total acquisition cost, fully sunk at purchase.
    pub total_cost: Decimal,
    /// Gross monthly coupon.
    pub monthly_coupon: Decimal,
    /// Monthly coupon net of TDS.
    pub net_monthly_coupon: Decimal,
    /// Net coupon income over a full year.
    pub annual_net_income: Decimal,
}

impl CostSummary {
    /// Computes the summary for a set of bond terms.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if any term violates its range constraint; terms
    /// built through the validating builder always pass.
    pub fn for_terms(terms: &BondTerms) -> AnalyticsResult<Self> {
        let total_cost = total_cost(
            terms.face_value(),
            terms.purchase_price(),
            terms.accrued_interest(),
            terms.brokerage(),
        )?;
        let gross = monthly_coupon(terms.face_value(), terms.coupon_rate())?;
        let net = net_monthly_coupon(gross, terms.tds_rate())?;

        Ok(Self {
            total_cost,
            monthly_coupon: gross,
            net_monthly_coupon: net,
            annual_net_income: net * MONTHS_PER_YEAR,
        })
    }
}
