//! Bond purchase terms.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

use super::Date;

/// Immutable purchase terms for a single bond calculation.
///
/// Percentages are quoted the way bond tickets quote them: `coupon_rate`
/// and `tds_rate` are annual percentages, `purchase_price` is a percentage
/// of face value. Currency amounts (`face_value`, `accrued_interest`,
/// `brokerage`) are absolute.
///
/// Terms are constructed through [`BondTermsBuilder`], which validates all
/// range and ordering constraints, so a `BondTerms` value is always
/// internally consistent.
///
/// # Example
///
/// ```rust
/// use yieldgrid_core::types::{BondTerms, Date};
/// use rust_decimal_macros::dec;
///
/// let terms = BondTerms::builder()
///     .face_value(dec!(100000))
///     .coupon_rate(dec!(11.9))
///     .purchase_price(dec!(102.5))
///     .accrued_interest(dec!(358.63))
///     .purchase_date(Date::from_ymd(2025, 10, 3).unwrap())
///     .maturity_date(Date::from_ymd(2030, 12, 31).unwrap())
///     .tds_rate(dec!(10))
///     .build()
///     .unwrap();
///
/// assert_eq!(terms.max_exit_years(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Nominal principal amount, > 0
    face_value: Decimal,
    /// Annual coupon rate in percent, >= 0
    coupon_rate: Decimal,
    /// Purchase price as a percentage of face value, > 0
    purchase_price: Decimal,
    /// Accrued interest paid to the seller at purchase, >= 0
    accrued_interest: Decimal,
    /// Brokerage charged on the purchase, >= 0
    brokerage: Decimal,
    /// Settlement date of the purchase
    purchase_date: Date,
    /// Maturity date, strictly after the purchase date
    maturity_date: Date,
    /// Tax withheld at source on each coupon, in percent, 0-100
    tds_rate: Decimal,
}

impl BondTerms {
    /// Returns a builder for constructing validated terms.
    #[must_use]
    pub fn builder() -> BondTermsBuilder {
        BondTermsBuilder::default()
    }

    /// Returns the face value.
    #[must_use]
    pub fn face_value(&self) -> Decimal {
        self.face_value
    }

    /// Returns the annual coupon rate in percent.
    #[must_use]
    pub fn coupon_rate(&self) -> Decimal {
        self.coupon_rate
    }

    /// Returns the purchase price as a percentage of face value.
    #[must_use]
    pub fn purchase_price(&self) -> Decimal {
        self.purchase_price
    }

    /// Returns the accrued interest paid at purchase.
    #[must_use]
    pub fn accrued_interest(&self) -> Decimal {
        self.accrued_interest
    }

    /// Returns the brokerage charged on the purchase.
    #[must_use]
    pub fn brokerage(&self) -> Decimal {
        self.brokerage
    }

    /// Returns the purchase date.
    #[must_use]
    pub fn purchase_date(&self) -> Date {
        self.purchase_date
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Returns the TDS rate in percent.
    #[must_use]
    pub fn tds_rate(&self) -> Decimal {
        self.tds_rate
    }

    /// Returns the maximum achievable holding period in whole years.
    ///
    /// An exit scenario's year must lie in `1..=max_exit_years()`.
    #[must_use]
    pub fn max_exit_years(&self) -> u32 {
        let years = self.maturity_date.year() - self.purchase_date.year();
        years.max(0) as u32
    }

    /// Re-checks all range and ordering constraints.
    ///
    /// Terms built through [`BondTermsBuilder`] always pass; this exists so
    /// consumers handed a deserialized value can verify it defensively.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTerms` naming the first violated
    /// constraint.
    pub fn validate(&self) -> CoreResult<()> {
        if self.face_value <= Decimal::ZERO {
            return Err(CoreError::invalid_terms(format!(
                "face value must be positive, got {}",
                self.face_value
            )));
        }
        if self.coupon_rate < Decimal::ZERO {
            return Err(CoreError::invalid_terms(format!(
                "coupon rate must not be negative, got {}",
                self.coupon_rate
            )));
        }
        if self.purchase_price <= Decimal::ZERO {
            return Err(CoreError::invalid_terms(format!(
                "purchase price must be positive, got {}",
                self.purchase_price
            )));
        }
        if self.accrued_interest < Decimal::ZERO {
            return Err(CoreError::invalid_terms(format!(
                "accrued interest must not be negative, got {}",
                self.accrued_interest
            )));
        }
        if self.brokerage < Decimal::ZERO {
            return Err(CoreError::invalid_terms(format!(
                "brokerage must not be negative, got {}",
                self.brokerage
            )));
        }
        if self.tds_rate < Decimal::ZERO || self.tds_rate > Decimal::ONE_HUNDRED {
            return Err(CoreError::invalid_terms(format!(
                "TDS rate must be between 0 and 100, got {}",
                self.tds_rate
            )));
        }
        if self.maturity_date <= self.purchase_date {
            return Err(CoreError::invalid_terms(format!(
                "maturity {} must be after purchase {}",
                self.maturity_date, self.purchase_date
            )));
        }
        Ok(())
    }
}

/// Builder for [`BondTerms`].
///
/// `accrued_interest`, `brokerage`, and `tds_rate` default to zero; all
/// other fields are required. [`build`](Self::build) validates the
/// assembled terms.
#[derive(Debug, Clone, Default)]
pub struct BondTermsBuilder {
    face_value: Option<Decimal>,
    coupon_rate: Option<Decimal>,
    purchase_price: Option<Decimal>,
    accrued_interest: Decimal,
    brokerage: Decimal,
    purchase_date: Option<Date>,
    maturity_date: Option<Date>,
    tds_rate: Decimal,
}

impl BondTermsBuilder {
    /// Sets the face value.
    #[must_use]
    pub fn face_value(mut self, value: Decimal) -> Self {
        self.face_value = Some(value);
        self
    }

    /// Sets the annual coupon rate in percent.
    #[must_use]
    pub fn coupon_rate(mut self, rate: Decimal) -> Self {
        self.coupon_rate = Some(rate);
        self
    }

    /// Sets the purchase price as a percentage of face value.
    #[must_use]
    pub fn purchase_price(mut self, price: Decimal) -> Self {
        self.purchase_price = Some(price);
        self
    }

    /// Sets the accrued interest paid at purchase.
    #[must_use]
    pub fn accrued_interest(mut self, amount: Decimal) -> Self {
        self.accrued_interest = amount;
        self
    }

    /// Sets the brokerage charged on the purchase.
    #[must_use]
    pub fn brokerage(mut self, amount: Decimal) -> Self {
        self.brokerage = amount;
        self
    }

    /// Sets the purchase date.
    #[must_use]
    pub fn purchase_date(mut self, date: Date) -> Self {
        self.purchase_date = Some(date);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity_date(mut self, date: Date) -> Self {
        self.maturity_date = Some(date);
        self
    }

    /// Sets the TDS rate in percent.
    #[must_use]
    pub fn tds_rate(mut self, rate: Decimal) -> Self {
        self.tds_rate = rate;
        self
    }

    /// Builds the terms, validating every constraint.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTerms` if a required field is missing or
    /// a constraint is violated.
    pub fn build(self) -> CoreResult<BondTerms> {
        let terms = BondTerms {
            face_value: self
                .face_value
                .ok_or_else(|| CoreError::invalid_terms("face value is required"))?,
            coupon_rate: self
                .coupon_rate
                .ok_or_else(|| CoreError::invalid_terms("coupon rate is required"))?,
            purchase_price: self
                .purchase_price
                .ok_or_else(|| CoreError::invalid_terms("purchase price is required"))?,
            accrued_interest: self.accrued_interest,
            brokerage: self.brokerage,
            purchase_date: self
                .purchase_date
                .ok_or_else(|| CoreError::invalid_terms("purchase date is required"))?,
            maturity_date: self
                .maturity_date
                .ok_or_else(|| CoreError::invalid_terms("maturity date is required"))?,
            tds_rate: self.tds_rate,
        };
        terms.validate()?;
        Ok(terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn valid_builder() -> BondTermsBuilder {
        BondTerms::builder()
            .face_value(dec!(100000))
            .coupon_rate(dec!(11.9))
            .purchase_price(dec!(102.5))
            .accrued_interest(dec!(358.63))
            .purchase_date(date(2025, 10, 3))
            .maturity_date(date(2030, 12, 31))
            .tds_rate(dec!(10))
    }

    #[test]
    fn test_build_valid_terms() {
        let terms = valid_builder().build().unwrap();
        assert_eq!(terms.face_value(), dec!(100000));
        assert_eq!(terms.brokerage(), Decimal::ZERO);
        assert_eq!(terms.max_exit_years(), 5);
        assert!(terms.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_face_value() {
        assert!(valid_builder().face_value(Decimal::ZERO).build().is_err());
        assert!(valid_builder().face_value(dec!(-1)).build().is_err());
    }

    #[test]
    fn test_rejects_negative_coupon_rate() {
        assert!(valid_builder().coupon_rate(dec!(-0.1)).build().is_err());
    }

    #[test]
    fn test_rejects_non_positive_purchase_price() {
        assert!(valid_builder().purchase_price(Decimal::ZERO).build().is_err());
    }

    #[test]
    fn test_rejects_negative_accrued_and_brokerage() {
        assert!(valid_builder().accrued_interest(dec!(-1)).build().is_err());
        assert!(valid_builder().brokerage(dec!(-1)).build().is_err());
    }

    #[test]
    fn test_rejects_tds_outside_range() {
        assert!(valid_builder().tds_rate(dec!(-1)).build().is_err());
        assert!(valid_builder().tds_rate(dec!(100.01)).build().is_err());
        assert!(valid_builder().tds_rate(dec!(100)).build().is_ok());
        assert!(valid_builder().tds_rate(Decimal::ZERO).build().is_ok());
    }

    #[test]
    fn test_rejects_maturity_not_after_purchase() {
        let result = valid_builder().maturity_date(date(2025, 10, 3)).build();
        assert!(result.is_err());

        let result = valid_builder().maturity_date(date(2024, 1, 1)).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_required_field() {
        let result = BondTerms::builder()
            .face_value(dec!(100000))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_max_exit_years_same_calendar_year() {
        // Maturity in the same calendar year leaves no whole-year exit
        let terms = valid_builder()
            .purchase_date(date(2025, 1, 15))
            .maturity_date(date(2025, 12, 31))
            .build()
            .unwrap();
        assert_eq!(terms.max_exit_years(), 0);
    }
}
