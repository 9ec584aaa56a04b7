//! Cash-flow generation for purchase-hold-sell scenarios.

use rust_decimal::Decimal;

use yieldgrid_core::{BondTerms, CashFlow, CashFlowSchedule};

use crate::cost::{monthly_coupon, net_monthly_coupon, total_cost};
use crate::error::{AnalyticsError, AnalyticsResult};

/// Generates the signed cash-flow stream for an exit scenario.
pub struct CashFlowGenerator;

impl CashFlowGenerator {
    /// Builds the cash flows for holding the bond `exit_year` years and
    /// selling at `sale_price_pct` percent of face value.
    ///
    /// The schedule has exactly `1 + exit_year × 12` entries: the
    /// acquisition outlay at the purchase date, then one net coupon per
    /// month, with the final month's coupon and the sale proceeds paid
    /// together as a single entry. Coupon dates advance by calendar
    /// months from the purchase date, clamping to month ends.
    ///
    /// The output is date-ordered by construction; consumers that cannot
    /// rely on their input being a fresh schedule should still sort
    /// defensively.
    ///
    /// # Errors
    ///
    /// - `ScenarioOutOfRange` when `exit_year` is not in
    ///   `1..=terms.max_exit_years()`
    /// - `InvalidInput` when `sale_price_pct <= 0` or a term violates its
    ///   range constraint
    ///
    /// # Example
    ///
    /// ```rust
    /// use yieldgrid_core::prelude::*;
    /// use yieldgrid_analytics::cashflows::CashFlowGenerator;
    /// use rust_decimal_macros::dec;
    ///
    /// let terms = BondTerms::builder()
    ///     .face_value(dec!(100000))
    ///     .coupon_rate(dec!(11.9))
    ///     .purchase_price(dec!(102.5))
    ///     .purchase_date(Date::from_ymd(2025, 10, 3).unwrap())
    ///     .maturity_date(Date::from_ymd(2030, 12, 31).unwrap())
    ///     .tds_rate(dec!(10))
    ///     .build()
    ///     .unwrap();
    ///
    /// let flows = CashFlowGenerator::exit_scenario(&terms, 5, dec!(100)).unwrap();
    /// assert_eq!(flows.len(), 61);
    /// ```
    pub fn exit_scenario(
        terms: &BondTerms,
        exit_year: u32,
        sale_price_pct: Decimal,
    ) -> AnalyticsResult<CashFlowSchedule> {
        let max_years = terms.max_exit_years();
        if exit_year < 1 || exit_year > max_years {
            return Err(AnalyticsError::ScenarioOutOfRange {
                exit_year,
                max_years,
            });
        }
        if sale_price_pct <= Decimal::ZERO {
            return Err(AnalyticsError::invalid_input(format!(
                "sale price must be positive, got {sale_price_pct}"
            )));
        }

        let outlay = total_cost(
            terms.face_value(),
            terms.purchase_price(),
            terms.accrued_interest(),
            terms.brokerage(),
        )?;
        let net_coupon = net_monthly_coupon(
            monthly_coupon(terms.face_value(), terms.coupon_rate())?,
            terms.tds_rate(),
        )?;
        let proceeds = terms.face_value() * sale_price_pct / Decimal::ONE_HUNDRED;

        let months = exit_year * 12;
        let mut schedule = CashFlowSchedule::with_capacity(months as usize + 1);
        schedule.push(CashFlow::purchase(terms.purchase_date(), outlay));

        for month in 1..=months {
            let date = terms.purchase_date().add_months(month as i32)?;
            if month == months {
                schedule.push(CashFlow::coupon_and_sale(date, net_coupon, proceeds));
            } else {
                schedule.push(CashFlow::coupon(date, net_coupon));
            }
        }

        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use yieldgrid_core::types::CashFlowType;
    use yieldgrid_core::Date;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn terms() -> BondTerms {
        BondTerms::builder()
            .face_value(dec!(100000))
            .coupon_rate(dec!(11.9))
            .purchase_price(dec!(102.5))
            .accrued_interest(dec!(358.63))
            .purchase_date(date(2025, 10, 3))
            .maturity_date(date(2030, 12, 31))
            .tds_rate(dec!(10))
            .build()
            .unwrap()
    }

    #[test]
    fn test_entry_count_is_months_plus_one() {
        for exit_year in 1..=5 {
            let flows = CashFlowGenerator::exit_scenario(&terms(), exit_year, dec!(100)).unwrap();
            assert_eq!(flows.len() as u32, exit_year * 12 + 1);
        }
    }

    #[test]
    fn test_first_flow_is_full_outlay() {
        let flows = CashFlowGenerator::exit_scenario(&terms(), 1, dec!(100)).unwrap();
        let first = flows.first().unwrap();

        assert_eq!(first.date(), date(2025, 10, 3));
        assert_eq!(first.amount(), dec!(-102858.63));
        assert_eq!(first.cf_type(), CashFlowType::Purchase);
    }

    #[test]
    fn test_monthly_coupons_and_final_sale() {
        let flows = CashFlowGenerator::exit_scenario(&terms(), 2, dec!(97.5)).unwrap();
        let flows = flows.as_slice();

        // Intermediate months carry the net coupon only
        let net = dec!(892.50);
        for cf in &flows[1..flows.len() - 1] {
            assert_eq!(cf.amount().round_dp(2), net);
            assert_eq!(cf.cf_type(), CashFlowType::Coupon);
        }

        // Final month folds sale proceeds into the coupon entry
        let last = flows.last().unwrap();
        assert_eq!(last.date(), date(2027, 10, 3));
        assert_eq!(last.amount().round_dp(2), dec!(98392.50));
        assert_eq!(last.cf_type(), CashFlowType::CouponAndSale);
    }

    #[test]
    fn test_dates_advance_by_calendar_months() {
        let flows = CashFlowGenerator::exit_scenario(&terms(), 1, dec!(100)).unwrap();
        let flows = flows.as_slice();

        assert_eq!(flows[1].date(), date(2025, 11, 3));
        assert_eq!(flows[2].date(), date(2025, 12, 3));
        assert_eq!(flows[12].date(), date(2026, 10, 3));
    }

    #[test]
    fn test_month_end_clamping_does_not_stick() {
        // A purchase on Jan 31 pays Feb 28 but returns to the 31st in March
        let terms = BondTerms::builder()
            .face_value(dec!(100000))
            .coupon_rate(dec!(12))
            .purchase_price(dec!(100))
            .purchase_date(date(2025, 1, 31))
            .maturity_date(date(2027, 1, 31))
            .build()
            .unwrap();

        let flows = CashFlowGenerator::exit_scenario(&terms, 1, dec!(100)).unwrap();
        let flows = flows.as_slice();

        assert_eq!(flows[1].date(), date(2025, 2, 28));
        assert_eq!(flows[2].date(), date(2025, 3, 31));
    }

    #[test]
    fn test_exit_year_out_of_range() {
        let result = CashFlowGenerator::exit_scenario(&terms(), 0, dec!(100));
        assert!(matches!(
            result,
            Err(AnalyticsError::ScenarioOutOfRange { .. })
        ));

        // Maturity 2030 from purchase 2025 caps exits at 5 years
        let result = CashFlowGenerator::exit_scenario(&terms(), 6, dec!(100));
        assert!(matches!(
            result,
            Err(AnalyticsError::ScenarioOutOfRange {
                exit_year: 6,
                max_years: 5
            })
        ));
    }

    #[test]
    fn test_sale_price_must_be_positive() {
        assert!(matches!(
            CashFlowGenerator::exit_scenario(&terms(), 3, dec!(0)),
            Err(AnalyticsError::InvalidInput(_))
        ));
        assert!(matches!(
            CashFlowGenerator::exit_scenario(&terms(), 3, dec!(-10)),
            Err(AnalyticsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_output_is_date_ordered() {
        let flows = CashFlowGenerator::exit_scenario(&terms(), 5, dec!(100)).unwrap();
        let mut sorted = flows.clone();
        sorted.sort_by_date();
        assert_eq!(flows, sorted);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn schedule_length_is_invariant(exit_year in 1u32..=5, price in 1u32..=200) {
                let flows = CashFlowGenerator::exit_scenario(
                    &terms(),
                    exit_year,
                    Decimal::from(price),
                )
                .unwrap();

                prop_assert_eq!(flows.len() as u32, exit_year * 12 + 1);

                // Exactly one outflow, the rest inflows
                let outflows = flows.iter().filter(|cf| cf.is_outflow()).count();
                prop_assert_eq!(outflows, 1);
            }
        }
    }
}
