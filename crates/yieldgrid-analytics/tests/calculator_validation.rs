//! End-to-end validation of the exit-scenario calculator.
//!
//! Reference scenario: 11.9% monthly-coupon bond, face 100,000, bought at
//! 102.5% plus 358.63 accrued on 2025-10-03, maturing 2030-12-31, 10% TDS.
//!
//! All rates here are computed on a fixed 365.25-day year basis. That
//! basis is the calculator's documented convention; asserting against
//! rates produced under Act/365 or 30/360 day counts would fail.

use rust_decimal_macros::dec;

use yieldgrid_analytics::prelude::*;
use yieldgrid_core::prelude::*;

fn reference_terms() -> BondTerms {
    BondTerms::builder()
        .face_value(dec!(100000))
        .coupon_rate(dec!(11.9))
        .purchase_price(dec!(102.5))
        .accrued_interest(dec!(358.63))
        .brokerage(dec!(0))
        .purchase_date(Date::from_ymd(2025, 10, 3).unwrap())
        .maturity_date(Date::from_ymd(2030, 12, 31).unwrap())
        .tds_rate(dec!(10))
        .build()
        .unwrap()
}

#[test]
fn cost_summary_matches_reference_figures() {
    let summary = CostSummary::for_terms(&reference_terms()).unwrap();

    assert_eq!(summary.total_cost, dec!(102858.63));
    assert_eq!(summary.monthly_coupon.round_dp(2), dec!(991.67));
    assert_eq!(summary.net_monthly_coupon.round_dp(2), dec!(892.50));
}

#[test]
fn five_year_exit_produces_61_flows() {
    let flows = CashFlowGenerator::exit_scenario(&reference_terms(), 5, dec!(100)).unwrap();

    assert_eq!(flows.len(), 61);
    assert!(flows.first().unwrap().is_outflow());
    assert!(flows.iter().skip(1).all(CashFlow::is_inflow));

    // Net coupons plus par sale proceeds on the final date
    let last = flows.last().unwrap();
    assert_eq!(last.amount().round_dp(2), dec!(100892.50));
    assert_eq!(last.date(), Date::from_ymd(2030, 10, 3).unwrap());
}

#[test]
fn five_year_exit_xirr_is_a_sane_bond_return() {
    let flows = CashFlowGenerator::exit_scenario(&reference_terms(), 5, dec!(100)).unwrap();
    let result = XirrSolver::new().solve(&flows).unwrap();

    // ~10.4% coupon yield on cost, eroded by the 2.8% premium given up
    // at the par sale; anything outside (0%, 30%) would be wrong
    assert!(result.rate.is_finite());
    assert!(result.rate > 0.0 && result.rate < 0.30);
    assert!(result.residual.abs() < 1e-6);
    assert!(result.iterations <= 100);
}

#[test]
fn builder_output_round_trips_through_the_solver() {
    let terms = reference_terms();

    for exit_year in 1..=terms.max_exit_years() {
        for price in [dec!(90), dec!(100), dec!(110)] {
            let flows = CashFlowGenerator::exit_scenario(&terms, exit_year, price).unwrap();
            let rate = xirr(&flows).expect("reasonable bond scenario must converge");
            assert!(rate > -0.99 && rate < 10.0);
        }
    }
}

#[test]
fn matrix_covers_the_full_cross_product() {
    let matrix = ScenarioMatrixBuilder::new().build(
        &reference_terms(),
        &[1, 2, 3, 4, 5],
        &[dec!(95), dec!(97.5), dec!(100), dec!(102.5), dec!(105)],
    );

    assert_eq!(matrix.cell_count(), 25);
    assert!(matrix.diagnostics().is_empty());

    // Every cell of a sane bond converges
    for row in matrix.rows() {
        for cell in &row.cells {
            let rate = cell.rate.expect("cell should have converged");
            assert!(rate > -0.99 && rate < 10.0);
        }
    }
}

#[test]
fn one_bad_cell_never_poisons_the_matrix() {
    let matrix = ScenarioMatrixBuilder::new().build(
        &reference_terms(),
        &[1, 5, 40],
        &[dec!(95), dec!(100)],
    );

    assert_eq!(matrix.cell_count(), 6);
    assert_eq!(matrix.diagnostics().len(), 2);

    for year in [1, 5] {
        for price in [dec!(95), dec!(100)] {
            assert!(matrix.rate(year, price).is_some());
        }
    }
    assert!(matrix.rate(40, dec!(95)).is_none());
    assert!(matrix.rate(40, dec!(100)).is_none());

    for diag in matrix.diagnostics() {
        assert_eq!(diag.exit_year, 40);
        assert!(diag.reason.contains("exit year"));
    }
}

#[test]
fn matrix_rates_move_with_sale_price_and_against_premium_decay() {
    let matrix = ScenarioMatrixBuilder::new().build(
        &reference_terms(),
        &[1, 5],
        &[dec!(95), dec!(105)],
    );

    // Within a year, a higher sale price always pays more
    for row in matrix.rows() {
        let low = row.cells[0].rate.unwrap();
        let high = row.cells[1].rate.unwrap();
        assert!(high > low);
    }

    // A quick discounted sale hurts far more over one year than five
    let quick_loss = matrix.rate(1, dec!(95)).unwrap();
    let slow_loss = matrix.rate(5, dec!(95)).unwrap();
    assert!(slow_loss > quick_loss);
}

#[test]
fn presentation_payload_serializes() {
    let terms = reference_terms();
    let summary = CostSummary::for_terms(&terms).unwrap();
    let matrix = ScenarioMatrixBuilder::new().build(&terms, &[1, 5], &[dec!(100)]);

    let payload = serde_json::json!({
        "summary": summary,
        "matrix": matrix,
    });
    let text = payload.to_string();
    assert!(text.contains("total_cost"));
    assert!(text.contains("exit_year"));
}
