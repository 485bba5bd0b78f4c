//! End-to-end valuation tests across the schedule, curve, pricing, and
//! solver layers.

use approx::assert_relative_eq;
use proptest::prelude::*;
use rust_decimal_macros::dec;

use tenor_analytics::prelude::*;
use tenor_core::types::{BondTerms, CashFlowKind, Date};
use tenor_curves::{CurveError, ZeroCurve};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Flat curve at `rate_pct` percent with pillars at 1y and 10y.
fn flat_curve(valuation: Date, rate_pct: rust_decimal::Decimal) -> ZeroCurve {
    ZeroCurve::from_pairs(
        valuation,
        &[
            (valuation.add_years(1).unwrap(), rate_pct),
            (valuation.add_years(10).unwrap(), rate_pct),
        ],
    )
    .unwrap()
}

#[test]
fn reference_scenario_two_year_bond_on_flat_curve() {
    // 2y maturity, 5% annual coupon, flat 3% zero curve, zero spread,
    // valuation on a coupon reset boundary.
    let valuation = date(2025, 6, 15);
    let curve = flat_curve(valuation, dec!(3.0));
    let bond = BondTerms::fixed(date(2027, 6, 15), dec!(5.0), 1);

    // Payments of 5 at year 1 and 105 at year 2 (coupon and principal
    // at maturity stay separate entries)
    let flows = cash_flows(&bond, valuation);
    assert_eq!(flows.len(), 3);
    let year_one: f64 = flows
        .iter()
        .filter(|cf| cf.date() == date(2026, 6, 15))
        .map(|cf| cf.amount_f64())
        .sum();
    let year_two: f64 = flows
        .iter()
        .filter(|cf| cf.date() == date(2027, 6, 15))
        .map(|cf| cf.amount_f64())
        .sum();
    assert_relative_eq!(year_one, 5.0, epsilon = 1e-12);
    assert_relative_eq!(year_two, 105.0, epsilon = 1e-12);

    let prices = price(&bond, &curve, 0.0).unwrap();
    let expected = 5.0 * (-0.03_f64 * 1.0).exp() + 105.0 * (-0.03_f64 * 2.0).exp();
    assert_relative_eq!(prices.dirty, expected, epsilon = 1e-6);
    assert_relative_eq!(prices.dirty, 103.74, epsilon = 0.01);
    assert_relative_eq!(prices.accrued, 0.0, epsilon = 1e-12);
    assert_relative_eq!(prices.clean, prices.dirty, epsilon = 1e-12);
}

#[test]
fn whole_period_schedule_counts() {
    // Maturity exactly N whole periods out: N coupon dates, the last
    // paying coupon plus principal.
    let valuation = date(2025, 3, 20);
    for (freq, years) in [(1u32, 4i32), (2, 3), (4, 2)] {
        let maturity = valuation.add_years(years).unwrap();
        let bond = BondTerms::fixed(maturity, dec!(4.0), freq);
        let flows = cash_flows(&bond, valuation);

        let n = (years as u32 * freq) as usize;
        // n coupons plus one principal entry
        assert_eq!(flows.len(), n + 1);
        assert_eq!(
            flows
                .iter()
                .filter(|cf| cf.kind() == CashFlowKind::Coupon)
                .count(),
            n
        );

        let per_coupon = 4.0 / freq as f64;
        let final_total: f64 = flows
            .iter()
            .filter(|cf| cf.date() == maturity)
            .map(|cf| cf.amount_f64())
            .sum();
        assert_relative_eq!(final_total, 100.0 + per_coupon, epsilon = 1e-12);
    }
}

#[test]
fn dirty_price_identity_holds_for_any_spread() {
    let valuation = date(2025, 9, 3);
    let curve = flat_curve(valuation, dec!(2.75));
    let bond = BondTerms::fixed(date(2031, 2, 20), dec!(6.0), 2);

    for spread in [-0.02, -0.005, 0.0, 0.004, 0.035, 0.1] {
        let prices = price(&bond, &curve, spread).unwrap();
        assert_relative_eq!(prices.dirty, prices.clean + prices.accrued, epsilon = 1e-10);
    }
}

#[test]
fn spread_and_yield_round_trips() {
    let valuation = date(2025, 6, 15);
    let curve = flat_curve(valuation, dec!(3.0));
    let bond = BondTerms::fixed(date(2032, 6, 15), dec!(4.5), 2);

    let reference_spread = 0.0142;
    let clean = price(&bond, &curve, reference_spread).unwrap().clean;
    let solved = SpreadCalculator::new(&curve).solve(&bond, clean).unwrap();
    assert_relative_eq!(solved, reference_spread, epsilon = 1e-8);

    let reference_yield = 0.047;
    let flows = cash_flows(&bond, valuation);
    let dirty = npv_at_yield(&flows, valuation, reference_yield);
    let ytm = yield_to_maturity(&bond, valuation, dirty).unwrap();
    assert_relative_eq!(ytm, reference_yield, epsilon = 1e-8);
}

#[test]
fn callable_bond_priced_to_next_call() {
    let valuation = date(2025, 6, 15);
    let curve = flat_curve(valuation, dec!(3.0));

    let straight = BondTerms::fixed(date(2035, 6, 15), dec!(5.0), 1);
    let callable = BondTerms::callable(Some(date(2035, 6, 15)), date(2027, 6, 15), dec!(5.0), 1);

    let straight_price = price(&straight, &curve, 0.0).unwrap();
    let callable_price = price(&callable, &curve, 0.0).unwrap();

    // Redeeming in 2027 discounts far fewer coupons than 2035
    assert!(callable_price.dirty < straight_price.dirty);

    let expected = 5.0 * (-0.03_f64 * 1.0).exp() + 105.0 * (-0.03_f64 * 2.0).exp();
    assert_relative_eq!(callable_price.dirty, expected, epsilon = 1e-6);
}

#[test]
fn risk_measures_follow_solved_yield() {
    let valuation = date(2025, 6, 15);
    let curve = flat_curve(valuation, dec!(3.0));
    let bond = BondTerms::fixed(date(2033, 6, 15), dec!(4.0), 1);

    let prices = price(&bond, &curve, 0.005).unwrap();
    let ytm = yield_to_maturity(&bond, valuation, prices.dirty).unwrap();
    let measures = duration_convexity(&bond, valuation, ytm).unwrap();

    assert!(measures.modified_duration > 0.0);
    assert!(measures.convexity > 0.0);
    // An 8-year coupon bond's duration sits below its maturity
    assert!(measures.modified_duration < 8.1);
}

#[test]
fn degenerate_curves_are_rejected() {
    let valuation = date(2025, 6, 15);

    assert!(matches!(
        ZeroCurve::from_pairs(valuation, &[]),
        Err(CurveError::InsufficientPillars { .. })
    ));
    assert!(matches!(
        ZeroCurve::from_pairs(valuation, &[(date(2026, 6, 15), dec!(3.0))]),
        Err(CurveError::InsufficientPillars { .. })
    ));
}

proptest! {
    #[test]
    fn prop_spread_round_trip(reference in -0.02f64..0.10) {
        let valuation = date(2025, 6, 15);
        let curve = flat_curve(valuation, dec!(3.0));
        let bond = BondTerms::fixed(date(2030, 6, 15), dec!(5.0), 1);

        let clean = price(&bond, &curve, reference).unwrap().clean;
        let solved = SpreadCalculator::new(&curve).solve(&bond, clean).unwrap();
        prop_assert!((solved - reference).abs() < 1e-7);
    }

    #[test]
    fn prop_yield_round_trip(reference in 0.001f64..0.15) {
        let valuation = date(2025, 6, 15);
        let bond = BondTerms::fixed(date(2031, 6, 15), dec!(4.0), 2);
        let flows = cash_flows(&bond, valuation);

        let dirty = npv_at_yield(&flows, valuation, reference);
        let solved = yield_to_maturity(&bond, valuation, dirty).unwrap();
        prop_assert!((solved - reference).abs() < 1e-7);
    }

    #[test]
    fn prop_discount_factor_decays(spread in 0.0f64..0.05, years in 1i32..20) {
        let valuation = date(2025, 6, 15);
        let curve = flat_curve(valuation, dec!(3.0));

        let near = curve.discount_factor(valuation.add_years(years).unwrap(), spread);
        let far = curve.discount_factor(valuation.add_years(years + 1).unwrap(), spread);
        prop_assert!(far < near);
        prop_assert!(near <= 1.0);
    }
}
