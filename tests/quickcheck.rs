use care_invest_quickcheck::quickcheck::{
    estimate_ebitda, estimate_max_investment, run_quickcheck, Assumptions, Capacity, EbitdaInput,
    InvestmentInput,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn reference_scenario_80_beds() {
    // 80 Plätze, 96 % Auslastung, 250/200 CHF Tagessätze, 5 Mio Eigenmittel,
    // 3 % Abschreibung, fixer Zinssatz 5 %.
    let result = run_quickcheck(&Assumptions::default());

    assert_eq!(result.ebitda.annual_revenue, dec!(7_008_000));
    assert_eq!(result.ebitda.annual_cost, dec!(5_606_400));
    assert_eq!(result.ebitda.annual_ebitda, dec!(1_401_600));
    assert_eq!(result.available_equity, dec!(5_000_000));
    assert_eq!(result.investment.max_debt, Capacity::Bounded(dec!(15_645_000)));
    assert_eq!(
        result.investment.max_investment,
        Capacity::Bounded(dec!(20_645_000))
    );
}

#[test]
fn recomputation_is_idempotent() {
    let assumptions = Assumptions {
        bed_count: 120,
        occupancy_percent: 85,
        avg_daily_revenue_chf: 310.0,
        avg_daily_cost_chf: 240.0,
        available_equity_chf: 2_500_000.0,
        depreciation_rate_percent: 4.5,
    };
    assert_eq!(run_quickcheck(&assumptions), run_quickcheck(&assumptions));
}

#[test]
fn ebitda_linear_in_daily_rates() {
    let base = EbitdaInput {
        bed_count: 100,
        occupancy_percent: dec!(90),
        avg_daily_revenue: dec!(200),
        avg_daily_cost: dec!(100),
    };
    let doubled_revenue = EbitdaInput {
        avg_daily_revenue: dec!(400),
        ..base.clone()
    };
    let doubled_cost = EbitdaInput {
        avg_daily_cost: dec!(200),
        ..base.clone()
    };

    let r0 = estimate_ebitda(&base);
    let r1 = estimate_ebitda(&doubled_revenue);
    let r2 = estimate_ebitda(&doubled_cost);

    assert_eq!(r1.annual_revenue, r0.annual_revenue * dec!(2));
    assert_eq!(r1.annual_cost, r0.annual_cost);
    assert_eq!(r2.annual_cost, r0.annual_cost * dec!(2));
    assert_eq!(r2.annual_revenue, r0.annual_revenue);
}

#[test]
fn negative_ebitda_is_a_result_not_an_error() {
    let result = estimate_ebitda(&EbitdaInput {
        bed_count: 50,
        occupancy_percent: dec!(80),
        avg_daily_revenue: dec!(150),
        avg_daily_cost: dec!(300),
    });
    assert!(result.annual_ebitda < Decimal::ZERO);
    assert_eq!(result.annual_ebitda, result.annual_revenue - result.annual_cost);
}

#[test]
fn zero_beds_and_zero_occupancy_yield_zero() {
    let no_beds = estimate_ebitda(&EbitdaInput {
        bed_count: 0,
        occupancy_percent: dec!(96),
        avg_daily_revenue: dec!(250),
        avg_daily_cost: dec!(200),
    });
    assert_eq!(no_beds.annual_ebitda, Decimal::ZERO);

    let empty_house = estimate_ebitda(&EbitdaInput {
        bed_count: 80,
        occupancy_percent: Decimal::ZERO,
        avg_daily_revenue: dec!(250),
        avg_daily_cost: dec!(200),
    });
    assert_eq!(empty_house.annual_revenue, Decimal::ZERO);
}

#[test]
fn zero_rates_give_unbounded_sentinel() {
    let result = estimate_max_investment(&InvestmentInput {
        annual_ebitda: dec!(1_000_000),
        available_equity: dec!(500_000),
        interest_rate: Decimal::ZERO,
        depreciation_rate: Decimal::ZERO,
    });
    assert!(result.max_debt.is_unbounded());
    assert!(result.max_investment.is_unbounded());
    assert_eq!(result.max_investment.amount(), None);
}

#[test]
fn zero_depreciation_with_interest_stays_finite() {
    let result = estimate_max_investment(&InvestmentInput {
        annual_ebitda: dec!(100_000),
        available_equity: dec!(1_000_000),
        interest_rate: dec!(0.05),
        depreciation_rate: Decimal::ZERO,
    });
    // 100'000 / 0.05 = 2'000'000 Verschuldung plus Eigenmittel
    assert_eq!(result.max_debt, Capacity::Bounded(dec!(2_000_000)));
    assert_eq!(result.max_investment, Capacity::Bounded(dec!(3_000_000)));
}

#[test]
fn negative_raw_debt_clamps_to_equity() {
    // (-500'000 - 2'000'000 * 0.03) / 0.08 ist negativ; nach der Begrenzung
    // bleibt genau der Eigenmittelbetrag.
    let result = estimate_max_investment(&InvestmentInput {
        annual_ebitda: dec!(-500_000),
        available_equity: dec!(2_000_000),
        interest_rate: dec!(0.05),
        depreciation_rate: dec!(0.03),
    });
    assert_eq!(result.max_debt, Capacity::Bounded(Decimal::ZERO));
    assert_eq!(result.max_investment, Capacity::Bounded(dec!(2_000_000)));
}

#[test]
fn clamp_applies_after_full_division() {
    // Knapp negativer Zähler: erst dividieren, dann begrenzen. Eine zu frühe
    // Begrenzung des EBITDA würde hier eine positive Verschuldung liefern.
    let result = estimate_max_investment(&InvestmentInput {
        annual_ebitda: dec!(149_999),
        available_equity: dec!(5_000_000),
        interest_rate: dec!(0.05),
        depreciation_rate: dec!(0.03),
    });
    // Roh: (149'999 - 150'000) / 0.08 = -12.5
    assert_eq!(result.max_debt, Capacity::Bounded(Decimal::ZERO));
    assert_eq!(result.max_investment, Capacity::Bounded(dec!(5_000_000)));
}
