//! Schnell-Check-Berechnungsmodule: EBITDA-Schätzung und Investitionsrahmen.

pub mod ebitda;
pub mod investment;

pub use ebitda::*;
pub use investment::*;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixer kalkulatorischer Zinssatz (5 %), im vereinfachten Modell nicht einstellbar.
pub fn calc_interest_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Eckdaten des geplanten Pflegeheims, wie sie die Oberfläche erhebt.
///
/// Die Berechnungsfunktionen erzwingen die UI-Bereiche nicht; Werte
/// ausserhalb sind unvalidierte Extrapolationen des Modells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assumptions {
    /// Anzahl geplanter Pflegeplätze (UI-Bereich 10..=500)
    pub bed_count: u32,
    /// Erwartete Auslastung [%] (UI-Bereich 70..=100)
    pub occupancy_percent: u32,
    /// Ø Ertrag pro Pflegebett und Tag [CHF] (UI-Bereich 10..=1000)
    pub avg_daily_revenue_chf: f64,
    /// Ø Kosten pro Pflegebett und Tag [CHF] (UI-Bereich 50..=800)
    pub avg_daily_cost_chf: f64,
    /// Verfügbare Eigenmittel [CHF] (UI-Bereich 0..=100'000'000)
    pub available_equity_chf: f64,
    /// Jährlicher Abschreibungssatz [%] (UI-Bereich 0.5..=10.0)
    pub depreciation_rate_percent: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            bed_count: 80,
            occupancy_percent: 96,
            avg_daily_revenue_chf: 250.0,
            avg_daily_cost_chf: 200.0,
            available_equity_chf: 5_000_000.0,
            depreciation_rate_percent: 3.0,
        }
    }
}

/// Gesamtergebnis eines Schnell-Checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickCheckResult {
    pub ebitda: EbitdaResult,
    pub investment: InvestmentResult,
    /// Eigenmittel, unverändert durchgereicht [CHF]
    pub available_equity: Decimal,
}

/// Führt beide Schätzer nacheinander aus.
///
/// Zustandslos und idempotent: gleiche Eckdaten liefern bitgenau dieselben
/// Ergebnisse, keine Akkumulation zwischen Neuberechnungen.
pub fn run_quickcheck(assumptions: &Assumptions) -> QuickCheckResult {
    let equity = to_decimal(assumptions.available_equity_chf);

    let ebitda = estimate_ebitda(&EbitdaInput {
        bed_count: assumptions.bed_count,
        occupancy_percent: Decimal::from(assumptions.occupancy_percent),
        avg_daily_revenue: to_decimal(assumptions.avg_daily_revenue_chf),
        avg_daily_cost: to_decimal(assumptions.avg_daily_cost_chf),
    });

    let investment = estimate_max_investment(&InvestmentInput {
        annual_ebitda: ebitda.annual_ebitda,
        available_equity: equity,
        interest_rate: calc_interest_rate(),
        depreciation_rate: to_decimal(assumptions.depreciation_rate_percent)
            / Decimal::ONE_HUNDRED,
    });

    QuickCheckResult {
        ebitda,
        investment,
        available_equity: equity,
    }
}

/// Übergang von UI-Fliesskommawerten zur Dezimalarithmetik.
/// Nicht-endliche Werte fallen auf null zurück.
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}
