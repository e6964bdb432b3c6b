use rust_decimal::Decimal;

/// Eingaben für die Schätzung des maximalen Investitionsrahmens.
#[derive(Debug, Clone)]
pub struct InvestmentInput {
    /// Jährliches EBITDA [CHF], darf negativ sein
    pub annual_ebitda: Decimal,
    /// Verfügbare Eigenmittel [CHF]
    pub available_equity: Decimal,
    /// Kalkulatorischer Zinssatz als Dezimal (0.05 = 5 %)
    pub interest_rate: Decimal,
    /// Jährlicher Abschreibungssatz als Dezimal
    pub depreciation_rate: Decimal,
}

/// Kapazität mit explizitem Unbegrenzt-Sentinel.
///
/// Dezimalarithmetik kennt kein Unendlich; der Nullnenner-Fall wird deshalb
/// als eigene Variante geführt statt über Gleitkomma-Semantik.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    Bounded(Decimal),
    Unbounded,
}

impl Capacity {
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Capacity::Unbounded)
    }

    /// Betrag, falls begrenzt.
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Capacity::Bounded(v) => Some(*v),
            Capacity::Unbounded => None,
        }
    }
}

/// Ergebnis der Investitionsrahmen-Schätzung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvestmentResult {
    /// Maximal tragbare Verschuldung [CHF]
    pub max_debt: Capacity,
    /// Maximaler Investitionsrahmen = Eigenmittel + Verschuldung [CHF]
    pub max_investment: Capacity,
}

/// Berechnet den vereinfachten maximalen Investitionsrahmen.
///
/// Das EBITDA abzüglich des Abschreibungsanteils der Eigenmittel wird mit
/// Zins- plus Abschreibungssatz kapitalisiert. Die Begrenzung negativer
/// Verschuldung auf null erfolgt erst nach der vollständigen Division;
/// ein negatives EBITDA fliesst dagegen unverändert ein.
pub fn estimate_max_investment(input: &InvestmentInput) -> InvestmentResult {
    let denominator = input.interest_rate + input.depreciation_rate;
    if denominator.is_zero() {
        return InvestmentResult {
            max_debt: Capacity::Unbounded,
            max_investment: Capacity::Unbounded,
        };
    }

    let raw_debt =
        (input.annual_ebitda - input.available_equity * input.depreciation_rate) / denominator;
    let max_debt = raw_debt.max(Decimal::ZERO);

    InvestmentResult {
        max_debt: Capacity::Bounded(max_debt),
        max_investment: Capacity::Bounded(input.available_equity + max_debt),
    }
}
