use rust_decimal::Decimal;

/// Kalkulatorische Tage pro Jahr.
pub const DAYS_PER_YEAR: u32 = 365;

/// Eingaben für die vereinfachte EBITDA-Schätzung.
#[derive(Debug, Clone)]
pub struct EbitdaInput {
    /// Anzahl geplanter Pflegeplätze
    pub bed_count: u32,
    /// Erwartete Auslastung [%]
    pub occupancy_percent: Decimal,
    /// Ø Ertrag pro Pflegebett und Tag [CHF]
    pub avg_daily_revenue: Decimal,
    /// Ø Kosten pro Pflegebett und Tag [CHF]
    pub avg_daily_cost: Decimal,
}

/// Ergebnis der EBITDA-Schätzung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EbitdaResult {
    /// Jahresertrag [CHF]
    pub annual_revenue: Decimal,
    /// Jahreskosten [CHF], vereinfachte Kostenannahme
    pub annual_cost: Decimal,
    /// Jährliches EBITDA [CHF], kann negativ sein
    pub annual_ebitda: Decimal,
}

/// Berechnet ein vereinfachtes EBITDA aus durchschnittlichen Tagessätzen.
///
/// Reine Funktion ohne Fehlerfälle: jede endliche, nicht-negative Eingabe
/// liefert ein endliches Ergebnis. Kosten über Ertrag ergeben ein negatives
/// EBITDA, kein Fehler.
pub fn estimate_ebitda(input: &EbitdaInput) -> EbitdaResult {
    let occupied_beds =
        Decimal::from(input.bed_count) * input.occupancy_percent / Decimal::ONE_HUNDRED;
    let days = Decimal::from(DAYS_PER_YEAR);

    let annual_revenue = occupied_beds * input.avg_daily_revenue * days;
    let annual_cost = occupied_beds * input.avg_daily_cost * days;

    EbitdaResult {
        annual_revenue,
        annual_cost,
        annual_ebitda: annual_revenue - annual_cost,
    }
}
