use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::money;
use crate::quickcheck;

/// Auswahlmöglichkeiten im Hauptmenü.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    QuickCheck,
    Settings,
    Exit,
}

/// Zeigt das Hauptmenü und liefert die Auswahl.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::QUICKCHECK_INTRO));
    println!("{}", tr.t(keys::MAIN_MENU_QUICKCHECK));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::QuickCheck),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// Fragt die Eckdaten ab, rechnet den Schnell-Check und zeigt das Ergebnis.
/// Die eingegebenen Werte werden als neue Vorgaben übernommen.
pub fn handle_quickcheck(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::QUICKCHECK_HEADING));
    println!("{}", tr.t(keys::QUICKCHECK_DEFAULT_HINT));

    let mut a = cfg.assumptions.clone();
    a.bed_count = read_u32_or(tr, tr.t(keys::PROMPT_BED_COUNT), a.bed_count)?;
    a.occupancy_percent = read_u32_or(tr, tr.t(keys::PROMPT_OCCUPANCY), a.occupancy_percent)?;
    a.avg_daily_revenue_chf =
        read_f64_or(tr, tr.t(keys::PROMPT_DAILY_REVENUE), a.avg_daily_revenue_chf)?;
    a.avg_daily_cost_chf = read_f64_or(tr, tr.t(keys::PROMPT_DAILY_COST), a.avg_daily_cost_chf)?;
    a.available_equity_chf = read_f64_or(tr, tr.t(keys::PROMPT_EQUITY), a.available_equity_chf)?;
    a.depreciation_rate_percent = read_f64_or(
        tr,
        tr.t(keys::PROMPT_DEPRECIATION),
        a.depreciation_rate_percent,
    )?;

    let result = quickcheck::run_quickcheck(&a);
    cfg.assumptions = a;

    let unbounded = tr.t(keys::RESULT_UNBOUNDED);
    println!("{}", tr.t(keys::RESULT_HEADING));
    println!(
        "{} CHF {}",
        tr.t(keys::RESULT_ANNUAL_REVENUE),
        money::format_amount(result.ebitda.annual_revenue)
    );
    println!(
        "{} CHF {}",
        tr.t(keys::RESULT_EBITDA),
        money::format_amount(result.ebitda.annual_ebitda)
    );
    println!(
        "{} CHF {}",
        tr.t(keys::RESULT_EQUITY),
        money::format_amount(result.available_equity)
    );
    println!(
        "{} CHF {}",
        tr.t(keys::RESULT_MAX_INVESTMENT),
        money::format_capacity(&result.investment.max_investment, unbounded)
    );
    println!();
    println!("{}", tr.t(keys::NOTE_SIMPLIFIED));
    println!("{}", tr.t(keys::NOTE_FIXED_RATE));
    Ok(())
}

/// Einstellungsmenü: Sprache wechseln.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let new_lang = match sel.trim() {
        "" => return Ok(()),
        "1" => "de-ch",
        "2" => "en-us",
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    cfg.language = new_lang.to_string();
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

/// Liest eine Ganzzahl; leere Eingabe übernimmt die Vorgabe.
fn read_u32_or(tr: &Translator, label: &str, default: u32) -> Result<u32, AppError> {
    loop {
        let input = read_line(&format!("{label} [{default}]: "))?;
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        if let Ok(v) = trimmed.parse::<u32>() {
            return Ok(v);
        }
        println!("{}", tr.t(keys::ERROR_INVALID_NUMBER));
    }
}

/// Liest einen Dezimalwert; Tausendertrennzeichen sind erlaubt.
fn read_f64_or(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let input = read_line(&format!("{label} [{default}]: "))?;
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        if let Ok(v) = trimmed.replace('\'', "").parse::<f64>() {
            if v.is_finite() {
                return Ok(v);
            }
        }
        println!("{}", tr.t(keys::ERROR_INVALID_NUMBER));
    }
}
