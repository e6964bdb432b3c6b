use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// Namensraum für alle Übersetzungsschlüssel.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_QUICKCHECK: &str = "main_menu.quickcheck";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const QUICKCHECK_HEADING: &str = "quickcheck.heading";
    pub const QUICKCHECK_INTRO: &str = "quickcheck.intro";
    pub const QUICKCHECK_DEFAULT_HINT: &str = "quickcheck.default_hint";

    pub const PROMPT_BED_COUNT: &str = "prompt.bed_count";
    pub const PROMPT_OCCUPANCY: &str = "prompt.occupancy";
    pub const PROMPT_DAILY_REVENUE: &str = "prompt.daily_revenue";
    pub const PROMPT_DAILY_COST: &str = "prompt.daily_cost";
    pub const PROMPT_EQUITY: &str = "prompt.equity";
    pub const PROMPT_DEPRECIATION: &str = "prompt.depreciation";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_ANNUAL_REVENUE: &str = "result.annual_revenue";
    pub const RESULT_EBITDA: &str = "result.ebitda";
    pub const RESULT_MAX_INVESTMENT: &str = "result.max_investment";
    pub const RESULT_EQUITY: &str = "result.equity";
    pub const RESULT_UNBOUNDED: &str = "result.unbounded";

    pub const NOTE_SIMPLIFIED: &str = "note.simplified";
    pub const NOTE_FIXED_RATE: &str = "note.fixed_rate";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const HELP_DAILY_REVENUE: &str = "help.daily_revenue";
    pub const HELP_DAILY_COST: &str = "help.daily_cost";
    pub const HELP_EQUITY: &str = "help.equity";
    pub const HELP_DEPRECIATION: &str = "help.depreciation";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    De,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::De
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }
}

/// Stellt das Sprachbundle zur Laufzeit bereit.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// Erzeugt einen Übersetzer nach Sprachcode (de/en). Unbekannte Codes
    /// fallen auf Deutsch zurück.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// Sprachcode plus Sprachpaket-Verzeichnis (locales/ usw.). Fehlen
    /// Verzeichnis oder Datei, gelten nur die eingebauten Texte.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// Schlägt einen Schlüssel im Sprachpaket nach; None, wenn nicht enthalten.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// Liefert die Übersetzung. Fehlt der englische Text, gilt der deutsche.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| de(key)),
            Language::De => de(key),
        }
    }
}

/// Bestimmt den Sprachcode in der Reihenfolge CLI-Flag, Einstellung, System.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "de-ch".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "de" => Some("de-ch".into()),
        "de-ch" => Some("de-ch".into()),
        "de-de" => Some("de-ch".into()),
        "en" => Some("en-us".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("de") => Some("de-ch".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "de" => Some("de-ch".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// Leitet die Sprache aus dem Systemgebietsschema ab.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// Lädt ein TOML-Sprachpaket: flache oder verschachtelte key = "value"-Tabellen.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) voller Code (z.B. de-ch)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) Basiscode (z.B. de)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// Eingebaute Sprachpakete, damit die Anwendung ohne locales/ läuft.
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "de-ch" | "de" => parse_toml_to_map(include_str!("../locales/de-ch.toml")),
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        _ => None,
    }
}

fn de(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Fehler",
        APP_EXIT => "Programm wird beendet.",
        MAIN_MENU_TITLE => "\n=== Schnell-Check: Investitionsrechner Pflegeheim ===",
        MAIN_MENU_QUICKCHECK => "1) Schnell-Check rechnen",
        MAIN_MENU_SETTINGS => "2) Einstellungen",
        MAIN_MENU_EXIT => "0) Beenden",
        PROMPT_MENU_SELECT => "Menüauswahl: ",
        INVALID_SELECTION_RETRY => "Ungültige Eingabe. Bitte erneut wählen.",
        QUICKCHECK_HEADING => "\n-- Ihre Eckdaten --",
        QUICKCHECK_INTRO => {
            "Erste, stark vereinfachte Indikation für Ihren möglichen Investitionsrahmen."
        }
        QUICKCHECK_DEFAULT_HINT => "Leere Eingabe übernimmt den Wert in Klammern.",
        PROMPT_BED_COUNT => "Anzahl geplanter Pflegeplätze",
        PROMPT_OCCUPANCY => "Erwartete Auslastung [%]",
        PROMPT_DAILY_REVENUE => "Ø Ertrag pro Pflegebett und Tag [CHF]",
        PROMPT_DAILY_COST => "Ø Kosten pro Pflegebett und Tag [CHF]",
        PROMPT_EQUITY => "Verfügbare Eigenmittel [CHF]",
        PROMPT_DEPRECIATION => "Jährlicher Abschreibungssatz [%]",
        RESULT_HEADING => "\n-- Erste Indikation --",
        RESULT_ANNUAL_REVENUE => "Geschätzter Jahresertrag:",
        RESULT_EBITDA => "Geschätztes jährliches EBITDA:",
        RESULT_MAX_INVESTMENT => "Maximaler Investitionsrahmen (geschätzt):",
        RESULT_EQUITY => "Eingebrachte Eigenmittel:",
        RESULT_UNBOUNDED => "Unbegrenzt",
        NOTE_SIMPLIFIED => {
            "Hinweis: stark vereinfachte Schnellschätzung. Kostenstrukturen, \
             Pflegestufenmix, Tarifdetails und Bauphasen bleiben unberücksichtigt."
        }
        NOTE_FIXED_RATE => {
            "Die Berechnung erfolgt mit einem fixen kalkulatorischen Zinssatz von 5 %."
        }
        SETTINGS_HEADING => "\n-- Einstellungen --",
        SETTINGS_CURRENT_LANGUAGE => "Aktuelle Sprache:",
        SETTINGS_OPTIONS => "1) Deutsch  2) English",
        SETTINGS_PROMPT_CHANGE => "Nummer wählen (Enter bricht ab): ",
        SETTINGS_INVALID => "Ungültige Eingabe, Sprache bleibt unverändert.",
        SETTINGS_SAVED => "Sprache gespeichert (wirksam ab dem nächsten Start):",
        ERROR_INVALID_NUMBER => "Bitte eine Zahl eingeben.",
        HELP_DAILY_REVENUE => {
            "Kombinierter Durchschnitt aus Pflegetaxen, Pensionstaxen und \
             Betreuungstaxen pro Tag pro Bett."
        }
        HELP_DAILY_COST => {
            "Durchschnittliche operative Kosten (Personal- und Sachkosten) pro Tag pro Bett."
        }
        HELP_EQUITY => "Eigenkapital, das Sie in das Projekt einbringen können/wollen.",
        HELP_DEPRECIATION => {
            "Durchschnittlicher jährlicher Abschreibungssatz auf die Investition."
        }
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Quick Check: Care Facility Investment Estimator ===",
        MAIN_MENU_QUICKCHECK => "1) Run quick check",
        MAIN_MENU_SETTINGS => "2) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        QUICKCHECK_HEADING => "\n-- Your key figures --",
        QUICKCHECK_INTRO => "A first, heavily simplified indication of your investment capacity.",
        QUICKCHECK_DEFAULT_HINT => "Empty input keeps the value in brackets.",
        PROMPT_BED_COUNT => "Planned number of care beds",
        PROMPT_OCCUPANCY => "Expected occupancy [%]",
        PROMPT_DAILY_REVENUE => "Avg. revenue per bed and day [CHF]",
        PROMPT_DAILY_COST => "Avg. cost per bed and day [CHF]",
        PROMPT_EQUITY => "Available equity [CHF]",
        PROMPT_DEPRECIATION => "Annual depreciation rate [%]",
        RESULT_HEADING => "\n-- First indication --",
        RESULT_ANNUAL_REVENUE => "Estimated annual revenue:",
        RESULT_EBITDA => "Estimated annual EBITDA:",
        RESULT_MAX_INVESTMENT => "Maximum investment volume (estimated):",
        RESULT_EQUITY => "Contributed equity:",
        RESULT_UNBOUNDED => "Unbounded",
        NOTE_SIMPLIFIED => {
            "Note: heavily simplified quick estimate. Cost structures, care-level \
             mix, tariff details and construction phases are not considered."
        }
        NOTE_FIXED_RATE => "Calculated with a fixed imputed interest rate of 5%.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) Deutsch  2) English",
        SETTINGS_PROMPT_CHANGE => "Choose a number (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language saved (takes effect on next start):",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        HELP_DAILY_REVENUE => {
            "Combined average of care, boarding and assistance tariffs per day per bed."
        }
        HELP_DAILY_COST => "Average operating cost (staff and materials) per day per bed.",
        HELP_EQUITY => "Equity you can or want to contribute to the project.",
        HELP_DEPRECIATION => "Average annual depreciation rate on the investment.",
        _ => return None,
    })
}
