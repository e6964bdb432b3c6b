use clap::Parser;

use care_invest_quickcheck::{app, config, i18n};

/// Schnell-Check: Investitionsrechner Pflegeheim (CLI).
#[derive(Parser)]
#[command(version, about = "Schnell-Check: Investitionsrechner Pflegeheim")]
struct Cli {
    /// Sprache: auto, de-ch oder en-us
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
}

/// Einstiegspunkt: Einstellungen laden, Sprache auflösen, CLI starten.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("Fehler: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, None);
    app::run(&mut cfg, &tr)?;
    Ok(())
}
