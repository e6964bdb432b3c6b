use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// Fehler, die im Anwendungsablauf auftreten können. Die Schätzer selbst
/// sind total und liefern keine Fehler.
#[derive(Debug)]
pub enum AppError {
    /// Ein-/Ausgabefehler
    Io(std::io::Error),
    /// Laden/Speichern der Einstellungen
    Config(crate::config::ConfigError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "Ein-/Ausgabefehler: {e}"),
            AppError::Config(e) => write!(f, "Einstellungsfehler: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

/// Hauptschleife der CLI-Anwendung.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::QuickCheck => {
                ui_cli::handle_quickcheck(tr, config)?;
                config.save()?;
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
