//! Kernlogik als Bibliothek, damit CLI und GUI dieselben Schätzer teilen.

pub mod app;
pub mod config;
pub mod i18n;
pub mod money;
pub mod quickcheck;
pub mod ui_cli;
