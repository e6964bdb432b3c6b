#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui-basierter Desktop-Einstieg für den Schnell-Check.

use eframe::{egui, App, Frame};
use std::env;

use care_invest_quickcheck::{config, i18n, money, quickcheck};

fn main() -> Result<(), eframe::Error> {
    // Sprachoption: --lang xx oder --lang=xx (xx: auto/de-ch/en-us)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let viewport = egui::ViewportBuilder::default().with_inner_size([560.0, 640.0]);
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }

    eframe::run_native(
        "Schnell-Check: Investitionsrechner Pflegeheim",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg.clone()))),
    )
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    bed_count: u32,
    occupancy_percent: u32,
    avg_daily_revenue: f64,
    avg_daily_cost: f64,
    available_equity: f64,
    depreciation_rate_percent: f64,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, None);
        let a = config.assumptions.clone();
        Self {
            config,
            tr,
            bed_count: a.bed_count,
            occupancy_percent: a.occupancy_percent,
            avg_daily_revenue: a.avg_daily_revenue_chf,
            avg_daily_cost: a.avg_daily_cost_chf,
            available_equity: a.available_equity_chf,
            depreciation_rate_percent: a.depreciation_rate_percent,
        }
    }

    /// Aktuelle Widget-Werte als Eckdaten-Record.
    fn snapshot(&self) -> quickcheck::Assumptions {
        quickcheck::Assumptions {
            bed_count: self.bed_count,
            occupancy_percent: self.occupancy_percent,
            avg_daily_revenue_chf: self.avg_daily_revenue,
            avg_daily_cost_chf: self.avg_daily_cost,
            available_equity_chf: self.available_equity,
            depreciation_rate_percent: self.depreciation_rate_percent,
        }
    }

    fn switch_language(&mut self, code: &str) {
        self.config.language = code.to_string();
        self.tr = i18n::Translator::new_with_pack(code, None);
        if let Err(e) = self.config.save() {
            eprintln!("Config save error: {e}");
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(txt("gui.title", "Schnell-Check: Investitionsrechner Pflegeheim"));
            ui.small(txt(
                "gui.intro",
                "Erste, stark vereinfachte Indikation für Ihren möglichen Investitionsrahmen.",
            ));
            ui.add_space(8.0);

            ui.strong(txt("gui.inputs_heading", "Ihre Eckdaten"));
            ui.add_space(4.0);
            ui.columns(2, |cols| {
                cols[0].label(txt("gui.label.bed_count", "Anzahl geplanter Pflegeplätze"));
                cols[0].add(egui::Slider::new(&mut self.bed_count, 10..=500));
                cols[0].add_space(6.0);
                cols[0]
                    .label(txt("gui.label.daily_revenue", "Ø Ertrag pro Bett und Tag"))
                    .on_hover_text(tr.t(i18n::keys::HELP_DAILY_REVENUE));
                cols[0].add(
                    egui::DragValue::new(&mut self.avg_daily_revenue)
                        .clamp_range(10.0..=1000.0)
                        .speed(5.0)
                        .suffix(" CHF"),
                );
                cols[0].add_space(6.0);
                cols[0]
                    .label(txt("gui.label.equity", "Verfügbare Eigenmittel"))
                    .on_hover_text(tr.t(i18n::keys::HELP_EQUITY));
                cols[0].add(
                    egui::DragValue::new(&mut self.available_equity)
                        .clamp_range(0.0..=100_000_000.0)
                        .speed(100_000.0)
                        .suffix(" CHF"),
                );

                cols[1].label(txt("gui.label.occupancy", "Erwartete Auslastung [%]"));
                cols[1].add(egui::Slider::new(&mut self.occupancy_percent, 70..=100));
                cols[1].add_space(6.0);
                cols[1]
                    .label(txt("gui.label.daily_cost", "Ø Kosten pro Bett und Tag"))
                    .on_hover_text(tr.t(i18n::keys::HELP_DAILY_COST));
                cols[1].add(
                    egui::DragValue::new(&mut self.avg_daily_cost)
                        .clamp_range(50.0..=800.0)
                        .speed(5.0)
                        .suffix(" CHF"),
                );
                cols[1].add_space(6.0);
                cols[1]
                    .label(txt("gui.label.depreciation", "Jhrl. Abschreibungssatz [%]"))
                    .on_hover_text(tr.t(i18n::keys::HELP_DEPRECIATION));
                cols[1].add(
                    egui::DragValue::new(&mut self.depreciation_rate_percent)
                        .clamp_range(0.5..=10.0)
                        .speed(0.1)
                        .suffix(" %"),
                );
            });

            ui.add_space(10.0);
            ui.separator();
            ui.strong(txt("gui.results_heading", "Erste Indikation"));
            ui.add_space(4.0);

            // Vollständige Neuberechnung bei jedem Frame; beide Schätzer sind
            // rein und konstant schnell.
            let result = quickcheck::run_quickcheck(&self.snapshot());
            let unbounded = tr.t(i18n::keys::RESULT_UNBOUNDED);

            ui.columns(2, |cols| {
                cols[0].label(txt("gui.result.ebitda", "Geschätztes jährliches EBITDA"));
                cols[0].label(
                    egui::RichText::new(format!(
                        "CHF {}",
                        money::format_amount(result.ebitda.annual_ebitda)
                    ))
                    .strong()
                    .size(18.0),
                );
                cols[0].small(format!(
                    "{} CHF {}",
                    tr.t(i18n::keys::RESULT_ANNUAL_REVENUE),
                    money::format_amount(result.ebitda.annual_revenue)
                ));

                cols[1].label(txt(
                    "gui.result.max_investment",
                    "Maximaler Investitionsrahmen (geschätzt)",
                ));
                cols[1]
                    .label(
                        egui::RichText::new(format!(
                            "CHF {}",
                            money::format_capacity(&result.investment.max_investment, unbounded)
                        ))
                        .strong()
                        .size(18.0),
                    )
                    .on_hover_text(format!(
                        "{} CHF {}\n{}",
                        tr.t(i18n::keys::RESULT_EQUITY),
                        money::format_amount(result.available_equity),
                        tr.t(i18n::keys::NOTE_FIXED_RATE)
                    ));
            });

            ui.add_space(10.0);
            ui.separator();
            ui.small(tr.t(i18n::keys::NOTE_SIMPLIFIED));
            ui.small(tr.t(i18n::keys::NOTE_FIXED_RATE));

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(txt("gui.language", "Sprache:"));
                if ui
                    .selectable_label(self.tr.language() == i18n::Language::De, "Deutsch")
                    .clicked()
                {
                    self.switch_language("de-ch");
                }
                if ui
                    .selectable_label(self.tr.language() == i18n::Language::En, "English")
                    .clicked()
                {
                    self.switch_language("en-us");
                }
            });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.assumptions = self.snapshot();
        if let Err(e) = self.config.save() {
            eprintln!("Config save error: {e}");
        }
    }
}
