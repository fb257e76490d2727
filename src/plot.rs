use eframe::egui;
use egui::plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Text};
use egui::{Align2, Color32, RichText, Ui};

use crate::comparison::Comparison;
use crate::labels::{label_bars, LabelColor};
use crate::sine::SinePair;
use crate::snapshot::Snapshot;

const BAR_WIDTH: f64 = 0.8;
const BAR_COLOR: Color32 = Color32::from_rgb(0x1f, 0x77, 0xb4);
// heading and axis caption under each plot
const PANEL_CHROME: f32 = 56.0;

impl From<LabelColor> for Color32 {
    fn from(color: LabelColor) -> Self {
        match color {
            LabelColor::White => Color32::WHITE,
            LabelColor::Black => Color32::BLACK,
        }
    }
}

fn run<A: eframe::App + 'static>(title: &str, app: A) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1000.0, 700.0)),
        ..Default::default()
    };
    eframe::run_native(title, options, Box::new(move |_cc| Box::new(app)))
}

/// Blocks until the window is closed.
pub fn plot_snapshot(snapshot: Snapshot) -> Result<(), eframe::Error> {
    run("OFDM snapshot", SnapshotApp { snapshot })
}

pub fn plot_comparison(comparison: Comparison) -> Result<(), eframe::Error> {
    run("Results", ComparisonApp { comparison })
}

pub fn plot_sines(sines: SinePair) -> Result<(), eframe::Error> {
    run("Sine", SineApp { sines })
}

fn panel_height(ui: &Ui, rows: usize) -> f32 {
    (ui.available_height() / rows as f32 - PANEL_CHROME).max(80.0)
}

fn trace_panel(ui: &mut Ui, id: &str, title: &str, samples: &[f32], height: f32) {
    ui.heading(title);
    Plot::new(id)
        .legend(Legend::default())
        .height(height)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(PlotPoints::from_ys_f32(samples)).name(title));
        });
    ui.label(RichText::new("Temps").small());
}

fn harmonics_panel(ui: &mut Ui, id: &str, title: &str, heights: &[f32], height: f32) {
    ui.heading(title);
    let bars: Vec<Bar> = heights
        .iter()
        .enumerate()
        .map(|(i, &h)| Bar::new((i + 1) as f64, h as f64).width(BAR_WIDTH))
        .collect();
    let labels = label_bars(heights);

    Plot::new(id)
        .legend(Legend::default())
        .height(height)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR).name(title));
            for label in labels {
                plot_ui.text(
                    Text::new(PlotPoint::new(label.x, label.y), label.text())
                        .color(Color32::from(label.color))
                        .anchor(Align2::CENTER_CENTER),
                );
            }
        });
    ui.label(RichText::new("Harmoniques").small());
}

struct SnapshotApp {
    snapshot: Snapshot,
}

impl eframe::App for SnapshotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let height = panel_height(ui, 2);
            let s = &self.snapshot;
            ui.columns(2, |columns| {
                trace_panel(&mut columns[0], "emitted_trace", "Signal émis", &s.emitted_trace, height);
                harmonics_panel(
                    &mut columns[0],
                    "emitted_harmonics",
                    "Parties réelles du premier symbole émis",
                    &s.emitted_harmonics,
                    height,
                );
                trace_panel(&mut columns[1], "received_trace", "Signal reçu", &s.received_trace, height);
                harmonics_panel(
                    &mut columns[1],
                    "received_harmonics",
                    "Parties réelles du premier symbole reçu",
                    &s.received_harmonics,
                    height,
                );
            });
        });
    }
}

struct ComparisonApp {
    comparison: Comparison,
}

impl eframe::App for ComparisonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("comparison")
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(PlotPoints::from_ys_f32(&self.comparison.result)).name("result"));
                    plot_ui.line(Line::new(PlotPoints::from_ys_f32(&self.comparison.original)).name("original"));
                });
        });
    }
}

struct SineApp {
    sines: SinePair,
}

impl SineApp {
    fn points(&self, values: &[f64]) -> PlotPoints {
        PlotPoints::new(
            self.sines
                .time
                .iter()
                .zip(values)
                .map(|(&t, &v)| [t, v])
                .collect(),
        )
    }
}

impl eframe::App for SineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let height = ui.available_height() / 2.0 - 8.0;
            Plot::new("fundamental").height(height).show(ui, |plot_ui| {
                plot_ui.line(Line::new(self.points(&self.sines.fundamental)));
            });
            Plot::new("second").height(height).show(ui, |plot_ui| {
                plot_ui.line(Line::new(self.points(&self.sines.second)));
            });
        });
    }
}
