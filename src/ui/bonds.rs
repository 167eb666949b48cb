//! Bond section with its switchable views.
//!
//! The view switcher is a pager like the carousels: tabs and chevrons send
//! commands, the rendered view is chosen by the published index, and the
//! transition window briefly dims the content.

use eframe::egui::{self, vec2, Button, Grid, RichText, Sense, Ui};
use std::collections::BTreeMap;
use tokio::sync::watch;
use tracing::warn;

use crate::data::bonds::{average_coupon, total_market_value};
use crate::data::{BondHolding, BondView};
use crate::pager::{GestureAdapter, GestureEvent, PagerHandle, PagerSnapshot};
use crate::ui::common::{card_frame, format_amount, UiColors};

pub struct BondsData {
    pager: PagerHandle,
    snapshots: watch::Receiver<PagerSnapshot>,
    adapter: GestureAdapter,
    bonds: Vec<BondHolding>,
}

impl BondsData {
    pub fn new(pager: PagerHandle, bonds: Vec<BondHolding>) -> Self {
        let snapshots = pager.subscribe();
        Self {
            pager,
            snapshots,
            adapter: GestureAdapter::new(false),
            bonds,
        }
    }

    pub fn render(&mut self, ui: &mut Ui) {
        let snapshot = self.snapshots.borrow().clone();
        let view = BondView::ALL
            .get(snapshot.current_index)
            .copied()
            .unwrap_or(BondView::Overview);

        ui.horizontal(|ui| {
            ui.heading("Bonds");
            ui.add_space(8.0);
            if ui.small_button("◀").clicked() {
                self.dispatch(GestureEvent::TapLeft);
            }
            for (index, tab) in BondView::ALL.iter().enumerate() {
                let active = index == snapshot.current_index;
                let label = if active {
                    RichText::new(tab.title()).color(UiColors::ACCENT).strong()
                } else {
                    RichText::new(tab.title()).color(UiColors::MUTED)
                };
                if ui.add(Button::new(label).frame(false)).clicked() {
                    self.dispatch(GestureEvent::TapDot(index));
                }
            }
            if ui.small_button("▶").clicked() {
                self.dispatch(GestureEvent::TapRight);
            }
        });

        // The rejected-while-transitioning contract means the index cannot
        // change under us mid-frame; the dim is purely cosmetic.
        ui.scope(|ui| {
            if snapshot.transitioning {
                ui.set_opacity(0.6);
            }
            match view {
                BondView::Overview => self.render_overview(ui),
                BondView::MaturityLadder => self.render_maturities(ui),
                BondView::Ratings => self.render_ratings(ui),
            }
        });
    }

    fn render_overview(&self, ui: &mut Ui) {
        card_frame(UiColors::INNER_BG, UiColors::BORDER).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("Market value").color(UiColors::MUTED).size(11.0));
                    ui.label(
                        RichText::new(format!("CHF {}", format_amount(total_market_value(&self.bonds))))
                            .strong()
                            .size(15.0),
                    );
                });
                ui.add_space(24.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new("Avg coupon").color(UiColors::MUTED).size(11.0));
                    ui.label(
                        RichText::new(format!("{:.2}%", average_coupon(&self.bonds)))
                            .strong()
                            .size(15.0),
                    );
                });
                ui.add_space(24.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new("Positions").color(UiColors::MUTED).size(11.0));
                    ui.label(RichText::new(self.bonds.len().to_string()).strong().size(15.0));
                });
            });
        });

        card_frame(UiColors::EXTREME_BG, UiColors::BORDER).show(ui, |ui| {
            Grid::new("bond_table")
                .num_columns(4)
                .spacing(vec2(16.0, 4.0))
                .striped(true)
                .show(ui, |ui| {
                    for header in ["Issuer", "Coupon", "Maturity", "Value"] {
                        ui.label(RichText::new(header).color(UiColors::MUTED).size(11.0));
                    }
                    ui.end_row();
                    for bond in &self.bonds {
                        ui.label(RichText::new(&bond.issuer).size(12.0));
                        ui.label(RichText::new(format!("{:.2}%", bond.coupon_pct)).size(12.0));
                        ui.label(
                            RichText::new(bond.maturity.format("%d.%m.%Y").to_string()).size(12.0),
                        );
                        ui.label(RichText::new(format_amount(bond.market_value)).size(12.0));
                        ui.end_row();
                    }
                });
        });
    }

    fn render_maturities(&self, ui: &mut Ui) {
        let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
        for bond in &self.bonds {
            use chrono::Datelike;
            *by_year.entry(bond.maturity.year()).or_insert(0.0) += bond.market_value;
        }
        let peak = by_year.values().copied().fold(0.0_f64, f64::max).max(1.0);

        card_frame(UiColors::INNER_BG, UiColors::BORDER).show(ui, |ui| {
            for (year, value) in &by_year {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(year.to_string()).size(12.0));
                    bar(ui, (*value / peak) as f32, UiColors::ACCENT);
                    ui.label(RichText::new(format_amount(*value)).color(UiColors::MUTED).size(11.0));
                });
            }
        });
    }

    fn render_ratings(&self, ui: &mut Ui) {
        let mut by_rating: BTreeMap<String, f64> = BTreeMap::new();
        for bond in &self.bonds {
            *by_rating.entry(bond.rating.clone()).or_insert(0.0) += bond.market_value;
        }
        let total = total_market_value(&self.bonds).max(1.0);

        card_frame(UiColors::INNER_BG, UiColors::BORDER).show(ui, |ui| {
            for (rating, value) in &by_rating {
                let share = value / total;
                ui.horizontal(|ui| {
                    ui.label(RichText::new(rating).size(12.0));
                    bar(ui, share as f32, UiColors::GAIN);
                    ui.label(
                        RichText::new(format!("{:.1}%", share * 100.0))
                            .color(UiColors::MUTED)
                            .size(11.0),
                    );
                });
            }
        });
    }

    fn dispatch(&self, event: GestureEvent) {
        if let Some(command) = self.adapter.map(event) {
            if let Err(e) = self.pager.send(command) {
                warn!("Bond view pager unavailable: {}", e);
            }
        }
    }
}

/// Horizontal value bar; `share` is in `[0, 1]` of the available width.
fn bar(ui: &mut Ui, share: f32, color: egui::Color32) {
    let full = (ui.available_width() - 72.0).max(24.0);
    let width = full * share.clamp(0.0, 1.0);
    let (rect, _) = ui.allocate_exact_size(vec2(full, 10.0), Sense::hover());
    let filled = egui::Rect::from_min_size(rect.min, vec2(width, rect.height()));
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(2), UiColors::EXTREME_BG);
    ui.painter()
        .rect_filled(filled, egui::CornerRadius::same(2), color);
}
