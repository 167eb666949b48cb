//! Manager and style holdings tables with numeric-column sorting.

use eframe::egui::{vec2, Button, Grid, RichText, Ui};

use crate::data::{
    mock_manager_holdings, mock_style_holdings, significant_styles, sort_managers,
    sort_styles_by_weight, ManagerHolding, ManagerSortKey, StyleHolding,
};
use crate::ui::common::{card_frame, change_color, format_signed_pct, UiColors};

/// Sleeves below this weight are folded out of the style table.
const MIN_STYLE_WEIGHT_PCT: f64 = 0.5;

pub struct HoldingsData {
    managers: Vec<ManagerHolding>,
    styles: Vec<StyleHolding>,
    manager_sort: ManagerSortKey,
}

impl HoldingsData {
    pub fn mock_data() -> Self {
        let mut managers = mock_manager_holdings();
        sort_managers(&mut managers, ManagerSortKey::Aum);
        let mut styles = mock_style_holdings();
        sort_styles_by_weight(&mut styles);
        Self {
            managers,
            styles,
            manager_sort: ManagerSortKey::Aum,
        }
    }

    pub fn render(&mut self, ui: &mut Ui) {
        ui.heading("External managers");
        card_frame(UiColors::INNER_BG, UiColors::BORDER).show(ui, |ui| {
            Grid::new("manager_table")
                .num_columns(4)
                .spacing(vec2(16.0, 4.0))
                .striped(true)
                .show(ui, |ui| {
                    ui.label(RichText::new("Manager").color(UiColors::MUTED).size(11.0));
                    ui.label(RichText::new("Strategy").color(UiColors::MUTED).size(11.0));
                    if self.sort_header(ui, "AUM (m)", ManagerSortKey::Aum) {
                        self.resort(ManagerSortKey::Aum);
                    }
                    if self.sort_header(ui, "YTD", ManagerSortKey::YtdReturn) {
                        self.resort(ManagerSortKey::YtdReturn);
                    }
                    ui.end_row();

                    for row in &self.managers {
                        ui.label(RichText::new(&row.manager).size(12.0));
                        ui.label(RichText::new(&row.strategy).color(UiColors::MUTED).size(12.0));
                        ui.label(RichText::new(format!("{:.1}", row.aum_musd)).size(12.0));
                        ui.label(
                            RichText::new(format_signed_pct(row.ytd_return_pct))
                                .color(change_color(row.ytd_return_pct))
                                .size(12.0),
                        );
                        ui.end_row();
                    }
                });
        });

        ui.add_space(8.0);
        ui.heading("Style exposure");
        card_frame(UiColors::INNER_BG, UiColors::BORDER).show(ui, |ui| {
            Grid::new("style_table")
                .num_columns(3)
                .spacing(vec2(16.0, 4.0))
                .striped(true)
                .show(ui, |ui| {
                    for header in ["Style", "Weight", "vs benchmark"] {
                        ui.label(RichText::new(header).color(UiColors::MUTED).size(11.0));
                    }
                    ui.end_row();
                    for row in significant_styles(&self.styles, MIN_STYLE_WEIGHT_PCT) {
                        ui.label(RichText::new(&row.style).size(12.0));
                        ui.label(RichText::new(format!("{:.1}%", row.weight_pct)).size(12.0));
                        ui.label(
                            RichText::new(format_signed_pct(row.benchmark_delta_pct))
                                .color(change_color(row.benchmark_delta_pct))
                                .size(12.0),
                        );
                        ui.end_row();
                    }
                });
            ui.label(
                RichText::new(format!(
                    "Positions under {:.1}% are not shown",
                    MIN_STYLE_WEIGHT_PCT
                ))
                .color(UiColors::MUTED)
                .size(10.0),
            );
        });
    }

    /// Clickable column header; highlighted while it drives the order.
    fn sort_header(&self, ui: &mut Ui, label: &str, key: ManagerSortKey) -> bool {
        let selected = self.manager_sort == key;
        let text = if selected {
            RichText::new(format!("{} ▼", label)).color(UiColors::ACCENT).size(11.0)
        } else {
            RichText::new(label).color(UiColors::MUTED).size(11.0)
        };
        ui.add(Button::new(text).frame(false)).clicked()
    }

    fn resort(&mut self, key: ManagerSortKey) {
        self.manager_sort = key;
        sort_managers(&mut self.managers, key);
    }
}
