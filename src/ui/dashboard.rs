//! Portfolio overview: summary tiles, allocation bar, movers carousel.

use eframe::egui::{self, vec2, Rect, RichText, Sense, Ui};

use crate::data::{mock_allocation, total_weight, AllocationSlice};
use crate::ui::common::{card_frame, change_color, format_amount, format_signed_pct, UiColors};
use crate::ui::movers::MoversCarouselData;

pub struct DashboardData {
    allocation: Vec<AllocationSlice>,
    total_value: f64,
    ytd_return_pct: f64,
    cash_value: f64,
}

impl DashboardData {
    pub fn mock_data() -> Self {
        Self {
            allocation: mock_allocation(),
            total_value: 2_460_000.0,
            ytd_return_pct: 4.7,
            cash_value: 221_400.0,
        }
    }

    pub fn render(&mut self, ui: &mut Ui, movers: &mut MoversCarouselData) {
        ui.horizontal(|ui| {
            self.tile(ui, "Total value", format!("CHF {}", format_amount(self.total_value)), None);
            self.tile(
                ui,
                "YTD",
                format_signed_pct(self.ytd_return_pct),
                Some(change_color(self.ytd_return_pct)),
            );
            self.tile(ui, "Cash", format!("CHF {}", format_amount(self.cash_value)), None);
        });

        ui.add_space(8.0);
        ui.label(RichText::new("Allocation").strong().size(16.0));
        self.render_allocation(ui);

        ui.add_space(8.0);
        ui.label(RichText::new("Today's movers").strong().size(16.0));
        movers.render(ui);
    }

    fn tile(&self, ui: &mut Ui, caption: &str, value: String, color: Option<egui::Color32>) {
        card_frame(UiColors::INNER_BG, UiColors::BORDER).show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(caption).color(UiColors::MUTED).size(11.0));
                let mut text = RichText::new(value).strong().size(14.0);
                if let Some(color) = color {
                    text = text.color(color);
                }
                ui.label(text);
            });
        });
    }

    /// One stacked horizontal bar; slice widths come straight from weights.
    fn render_allocation(&self, ui: &mut Ui) {
        let total = total_weight(&self.allocation).max(f32::EPSILON);
        let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), 18.0), Sense::hover());

        let mut x = rect.left();
        for (index, slice) in self.allocation.iter().enumerate() {
            let width = rect.width() * slice.weight_pct / total;
            let slice_rect = Rect::from_min_size(egui::pos2(x, rect.top()), vec2(width, rect.height()));
            let color = UiColors::SLICES[index % UiColors::SLICES.len()];
            ui.painter()
                .rect_filled(slice_rect.shrink(0.5), egui::CornerRadius::same(2), color);
            x += width;
        }

        ui.horizontal_wrapped(|ui| {
            for (index, slice) in self.allocation.iter().enumerate() {
                let color = UiColors::SLICES[index % UiColors::SLICES.len()];
                let (dot, _) = ui.allocate_exact_size(vec2(8.0, 8.0), Sense::hover());
                ui.painter().circle_filled(dot.center(), 3.0, color);
                ui.label(
                    RichText::new(format!("{} {:.0}%", slice.label, slice.weight_pct))
                        .color(UiColors::MUTED)
                        .size(11.0),
                );
            }
        });
    }
}
