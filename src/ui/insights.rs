//! Generated-insight card stack with auto-advance, hover pause and wheel
//! cycling.
//!
//! Rendering is a pure function of the pager snapshot: each card's
//! translation, scale and opacity derive from its circular offset alone.
//! Offset 0 is the active card, ±1 the visible neighbors, anything else is
//! hidden and never allocates an interaction region.

use eframe::egui::{self, vec2, Align, Layout, Rect, RichText, Sense, Ui, UiBuilder};
use tokio::sync::watch;
use tracing::warn;

use crate::data::InsightCard;
use crate::pager::{GestureAdapter, GestureEvent, PagerCommand, PagerHandle, PagerSnapshot};
use crate::ui::common::{card_frame, UiColors};
use crate::ui::movers::{item_with_offset, render_dots};

pub struct InsightsCarouselData {
    pager: PagerHandle,
    snapshots: watch::Receiver<PagerSnapshot>,
    adapter: GestureAdapter,
    insights: Vec<InsightCard>,
    hovered: bool,
}

impl InsightsCarouselData {
    pub fn new(pager: PagerHandle, insights: Vec<InsightCard>) -> Self {
        let snapshots = pager.subscribe();
        Self {
            pager,
            snapshots,
            // The insights stack is the one carousel that owns the wheel
            adapter: GestureAdapter::new(true),
            insights,
            hovered: false,
        }
    }

    pub fn render(&mut self, ui: &mut Ui) {
        let snapshot = self.snapshots.borrow().clone();

        ui.label(
            RichText::new("Insights for you")
                .strong()
                .size(16.0),
        );
        ui.add_space(4.0);

        let stack_size = vec2(ui.available_width(), 200.0);
        let (stack_rect, stack_response) = ui.allocate_exact_size(stack_size, Sense::hover());

        let hovered = stack_response.hovered();
        if hovered != self.hovered {
            self.hovered = hovered;
            // Hover suspends the auto-advance schedule
            self.send(PagerCommand::SetPaused(hovered));
        }
        if hovered {
            self.handle_wheel(ui);
        }

        // Neighbors first, active card last so it paints and interacts on
        // top of the overlap.
        for offset in [-1isize, 1, 0] {
            if let Some(index) = item_with_offset(&snapshot, self.insights.len(), offset) {
                self.render_card(ui, stack_rect, offset, &self.insights[index]);
            }
        }

        render_dots(ui, &snapshot, |index| {
            self.dispatch(GestureEvent::TapDot(index));
        });
    }

    fn render_card(&self, ui: &mut Ui, stack_rect: Rect, offset: isize, card: &InsightCard) {
        let base = vec2(stack_rect.width() * 0.70, stack_rect.height() - 12.0);
        let (scale, opacity) = if offset == 0 { (1.0, 1.0) } else { (0.85, 0.55) };
        let shift = offset as f32 * base.x * 0.58;
        let card_rect =
            Rect::from_center_size(stack_rect.center() + vec2(shift, 0.0), base * scale);

        let response = ui.allocate_rect(card_rect, Sense::click());
        if response.clicked() {
            self.dispatch(GestureEvent::TapCard { offset });
        }

        let mut card_ui = ui.new_child(
            UiBuilder::new()
                .max_rect(card_rect)
                .layout(Layout::top_down(Align::Min)),
        );
        card_ui.set_opacity(opacity);
        card_frame(UiColors::INNER_BG, UiColors::BORDER).show(&mut card_ui, |ui| {
            ui.set_min_size(card_rect.size() - vec2(20.0, 20.0));
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(card.category.label())
                        .color(UiColors::ACCENT)
                        .size(11.0),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(card.generated_at.format("%a %H:%M").to_string())
                            .color(UiColors::MUTED)
                            .size(11.0),
                    );
                });
            });
            ui.add_space(2.0);
            ui.label(RichText::new(&card.headline).strong().size(14.0));
            if offset == 0 {
                ui.add_space(4.0);
                ui.label(RichText::new(&card.body).color(UiColors::MUTED).size(12.0));
            }
        });
    }

    fn handle_wheel(&self, ui: &mut Ui) {
        // egui reports wheel-down as a negative y delta; the pager contract
        // wants positive to mean advance.
        let delta_y = ui.ctx().input(|i| i.raw_scroll_delta.y);
        if delta_y == 0.0 {
            return;
        }
        if let Some(command) = self.adapter.map(GestureEvent::Wheel { delta_y: -delta_y }) {
            // The carousel owns this scroll; keep it away from any outer
            // scroll surface.
            ui.ctx().input_mut(|i| {
                i.raw_scroll_delta = egui::Vec2::ZERO;
                i.smooth_scroll_delta = egui::Vec2::ZERO;
            });
            self.send(command);
        }
    }

    fn dispatch(&self, event: GestureEvent) {
        if let Some(command) = self.adapter.map(event) {
            self.send(command);
        }
    }

    fn send(&self, command: PagerCommand) {
        if let Err(e) = self.pager.send(command) {
            warn!("Insights pager unavailable: {}", e);
        }
    }
}
