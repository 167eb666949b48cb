//! Two-card stock movers carousel embedded in the dashboard.

use eframe::egui::{self, vec2, Align, Button, Layout, RichText, Sense, Stroke, Ui};
use tokio::sync::watch;
use tracing::warn;

use crate::data::StockMover;
use crate::pager::{GestureAdapter, GestureEvent, PagerHandle, PagerSnapshot};
use crate::ui::common::{card_frame, change_color, format_signed_pct, UiColors};

pub struct MoversCarouselData {
    pager: PagerHandle,
    snapshots: watch::Receiver<PagerSnapshot>,
    adapter: GestureAdapter,
    movers: Vec<StockMover>,
}

impl MoversCarouselData {
    pub fn new(pager: PagerHandle, movers: Vec<StockMover>) -> Self {
        let snapshots = pager.subscribe();
        Self {
            pager,
            snapshots,
            // Movers never cycle on wheel input
            adapter: GestureAdapter::new(false),
            movers,
        }
    }

    /// Renders the carousel strip: chevrons, visible cards, dot row.
    pub fn render(&mut self, ui: &mut Ui) {
        let snapshot = self.snapshots.borrow().clone();

        ui.horizontal(|ui| {
            if ui
                .add(Button::new("◀").min_size(vec2(26.0, 72.0)))
                .clicked()
            {
                self.dispatch(GestureEvent::TapLeft);
            }

            let inner_width = ui.available_width() - 40.0;
            // Previous, active, next in strip order; hidden cards are
            // skipped and never allocate an interaction region.
            for offset in [-1isize, 0, 1] {
                if let Some(index) = item_with_offset(&snapshot, self.movers.len(), offset) {
                    self.render_card(ui, &self.movers[index], offset, inner_width);
                }
            }

            if ui
                .add(Button::new("▶").min_size(vec2(26.0, 72.0)))
                .clicked()
            {
                self.dispatch(GestureEvent::TapRight);
            }
        });

        render_dots(ui, &snapshot, |index| {
            self.dispatch(GestureEvent::TapDot(index));
        });
    }

    fn render_card(&self, ui: &mut Ui, mover: &StockMover, offset: isize, strip_width: f32) {
        let active = offset == 0;
        let width = if active {
            strip_width * 0.62
        } else {
            strip_width * 0.30
        };
        let bg = if active {
            UiColors::INNER_BG
        } else {
            UiColors::EXTREME_BG
        };

        let response = ui
            .scope(|ui| {
                card_frame(bg, UiColors::BORDER).show(ui, |ui| {
                    ui.set_width(width - 16.0);
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&mover.symbol).strong().size(15.0));
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(
                                    RichText::new(format_signed_pct(mover.day_change_pct))
                                        .color(change_color(mover.day_change_pct))
                                        .size(13.0),
                                );
                            });
                        });
                        if active {
                            ui.label(RichText::new(&mover.name).color(UiColors::MUTED).size(11.0));
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(format!(
                                        "{} {:.2}",
                                        mover.currency, mover.last_price
                                    ))
                                    .size(14.0),
                                );
                                sparkline(ui, &mover.sparkline, change_color(mover.day_change_pct));
                            });
                        }
                    });
                });
            })
            .response;

        if response.interact(Sense::click()).clicked() {
            self.dispatch(GestureEvent::TapCard { offset });
        }
    }

    fn dispatch(&self, event: GestureEvent) {
        if let Some(command) = self.adapter.map(event) {
            if let Err(e) = self.pager.send(command) {
                warn!("Movers pager unavailable: {}", e);
            }
        }
    }
}

/// Finds the item occupying a given circular offset, if any is visible there.
pub fn item_with_offset(
    snapshot: &PagerSnapshot,
    item_count: usize,
    offset: isize,
) -> Option<usize> {
    (0..item_count.min(snapshot.item_count)).find(|&index| snapshot.offset_of(index) == offset)
}

/// Clickable dot indicator row shared by the carousel views.
pub fn render_dots(ui: &mut Ui, snapshot: &PagerSnapshot, mut on_tap: impl FnMut(usize)) {
    ui.horizontal(|ui| {
        let dot_span = 16.0 * snapshot.item_count as f32;
        ui.add_space(((ui.available_width() - dot_span) / 2.0).max(0.0));
        for index in 0..snapshot.item_count {
            let active = index == snapshot.current_index;
            let (rect, response) = ui.allocate_exact_size(vec2(14.0, 14.0), Sense::click());
            let (radius, color) = if active {
                (4.5, UiColors::ACCENT)
            } else {
                (3.0, UiColors::BORDER)
            };
            ui.painter().circle_filled(rect.center(), radius, color);
            if response.clicked() {
                on_tap(index);
            }
        }
    });
}

/// Tiny intraday polyline, scaled into a fixed-size box.
pub fn sparkline(ui: &mut Ui, points: &[f32], color: egui::Color32) {
    if points.len() < 2 {
        return;
    }
    let (rect, _) = ui.allocate_exact_size(vec2(72.0, 20.0), Sense::hover());
    let min = points.iter().copied().fold(f32::INFINITY, f32::min);
    let max = points.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let span = (max - min).max(f32::EPSILON);

    let step = rect.width() / (points.len() - 1) as f32;
    let line: Vec<egui::Pos2> = points
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = rect.left() + step * i as f32;
            let y = rect.bottom() - (value - min) / span * rect.height();
            egui::pos2(x, y)
        })
        .collect();

    ui.painter().add(egui::Shape::line(line, Stroke::new(1.5, color)));
}
