//! Static relationship-manager contact panel.

use eframe::egui::{Grid, RichText, Ui, vec2};

use crate::data::{mock_advisor, Advisor};
use crate::ui::common::{card_frame, UiColors};

pub struct ContactData {
    advisor: Advisor,
}

impl ContactData {
    pub fn mock_data() -> Self {
        Self {
            advisor: mock_advisor(),
        }
    }

    pub fn render(&mut self, ui: &mut Ui) {
        ui.heading("Your advisor");
        card_frame(UiColors::INNER_BG, UiColors::BORDER).show(ui, |ui| {
            ui.label(RichText::new(&self.advisor.name).strong().size(16.0));
            ui.label(
                RichText::new(&self.advisor.title)
                    .color(UiColors::MUTED)
                    .size(12.0),
            );
            ui.add_space(6.0);

            Grid::new("advisor_contact")
                .num_columns(2)
                .spacing(vec2(16.0, 4.0))
                .show(ui, |ui| {
                    ui.label(RichText::new("Phone").color(UiColors::MUTED).size(11.0));
                    ui.label(RichText::new(&self.advisor.phone).size(12.0));
                    ui.end_row();
                    ui.label(RichText::new("Email").color(UiColors::MUTED).size(11.0));
                    ui.label(RichText::new(&self.advisor.email).size(12.0));
                    ui.end_row();
                    ui.label(RichText::new("Office").color(UiColors::MUTED).size(11.0));
                    ui.label(RichText::new(&self.advisor.office).size(12.0));
                    ui.end_row();
                    ui.label(RichText::new("Languages").color(UiColors::MUTED).size(11.0));
                    ui.label(RichText::new(self.advisor.languages.join(", ")).size(12.0));
                    ui.end_row();
                });
        });

        ui.add_space(4.0);
        ui.label(
            RichText::new("Calls are recorded. Availability Mon-Fri 08:00-18:00 CET.")
                .color(UiColors::MUTED)
                .size(10.0),
        );
    }
}
