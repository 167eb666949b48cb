//! # Wealthdeck User Interface Module
//!
//! Implements the complete presentation layer for the simulated
//! wealth-management dashboard. The UI is the only consumer of the pager
//! subsystem: each carousel view holds a handle to its engine, sends
//! commands in response to pointer input, and repaints every frame from
//! the latest published snapshot.
//!
//! ## Layout Architecture
//!
//! Every screen shares a three-panel layout:
//! - **Top Panel**: navigation buttons for the primary screens
//! - **Central Panel**: screen-specific content based on current state
//! - **Bottom Panel**: static status line (as-of date, simulation notice)
//!
//! ## State Management Philosophy
//!
//! The UI keeps minimal state of its own: the active screen, per-screen
//! display structs, and the immutable mock dataset handed over at startup.
//! Carousel indices live exclusively in the pager engines; the rendering
//! here is a pure function of their snapshots, so a rejected transition
//! simply means nothing animates on the next frame.

pub mod bonds;
pub mod common;
pub mod contact;
pub mod dashboard;
pub mod holdings;
pub mod insights;
pub mod movers;

use eframe::egui::{self, Button, Vec2};
use std::time::Duration;

use crate::config::AppConfig;
use crate::data::{BondHolding, InsightCard, StockMover};
use crate::pager::PagerHandle;

use self::bonds::BondsData;
use self::common::{ScreenState, UiColors};
use self::contact::ContactData;
use self::dashboard::DashboardData;
use self::holdings::HoldingsData;
use self::insights::InsightsCarouselData;
use self::movers::MoversCarouselData;

const SCREENS: [ScreenState; 5] = [
    ScreenState::Dashboard,
    ScreenState::Holdings,
    ScreenState::Bonds,
    ScreenState::Insights,
    ScreenState::Contact,
];

/// Central UI component owning all screen state and pager handles.
pub struct WealthdeckUI {
    /// Current active screen for the navigation state machine
    screen: ScreenState,

    /// Portfolio overview with summary tiles and allocation chart
    dashboard: DashboardData,

    /// Movers carousel embedded in the dashboard
    movers: MoversCarouselData,

    /// Manager and style holdings tables
    holdings: HoldingsData,

    /// Bond section with its view switcher
    bonds: BondsData,

    /// Generated-insight card stack
    insights: InsightsCarouselData,

    /// Relationship-manager contact panel
    contact: ContactData,

    /// Repaint interval derived from the configured fps
    frame_budget: Duration,
}

impl WealthdeckUI {
    /// Wires the screens to their pager handles and mock data.
    ///
    /// The pager engines are spawned by `main` before the UI exists; the
    /// UI only ever talks to them through the handles, and dropping the
    /// UI (window close) drops the handles, which shuts the engines down.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: &AppConfig,
        movers_pager: PagerHandle,
        insights_pager: PagerHandle,
        bonds_pager: PagerHandle,
        movers: Vec<StockMover>,
        insights: Vec<InsightCard>,
        bonds: Vec<BondHolding>,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);
        WealthdeckUI {
            screen: ScreenState::Dashboard,
            dashboard: DashboardData::mock_data(),
            movers: MoversCarouselData::new(movers_pager, movers),
            holdings: HoldingsData::mock_data(),
            bonds: BondsData::new(bonds_pager, bonds),
            insights: InsightsCarouselData::new(insights_pager, insights),
            contact: ContactData::mock_data(),
            frame_budget: config.frame_budget(),
        }
    }
}

impl eframe::App for WealthdeckUI {
    /// Per-frame update: navigation, screen dispatch, status line.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.ctx().request_repaint_after(self.frame_budget);
            let width = ui.available_width() - 60.0;

            // Top navigation panel with one button per screen
            egui::TopBottomPanel::top("top_panel")
                .show_separator_line(false)
                .show_inside(ui, |ui| {
                    ui.horizontal_centered(|ui| {
                        for screen in SCREENS {
                            let button = Button::new(screen.to_string()).min_size(Vec2 {
                                x: width / SCREENS.len() as f32,
                                y: 20.0,
                            });
                            if ui.add(button).clicked() {
                                self.screen = screen;
                            }
                        }
                    });
                });

            // Central content panel with screen-specific content
            egui::CentralPanel::default().show_inside(ui, |ui| match self.screen {
                ScreenState::Dashboard => self.dashboard.render(ui, &mut self.movers),
                ScreenState::Holdings => self.holdings.render(ui),
                ScreenState::Bonds => self.bonds.render(ui),
                ScreenState::Insights => self.insights.render(ui),
                ScreenState::Contact => self.contact.render(ui),
            });

            // Bottom status panel
            egui::TopBottomPanel::bottom("bottom_panel")
                .show_separator_line(false)
                .show_inside(ui, |ui| {
                    ui.horizontal_centered(|ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "As of {}",
                                chrono::Local::now().format("%d.%m.%Y")
                            ))
                            .color(UiColors::MUTED)
                            .size(11.0),
                        );
                        ui.label(
                            egui::RichText::new("Simulated data, not investment advice")
                                .color(UiColors::MUTED)
                                .size(11.0),
                        );
                    });
                });
        });
    }
}
