//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::{GameConfig, Player};
use super::board_view::BoardView;
use super::session::{Outcome, Session};
use super::theme::*;

/// Main Gomoku application
pub struct GomokuApp {
    session: Session,
    board_view: BoardView,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            session: Session::new(config),
            board_view: BoardView::default(),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Restart (N)").clicked() {
                        self.session.restart();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = self.session.game.config();
                    ui.label(format!(
                        "{0}x{0} - {1} in a row",
                        config.board_size(), config.win_length()
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let Some(outcome) = self.session.outcome() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = &self.session.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Clickable label styled as a button
    fn action_button(ui: &mut egui::Ui, text: &str, fill: egui::Color32) -> bool {
        let mut clicked = false;
        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                clicked = ui
                    .add(egui::Label::new(RichText::new(text).size(13.0).strong().color(TEXT_PRIMARY)).sense(egui::Sense::click()))
                    .clicked();
            });
        clicked
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(egui::Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Whose turn it is, or the result once the game is over
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = match self.session.outcome() {
                Some(Outcome::Winner(winner)) => winner,
                _ => self.session.current_player(),
            };
            let (stone_char, accent, stone_color) = stone_style(player);

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(player.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));
                    let color = if self.session.outcome().is_some() { WIN_HIGHLIGHT } else { STATUS_OK };
                    ui.label(RichText::new(self.session.status_text()).size(12.0).color(color));
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            if Self::action_button(ui, "↺ Restart", BUTTON_BG) {
                self.session.restart();
            }

            ui.add_space(8.0);
            ui.label(RichText::new(format!("Move #{}", self.session.move_count())).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Win or draw banner with a Play Again button
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        let (headline, subline) = match outcome {
            Outcome::Winner(player) => (player.name().to_uppercase(), "WINS!"),
            Outcome::Draw => ("DRAW".to_string(), "Board is full"),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);

                    if let Outcome::Winner(player) = outcome {
                        let (symbol, accent, _) = stone_style(player);
                        ui.label(RichText::new(symbol).size(32.0).color(accent));
                    }
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(subline).size(14.0).color(WIN_HIGHLIGHT));

                    ui.add_space(12.0);

                    if Self::action_button(ui, "Play Again", egui::Color32::from_rgb(60, 100, 70)) {
                        self.session.restart();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0).color(STATUS_WARNING));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let clicked = self.board_view.show(
                ui,
                self.session.game.board(),
                self.session.current_player(),
                self.session.last_move,
                self.session.winning_line.as_deref(),
                self.session.game.is_over(),
            );

            if let Some(pos) = clicked {
                self.session.select_cell(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.session.restart();
        }
    }
}

/// Symbol, disc color and symbol color for a player's stone icon
fn stone_style(player: Player) -> (&'static str, egui::Color32, egui::Color32) {
    match player {
        Player::Black => ("●", egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY),
        Player::White => ("○", egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35)),
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
