//! Main application for the omok GUI

use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::warn;

use super::board_view::BoardView;
use super::theme::*;
use crate::{GameStatus, MoveOutcome, OmokGame, Pos, Stone};

/// Hotseat omok window
pub struct OmokApp {
    game: OmokGame,
    board_view: BoardView,
    /// Stones to highlight once someone has won
    winning_line: Option<Vec<Pos>>,
    message: Option<String>,
}

impl OmokApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, game: OmokGame) -> Self {
        Self::from_game(game)
    }

    pub fn from_game(game: OmokGame) -> Self {
        Self {
            game,
            board_view: BoardView::default(),
            winning_line: None,
            message: None,
        }
    }

    pub fn game(&self) -> &OmokGame {
        &self.game
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    /// Play a clicked cell and record what the side panel should show
    pub fn handle_click(&mut self, pos: Pos) {
        match self.game.play_turn(pos) {
            Ok(MoveOutcome::Win(player)) => {
                self.winning_line = self.game.board().winning_line(pos, player.stone).ok().flatten();
                self.message = None;
            }
            Ok(_) => self.message = None,
            Err(e) => {
                warn!(%pos, error = %e, "move rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.winning_line = None;
        self.message = None;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = self.game.board().size();
                    ui.label(format!("Hotseat - {}x{}", size, size));
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
                self.render_moves_card(ui);

                if self.game.is_finished() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("OMOK").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.game.current_player();
            let is_black = player.stone == Stone::Black;
            let (stone_char, accent, glyph_color) = if is_black {
                ("●", egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY)
            } else {
                ("○", egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35))
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    glyph_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(&player.name).size(18.0).strong().color(TEXT_PRIMARY));
                    let (status, color) = if self.game.is_finished() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else {
                        ("To move", STATUS_OK)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    fn render_moves_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.game.move_count()))
                    .size(14.0)
                    .color(TEXT_SECONDARY),
            );
            if let Some(pos) = self.game.last_move() {
                ui.label(RichText::new(format!("Last: {}", pos)).size(11.0).color(TEXT_MUTED));
            }
            ui.add_space(8.0);
            if ui.button("New Game").clicked() {
                self.new_game();
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let (headline, detail) = match self.game.status() {
            GameStatus::Won(player) => (
                format!("{} ({}) WINS!", player.name, player.stone),
                "by five in a row".to_string(),
            ),
            GameStatus::Draw => ("DRAW".to_string(), "the board is full".to_string()),
            GameStatus::InProgress => return,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);
                    if ui.button("Play Again").clicked() {
                        self.new_game();
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
                    ui.label(RichText::new("⚠").size(14.0).color(STATUS_WARN));
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
                self.game.board(),
                self.game.current_player().stone,
                self.game.last_move(),
                self.winning_line.as_deref(),
                self.game.is_finished(),
            );

            if let Some(pos) = clicked {
                self.handle_click(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.new_game();
        }
    }
}

impl eframe::App for OmokApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
