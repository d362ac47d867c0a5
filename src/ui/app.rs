//! Main application for the Freedom GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardOverlay, BoardView};
use super::session::GameSession;
use super::theme::*;
use crate::board::{Difficulty, Player};
use crate::config::Config;
use crate::game::Outcome;

/// Main Freedom application
pub struct FreedomApp {
    session: GameSession,
    board_view: BoardView,
    show_debug: bool,
}

impl FreedomApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        Self::from_config(config)
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            session: GameSession::new(config.difficulty, config.depth, config.parallel),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for difficulty in Difficulty::ALL {
                        if ui.button(format!("New Game ({difficulty})")).clicked() {
                            self.session.reset(difficulty);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{} - depth {}",
                        self.session.difficulty(),
                        self.session.depth()
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
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

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.session.outcome() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &outcome);
                }

                if let Some(msg) = self.session.message.clone() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg);
                } else if self.session.has_freedom() && self.session.is_human_turn() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, "Freedom! Play on any empty cell");
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
            ui.label(RichText::new("●○").size(20.0).color(egui::Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("FREEDOM").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Four in a row scores, five does not").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.session.state.current;
            let (accent, glyph_color) = match player {
                Player::One => (ONE_ACCENT, TEXT_PRIMARY),
                Player::Two => (TWO_ACCENT, egui::Color32::from_rgb(30, 30, 35)),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    player.symbol(),
                    egui::FontId::proportional(28.0),
                    glyph_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(player.name()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.session.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.session.is_game_over() {
                        ("Game Over", ACCENT_GREEN)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 1.0 {
                    TIMER_NORMAL
                } else if secs < 3.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = self.session.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.session.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    /// Running scoreboard: one point per run of exactly four
    fn render_score_card(&self, ui: &mut egui::Ui) {
        let scores = self.session.state.scores();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCOREBOARD").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for player in [Player::One, Player::Two] {
                let leading = scores.leader() == Some(player);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(player.symbol()).size(18.0).color(TEXT_SECONDARY));
                    ui.label(RichText::new(player.name()).size(13.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let text = RichText::new(scores.of(player).to_string()).size(16.0).strong();
                        ui.label(if leading { text.color(ACCENT_GREEN) } else { text.color(TEXT_SECONDARY) });
                    });
                });
                ui.add_space(4.0);
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("Undo (U)").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(label.sense(egui::Sense::click())).clicked() {
                        self.session.undo();
                    }
                });

                ui.add_space(4.0);

                btn_frame.show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("Hint (H)").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(label.sense(egui::Sense::click())).clicked() {
                        self.session.request_suggestion();
                    }
                });
            });

            ui.add_space(8.0);
            let last = self
                .session
                .state
                .last_placed
                .map_or_else(|| "-".to_string(), |pos| pos.to_string());
            ui.label(
                RichText::new(format!("Move #{}   Last placed: {}", self.session.moves_played(), last))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(DEBUG_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = &self.session.last_ai_result else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("Depth {}", result.depth)).size(11.0).strong().color(TIMER_NORMAL));
                        ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                        });
                    });
                });

                if let Some(pos) = result.best_move {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("→ {pos}")).size(12.0).strong().color(ACCENT_GREEN));
                }
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: &Outcome) {
        let (headline, accent) = match outcome.winner {
            Some(Player::One) => ("Player 1 wins!", ONE_ACCENT),
            Some(Player::Two) => ("Player 2 wins!", TWO_ACCENT),
            None => ("It's a draw!", TEXT_SECONDARY),
        };
        let symbol = outcome.winner.map_or("●○".to_string(), |p| p.symbol().to_string());

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);

                    ui.label(RichText::new(symbol).size(32.0).color(accent));
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));

                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{} - {}", outcome.scores.one, outcome.scores.two))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(GAME_OVER_BUTTON)
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let label = egui::Label::new(RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY));
                            if ui.add(label.sense(egui::Sense::click())).clicked() {
                                let difficulty = self.session.difficulty();
                                self.session.reset(difficulty);
                            }
                        });
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let targets = self.session.state.legal_targets();
                let overlay = BoardOverlay {
                    targets: &targets,
                    freedom: self.session.has_freedom(),
                    suggested_move: self.session.suggested_move,
                    interactive: self.session.is_human_turn()
                        && !self.session.is_ai_thinking()
                        && !self.session.is_game_over(),
                };

                let clicked = self.board_view.show(ui, &self.session.state, &overlay);

                if let Some(pos) = clicked {
                    if let Err(err) = self.session.try_place_stone(pos) {
                        self.session.message = Some(err.to_string());
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            if i.key_pressed(egui::Key::H) {
                self.session.request_suggestion();
            }

            if i.key_pressed(egui::Key::U) {
                self.session.undo();
            }

            if i.key_pressed(egui::Key::N) {
                let difficulty = self.session.difficulty();
                self.session.reset(difficulty);
            }
        });
    }
}

impl eframe::App for FreedomApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.session.check_ai_result();

        if self.session.is_ai_turn() && !self.session.is_ai_thinking() && !self.session.is_game_over() {
            self.session.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling the worker and ticking the timer
        if self.session.is_ai_thinking() || !self.session.is_game_over() {
            ctx.request_repaint();
        }
    }
}
