use eframe::egui;
use tokio::sync::mpsc;

use engine::session::SessionCommand;

use crate::state::{AppState, SharedState};
use super::game_ui::GameUi;

pub struct ArcadeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<SessionCommand>,
    game_ui: GameUi,
}

impl ArcadeApp {
    pub fn new(shared_state: SharedState, command_tx: mpsc::UnboundedSender<SessionCommand>) -> Self {
        Self {
            shared_state,
            command_tx,
            game_ui: GameUi::new(),
        }
    }
}

impl eframe::App for ArcadeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            let _ = self.command_tx.send(SessionCommand::Quit);
        }

        let state = self.shared_state.get_state();
        egui::CentralPanel::default().show(ctx, |ui| match &state {
            AppState::Playing { update } => {
                self.game_ui
                    .render_game(ui, ctx, update.as_ref(), &self.command_tx);
            }
            AppState::GameOver { report } => {
                self.game_ui.render_game_over(ui, report);
            }
        });

        ctx.request_repaint();
    }
}
