use eframe::egui;
use tokio::sync::mpsc;

use engine::game::{Direction, PowerUpKind};
use engine::session::{GameOverReport, SessionCommand, StateUpdate};

const BACKGROUND_COLOR: egui::Color32 = egui::Color32::BLACK;
const SNAKE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x00, 0xFF, 0x00);
const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(0xFF, 0x00, 0x00);
const GOLDEN_COLOR: egui::Color32 = egui::Color32::from_rgb(0xFF, 0xD7, 0x00);
const FREEZE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x00, 0xFF, 0xFF);
const EXPLOSIVE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x80, 0x00, 0x80);

fn power_up_color(kind: PowerUpKind) -> egui::Color32 {
    match kind {
        PowerUpKind::Golden => GOLDEN_COLOR,
        PowerUpKind::Freeze => FREEZE_COLOR,
        PowerUpKind::Explosive => EXPLOSIVE_COLOR,
    }
}

pub struct GameUi {
    last_input_direction: Option<Direction>,
}

impl GameUi {
    pub fn new() -> Self {
        Self {
            last_input_direction: None,
        }
    }

    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        update: Option<&StateUpdate>,
        command_tx: &mpsc::UnboundedSender<SessionCommand>,
    ) {
        let Some(state) = update else {
            ui.heading("Starting game...");
            ui.spinner();
            return;
        };

        self.handle_input(ctx, command_tx);

        ui.horizontal(|ui| {
            ui.heading(format!("Score: {}", state.score));
            if state.invincible {
                ui.label(egui::RichText::new("INVINCIBLE").color(GOLDEN_COLOR));
            }
            if state.frozen {
                ui.label(egui::RichText::new("FROZEN").color(FREEZE_COLOR));
            }
        });
        ui.separator();

        let cell = state.cell_size_px;
        let canvas = state.grid_extent as f32 * cell;
        let (response, painter) =
            ui.allocate_painter(egui::Vec2::new(canvas, canvas), egui::Sense::hover());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, BACKGROUND_COLOR);

        painter.rect_filled(cell_rect(origin, state.food.x, state.food.y, cell), 0.0, FOOD_COLOR);

        for power_up in &state.power_ups {
            painter.rect_filled(
                cell_rect(origin, power_up.pos.x, power_up.pos.y, cell),
                0.0,
                power_up_color(power_up.kind),
            );
        }

        for segment in &state.snake {
            painter.rect_filled(cell_rect(origin, segment.x, segment.y, cell), 0.0, SNAKE_COLOR);
        }

        for particle in &state.particles {
            let rect = egui::Rect::from_min_size(
                egui::pos2(origin.x + particle.x, origin.y + particle.y),
                egui::vec2(particle.size, particle.size),
            );
            painter.rect_filled(rect, 0.0, SNAKE_COLOR);
        }
    }

    pub fn render_game_over(&mut self, ui: &mut egui::Ui, report: &GameOverReport) {
        self.last_input_direction = None;

        match report.outcome {
            engine::game::GameOutcome::Won => {
                ui.heading("You win!");
                ui.label("The snake filled the whole grid.");
            }
            engine::game::GameOutcome::Died(_) => {
                ui.heading("Game over!");
            }
        }
        ui.separator();
        ui.label(format!("Final score: {}", report.score));
        ui.label("A new game starts shortly...");
    }

    fn handle_input(&mut self, ctx: &egui::Context, command_tx: &mpsc::UnboundedSender<SessionCommand>) {
        ctx.input(|i| {
            let mut new_direction = None;

            if i.key_pressed(egui::Key::ArrowUp) {
                new_direction = Some(Direction::Up);
            } else if i.key_pressed(egui::Key::ArrowDown) {
                new_direction = Some(Direction::Down);
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                new_direction = Some(Direction::Left);
            } else if i.key_pressed(egui::Key::ArrowRight) {
                new_direction = Some(Direction::Right);
            }

            if let Some(direction) = new_direction
                && Some(direction) != self.last_input_direction
            {
                let _ = command_tx.send(SessionCommand::Turn(direction));
                self.last_input_direction = Some(direction);
            }
        });
    }
}

fn cell_rect(origin: egui::Pos2, x: i32, y: i32, cell: f32) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(origin.x + x as f32 * cell, origin.y + y as f32 * cell),
        egui::vec2(cell, cell),
    )
}
