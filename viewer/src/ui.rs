// ui.rs - egui front end: Start/Stop/Reset, paint mode and timing readouts

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use log::{debug, info};
use std::time::{Duration, Instant};

use life_engine::patterns::{self, PATTERNS};
use life_engine::{HEIGHT, Simulation, WIDTH};

const BOX_SIZE: f32 = 18.0;
const SPACING: f32 = 1.0;
const PITCH: f32 = BOX_SIZE + SPACING;

pub struct LifeApp {
    sim: Simulation,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    random_seed: u32,

    // Telemetry
    started: Instant,
    frames: u64,
    compute_time: Duration,
    draw_time: Duration,
}

impl LifeApp {
    pub fn new(sim: Simulation, update_interval: Duration, random_seed: u32) -> Self {
        Self {
            sim,
            is_running: false,
            last_update: Instant::now(),
            update_interval,
            live_color: Color32::WHITE,
            dead_color: Color32::from_gray(20),
            selected_pattern: 0,
            random_seed,
            started: Instant::now(),
            frames: 0,
            compute_time: Duration::ZERO,
            draw_time: Duration::ZERO,
        }
    }

    fn start(&mut self) {
        self.is_running = true;
        self.last_update = Instant::now();
        debug!("Started at generation {}", self.sim.generation());
    }

    fn stop(&mut self) {
        self.is_running = false;
        debug!("Stopped at generation {}", self.sim.generation());
    }

    fn step(&mut self) {
        let start = Instant::now();
        self.sim.step();
        self.compute_time = start.elapsed();
        self.last_update = Instant::now();
    }

    fn fps(&self) -> u64 {
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        if elapsed_ms == 0 { 0 } else { self.frames * 1000 / elapsed_ms }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.add_enabled(!self.is_running, egui::Button::new("▶ Start")).clicked() {
                self.start();
            }
            if ui.add_enabled(self.is_running, egui::Button::new("⏸ Stop")).clicked() {
                self.stop();
            }
            if ui.add_enabled(!self.is_running, egui::Button::new("⏹ Reset")).clicked() {
                self.sim.reset();
            }

            ui.separator();

            ui.add_enabled_ui(!self.is_running, |ui| {
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });
                if ui.button("Apply Pattern").clicked() {
                    let pattern = &PATTERNS[self.selected_pattern];
                    self.sim.seed_with(|grid| patterns::apply_pattern(grid, pattern));
                    info!("Applied pattern {}", pattern.name);
                }
                if ui.button("🎲 Random").clicked() {
                    self.random_seed = self.random_seed.wrapping_add(1);
                    let seed = self.random_seed;
                    self.sim.seed_with(|grid| patterns::apply_random_pattern(grid, seed));
                }
            });
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut interval_ms = self.update_interval.as_millis() as u64;
            if ui
                .add(egui::Slider::new(&mut interval_ms, 0..=1000).suffix(" ms/gen"))
                .changed()
            {
                self.update_interval = Duration::from_millis(interval_ms);
            }

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });
    }

    fn board(&mut self, ui: &mut egui::Ui) {
        let total_size = Vec2::new(PITCH * WIDTH as f32 - SPACING, PITCH * HEIGHT as f32 - SPACING);
        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click_and_drag());
        let origin = response.rect.min;

        // Paint mode: holding the primary button over a cell brings it to life.
        let primary_down = ui.input(|i| i.pointer.primary_down());
        if !self.is_running && primary_down && response.is_pointer_button_down_on() {
            if let Some((row, col)) = response.interact_pointer_pos().and_then(|pos| cell_at(origin, pos)) {
                self.sim.set_alive(row, col);
            }
        }

        painter.rect_filled(response.rect, 0.0, Color32::BLACK);
        for row in 0..HEIGHT {
            for (col, &alive) in self.sim.grid().row(row).iter().enumerate() {
                let min = origin + Vec2::new(col as f32 * PITCH, row as f32 * PITCH);
                let rect = Rect::from_min_size(min, Vec2::splat(BOX_SIZE));
                let color = if alive { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 1.0, color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }
    }

    fn stats(&self, ui: &mut egui::Ui) {
        let live_cells = self.sim.population();
        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", self.sim.generation()));
            ui.separator();
            ui.label(format!("Live cells: {}", live_cells));
            ui.label(format!("Dead cells: {}", WIDTH * HEIGHT - live_cells));
            ui.separator();
            ui.label(format!("Strategy: {}", self.sim.strategy_kind()));
        });
        ui.horizontal(|ui| {
            ui.label(format!("{} fps", self.fps()));
            ui.separator();
            ui.label(format!("Compute: {} µs", self.compute_time.as_micros()));
            ui.label(format!("Draw: {} µs", self.draw_time.as_micros()));
        });
    }
}

/// Maps a screen position to the `(row, col)` of the cell under it.
///
/// Column comes from the x coordinate and row from the y coordinate.
pub fn cell_at(origin: Pos2, pos: Pos2) -> Option<(usize, usize)> {
    let offset = pos - origin;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let (row, col) = ((offset.y / PITCH) as usize, (offset.x / PITCH) as usize);
    (row < HEIGHT && col < WIDTH).then_some((row, col))
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.step();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");
            self.controls(ui);
            ui.separator();

            let start = Instant::now();
            self.board(ui);
            self.draw_time = start.elapsed();

            ui.separator();
            self.stats(ui);
        });

        self.frames += 1;
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
