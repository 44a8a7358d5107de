use anyhow::anyhow;
use eframe::egui;
use eframe::egui::{Align2, Color32, FontId, Painter, Pos2};
use eframe::run_native;
use life_engine::{Config, Simulation, USAGE};
use std::time::Instant;

const TITLE: &str = "Conway's -- Game of Life";
const LIVE_COLOR: Color32 = Color32::from_rgb(50, 205, 50);
const OVERLAY_FONT_SIZE: f32 = 14.0;
const OVERLAY_LEFT: f32 = 10.0;
const OVERLAY_LINE_HEIGHT: f32 = 20.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config, err) = Config::resolve(&args);
    if let Some(err) = err {
        eprintln!("{err}. Using default values.");
        println!("\n{USAGE}\n");
    }

    let simulation = Simulation::initialize(&config, &mut rand::rng());
    log::info!(
        "grid {}x{} with {} live cells at genesis",
        simulation.grid().width(),
        simulation.grid().height(),
        simulation.grid().live_count()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([config.width as f32, config.height as f32])
            .with_resizable(false),
        ..Default::default()
    };

    run_native(
        TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(GuiOfLife::new(cc, config, simulation)))),
    )
    .map_err(|err| anyhow!("failed to run the window: {err}"))
}

struct GuiOfLife {
    config: Config,
    simulation: Simulation,
    last_frame: Instant,
}

impl GuiOfLife {
    fn new(_cc: &eframe::CreationContext<'_>, config: Config, simulation: Simulation) -> Self {
        Self {
            config,
            simulation,
            last_frame: Instant::now(),
        }
    }

    fn draw_grid(&self, painter: &Painter, origin: Pos2) {
        let cell_size = self.config.cell_size as f32;

        for (x, column) in self.simulation.grid().current().iter().enumerate() {
            for (y, &alive) in column.iter().enumerate() {
                if alive {
                    let min = origin + egui::vec2(x as f32 * cell_size, y as f32 * cell_size);
                    painter.rect_filled(
                        egui::Rect::from_min_size(min, egui::vec2(cell_size, cell_size)),
                        0.0,
                        LIVE_COLOR,
                    );
                }
            }
        }
    }

    fn draw_overlay(&self, painter: &Painter, origin: Pos2, live_count: usize, delta_time: f64) {
        let fps = if delta_time > 0.0 {
            ((1.0 / delta_time) as u64).to_string()
        } else {
            "N/A".to_string()
        };
        let lines = [
            format!("Live Cells: {live_count}"),
            format!("Cell Size: {}px", self.config.cell_size),
            format!("Distribution: {:.2} %", self.config.live_probability() * 100.0),
            format!("FPS: {fps}"),
            format!("Updates/sec: {:.1}", self.simulation.scheduler().updates_per_second()),
        ];

        for (line_index, line) in lines.into_iter().enumerate() {
            let pos = origin + egui::vec2(OVERLAY_LEFT, OVERLAY_LINE_HEIGHT * (line_index as f32 + 0.5));
            painter.text(
                pos,
                Align2::LEFT_TOP,
                line,
                FontId::proportional(OVERLAY_FONT_SIZE),
                Color32::WHITE,
            );
        }
    }
}

impl eframe::App for GuiOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|input| input.key_pressed(egui::Key::R)) {
            self.simulation.reseed(&mut rand::rng());
            log::info!("grid reseeded");
        }

        let now = Instant::now();
        let delta_time = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;

        let (_, live_count) = self.simulation.tick(delta_time);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                let painter = ui.painter();
                self.draw_grid(painter, origin);
                self.draw_overlay(painter, origin, live_count, delta_time);
            });

        ctx.request_repaint();
    }
}
