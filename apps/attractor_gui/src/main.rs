//! Interactive Lorenz attractor viewer: drag the sigma/rho/beta sliders and
//! watch the trajectory recompute and redraw in place.

mod controller;
mod ui;

use anyhow::Context;
use eframe::egui;
use lorenz_core::domain::{InitialCondition, ParameterSet, TimeGrid};
use lorenz_core::LorenzSolver;

use crate::controller::AttractorController;
use crate::ui::app::AttractorApp;

const TIME_SPAN: (f64, f64) = (0.0, 50.0);
const TIME_SAMPLES: usize = 5000;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let grid = TimeGrid::linspace(TIME_SPAN.0, TIME_SPAN.1, TIME_SAMPLES)
        .context("building the sample grid")?;
    let controller = AttractorController::new(
        Box::new(LorenzSolver::default()),
        ParameterSet::default(),
        InitialCondition::default(),
        grid,
    )
    .context("seeding the initial trajectory")?;
    tracing::info!(samples = TIME_SAMPLES, "initial trajectory solved");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Lorenz Attractor")
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Lorenz Attractor",
        options,
        Box::new(|_cc| Ok(Box::new(AttractorApp::new(controller)))),
    )
    .map_err(|err| anyhow::anyhow!("window session ended with error: {err}"))
}
