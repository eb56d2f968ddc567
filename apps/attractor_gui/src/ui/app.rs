//! App shell: the slider panel drives the controller, the central canvas
//! paints the projected trajectory.

use eframe::egui;
use egui::{Align2, Color32, FontId, Sense, Shape, Stroke};

use crate::controller::events::{EditOutcome, ParamId};
use crate::controller::AttractorController;
use crate::ui::projection::OrbitCamera;

const CURVE_COLOR: Color32 = Color32::from_rgb(0x4f, 0x8f, 0xe8);
const CURVE_WIDTH: f32 = 0.8;
const AXIS_TRIAD: [([f64; 3], &str, Color32); 3] = [
    ([1.0, 0.0, 0.0], "X", Color32::from_rgb(0xd0, 0x60, 0x60)),
    ([0.0, 1.0, 0.0], "Y", Color32::from_rgb(0x60, 0xb0, 0x60)),
    ([0.0, 0.0, 1.0], "Z", Color32::from_rgb(0x70, 0x80, 0xd8)),
];

pub struct AttractorApp {
    controller: AttractorController,
    camera: OrbitCamera,
    // Slider-bound copies of the parameters; snapped back to the controller
    // whenever it rejects an edit.
    slider_values: [f64; 3],
}

impl AttractorApp {
    pub fn new(controller: AttractorController) -> Self {
        let slider_values = ParamId::ALL.map(|p| controller.param(p));
        Self {
            controller,
            camera: OrbitCamera::default(),
            slider_values,
        }
    }

    fn parameter_sliders(&mut self, ui: &mut egui::Ui) {
        for (index, param) in ParamId::ALL.into_iter().enumerate() {
            let response = ui.add(
                egui::Slider::new(&mut self.slider_values[index], param.range())
                    .text(param.label()),
            );
            if response.changed() {
                match self
                    .controller
                    .on_parameter_changed(param, self.slider_values[index])
                {
                    EditOutcome::Applied => ui.ctx().request_repaint(),
                    EditOutcome::Rejected => {
                        self.slider_values[index] = self.controller.param(param);
                    }
                    // Keep the slider at the attempted value; the display
                    // already retains the last good trajectory.
                    EditOutcome::SolveFailed => {}
                }
            }
        }
    }

    fn attractor_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        if response.dragged() {
            self.camera.orbit(response.drag_delta());
        }

        let canvas = response.rect;
        let points = self
            .camera
            .project_polyline(&self.controller.display().trajectory, canvas.shrink(16.0));
        if points.len() >= 2 {
            painter.add(Shape::line(points, Stroke::new(CURVE_WIDTH, CURVE_COLOR)));
        }

        self.axis_triad(&painter, canvas);
    }

    fn axis_triad(&self, painter: &egui::Painter, canvas: egui::Rect) {
        let origin = canvas.left_bottom() + egui::vec2(48.0, -48.0);
        for (axis, label, color) in AXIS_TRIAD {
            let dir = self.camera.axis_direction(axis);
            if dir == egui::Vec2::ZERO {
                continue;
            }
            let tip = origin + dir * 30.0;
            painter.line_segment([origin, tip], Stroke::new(1.0, color));
            painter.text(
                tip + dir * 9.0,
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(12.0),
                color,
            );
        }
    }
}

impl eframe::App for AttractorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("parameter_controls").show(ctx, |ui| {
            ui.add_space(6.0);
            self.parameter_sliders(ui);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.controller.display().title.clone());
            self.attractor_canvas(ui);
        });
    }
}
