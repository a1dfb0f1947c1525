use eframe::egui;
use egui_plot::{Legend, Line, Plot};

use super::StreamPlotApp;

impl StreamPlotApp {
    /// Draw the signal and its running average against x.
    pub(crate) fn render_plot(&self, ui: &mut egui::Ui) {
        let buffer = self.session.buffer();
        let series = [
            ("signal", &self.signal_look, buffer.y_points()),
            ("average", &self.average_look, buffer.avg_points()),
        ];
        Plot::new("streamplot_plot")
            .legend(Legend::default())
            .x_axis_label("x")
            .show(ui, |plot_ui| {
                for (name, look, points) in series {
                    if !look.visible {
                        continue;
                    }
                    let line = Line::new(name, points)
                        .color(look.color)
                        .width(look.width.max(0.1))
                        .style(look.style);
                    plot_ui.line(line);
                }
            });
    }
}
