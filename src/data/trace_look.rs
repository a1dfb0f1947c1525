//! TraceLook: visual styling for the signal and average lines.

use eframe::egui;
use egui_plot::LineStyle;

/// The visual presentation of a line (color, visibility, width, style).
#[derive(Debug, Clone, PartialEq)]
pub struct TraceLook {
    pub color: egui::Color32,
    pub visible: bool,
    pub width: f32,
    pub style: LineStyle,
}

impl Default for TraceLook {
    fn default() -> Self {
        Self {
            color: egui::Color32::GRAY,
            visible: true,
            width: 1.5,
            style: LineStyle::Solid,
        }
    }
}

impl TraceLook {
    /// Look of the raw signal line.
    pub fn signal() -> Self {
        Self {
            color: egui::Color32::from_rgb(31, 119, 180),
            ..Default::default()
        }
    }

    /// Look of the running-average line.
    pub fn average() -> Self {
        Self {
            color: egui::Color32::from_rgb(214, 39, 40),
            width: 2.0,
            ..Default::default()
        }
    }

    /// Render an inline editor row: visibility, color, width.
    pub(crate) fn render_editor(&mut self, ui: &mut egui::Ui, label: &str) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            changed |= ui.checkbox(&mut self.visible, label).changed();
            changed |= ui.color_edit_button_srgba(&mut self.color).changed();
            changed |= ui
                .add(
                    egui::DragValue::new(&mut self.width)
                        .range(0.1..=10.0)
                        .speed(0.1)
                        .suffix(" px"),
                )
                .changed();
        });
        changed
    }
}
