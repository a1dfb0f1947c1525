//! Control strip: sliders, pause/resume, save/load state and CSV export.

use std::time::Instant;

use eframe::egui;
use egui_phosphor::regular::{EXPORT, FLOPPY_DISK, FOLDER_OPEN, PAUSE, PLAY};

use crate::data::export;
use crate::data::signal::SignalProfile;
use crate::persistence;

use super::StreamPlotApp;

impl StreamPlotApp {
    pub(crate) fn render_controls(&mut self, ui: &mut egui::Ui, now: Instant) {
        let mut draft = self.draft.clone();
        let ranges = self.sliders.clone();

        ui.horizontal(|ui| {
            let running = self.session.run_state().is_running();
            let label = if running {
                format!("{PAUSE} Pause")
            } else {
                format!("{PLAY} Resume")
            };
            if ui.button(label).on_hover_text("Pause/resume streaming [Space]").clicked() {
                self.toggle_pause(now);
            }

            egui::ComboBox::from_id_salt("signal_profile")
                .selected_text(draft.profile.label())
                .show_ui(ui, |ui| {
                    for p in [SignalProfile::SineWithNoise, SignalProfile::NoiseOnly] {
                        ui.selectable_value(&mut draft.profile, p, p.label());
                    }
                });

            ui.separator();
            if ui.button(format!("{FLOPPY_DISK} Save state")).clicked() {
                self.save_state_dialog();
            }
            if ui.button(format!("{FOLDER_OPEN} Load state")).clicked() {
                self.load_state_dialog(now);
            }
            if ui.button(format!("{EXPORT} Export CSV")).clicked() {
                self.export_csv_dialog();
            }
        });

        ui.add(
            egui::Slider::new(&mut draft.update_delay_ms, ranges.delay_ms.clone())
                .step_by(ranges.delay_step_ms as f64)
                .suffix(" ms")
                .text("Streaming Delay"),
        );
        if draft.profile.has_sine() {
            ui.add(
                egui::Slider::new(&mut draft.amp_sine, ranges.amplitude.clone())
                    .step_by(ranges.amplitude_step)
                    .text("Sinusoid Amplitude"),
            );
        }
        ui.add(
            egui::Slider::new(&mut draft.amp_rand, ranges.amplitude.clone())
                .step_by(ranges.amplitude_step)
                .text("Random Amplitude"),
        );
        ui.add(
            egui::Slider::new(&mut draft.capacity, ranges.capacity.clone())
                .logarithmic(true)
                .text("Rollover"),
        );

        ui.horizontal(|ui| {
            self.signal_look.render_editor(ui, "Signal");
            ui.separator();
            self.average_look.render_editor(ui, "Average");
            ui.separator();
            let buffer = self.session.buffer();
            match buffer.running_average() {
                Ok(avg) => ui.label(format!(
                    "{} / {} samples, average {avg:.4}",
                    buffer.len(),
                    buffer.capacity()
                )),
                Err(_) => ui.label("no samples"),
            };
        });

        if let Some(status) = &self.status {
            ui.label(egui::RichText::new(status).weak());
        }

        if draft != self.draft {
            tracing::debug!(?draft, "slider moved");
            self.apply_params(draft, now);
        }
    }

    fn save_state_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("streamplot_state.json")
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };
        match persistence::save_state_to_path(&self.capture_state(), &path) {
            Ok(()) => {
                tracing::info!("saved state to {}", path.display());
                self.status = Some(format!("Saved state to {}", path.display()));
            }
            Err(e) => {
                tracing::warn!("failed to save state: {e}");
                self.status = Some(format!("Failed to save state: {e}"));
            }
        }
    }

    fn load_state_dialog(&mut self, now: Instant) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };
        match persistence::load_state_from_path(&path) {
            Ok(state) => {
                self.restore_state(state, now);
                tracing::info!("loaded state from {}", path.display());
                self.status = Some(format!("Loaded state from {}", path.display()));
            }
            Err(e) => {
                tracing::warn!("failed to load state: {e}");
                self.status = Some(format!("Failed to load state: {e}"));
            }
        }
    }

    fn export_csv_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(export::default_export_file_name())
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };
        match export::save_samples_csv(&path, self.session.buffer()) {
            Ok(()) => {
                tracing::info!("exported {} samples to {}", self.session.buffer().len(), path.display());
                self.status = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                tracing::warn!("failed to export CSV: {e}");
                self.status = Some(format!("Failed to export CSV: {e}"));
            }
        }
    }
}
