//! State persistence: save and load the stream settings to/from JSON files.
//!
//! This module provides serializable mirror types for UI state that cannot directly
//! derive serde traits (e.g., egui types like Color32, LineStyle).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::signal::SignalParameters;
use crate::data::trace_look::TraceLook;
use crate::error::Result;

// ---------- Serializable mirror types ----------

/// Serializable version of egui_plot::LineStyle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SerLineStyle {
    Solid,
    Dashed { length: f32 },
    Dotted { spacing: f32 },
}

/// Serializable version of TraceLook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceLookSerde {
    pub color_rgba: [u8; 4],
    pub visible: bool,
    pub width: f32,
    pub style: SerLineStyle,
}

impl From<&TraceLook> for TraceLookSerde {
    fn from(l: &TraceLook) -> Self {
        use egui_plot::LineStyle;
        let style = match l.style {
            LineStyle::Solid => SerLineStyle::Solid,
            LineStyle::Dashed { length } => SerLineStyle::Dashed { length },
            LineStyle::Dotted { spacing } => SerLineStyle::Dotted { spacing },
        };
        Self {
            color_rgba: [l.color.r(), l.color.g(), l.color.b(), l.color.a()],
            visible: l.visible,
            width: l.width,
            style,
        }
    }
}

impl TraceLookSerde {
    /// Convert back to a TraceLook.
    pub fn into_look(self) -> TraceLook {
        use egui::Color32;
        use egui_plot::LineStyle;
        let style = match self.style {
            SerLineStyle::Solid => LineStyle::Solid,
            SerLineStyle::Dashed { length } => LineStyle::Dashed { length },
            SerLineStyle::Dotted { spacing } => LineStyle::Dotted { spacing },
        };
        let [r, g, b, a] = self.color_rgba;
        TraceLook {
            color: Color32::from_rgba_unmultiplied(r, g, b, a),
            visible: self.visible,
            width: self.width,
            style,
        }
    }
}

/// Full stream state (for save/load).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamStateSerde {
    pub params: SignalParameters,
    pub paused: bool,
    pub signal_look: TraceLookSerde,
    pub average_look: TraceLookSerde,
}

impl Default for StreamStateSerde {
    fn default() -> Self {
        Self {
            params: SignalParameters::default(),
            paused: false,
            signal_look: TraceLookSerde::from(&TraceLook::signal()),
            average_look: TraceLookSerde::from(&TraceLook::average()),
        }
    }
}

// ---------- Public API ----------

/// Serialize the stream state as pretty JSON.
pub fn state_to_json(state: &StreamStateSerde) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Deserialize stream state from JSON. The parameters are validated.
pub fn state_from_json(json: &str) -> Result<StreamStateSerde> {
    let state: StreamStateSerde = serde_json::from_str(json)?;
    state.params.validate()?;
    Ok(state)
}

/// Save the stream state to a JSON file at the given path.
pub fn save_state_to_path(state: &StreamStateSerde, path: &Path) -> Result<()> {
    let txt = state_to_json(state)?;
    std::fs::write(path, txt)?;
    Ok(())
}

/// Load the stream state from a JSON file at the given path.
pub fn load_state_from_path(path: &Path) -> Result<StreamStateSerde> {
    let txt = std::fs::read_to_string(path)?;
    state_from_json(&txt)
}
