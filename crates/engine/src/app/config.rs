use serde::Deserialize;

use super::camera::DEFAULT_CAMERA_SPEED_PX_PER_SECOND;
use super::input::KeyBindings;
use super::rendering::Viewport;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub camera_speed_px_per_second: f32,
    /// Applied by the frame driver before `update`; the scroller itself
    /// integrates whatever delta it is given.
    pub max_frame_delta_seconds: Option<f32>,
    pub bindings: KeyBindings,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            viewport_width: 512,
            viewport_height: 512,
            camera_speed_px_per_second: DEFAULT_CAMERA_SPEED_PX_PER_SECOND,
            max_frame_delta_seconds: Some(0.25),
            bindings: KeyBindings::default(),
        }
    }
}

impl ViewConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.viewport_width,
            height: self.viewport_height,
        }
    }

    /// Clamps a raw frame delta to `[0, max_frame_delta_seconds]`.
    pub fn clamp_frame_delta(&self, raw_seconds: f32) -> f32 {
        let non_negative = if raw_seconds.is_finite() {
            raw_seconds.max(0.0)
        } else {
            0.0
        };
        match self.max_frame_delta_seconds {
            Some(max) if max > 0.0 => non_negative.min(max),
            _ => non_negative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::input::KeyAction;

    #[test]
    fn defaults_match_reference_viewport() {
        let config = ViewConfig::default();
        assert_eq!(
            config.viewport(),
            Viewport {
                width: 512,
                height: 512
            }
        );
        assert_eq!(config.bindings.action_for("d"), Ok(KeyAction::ToggleDebug));
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config: ViewConfig =
            serde_json::from_str(r#"{ "viewport_width": 320, "camera_speed_px_per_second": 64 }"#)
                .expect("parse");
        assert_eq!(config.viewport_width, 320);
        assert_eq!(config.viewport_height, 512);
        assert_eq!(config.camera_speed_px_per_second, 64.0);
        assert_eq!(config.max_frame_delta_seconds, Some(0.25));
        assert_eq!(config.bindings, KeyBindings::default());
    }

    #[test]
    fn null_max_delta_disables_clamping() {
        let config: ViewConfig =
            serde_json::from_str(r#"{ "max_frame_delta_seconds": null }"#).expect("parse");
        assert_eq!(config.clamp_frame_delta(3.0), 3.0);
    }

    #[test]
    fn clamp_frame_delta_caps_large_frame() {
        let config = ViewConfig::default();
        assert_eq!(config.clamp_frame_delta(0.6), 0.25);
        assert_eq!(config.clamp_frame_delta(0.016), 0.016);
        assert_eq!(config.clamp_frame_delta(-1.0), 0.0);
        assert_eq!(config.clamp_frame_delta(f32::NAN), 0.0);
    }
}
