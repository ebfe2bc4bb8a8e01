use std::time::Duration;

use serde::Serialize;

pub const PAGE_EASE: &str = "M0,0 C0.38,0.05 0.48,0.58 0.65,0.82 0.82,1 1,1 1,1";

const DEFAULT_PHASE: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    pub cover: Duration,
    pub reveal: Duration,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            cover: DEFAULT_PHASE,
            reveal: DEFAULT_PHASE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Coverage(f32);

impl Coverage {
    pub const NONE: Coverage = Coverage(0.0);
    pub const FULL: Coverage = Coverage(1.0);

    pub fn covering_inset(self) -> String {
        format!("inset({}% 0% 0% 0%)", percent(1.0 - self.0))
    }

    pub fn revealing_inset(self) -> String {
        format!("inset(0% 0% {}% 0%)", percent(1.0 - self.0))
    }
}

fn percent(fraction: f32) -> f32 {
    (fraction * 10_000.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContentPose {
    pub translate_y_vh: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl ContentPose {
    pub const REST: ContentPose = ContentPose {
        translate_y_vh: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    pub const EXIT: ContentPose = ContentPose {
        translate_y_vh: -20.0,
        scale: 0.85,
        opacity: 0.4,
    };

    pub fn css_transform(&self) -> String {
        format!(
            "translateY({}vh) scale({})",
            self.translate_y_vh, self.scale
        )
    }
}

#[cfg(test)]
#[path = "tests/surface_tests.rs"]
mod tests;
