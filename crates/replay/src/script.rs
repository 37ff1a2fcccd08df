use std::fmt;
use std::time::Duration;

use serde::de::{self, Deserializer};
use serde::Deserialize;

use controls::Key;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid script: {0}")]
    Invalid(String),
}

/// A deterministic input timeline: an ordered list of segments, each holding
/// a fixed key set (and optional per-tick pointer/orientation deltas) for a
/// number of ticks.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub version: u32,
    #[serde(default = "default_fps")]
    pub fps: f32,
    #[serde(default)]
    pub viewport: Option<Viewport>,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Segment {
    /// Keys held for every tick of the segment.
    #[serde(default)]
    pub hold: Vec<Key>,
    /// Segment length: a raw tick count, or a duration string scaled by the
    /// script fps (`duration = "500ms"` at 60 fps is 30 ticks).
    #[serde(deserialize_with = "deserialize_length")]
    pub duration: SegmentLength,
    /// Pointer delta fed to the engine before each tick of the segment.
    #[serde(default)]
    pub pointer: Option<[f32; 2]>,
    /// Orientation rates (yaw, pitch, roll) fed before each tick.
    #[serde(default)]
    pub orientation: Option<[f64; 3]>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentLength {
    Ticks(u32),
    Time(Duration),
}

impl Script {
    pub fn from_toml_str(source: &str) -> Result<Self, ScriptError> {
        let script: Script = toml::from_str(source)?;
        script.validate()?;
        Ok(script)
    }

    fn validate(&self) -> Result<(), ScriptError> {
        if self.version != 1 {
            return Err(ScriptError::Invalid(format!(
                "unsupported script version {}",
                self.version
            )));
        }
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(ScriptError::Invalid(format!(
                "fps must be positive, got {}",
                self.fps
            )));
        }
        Ok(())
    }

    /// Total tick count across all segments.
    pub fn total_ticks(&self) -> u64 {
        self.segments
            .iter()
            .map(|segment| u64::from(segment.ticks(self.fps)))
            .sum()
    }
}

impl Segment {
    /// Resolved segment length in ticks at the given fps.
    pub fn ticks(&self, fps: f32) -> u32 {
        match self.duration {
            SegmentLength::Ticks(ticks) => ticks,
            SegmentLength::Time(duration) => {
                (duration.as_secs_f64() * f64::from(fps)).round() as u32
            }
        }
    }
}

fn default_fps() -> f32 {
    60.0
}

fn deserialize_length<'de, D>(deserializer: D) -> Result<SegmentLength, D::Error>
where
    D: Deserializer<'de>,
{
    struct Visitor;
    impl<'de> de::Visitor<'de> for Visitor {
        type Value = SegmentLength;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a tick count or a human-readable duration string")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            humantime::parse_duration(v)
                .map(SegmentLength::Time)
                .map_err(|err| E::custom(format!("invalid duration '{v}': {err}")))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u32::try_from(v)
                .map(SegmentLength::Ticks)
                .map_err(|_| E::custom(format!("tick count {v} out of range")))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v < 0 {
                Err(E::custom(format!("tick count {v} may not be negative")))
            } else {
                self.visit_u64(v as u64)
            }
        }
    }
    deserializer.deserialize_any(Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_duration_forms() {
        let script = Script::from_toml_str(
            r#"
version = 1
fps = 60

[[segments]]
hold = ["keyi"]
duration = 3

[[segments]]
hold = ["shift", "digit3"]
duration = "1s"
"#,
        )
        .unwrap();

        assert_eq!(script.fps, 60.0);
        assert_eq!(script.segments.len(), 2);
        assert_eq!(script.segments[0].ticks(script.fps), 3);
        assert_eq!(script.segments[1].ticks(script.fps), 60);
        assert_eq!(script.segments[0].hold, vec![Key::KeyI]);
        assert_eq!(script.segments[1].hold, vec![Key::Shift, Key::Digit3]);
        assert_eq!(script.total_ticks(), 63);
    }

    #[test]
    fn fractional_durations_round_to_ticks() {
        let script = Script::from_toml_str(
            r#"
version = 1
fps = 30

[[segments]]
duration = "250ms"
"#,
        )
        .unwrap();
        assert_eq!(script.segments[0].ticks(script.fps), 8);
    }

    #[test]
    fn parses_viewport_and_sensor_deltas() {
        let script = Script::from_toml_str(
            r#"
version = 1

[viewport]
width = 800.0
height = 600.0

[[segments]]
duration = 5
pointer = [12.0, -4.0]
orientation = [30.0, 0.5, -15.0]
"#,
        )
        .unwrap();
        let viewport = script.viewport.unwrap();
        assert_eq!(viewport.width, 800.0);
        assert_eq!(viewport.height, 600.0);
        assert_eq!(script.segments[0].pointer, Some([12.0, -4.0]));
        assert_eq!(script.segments[0].orientation, Some([30.0, 0.5, -15.0]));
    }

    #[test]
    fn rejects_unknown_version() {
        let err = Script::from_toml_str("version = 2\n").unwrap_err();
        assert!(matches!(err, ScriptError::Invalid(_)));
    }

    #[test]
    fn rejects_non_positive_fps() {
        let err = Script::from_toml_str("version = 1\nfps = 0.0\n").unwrap_err();
        assert!(matches!(err, ScriptError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Script::from_toml_str(
            r#"
version = 1

[[segments]]
hold = ["keyq"]
duration = 1
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn rejects_negative_durations() {
        let err = Script::from_toml_str(
            r#"
version = 1

[[segments]]
duration = -4
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }
}
