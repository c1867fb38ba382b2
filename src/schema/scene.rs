//! Scene specifications for animation jobs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::AnimationConfig;

/// Complete specification for one render job: what to draw, how to
/// animate it, and where the GIF goes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderJob {
    /// Output parameters (surface size, frame count, interval).
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Scene to render.
    pub scene: SceneSpec,
    /// Output path for the animated GIF.
    pub output: PathBuf,
    /// If true, render all frames into memory first and play them back;
    /// if false, render each frame as it is encoded.
    #[serde(default)]
    pub prerender: bool,
}

/// Predefined animated scenes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneSpec {
    /// Phase-shifting sine curve: frame i draws sin(x + i * phase_step).
    SineWave {
        /// Number of sample points along x.
        samples: usize,
        /// Upper bound of the x domain (lower bound is 0).
        x_max: f64,
        /// Phase advance per frame in radians.
        phase_step: f64,
    },
    /// Random walk accumulating one point per frame.
    RandomWalk {
        /// Random seed. Fixed seed means reproducible output.
        seed: u64,
        /// Half-width of the uniform step distribution.
        step_scale: f64,
    },
}

impl Default for SceneSpec {
    fn default() -> Self {
        SceneSpec::SineWave {
            samples: 200,
            x_max: std::f64::consts::TAU,
            phase_step: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_roundtrip() {
        let job = RenderJob {
            animation: AnimationConfig::default(),
            scene: SceneSpec::RandomWalk {
                seed: 7,
                step_scale: 0.25,
            },
            output: PathBuf::from("random_walk.gif"),
            prerender: false,
        };

        let json = serde_json::to_string(&job).unwrap();
        let parsed: RenderJob = serde_json::from_str(&json).unwrap();

        match parsed.scene {
            SceneSpec::RandomWalk { seed, step_scale } => {
                assert_eq!(seed, 7);
                assert!((step_scale - 0.25).abs() < 1e-12);
            }
            _ => panic!("wrong scene variant"),
        }
        assert_eq!(parsed.output, PathBuf::from("random_walk.gif"));
    }

    #[test]
    fn test_scene_tag_format() {
        let json = r#"{"type":"SineWave","samples":100,"x_max":6.28,"phase_step":0.1}"#;
        let spec: SceneSpec = serde_json::from_str(json).unwrap();
        assert!(matches!(spec, SceneSpec::SineWave { samples: 100, .. }));
    }

    #[test]
    fn test_job_defaults() {
        let json = r#"{"scene":{"type":"SineWave","samples":10,"x_max":6.0,"phase_step":0.1},"output":"out.gif"}"#;
        let job: RenderJob = serde_json::from_str(json).unwrap();
        assert!(!job.prerender);
        assert_eq!(job.animation.width, 640);
    }
}
