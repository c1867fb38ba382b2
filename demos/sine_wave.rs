//! Render an animated sine wave to `sine_wave.gif`.
//!
//! Run with: `cargo run --example sine_wave`

use gifplot::{animate, build_scene, AnimationConfig, AnimationError, FrameSource, SceneSpec};

fn main() -> Result<(), AnimationError> {
    let config = AnimationConfig {
        frames: 60,
        interval_ms: 50,
        ..Default::default()
    };
    let scene = build_scene(&SceneSpec::SineWave {
        samples: 200,
        x_max: std::f64::consts::TAU,
        phase_step: 0.1,
    });

    let stats = animate(FrameSource::Computed(scene), &config, "sine_wave.gif")?;
    println!("Wrote sine_wave.gif: {stats}");
    Ok(())
}
