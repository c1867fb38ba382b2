//! gifplot CLI - Render animated GIFs from JSON job files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use gifplot::{
    animate, build_scene, AnimationConfig, AnimationError, EncodeStats, FrameSequence,
    FrameSource, RenderJob, SceneSpec,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <job.json>", args[0]);
        eprintln!("       {} --demos [out_dir]", args[0]);
        eprintln!();
        eprintln!("Render an animated GIF from a JSON job file.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  job.json   Path to render job file");
        eprintln!("  --demos    Write the three demo animations");
        eprintln!("             (sine_wave.gif, random_walk.gif, artist_animation.gif)");
        eprintln!("  --example  Print an example job file");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_job();
        return;
    }

    if args[1] == "--demos" {
        let out_dir = args
            .get(2)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        run_demos(&out_dir);
        return;
    }

    let job_path = PathBuf::from(&args[1]);
    let job_str = fs::read_to_string(&job_path).unwrap_or_else(|e| {
        eprintln!("Error reading job file: {}", e);
        std::process::exit(1);
    });

    let job: RenderJob = serde_json::from_str(&job_str).unwrap_or_else(|e| {
        eprintln!("Error parsing job: {}", e);
        std::process::exit(1);
    });

    println!("gifplot");
    println!("=======");
    println!(
        "Surface: {}x{}, {} frames @ {}ms",
        job.animation.width, job.animation.height, job.animation.frames, job.animation.interval_ms
    );
    println!("Output: {}", job.output.display());
    println!();

    let start = Instant::now();
    let stats = run_job(&job).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("Wrote {}: {}", job.output.display(), stats);
    println!("Time: {:.2}s", start.elapsed().as_secs_f32());
}

fn run_job(job: &RenderJob) -> Result<EncodeStats, AnimationError> {
    let mut scene = build_scene(&job.scene);

    let source = if job.prerender {
        let sequence = FrameSequence::prerender(scene.as_mut(), &job.animation)?;
        FrameSource::Prerendered(sequence)
    } else {
        FrameSource::Computed(scene)
    };

    animate(source, &job.animation, &job.output)
}

/// Render the three canonical demo animations into a directory.
fn run_demos(out_dir: &Path) {
    let demos = [
        RenderJob {
            animation: AnimationConfig {
                frames: 60,
                interval_ms: 50,
                ..Default::default()
            },
            scene: SceneSpec::SineWave {
                samples: 200,
                x_max: std::f64::consts::TAU,
                phase_step: 0.1,
            },
            output: out_dir.join("sine_wave.gif"),
            prerender: false,
        },
        RenderJob {
            animation: AnimationConfig {
                frames: 80,
                interval_ms: 50,
                ..Default::default()
            },
            scene: SceneSpec::RandomWalk {
                seed: 42,
                step_scale: 0.25,
            },
            output: out_dir.join("random_walk.gif"),
            prerender: false,
        },
        // Batch-then-play: 10 phase-shifted curves rendered up front.
        RenderJob {
            animation: AnimationConfig {
                frames: 10,
                interval_ms: 200,
                ..Default::default()
            },
            scene: SceneSpec::SineWave {
                samples: 200,
                x_max: std::f64::consts::TAU,
                phase_step: 0.1,
            },
            output: out_dir.join("artist_animation.gif"),
            prerender: true,
        },
    ];

    for job in &demos {
        let start = Instant::now();
        let stats = run_job(job).unwrap_or_else(|e| {
            eprintln!("Error rendering {}: {}", job.output.display(), e);
            std::process::exit(1);
        });
        println!(
            "Wrote {}: {} ({:.2}s)",
            job.output.display(),
            stats,
            start.elapsed().as_secs_f32()
        );
    }
}

fn print_example_job() {
    let job = RenderJob {
        animation: AnimationConfig::default(),
        scene: SceneSpec::default(),
        output: PathBuf::from("sine_wave.gif"),
        prerender: false,
    };

    println!("Example job (job.json):");
    println!("{}", serde_json::to_string_pretty(&job).unwrap());
}
