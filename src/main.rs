//! Synthia main entry point.
//!
//! Runs the demo scene either headless (default) or in a raylib window
//! (`--windowed`, needs the `raylib` feature).
//!
//! Headless mode drives the engine with synthetic 60 Hz timestamps and a
//! pointer circling the world origin, drawing into a recording surface. With
//! `--dump-json` the final scene state is printed to stdout.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --frames 600 --followers 20 --dump-json
//! cargo run --release --features raylib -- --windowed
//! ```

use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use synthia::engine::{Engine, FrameStatus};
use synthia::error::Result;
use synthia::game::{DemoOptions, DemoScene, build_demo_scene};
use synthia::resources::gameconfig::GameConfig;
use synthia::resources::surface::RecordingSurface;
use synthia::vector2::Vector2;

const HEADLESS_FRAME_MS: f64 = 1000.0 / 60.0;
const POINTER_ORBIT_RADIUS: f64 = 150.0;
const POINTER_ORBIT_PERIOD_MS: f64 = 4000.0;

#[derive(Parser)]
#[command(version, about = "Synthia: a tiny 2D entity-component-system engine")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Number of frames to simulate in headless mode.
    #[arg(long, default_value_t = 300)]
    frames: u64,

    /// Number of pointer-following circles in the demo scene.
    #[arg(long, default_value_t = 12)]
    followers: usize,

    /// Seed for the demo scene layout.
    #[arg(long, default_value_t = 0x5EED)]
    seed: u64,

    /// Print the final scene snapshot as JSON (headless mode).
    #[arg(long)]
    dump_json: bool,

    /// Open a window instead of running headless.
    #[arg(long)]
    windowed: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = GameConfig::load_or_default(&cli.config);
    let mut engine = Engine::new(config);
    let options = DemoOptions {
        followers: cli.followers,
        seed: cli.seed,
    };
    let DemoScene { scene, view } = build_demo_scene(&engine, &options)?;
    engine.change_scene(scene);

    if cli.windowed {
        return run_windowed(&mut engine, view);
    }
    run_headless(&mut engine, cli.frames, cli.dump_json)
}

/// Pointer position at `t_ms` on a circle around the origin.
fn orbit(t_ms: f64) -> Vector2 {
    let angle = t_ms / POINTER_ORBIT_PERIOD_MS * std::f64::consts::TAU;
    Vector2::new(angle.cos(), angle.sin()).scale(POINTER_ORBIT_RADIUS)
}

fn run_headless(engine: &mut Engine, frames: u64, dump_json: bool) -> Result<()> {
    let (width, height) = engine.config().render_size();
    let mut surface = RecordingSurface::new(width, height);
    let input = engine.input();

    let mut aborted = 0u64;
    for frame in 1..=frames {
        let timestamp = frame as f64 * HEADLESS_FRAME_MS;
        input.borrow().set_pointer(orbit(timestamp));
        if engine.frame(timestamp, &mut surface) == FrameStatus::Aborted {
            aborted += 1;
        }
    }
    info!(
        "Ran {frames} headless frames ({aborted} aborted), last frame drew {} commands",
        surface.commands().len()
    );

    if dump_json {
        if let Some(scene) = engine.scene() {
            let json = serde_json::to_string_pretty(&scene.snapshot())?;
            println!("{json}");
        }
    }
    Ok(())
}

#[cfg(feature = "raylib")]
fn run_windowed(engine: &mut Engine, view: synthia::resources::sharedpoint::SharedPoint) -> Result<()> {
    use synthia::resources::raylibsurface::{POINTER_BUTTON_ORDER, RaylibSurface, feed_keys};
    use synthia::systems::render::screen_to_world;

    let config = engine.config().clone();
    let (width, height) = config.render_size();
    let (mut rl, thread) = raylib::init()
        .size(width as i32, height as i32)
        .title(&config.window_title)
        .build();
    rl.set_target_fps(config.target_fps);
    let input = engine.input();

    info!("Opened {width}x{height} window");
    while !rl.window_should_close() {
        let mouse = rl.get_mouse_position();
        let pressed = POINTER_BUTTON_ORDER.map(|b| rl.is_mouse_button_down(b));
        feed_keys(&mut input.borrow_mut(), |k| rl.is_key_down(k));
        let timestamp = rl.get_time() * 1000.0;

        let mut d = rl.begin_drawing(&thread);
        let mut surface = RaylibSurface::new(&mut d, width, height);
        {
            let mut snapshot = input.borrow_mut();
            let screen = Vector2::new(mouse.x as f64, mouse.y as f64);
            snapshot.set_pointer(screen_to_world(screen, view.get(), &surface));
            for (i, down) in pressed.into_iter().enumerate() {
                snapshot.set_button(i, down);
            }
        }
        engine.frame(timestamp, &mut surface);
    }
    Ok(())
}

#[cfg(not(feature = "raylib"))]
fn run_windowed(_engine: &mut Engine, _view: synthia::resources::sharedpoint::SharedPoint) -> Result<()> {
    Err(synthia::error::EngineError::Config(
        "windowed mode needs the `raylib` feature".to_string(),
    ))
}
