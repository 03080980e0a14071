//! Scene lifecycle, configuration and demo scene integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use synthia::components::followtarget::FOLLOW_DISTANCE;
use synthia::components::position::Position;
use synthia::components::tween::Interpolation;
use synthia::ecs::component::ComponentKind;
use synthia::ecs::scene::{DEFAULT_FAREWELL, SceneHooks};
use synthia::engine::{Engine, FrameStatus};
use synthia::game::{DemoOptions, DemoScene, build_demo_scene};
use synthia::resources::gameconfig::GameConfig;
use synthia::resources::surface::{DrawCommand, RecordingSurface};
use synthia::vector2::Vector2;

struct Notes(Rc<RefCell<Vec<Option<String>>>>);

impl SceneHooks for Notes {
    fn enter(&mut self, _scene_name: &str, info: Option<&str>) {
        self.0.borrow_mut().push(info.map(str::to_string));
    }
}

#[test]
fn default_exit_greets_next_scene() {
    let notes = Rc::new(RefCell::new(Vec::new()));
    let mut engine = Engine::new(GameConfig::new());
    let first = engine.new_scene("first");
    let second = engine.new_scene("second").with_hooks(Notes(notes.clone()));
    engine.change_scene(first);
    engine.change_scene(second);
    assert_eq!(*notes.borrow(), vec![Some(DEFAULT_FAREWELL.to_string())]);
}

#[test]
fn config_file_drives_engine() {
    let path = std::env::temp_dir().join(format!("synthia-config-{}.ini", std::process::id()));
    std::fs::write(
        &path,
        "[render]\nwidth = 320\nheight = 200\nbackground = black\nshow_fps = false\n\n\
         [motion]\ntime_scale = 2.0\n",
    )
    .unwrap();
    let config = GameConfig::load_or_default(&path);
    std::fs::remove_file(&path).ok();
    assert_eq!(config.render_size(), (320, 200));

    let mut engine = Engine::new(config);
    let scene = engine.new_scene("cfg");
    engine.change_scene(scene);
    let mut surface = RecordingSurface::new(320, 200);
    engine.frame(10.0, &mut surface);
    assert_eq!(engine.time().delta_ms, 20.0);
    assert_eq!(
        surface.commands(),
        &[DrawCommand::Clear {
            color: "black".into()
        }]
    );
}

#[test]
fn config_round_trips_through_file() {
    let path = std::env::temp_dir().join(format!("synthia-save-{}.ini", std::process::id()));
    let mut config = GameConfig::with_path(&path);
    config.window_title = "Orbit".to_string();
    config.elastic_firmness = 6.5;
    config.save_to_file().unwrap();

    let loaded = GameConfig::load_or_default(&path);
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, config);
}

#[test]
fn demo_scene_runs_headless() {
    let mut engine = Engine::new(GameConfig::new());
    let DemoScene { scene, .. } = build_demo_scene(
        &engine,
        &DemoOptions {
            followers: 4,
            seed: 42,
        },
    )
    .unwrap();
    engine.change_scene(scene);
    let input = engine.input();
    input.borrow().set_pointer(Vector2::new(50.0, 50.0));

    let mut surface = RecordingSurface::new(800, 600);
    for frame in 1..=600 {
        let status = engine.frame(frame as f64 * 16.0, &mut surface);
        assert_eq!(status, FrameStatus::Completed);
    }

    // the last frame drew 4 circles and the square
    let circles = surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::StrokeCircle { .. }))
        .count();
    let squares = surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::StrokeRect { .. }))
        .count();
    assert_eq!((circles, squares), (4, 1));

    // every follower has come to rest inside its dead zone
    let scene = engine.scene().unwrap();
    for e in scene.entities().filter(|e| e.has(ComponentKind::FollowTarget)) {
        let p = e.position().unwrap();
        let dead_zone = e.attributes().number(FOLLOW_DISTANCE).unwrap();
        assert!(
            p.distance_to(Vector2::new(50.0, 50.0)) <= dead_zone + 1e-9,
            "follower {} stopped at {p}",
            e.id()
        );
    }
}

#[test]
fn snapshot_serializes_scene() {
    let engine = Engine::new(GameConfig::new());
    let mut scene = engine.new_scene("snap");
    let id = scene.spawn_with([Position::new(3.0, 4.0)]).unwrap();
    scene
        .attach_component(
            id,
            synthia::components::tween::Tweenable::new(Interpolation::EaseIn),
        )
        .unwrap();

    let json = serde_json::to_value(scene.snapshot()).unwrap();
    assert_eq!(json["name"], "snap");
    let entity = &json["entities"][0];
    assert_eq!(entity["id"], id.raw());
    assert_eq!(entity["kinds"], serde_json::json!(["Tweenable", "Position"]));
    assert_eq!(entity["attributes"]["tween_style"]["Style"], "EaseIn");
    assert_eq!(entity["attributes"]["position"]["Vector"]["y"], 4.0);
}

#[test]
fn keys_are_case_insensitive() {
    let mut engine = Engine::new(GameConfig::new());
    let input = engine.input();
    input.borrow_mut().set_key("Space", true);
    assert!(input.borrow().is_key_down("SPACE"));
    assert!(input.borrow().key("space").just_pressed);

    let mut surface = RecordingSurface::new(10, 10);
    engine.frame(16.0, &mut surface);
    assert!(input.borrow().is_key_down("space"));
    assert!(!input.borrow().key("space").just_pressed);
}
