mod common;

use eve_interop::LogLevel;
use eve_script::prelude::*;

use common::{harness, messages};

#[test]
fn test_debug_log_levels_reach_engine() {
    let h = harness();
    debug::log("trace line");
    debug::log_info(format_args!("{} entities", 3));
    debug::log_warning("low health");
    debug::log_error("missing texture");
    debug::log_fatal("unrecoverable");

    let levels: Vec<_> = h.engine.recent_logs().iter().map(|r| r.level).collect();
    assert_eq!(
        levels,
        [
            LogLevel::Trace,
            LogLevel::Info,
            LogLevel::Warning,
            LogLevel::Error,
            LogLevel::Fatal
        ]
    );
    assert_eq!(messages(&h.engine)[1], "3 entities");
}

#[test]
fn test_keyboard_and_mouse_input() {
    let h = harness();
    h.engine.press_key(KeyCode::W);
    h.engine.press_mouse(MouseCode::Left);
    assert!(input::is_key_pressed(KeyCode::W));
    assert!(!input::is_key_pressed(KeyCode::S));
    assert!(input::is_mouse_pressed(MouseCode::Left));

    h.engine.release_key(KeyCode::W);
    h.engine.release_mouse(MouseCode::Left);
    assert!(input::is_key_released(KeyCode::W));
    assert!(input::is_mouse_released(MouseCode::Left));

    h.engine.step();
    assert!(!input::is_key_released(KeyCode::W));
    assert!(!input::is_mouse_released(MouseCode::Left));
}

#[test]
fn test_mouse_position_and_scroll() {
    let h = harness();
    h.engine.set_mouse_position(Vector2::new(320.0, 240.0));
    h.engine.scroll(Vector2::new(0.0, 1.0));
    h.engine.scroll(Vector2::new(0.0, -3.0));

    assert_eq!(input::mouse_position(), Vector2::new(320.0, 240.0));
    assert_eq!(input::scroll_offset(), Vector2::new(0.0, -2.0));

    h.engine.step();
    assert_eq!(input::scroll_offset(), Vector2::ZERO);
    assert_eq!(input::mouse_position(), Vector2::new(320.0, 240.0));
}

#[test]
fn test_asset_load_and_unload() {
    let h = harness();
    let font = Asset::load("fonts/mono.ttf", AssetType::Font);
    assert!(font.handle().is_valid());
    assert_eq!(font.path(), "fonts/mono.ttf");

    let entry = h.engine.asset(font.handle()).unwrap();
    assert_eq!(entry.kind, AssetType::Font);

    let handle = font.handle();
    font.unload();
    assert!(h.engine.asset(handle).is_none());

    assert!(!asset::load("nothing", AssetType::None).is_valid());
}

#[test]
fn test_texture_shares_handle_per_path() {
    let h = harness();
    let a = Texture2D::load("textures/ship.png");
    let b = Texture2D::load("textures/ship.png");
    assert_eq!(a.handle(), b.handle());
    assert_eq!(a.metadata(), TextureMetadata::default());
    assert_eq!(h.engine.asset(a.handle()).unwrap().kind, AssetType::Texture);
}

#[test]
fn test_same_path_loads_separately_per_type() {
    let h = harness();
    let texture = asset::load("shared.bin", AssetType::Texture);
    let font = asset::load("shared.bin", AssetType::Font);

    assert_ne!(texture, font);
    assert_eq!(h.engine.asset(font).unwrap().kind, AssetType::Font);
    assert_eq!(h.engine.asset(texture).unwrap().kind, AssetType::Texture);
}

#[test]
fn test_cursor_mode_and_quit() {
    let h = harness();
    assert_eq!(window::cursor_mode(), CursorMode::Normal);
    window::set_cursor_mode(CursorMode::Captured);
    assert_eq!(window::cursor_mode(), CursorMode::Captured);

    assert!(!h.engine.quit_requested());
    application::quit();
    assert!(h.engine.quit_requested());
}

#[test]
fn test_scene_load_waits_for_frame_end() {
    let h = harness();
    Entity::instantiate::<Entity>("old", Spawn::new()).unwrap();

    scene_manager::load_scene("scenes/menu.escn");
    assert_eq!(h.engine.pending_scene().as_deref(), Some("scenes/menu.escn"));
    assert!(Entity::find_by_name("old").is_valid());

    h.engine.step();
    assert!(Entity::find_by_name("old").is_none());
    assert_eq!(h.engine.active_scene().as_deref(), Some("scenes/menu.escn"));
}
