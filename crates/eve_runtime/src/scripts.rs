//! Demo script classes.

use anyhow::Context;
use eve_script::prelude::*;

/// Arrow-key controlled body that greets anything entering its trigger.
pub struct Player {
    entity: Entity,
    speed: f32,
}

impl Script for Player {
    const CLASS_NAME: &'static str = "Sample.Player";

    fn new(entity: Entity) -> Self {
        Self {
            entity,
            speed: 10.0,
        }
    }

    fn entity(&self) -> Entity {
        self.entity
    }

    fn on_create(&mut self) -> anyhow::Result<()> {
        let body = self
            .entity
            .get_component::<Rigidbody2D>()
            .context("player needs a Rigidbody2D")?;
        body.apply_force(Vector2::X * 50.0);

        if let Some(collider) = self.entity.get_component::<BoxCollider2D>() {
            collider.set_on_trigger(|other| {
                debug::log_warning(format_args!("Hello, {}", other.name()));
            });
        }

        if let Some(volume) = self.entity.get_component::<PostProcessVolume>() {
            volume.set_vignette(VignetteSettings {
                enabled: true,
                strength: 0.25,
                ..VignetteSettings::default()
            });
        }
        Ok(())
    }

    fn on_update(&mut self, dt: f32) -> anyhow::Result<()> {
        let transform = self
            .entity
            .transform()
            .context("player lost its transform")?;
        let step = self.speed * dt;

        if input::is_key_pressed(KeyCode::Up) {
            transform.translate(Vector3::Y * step);
        }
        if input::is_key_pressed(KeyCode::Down) {
            transform.translate(Vector3::NEG_Y * step);
        }
        if input::is_key_pressed(KeyCode::Left) {
            transform.translate(Vector3::NEG_X * step);
        }
        if input::is_key_pressed(KeyCode::Right) {
            transform.translate(Vector3::X * step);
        }
        Ok(())
    }
}

/// Steps a sprite through its atlas cells, one cell every other frame.
pub struct FxPlayer {
    entity: Entity,
    frame_count: u32,
    anim_index: f32,
    sprite: Option<SpriteRenderer>,
}

impl Script for FxPlayer {
    const CLASS_NAME: &'static str = "Sample.FxPlayer";

    fn new(entity: Entity) -> Self {
        Self {
            entity,
            frame_count: 8,
            anim_index: 0.0,
            sprite: None,
        }
    }

    fn entity(&self) -> Entity {
        self.entity
    }

    fn on_create(&mut self) -> anyhow::Result<()> {
        self.sprite = Some(
            self.entity
                .get_component::<SpriteRenderer>()
                .context("effect needs a SpriteRenderer")?,
        );
        Ok(())
    }

    fn on_update(&mut self, _dt: f32) -> anyhow::Result<()> {
        let Some(sprite) = self.sprite else {
            return Ok(());
        };

        self.anim_index += 0.5;
        if self.anim_index.fract() == 0.0 {
            sprite.set_index(sprite.index() + 1);
        }
        if sprite.index() >= self.frame_count {
            sprite.set_index(0);
            self.anim_index = 0.0;
        }
        Ok(())
    }
}

/// Writes its caption on creation.
pub struct Caption {
    entity: Entity,
}

impl Script for Caption {
    const CLASS_NAME: &'static str = "Sample.Caption";

    fn new(entity: Entity) -> Self {
        Self { entity }
    }

    fn entity(&self) -> Entity {
        self.entity
    }

    fn on_create(&mut self) -> anyhow::Result<()> {
        let text = self
            .entity
            .get_component::<TextRenderer>()
            .context("caption needs a TextRenderer")?;
        text.set_text("Hello, World!");
        text.set_foreground_color(Color::YELLOW);
        Ok(())
    }
}

/// Moves on to the credits scene after two seconds.
pub struct SceneTimer {
    entity: Entity,
    elapsed: f32,
    fired: bool,
}

impl SceneTimer {
    const DELAY: f32 = 2.0;
}

impl Script for SceneTimer {
    const CLASS_NAME: &'static str = "Sample.SceneTimer";

    fn new(entity: Entity) -> Self {
        Self {
            entity,
            elapsed: 0.0,
            fired: false,
        }
    }

    fn entity(&self) -> Entity {
        self.entity
    }

    fn on_update(&mut self, dt: f32) -> anyhow::Result<()> {
        self.elapsed += dt;
        if !self.fired && self.elapsed >= Self::DELAY {
            self.fired = true;
            debug::log_info("sandbox finished, rolling credits");
            scene_manager::load_scene(crate::scenes::CREDITS);
        }
        Ok(())
    }
}

/// Quits the application after one second.
pub struct QuitTimer {
    entity: Entity,
    elapsed: f32,
}

impl Script for QuitTimer {
    const CLASS_NAME: &'static str = "Sample.QuitTimer";

    fn new(entity: Entity) -> Self {
        Self {
            entity,
            elapsed: 0.0,
        }
    }

    fn entity(&self) -> Entity {
        self.entity
    }

    fn on_update(&mut self, dt: f32) -> anyhow::Result<()> {
        self.elapsed += dt;
        if self.elapsed >= 1.0 {
            application::quit();
        }
        Ok(())
    }
}
