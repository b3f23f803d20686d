use eve_interop::AssetHandle;
use eve_math::{Color, Vector2};

use crate::entity::Entity;
use crate::interop::{read_out, with_native};

/// Draws a textured, tinted quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteRenderer {
    entity: Entity,
}

impl_component!(SpriteRenderer, SpriteRenderer);

impl SpriteRenderer {
    #[must_use]
    pub fn texture(&self) -> AssetHandle {
        with_native(|n| n.sprite_renderer_component_get_texture(self.entity.id()))
    }

    pub fn set_texture(&self, texture: AssetHandle) {
        with_native(|n| n.sprite_renderer_component_set_texture(self.entity.id(), texture));
    }

    #[must_use]
    pub fn color(&self) -> Color {
        read_out(|n, out| n.sprite_renderer_component_get_color(self.entity.id(), out))
    }

    pub fn set_color(&self, color: Color) {
        with_native(|n| n.sprite_renderer_component_set_color(self.entity.id(), &color));
    }

    /// How many times the texture repeats across the quad.
    #[must_use]
    pub fn tex_tiling(&self) -> Vector2 {
        read_out(|n, out| n.sprite_renderer_component_get_tex_tiling(self.entity.id(), out))
    }

    pub fn set_tex_tiling(&self, tiling: Vector2) {
        with_native(|n| n.sprite_renderer_component_set_tex_tiling(self.entity.id(), &tiling));
    }

    /// Cell of the texture atlas to draw.
    #[must_use]
    pub fn index(&self) -> u32 {
        with_native(|n| n.sprite_renderer_component_get_index(self.entity.id()))
    }

    pub fn set_index(&self, index: u32) {
        with_native(|n| n.sprite_renderer_component_set_index(self.entity.id(), index));
    }
}
