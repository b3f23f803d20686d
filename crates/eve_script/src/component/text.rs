use eve_interop::AssetHandle;
use eve_math::Color;

use crate::entity::Entity;
use crate::interop::{read_out, with_native};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRenderer {
    entity: Entity,
}

impl_component!(TextRenderer, TextRenderer);

impl TextRenderer {
    #[must_use]
    pub fn text(&self) -> String {
        with_native(|n| n.text_renderer_component_get_text(self.entity.id()))
    }

    pub fn set_text(&self, text: &str) {
        with_native(|n| n.text_renderer_component_set_text(self.entity.id(), text));
    }

    #[must_use]
    pub fn font(&self) -> AssetHandle {
        with_native(|n| n.text_renderer_component_get_font(self.entity.id()))
    }

    pub fn set_font(&self, font: AssetHandle) {
        with_native(|n| n.text_renderer_component_set_font(self.entity.id(), font));
    }

    #[must_use]
    pub fn foreground_color(&self) -> Color {
        read_out(|n, out| n.text_renderer_component_get_fg_color(self.entity.id(), out))
    }

    pub fn set_foreground_color(&self, color: Color) {
        with_native(|n| n.text_renderer_component_set_fg_color(self.entity.id(), &color));
    }

    #[must_use]
    pub fn background_color(&self) -> Color {
        read_out(|n, out| n.text_renderer_component_get_bg_color(self.entity.id(), out))
    }

    pub fn set_background_color(&self, color: Color) {
        with_native(|n| n.text_renderer_component_set_bg_color(self.entity.id(), &color));
    }

    #[must_use]
    pub fn kerning(&self) -> f32 {
        with_native(|n| n.text_renderer_component_get_kerning(self.entity.id()))
    }

    pub fn set_kerning(&self, kerning: f32) {
        with_native(|n| n.text_renderer_component_set_kerning(self.entity.id(), kerning));
    }

    #[must_use]
    pub fn line_spacing(&self) -> f32 {
        with_native(|n| n.text_renderer_component_get_line_spacing(self.entity.id()))
    }

    pub fn set_line_spacing(&self, spacing: f32) {
        with_native(|n| n.text_renderer_component_set_line_spacing(self.entity.id(), spacing));
    }

    /// `true` when the text is laid out in screen space instead of world
    /// space.
    #[must_use]
    pub fn is_screen_space(&self) -> bool {
        with_native(|n| n.text_renderer_component_get_is_screen_space(self.entity.id()))
    }

    pub fn set_screen_space(&self, screen_space: bool) {
        with_native(|n| {
            n.text_renderer_component_set_is_screen_space(self.entity.id(), screen_space)
        });
    }
}
