use eve_interop::{
    BlurSettings, ChromaticAberrationSettings, GrayScaleSettings, SharpenSettings,
    VignetteSettings,
};

use crate::entity::Entity;
use crate::interop::{read_out, with_native};

/// Screen-space effects applied while the camera is inside the volume, or
/// always when the volume is global.
///
/// Settings are read and written as whole blocks:
///
/// ```ignore
/// volume.set_vignette(VignetteSettings {
///     enabled: true,
///     strength: 0.25,
///     ..Default::default()
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostProcessVolume {
    entity: Entity,
}

impl_component!(PostProcessVolume, PostProcessVolume);

impl PostProcessVolume {
    #[must_use]
    pub fn is_global(&self) -> bool {
        with_native(|n| n.post_process_volume_component_get_is_global(self.entity.id()))
    }

    pub fn set_global(&self, global: bool) {
        with_native(|n| n.post_process_volume_component_set_is_global(self.entity.id(), global));
    }

    #[must_use]
    pub fn gray_scale(&self) -> GrayScaleSettings {
        read_out(|n, out| n.post_process_volume_component_get_gray_scale(self.entity.id(), out))
    }

    pub fn set_gray_scale(&self, settings: GrayScaleSettings) {
        with_native(|n| {
            n.post_process_volume_component_set_gray_scale(self.entity.id(), &settings)
        });
    }

    #[must_use]
    pub fn chromatic_aberration(&self) -> ChromaticAberrationSettings {
        read_out(|n, out| {
            n.post_process_volume_component_get_chromatic_aberration(self.entity.id(), out)
        })
    }

    pub fn set_chromatic_aberration(&self, settings: ChromaticAberrationSettings) {
        with_native(|n| {
            n.post_process_volume_component_set_chromatic_aberration(self.entity.id(), &settings)
        });
    }

    #[must_use]
    pub fn blur(&self) -> BlurSettings {
        read_out(|n, out| n.post_process_volume_component_get_blur(self.entity.id(), out))
    }

    pub fn set_blur(&self, settings: BlurSettings) {
        with_native(|n| n.post_process_volume_component_set_blur(self.entity.id(), &settings));
    }

    #[must_use]
    pub fn sharpen(&self) -> SharpenSettings {
        read_out(|n, out| n.post_process_volume_component_get_sharpen(self.entity.id(), out))
    }

    pub fn set_sharpen(&self, settings: SharpenSettings) {
        with_native(|n| n.post_process_volume_component_set_sharpen(self.entity.id(), &settings));
    }

    #[must_use]
    pub fn vignette(&self) -> VignetteSettings {
        read_out(|n, out| n.post_process_volume_component_get_vignette(self.entity.id(), out))
    }

    pub fn set_vignette(&self, settings: VignetteSettings) {
        with_native(|n| n.post_process_volume_component_set_vignette(self.entity.id(), &settings));
    }
}
