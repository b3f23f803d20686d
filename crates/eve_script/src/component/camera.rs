use crate::entity::Entity;
use crate::interop::{read_out, with_native};

/// Marks an entity as a viewpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraComponent {
    entity: Entity,
}

impl_component!(CameraComponent, Camera);

impl CameraComponent {
    /// Projection settings of this camera.
    #[must_use]
    pub fn camera(&self) -> OrthographicCamera {
        OrthographicCamera {
            entity: self.entity,
        }
    }

    /// Whether this camera renders the main view.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        read_out(|n, out| n.camera_component_get_is_primary(self.entity.id(), out))
    }

    pub fn set_primary(&self, primary: bool) {
        with_native(|n| n.camera_component_set_is_primary(self.entity.id(), &primary));
    }

    /// Whether the aspect ratio ignores viewport resizes.
    #[must_use]
    pub fn is_fixed_aspect_ratio(&self) -> bool {
        read_out(|n, out| n.camera_component_get_is_fixed_aspect_ratio(self.entity.id(), out))
    }

    pub fn set_fixed_aspect_ratio(&self, fixed: bool) {
        with_native(|n| n.camera_component_set_is_fixed_aspect_ratio(self.entity.id(), &fixed));
    }
}

/// Orthographic projection parameters, reached through
/// [`CameraComponent::camera`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrthographicCamera {
    entity: Entity,
}

impl OrthographicCamera {
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        read_out(|n, out| n.camera_component_camera_get_aspect_ratio(self.entity.id(), out))
    }

    pub fn set_aspect_ratio(&self, aspect_ratio: f32) {
        with_native(|n| n.camera_component_camera_set_aspect_ratio(self.entity.id(), &aspect_ratio));
    }

    #[must_use]
    pub fn zoom_level(&self) -> f32 {
        read_out(|n, out| n.camera_component_camera_get_zoom_level(self.entity.id(), out))
    }

    pub fn set_zoom_level(&self, zoom_level: f32) {
        with_native(|n| n.camera_component_camera_set_zoom_level(self.entity.id(), &zoom_level));
    }

    #[must_use]
    pub fn near_clip(&self) -> f32 {
        read_out(|n, out| n.camera_component_camera_get_near_clip(self.entity.id(), out))
    }

    pub fn set_near_clip(&self, near_clip: f32) {
        with_native(|n| n.camera_component_camera_set_near_clip(self.entity.id(), &near_clip));
    }

    #[must_use]
    pub fn far_clip(&self) -> f32 {
        read_out(|n, out| n.camera_component_camera_get_far_clip(self.entity.id(), out))
    }

    pub fn set_far_clip(&self, far_clip: f32) {
        with_native(|n| n.camera_component_camera_set_far_clip(self.entity.id(), &far_clip));
    }
}
