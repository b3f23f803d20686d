//! Component kind selectors.
//!
//! Only the selector crosses the boundary; component internals stay on the
//! native side and are reached through per-property calls.

boundary_enum! {
    /// The closed set of component variants an entity may carry.
    ///
    /// An entity holds at most one component of each kind.
    pub enum ComponentKind {
        Transform = 0,
        Camera = 1,
        Script = 2,
        SpriteRenderer = 3,
        TextRenderer = 4,
        Rigidbody2D = 5,
        BoxCollider2D = 6,
        CircleCollider2D = 7,
        PostProcessVolume = 8,
    }
}

impl ComponentKind {
    /// Short display name, used as a structured logging field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Transform => "Transform",
            Self::Camera => "Camera",
            Self::Script => "Script",
            Self::SpriteRenderer => "SpriteRenderer",
            Self::TextRenderer => "TextRenderer",
            Self::Rigidbody2D => "Rigidbody2D",
            Self::BoxCollider2D => "BoxCollider2D",
            Self::CircleCollider2D => "CircleCollider2D",
            Self::PostProcessVolume => "PostProcessVolume",
        }
    }

    /// Fully qualified name of the managed wrapper type.
    #[must_use]
    pub const fn managed_name(self) -> &'static str {
        match self {
            Self::Transform => "EveEngine.TransformComponent",
            Self::Camera => "EveEngine.CameraComponent",
            Self::Script => "EveEngine.ScriptComponent",
            Self::SpriteRenderer => "EveEngine.SpriteRenderer",
            Self::TextRenderer => "EveEngine.TextRenderer",
            Self::Rigidbody2D => "EveEngine.Rigidbody2D",
            Self::BoxCollider2D => "EveEngine.BoxCollider2D",
            Self::CircleCollider2D => "EveEngine.CircleCollider2D",
            Self::PostProcessVolume => "EveEngine.PostProcessVolume",
        }
    }

    /// Look a kind up by its managed name.
    #[must_use]
    pub fn from_managed_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.managed_name() == name)
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
