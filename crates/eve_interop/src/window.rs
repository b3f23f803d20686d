boundary_enum! {
    /// Cursor behaviour of the main window.
    #[derive(Default)]
    pub enum CursorMode {
        #[default]
        Normal = 0,
        Hidden = 1,
        Disabled = 2,
        Captured = 3,
    }
}
