//! Keyboard and mouse codes.
//!
//! Key values follow the GLFW key numbering used by the native window layer.

boundary_enum! {
    /// A keyboard key.
    pub enum KeyCode {
        Space = 32,
        Apostrophe = 39,
        Comma = 44,
        Minus = 45,
        Period = 46,
        Slash = 47,
        D0 = 48,
        D1 = 49,
        D2 = 50,
        D3 = 51,
        D4 = 52,
        D5 = 53,
        D6 = 54,
        D7 = 55,
        D8 = 56,
        D9 = 57,
        Semicolon = 59,
        Equal = 61,
        A = 65,
        B = 66,
        C = 67,
        D = 68,
        E = 69,
        F = 70,
        G = 71,
        H = 72,
        I = 73,
        J = 74,
        K = 75,
        L = 76,
        M = 77,
        N = 78,
        O = 79,
        P = 80,
        Q = 81,
        R = 82,
        S = 83,
        T = 84,
        U = 85,
        V = 86,
        W = 87,
        X = 88,
        Y = 89,
        Z = 90,
        LeftBracket = 91,
        Backslash = 92,
        RightBracket = 93,
        GraveAccent = 96,
        Escape = 256,
        Enter = 257,
        Tab = 258,
        Backspace = 259,
        Insert = 260,
        Delete = 261,
        Right = 262,
        Left = 263,
        Down = 264,
        Up = 265,
        PageUp = 266,
        PageDown = 267,
        Home = 268,
        End = 269,
        CapsLock = 280,
        F1 = 290,
        F2 = 291,
        F3 = 292,
        F4 = 293,
        F5 = 294,
        F6 = 295,
        F7 = 296,
        F8 = 297,
        F9 = 298,
        F10 = 299,
        F11 = 300,
        F12 = 301,
        LeftShift = 340,
        LeftControl = 341,
        LeftAlt = 342,
        LeftSuper = 343,
        RightShift = 344,
        RightControl = 345,
        RightAlt = 346,
        RightSuper = 347,
    }
}

boundary_enum! {
    /// A mouse button.
    pub enum MouseCode {
        Left = 0,
        Right = 1,
        Middle = 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes_match_glfw() {
        assert_eq!(KeyCode::Space.as_raw(), 32);
        assert_eq!(KeyCode::A.as_raw(), 65);
        assert_eq!(KeyCode::Escape.as_raw(), 256);
        assert_eq!(KeyCode::from_raw(87), Some(KeyCode::W));
        assert_eq!(KeyCode::from_raw(1000), None);
    }
}
