//! Client log levels.

boundary_enum! {
    /// Severity of a script-originated log line.
    #[derive(Default)]
    pub enum LogLevel {
        #[default]
        Trace = 0,
        Info = 1,
        Warning = 2,
        Error = 3,
        Fatal = 4,
    }
}

impl LogLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InteropError;

    #[test]
    fn test_log_level_decodes_raw_values() {
        assert_eq!(LogLevel::try_from(3), Ok(LogLevel::Error));
        assert_eq!(LogLevel::try_from(4), Ok(LogLevel::Fatal));
        assert_eq!(u32::from(LogLevel::Warning), 2);
        assert_eq!(
            LogLevel::try_from(5),
            Err(InteropError::UnknownDiscriminant {
                kind: "LogLevel",
                value: 5,
            })
        );
    }

    #[test]
    fn test_log_level_all_in_order() {
        assert_eq!(LogLevel::ALL.len(), 5);
        assert_eq!(LogLevel::ALL[3], LogLevel::Error);
        assert_eq!(LogLevel::Error.to_string(), "error");
    }
}
