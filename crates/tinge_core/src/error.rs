use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid color format: {input:?} (expected #rrggbb)")]
    InvalidColorFormat { input: String },

    #[error("theme name must not be empty")]
    EmptyThemeName,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_format_names_input() {
        let err = CoreError::InvalidColorFormat {
            input: "#fff".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid color format: \"#fff\" (expected #rrggbb)"
        );
    }

    #[test]
    fn empty_theme_name_message() {
        assert_eq!(
            CoreError::EmptyThemeName.to_string(),
            "theme name must not be empty"
        );
    }

    #[test]
    fn json_error_is_transparent() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CoreError::from(json_err);
        assert!(err.to_string().contains("EOF"));
    }
}
