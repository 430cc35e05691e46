//! Note and category constants and boundary validation.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a note title in characters.
pub const MAX_TITLE_LENGTH: usize = 500;

/// Maximum length of note content in characters.
pub const MAX_CONTENT_LENGTH: usize = 100_000;

/// Maximum length of a category name.
pub const MAX_CATEGORY_NAME_LENGTH: usize = 100;

/// Maximum length of a category color string (e.g. "#6366f1").
pub const MAX_CATEGORY_COLOR_LENGTH: usize = 9;

/// Category label applied when a note is created without one.
pub const DEFAULT_NOTE_CATEGORY: &str = "general";

/// Color applied when a category is created without one.
pub const DEFAULT_CATEGORY_COLOR: &str = "#6366f1";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a note title: non-empty and within the length limit.
pub fn validate_note_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Note title cannot be empty".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Note title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate note content: non-empty and within the length limit.
pub fn validate_note_content(content: &str) -> Result<(), String> {
    if content.is_empty() {
        return Err("Note content cannot be empty".to_string());
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(format!(
            "Note content exceeds maximum length of {MAX_CONTENT_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a category name: non-empty and within the length limit.
pub fn validate_category_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Category name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_CATEGORY_NAME_LENGTH {
        return Err(format!(
            "Category name exceeds maximum length of {MAX_CATEGORY_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a category color string length.
pub fn validate_category_color(color: &str) -> Result<(), String> {
    if color.is_empty() || color.chars().count() > MAX_CATEGORY_COLOR_LENGTH {
        return Err(format!(
            "Category color must be 1-{MAX_CATEGORY_COLOR_LENGTH} characters"
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
