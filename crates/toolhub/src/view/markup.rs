/// Image shown when a tool logo fails to load.
pub const PLACEHOLDER_LOGO: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/a/ac/No_image_available.svg/480px-No_image_available.svg.png";

/// Description shown for a tool with neither a description nor a known
/// category.
pub const FALLBACK_DESCRIPTION: &str = "AI Tool";

/// Escape text for use in element content or a quoted attribute.
pub fn html_escape(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}
