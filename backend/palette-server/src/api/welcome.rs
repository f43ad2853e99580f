pub const WELCOME_MESSAGE: &str = "Welcome to Palette Picker!";

/// GET /
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}
