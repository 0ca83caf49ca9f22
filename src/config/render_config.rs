#[derive(serde::Deserialize, Debug, Clone)]
pub struct RenderConfig {
    /// Fetched once per run; stretched onto the canvas as-is.
    pub background_url: Box<str>,
    pub font_path: Box<str>,
}
