use error_stack::{report, ResultExt};
use indicatif::ProgressBar;

use crate::{
    cli::progress::{finish_progress, new_progress, ProgressBarExt},
    config::app_config::CONFIG,
    quotes::{self, SelectedQuote},
    render::{
        layout,
        renderer::{
            QuoteImageRenderer, RenderError, CANVAS_HEIGHT, CANVAS_WIDTH, LINE_HEIGHT,
        },
    },
    webhook::DiscordWebhook,
};

use super::routine::{Routine, RoutineError, RoutineResult};

/// Delivery variant that renders the quote onto a background image and posts
/// the PNG.
pub struct ImageQuoteRoutine;

impl ImageQuoteRoutine {
    async fn fetch_background(&self) -> error_stack::Result<Vec<u8>, RoutineError> {
        let response = reqwest::get(CONFIG.render.background_url.as_ref())
            .await
            .change_context_lazy(|| {
                RoutineError::routine_failure("could not fetch the background image")
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(report!(RoutineError::routine_failure(format!(
                "background image request returned status {status}"
            ))));
        }

        let bytes = response.bytes().await.change_context_lazy(|| {
            RoutineError::routine_failure("could not read the background image body")
        })?;
        Ok(bytes.to_vec())
    }

    fn render_quote(
        &self,
        background: &[u8],
        selected: &SelectedQuote,
    ) -> Result<Vec<u8>, RenderError> {
        let renderer = QuoteImageRenderer::from_font_file(CONFIG.render.font_path.as_ref())?;

        let lines = layout::wrap(&selected.quote.text, renderer.max_text_width(), |line| {
            renderer.quote_width(line)
        });
        let quote_layout = layout::layout(
            &lines,
            LINE_HEIGHT,
            CANVAS_WIDTH as f32,
            CANVAS_HEIGHT as f32,
            |line| renderer.quote_width(line),
        );
        let attribution = layout::attribution(
            &selected.name,
            selected.quote.date.as_deref(),
            quote_layout.final_y,
            LINE_HEIGHT,
            CANVAS_WIDTH as f32,
            |line| renderer.attribution_width(line),
        );

        renderer.render(background, &quote_layout, &attribution)
    }
}

#[async_trait::async_trait]
impl Routine for ImageQuoteRoutine {
    fn name(&self) -> &str {
        "ImageQuote"
    }

    async fn run(&self) -> RoutineResult {
        log::info!("Running ImageQuoteRoutine");

        let progress = new_progress(ProgressBar::new_spinner());

        progress.trace("Quote: ☁️  Fetching the quotes spreadsheet");
        let sheet = super::fetch_quote_sheet().await?;

        progress.trace("Quote: 🎲 Picking a random quote");
        let selected = quotes::pick_quote(&sheet, &CONFIG.quotes.names, &mut rand::thread_rng())
            .change_context_lazy(|| RoutineError::routine_failure("no quote could be selected"))?;

        progress.trace("Quote: 🖼️  Fetching the background image");
        let background = self.fetch_background().await?;

        progress.trace("Quote: ✏️  Rendering the quote image");
        let image = self
            .render_quote(&background, &selected)
            .change_context_lazy(|| RoutineError::routine_failure("image rendering failed"))?;

        progress.trace("Quote: 📨 Posting the image to the webhook");
        DiscordWebhook::new(CONFIG.webhook.clone())
            .post_image(image, &super::format_content(&selected))
            .await
            .change_context_lazy(|| RoutineError::routine_failure("webhook delivery failed"))?;

        progress.info(format!(
            "Quote: ✅ Posted a quote image for {}",
            selected.name
        ));
        finish_progress(&progress);

        Ok(())
    }
}
