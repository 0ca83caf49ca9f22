use error_stack::ResultExt;
use indicatif::ProgressBar;

use crate::{
    cli::progress::{finish_progress, new_progress, ProgressBarExt},
    config::app_config::CONFIG,
    quotes,
    webhook::DiscordWebhook,
};

use super::routine::{Routine, RoutineError, RoutineResult};

/// Delivery variant that posts the quote as a plain text message.
pub struct TextQuoteRoutine;

#[async_trait::async_trait]
impl Routine for TextQuoteRoutine {
    fn name(&self) -> &str {
        "TextQuote"
    }

    async fn run(&self) -> RoutineResult {
        log::info!("Running TextQuoteRoutine");

        let progress = new_progress(ProgressBar::new_spinner());

        progress.trace("Quote: ☁️  Fetching the quotes spreadsheet");
        let sheet = super::fetch_quote_sheet().await?;

        progress.trace("Quote: 🎲 Picking a random quote");
        let selected = quotes::pick_quote(&sheet, &CONFIG.quotes.names, &mut rand::thread_rng())
            .change_context_lazy(|| RoutineError::routine_failure("no quote could be selected"))?;

        progress.trace("Quote: 📨 Posting the quote to the webhook");
        DiscordWebhook::new(CONFIG.webhook.clone())
            .post_text(&super::format_content(&selected))
            .await
            .change_context_lazy(|| RoutineError::routine_failure("webhook delivery failed"))?;

        progress.info(format!("Quote: ✅ Posted a quote by {}", selected.name));
        finish_progress(&progress);

        Ok(())
    }
}
