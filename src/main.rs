mod cli;
mod config;
mod quotes;
mod render;
mod routines;
mod sheets;
mod webhook;

use config::app_config::{DeliveryMode, CONFIG};
use routines::{
    image_quote::ImageQuoteRoutine, routine::Routine, text_quote::TextQuoteRoutine,
};

async fn run_routines(routines: Vec<Box<dyn Routine>>) -> bool {
    let mut all_ok = true;

    for routine in &routines {
        match routine.run().await {
            Ok(()) => {
                log::info!("✅ {}: OK", routine.name());
            }
            Err(report) => {
                log::error!("❌ {}: {:?}", routine.name(), report);
                all_ok = false;
            }
        }
    }

    all_ok
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let routine: Box<dyn Routine> = match CONFIG.delivery.mode {
        DeliveryMode::Text => Box::new(TextQuoteRoutine),
        DeliveryMode::Image => Box::new(ImageQuoteRoutine),
    };

    if !run_routines(vec![routine]).await {
        std::process::exit(1);
    }
}
