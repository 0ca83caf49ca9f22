use std::{borrow::Cow, sync::LazyLock, time::Duration};

use indicatif::{MultiProgress, ProgressBar};

static MULTI_PROGRESS: LazyLock<MultiProgress> = LazyLock::new(MultiProgress::new);

pub fn new_progress(progress_bar: ProgressBar) -> ProgressBar {
    let progress_bar = MULTI_PROGRESS.add(progress_bar);
    progress_bar.enable_steady_tick(Duration::from_millis(10));
    progress_bar
}

pub fn finish_progress(progress_bar: &ProgressBar) {
    progress_bar.finish();
    MULTI_PROGRESS.remove(progress_bar);
}

/// Mirrors spinner messages into the log so scheduled (non-TTY) runs keep a
/// record of the stage that was executing.
pub trait ProgressBarExt {
    fn trace(&self, msg: impl Into<Cow<'static, str>>);
    fn info(&self, msg: impl Into<Cow<'static, str>>);
}

impl ProgressBarExt for ProgressBar {
    fn trace(&self, msg: impl Into<Cow<'static, str>>) {
        let msg = msg.into();
        log::trace!("{}", msg);
        self.set_message(msg);
    }

    fn info(&self, msg: impl Into<Cow<'static, str>>) {
        let msg = msg.into();
        log::info!("{}", msg);
        self.set_message(msg);
    }
}
