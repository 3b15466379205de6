//! Intro splash shown before the landing page.

use crate::Lifecycle;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::watch;

/// How long the splash stays fully visible.
pub const SPLASH_VISIBLE_FOR: Duration = Duration::from_millis(2800);
/// Length of the fade-out before the page is revealed.
pub const SPLASH_EXIT_FOR: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SplashPhase {
    Visible,
    Exiting,
    Done,
}

/// Start the splash timers on `lifecycle`. The receiver observes
/// `Visible -> Exiting -> Done`; the landing page renders once it reads
/// `Done`. Unmounting stops the timers where they are.
pub fn start_splash(lifecycle: &Lifecycle) -> watch::Receiver<SplashPhase> {
    let (sender, receiver) = watch::channel(SplashPhase::Visible);
    lifecycle.spawn(async move {
        tokio::time::sleep(SPLASH_VISIBLE_FOR).await;
        sender.send_replace(SplashPhase::Exiting);
        tokio::time::sleep(SPLASH_EXIT_FOR).await;
        sender.send_replace(SplashPhase::Done);
        tracing::debug!("splash finished");
    });
    receiver
}
