use portfolio_site::{
    splash::{SPLASH_EXIT_FOR, SPLASH_VISIBLE_FOR},
    start_splash, Lifecycle, SplashPhase,
};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn splash_runs_visible_exiting_done() {
    let lifecycle = Lifecycle::mount();
    let phase = start_splash(&lifecycle);
    assert_eq!(*phase.borrow(), SplashPhase::Visible);

    tokio::time::sleep(SPLASH_VISIBLE_FOR - Duration::from_millis(1)).await;
    assert_eq!(*phase.borrow(), SplashPhase::Visible);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(*phase.borrow(), SplashPhase::Exiting);

    tokio::time::sleep(SPLASH_EXIT_FOR).await;
    assert_eq!(*phase.borrow(), SplashPhase::Done);
}

#[tokio::test(start_paused = true)]
async fn unmount_freezes_the_splash() {
    let lifecycle = Lifecycle::mount();
    let phase = start_splash(&lifecycle);

    tokio::time::sleep(SPLASH_VISIBLE_FOR + Duration::from_millis(1)).await;
    lifecycle.unmount();
    tokio::time::sleep(SPLASH_EXIT_FOR * 2).await;

    assert_eq!(*phase.borrow(), SplashPhase::Exiting);
}
