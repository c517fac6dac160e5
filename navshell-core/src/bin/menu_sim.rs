//! Menu simulator - replays an interaction script against the driver
//!
//! Usage: `menu-sim [config.json]`
//!
//! Timings come from the optional configuration file. Set `RUST_LOG` to
//! adjust verbosity (defaults to `navshell_core=debug,menu_sim=info`).

use navshell_core::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "navshell_core=debug,menu_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| ShellConfig::from_json_str(&json).map_err(|e| e.to_string()))
        {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Could not load {}: {}, using defaults", path, e);
                ShellConfig::default()
            }
        },
        None => ShellConfig::default(),
    };

    let template = config.menu_template();
    tracing::info!("Menu has {} top-level entries", template.len());

    let controller = MenuController::new(template, config.animation);
    let mut driver = MenuDriver::new(controller, TimedPresenter::new(), Vec::<String>::new());

    // Panel occupies the left 320px of the viewport
    driver
        .dispatch(MenuEvent::SetPanelBounds(Rect::new(0.0, 0.0, 320.0, 900.0)))
        .await;

    let script = vec![
        MenuEvent::TogglePanel,
        MenuEvent::ToggleAccordion(1),
        MenuEvent::ToggleAccordion(2),
        MenuEvent::ToggleAccordion(9),
        MenuEvent::SelectLeaf("/more/popular".to_string()),
        MenuEvent::TogglePanel,
        MenuEvent::ToggleAccordion(1),
        MenuEvent::OutsideInteraction(InteractionTarget::Point(Point::new(800.0, 200.0))),
    ];

    let started = tokio::time::Instant::now();
    for event in script {
        tracing::info!("--> {:?}", event);
        driver.dispatch(event).await;
        let snapshot = driver.controller().snapshot();
        tracing::info!(
            "<-- {:?} open={} expanded={:?} (t={}ms)",
            snapshot.phase,
            snapshot.is_menu_open,
            snapshot.expanded,
            started.elapsed().as_millis()
        );
    }

    let (_, presenter, navigations) = driver.into_parts();
    tracing::info!("Rendered {} snapshots", presenter.renders());
    tracing::info!("Navigations: {:?}", navigations);
}
