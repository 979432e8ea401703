//! Demo binary: wires the layout engine to a stand-in event source and a
//! live clock, then logs the laid-out surface a renderer would consume.

mod sample;
mod ticker;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use koyomi_core::clock::SystemClock;
use koyomi_core::config::load_config;
use koyomi_core::event::EventSource;
use koyomi_core::types::ViewMode;
use koyomi_layout::view::{CalendarView, SurfaceLayout};
use ticker::NowTicker;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true))
        .init();

    tracing::info!("Starting koyomi calendar surface");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let mode = std::env::args()
        .nth(1)
        .and_then(|raw| ViewMode::parse(&raw))
        .unwrap_or_default();

    let source = sample::sample_source();
    for event in source.events() {
        if let Err(e) = event.validate() {
            tracing::warn!(error = %e, "Malformed event in collection");
        }
    }

    let clock = SystemClock;
    let view = Arc::new(Mutex::new(CalendarView::new(mode, &clock)));

    let tick_view = Arc::clone(&view);
    let ticker = NowTicker::spawn(clock, config.layout.tick_interval_ms, move |now| {
        if let Ok(mut state) = tick_view.lock() {
            state.tick(now);
        }
    });

    // Let a few "now" samples land before rendering the snapshot.
    tokio::time::sleep(Duration::from_millis(config.layout.tick_interval_ms * 3)).await;

    {
        let mut state = view
            .lock()
            .map_err(|_| anyhow::anyhow!("view state poisoned"))?;

        let surface = state.layout(source.events(), &config.layout);
        log_surface(&surface);

        state.shift(1);
        let shifted = state.layout(source.events(), &config.layout);
        tracing::info!(label = %shifted.label, "Shifted one frame forward");

        state.go_to_today(&clock);
        let today = state.layout(source.events(), &config.layout);
        tracing::info!(label = %today.label, "Back to today");
    }

    ticker.stop();
    tracing::info!("done");
    Ok(())
}

fn log_surface(surface: &SurfaceLayout<'_>) {
    tracing::info!(
        label = %surface.label,
        days = surface.days.len(),
        now_indicator = ?surface.now_indicator,
        "Surface laid out"
    );
    for day in &surface.days {
        if day.all_day.is_empty() && day.timed.is_empty() {
            continue;
        }
        tracing::info!(
            day = %day.day_key,
            banners = day.all_day.len(),
            timed = day.timed.len(),
            columns = day.column_count,
            "Day layout"
        );
        for slot in &day.timed {
            tracing::debug!(
                title = %slot.event.title,
                color = %slot.event.color.as_str(),
                top = slot.top,
                height = slot.height,
                column = slot.column,
                of = slot.column_count,
                "Placed event"
            );
        }
    }
}
