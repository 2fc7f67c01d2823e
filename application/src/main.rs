use std::{io, sync::OnceLock};

use application::{
    config::{self, Config},
    json, Args, Event, Summary,
};
use service::{
    command::UpdateFilters, domain::filter, infra::InMemory, Command as _,
    Session,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start();
}

fn start() -> Result<(), ()> {
    let Args { config } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        catalog,
        session: config::Session { filters, events },
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let catalog = InMemory::from_path(&catalog.path).map_err(|e| {
        log::error!(
            "failed to load `Catalog` from `{}`: {e}",
            catalog.path.display(),
        );
    })?;

    let mut session = Session::new(catalog);

    if let Some(path) = filters {
        let patch = json::from_path::<filter::Patch>(&path).map_err(|e| {
            log::error!("failed to load filters from `{}`: {e}", path.display());
        })?;
        session.execute(UpdateFilters(patch));
    }

    let events = match events {
        Some(path) => json::from_path::<Vec<Event>>(&path).map_err(|e| {
            log::error!("failed to load events from `{}`: {e}", path.display());
        })?,
        None => Vec::new(),
    };
    log::info!("replaying {} events", events.len());
    for event in events {
        event.apply(&mut session);
    }

    let summary = Summary::of(&session);
    log::info!(
        view = ?summary.view.current,
        mode = ?summary.view.mode,
        selected = ?summary.view.selected,
        selected_expenses = ?summary.selected_expenses,
        "{summary}",
    );

    Ok(())
}
