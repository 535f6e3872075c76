//! Subcommand handlers. Network work runs on the runtime; the main thread
//! waits on the result channel and feeds it to the screen controller.

use std::sync::mpsc;
use std::sync::Arc;

use anyhow::{Context, Result};
use fishbuddy_core::{App, AppError};
use fishbuddy_logbook::{EntryField, JsonFileStore, LogbookStore};
use fishbuddy_ui::error_mapping::{load_failure, storage_failure};
use fishbuddy_ui::services::{
    build_provider, location_from_config, request_current, request_forecast,
};
use fishbuddy_ui::{ForecastScreen, LogbookScreen, TipsScreen, WeatherScreen};
use fishbuddy_weather::WeatherProvider;
use tokio::runtime::Handle;

use crate::cli::{AddArgs, Command, LogCommand};

pub fn run(app: &App, runtime: &Handle, command: Command) -> Result<()> {
    match command {
        Command::Weather => weather(app, runtime).map(|_| ()),
        Command::Forecast { lat, lon } => forecast(app, runtime, lat.zip(lon)),
        Command::Log { action } => log(app, action),
        Command::Tips { season, method } => tips(season.as_deref(), method.as_deref()),
    }
}

fn provider(app: &App) -> Result<Arc<WeatherProvider>> {
    build_provider(&app.config().weather)
        .map(Arc::new)
        .map_err(|e| {
            let err = AppError::from(e);
            anyhow::anyhow!(
                "{} (set {} or [weather].api_key)",
                err.user_message(),
                fishbuddy_core::config::API_KEY_ENV
            )
        })
}

/// Fetch and print current conditions. Returns the coordinates they were fetched for.
fn weather(app: &App, runtime: &Handle) -> Result<(f64, f64)> {
    let provider = provider(app)?;
    let locator = Arc::new(location_from_config(&app.config().location));
    let (tx, rx) = mpsc::channel();

    let mut screen = WeatherScreen::new();
    request_current(&tx, runtime, locator, provider);
    screen.on_message(rx.recv().context("Weather task ended without a result")?);

    if let Some(message) = screen.state().error_message() {
        anyhow::bail!("{message}");
    }

    let view = screen.view().context("Weather screen has no data")?;
    println!("{}", WeatherScreen::TITLE);
    println!("  {} in {}", view.temperature, view.location);
    println!("  {}", view.condition);
    println!("  Wind: {} from {}", view.wind_speed, view.wind_direction);
    println!("  Humidity: {}", view.humidity);
    println!("  Pressure: {}", view.pressure);
    println!("  Background: {}", view.background);
    if let Some(icon) = view.icon_url {
        println!("  Icon: {icon}");
    }

    screen
        .forecast_target()
        .context("Weather screen has no coordinates")
}

fn forecast(app: &App, runtime: &Handle, coordinates: Option<(f64, f64)>) -> Result<()> {
    let (lat, lon) = match coordinates {
        Some(c) => c,
        None => {
            let target = weather(app, runtime)?;
            println!();
            target
        }
    };

    let provider = provider(app)?;
    let (tx, rx) = mpsc::channel();
    let mut screen = ForecastScreen::new(lat, lon);
    request_forecast(&tx, runtime, provider, lat, lon);
    screen.on_message(rx.recv().context("Forecast task ended without a result")?);

    if let Some(message) = screen.state().error_message() {
        anyhow::bail!("{message}");
    }

    println!("{}", ForecastScreen::TITLE);
    for row in screen.rows() {
        println!("  {}  {:>5}  {}", row.time, row.temperature, row.description);
    }
    Ok(())
}

fn log(app: &App, action: LogCommand) -> Result<()> {
    let config = app.config();
    let storage = JsonFileStore::open(config.logbook_data_dir())
        .map_err(storage_failure)
        .context("Failed to open logbook storage")?;
    let mut store = LogbookStore::open(storage, config.logbook.storage_key.clone());

    if let Some(err) = load_failure(store.load_state()) {
        tracing::warn!("Logbook load failed: {}", err);
        eprintln!("{}", err.user_message());
    }

    let mut screen = LogbookScreen::new(chrono::Local::now().date_naive());

    match action {
        LogCommand::List => {}
        LogCommand::Add(args) => {
            fill_form(&mut screen, args);
            screen.submit(&mut store);
            ensure_saved(&store)?;
            println!("Saved Log {}", store.len());
            return Ok(());
        }
        LogCommand::Remove { number } => {
            if number == 0 || number > store.len() {
                anyhow::bail!("There is no Log {number}");
            }
            screen.long_press(number - 1);
            if let Some((title, subtitle)) = screen.delete_prompt() {
                println!("{title} {subtitle} (confirmed)");
            }
            screen.confirm_delete(&mut store);
            ensure_saved(&store)?;
            println!("Deleted Log {number}");
            return Ok(());
        }
    }

    println!("{}", LogbookScreen::TITLE);
    let cards = screen.cards(&store);
    if cards.is_empty() {
        println!("{}", LogbookScreen::EMPTY_MESSAGE);
    } else if let Some(hint) = screen.suggestion() {
        println!("{hint} (fishbuddy log remove <n>)");
    }
    for card in cards {
        println!("{}", card.title);
        for (label, value) in card.fields {
            println!("  {label}: {value}");
        }
    }
    Ok(())
}

fn fill_form(screen: &mut LogbookScreen, args: AddArgs) {
    screen.open_add_form();

    let fields = [
        (EntryField::Bait, args.bait),
        (EntryField::FishSpot, args.spot),
        (EntryField::Weather, args.weather),
        (EntryField::FishSpecies, args.species),
        (EntryField::Gear, args.gear),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            screen.set_field(field, value);
        }
    }

    if args.weight.is_some() || args.length.is_some() {
        screen.toggle_details();
        if let Some(weight) = args.weight {
            screen.set_field(EntryField::Weight, weight);
        }
        if let Some(length) = args.length {
            screen.set_field(EntryField::Length, length);
        }
    }

    if let Some(date) = args.date {
        screen.open_date_picker();
        screen.pick_date(date);
    }
}

fn ensure_saved(store: &LogbookStore<JsonFileStore>) -> Result<()> {
    if store.is_dirty() {
        let err = AppError::Storage(fishbuddy_core::StorageError::WriteFailed(
            "logbook snapshot not persisted".to_string(),
        ));
        anyhow::bail!("{}", err.user_message());
    }
    Ok(())
}

fn tips(season: Option<&str>, method: Option<&str>) -> Result<()> {
    let mut screen = TipsScreen::new();

    if let Some(name) = season {
        if !screen.select_season_named(name) {
            anyhow::bail!("Unknown season '{name}'. Try one of: {}", keys(screen.seasons()));
        }
    }
    if let Some(name) = method {
        if !screen.select_method_named(name) {
            anyhow::bail!("Unknown method '{name}'. Try one of: {}", keys(screen.methods()));
        }
    }

    match (screen.season_popup(), screen.method_popup()) {
        (Some(tip), _) | (None, Some(tip)) => {
            println!("{}", tip.name);
            println!("  {}", tip.content);
        }
        (None, None) => {
            println!("{}", TipsScreen::TITLE);
            println!("Seasonal Tips");
            for tip in screen.seasons() {
                println!("  {}", tip.name);
            }
            println!("Fishing Methods");
            for tip in screen.methods() {
                println!("  {}", tip.name);
            }
        }
    }
    Ok(())
}

fn keys(tips: &[fishbuddy_ui::Tip]) -> String {
    tips.iter().map(|t| t.key()).collect::<Vec<_>>().join(", ")
}
