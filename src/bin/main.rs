use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info, warn};
use smartlearn_core::{
    app::{LearnApp, TickResult},
    catalog::{Catalog, CatalogError},
    input::InputEvent,
    settings::SettingsStore,
};

use key_input::InputQueue;
use settings_file::RonSettingsStore;
use settings_sync::SettingsSyncState;

#[path = "main/key_input.rs"]
mod key_input;
#[path = "main/screen_render.rs"]
mod screen_render;
#[path = "main/settings_file.rs"]
mod settings_file;
#[path = "main/settings_sync.rs"]
mod settings_sync;

const TITLE: &str = "Smart Learn";
const FRAME_INTERVAL_MS: u64 = 33;
const SETTINGS_SAVE_DEBOUNCE_MS: u64 = 1_500;

#[derive(Debug, thiserror::Error)]
enum ShellError {
    #[error("invalid built-in catalog: {0}")]
    Catalog(CatalogError),
    #[error("terminal: {0}")]
    Terminal(#[from] io::Error),
}

enum KeyAction {
    App(InputEvent),
    Quit,
}

/// Restores the terminal even when the run loop errors out.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self, ShellError> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(KeyAction::Quit),
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
            Some(KeyAction::App(InputEvent::Next))
        }
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
            Some(KeyAction::App(InputEvent::Prev))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::App(InputEvent::Select)),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            Some(KeyAction::App(InputEvent::Back))
        }
        KeyCode::Char(digit @ '1'..='9') => {
            let page = digit as u16 - '1' as u16;
            Some(KeyAction::App(InputEvent::JumpToPage(page)))
        }
        _ => None,
    }
}

fn main() -> Result<(), ShellError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let catalog = Catalog::builtin().map_err(ShellError::Catalog)?;
    info!("catalog loaded: {} records", catalog.len());

    let queue = InputQueue::new();
    let mut app = LearnApp::new(catalog, queue.clone(), TITLE);

    let mut store = match RonSettingsStore::open() {
        Ok(store) => Some(store),
        Err(err) => {
            warn!("settings store unavailable: {err}");
            None
        }
    };

    if let Some(store) = store.as_mut() {
        match store.load() {
            Ok(Some(settings)) => app.apply_persisted_settings(settings),
            Ok(None) => debug!("no settings file yet, using defaults"),
            Err(err) => warn!("settings load failed: {err}"),
        }
    }

    let mut settings_sync = SettingsSyncState::new(app.persisted_settings());
    let guard = TerminalGuard::enter()?;
    let started = Instant::now();
    let mut stdout = io::stdout();

    'run: loop {
        while event::poll(Duration::from_millis(FRAME_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match map_key(key) {
                    Some(KeyAction::Quit) => break 'run,
                    Some(KeyAction::App(event)) => queue.push(event),
                    None => {}
                }
            }
        }

        let now_ms = started.elapsed().as_millis() as u64;
        if matches!(app.tick(now_ms), TickResult::RenderRequested) {
            app.with_screen(now_ms, |screen| {
                if let Err(err) = screen_render::draw(&mut stdout, &screen) {
                    warn!("render failed: {err}");
                }
            });
            stdout.flush()?;
        }

        settings_sync.track_current(app.persisted_settings(), now_ms);
        settings_sync.flush_if_due(store.as_mut(), now_ms);
    }

    drop(guard);

    if let Some(store) = store.as_mut() {
        if let Err(err) = store.save(&app.persisted_settings()) {
            warn!("settings save on exit failed: {err}");
        }
    }

    Ok(())
}
