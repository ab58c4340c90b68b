use super::*;
use crate::{
    input::{InputEvent, InputProvider},
    render::{Screen, SettingValue},
    settings::PersistedSettings,
};

struct ScriptedInput<'a> {
    events: &'a [InputEvent],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    const fn new(events: &'a [InputEvent]) -> Self {
        Self { events, cursor: 0 }
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let Some(event) = self.events.get(self.cursor).copied() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(event))
    }
}

fn make_app(events: &[InputEvent]) -> LearnApp<ScriptedInput<'_>> {
    let catalog = Catalog::builtin().unwrap();
    LearnApp::new(catalog, ScriptedInput::new(events), "Smart Learn")
}

fn repeat_then(base: InputEvent, times: usize, tail: &[InputEvent]) -> std::vec::Vec<InputEvent> {
    let mut events = std::vec::Vec::new();
    events.resize(times, base);
    events.extend_from_slice(tail);
    events
}

#[test]
fn home_select_opens_category_detail() {
    let events = [InputEvent::Select];
    let mut app = make_app(&events);
    let _ = app.tick(100);

    let mut visited = false;
    app.with_screen(1_000, |screen| {
        if let Screen::CategoryDetail { title, items, cursor, .. } = screen {
            assert_eq!(title, "Arts & Music");
            assert_eq!(items.len(), 2);
            assert_eq!(cursor, 0);
            visited = true;
        }
    });

    assert!(visited);
}

#[test]
fn viewer_paging_clamps_at_last_page() {
    // First arts & music record has three page images.
    let events = [
        InputEvent::Select,
        InputEvent::Select,
        InputEvent::Next,
        InputEvent::Next,
        InputEvent::Next,
        InputEvent::Next,
    ];
    let mut app = make_app(&events);
    let _ = app.tick(100);

    let mut seen = None;
    app.with_screen(1_000, |screen| {
        if let Screen::Viewer { page_number, page_total, .. } = screen {
            seen = Some((page_number, page_total));
        }
    });

    assert_eq!(seen, Some((3, 3)));
}

#[test]
fn out_of_range_jump_keeps_current_page() {
    let events = [
        InputEvent::Select,
        InputEvent::Select,
        InputEvent::JumpToPage(9),
    ];
    let mut app = make_app(&events);
    let _ = app.tick(100);

    let mut seen = None;
    app.with_screen(1_000, |screen| {
        if let Screen::Viewer { page_number, .. } = screen {
            seen = Some(page_number);
        }
    });

    assert_eq!(seen, Some(1));
}

#[test]
fn full_screen_toggle_keeps_the_page() {
    let events = [
        InputEvent::Select,
        InputEvent::Select,
        InputEvent::Next,
        InputEvent::Select,
    ];
    let mut app = make_app(&events);
    let _ = app.tick(100);

    let mut seen = None;
    app.with_screen(1_000, |screen| {
        if let Screen::Viewer { page_number, full_screen, .. } = screen {
            seen = Some((page_number, full_screen));
        }
    });

    assert_eq!(seen, Some((2, true)));
}

#[test]
fn back_from_viewer_restores_listing_cursor() {
    let events = [
        InputEvent::Select,
        InputEvent::Next,
        InputEvent::Select,
        InputEvent::Back,
    ];
    let mut app = make_app(&events);
    let _ = app.tick(100);

    let mut seen = None;
    app.with_screen(1_000, |screen| {
        if let Screen::CategoryDetail { cursor, .. } = screen {
            seen = Some(cursor);
        }
    });

    assert_eq!(seen, Some(1));
}

// Home rows 0..7 are categories; Explore sits right after them. Inside
// explore, category toggles start at row 8, with Mathematics at row 13
// and Apply at row 15.
fn explore_mathematics_events(tail: &[InputEvent]) -> std::vec::Vec<InputEvent> {
    let mut events = repeat_then(InputEvent::Next, Category::COUNT, &[InputEvent::Select]);
    events.extend(repeat_then(InputEvent::Next, 13, &[InputEvent::Select]));
    events.extend(repeat_then(InputEvent::Next, 2, &[InputEvent::Select]));
    events.extend_from_slice(tail);
    events
}

#[test]
fn explore_category_toggle_filters_results() {
    let events = explore_mathematics_events(&[]);
    let mut app = make_app(&events);
    let _ = app.tick(100);

    let mut seen = None;
    app.with_screen(1_000, |screen| {
        if let Screen::SearchResults { items, truncated, .. } = screen {
            seen = Some((items.len(), truncated));
            for item in items {
                assert_eq!(item.category_title, "Mathematics");
            }
        }
    });

    assert_eq!(seen, Some((5, false)));
}

#[test]
fn viewer_backtrack_retains_search_criteria() {
    let events = explore_mathematics_events(&[InputEvent::Select, InputEvent::Back]);
    let mut app = make_app(&events);
    let _ = app.tick(100);

    let mut seen = None;
    app.with_screen(1_000, |screen| {
        if let Screen::SearchResults { items, cursor, .. } = screen {
            seen = Some((items.len(), cursor));
        }
    });

    assert_eq!(seen, Some((5, 0)));
}

#[test]
fn back_from_results_reopens_explore_with_criteria() {
    let events = explore_mathematics_events(&[InputEvent::Back]);
    let mut app = make_app(&events);
    let _ = app.tick(100);

    let mut visited = false;
    app.with_screen(1_000, |screen| {
        if let Screen::Explore { rows, cursor, .. } = screen {
            assert_eq!(rows[13].value, SettingValue::Toggle(true));
            assert_eq!(cursor, 15);
            visited = true;
        }
    });

    assert!(visited);
}

#[test]
fn explore_age_editing_respects_domain_bounds() {
    // Enter explore, edit the min age, and push it well past the max.
    let mut events = repeat_then(InputEvent::Next, Category::COUNT, &[InputEvent::Select]);
    events.push(InputEvent::Select);
    events.extend(repeat_then(InputEvent::Next, 20, &[InputEvent::Select]));
    let mut app = make_app(&events);
    let _ = app.tick(100);

    let mut visited = false;
    app.with_screen(1_000, |screen| {
        if let Screen::Explore { rows, editing, .. } = screen {
            // Min age clamps to the max bound instead of crossing it.
            assert_eq!(rows[0].value, SettingValue::Number(14));
            assert_eq!(rows[1].value, SettingValue::Number(14));
            assert!(!editing);
            visited = true;
        }
    });

    assert!(visited);
}

#[test]
fn settings_language_edit_round_trips() {
    // Home row 8 is Settings; edit the language row once.
    let mut events = repeat_then(
        InputEvent::Next,
        Category::COUNT + 1,
        &[InputEvent::Select],
    );
    events.extend_from_slice(&[InputEvent::Select, InputEvent::Next, InputEvent::Select]);
    let mut app = make_app(&events);
    let _ = app.tick(100);

    assert_eq!(
        app.persisted_settings(),
        PersistedSettings::new(Language::Turkish, true)
    );
}

#[test]
fn applied_settings_localize_category_titles() {
    let events: [InputEvent; 0] = [];
    let mut app = make_app(&events);
    app.apply_persisted_settings(PersistedSettings::new(Language::Turkish, false));
    let _ = app.tick(100);

    let mut visited = false;
    app.with_screen(1_000, |screen| {
        if let Screen::Home { cards, .. } = screen {
            assert_eq!(cards[0].title, "Sanat ve Müzik");
            visited = true;
        }
    });

    assert!(visited);
    assert_eq!(
        app.persisted_settings(),
        PersistedSettings::new(Language::Turkish, false)
    );
}

#[test]
fn input_error_surfaces_as_status() {
    struct FailingInput;

    impl InputProvider for FailingInput {
        type Error = ();

        fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
            Err(())
        }
    }

    let catalog = Catalog::builtin().unwrap();
    let mut app = LearnApp::new(catalog, FailingInput, "Smart Learn");
    let _ = app.tick(100);

    let mut visited = false;
    app.with_screen(1_000, |screen| {
        if let Screen::Status { line1, .. } = screen {
            assert_eq!(line1, "INPUT ERROR");
            visited = true;
        }
    });

    assert!(visited);
}
