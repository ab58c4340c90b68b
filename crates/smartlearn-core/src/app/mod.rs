//! Application state machine for browsing, filtering, and page viewing.

use log::debug;

use crate::{
    catalog::{AGE_DOMAIN, Catalog, Category, Duration},
    filter::{FilterCriteria, filter_catalog},
    input::{InputEvent, InputProvider},
    render::{
        AnimationKind, AnimationSpec, CategoryCardView, EbookCardView, Language, MenuItemKind,
        MenuItemView, Screen, SettingRowView, SettingValue, ViewerContentView,
    },
    settings::PersistedSettings,
    text_policy::preview_compact,
    viewer::{RenderStrategy, ViewerSession},
};

const MAX_LIST_ITEMS: usize = 16;
const HOME_ITEM_COUNT: u16 = Category::COUNT as u16 + 3;
const VIEWER_TITLE_BYTES: usize = 52;

const ANIM_MENU_MS: u16 = 180;
const ANIM_SCREEN_MS: u16 = 220;
const ANIM_NAV_MS: u16 = 120;

const ABOUT_LINES_EN: [&str; 3] = [
    "A categorized library of illustrated e-books",
    "for learners aged 6 to 14.",
    "Filter by subject, age, and reading time.",
];

const ABOUT_LINES_TR: [&str; 3] = [
    "6-14 yaş arası öğrenciler için resimli",
    "e-kitaplardan oluşan kategorili bir kütüphane.",
    "Konuya, yaşa ve okuma süresine göre filtreleyin.",
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Where the viewer was opened from, so Back restores the exact listing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ViewerOrigin {
    Category {
        category: Category,
        cursor: u16,
    },
    Search {
        criteria: FilterCriteria,
        cursor: u16,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum UiState {
    Home {
        cursor: u16,
    },
    CategoryDetail {
        category: Category,
        cursor: u16,
    },
    Explore {
        cursor: u8,
        editing: bool,
        criteria: FilterCriteria,
    },
    SearchResults {
        criteria: FilterCriteria,
        cursor: u16,
    },
    Viewer {
        session: ViewerSession,
        origin: ViewerOrigin,
    },
    Settings {
        cursor: u8,
        editing: bool,
    },
    About,
    Status {
        line1: &'static str,
        line2: &'static str,
    },
}

/// Cursor-addressable rows of the explore screen, in display order:
/// the age bounds, the duration toggles, the category toggles, then the
/// apply and back actions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ExploreRow {
    MinAge,
    MaxAge,
    AnyDuration,
    Duration(Duration),
    Category(Category),
    Apply,
    Back,
}

impl ExploreRow {
    const COUNT: u8 = 3 + Duration::COUNT as u8 + Category::COUNT as u8 + 2;
    const APPLY_INDEX: u8 = 3 + Duration::COUNT as u8 + Category::COUNT as u8;

    fn from_index(index: u8) -> Self {
        const DURATIONS_START: u8 = 3;
        const CATEGORIES_START: u8 = DURATIONS_START + Duration::COUNT as u8;

        match index {
            0 => Self::MinAge,
            1 => Self::MaxAge,
            2 => Self::AnyDuration,
            i if i < CATEGORIES_START => {
                Self::Duration(Duration::ALL[(i - DURATIONS_START) as usize])
            }
            i if i < Self::APPLY_INDEX => {
                Self::Category(Category::ALL[(i - CATEGORIES_START) as usize])
            }
            i if i == Self::APPLY_INDEX => Self::Apply,
            _ => Self::Back,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SettingsRow {
    Language,
    AutoUpdate,
    Back,
}

impl SettingsRow {
    const COUNT: u8 = 3;

    fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Language,
            1 => Self::AutoUpdate,
            _ => Self::Back,
        }
    }
}

pub struct LearnApp<IN>
where
    IN: InputProvider,
{
    catalog: Catalog,
    input: IN,
    app_title: &'static str,
    language: Language,
    auto_update: bool,
    ui: UiState,
    pending_redraw: bool,
    transition: Option<AnimationSpec>,
}

include!("view.rs");
include!("input.rs");
include!("navigation.rs");

fn rotate_cw(current: u16, total: u16) -> u16 {
    if total == 0 { 0 } else { (current + 1) % total }
}

fn rotate_ccw(current: u16, total: u16) -> u16 {
    if total == 0 {
        0
    } else if current == 0 {
        total - 1
    } else {
        current - 1
    }
}

#[cfg(test)]
mod tests;
