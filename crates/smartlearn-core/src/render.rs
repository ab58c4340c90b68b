//! App-level view models and animation metadata.
//!
//! Everything here is plain borrowed data; the shell decides how it ends
//! up on a screen.

use crate::catalog::ImageAsset;

/// Display language for taxonomy titles and static copy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Language {
    #[default]
    English,
    Turkish,
}

impl Language {
    pub const fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Turkish => "Türkçe",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Language::English => Language::Turkish,
            Language::Turkish => Language::English,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuItemKind {
    Explore,
    Settings,
    About,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MenuItemView<'a> {
    pub label: &'a str,
    pub kind: MenuItemKind,
}

/// One category card on the home screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CategoryCardView<'a> {
    pub title: &'a str,
    pub color: [u8; 3],
    pub ebook_count: u16,
}

impl Default for CategoryCardView<'_> {
    fn default() -> Self {
        Self {
            title: "",
            color: [0, 0, 0],
            ebook_count: 0,
        }
    }
}

/// One e-book card in a category or search listing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EbookCardView<'a> {
    pub title: &'a str,
    pub category_title: &'a str,
    pub color: [u8; 3],
    pub age_min: u8,
    pub age_max: u8,
    pub duration_label: &'a str,
    pub page_total: u16,
}

impl Default for EbookCardView<'_> {
    fn default() -> Self {
        Self {
            title: "",
            category_title: "",
            color: [0, 0, 0],
            age_min: 0,
            age_max: 0,
            duration_label: "",
            page_total: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SettingValue<'a> {
    Label(&'a str),
    Toggle(bool),
    Number(u16),
    Action(&'a str),
}

/// A cursor-addressable row on the explore and settings screens.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SettingRowView<'a> {
    pub key: &'a str,
    pub value: SettingValue<'a>,
}

impl Default for SettingRowView<'_> {
    fn default() -> Self {
        Self {
            key: "",
            value: SettingValue::Label(""),
        }
    }
}

/// Viewer payload: a page image or an embedded document reference.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ViewerContentView<'a> {
    Page { image: ImageAsset },
    Document { url: &'a str },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    SlideLeft,
    SlideRight,
    Fade,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

/// App-level view model consumed by the shell renderer.
pub enum Screen<'a> {
    Home {
        title: &'a str,
        subtitle: &'a str,
        cards: &'a [CategoryCardView<'a>],
        menu: &'a [MenuItemView<'a>],
        cursor: usize,
        animation: Option<AnimationFrame>,
    },
    CategoryDetail {
        title: &'a str,
        color: [u8; 3],
        items: &'a [EbookCardView<'a>],
        cursor: usize,
        animation: Option<AnimationFrame>,
    },
    Explore {
        title: &'a str,
        rows: &'a [SettingRowView<'a>],
        cursor: usize,
        editing: bool,
        animation: Option<AnimationFrame>,
    },
    SearchResults {
        title: &'a str,
        items: &'a [EbookCardView<'a>],
        truncated: bool,
        cursor: usize,
        animation: Option<AnimationFrame>,
    },
    Viewer {
        title: &'a str,
        content: ViewerContentView<'a>,
        page_number: u16,
        page_total: u16,
        full_screen: bool,
        animation: Option<AnimationFrame>,
    },
    Settings {
        title: &'a str,
        rows: &'a [SettingRowView<'a>],
        cursor: usize,
        editing: bool,
        animation: Option<AnimationFrame>,
    },
    About {
        app_name: &'a str,
        version: &'a str,
        lines: &'a [&'a str],
        animation: Option<AnimationFrame>,
    },
    Status {
        title: &'a str,
        line1: &'a str,
        line2: &'a str,
        animation: Option<AnimationFrame>,
    },
}
