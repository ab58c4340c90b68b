//! Static e-book catalog: record types, invariant validation, and page
//! derivation.

use crate::render::Language;

mod data;

pub use data::EBOOKS;

/// Legal reader-age domain for the whole catalog.
pub const AGE_DOMAIN: AgeRange = AgeRange { min: 6, max: 14 };

/// Fixed subject taxonomy. The core never defines categories at runtime.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Category {
    ArtsMusic,
    MotherLanguage,
    ForeignLanguages,
    NaturalSciences,
    PhysicalEducation,
    Mathematics,
    EthicsReligion,
}

/// Read-only display metadata for one category.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CategoryInfo {
    pub title: &'static str,
    pub title_tr: &'static str,
    pub key: &'static str,
    pub color: [u8; 3],
}

impl Category {
    pub const COUNT: usize = 7;

    pub const ALL: [Category; Self::COUNT] = [
        Category::ArtsMusic,
        Category::MotherLanguage,
        Category::ForeignLanguages,
        Category::NaturalSciences,
        Category::PhysicalEducation,
        Category::Mathematics,
        Category::EthicsReligion,
    ];

    /// Stable 1-based catalog id, matching the authored data.
    pub const fn id(self) -> u8 {
        self.index() as u8 + 1
    }

    pub const fn index(self) -> usize {
        match self {
            Category::ArtsMusic => 0,
            Category::MotherLanguage => 1,
            Category::ForeignLanguages => 2,
            Category::NaturalSciences => 3,
            Category::PhysicalEducation => 4,
            Category::Mathematics => 5,
            Category::EthicsReligion => 6,
        }
    }

    pub const fn from_id(id: u8) -> Option<Category> {
        match id {
            1 => Some(Category::ArtsMusic),
            2 => Some(Category::MotherLanguage),
            3 => Some(Category::ForeignLanguages),
            4 => Some(Category::NaturalSciences),
            5 => Some(Category::PhysicalEducation),
            6 => Some(Category::Mathematics),
            7 => Some(Category::EthicsReligion),
            _ => None,
        }
    }

    pub const fn info(self) -> &'static CategoryInfo {
        &data::CATEGORY_INFOS[self.index()]
    }

    pub const fn title(self, language: Language) -> &'static str {
        match language {
            Language::English => self.info().title,
            Language::Turkish => self.info().title_tr,
        }
    }
}

/// Coarse reading-time bucket. Raw source tags outside these buckets are
/// normalized at authoring time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Duration {
    Mins15To25,
    Mins25To45,
    Hours1To2,
    Hours5,
    OneMonth,
}

impl Duration {
    pub const COUNT: usize = 5;

    pub const ALL: [Duration; Self::COUNT] = [
        Duration::Mins15To25,
        Duration::Mins25To45,
        Duration::Hours1To2,
        Duration::Hours5,
        Duration::OneMonth,
    ];

    pub const fn index(self) -> usize {
        match self {
            Duration::Mins15To25 => 0,
            Duration::Mins25To45 => 1,
            Duration::Hours1To2 => 2,
            Duration::Hours5 => 3,
            Duration::OneMonth => 4,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Duration::Mins15To25 => "15_25_mins",
            Duration::Mins25To45 => "25_45_mins",
            Duration::Hours1To2 => "1_2_hours",
            Duration::Hours5 => "5_hours",
            Duration::OneMonth => "one_month",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Duration::Mins15To25 => "15 - 25 mins",
            Duration::Mins25To45 => "25 - 45 mins",
            Duration::Hours1To2 => "1 - 2 hours",
            Duration::Hours5 => "5 hours",
            Duration::OneMonth => "One Month",
        }
    }
}

/// Closed inclusive recommended-age interval.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

impl AgeRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub const fn is_ordered(self) -> bool {
        self.min <= self.max
    }

    /// Closed-interval overlap test. An inverted interval on either side
    /// simply fails to overlap; this never errors.
    pub const fn overlaps(self, other: AgeRange) -> bool {
        self.min <= other.max && self.max >= other.min
    }
}

/// Opaque, build-time-resolved page-image reference. The core never
/// inspects pixel data; a shell hands the path to its asset pipeline.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ImageAsset(&'static str);

impl ImageAsset {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    pub const fn path(self) -> &'static str {
        self.0
    }
}

/// One derived page: 1-based number plus its image reference.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageView {
    pub number: u16,
    pub image: ImageAsset,
}

impl PageView {
    pub const fn uri(self) -> &'static str {
        self.image.path()
    }
}

/// Immutable, statically authored e-book record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EbookRecord {
    pub id: u16,
    pub title: &'static str,
    pub category: Category,
    pub age: AgeRange,
    pub duration: Duration,
    /// Authored page-count override; `None` derives from `pages`.
    pub page_count: Option<u16>,
    pub cover: ImageAsset,
    /// Ordered page images; an empty slice means "not authored".
    pub pages: &'static [ImageAsset],
    /// Optional alternate full-document (PDF) reference.
    pub document: Option<&'static str>,
}

impl EbookRecord {
    /// Total page count: authored override, else `pages` length, else a
    /// single cover page. The three-tier fallback is deliberate policy.
    pub fn page_total(&self) -> u16 {
        if let Some(count) = self.page_count {
            return count.max(1);
        }
        if !self.pages.is_empty() {
            return self.pages.len().clamp(1, u16::MAX as usize) as u16;
        }
        1
    }

    /// Page view at a 0-based index, or `None` past the end. Indices
    /// beyond the authored page images fall back to the cover.
    pub fn page_at(&self, index: u16) -> Option<PageView> {
        if index >= self.page_total() {
            return None;
        }
        let image = self.pages.get(index as usize).copied().unwrap_or(self.cover);
        Some(PageView {
            number: index + 1,
            image,
        })
    }

    /// All derived pages in order. Always yields at least one view.
    pub fn page_views(&self) -> impl Iterator<Item = PageView> {
        let record = *self;
        (0..record.page_total()).filter_map(move |index| record.page_at(index))
    }
}

/// Catalog invariant violation, flagged at construction instead of being
/// silently resolved.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CatalogError {
    ZeroId,
    DuplicateId(u16),
    InvertedAgeRange(u16),
}

impl core::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CatalogError::ZeroId => write!(f, "record with id 0"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate record id {id}"),
            CatalogError::InvertedAgeRange(id) => {
                write!(f, "record {id} has min age above max age")
            }
        }
    }
}

/// Read-only, process-lifetime view over a validated static record set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Catalog {
    records: &'static [EbookRecord],
}

impl Catalog {
    /// Wraps a static record slice after checking catalog invariants.
    pub fn new(records: &'static [EbookRecord]) -> Result<Self, CatalogError> {
        for (position, record) in records.iter().enumerate() {
            if record.id == 0 {
                return Err(CatalogError::ZeroId);
            }
            if !record.age.is_ordered() {
                return Err(CatalogError::InvertedAgeRange(record.id));
            }
            if records[..position].iter().any(|prior| prior.id == record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    /// The built-in statically authored catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(&data::EBOOKS)
    }

    pub fn len(self) -> u16 {
        self.records.len().clamp(0, u16::MAX as usize) as u16
    }

    pub fn is_empty(self) -> bool {
        self.records.is_empty()
    }

    pub fn records(self) -> &'static [EbookRecord] {
        self.records
    }

    pub fn record_at(self, index: u16) -> Option<&'static EbookRecord> {
        self.records.get(index as usize)
    }

    pub fn by_id(self, id: u16) -> Option<&'static EbookRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Ordered subsequence of one category, with catalog indices. An
    /// empty result is not an error.
    pub fn by_category(
        self,
        category: Category,
    ) -> impl Iterator<Item = (u16, &'static EbookRecord)> {
        self.records
            .iter()
            .enumerate()
            .filter(move |(_, record)| record.category == category)
            .map(|(index, record)| (index as u16, record))
    }

    pub fn category_count(self, category: Category) -> u16 {
        self.by_category(category)
            .count()
            .clamp(0, u16::MAX as usize) as u16
    }
}

#[cfg(test)]
mod tests;
