//! Statically authored catalog tables.
//!
//! Records are authored at build time and never mutated. Duration tags
//! from the source material are normalized into the canonical buckets
//! here so downstream code never sees stray tags.

use super::{AgeRange, Category, CategoryInfo, Duration, EbookRecord, ImageAsset};

pub(super) const CATEGORY_INFOS: [CategoryInfo; Category::COUNT] = [
    CategoryInfo {
        title: "Arts & Music",
        title_tr: "Sanat ve Müzik",
        key: "arts_music",
        color: [0x60, 0xBF, 0xB2],
    },
    CategoryInfo {
        title: "Mother Language",
        title_tr: "Ana Dil",
        key: "mother_language",
        color: [0xFF, 0x86, 0x29],
    },
    CategoryInfo {
        title: "Foreign Languages",
        title_tr: "Yabancı Dil",
        key: "foreign_languages",
        color: [0xFF, 0xB5, 0x4A],
    },
    CategoryInfo {
        title: "Natural & Social Sciences",
        title_tr: "Doğa ve Sosyal Bilimler",
        key: "natural_sciences",
        color: [0xBC, 0x51, 0x40],
    },
    CategoryInfo {
        title: "Physical Education",
        title_tr: "Beden Eğitimi",
        key: "physical_education",
        color: [0xBA, 0x89, 0xFF],
    },
    CategoryInfo {
        title: "Mathematics",
        title_tr: "Matematik",
        key: "mathematics",
        color: [0xE7, 0x4C, 0x3C],
    },
    CategoryInfo {
        title: "Ethics & Religion",
        title_tr: "Etik ve Din",
        key: "ethics_religion",
        color: [0x61, 0xA8, 0xD7],
    },
];

const fn asset(path: &'static str) -> ImageAsset {
    ImageAsset::new(path)
}

pub static EBOOKS: [EbookRecord; 14] = [
    EbookRecord {
        id: 1,
        title: "Creative expression: drawing, art and designing",
        category: Category::ArtsMusic,
        age: AgeRange::new(9, 10),
        duration: Duration::Hours1To2,
        page_count: None,
        cover: asset("arts_music/p1/1.png"),
        pages: &[
            asset("arts_music/p1/1.png"),
            asset("arts_music/p1/2.png"),
            asset("arts_music/p1/3.png"),
        ],
        document: None,
    },
    EbookRecord {
        id: 2,
        title: "Create and play handmade instruments",
        category: Category::ArtsMusic,
        age: AgeRange::new(6, 14),
        duration: Duration::Mins25To45,
        page_count: None,
        cover: asset("arts_music/p2/1.png"),
        pages: &[
            asset("arts_music/p2/1.png"),
            asset("arts_music/p2/2.png"),
            asset("arts_music/p2/3.png"),
        ],
        document: None,
    },
    EbookRecord {
        id: 3,
        title: "Visual-spatial perspective",
        category: Category::Mathematics,
        age: AgeRange::new(6, 7),
        // source tag "25_mins"
        duration: Duration::Mins15To25,
        page_count: None,
        cover: asset("mathematics/p4/1.png"),
        pages: &[asset("mathematics/p4/1.png"), asset("mathematics/p4/2.png")],
        document: None,
    },
    EbookRecord {
        id: 4,
        title: "Measurements",
        category: Category::Mathematics,
        age: AgeRange::new(8, 12),
        // source tag "40_mins"
        duration: Duration::Mins25To45,
        page_count: None,
        cover: asset("mathematics/p2/1.png"),
        pages: &[asset("mathematics/p2/1.png"), asset("mathematics/p2/2.png")],
        document: None,
    },
    EbookRecord {
        id: 5,
        title: "Working with data",
        category: Category::Mathematics,
        age: AgeRange::new(7, 12),
        // source tag "30_40mins"
        duration: Duration::Mins25To45,
        page_count: None,
        cover: asset("mathematics/p5/1.png"),
        pages: &[
            asset("mathematics/p5/1.png"),
            asset("mathematics/p5/2.png"),
            asset("mathematics/p5/3.png"),
            asset("mathematics/p5/4.png"),
        ],
        document: None,
    },
    EbookRecord {
        id: 6,
        title: "Addition and subtraction of fractions",
        category: Category::Mathematics,
        age: AgeRange::new(7, 9),
        // source tag "80_mins"
        duration: Duration::Hours1To2,
        page_count: None,
        cover: asset("mathematics/p1/1.png"),
        pages: &[
            asset("mathematics/p1/1.png"),
            asset("mathematics/p1/2.png"),
            asset("mathematics/p1/3.png"),
            asset("mathematics/p1/4.png"),
        ],
        document: None,
    },
    EbookRecord {
        id: 7,
        title: "Problem Solving",
        category: Category::Mathematics,
        age: AgeRange::new(7, 10),
        // source tag "90_mins"
        duration: Duration::Hours1To2,
        page_count: None,
        cover: asset("mathematics/p3/1.png"),
        pages: &[
            asset("mathematics/p3/1.png"),
            asset("mathematics/p3/2.png"),
            asset("mathematics/p3/3.png"),
            asset("mathematics/p3/4.png"),
        ],
        document: None,
    },
    EbookRecord {
        id: 8,
        title: "Cultural and spiritual diversity",
        category: Category::EthicsReligion,
        age: AgeRange::new(7, 10),
        duration: Duration::Hours1To2,
        page_count: None,
        cover: asset("ethics_religion/p1/1.png"),
        pages: &[
            asset("ethics_religion/p1/1.png"),
            asset("ethics_religion/p1/2.png"),
        ],
        document: None,
    },
    EbookRecord {
        id: 9,
        title: "Ethical Discussions",
        category: Category::EthicsReligion,
        age: AgeRange::new(7, 10),
        duration: Duration::Hours1To2,
        page_count: None,
        cover: asset("ethics_religion/p2/1.png"),
        pages: &[
            asset("ethics_religion/p2/1.png"),
            asset("ethics_religion/p2/2.png"),
            asset("ethics_religion/p2/3.png"),
        ],
        document: None,
    },
    EbookRecord {
        id: 10,
        title: "Values and Morals",
        category: Category::EthicsReligion,
        age: AgeRange::new(7, 10),
        duration: Duration::Hours1To2,
        page_count: None,
        cover: asset("ethics_religion/p3/1.png"),
        pages: &[
            asset("ethics_religion/p3/1.png"),
            asset("ethics_religion/p3/2.png"),
        ],
        document: None,
    },
    EbookRecord {
        id: 11,
        title: "Introduction to basic vocabulary",
        category: Category::ForeignLanguages,
        age: AgeRange::new(6, 11),
        // source tag "60_mins"
        duration: Duration::Hours1To2,
        page_count: None,
        cover: asset("foreign_languages/p2/1.png"),
        pages: &[
            asset("foreign_languages/p2/1.png"),
            asset("foreign_languages/p2/2.png"),
            asset("foreign_languages/p2/3.png"),
            asset("foreign_languages/p2/4.png"),
            asset("foreign_languages/p2/5.png"),
        ],
        document: None,
    },
    EbookRecord {
        id: 12,
        title: "Simple communication",
        category: Category::ForeignLanguages,
        age: AgeRange::new(10, 12),
        // source tag "45_mins"
        duration: Duration::Mins25To45,
        page_count: None,
        cover: asset("foreign_languages/p1/1.png"),
        pages: &[
            asset("foreign_languages/p1/1.png"),
            asset("foreign_languages/p1/2.png"),
            asset("foreign_languages/p1/3.png"),
        ],
        document: None,
    },
    EbookRecord {
        id: 13,
        title: "Developing comprehension through listening tasks",
        category: Category::ForeignLanguages,
        age: AgeRange::new(7, 10),
        // source tag "35_mins"
        duration: Duration::Mins25To45,
        page_count: None,
        cover: asset("foreign_languages/p4/1.png"),
        pages: &[
            asset("foreign_languages/p4/1.png"),
            asset("foreign_languages/p4/2.png"),
            asset("foreign_languages/p4/3.png"),
            asset("foreign_languages/p4/4.png"),
        ],
        document: None,
    },
    EbookRecord {
        id: 14,
        title: "Developing comprehension during reading tasks",
        category: Category::ForeignLanguages,
        age: AgeRange::new(10, 11),
        // source tag "35_40_mins"
        duration: Duration::Mins25To45,
        page_count: None,
        cover: asset("foreign_languages/p3/1.png"),
        pages: &[
            asset("foreign_languages/p3/1.png"),
            asset("foreign_languages/p3/2.png"),
            asset("foreign_languages/p3/3.png"),
        ],
        document: None,
    },
];
