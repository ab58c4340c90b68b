use super::*;

fn record(id: u16, category: Category, age: AgeRange) -> EbookRecord {
    EbookRecord {
        id,
        title: "Sample",
        category,
        age,
        duration: Duration::Mins25To45,
        page_count: None,
        cover: ImageAsset::new("sample/1.png"),
        pages: &[],
        document: None,
    }
}

#[test]
fn builtin_catalog_is_valid() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.len(), 14);
    assert!(!catalog.is_empty());
}

#[test]
fn duplicate_ids_are_flagged() {
    static RECORDS: [EbookRecord; 2] = [
        EbookRecord {
            id: 2,
            title: "First",
            category: Category::ArtsMusic,
            age: AgeRange::new(6, 10),
            duration: Duration::Mins15To25,
            page_count: None,
            cover: ImageAsset::new("a/1.png"),
            pages: &[],
            document: None,
        },
        EbookRecord {
            id: 2,
            title: "Second",
            category: Category::Mathematics,
            age: AgeRange::new(6, 10),
            duration: Duration::Mins15To25,
            page_count: None,
            cover: ImageAsset::new("b/1.png"),
            pages: &[],
            document: None,
        },
    ];

    assert_eq!(Catalog::new(&RECORDS), Err(CatalogError::DuplicateId(2)));
}

#[test]
fn inverted_age_range_is_flagged() {
    static RECORDS: [EbookRecord; 1] = [EbookRecord {
        id: 5,
        title: "Backwards",
        category: Category::ArtsMusic,
        age: AgeRange::new(12, 8),
        duration: Duration::Mins15To25,
        page_count: None,
        cover: ImageAsset::new("a/1.png"),
        pages: &[],
        document: None,
    }];

    assert_eq!(Catalog::new(&RECORDS), Err(CatalogError::InvertedAgeRange(5)));
}

#[test]
fn lookup_by_id_never_substitutes() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.by_id(3).map(|r| r.title), Some("Visual-spatial perspective"));
    assert!(catalog.by_id(999).is_none());
}

#[test]
fn by_category_preserves_catalog_order() {
    let catalog = Catalog::builtin().unwrap();
    let ids: Vec<u16> = catalog
        .by_category(Category::Mathematics)
        .map(|(_, record)| record.id)
        .collect();
    assert_eq!(ids, vec![3, 4, 5, 6, 7]);

    // Empty categories are a valid, empty result.
    assert_eq!(catalog.category_count(Category::MotherLanguage), 0);
}

#[test]
fn page_total_prefers_authored_count() {
    let mut authored = record(1, Category::ArtsMusic, AgeRange::new(6, 10));
    authored.page_count = Some(7);
    assert_eq!(authored.page_total(), 7);
}

#[test]
fn page_total_falls_back_to_pages_then_cover() {
    static PAGES: [ImageAsset; 3] = [
        ImageAsset::new("a/1.png"),
        ImageAsset::new("a/2.png"),
        ImageAsset::new("a/3.png"),
    ];

    let mut with_pages = record(1, Category::ArtsMusic, AgeRange::new(6, 10));
    with_pages.pages = &PAGES;
    assert_eq!(with_pages.page_total(), 3);

    let cover_only = record(2, Category::ArtsMusic, AgeRange::new(6, 10));
    assert_eq!(cover_only.page_total(), 1);
}

#[test]
fn cover_only_record_derives_single_cover_page() {
    let cover_only = record(9, Category::EthicsReligion, AgeRange::new(6, 10));
    let views: Vec<PageView> = cover_only.page_views().collect();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].number, 1);
    assert_eq!(views[0].uri(), "sample/1.png");
}

#[test]
fn page_views_match_page_total_for_all_builtin_records() {
    let catalog = Catalog::builtin().unwrap();
    for record in catalog.records() {
        assert_eq!(
            record.page_views().count(),
            record.page_total() as usize,
            "record {}",
            record.id
        );
    }
}

#[test]
fn page_numbers_are_one_based_and_bounded() {
    let catalog = Catalog::builtin().unwrap();
    let record = catalog.by_id(1).unwrap();
    assert_eq!(record.page_at(0).map(|p| p.number), Some(1));
    assert_eq!(record.page_at(2).map(|p| p.number), Some(3));
    assert!(record.page_at(3).is_none());
}
