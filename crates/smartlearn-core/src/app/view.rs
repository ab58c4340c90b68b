impl<IN> LearnApp<IN>
where
    IN: InputProvider,
{
    pub fn new(catalog: Catalog, input: IN, app_title: &'static str) -> Self {
        Self {
            catalog,
            input,
            app_title,
            language: Language::default(),
            auto_update: true,
            ui: UiState::Home { cursor: 0 },
            pending_redraw: true,
            transition: None,
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        let rendered = if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        };

        if self.transition_frame(now_ms).is_some() {
            TickResult::RenderRequested
        } else {
            rendered
        }
    }

    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let animation = self.transition_frame(now_ms);

        match self.ui {
            UiState::Home { cursor } => {
                let mut cards = [CategoryCardView::default(); Category::COUNT];
                for (slot, category) in cards.iter_mut().zip(Category::ALL) {
                    *slot = CategoryCardView {
                        title: category.title(self.language),
                        color: category.info().color,
                        ebook_count: self.catalog.category_count(category),
                    };
                }

                let menu = [
                    MenuItemView {
                        label: "Explore",
                        kind: MenuItemKind::Explore,
                    },
                    MenuItemView {
                        label: "Settings",
                        kind: MenuItemKind::Settings,
                    },
                    MenuItemView {
                        label: "About",
                        kind: MenuItemKind::About,
                    },
                ];

                f(Screen::Home {
                    title: self.app_title,
                    subtitle: "Categories",
                    cards: &cards,
                    menu: &menu,
                    cursor: (cursor as usize).min(HOME_ITEM_COUNT as usize - 1),
                    animation,
                });
            }
            UiState::CategoryDetail { category, cursor } => {
                let mut items = [EbookCardView::default(); MAX_LIST_ITEMS];
                let mut count = 0usize;
                for (_, record) in self.catalog.by_category(category) {
                    if count >= MAX_LIST_ITEMS {
                        break;
                    }
                    items[count] = self.ebook_card(record);
                    count += 1;
                }

                f(Screen::CategoryDetail {
                    title: category.title(self.language),
                    color: category.info().color,
                    items: &items[..count],
                    cursor: (cursor as usize).min(count.saturating_sub(1)),
                    animation,
                });
            }
            UiState::Explore {
                cursor,
                editing,
                criteria,
            } => {
                let mut rows = [SettingRowView::default(); ExploreRow::COUNT as usize];
                for (index, row) in rows.iter_mut().enumerate() {
                    *row = self.explore_row_view(ExploreRow::from_index(index as u8), &criteria);
                }

                f(Screen::Explore {
                    title: "Explore",
                    rows: &rows,
                    cursor: (cursor as usize).min(rows.len() - 1),
                    editing,
                    animation,
                });
            }
            UiState::SearchResults { criteria, cursor } => {
                let result = filter_catalog(self.catalog, &criteria);
                let mut items = [EbookCardView::default(); MAX_LIST_ITEMS];
                let mut count = 0usize;
                for index in result.indices.iter() {
                    if count >= MAX_LIST_ITEMS {
                        break;
                    }
                    if let Some(record) = self.catalog.record_at(*index) {
                        items[count] = self.ebook_card(record);
                        count += 1;
                    }
                }

                f(Screen::SearchResults {
                    title: "Results",
                    items: &items[..count],
                    truncated: result.truncated || result.indices.len() > MAX_LIST_ITEMS,
                    cursor: (cursor as usize).min(count.saturating_sub(1)),
                    animation,
                });
            }
            UiState::Viewer { session, .. } => {
                let Some(record) = self.catalog.record_at(session.ebook_index()) else {
                    f(Screen::Status {
                        title: self.app_title,
                        line1: "CATALOG ERROR",
                        line2: "RECORD MISSING",
                        animation,
                    });
                    return;
                };

                let mut title_buf = [0u8; VIEWER_TITLE_BYTES];
                let title = preview_compact(record.title, &mut title_buf);

                let content = match session.strategy() {
                    RenderStrategy::DocumentEmbed(url) => ViewerContentView::Document { url },
                    RenderStrategy::ImageSequence => ViewerContentView::Page {
                        image: record
                            .page_at(session.page_index())
                            .map(|page| page.image)
                            .unwrap_or(record.cover),
                    },
                };

                f(Screen::Viewer {
                    title,
                    content,
                    page_number: session.page_index() + 1,
                    page_total: session.page_count(),
                    full_screen: session.is_full_screen(),
                    animation,
                });
            }
            UiState::Settings { cursor, editing } => {
                let rows = [
                    SettingRowView {
                        key: "Language",
                        value: SettingValue::Label(self.language.label()),
                    },
                    SettingRowView {
                        key: "Auto update",
                        value: SettingValue::Toggle(self.auto_update),
                    },
                    SettingRowView {
                        key: "Back",
                        value: SettingValue::Action("Return"),
                    },
                ];

                f(Screen::Settings {
                    title: "Settings",
                    rows: &rows,
                    cursor: (cursor as usize).min(rows.len() - 1),
                    editing,
                    animation,
                });
            }
            UiState::About => {
                let lines: &[&str] = match self.language {
                    Language::English => &ABOUT_LINES_EN,
                    Language::Turkish => &ABOUT_LINES_TR,
                };
                f(Screen::About {
                    app_name: self.app_title,
                    version: env!("CARGO_PKG_VERSION"),
                    lines,
                    animation,
                });
            }
            UiState::Status { line1, line2 } => {
                f(Screen::Status {
                    title: self.app_title,
                    line1,
                    line2,
                    animation,
                });
            }
        }
    }

    pub fn persisted_settings(&self) -> PersistedSettings {
        PersistedSettings::new(self.language, self.auto_update)
    }

    pub fn apply_persisted_settings(&mut self, settings: PersistedSettings) {
        self.language = settings.language;
        self.auto_update = settings.auto_update;
        self.pending_redraw = true;
    }

    fn ebook_card(&self, record: &'static crate::catalog::EbookRecord) -> EbookCardView<'static> {
        EbookCardView {
            title: record.title,
            category_title: record.category.title(self.language),
            color: record.category.info().color,
            age_min: record.age.min,
            age_max: record.age.max,
            duration_label: record.duration.label(),
            page_total: record.page_total(),
        }
    }

    fn explore_row_view(
        &self,
        row: ExploreRow,
        criteria: &FilterCriteria,
    ) -> SettingRowView<'static> {
        match row {
            ExploreRow::MinAge => SettingRowView {
                key: "Min age",
                value: SettingValue::Number(criteria.age.min as u16),
            },
            ExploreRow::MaxAge => SettingRowView {
                key: "Max age",
                value: SettingValue::Number(criteria.age.max as u16),
            },
            ExploreRow::AnyDuration => SettingRowView {
                key: "Any duration",
                value: SettingValue::Toggle(criteria.durations.contains_all_sentinel()),
            },
            ExploreRow::Duration(duration) => SettingRowView {
                key: duration.label(),
                value: SettingValue::Toggle(criteria.durations.contains(duration)),
            },
            ExploreRow::Category(category) => SettingRowView {
                key: category.title(self.language),
                value: SettingValue::Toggle(criteria.categories.contains(category)),
            },
            ExploreRow::Apply => SettingRowView {
                key: "Apply",
                value: SettingValue::Action("Search"),
            },
            ExploreRow::Back => SettingRowView {
                key: "Back",
                value: SettingValue::Action("Return"),
            },
        }
    }
}
