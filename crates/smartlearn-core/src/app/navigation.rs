impl<IN> LearnApp<IN>
where
    IN: InputProvider,
{
    fn enter_home(&mut self, cursor: u16, now_ms: u64) {
        self.ui = UiState::Home {
            cursor: cursor.min(HOME_ITEM_COUNT - 1),
        };
        self.start_transition(AnimationKind::SlideRight, now_ms, ANIM_MENU_MS);
        self.pending_redraw = true;
    }

    fn enter_category(&mut self, category: Category, cursor: u16, now_ms: u64) {
        let count = self.catalog.category_count(category);
        debug!(
            "ui-nav: enter category key={} count={} cursor={}",
            category.info().key,
            count,
            cursor
        );
        self.ui = UiState::CategoryDetail {
            category,
            cursor: cursor.min(count.saturating_sub(1)),
        };
        self.start_transition(AnimationKind::SlideLeft, now_ms, ANIM_MENU_MS);
        self.pending_redraw = true;
    }

    fn enter_explore(&mut self, criteria: FilterCriteria, cursor: u8, now_ms: u64) {
        debug!("ui-nav: enter explore cursor={}", cursor);
        self.ui = UiState::Explore {
            cursor: cursor.min(ExploreRow::COUNT - 1),
            editing: false,
            criteria,
        };
        self.start_transition(AnimationKind::SlideLeft, now_ms, ANIM_MENU_MS);
        self.pending_redraw = true;
    }

    /// Cursor movement and value edits inside explore, without replaying
    /// the screen-entry transition.
    fn enter_explore_row(
        &mut self,
        criteria: FilterCriteria,
        cursor: u8,
        editing: bool,
        now_ms: u64,
    ) {
        self.ui = UiState::Explore {
            cursor: cursor.min(ExploreRow::COUNT - 1),
            editing,
            criteria,
        };
        self.start_transition(AnimationKind::Fade, now_ms, ANIM_NAV_MS);
        self.pending_redraw = true;
    }

    fn enter_search(&mut self, criteria: FilterCriteria, cursor: u16, now_ms: u64) {
        let result = filter_catalog(self.catalog, &criteria);
        debug!(
            "ui-nav: enter search results count={} truncated={} cursor={}",
            result.indices.len(),
            result.truncated,
            cursor
        );
        self.ui = UiState::SearchResults { criteria, cursor };
        self.start_transition(AnimationKind::SlideLeft, now_ms, ANIM_SCREEN_MS);
        self.pending_redraw = true;
    }

    fn open_viewer(&mut self, ebook_index: u16, origin: ViewerOrigin, now_ms: u64) {
        let Some(record) = self.catalog.record_at(ebook_index) else {
            self.set_status("CATALOG ERROR", "RECORD MISSING", now_ms);
            return;
        };

        debug!(
            "ui-nav: open viewer index={} id={} pages={}",
            ebook_index,
            record.id,
            record.page_total()
        );
        self.ui = UiState::Viewer {
            session: ViewerSession::open(ebook_index, record),
            origin,
        };
        self.start_transition(AnimationKind::Fade, now_ms, ANIM_SCREEN_MS);
        self.pending_redraw = true;
    }

    fn enter_settings(&mut self, cursor: u8, editing: bool, now_ms: u64) {
        self.ui = UiState::Settings { cursor, editing };
        self.start_transition(AnimationKind::SlideLeft, now_ms, ANIM_MENU_MS);
        self.pending_redraw = true;
    }

    fn enter_about(&mut self, now_ms: u64) {
        self.ui = UiState::About;
        self.start_transition(AnimationKind::Fade, now_ms, ANIM_SCREEN_MS);
        self.pending_redraw = true;
    }

    fn set_status(&mut self, line1: &'static str, line2: &'static str, now_ms: u64) {
        self.ui = UiState::Status { line1, line2 };
        self.start_transition(AnimationKind::Fade, now_ms, ANIM_SCREEN_MS);
        self.pending_redraw = true;
    }

    fn start_transition(&mut self, kind: AnimationKind, now_ms: u64, duration_ms: u16) {
        self.transition = Some(AnimationSpec::new(kind, now_ms, duration_ms));
    }

    fn transition_frame(&self, now_ms: u64) -> Option<crate::render::AnimationFrame> {
        self.transition.and_then(|anim| anim.frame(now_ms))
    }
}
