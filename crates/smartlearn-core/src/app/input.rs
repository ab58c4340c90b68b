impl<IN> LearnApp<IN>
where
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    self.set_status("INPUT ERROR", "CHECK PROVIDER", now_ms);
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match self.ui {
            UiState::Home { cursor } => self.apply_home_input(cursor, event, now_ms),
            UiState::CategoryDetail { category, cursor } => {
                self.apply_category_input(category, cursor, event, now_ms)
            }
            UiState::Explore {
                cursor,
                editing,
                criteria,
            } => self.apply_explore_input(cursor, editing, criteria, event, now_ms),
            UiState::SearchResults { criteria, cursor } => {
                self.apply_search_input(criteria, cursor, event, now_ms)
            }
            UiState::Viewer { session, origin } => {
                self.apply_viewer_input(session, origin, event, now_ms)
            }
            UiState::Settings { cursor, editing } => {
                self.apply_settings_input(cursor, editing, event, now_ms)
            }
            UiState::About => {
                if matches!(event, InputEvent::Select | InputEvent::Back) {
                    self.enter_home(Category::COUNT as u16 + 2, now_ms);
                }
            }
            UiState::Status { .. } => {
                if matches!(event, InputEvent::Select | InputEvent::Back) {
                    self.enter_home(0, now_ms);
                }
            }
        }
    }

    fn apply_home_input(&mut self, cursor: u16, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::Next => {
                self.ui = UiState::Home {
                    cursor: rotate_cw(cursor, HOME_ITEM_COUNT),
                };
                self.start_transition(AnimationKind::SlideLeft, now_ms, ANIM_NAV_MS);
                self.pending_redraw = true;
            }
            InputEvent::Prev => {
                self.ui = UiState::Home {
                    cursor: rotate_ccw(cursor, HOME_ITEM_COUNT),
                };
                self.start_transition(AnimationKind::SlideRight, now_ms, ANIM_NAV_MS);
                self.pending_redraw = true;
            }
            InputEvent::Select => {
                if (cursor as usize) < Category::COUNT {
                    self.enter_category(Category::ALL[cursor as usize], 0, now_ms);
                    return;
                }

                match cursor - Category::COUNT as u16 {
                    0 => self.enter_explore(FilterCriteria::default(), 0, now_ms),
                    1 => self.enter_settings(0, false, now_ms),
                    _ => self.enter_about(now_ms),
                }
            }
            InputEvent::Back | InputEvent::JumpToPage(_) => {}
        }
    }

    fn apply_category_input(
        &mut self,
        category: Category,
        cursor: u16,
        event: InputEvent,
        now_ms: u64,
    ) {
        let count = self.catalog.category_count(category);

        match event {
            InputEvent::Next => {
                self.ui = UiState::CategoryDetail {
                    category,
                    cursor: rotate_cw(cursor, count.max(1)),
                };
                self.start_transition(AnimationKind::SlideLeft, now_ms, ANIM_NAV_MS);
                self.pending_redraw = true;
            }
            InputEvent::Prev => {
                self.ui = UiState::CategoryDetail {
                    category,
                    cursor: rotate_ccw(cursor, count.max(1)),
                };
                self.start_transition(AnimationKind::SlideRight, now_ms, ANIM_NAV_MS);
                self.pending_redraw = true;
            }
            InputEvent::Select => {
                let Some((index, _)) = self.catalog.by_category(category).nth(cursor as usize)
                else {
                    debug!(
                        "ui-nav: select in empty category key={} cursor={}",
                        category.info().key,
                        cursor
                    );
                    return;
                };
                self.open_viewer(index, ViewerOrigin::Category { category, cursor }, now_ms);
            }
            InputEvent::Back => self.enter_home(category.index() as u16, now_ms),
            InputEvent::JumpToPage(_) => {}
        }
    }

    fn apply_explore_input(
        &mut self,
        cursor: u8,
        editing: bool,
        mut criteria: FilterCriteria,
        event: InputEvent,
        now_ms: u64,
    ) {
        if editing {
            match event {
                InputEvent::Select | InputEvent::Back => {
                    self.enter_explore_row(criteria, cursor, false, now_ms)
                }
                InputEvent::Next | InputEvent::Prev => {
                    let grow = matches!(event, InputEvent::Next);
                    match ExploreRow::from_index(cursor) {
                        ExploreRow::MinAge => {
                            criteria.age.min = if grow {
                                criteria.age.min.saturating_add(1).min(criteria.age.max)
                            } else {
                                criteria.age.min.saturating_sub(1).max(AGE_DOMAIN.min)
                            };
                        }
                        ExploreRow::MaxAge => {
                            criteria.age.max = if grow {
                                criteria.age.max.saturating_add(1).min(AGE_DOMAIN.max)
                            } else {
                                criteria.age.max.saturating_sub(1).max(criteria.age.min)
                            };
                        }
                        _ => {}
                    }
                    self.ui = UiState::Explore {
                        cursor,
                        editing: true,
                        criteria,
                    };
                    self.pending_redraw = true;
                }
                InputEvent::JumpToPage(_) => {}
            }
            return;
        }

        match event {
            InputEvent::Next => {
                let next = rotate_cw(cursor as u16, ExploreRow::COUNT as u16) as u8;
                self.enter_explore_row(criteria, next, false, now_ms);
            }
            InputEvent::Prev => {
                let next = rotate_ccw(cursor as u16, ExploreRow::COUNT as u16) as u8;
                self.enter_explore_row(criteria, next, false, now_ms);
            }
            InputEvent::Select => match ExploreRow::from_index(cursor) {
                ExploreRow::MinAge | ExploreRow::MaxAge => {
                    self.enter_explore_row(criteria, cursor, true, now_ms)
                }
                ExploreRow::AnyDuration => {
                    criteria.durations.toggle_all_sentinel();
                    self.enter_explore_row(criteria, cursor, false, now_ms);
                }
                ExploreRow::Duration(duration) => {
                    criteria.durations.toggle(duration);
                    self.enter_explore_row(criteria, cursor, false, now_ms);
                }
                ExploreRow::Category(category) => {
                    criteria.categories.toggle(category);
                    self.enter_explore_row(criteria, cursor, false, now_ms);
                }
                ExploreRow::Apply => self.enter_search(criteria, 0, now_ms),
                ExploreRow::Back => self.enter_home(Category::COUNT as u16, now_ms),
            },
            InputEvent::Back => self.enter_home(Category::COUNT as u16, now_ms),
            InputEvent::JumpToPage(_) => {}
        }
    }

    fn apply_search_input(
        &mut self,
        criteria: FilterCriteria,
        cursor: u16,
        event: InputEvent,
        now_ms: u64,
    ) {
        let result = filter_catalog(self.catalog, &criteria);
        let count = result.indices.len().min(MAX_LIST_ITEMS) as u16;

        match event {
            InputEvent::Next => {
                self.ui = UiState::SearchResults {
                    criteria,
                    cursor: rotate_cw(cursor, count.max(1)),
                };
                self.start_transition(AnimationKind::SlideLeft, now_ms, ANIM_NAV_MS);
                self.pending_redraw = true;
            }
            InputEvent::Prev => {
                self.ui = UiState::SearchResults {
                    criteria,
                    cursor: rotate_ccw(cursor, count.max(1)),
                };
                self.start_transition(AnimationKind::SlideRight, now_ms, ANIM_NAV_MS);
                self.pending_redraw = true;
            }
            InputEvent::Select => {
                let Some(index) = result.indices.get(cursor as usize).copied() else {
                    debug!("ui-nav: select on empty results cursor={}", cursor);
                    return;
                };
                self.open_viewer(index, ViewerOrigin::Search { criteria, cursor }, now_ms);
            }
            InputEvent::Back => {
                self.enter_explore_row(criteria, ExploreRow::APPLY_INDEX, false, now_ms)
            }
            InputEvent::JumpToPage(_) => {}
        }
    }

    fn apply_viewer_input(
        &mut self,
        mut session: ViewerSession,
        origin: ViewerOrigin,
        event: InputEvent,
        now_ms: u64,
    ) {
        match event {
            InputEvent::Next => {
                if session.next_page() {
                    self.ui = UiState::Viewer { session, origin };
                    self.start_transition(AnimationKind::SlideLeft, now_ms, ANIM_NAV_MS);
                    self.pending_redraw = true;
                }
            }
            InputEvent::Prev => {
                if session.previous_page() {
                    self.ui = UiState::Viewer { session, origin };
                    self.start_transition(AnimationKind::SlideRight, now_ms, ANIM_NAV_MS);
                    self.pending_redraw = true;
                }
            }
            InputEvent::JumpToPage(page) => {
                if session.jump_to(page) {
                    self.ui = UiState::Viewer { session, origin };
                    self.start_transition(AnimationKind::Fade, now_ms, ANIM_NAV_MS);
                    self.pending_redraw = true;
                }
            }
            InputEvent::Select => {
                session.toggle_full_screen();
                self.ui = UiState::Viewer { session, origin };
                self.pending_redraw = true;
            }
            InputEvent::Back => match origin {
                ViewerOrigin::Category { category, cursor } => {
                    self.enter_category(category, cursor, now_ms)
                }
                ViewerOrigin::Search { criteria, cursor } => {
                    self.enter_search(criteria, cursor, now_ms)
                }
            },
        }
    }

    fn apply_settings_input(&mut self, cursor: u8, editing: bool, event: InputEvent, now_ms: u64) {
        if editing {
            match event {
                InputEvent::Select | InputEvent::Back => {
                    self.enter_settings(cursor, false, now_ms)
                }
                InputEvent::Next | InputEvent::Prev => {
                    match SettingsRow::from_index(cursor) {
                        SettingsRow::Language => self.language = self.language.toggled(),
                        SettingsRow::AutoUpdate => self.auto_update = !self.auto_update,
                        SettingsRow::Back => {}
                    }
                    self.pending_redraw = true;
                }
                InputEvent::JumpToPage(_) => {}
            }
            return;
        }

        match event {
            InputEvent::Next => {
                let next = rotate_cw(cursor as u16, SettingsRow::COUNT as u16) as u8;
                self.enter_settings(next, false, now_ms);
            }
            InputEvent::Prev => {
                let next = rotate_ccw(cursor as u16, SettingsRow::COUNT as u16) as u8;
                self.enter_settings(next, false, now_ms);
            }
            InputEvent::Select => {
                let row = SettingsRow::from_index(cursor);
                if matches!(row, SettingsRow::Back) {
                    self.enter_home(Category::COUNT as u16 + 1, now_ms);
                } else {
                    self.enter_settings(cursor, true, now_ms);
                }
            }
            InputEvent::Back => self.enter_home(Category::COUNT as u16 + 1, now_ms),
            InputEvent::JumpToPage(_) => {}
        }
    }
}
