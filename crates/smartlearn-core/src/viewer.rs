//! Per-session page-viewer state machine.

use log::debug;

use crate::catalog::EbookRecord;

/// How a record's content is presented, decided once when the session
/// opens. Records carrying a full-document reference embed that document;
/// everything else pages through its image sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RenderStrategy {
    ImageSequence,
    DocumentEmbed(&'static str),
}

/// Ephemeral viewer state: one session per opened e-book. The page index
/// is always within `[0, page_count - 1]`; out-of-range requests are
/// ignored rather than raised.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ViewerSession {
    ebook_index: u16,
    page_index: u16,
    page_count: u16,
    full_screen: bool,
    strategy: RenderStrategy,
}

impl ViewerSession {
    /// Opens a session on the first page, fullscreen off.
    pub fn open(ebook_index: u16, record: &EbookRecord) -> Self {
        let strategy = match record.document {
            Some(url) => RenderStrategy::DocumentEmbed(url),
            None => RenderStrategy::ImageSequence,
        };
        Self {
            ebook_index,
            page_index: 0,
            page_count: record.page_total().max(1),
            full_screen: false,
            strategy,
        }
    }

    pub const fn ebook_index(self) -> u16 {
        self.ebook_index
    }

    pub const fn page_index(self) -> u16 {
        self.page_index
    }

    pub const fn page_count(self) -> u16 {
        self.page_count
    }

    pub const fn is_full_screen(self) -> bool {
        self.full_screen
    }

    pub const fn strategy(self) -> RenderStrategy {
        self.strategy
    }

    /// Advance one page; a no-op (not an error) on the last page.
    /// Returns whether the index changed.
    pub fn next_page(&mut self) -> bool {
        if self.page_index + 1 >= self.page_count {
            return false;
        }
        self.page_index += 1;
        true
    }

    /// Step back one page; a no-op on the first page.
    pub fn previous_page(&mut self) -> bool {
        if self.page_index == 0 {
            return false;
        }
        self.page_index -= 1;
        true
    }

    /// Jump to a 0-based page. Out-of-range targets are silently ignored
    /// and the current page is retained.
    pub fn jump_to(&mut self, page_index: u16) -> bool {
        if page_index >= self.page_count {
            debug!(
                "viewer: ignoring jump to {} of {}",
                page_index, self.page_count
            );
            return false;
        }
        self.page_index = page_index;
        true
    }

    /// Independent of the page index.
    pub fn toggle_full_screen(&mut self) {
        self.full_screen = !self.full_screen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn three_page_session() -> ViewerSession {
        let catalog = Catalog::builtin().unwrap();
        // Record 1 is authored with three page images.
        let record = catalog.by_id(1).unwrap();
        assert_eq!(record.page_total(), 3);
        ViewerSession::open(0, record)
    }

    #[test]
    fn opens_on_first_page_windowed() {
        let session = three_page_session();
        assert_eq!(session.page_index(), 0);
        assert!(!session.is_full_screen());
        assert_eq!(session.strategy(), RenderStrategy::ImageSequence);
    }

    #[test]
    fn next_and_prev_clamp_at_bounds() {
        let mut session = three_page_session();

        assert!(!session.previous_page());
        assert_eq!(session.page_index(), 0);

        assert!(session.next_page());
        assert!(session.next_page());
        assert_eq!(session.page_index(), 2);

        assert!(!session.next_page());
        assert_eq!(session.page_index(), 2);
    }

    #[test]
    fn index_stays_in_bounds_under_any_walk() {
        let mut session = three_page_session();
        let steps = [1i8, 1, 1, 1, -1, -1, -1, -1, -1, 1];
        for step in steps {
            if step > 0 {
                session.next_page();
            } else {
                session.previous_page();
            }
            assert!(session.page_index() < session.page_count());
        }
    }

    #[test]
    fn out_of_range_jump_is_ignored() {
        let mut session = three_page_session();
        session.next_page();

        assert!(!session.jump_to(3));
        assert!(!session.jump_to(u16::MAX));
        assert_eq!(session.page_index(), 1);

        assert!(session.jump_to(2));
        assert_eq!(session.page_index(), 2);
    }

    #[test]
    fn full_screen_is_orthogonal_to_paging() {
        let mut session = three_page_session();
        session.toggle_full_screen();
        assert!(session.is_full_screen());

        session.next_page();
        assert!(session.is_full_screen());

        session.toggle_full_screen();
        assert!(!session.is_full_screen());
        assert_eq!(session.page_index(), 1);
    }

    #[test]
    fn document_records_embed_instead_of_paging() {
        let record = EbookRecord {
            document: Some("https://example.org/ebook.pdf"),
            ..*Catalog::builtin().unwrap().by_id(1).unwrap()
        };
        let session = ViewerSession::open(0, &record);
        assert_eq!(
            session.strategy(),
            RenderStrategy::DocumentEmbed("https://example.org/ebook.pdf")
        );
    }
}
