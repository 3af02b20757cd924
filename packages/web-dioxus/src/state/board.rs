//! Anonymous thought board
//!
//! All state behind the discussion rooms page lives here as a plain
//! struct, so every transition is testable without spinning up the UI.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::Utc;

use crate::types::{ReactionKind, Reply, Room, Thought};

/// Display order for the thought feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Newest,
    Oldest,
    MostLiked,
}

impl SortMode {
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Newest => "Newest",
            SortMode::Oldest => "Oldest",
            SortMode::MostLiked => "Most Liked",
        }
    }

    pub fn variants() -> &'static [SortMode] {
        &[SortMode::Newest, SortMode::Oldest, SortMode::MostLiked]
    }
}

/// In-memory state for the anonymous discussion feed.
///
/// Owns the session's thoughts plus the selection state around them:
/// active room, composer visibility, sort mode, and draft buffers. The
/// methods here are the only way to mutate any of it. Storage order of
/// `thoughts` is newest-first and never changes under sorting; display
/// order is always a derived copy.
///
/// Validation failures (blank text, no room selected, unmatched ids) are
/// silent no-ops. The UI disables the offending control instead of
/// surfacing an error, and nothing here does I/O, so there is no error
/// type to return.
#[derive(Clone, Debug, PartialEq)]
pub struct ThoughtBoard {
    active_room: Option<Room>,
    composer_open: bool,
    thoughts: Vec<Thought>,
    sort_mode: SortMode,
    thought_draft: String,
    reply_drafts: BTreeMap<u64, String>,
    next_id: u64,
}

impl ThoughtBoard {
    pub fn new() -> Self {
        Self {
            active_room: None,
            composer_open: false,
            thoughts: Vec::new(),
            sort_mode: SortMode::default(),
            thought_draft: String::new(),
            reply_drafts: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn active_room(&self) -> Option<&Room> {
        self.active_room.as_ref()
    }

    /// Room the composer is targeting, if the composer is open.
    pub fn composer_room(&self) -> Option<Room> {
        if self.composer_open {
            self.active_room.clone()
        } else {
            None
        }
    }

    /// Thoughts in storage order, newest first.
    pub fn thoughts(&self) -> &[Thought] {
        &self.thoughts
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn thought_draft(&self) -> &str {
        &self.thought_draft
    }

    /// Reply draft for one thought. Buffers are keyed per thought, so text
    /// typed under one card never leaks into another.
    pub fn reply_draft(&self, thought_id: u64) -> &str {
        self.reply_drafts
            .get(&thought_id)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Selects a room and opens the composer targeting it. Always succeeds;
    /// rooms come from the catalog and need no validation.
    pub fn select_room(&mut self, room: Room) {
        self.active_room = Some(room);
        self.composer_open = true;
    }

    /// Hides the composer. The room selection is kept, so reopening
    /// targets the same room.
    pub fn close_composer(&mut self) {
        self.composer_open = false;
    }

    pub fn set_thought_draft(&mut self, text: String) {
        self.thought_draft = text;
    }

    pub fn set_reply_draft(&mut self, thought_id: u64, text: String) {
        self.reply_drafts.insert(thought_id, text);
    }

    /// Posts `text` as a new thought in the active room, prepending it to
    /// the feed, then clears the draft and closes the composer. Blank text
    /// or a missing room selection makes this a no-op.
    pub fn submit_thought(&mut self, text: &str) {
        let content = text.trim();
        let Some(room_id) = self.active_room.as_ref().map(|r| r.id) else {
            return;
        };
        if content.is_empty() {
            return;
        }
        let thought = Thought {
            id: self.allocate_id(),
            content: content.to_string(),
            room_id,
            created_at: Utc::now(),
            like_count: 0,
            reactions: BTreeMap::new(),
            replies: Vec::new(),
        };
        self.thoughts.insert(0, thought);
        self.thought_draft.clear();
        self.composer_open = false;
    }

    /// Appends `text` as a reply to the matching thought and clears that
    /// thought's draft buffer. Blank text or an unmatched id is a no-op.
    pub fn submit_reply(&mut self, thought_id: u64, text: &str) {
        let content = text.trim();
        if content.is_empty() {
            return;
        }
        let Some(index) = self.thoughts.iter().position(|t| t.id == thought_id) else {
            return;
        };
        let reply = Reply {
            id: self.allocate_id(),
            content: content.to_string(),
            created_at: Utc::now(),
        };
        self.thoughts[index].replies.push(reply);
        self.reply_drafts.remove(&thought_id);
    }

    /// Adds one reaction of `kind` to the matching thought. Anonymous posts
    /// leave nothing to key a per-user limit on, so repeated clicks keep
    /// counting. Unmatched ids are ignored.
    pub fn add_reaction(&mut self, thought_id: u64, kind: ReactionKind) {
        if let Some(thought) = self.thoughts.iter_mut().find(|t| t.id == thought_id) {
            *thought.reactions.entry(kind).or_insert(0) += 1;
        }
    }

    /// Changes the display order. Storage is untouched.
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
    }

    /// The feed in display order: a sorted copy of the thoughts.
    ///
    /// Newest and oldest sort on creation time with the id as tie break;
    /// ids increase monotonically, so thoughts created within the same
    /// clock tick still order by creation. Most liked sorts on engagement
    /// with a stable sort, so ties keep their storage order.
    pub fn sorted_thoughts(&self) -> Vec<Thought> {
        let mut view = self.thoughts.clone();
        match self.sort_mode {
            SortMode::Newest => view.sort_by_key(|t| Reverse((t.created_at, t.id))),
            SortMode::Oldest => view.sort_by_key(|t| (t.created_at, t.id)),
            SortMode::MostLiked => view.sort_by_key(|t| Reverse(t.engagement())),
        }
        view
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn room(id: u32) -> Room {
        catalog::rooms()
            .into_iter()
            .find(|r| r.id == id)
            .expect("room exists in catalog")
    }

    #[test]
    fn test_submit_without_room_is_ignored() {
        let mut board = ThoughtBoard::new();
        let before = board.clone();

        board.submit_thought("still here");

        assert_eq!(board, before);
    }

    #[test]
    fn test_blank_thought_is_ignored() {
        let mut board = ThoughtBoard::new();
        board.select_room(room(2));
        let before = board.clone();

        board.submit_thought("   \n\t ");

        assert_eq!(board, before);
    }

    #[test]
    fn test_blank_reply_is_ignored() {
        let mut board = ThoughtBoard::new();
        board.select_room(room(3));
        board.submit_thought("long week");
        let id = board.thoughts()[0].id;
        let before = board.clone();

        board.submit_reply(id, "   ");

        assert_eq!(board, before);
    }

    #[test]
    fn test_thoughts_store_newest_first() {
        let mut board = ThoughtBoard::new();
        board.select_room(room(1));
        board.submit_thought("a");
        board.submit_thought("b");

        assert_eq!(board.thoughts()[0].content, "b");
        assert_eq!(board.thoughts()[1].content, "a");

        board.set_sort_mode(SortMode::Oldest);
        let oldest_first = board.sorted_thoughts();
        assert_eq!(oldest_first[0].content, "a");
        assert_eq!(oldest_first[1].content, "b");
    }

    #[test]
    fn test_reactions_accumulate() {
        let mut board = ThoughtBoard::new();
        board.select_room(room(1));
        board.submit_thought("grateful for this space");
        let id = board.thoughts()[0].id;

        board.add_reaction(id, ReactionKind::Heart);
        board.add_reaction(id, ReactionKind::Heart);
        board.add_reaction(id, ReactionKind::Heart);

        assert_eq!(board.thoughts()[0].reactions[&ReactionKind::Heart], 3);
    }

    #[test]
    fn test_unmatched_ids_are_ignored() {
        let mut board = ThoughtBoard::new();
        board.select_room(room(1));
        board.submit_thought("first");
        let before = board.clone();

        board.add_reaction(9999, ReactionKind::Heart);
        board.submit_reply(9999, "hello?");

        assert_eq!(board, before);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let mut board = ThoughtBoard::new();
        board.select_room(room(4));
        board.submit_thought("one");
        board.submit_thought("two");
        board.submit_thought("three");
        board.add_reaction(board.thoughts()[2].id, ReactionKind::Sparkle);

        for mode in SortMode::variants() {
            board.set_sort_mode(*mode);
            assert_eq!(board.sorted_thoughts(), board.sorted_thoughts());
        }
    }

    #[test]
    fn test_sorting_never_mutates_storage() {
        let mut board = ThoughtBoard::new();
        board.select_room(room(1));
        board.submit_thought("a");
        board.submit_thought("b");
        board.set_sort_mode(SortMode::Oldest);

        let _ = board.sorted_thoughts();

        assert_eq!(board.thoughts()[0].content, "b");
        assert_eq!(board.thoughts()[1].content, "a");
    }

    #[test]
    fn test_most_liked_ties_keep_feed_order() {
        let mut board = ThoughtBoard::new();
        board.select_room(room(2));
        board.submit_thought("a");
        board.submit_thought("b");
        board.submit_thought("c");
        // Storage is [c, b, a]; lift only the oldest thought.
        let a_id = board.thoughts()[2].id;
        board.add_reaction(a_id, ReactionKind::Gratitude);

        board.set_sort_mode(SortMode::MostLiked);
        let view = board.sorted_thoughts();

        assert_eq!(view[0].content, "a");
        assert_eq!(view[1].content, "c");
        assert_eq!(view[2].content, "b");
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut board = ThoughtBoard::new();
        board.select_room(room(1));
        board.submit_thought("one");
        board.submit_thought("two");
        board.submit_thought("three");
        board.submit_reply(board.thoughts()[0].id, "and a reply");

        let mut ids: Vec<u64> = board.thoughts().iter().map(|t| t.id).collect();
        ids.extend(board.thoughts()[0].replies.iter().map(|r| r.id));
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len());
    }

    #[test]
    fn test_reply_drafts_are_independent() {
        let mut board = ThoughtBoard::new();
        board.select_room(room(1));
        board.submit_thought("first");
        board.submit_thought("second");
        let first = board.thoughts()[1].id;
        let second = board.thoughts()[0].id;

        board.set_reply_draft(first, "for the first".to_string());
        board.set_reply_draft(second, "for the second".to_string());

        assert_eq!(board.reply_draft(first), "for the first");
        assert_eq!(board.reply_draft(second), "for the second");

        board.submit_reply(first, "for the first");

        assert_eq!(board.reply_draft(first), "");
        assert_eq!(board.reply_draft(second), "for the second");
    }

    #[test]
    fn test_composer_lifecycle() {
        let mut board = ThoughtBoard::new();
        assert!(board.composer_room().is_none());

        let target = room(1);
        board.select_room(target.clone());
        assert_eq!(board.composer_room(), Some(target.clone()));

        board.close_composer();
        assert!(board.composer_room().is_none());
        assert_eq!(board.active_room(), Some(&target));

        board.select_room(target.clone());
        board.submit_thought("posting closes the composer");
        assert!(board.composer_room().is_none());
        assert_eq!(board.active_room(), Some(&target));
    }

    #[test]
    fn test_submit_clears_draft_and_trims_content() {
        let mut board = ThoughtBoard::new();
        board.select_room(room(3));
        board.set_thought_draft("  deep breaths  ".to_string());

        board.submit_thought("  deep breaths  ");

        assert_eq!(board.thought_draft(), "");
        assert_eq!(board.thoughts()[0].content, "deep breaths");
    }

    #[test]
    fn test_share_react_reply_flow() {
        let mut board = ThoughtBoard::new();
        let mindfulness = room(1);
        assert_eq!(mindfulness.title, "Mindfulness & Meditation");

        board.select_room(mindfulness);
        board.submit_thought("Feeling calmer today");

        assert_eq!(board.thoughts().len(), 1);
        assert_eq!(board.thoughts()[0].room_id, 1);
        assert!(board.thoughts()[0].replies.is_empty());

        let id = board.thoughts()[0].id;
        board.add_reaction(id, ReactionKind::Gratitude);
        assert_eq!(board.thoughts()[0].reactions[&ReactionKind::Gratitude], 1);

        board.submit_reply(id, "Glad to hear it");
        assert_eq!(board.thoughts()[0].replies.len(), 1);
        assert_eq!(board.thoughts()[0].replies[0].content, "Glad to hear it");
    }
}
