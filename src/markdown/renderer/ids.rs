//! Heading id binding.
//!
//! The ToC extractor works on raw markdown while ids are attached during
//! rendering, after the engine has parsed the document. The queue bridges
//! the two passes: ids are grouped by `(level, text)` and handed out
//! front-to-back, so repeated identical headings receive `setup`,
//! `setup-2`, ... in document order without the renderer re-running the
//! collision bookkeeping.

use std::collections::{HashMap, VecDeque};

use crate::markdown::text::slugify;
use crate::markdown::toc::TocItem;

#[derive(Debug, Default)]
pub struct HeadingIdQueue {
    queues: HashMap<(u8, String), VecDeque<String>>,
}

impl HeadingIdQueue {
    /// Build the queue from an extracted ToC, preserving document order
    /// within each `(level, text)` group.
    pub fn from_toc(items: &[TocItem]) -> Self {
        let mut queues: HashMap<(u8, String), VecDeque<String>> = HashMap::new();
        for item in items {
            queues
                .entry((item.level, item.text.clone()))
                .or_default()
                .push_back(item.id.clone());
        }
        HeadingIdQueue { queues }
    }

    /// Take the next id recorded for this heading.
    ///
    /// When no id was recorded, or the group has run dry, falls back to a
    /// fresh slug of the text, or `section-{level}` when even that is
    /// empty. Rendering never fails over an id miss.
    pub fn bind(&mut self, level: u8, text: &str) -> String {
        let key = (level, text.to_string());
        if let Some(queue) = self.queues.get_mut(&key) {
            if let Some(id) = queue.pop_front() {
                return id;
            }
        }

        let fallback = slugify(text);
        if fallback.is_empty() {
            format!("section-{}", level)
        } else {
            fallback
        }
    }
}
