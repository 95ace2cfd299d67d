//! Content blocks held by a scrollable container and the hook that fills them.

use crate::PanesError;

/// A single row inside a content block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    Label(String),
}

/// Ordered rows stacked top to bottom inside a scrollable viewport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contents {
    items: Vec<ContentItem>,
}

impl Contents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_label(&mut self, text: impl Into<String>) {
        self.items.push(ContentItem::Label(text.into()));
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the text of every label row, in display order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| match item {
            ContentItem::Label(text) => text.as_str(),
        })
    }
}

/// Populates the contents of a scrollable container.
///
/// Implementors override [`SetupContents::setup_contents`] to push their rows
/// into the supplied block. The provided body reports
/// [`PanesError::NotImplemented`], so a populator that forgets to override it
/// fails as soon as a container tries to build its contents.
pub trait SetupContents {
    fn setup_contents(&self, _contents: &mut Contents) -> Result<(), PanesError> {
        Err(PanesError::NotImplemented(std::any::type_name::<Self>()))
    }
}

/// Populator that keeps the default hook.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unimplemented;

impl SetupContents for Unimplemented {}

/// Vertical list of the numbers `0..n`, one label per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberList {
    n: usize,
}

impl NumberList {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl SetupContents for NumberList {
    fn setup_contents(&self, contents: &mut Contents) -> Result<(), PanesError> {
        log::debug!("populating number list with {} rows", self.n);
        for i in 0..self.n {
            contents.add_label(i.to_string());
        }
        Ok(())
    }
}
