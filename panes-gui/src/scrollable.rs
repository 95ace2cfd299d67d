//! Container that wraps its contents in a vertically scrolling viewport.

use eframe::egui;
use egui::scroll_area::{ScrollAreaOutput, ScrollBarVisibility};
use panes_core::{ContentItem, Contents, PanesError, SetupContents};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(0);

/// A widget whose contents scroll vertically inside a fixed-width viewport.
///
/// The contents are built once, at construction, by the supplied
/// [`SetupContents`] populator. The vertical scrollbar is always shown,
/// horizontal scrolling is disabled and the contents stretch to the width
/// of the viewport.
pub struct VScrollableWidget {
    id: egui::Id,
    contents: Contents,
}

impl VScrollableWidget {
    /// Builds the contents through `populator`.
    ///
    /// `parent` scopes the scroll state of this widget. Every instance gets a
    /// distinct id even when siblings share the same parent.
    pub fn new<S>(parent: Option<egui::Id>, populator: &S) -> Result<Self, PanesError>
    where
        S: SetupContents + ?Sized,
    {
        let mut contents = Contents::new();
        populator.setup_contents(&mut contents)?;
        let instance = NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed);
        let id = parent
            .unwrap_or_else(|| egui::Id::new("v_scrollable_widget"))
            .with(instance);
        log::debug!("scrollable widget {id:?} built with {} rows", contents.len());
        Ok(Self { id, contents })
    }

    pub fn id(&self) -> egui::Id {
        self.id
    }

    pub fn contents(&self) -> &Contents {
        &self.contents
    }

    pub fn row_count(&self) -> usize {
        self.contents.len()
    }

    /// Draws the viewport and its rows. The returned output carries the
    /// viewport rectangle and the full size of the contents.
    pub fn show(&self, ui: &mut egui::Ui) -> ScrollAreaOutput<()> {
        egui::Frame::group(ui.style())
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .id_source(self.id)
                    .auto_shrink([false, false])
                    .scroll_bar_visibility(ScrollBarVisibility::AlwaysVisible)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        for item in self.contents.items() {
                            match item {
                                ContentItem::Label(text) => {
                                    ui.label(text.as_str());
                                }
                            }
                        }
                    })
            })
            .inner
    }
}
