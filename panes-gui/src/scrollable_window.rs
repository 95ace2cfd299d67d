use crate::{run_window, GuiError, VScrollableWidget};
use eframe::egui;
use panes_core::{NumberList, PanesError, ScrollableConfig};

/// Window with several scrollable number lists laid out side by side.
pub struct ScrollableDemoApp {
    scrollers: Vec<VScrollableWidget>,
}

impl ScrollableDemoApp {
    /// One list per entry of `counts`, left to right.
    pub fn new(counts: &[usize]) -> Result<Self, PanesError> {
        let parent = egui::Id::new("scrollable_demo");
        let scrollers = counts
            .iter()
            .map(|&n| VScrollableWidget::new(Some(parent), &NumberList::new(n)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { scrollers })
    }

    pub fn scrollers(&self) -> &[VScrollableWidget] {
        &self.scrollers
    }

    pub fn ui(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.scrollers.is_empty() {
                return;
            }
            ui.columns(self.scrollers.len(), |columns| {
                for (column, scroller) in columns.iter_mut().zip(&self.scrollers) {
                    let _ = scroller.show(column);
                }
            });
        });
    }
}

impl eframe::App for ScrollableDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

/// Builds the lists, then runs the window until it is closed.
///
/// A populator failure is reported before any window is created.
pub fn run_scrollable_demo(config: &ScrollableConfig) -> Result<(), GuiError> {
    let app = ScrollableDemoApp::new(&config.counts)?;
    run_window(&config.window(), app)
}
