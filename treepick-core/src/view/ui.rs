//! src/view/ui.rs
//! ============================================================
//! Frame renderer. The tree fills the whole terminal; there is no status bar
//! or border, so viewport height equals terminal height.

use std::time::{Duration, Instant};

use ratatui::Frame;
use tracing::{instrument, trace, warn};

use crate::{
    config::Config,
    model::app_state::AppState,
    view::{theme::TreeStyles, tree_view::TreeView},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct RenderStats {
    pub frames: u64,
    pub slow: u64,
    pub total: Duration,
}

impl RenderStats {
    pub fn avg(&self) -> Duration {
        if self.frames == 0 {
            Duration::ZERO
        } else {
            self.total / u32::try_from(self.frames).unwrap_or(u32::MAX)
        }
    }
}

pub struct UIRenderer {
    styles: TreeStyles,
    indent_width: u16,
    stats: RenderStats,
}

impl UIRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            styles: TreeStyles::for_theme(config.theme),
            indent_width: config.indent_width,
            stats: RenderStats::default(),
        }
    }

    /// Draw one frame and record the resulting visible-line count.
    #[instrument(level = "trace", skip_all)]
    pub fn render(&mut self, frame: &mut Frame<'_>, state: &mut AppState) {
        let start = Instant::now();

        let view = TreeView::new(&state.root)
            .indent_width(self.indent_width)
            .styles(self.styles);
        frame.render_stateful_widget(view, frame.area(), &mut state.viewport);

        let dur = start.elapsed();
        self.stats.total += dur;
        self.stats.frames += 1;
        if dur.as_millis() > 16 {
            self.stats.slow += 1;
            warn!("Slow render: {}ms (target: <16ms)", dur.as_millis());
        }

        trace!(
            selected = state.viewport.selected_line,
            top = state.viewport.top_line,
            lines = state.viewport.visible_lines,
            "frame drawn"
        );
    }

    pub const fn stats(&self) -> RenderStats {
        self.stats
    }
}
