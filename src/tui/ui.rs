use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::location::Location;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{ADDRESS_LABEL, HistoryPanel, PageView, SEARCH_LABEL, StatusBar};
use crate::tui::{InputMode, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [status_area, page_area, address_area] = layout.areas(frame.area());

    let view = app.view();
    let history = app.store.location();

    StatusBar::new(
        view.title().to_string(),
        app.status_message.clone(),
        history.can_go_back(),
        history.can_go_forward(),
    )
    .render(frame, status_area);

    PageView::new(&view).render(frame, page_area);

    // The bar shows what the location actually holds, which can differ
    // from the store until a typed address is delivered.
    tui.address_bar.current_location = display_location(&history.fragment());
    tui.address_bar.editing = tui.input_mode != InputMode::Browse;
    tui.address_bar.label = match tui.input_mode {
        InputMode::Search => SEARCH_LABEL,
        _ => ADDRESS_LABEL,
    };
    tui.address_bar.render(frame, address_area);

    if let Some(ref mut panel) = tui.history_panel {
        let full = frame.area();
        HistoryPanel::new(panel, history.entries(), history.cursor()).render(frame, full);
    }
}

fn display_location(fragment: &str) -> String {
    if fragment.is_empty() {
        "#".to_string()
    } else {
        fragment.to_string()
    }
}
