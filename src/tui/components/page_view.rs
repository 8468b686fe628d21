//! # PageView Component
//!
//! Draws whatever view the page resolver picked. Page content (catalog,
//! cart contents, checkout forms) comes from the backend and is not part
//! of this shell, so each view renders a short description of the screen
//! and the parameters it was opened with, plus the keys that lead
//! elsewhere.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::resolver::View;
use crate::tui::component::Component;

const KEY_HELP: &str = "h home  p products  g categories  c cart  k checkout  a account  \
    w wishlist  s search  o orders  i about  t contact  1-9 product  \
    ←/b back  →/f forward  : address  ^O history  q quit";

pub struct PageView<'a> {
    pub view: &'a View,
}

impl<'a> PageView<'a> {
    pub fn new(view: &'a View) -> Self {
        Self { view }
    }

    /// Body lines for the view, without the key help.
    pub fn body(&self) -> Vec<Line<'static>> {
        let label = |name: &str, value: Option<&str>| {
            Line::from(vec![
                Span::styled(format!("{}: ", name), Style::default().fg(Color::DarkGray)),
                Span::raw(value.unwrap_or("any").to_string()),
            ])
        };

        match self.view {
            View::Home => vec![
                Line::from("Exam-preparation books, notes and test series."),
                Line::from("Browse by category or jump straight into search."),
            ],
            View::ProductList {
                category,
                product_type,
            } => vec![
                Line::from("Product listing"),
                label("Category", category.as_deref()),
                label("Type", product_type.as_deref()),
            ],
            View::ProductDetail { id } => vec![
                Line::from("Product details, reviews and add-to-cart."),
                label("Product id", Some(id.as_str())),
            ],
            View::Categories => vec![Line::from("All exam categories: NEET, JEE, UPSC, CUET and more.")],
            View::Cart => vec![Line::from("Items in your cart, quantities and order total.")],
            View::Checkout => vec![
                Line::from("1. Select delivery address"),
                Line::from("2. Choose payment method"),
                Line::from("3. Place order"),
            ],
            View::Account => vec![Line::from("Profile, saved addresses and past orders.")],
            View::Wishlist => vec![Line::from("Products you saved for later.")],
            View::SearchResults { query } => vec![
                Line::from("Search results"),
                label("Query", query.as_deref()),
            ],
            View::OrderTracking => vec![Line::from("Track the status of an order.")],
            View::About => vec![Line::from("Who we are and why we build study materials.")],
            View::Contact => vec![Line::from("Reach the support team.")],
            View::NotFound { path } => vec![
                Line::from(Span::styled(
                    "Nothing lives at this address.",
                    Style::default().fg(Color::Yellow),
                )),
                label("Path", Some(path.as_str())),
                Line::from("Press h to go home."),
            ],
        }
    }
}

impl Component for PageView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(Span::styled(
                format!(" {} ", self.view.title()),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let help = Paragraph::new(KEY_HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let help_height = (help.line_count(inner.width) as u16).min(inner.height / 2);

        let [body_area, help_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(help_height)]).areas(inner);

        frame.render_widget(Paragraph::new(self.body()).wrap(Wrap { trim: false }), body_area);
        frame.render_widget(help, help_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(view: &View) -> String {
        let backend = TestBackend::new(100, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                PageView::new(view).render(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_product_list_shows_filters() {
        let view = View::ProductList {
            category: Some("NEET".to_string()),
            product_type: None,
        };
        let text = rendered_text(&view);
        assert!(text.contains("Study Materials"));
        assert!(text.contains("Category: NEET"));
        assert!(text.contains("Type: any"));
    }

    #[test]
    fn test_not_found_names_path() {
        let text = rendered_text(&View::NotFound {
            path: "old-link".to_string(),
        });
        assert!(text.contains("Page Not Found"));
        assert!(text.contains("Path: old-link"));
    }

    #[test]
    fn test_body_for_detail_has_id() {
        let view = View::ProductDetail { id: "42".to_string() };
        let body = PageView::new(&view).body();
        let joined: String = body.iter().map(|line| line.to_string()).collect();
        assert!(joined.contains("Product id: 42"));
    }
}
