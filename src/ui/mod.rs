//! UI module for rendering the TUI

mod components;
mod forms;
mod hero;
mod info_panel;
mod layout;

use crate::app::App;
use crate::state::Notification;
use components::{render_error_dialog, render_success_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let page = layout::create_layout(frame.area(), app.state.reveal.offset);

    hero::draw(frame, page.hero);
    info_panel::draw(frame, page.info);
    forms::draw_contact_form(frame, page.form, app);
    layout::draw_status_bar(frame, page.status, app);

    // Notification overlays the page
    match &app.state.notification {
        Some(Notification::Success) => render_success_dialog(frame),
        Some(Notification::Failure(reason)) => render_error_dialog(frame, reason),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::SimulatedGateway;
    use crate::state::RuleSet;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app(rules: RuleSet) -> App {
        let mut app = App::with_gateway(rules, Arc::new(SimulatedGateway::default()), None);
        app.state.reveal.skip();
        app
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    mod page {
        use super::*;

        #[test]
        fn test_detailed_page_shows_all_sections() {
            let screen = render(&app(RuleSet::detailed().unwrap()));
            assert!(screen.contains("Get In Touch"));
            assert!(screen.contains("Contact Information"));
            assert!(screen.contains("Send us a Message"));
            assert!(screen.contains("First Name *"));
            assert!(screen.contains("Last Name *"));
            assert!(screen.contains("Phone Number"));
            assert!(screen.contains("Send Message"));
            assert!(screen.contains("0/1000"));
        }

        #[test]
        fn test_quick_page_has_single_name_field() {
            let screen = render(&app(RuleSet::quick().unwrap()));
            assert!(screen.contains("Name *"));
            assert!(!screen.contains("First Name"));
            assert!(!screen.contains("Phone Number"));
        }

        #[test]
        fn test_status_message_replaces_hints() {
            let mut app = app(RuleSet::detailed().unwrap());
            app.state.status_message = Some("Sending message...".to_string());
            let screen = render(&app);
            assert!(screen.contains("Sending message..."));
            assert!(!screen.contains("quit"));
        }

        #[test]
        fn test_tiny_terminal_does_not_panic() {
            let app = app(RuleSet::detailed().unwrap());
            let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
            terminal.draw(|frame| draw(frame, &app)).unwrap();
        }
    }

    mod dialogs {
        use super::*;

        #[test]
        fn test_success_dialog() {
            let mut app = app(RuleSet::detailed().unwrap());
            app.state.notification = Some(Notification::Success);
            let screen = render(&app);
            assert!(screen.contains("Message Sent"));
            assert!(screen.contains("Message sent successfully!"));
            assert!(screen.contains("to dismiss"));
        }

        #[test]
        fn test_failure_dialog_shows_reason() {
            let mut app = app(RuleSet::detailed().unwrap());
            app.state.notification = Some(Notification::Failure("Mailbox full".to_string()));
            let screen = render(&app);
            assert!(screen.contains("Sorry, there was an error"));
            assert!(screen.contains("Mailbox full"));
        }
    }
}
