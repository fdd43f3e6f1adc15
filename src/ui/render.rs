//! Main rendering module
//!
//! Composes the full frame:
//! - Sidebar (wide terminals) or compact tab switcher (narrow terminals)
//! - Theme-toggle affordance, fixed top right
//! - Exactly one content panel, transition-aware
//! - Status bar and flash message

use crate::app::{App, FormField, TransitionPhase};
use crate::content::{Profile, Tab};
use crate::ui::{theme::Theme, widgets};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Width of the sidebar on wide terminals
const SIDEBAR_WIDTH: u16 = 30;

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Root background
    frame.render_widget(Block::default().style(app.theme.text()), area);

    if app.use_sidebar(area.width) {
        let panels = Layout::horizontal([
            Constraint::Length(SIDEBAR_WIDTH),
            Constraint::Min(0),
        ])
        .split(area);

        render_sidebar(frame, app, panels[0]);
        render_main(frame, app, panels[1], false);
    } else {
        render_main(frame, app, area, true);
    }

    render_status_bar(frame, app, area);

    if let Some((msg, is_error, _)) = &app.flash_message {
        widgets::render_flash_message(frame, msg, *is_error, &app.theme, area);
    }
}

/// Sidebar: identity, nav, and external links
fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let profile = &app.profile;

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme.border())
        .style(theme.text());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(4), // identity
        Constraint::Length(1), // separator
        Constraint::Length(6), // nav (3 entries, 2 rows each)
        Constraint::Length(1), // separator
        Constraint::Min(0),    // links
    ])
    .split(inner);

    // Identity
    let identity = Paragraph::new(vec![
        Line::raw(""),
        Line::styled(
            profile.identity.name.clone(),
            theme.text().add_modifier(Modifier::BOLD),
        ),
        Line::styled(profile.identity.tagline.clone(), theme.text_dim()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(identity, rows[0]);

    widgets::render_separator(frame, theme, rows[1]);

    // Nav: active entry filled with the accent, inactive outlined
    let mut nav_lines: Vec<Line> = Vec::new();
    for tab in Tab::all() {
        let active = app.active_tab == *tab;
        let label = format!(" [{}] {:<24}", tab.index() + 1, tab.label());
        let style = if active {
            theme.nav_active()
        } else {
            theme.nav_inactive()
        };
        nav_lines.push(Line::styled(label, style));
        nav_lines.push(Line::raw(""));
    }
    frame.render_widget(Paragraph::new(nav_lines), rows[2]);

    widgets::render_separator(frame, theme, rows[3]);

    // External links (opened in the system browser; no availability check)
    let links = Paragraph::new(vec![
        Line::raw(""),
        widgets::link_row('r', "Resume", &profile.links.resume, theme),
        widgets::link_row('h', "GitHub", &profile.links.github, theme),
        widgets::link_row('l', "LinkedIn", &profile.links.linkedin, theme),
    ]);
    frame.render_widget(links, rows[4]);
}

/// Main column: header (toggle + optional compact switcher) and the panel
fn render_main(frame: &mut Frame, app: &App, area: Rect, compact: bool) {
    let header_height = if compact { 2 } else { 1 };
    let rows = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(4),
        Constraint::Length(1), // status bar
    ])
    .split(area);

    render_header(frame, app, rows[0], compact);
    render_panel(frame, app, rows[1]);
}

/// Header: fixed theme-toggle affordance top right, compact tab switcher
/// on narrow terminals
fn render_header(frame: &mut Frame, app: &App, area: Rect, compact: bool) {
    let theme = &app.theme;

    let toggle = format!("[t] {}", app.theme_mode.toggle_label());
    let toggle_widget = Paragraph::new(Line::styled(toggle, theme.accent()))
        .alignment(Alignment::Right);
    let toggle_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width.saturating_sub(1),
        height: 1,
    };
    frame.render_widget(toggle_widget, toggle_area);

    if compact && area.height >= 2 {
        let switcher_area = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        render_tab_switcher(frame, app, switcher_area);
    }
}

/// Compact tab switcher for narrow terminals
fn render_tab_switcher(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let mut spans: Vec<Span> = Vec::new();
    for (i, tab) in Tab::all().iter().enumerate() {
        let style = if app.active_tab == *tab {
            theme.nav_active()
        } else {
            theme.text_dim()
        };
        spans.push(Span::styled(
            format!(" [{}] {} ", i + 1, tab.label()),
            style,
        ));
        if i < Tab::all().len() - 1 {
            spans.push(Span::styled("│", theme.separator()));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render exactly one content panel, honoring the in-flight transition:
/// the outgoing panel fades out shifted up, the incoming one fades in from
/// a slight downward offset. Only one panel is ever drawn per frame.
fn render_panel(frame: &mut Frame, app: &App, area: Rect) {
    let phase = app.transition.as_ref().and_then(|t| t.phase());

    let (tab, theme, slot) = match (&app.transition, phase) {
        (Some(t), Some(TransitionPhase::Exit)) => {
            // Outgoing panel, pulled up one row and washed out
            let slot = Rect {
                height: area.height.saturating_sub(1),
                ..area
            };
            (t.from, app.theme.faded(), slot)
        }
        (_, Some(TransitionPhase::Enter)) => {
            // Incoming panel, pushed down one row, settles next frame
            let slot = Rect {
                y: area.y + 1,
                height: area.height.saturating_sub(1),
                ..area
            };
            (app.active_tab, app.theme.faded(), slot)
        }
        _ => (app.active_tab, app.theme.clone(), area),
    };

    match tab {
        Tab::About => render_about_panel(frame, &app.profile, app.about_scroll, &theme, slot),
        Tab::Projects => render_projects_panel(frame, app, &theme, slot),
        Tab::Contact => render_contact_panel(frame, app, &theme, slot),
    }
}

// === CONTENT PANELS ===
//
// Panels are stateless over the profile: they read the content and the
// derived style set and never branch on the theme mode themselves.

/// About panel: intro, skills, career timeline, credentials
fn render_about_panel(
    frame: &mut Frame,
    profile: &Profile,
    scroll: u16,
    theme: &Theme,
    area: Rect,
) {
    let block = Block::default()
        .title(" About ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border())
        .style(theme.text());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::styled(profile.intro.clone(), theme.text_subtle()));
    lines.push(Line::raw(""));
    for (badge, value) in &profile.badges {
        lines.push(Line::from(vec![
            Span::styled(format!(" {badge} "), theme.selected()),
            Span::raw(" "),
            Span::styled(value.clone(), theme.text_subtle()),
        ]));
    }
    lines.push(Line::raw(""));

    lines.push(Line::styled("Core skills", theme.title()));
    for chunk in profile.skills.chunks(4) {
        let mut spans: Vec<Span> = Vec::new();
        for skill in chunk {
            spans.push(Span::styled(format!("[{skill}]"), theme.text()));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::raw(""));

    lines.push(Line::styled("Career", theme.title()));
    for entry in &profile.timeline {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<16}", entry.period), theme.text_dim()),
            Span::styled(
                entry.title.clone(),
                theme.text().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::styled(
            format!("{:<16}{}", "", entry.detail),
            theme.text_subtle(),
        ));
    }
    lines.push(Line::raw(""));

    lines.push(Line::styled("Credentials", theme.title()));
    for credential in &profile.credentials {
        lines.push(Line::from(vec![
            Span::styled(" • ", theme.accent()),
            Span::styled(credential.clone(), theme.text_subtle()),
        ]));
    }

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(content, inner);
}

/// Projects panel: one card per project, selected card highlighted
fn render_projects_panel(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = Block::default()
        .title(" Projects ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border())
        .style(theme.text());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.profile.projects.is_empty() {
        let empty = Paragraph::new("No projects yet")
            .style(theme.text_dim())
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let card_height = 5u16;
    for (i, project) in app.profile.projects.iter().enumerate() {
        let y = inner.y + (i as u16) * card_height;
        if y + card_height > inner.y + inner.height {
            break;
        }
        let card_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: card_height,
        };

        let selected = i == app.project_selected;
        let card = Block::default()
            .title(format!(" {} ", project.title))
            .title_style(if selected {
                theme.title()
            } else {
                theme.text().add_modifier(Modifier::BOLD)
            })
            .borders(Borders::ALL)
            .border_style(if selected {
                theme.border_focused()
            } else {
                theme.border()
            })
            .style(theme.panel());
        let card_inner = card.inner(card_area);
        frame.render_widget(card, card_area);

        let stack = project
            .stack
            .iter()
            .map(|tag| format!("[{tag}]"))
            .collect::<Vec<_>>()
            .join(" ");

        let body = Paragraph::new(vec![
            Line::styled(project.summary.clone(), theme.text_subtle().bg(theme.panel_bg)),
            Line::from(vec![
                Span::styled(stack, theme.accent().bg(theme.panel_bg)),
                Span::raw("  "),
                Span::styled(project.link.clone(), theme.text_dim().bg(theme.panel_bg)),
            ]),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(body, card_inner);
    }
}

/// Contact panel: the inquiry form, then contact info and resume links
fn render_contact_panel(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = Block::default()
        .title(" Contact ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border())
        .style(theme.text());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(3), // name
        Constraint::Length(3), // email
        Constraint::Length(5), // message
        Constraint::Length(1), // send
        Constraint::Length(1), // spacer
        Constraint::Length(1), // contact info
        Constraint::Min(0),    // links
    ])
    .split(inner);

    let form = &app.form;
    widgets::render_form_field(
        frame,
        "Name (required)",
        &form.name,
        form.focus == FormField::Name,
        theme,
        rows[0],
    );
    widgets::render_form_field(
        frame,
        "Email (required)",
        &form.email,
        form.focus == FormField::Email,
        theme,
        rows[1],
    );
    widgets::render_form_field(
        frame,
        "Message",
        &form.message,
        form.focus == FormField::Message,
        theme,
        rows[2],
    );

    let send_style = if form.focus == FormField::Send {
        theme.nav_active()
    } else {
        theme.accent()
    };
    let send = Paragraph::new(Line::styled("  Send ↵  ", send_style))
        .alignment(Alignment::Right);
    frame.render_widget(send, rows[3]);

    let info = Line::from(vec![
        Span::styled("☎ ", theme.accent()),
        Span::styled(app.profile.contact.phone.clone(), theme.text_dim()),
        Span::styled("  ·  ", theme.separator()),
        Span::styled("✉ ", theme.accent()),
        Span::styled(app.profile.contact.email.clone(), theme.text_dim()),
    ]);
    frame.render_widget(Paragraph::new(info), rows[5]);

    let links = Paragraph::new(vec![
        Line::raw(""),
        widgets::link_row('r', "Resume", &app.profile.links.resume, theme),
        widgets::link_row('n', "Notion", &app.profile.links.notion, theme),
    ]);
    frame.render_widget(links, rows[6]);
}

/// Status bar with per-tab key hints and the theme toggle on the right
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.active_tab {
        Tab::About => "[j/k] Scroll  [r] Resume  [h] GitHub  [l] LinkedIn  [1-3] Tabs  [q] Quit",
        Tab::Projects => "[j/k] Navigate  [Enter] Open Link  [1-3] Tabs  [q] Quit",
        Tab::Contact => {
            if app.form.captures_input() {
                "[Tab] Next Field  [Esc] Done Editing  [Enter] Send (on button)"
            } else {
                "[Tab] Edit Form  [Enter] Send  [n] Notion  [1-3] Tabs  [q] Quit"
            }
        }
    };

    let toggle = format!("[t] {}", app.theme_mode.toggle_label());
    widgets::render_status_bar(frame, hints, &toggle, &app.theme, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeMode;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        // Let any in-flight transition settle so the frame shows the
        // steady state
        app.transition = None;
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app() -> App {
        App::new(Profile::sample(), ThemeMode::default())
    }

    // Content unique to each panel; nav labels never contain these
    fn visible_panels(screen: &str) -> Vec<&'static str> {
        [
            ("about", "Core skills"),
            ("projects", "Perfume Info Collector"),
            ("contact", "Name (required)"),
        ]
        .into_iter()
        .filter(|(_, marker)| screen.contains(marker))
        .map(|(panel, _)| panel)
        .collect()
    }

    #[test]
    fn test_first_frame_shows_about_only() {
        let mut app = app();
        let screen = draw(&mut app, 120, 40);
        assert_eq!(visible_panels(&screen), vec!["about"]);
        // Toggle affordance offers the switch to Light on first load
        assert!(screen.contains("Light"));
    }

    #[test]
    fn test_selected_tab_is_the_only_panel() {
        let mut app = app();
        app.select_tab(Tab::Projects);
        app.select_tab(Tab::Contact);
        app.select_tab(Tab::Projects);
        let screen = draw(&mut app, 120, 40);
        assert_eq!(visible_panels(&screen), vec!["projects"]);
    }

    #[test]
    fn test_wide_terminal_shows_sidebar() {
        let mut app = app();
        let screen = draw(&mut app, 120, 40);
        assert!(screen.contains(&app.profile.identity.name));
        assert!(screen.contains("[1] About & Resume"));
    }

    #[test]
    fn test_narrow_terminal_shows_compact_switcher() {
        let mut app = app();
        let screen = draw(&mut app, 60, 40);
        // No sidebar identity block, but the switcher lists all tabs
        assert!(screen.contains("[1] About & Resume"));
        assert!(screen.contains("[2] Projects"));
        assert!(screen.contains("[3] Contact"));
    }

    #[test]
    fn test_contact_panel_renders_form_and_info() {
        let mut app = app();
        app.select_tab(Tab::Contact);
        let screen = draw(&mut app, 120, 40);
        assert!(screen.contains("Name (required)"));
        assert!(screen.contains("Email (required)"));
        assert!(screen.contains("Send"));
        assert!(screen.contains(&app.profile.contact.email));
    }
}
