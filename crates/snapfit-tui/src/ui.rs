use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use snapfit_core::seed::TEMPLATES;
use snapfit_core::{ChatRole, Exercise, WorkoutGroup};
use crate::app::{App, GymRow, InputMode, Screen};

const ACCENT: Color = Color::Magenta;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(app, frame, header_area);

    match app.screen {
        Screen::Chat => render_chat_screen(app, frame, body_area),
        Screen::Gym => render_gym_screen(app, frame, body_area),
    }

    render_footer(app, frame, footer_area);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let tab_style = |screen: Screen| {
        if app.screen == screen {
            Style::default().fg(Color::White).bg(ACCENT).bold()
        } else {
            Style::default().fg(Color::Gray)
        }
    };

    let title = Line::from(vec![
        Span::styled(" SnapFit ", Style::default().fg(ACCENT).bold()),
        Span::styled(" AI Assistant ", tab_style(Screen::Chat)),
        Span::raw(" "),
        Span::styled(" Gym Workouts ", tab_style(Screen::Gym)),
        Span::raw(" "),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(header, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default().bg(Color::Blue).fg(Color::White),
        InputMode::Editing => Style::default().bg(Color::Yellow).fg(Color::Black),
    };

    let mode_text = match app.screen {
        Screen::Chat => " CHAT ",
        Screen::Gym => " GYM ",
    };

    // Key style: dark background with bright text for visibility on both light/dark terminals
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let mut hints = match (app.screen, app.input_mode) {
        (Screen::Chat, InputMode::Normal) => {
            let mut hints = vec![
                Span::styled(" i ", key_style),
                Span::styled(" type ", label_style),
                Span::styled(" j/k ", key_style),
                Span::styled(" scroll ", label_style),
            ];
            if app.conversation.shows_templates() {
                hints.extend(vec![
                    Span::styled(" 1-5 ", key_style),
                    Span::styled(" quick reply ", label_style),
                ]);
            }
            hints.extend(vec![
                Span::styled(" Tab ", key_style),
                Span::styled(" gym ", label_style),
                Span::styled(" q ", key_style),
                Span::styled(" quit ", label_style),
            ]);
            hints
        }
        (Screen::Chat, InputMode::Editing) => vec![
            Span::styled(" Enter ", key_style),
            Span::styled(" send ", label_style),
            Span::styled(" Esc ", key_style),
            Span::styled(" stop typing ", label_style),
        ],
        (Screen::Gym, _) => vec![
            Span::styled(" j/k ", key_style),
            Span::styled(" nav ", label_style),
            Span::styled(" Space ", key_style),
            Span::styled(" toggle ", label_style),
            Span::styled(" Tab ", key_style),
            Span::styled(" chat ", label_style),
            Span::styled(" q ", key_style),
            Span::styled(" quit ", label_style),
        ],
    };

    if let Some(status) = &app.status {
        hints.push(Span::styled(
            format!(" {} ", status),
            Style::default().bg(Color::Black).fg(Color::Red),
        ));
    }

    let footer_content = Line::from(
        vec![
            Span::styled(mode_text, mode_style),
            Span::styled(" ", label_style),
        ]
        .into_iter()
        .chain(hints)
        .collect::<Vec<_>>(),
    );

    let footer = Paragraph::new(footer_content).style(Style::default().bg(Color::Black));
    frame.render_widget(footer, area);
}

fn render_chat_screen(app: &mut App, frame: &mut Frame, area: Rect) {
    let show_templates = app.conversation.shows_templates();
    let templates_height = if show_templates {
        (TEMPLATES.len() + 2) as u16 // +2 for borders
    } else {
        0
    };

    let [chat_area, templates_area, input_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(templates_height),
        Constraint::Length(3),
    ])
    .areas(area);

    // Store chat area dimensions for scroll calculations (inner size minus borders)
    app.chat_height = chat_area.height.saturating_sub(2);
    app.chat_width = chat_area.width.saturating_sub(2);

    let chat_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" AI Assistant 🤖 · your personal fitness companion ");

    let state = app.conversation.current_state();
    let mut lines: Vec<Line> = Vec::new();

    for msg in &state.messages {
        let (sender, color) = match msg.role {
            ChatRole::User => ("You", Color::Cyan),
            ChatRole::Assistant => ("Coach", Color::Yellow),
        };
        lines.push(Line::from(vec![
            Span::styled(sender, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", msg.time_label()), Style::default().fg(Color::DarkGray)),
        ]));
        for line in msg.content.lines() {
            lines.push(Line::from(line.to_string()));
        }
        lines.push(Line::default());
    }

    if state.is_typing {
        lines.push(Line::from(Span::styled(
            "Coach",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        // Animated ellipsis: cycles through ".", "..", "..."
        let dots = ".".repeat((app.animation_frame as usize) + 1);
        lines.push(Line::from(Span::styled(
            format!("Typing{}", dots),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    let chat = Paragraph::new(Text::from(lines))
        .block(chat_block)
        .wrap(Wrap { trim: true })
        .scroll((app.chat_scroll, 0));

    frame.render_widget(chat, chat_area);

    if show_templates {
        let items: Vec<ListItem> = TEMPLATES
            .iter()
            .enumerate()
            .map(|(i, template)| ListItem::new(format!(" {}. {} ", i + 1, template)))
            .collect();
        let templates = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Quick replies "),
        );
        frame.render_widget(templates, templates_area);
    }

    render_chat_input(app, frame, input_area);
}

fn render_chat_input(app: &App, frame: &mut Frame, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let input_border_color = if editing { Color::Yellow } else { Color::DarkGray };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(input_border_color))
        .title(" Type a message... ");

    // Calculate visible portion of input with horizontal scrolling
    // Inner width = total width - 2 (for borders)
    let inner_width = area.width.saturating_sub(2) as usize;
    let cursor_pos = app.chat_cursor;

    // Calculate scroll offset to keep cursor visible
    let scroll_offset = if inner_width == 0 {
        0
    } else if cursor_pos >= inner_width {
        cursor_pos - inner_width + 1
    } else {
        0
    };

    let visible_text: String = app
        .chat_input
        .chars()
        .skip(scroll_offset)
        .take(inner_width)
        .collect();

    let input = Paragraph::new(visible_text)
        .style(Style::default().fg(Color::Cyan))
        .block(input_block);

    frame.render_widget(input, area);

    // Show cursor when editing
    if editing {
        let cursor_x = (cursor_pos - scroll_offset) as u16;
        frame.set_cursor_position((area.x + cursor_x + 1, area.y + 1));
    }
}

fn render_gym_screen(app: &mut App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" Gym Workouts 💪 · your personalized workout plan ");

    let plan = app.workouts.current_state();
    if plan.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No workouts available",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .gym_rows()
        .into_iter()
        .filter_map(|row| match row {
            GymRow::Workout(g) => plan.get(g).map(workout_item),
            GymRow::Exercise(g, e) => plan
                .get(g)
                .and_then(|group| group.exercises.get(e))
                .map(exercise_item),
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(ACCENT)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.gym_state);
}

fn workout_item(group: &WorkoutGroup) -> ListItem<'static> {
    let status_color = if group.completed { Color::Green } else { Color::Gray };
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{} · {}", group.week_title(), group.workout_title()),
            Style::default().fg(ACCENT).bold(),
        ),
        Span::raw("  "),
        Span::styled(group.status_label(), Style::default().fg(status_color)),
        Span::styled(
            format!(
                "  {}/{} ({:.0}%)",
                group.completed_count(),
                group.total(),
                group.progress() * 100.0
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}

fn exercise_item(exercise: &Exercise) -> ListItem<'static> {
    let (check, name_style) = if exercise.completed {
        (
            "[x]",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("[ ]", Style::default().fg(Color::White))
    };

    ListItem::new(Line::from(vec![
        Span::raw("    "),
        Span::styled(check, Style::default().fg(ACCENT)),
        Span::raw(" "),
        Span::styled(exercise.name.clone(), name_style),
        Span::styled(
            format!("  {} sets · {} reps", exercise.sets, exercise.reps),
            Style::default().fg(Color::LightBlue),
        ),
    ]))
}
