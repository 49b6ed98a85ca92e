//! TUI rendering with ratatui
//!
//! Home screen with the stats summary, game screen with the board, the
//! on-screen keyboard and the accent popup.

use super::app::{App, AppScreen, MessageStyle};
use super::theme::Theme;
use crate::core::{MAX_ATTEMPTS, WORD_LENGTH, to_upper};
use crate::game::GameStatus;
use crate::keyboard::{AccentPopup, ROWS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph},
};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Screen content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, &app.theme, chunks[0]);

    match app.screen {
        AppScreen::Home => render_home(f, app, chunks[1]),
        AppScreen::Game => render_game(f, app, chunks[1]),
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, theme: &Theme, area: Rect) {
    let header = Paragraph::new("PALABRLE")
        .style(
            Style::default()
                .fg(theme.correct)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme.border)),
        );
    f.render_widget(header, area);
}

fn render_home(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let [column] = Layout::horizontal([Constraint::Length(48)])
        .flex(Flex::Center)
        .areas(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Welcome
            Constraint::Length(6), // Counters
            Constraint::Length(3), // Win gauge
            Constraint::Min(3),    // Messages
            Constraint::Length(3), // Play hint
        ])
        .split(column);

    let welcome = Paragraph::new("¡Bienvenido al Palabrle!")
        .style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(welcome, chunks[0]);

    let stats = &app.stats;
    let counters = vec![
        Line::from(vec![
            Span::styled("Total:    ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                stats.total().to_string(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Ganadas:  ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                stats.wins.to_string(),
                Style::default().fg(theme.win).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Perdidas: ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                stats.losses.to_string(),
                Style::default().fg(theme.loss).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    let counters = Paragraph::new(counters).block(
        Block::default()
            .title(" Estadísticas ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(counters, chunks[1]);

    if stats.total() > 0 {
        let pct = stats.win_percentage();
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(" Victorias ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme.border)),
            )
            .gauge_style(Style::default().fg(theme.win).bg(theme.empty_tile))
            .percent(u16::try_from(pct.min(100)).unwrap_or(100))
            .label(format!("{pct}%"));
        f.render_widget(gauge, chunks[2]);
    }

    render_messages(f, app, chunks[3]);

    let hint = Paragraph::new("Enter para jugar · q para salir")
        .style(Style::default().fg(theme.text_secondary))
        .alignment(Alignment::Center);
    f.render_widget(hint, chunks[4]);
}

fn render_game(f: &mut Frame, app: &App, area: Rect) {
    let board_height = TILE_HEIGHT * MAX_ATTEMPTS as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(board_height), // Board
            Constraint::Length(5),            // Keyboard
            Constraint::Min(3),               // Messages
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);

    if let Some(popup) = &app.popup {
        render_popup(f, &app.theme, popup, area);
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let game = &app.game;
    let board_width = TILE_WIDTH * WORD_LENGTH as u16;
    let [board] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(area);

    let rows = Layout::vertical([Constraint::Length(TILE_HEIGHT); MAX_ATTEMPTS]).split(board);
    for (i, row_area) in rows.iter().enumerate() {
        let cells = Layout::horizontal([Constraint::Length(TILE_WIDTH); WORD_LENGTH]).split(*row_area);

        for (j, cell) in cells.iter().enumerate() {
            let (letter, style, border) = if let Some(record) = game.guesses().get(i) {
                let bg = theme.tile(record.feedback.states()[j]);
                (
                    Some(record.word.chars()[j]),
                    Style::default()
                        .fg(Color::White)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                    bg,
                )
            } else if i == game.guesses().len() && game.status() == GameStatus::Playing {
                let letter = game.input().get(j).copied();
                let border = if letter.is_some() {
                    theme.text_secondary
                } else {
                    theme.empty_tile
                };
                (
                    letter,
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    border,
                )
            } else {
                (None, Style::default(), theme.empty_tile)
            };

            let text = letter.map(|c| to_upper(c).to_string()).unwrap_or_default();
            let tile = Paragraph::new(text)
                .style(style)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border)),
                );
            f.render_widget(tile, *cell);
        }
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let disabled = app.game.disabled();

    let action = Style::default()
        .fg(theme.text)
        .bg(theme.key)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans: Vec<Span> = row
                .iter()
                .flat_map(|&key| {
                    let style = if disabled.contains(key) {
                        Style::default()
                            .fg(theme.text_secondary)
                            .bg(theme.key_disabled)
                            .add_modifier(Modifier::CROSSED_OUT)
                    } else {
                        Style::default()
                            .fg(theme.text)
                            .bg(theme.key)
                            .add_modifier(Modifier::BOLD)
                    };
                    [Span::styled(format!(" {key} "), style), Span::raw(" ")]
                })
                .collect();
            if i == ROWS.len() - 1 {
                spans.insert(0, Span::raw(" "));
                spans.insert(0, Span::styled(" ENTER ", action));
                spans.push(Span::styled(" BORRAR ", action));
            }
            Line::from(spans)
        })
        .collect();

    let hint = if app.long_press_armed {
        "Pulsación larga: elige una letra"
    } else {
        "Alt+vocal o Tab+vocal para tildes"
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(theme.text_secondary),
    )));

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(keyboard, area);
}

fn render_popup(f: &mut Frame, theme: &Theme, popup: &AccentPopup, area: Rect) {
    let mut spans = Vec::new();
    for (i, option) in popup.options().iter().enumerate() {
        spans.push(Span::styled(
            format!("{}", i + 1),
            Style::default().fg(theme.text_secondary),
        ));
        spans.push(Span::styled(
            format!(" {option} "),
            Style::default()
                .fg(theme.text)
                .bg(theme.key)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("  "));
    }

    let [popup_area] = Layout::horizontal([Constraint::Length(24)])
        .flex(Flex::Center)
        .areas(area);
    let [popup_area] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(popup_area);

    let content = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme.popup))
        .block(
            Block::default()
                .title(format!(" {} ", popup.key()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.present)),
        );

    f.render_widget(Clear, popup_area);
    f.render_widget(content, popup_area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(theme.text),
                MessageStyle::Success => Style::default().fg(theme.win),
                MessageStyle::Error => Style::default().fg(theme.loss),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list = List::new(messages).block(
        Block::default()
            .title(" Mensajes ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.screen {
        AppScreen::Home => "Enter: jugar | q: salir".to_string(),
        AppScreen::Game if app.popup.is_some() => "1-9/Enter: elegir | Esc: cerrar".to_string(),
        AppScreen::Game if app.game.is_over() => "n: nueva partida | Esc: inicio".to_string(),
        AppScreen::Game => format!(
            "Intentos restantes: {} | Enter: enviar | Esc: inicio",
            app.game.remaining_attempts()
        ),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(app.theme.text_secondary))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::stats::{MemoryStore, Stats};
    use crate::wordlists::Dictionary;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn dictionary() -> Dictionary {
        Dictionary::new(["perro", "gatos"].into_iter().map(|w| Word::new(w).unwrap())).unwrap()
    }

    #[test]
    fn home_shows_stats_and_gauge() {
        let dict = dictionary();
        let store = MemoryStore::new(Stats { wins: 3, losses: 1 });
        let app = App::with_rng(&dict, &store, Theme::dark(), StdRng::seed_from_u64(3));
        let text = screen_text(&app);
        assert!(text.contains("Bienvenido"));
        assert!(text.contains("Ganadas:  3"));
        assert!(text.contains("75%"));
    }

    #[test]
    fn home_hides_gauge_without_games() {
        let dict = dictionary();
        let store = MemoryStore::default();
        let app = App::with_rng(&dict, &store, Theme::light(), StdRng::seed_from_u64(3));
        assert!(!screen_text(&app).contains("Victorias"));
    }

    #[test]
    fn game_shows_typed_letters_and_popup() {
        let dict = dictionary();
        let store = MemoryStore::default();
        let mut app = App::with_rng(&dict, &store, Theme::dark(), StdRng::seed_from_u64(3));
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::ALT));

        let text = screen_text(&app);
        assert!(text.contains('G'));
        assert!(text.contains('É'));
        assert!(text.contains('Ñ'));
    }
}
