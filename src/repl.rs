//! Line-oriented front-end for [`SearchSession`].
//!
//! Every input line is either a slash command mapped to an [`InputEvent`] or
//! the new query text. `/go N` follows row `N` as numbered on screen.

use crate::error::Result;
use crate::format::{IDLE_HINT, render_session};
use crate::search::SearchEngine;
use crate::session::{InputEvent, SearchSession, SessionEffect};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const CLOSED_MESSAGE: &str = "Search closed. Type /open to search again, /quit to exit.\n";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Event(InputEvent),
    Quit,
}

/// Map one input line to a session event.
pub fn parse_line(line: &str) -> Line {
    if let Some(row) = parse_row(line) {
        return Line::Event(InputEvent::Select(row));
    }

    let event = match line.trim() {
        "/quit" | "/exit" => return Line::Quit,
        "/down" | "/next" => InputEvent::Next,
        "/up" | "/prev" => InputEvent::Previous,
        "/enter" | "/go" => InputEvent::Submit,
        "/open" => InputEvent::Open,
        "/close" | "/esc" => InputEvent::Close,
        "/toggle" => InputEvent::Toggle,
        _ => InputEvent::Query(line.to_string()),
    };
    Line::Event(event)
}

/// Zero-based row of a `/go N` line, where `N` starts at 1.
fn parse_row(line: &str) -> Option<usize> {
    let argument = line.trim().strip_prefix("/go")?;
    if !argument.starts_with(char::is_whitespace) {
        return None;
    }
    argument.trim().parse::<usize>().ok()?.checked_sub(1)
}

/// Drive a session from `reader` until EOF or `/quit`, writing screens to `writer`.
pub async fn run<R, W>(engine: &SearchEngine, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = SearchSession::new();
    session.handle(engine, InputEvent::Open);
    writer.write_all(IDLE_HINT.as_bytes()).await?;
    writer.flush().await?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let event = match parse_line(&line) {
            Line::Quit => break,
            Line::Event(event) => event,
        };

        let screen = match session.handle(engine, event) {
            SessionEffect::None => continue,
            SessionEffect::ShowHint | SessionEffect::ShowResults => render_session(&session),
            SessionEffect::Navigate(url) => {
                tracing::debug!("Navigating to {}", url);
                format!("-> {}\n{}", url, CLOSED_MESSAGE)
            }
            SessionEffect::Closed => CLOSED_MESSAGE.to_string(),
        };

        writer.write_all(screen.as_bytes()).await?;
        writer.flush().await?;
    }

    Ok(())
}
