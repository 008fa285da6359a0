//! Compositor: builds a whole frame into one [`AppendBuffer`].
//!
//! Every frame is written with a single `write_all` + `flush`. The cursor
//! is hidden while the rows are redrawn and shown again at its final
//! position, so the terminal never displays a half-drawn screen.

use super::viewport::Viewport;
use crate::buffer::TextBuffer;
use crate::terminal::AppendBuffer;
use std::io::{self, Write};

/// Longest file name shown in the status bar.
const STATUS_NAME_MAX: usize = 20;

/// Banner shown in the middle of an empty buffer.
pub fn welcome_banner() -> String {
    format!("ped editor -- version {}", env!("CARGO_PKG_VERSION"))
}

/// Frame builder that owns the reusable output buffer.
#[derive(Debug, Default)]
pub struct Compositor {
    out: AppendBuffer,
}

impl Compositor {
    /// Create a compositor with a default-sized output buffer.
    pub fn new() -> Self {
        Self {
            out: AppendBuffer::new(),
        }
    }

    /// Compose a full frame and return its bytes.
    ///
    /// `message` is the status message if it is still current.
    pub fn compose(
        &mut self,
        view: &mut Viewport,
        buffer: &TextBuffer,
        message: Option<&str>,
    ) -> &[u8] {
        view.scroll(buffer);

        let out = &mut self.out;
        out.clear();
        out.cursor_hide();
        out.cursor_home();

        draw_rows(out, view, buffer);
        draw_status_bar(out, view, buffer);
        draw_message_bar(out, view, message);

        let (row, col) = view.screen_cursor();
        out.cursor_move(row, col);
        out.cursor_show();

        out.as_bytes()
    }

    /// Compose a frame and flush it to `writer` in a single write.
    pub fn refresh<W: Write>(
        &mut self,
        view: &mut Viewport,
        buffer: &TextBuffer,
        message: Option<&str>,
        writer: &mut W,
    ) -> io::Result<()> {
        self.compose(view, buffer, message);
        self.out.flush_to(writer)
    }
}

/// Draw the text area: buffer rows, the welcome banner, or `~` fillers.
pub fn draw_rows(out: &mut AppendBuffer, view: &Viewport, buffer: &TextBuffer) {
    let cols = view.screencols();

    for y in 0..view.screenrows() {
        let filerow = y + view.rowoff();
        if let Some(row) = buffer.row(filerow) {
            let render = row.render();
            let start = view.coloff().min(render.len());
            let end = (view.coloff() + cols).min(render.len());
            out.append(&render[start..end]);
        } else if buffer.is_empty() && y == view.screenrows() / 3 {
            draw_banner(out, cols);
        } else if cols > 0 {
            out.append(b"~");
        }

        out.clear_line();
        out.newline();
    }
}

fn draw_banner(out: &mut AppendBuffer, cols: usize) {
    let welcome = welcome_banner();
    let len = welcome.len().min(cols);
    let mut padding = (cols - len) / 2;
    if padding > 0 {
        out.append(b"~");
        padding -= 1;
    }
    out.append_repeat(b' ', padding);
    out.append(&welcome.as_bytes()[..len]);
}

/// Draw the inverse-video status bar.
pub fn draw_status_bar(out: &mut AppendBuffer, view: &Viewport, buffer: &TextBuffer) {
    let cols = view.screencols();
    let name = buffer
        .filename()
        .map_or_else(|| "[No Name]".to_string(), |path| path.display().to_string());
    let name = &name.as_bytes()[..name.len().min(STATUS_NAME_MAX)];
    let modified = if buffer.is_dirty() { "(modified)" } else { "" };

    let mut status = name.to_vec();
    status.extend_from_slice(format!(" - {} lines {modified}", buffer.numrows()).as_bytes());
    let rstatus = format!("{}/{}", view.cursor.cy + 1, buffer.numrows());

    let mut len = status.len().min(cols);

    out.inverse();
    out.append(&status[..len]);
    while len < cols {
        if cols - len == rstatus.len() {
            out.append(rstatus.as_bytes());
            break;
        }
        out.append(b" ");
        len += 1;
    }
    out.reset_attrs();
    out.newline();
}

/// Draw the message bar. `message` is `None` once the message has expired.
pub fn draw_message_bar(out: &mut AppendBuffer, view: &Viewport, message: Option<&str>) {
    out.clear_line();
    if let Some(message) = message {
        let len = message.len().min(view.screencols());
        out.append(&message.as_bytes()[..len]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Cursor;

    fn buffer_from(lines: &[&str]) -> TextBuffer {
        let mut buffer = TextBuffer::default();
        for line in lines {
            buffer.insert_row(buffer.numrows(), line.as_bytes());
        }
        buffer.mark_clean();
        buffer
    }

    /// Feed a frame through a VT100 emulator. The emulated terminal is
    /// wider than the viewport so clipping mistakes show up as long lines
    /// instead of being hidden by the right margin.
    fn screen(frame: &[u8], rows: u16, cols: u16) -> vt100::Parser {
        let mut parser = vt100::Parser::new(rows, cols + 10, 0);
        parser.process(frame);
        parser
    }

    fn line(parser: &vt100::Parser, row: u16) -> String {
        let (_, cols) = parser.screen().size();
        parser
            .screen()
            .rows(0, cols)
            .nth(usize::from(row))
            .unwrap_or_default()
    }

    #[test]
    fn test_empty_buffer_shows_banner() {
        let buffer = TextBuffer::default();
        let mut view = Viewport::new(22, 80);
        let mut compositor = Compositor::new();
        let frame = compositor.compose(&mut view, &buffer, None).to_vec();

        let parser = screen(&frame, 24, 80);
        for row in 0..22 {
            let text = line(&parser, row);
            if row == 7 {
                let banner = welcome_banner();
                let padding = (80 - banner.len()) / 2;
                assert!(text.starts_with('~'));
                assert_eq!(text.trim_start_matches('~').trim_start(), banner);
                assert_eq!(text.find("ped"), Some(padding));
            } else {
                assert_eq!(text, "~", "row {row}");
            }
        }
    }

    #[test]
    fn test_banner_truncated_on_narrow_terminal() {
        let mut out = AppendBuffer::new();
        draw_banner(&mut out, 10);
        assert_eq!(out.as_bytes(), b"ped editor");
    }

    #[test]
    fn test_rows_clipped_to_viewport() {
        let buffer = buffer_from(&["0123456789abcdef", "\tx"]);
        let mut view = Viewport::new(3, 8);
        view.cursor = Cursor::new(12, 0);
        let mut compositor = Compositor::new();
        let frame = compositor.compose(&mut view, &buffer, None).to_vec();

        // rx 12 with 8 columns scrolls to coloff 5.
        assert_eq!(view.coloff(), 5);
        let parser = screen(&frame, 5, 8);
        assert_eq!(line(&parser, 0), "56789abc");
        assert_eq!(line(&parser, 1), "   x");
        assert_eq!(line(&parser, 2), "~");
        assert_eq!(parser.screen().cursor_position(), (0, 7));
    }

    #[test]
    fn test_no_row_exceeds_width() {
        let long = "x".repeat(500);
        let buffer = buffer_from(&[long.as_str(), "short"]);
        let mut view = Viewport::new(4, 20);
        let mut compositor = Compositor::new();
        let frame = compositor.compose(&mut view, &buffer, Some(long.as_str())).to_vec();

        let parser = screen(&frame, 6, 20);
        assert_eq!(line(&parser, 0), "x".repeat(20));
        assert_eq!(line(&parser, 1), "short");
        // Nothing wrapped, so the message is still on the last line.
        assert_eq!(line(&parser, 5), "x".repeat(20));
    }

    #[test]
    fn test_status_bar_layout() {
        let mut buffer = buffer_from(&["a", "b", "c"]);
        buffer.set_filename("notes.txt");
        buffer.row_insert_char(0, 0, b'z');
        let mut view = Viewport::new(3, 40);
        view.cursor = Cursor::new(0, 1);

        let mut out = AppendBuffer::new();
        draw_status_bar(&mut out, &view, &buffer);
        let text = String::from_utf8(out.as_bytes().to_vec()).unwrap();
        let body = text
            .strip_prefix("\x1b[7m")
            .and_then(|rest| rest.strip_suffix("\x1b[m\r\n"))
            .unwrap();
        assert_eq!(body.len(), 40);
        assert!(body.starts_with("notes.txt - 3 lines (modified)"));
        assert!(body.ends_with("2/3"));
    }

    #[test]
    fn test_status_bar_truncates_name() {
        let mut buffer = TextBuffer::default();
        buffer.set_filename("a_really_long_file_name_for_testing.txt");
        let view = Viewport::new(3, 80);

        let mut out = AppendBuffer::new();
        draw_status_bar(&mut out, &view, &buffer);
        let text = String::from_utf8(out.as_bytes().to_vec()).unwrap();
        assert!(text.contains("a_really_long_file_n - 0 lines "));
        assert!(!text.contains("(modified)"));
    }

    #[test]
    fn test_status_bar_truncates_name_by_bytes() {
        let mut buffer = TextBuffer::default();
        let name = format!("a{}.txt", "\u{e9}".repeat(12));
        buffer.set_filename(name.as_str());
        let view = Viewport::new(3, 80);

        let mut out = AppendBuffer::new();
        draw_status_bar(&mut out, &view, &buffer);

        // 20 bytes ends halfway through the tenth two-byte character.
        let mut expected = b"\x1b[7m".to_vec();
        expected.extend_from_slice(&name.as_bytes()[..20]);
        expected.extend_from_slice(b" - 0 lines ");
        assert!(out.as_bytes().starts_with(&expected));
        assert_eq!(out.len(), 4 + 80 + 3 + 2);
    }

    #[test]
    fn test_message_bar_hidden_when_expired() {
        let view = Viewport::new(3, 80);
        let mut out = AppendBuffer::new();
        draw_message_bar(&mut out, &view, None);
        assert_eq!(out.as_bytes(), b"\x1b[K");

        out.clear();
        draw_message_bar(&mut out, &view, Some("hello"));
        assert_eq!(out.as_bytes(), b"\x1b[Khello");
    }

    #[test]
    fn test_frame_shape() {
        let buffer = buffer_from(&["abc"]);
        let mut view = Viewport::new(2, 10);
        view.cursor = Cursor::new(3, 0);
        let mut compositor = Compositor::new();
        let frame = compositor.compose(&mut view, &buffer, None);

        assert!(frame.starts_with(b"\x1b[?25l\x1b[H"));
        assert!(frame.ends_with(b"\x1b[1;4H\x1b[?25h"));
    }

    #[test]
    fn test_refresh_single_write() {
        struct CountingWriter(usize);

        impl Write for CountingWriter {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0 += 1;
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let buffer = buffer_from(&["one", "two", "three"]);
        let mut view = Viewport::new(10, 40);
        let mut compositor = Compositor::new();
        let mut writer = CountingWriter(0);
        compositor
            .refresh(&mut view, &buffer, Some("HELP"), &mut writer)
            .unwrap();
        assert_eq!(writer.0, 1);
    }
}
