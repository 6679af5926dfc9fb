use std::io;
use tui::backend::CrosstermBackend;
use tui::layout::Rect;
use tui::style::{Color, Style};
use tui::symbols::Marker;
use tui::widgets::canvas::{Canvas, Points};
use tui::widgets::{Block, Borders};
use tui::Terminal;

/// A surface the machine can put its framebuffer on. It abstracts the
/// implementation details away, so a variety of kinds of screen would work.
/// `present` is called after every sprite draw, so it wants to be cheap.
pub trait Screen {
    /// blank the whole surface
    fn clear(&mut self) -> Result<(), io::Error>;

    /// show a complete frame: one byte per pixel, row-major from the top
    /// left, 0 dark and 1 lit
    fn present(&mut self, frame: &[u8]) -> Result<(), io::Error>;
}

// width and height of the machine's display in pixels
struct Resolution(usize, usize);

impl Resolution {
    fn frame_len(&self) -> usize {
        self.0 * self.1
    }

    fn x_bounds(&self) -> [f64; 2] {
        [0.0, (self.0 - 1) as f64]
    }

    // the canvas y axis points up, the framebuffer's points down
    fn y_bounds(&self) -> [f64; 2] {
        [-1.0 * (self.1 - 1) as f64, 0.0]
    }

    /// the canvas coordinates of every cell in `frame` whose value is `lit`
    fn cells<'a>(&self, frame: &'a [u8], lit: u8) -> impl Iterator<Item = (f64, f64)> + 'a {
        let w = self.0;
        frame.iter().enumerate().filter_map(move |(idx, &cell)| {
            (cell == lit).then(|| ((idx % w) as f64, -1.0 * (idx / w) as f64))
        })
    }
}

/// monochrome screen in a terminal, rendered with TUI over crossterm
pub struct MonoTermScreen {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    resolution: Resolution,
}

impl MonoTermScreen {
    pub fn new(x: usize, y: usize) -> Result<MonoTermScreen, io::Error> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(MonoTermScreen {
            terminal,
            resolution: Resolution(x, y),
        })
    }
}

impl Screen for MonoTermScreen {
    fn clear(&mut self) -> Result<(), io::Error> {
        self.terminal.clear()
    }

    fn present(&mut self, frame: &[u8]) -> Result<(), io::Error> {
        // make sure we're given exactly one whole frame
        assert_eq!(
            frame.len(),
            self.resolution.frame_len(),
            "MonoTermScreen must be given a whole frame to present"
        );

        // this assumes a 1:1 ratio between terminal cells, machine pixels
        // and the internal TUI canvas
        let resolution = &self.resolution;
        self.terminal.draw(|f| {
            let size = Rect::new(
                0,
                0,
                2 + resolution.0 as u16,
                2 + resolution.1 as u16,
            );

            let canvas = Canvas::default()
                .block(
                    Block::default()
                        .title("vip8")
                        .borders(Borders::ALL)
                        .style(Style::default().bg(Color::Black)),
                )
                .x_bounds(resolution.x_bounds())
                .y_bounds(resolution.y_bounds())
                .marker(Marker::Block)
                .paint(|ctx| {
                    // dark cells first, then lit ones on top
                    ctx.draw(&Points {
                        coords: &resolution.cells(frame, 0).collect::<Vec<_>>(),
                        color: Color::Black,
                    });
                    ctx.draw(&Points {
                        coords: &resolution.cells(frame, 1).collect::<Vec<_>>(),
                        color: Color::White,
                    });
                });
            f.render_widget(canvas, size);
        })?;
        Ok(())
    }
}

/// counts what the machine asked for without touching a terminal. useful
/// for testing everything that is not a screen
#[derive(Default)]
pub struct DummyScreen {
    pub clears: usize,
    pub presents: usize,
    pub last: Vec<u8>,
}

impl Screen for DummyScreen {
    fn clear(&mut self) -> Result<(), io::Error> {
        self.clears += 1;
        Ok(())
    }

    fn present(&mut self, frame: &[u8]) -> Result<(), io::Error> {
        self.presents += 1;
        self.last = frame.to_vec();
        Ok(())
    }
}
