//! Terminal demo: a resizable timeline slider along the bottom row and a
//! move-only track slider along the right column. One terminal cell is one
//! pixel. Drag the thumbs (or their ends) with the mouse, `q` to quit.

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, Stdout, Write};
use std::rc::Rc;

use axis_slider::{AxisSlider, SharedViewport, SliderGeometry};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEventKind,
};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Thickness of both sliders, in cells.
const THICKNESS: u32 = 1;

type Slider = AxisSlider<Rc<SharedViewport>>;

/// Last values reported by the slider callbacks.
#[derive(Debug, Default)]
struct Status {
    timeline_pos: f32,
    timeline_span: (f32, f32),
    tracks_pos: f32,
}

/// Which slider owns the current mouse gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Active {
    Timeline,
    Tracks,
}

fn main() -> io::Result<()> {
    let log_file = File::create("timeline.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .map_err(io::Error::other)?;

    let (cols, rows) = terminal::size()?;
    let canvas = Rc::new(SharedViewport::new(cols as u32, rows as u32));
    let status = Rc::new(RefCell::new(Status::default()));

    let mut timeline = AxisSlider::horizontal(Rc::clone(&canvas));
    timeline.set_pixel_height(THICKNESS);
    timeline.set_orthogonal_slider_pixel_height(THICKNESS);
    timeline.set_min_slider_pixel_length(4);
    timeline.set_resize_margin(1);
    timeline.set_normalized_length(0.3);
    let sink = Rc::clone(&status);
    timeline.set_drag_callback(move |ratio| sink.borrow_mut().timeline_pos = ratio);
    let sink = Rc::clone(&status);
    timeline.set_resize_callback(move |start, end| sink.borrow_mut().timeline_span = (start, end));

    let mut tracks = AxisSlider::vertical(Rc::clone(&canvas));
    tracks.set_pixel_height(THICKNESS);
    tracks.set_orthogonal_slider_pixel_height(THICKNESS);
    tracks.set_min_slider_pixel_length(2);
    tracks.set_normalized_length(0.4);
    let sink = Rc::clone(&status);
    tracks.set_drag_callback(move |ratio| sink.borrow_mut().tracks_pos = ratio);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide) {
        terminal::disable_raw_mode()?;
        return Err(err);
    }

    let result = run(&mut stdout, &canvas, &mut timeline, &mut tracks, &status);

    let restored = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen, cursor::Show);
    terminal::disable_raw_mode()?;
    restored?;
    result
}

fn run(
    out: &mut Stdout,
    canvas: &SharedViewport,
    timeline: &mut Slider,
    tracks: &mut Slider,
    status: &RefCell<Status>,
) -> io::Result<()> {
    let mut active: Option<Active> = None;

    loop {
        draw(out, timeline, tracks, status)?;

        match event::read()? {
            Event::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => {
                return Ok(());
            }
            Event::Resize(cols, rows) => canvas.resize(cols as u32, rows as u32),
            Event::Mouse(mouse) => {
                let (x, y) = (mouse.column as i32, mouse.row as i32);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        active = target_at(timeline, tracks, x, y);
                        match active {
                            Some(Active::Timeline) => timeline.pick(x, y),
                            Some(Active::Tracks) => tracks.pick(x, y),
                            None => {}
                        }
                    }
                    MouseEventKind::Drag(MouseButton::Left) => match active {
                        Some(Active::Timeline) => timeline.drag(x, y),
                        Some(Active::Tracks) => tracks.drag(x, y),
                        None => {}
                    },
                    MouseEventKind::Up(MouseButton::Left) => {
                        match active.take() {
                            Some(Active::Timeline) => timeline.release(),
                            Some(Active::Tracks) => tracks.release(),
                            None => {}
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

/// The slider under a mouse press. The timeline occupies the bottom row, the
/// track slider the right column; the corner belongs to neither.
fn target_at(timeline: &Slider, tracks: &Slider, x: i32, y: i32) -> Option<Active> {
    let track_x = timeline.track_pixel_length() as i32;
    let track_y = tracks.track_pixel_length() as i32;
    if y >= track_y && x < track_x {
        Some(Active::Timeline)
    } else if x >= track_x && y < track_y {
        Some(Active::Tracks)
    } else {
        None
    }
}

fn draw(
    out: &mut Stdout,
    timeline: &Slider,
    tracks: &Slider,
    status: &RefCell<Status>,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    let status = status.borrow();
    let line = format!(
        "timeline pos {:.3} span [{:.3}, {:.3}] len {:.3} | tracks pos {:.3} | q to quit",
        status.timeline_pos,
        status.timeline_span.0,
        status.timeline_span.1,
        timeline.length_ratio(),
        status.tracks_pos,
    );
    queue!(out, cursor::MoveTo(0, 0), Print(line))?;

    let row = tracks.track_pixel_length() as u16;
    for (i, filled) in cells(&timeline.geometry()).enumerate() {
        queue!(out, cursor::MoveTo(i as u16, row), Print(glyph(filled)))?;
    }

    let col = timeline.track_pixel_length() as u16;
    for (i, filled) in cells(&tracks.geometry()).enumerate() {
        queue!(out, cursor::MoveTo(col, i as u16), Print(glyph(filled)))?;
    }

    out.flush()
}

/// Whether each cell of the track is covered by the thumb.
fn cells(geom: &SliderGeometry) -> impl Iterator<Item = bool> + '_ {
    (0..geom.track_length as u32).map(move |i| {
        let center = i as f32 + 0.5;
        center >= geom.thumb_start && center <= geom.thumb_end()
    })
}

fn glyph(filled: bool) -> char {
    if filled { '█' } else { '░' }
}
