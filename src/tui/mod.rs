// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal host shell (ratatui + crossterm).
//!
//! Implements the renderer and input contracts the inspection mode depends
//! on: map-space plots land on a braille canvas, mouse motion feeds the
//! highlight tracker, and button releases drive the flag toggles.

use std::error::Error;
use std::io;
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Points},
        Block, Borders, Paragraph,
    },
};

use crate::mode::{InfoSink, InspectSession, LinedefInfo};
use crate::model::{ConsistencyError, Map, Point2};
use crate::ops::SnapshotJournal;
use crate::plugin::{HostRegistry, InspectPlugin, ModeDescriptor};
use crate::query::LineClass;
use crate::render::{FrameLayer, LayerKind, MapRenderer, PixelColor, Presentation};
use crate::store::Settings;
use crate::ui::Viewport;

mod theme;


const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(250);
const FOOTER_BRAND: &str = " O R E A D ";
const GRID_SPACING: f64 = 64.0;
const PAN_STEP_CELLS: f64 = 4.0;
const INFO_PANEL_HEIGHT: u16 = 8;
const NOMINAL_VIEW_WIDTH: f64 = 100.0;
const NOMINAL_VIEW_HEIGHT: f64 = 36.0;

/// The built-in demo map.
pub fn demo_map() -> Map {
    crate::model::fixtures::demo_map()
}

/// Runs the interactive inspector until the operator quits.
pub fn run(map: Map, settings: Settings) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(map, settings);
    app.engage()?;

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    Ok(())
}

/// A retained-plot backend: shapes are kept in map space, so pan/zoom only
/// changes the canvas bounds and never forces the mode to replot.
#[derive(Debug, Clone, Default)]
pub(crate) struct CanvasRenderer {
    presentation: Presentation,
    scale: f64,
    staging: Option<(FrameLayer, Vec<PlotShape>)>,
    pending: [Option<Vec<PlotShape>>; 3],
    visible: [Vec<PlotShape>; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlotShape {
    Line {
        from: Point2,
        to: Point2,
        color: PixelColor,
    },
    Marker {
        at: Point2,
        color: PixelColor,
    },
}

fn frame_slot(layer: FrameLayer) -> usize {
    match layer {
        FrameLayer::Geometry => 0,
        FrameLayer::Things => 1,
        FrameLayer::Overlay => 2,
    }
}

impl CanvasRenderer {
    pub(crate) fn new() -> Self {
        Self {
            scale: 1.0,
            ..Self::default()
        }
    }

    pub(crate) fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    pub(crate) fn visible(&self, layer: FrameLayer) -> &[PlotShape] {
        &self.visible[frame_slot(layer)]
    }

    pub(crate) fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    fn layer_alpha(&self, kind: LayerKind) -> f32 {
        self.presentation
            .layer(kind)
            .map_or(1.0, |layer| layer.alpha())
    }
}

impl MapRenderer for CanvasRenderer {
    fn set_presentation(&mut self, presentation: &Presentation) {
        self.presentation = presentation.clone();
    }

    fn start_frame(&mut self, layer: FrameLayer, clear: bool) -> bool {
        if self.staging.is_some() {
            return false;
        }
        let shapes = if clear {
            Vec::new()
        } else {
            self.visible(layer).to_vec()
        };
        self.staging = Some((layer, shapes));
        true
    }

    fn plot_linedef(&mut self, start: Point2, end: Point2, color: PixelColor) {
        if let Some((_, shapes)) = self.staging.as_mut() {
            shapes.push(PlotShape::Line {
                from: start,
                to: end,
                color,
            });
        }
    }

    fn plot_thing(&mut self, at: Point2, color: PixelColor) {
        if let Some((_, shapes)) = self.staging.as_mut() {
            shapes.push(PlotShape::Marker { at, color });
        }
    }

    fn finish(&mut self) {
        if let Some((layer, shapes)) = self.staging.take() {
            self.pending[frame_slot(layer)] = Some(shapes);
        }
    }

    fn present(&mut self) {
        for slot in 0..self.pending.len() {
            if let Some(shapes) = self.pending[slot].take() {
                self.visible[slot] = shapes;
            }
        }
    }

    fn scale(&self) -> f64 {
        self.scale
    }
}

/// Info readout panel state.
#[derive(Debug, Default)]
pub(crate) struct InfoPanel {
    current: Option<LinedefInfo>,
}

impl InfoPanel {
    pub(crate) fn current(&self) -> Option<&LinedefInfo> {
        self.current.as_ref()
    }
}

impl InfoSink for InfoPanel {
    fn show_linedef(&mut self, info: &LinedefInfo) {
        self.current = Some(*info);
    }

    fn hide_info(&mut self) {
        self.current = None;
    }
}

/// Registry of modes the shell offers; the inspector is the only one.
#[derive(Debug, Default)]
pub(crate) struct ShellRegistry {
    modes: Vec<ModeDescriptor>,
}

impl ShellRegistry {
    pub(crate) fn modes(&self) -> &[ModeDescriptor] {
        &self.modes
    }
}

impl HostRegistry for ShellRegistry {
    fn register_mode(&mut self, descriptor: &ModeDescriptor) {
        self.modes.push(descriptor.clone());
    }
}

pub(crate) struct App {
    map: Map,
    session: InspectSession,
    renderer: CanvasRenderer,
    journal: SnapshotJournal,
    info: InfoPanel,
    viewport: Viewport,
    mode_name: &'static str,
    background_alpha: f32,
    inactive_things_alpha: f32,
    inspect_all: bool,
    canvas_area: Rect,
    viewport_fitted: bool,
    toast: Option<String>,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(map: Map, settings: Settings) -> Self {
        let mut registry = ShellRegistry::default();
        let plugin = InspectPlugin::initialize(&mut registry, settings);
        let mode_name = registry
            .modes()
            .first()
            .map_or("Automap Mode", |descriptor| descriptor.display_name);

        let viewport = match map.bounds() {
            Some((min, max)) => Viewport::fit(min, max, NOMINAL_VIEW_WIDTH, NOMINAL_VIEW_HEIGHT),
            None => Viewport::new(Point2::new(0.0, 0.0), 1.0),
        };

        let mut renderer = CanvasRenderer::new();
        renderer.set_scale(viewport.scale());

        Self {
            session: InspectSession::new(plugin.settings().highlight_radius()),
            background_alpha: plugin.settings().background_alpha(),
            inactive_things_alpha: plugin.settings().inactive_things_alpha(),
            map,
            renderer,
            journal: SnapshotJournal::new(),
            info: InfoPanel::default(),
            viewport,
            mode_name,
            inspect_all: false,
            canvas_area: Rect::default(),
            viewport_fitted: false,
            toast: None,
            should_quit: false,
        }
    }

    pub(crate) fn engage(&mut self) -> Result<(), ConsistencyError> {
        let presentation =
            Presentation::automap(self.background_alpha, self.inactive_things_alpha);
        self.session
            .engage(&self.map, self.inspect_all, &presentation, &mut self.renderer)
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        self.toast = None;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.session.disengage(&mut self.info);
                self.should_quit = true;
            }
            KeyCode::Char('a') => {
                self.inspect_all = !self.inspect_all;
                let result =
                    self.session
                        .policy_changed(&self.map, self.inspect_all, &mut self.renderer);
                self.report(result);
            }
            KeyCode::Char('u') => self.undo(),
            KeyCode::Left | KeyCode::Char('h') => self.pan(-PAN_STEP_CELLS, 0.0),
            KeyCode::Right | KeyCode::Char('l') => self.pan(PAN_STEP_CELLS, 0.0),
            KeyCode::Up | KeyCode::Char('k') => self.pan(0.0, PAN_STEP_CELLS),
            KeyCode::Down | KeyCode::Char('j') => self.pan(0.0, -PAN_STEP_CELLS),
            KeyCode::Char('+') | KeyCode::Char('=') => self.zoom(true),
            KeyCode::Char('-') => self.zoom(false),
            _ => {}
        }
    }

    pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved => match self.cell_to_map(mouse.column, mouse.row) {
                Some(cursor) => {
                    let result = self.session.cursor_moved(
                        &self.map,
                        cursor,
                        self.inspect_all,
                        &mut self.renderer,
                        &mut self.info,
                    );
                    self.report(result);
                }
                None => {
                    let result = self.session.cursor_left(
                        &self.map,
                        self.inspect_all,
                        &mut self.renderer,
                        &mut self.info,
                    );
                    self.report(result);
                }
            },
            MouseEventKind::Up(MouseButton::Left) => {
                let result = self.session.toggle_secret(
                    &mut self.map,
                    self.inspect_all,
                    &mut self.journal,
                    &mut self.renderer,
                );
                self.report(result);
            }
            MouseEventKind::Up(MouseButton::Right) => {
                let result = self.session.toggle_hidden(
                    &mut self.map,
                    self.inspect_all,
                    &mut self.journal,
                    &mut self.renderer,
                );
                self.report(result);
            }
            _ => {}
        }
    }

    fn pan(&mut self, dx: f64, dy: f64) {
        self.viewport.pan_cells(dx, dy);
    }

    fn zoom(&mut self, zoom_in: bool) {
        if zoom_in {
            self.viewport.zoom_in();
        } else {
            self.viewport.zoom_out();
        }
        self.renderer.set_scale(self.viewport.scale());
    }

    fn undo(&mut self) {
        match self.journal.undo(&mut self.map) {
            Some(label) => {
                let result = self
                    .session
                    .rebuild(&self.map, self.inspect_all)
                    .and_then(|()| {
                        self.session
                            .redraw_all(&self.map, self.inspect_all, &mut self.renderer)
                    });
                self.report(result);
                self.set_toast(format!("Undone: {label}"));
            }
            None => self.set_toast("Nothing to undo".to_owned()),
        }
    }

    /// Converts an absolute terminal cell to map coordinates; `None` when the
    /// cell lies outside the map canvas.
    fn cell_to_map(&self, column: u16, row: u16) -> Option<Point2> {
        let area = self.canvas_area;
        if area.width == 0 || area.height == 0 {
            return None;
        }
        if column < area.x
            || column >= area.x.saturating_add(area.width)
            || row < area.y
            || row >= area.y.saturating_add(area.height)
        {
            return None;
        }
        Some(self.viewport.cell_to_map(
            f64::from(column - area.x),
            f64::from(row - area.y),
            f64::from(area.width),
            f64::from(area.height),
        ))
    }

    fn report<T>(&mut self, result: Result<T, ConsistencyError>) {
        if let Err(err) = result {
            self.set_toast(format!("Map inconsistency: {err}"));
        }
    }

    fn set_toast(&mut self, message: String) {
        self.toast = Some(message);
    }

    fn fit_viewport(&mut self, width: f64, height: f64) {
        if let Some((min, max)) = self.map.bounds() {
            self.viewport = Viewport::fit(min, max, width, height);
            self.renderer.set_scale(self.viewport.scale());
        }
        self.viewport_fitted = true;
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(INFO_PANEL_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);
    let canvas_chunk = layout[0];
    let info_chunk = layout[1];
    let footer_chunk = layout[2];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border_style())
        .title(format!(" {} ", app.mode_name));
    let inner = block.inner(canvas_chunk);
    app.canvas_area = inner;
    if !app.viewport_fitted && inner.width > 0 && inner.height > 0 {
        app.fit_viewport(f64::from(inner.width), f64::from(inner.height));
    }

    let canvas = Canvas::default()
        .block(block)
        .marker(symbols::Marker::Braille)
        .x_bounds(app.viewport.x_bounds(f64::from(inner.width)))
        .y_bounds(app.viewport.y_bounds(f64::from(inner.height)))
        .paint(|ctx| paint_map(ctx, app));
    frame.render_widget(canvas, canvas_chunk);

    let info = Paragraph::new(info_lines(app)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border_style())
            .title(" Linedef "),
    );
    frame.render_widget(info, info_chunk);

    frame.render_widget(Paragraph::new(footer_line(app)), footer_chunk);
}

fn paint_map(ctx: &mut Context<'_>, app: &App) {
    let renderer = &app.renderer;

    if renderer.presentation().layer(LayerKind::Grid).is_some() {
        paint_grid(ctx, app);
    }

    let things_alpha = renderer.layer_alpha(LayerKind::Things);
    paint_shapes(ctx, renderer.visible(FrameLayer::Things), things_alpha);

    let geometry_alpha = renderer.layer_alpha(LayerKind::Geometry);
    paint_shapes(ctx, renderer.visible(FrameLayer::Geometry), geometry_alpha);

    let overlay_alpha = renderer.layer_alpha(LayerKind::Overlay);
    paint_shapes(ctx, renderer.visible(FrameLayer::Overlay), overlay_alpha);
}

fn paint_shapes(ctx: &mut Context<'_>, shapes: &[PlotShape], alpha: f32) {
    for shape in shapes {
        match shape {
            PlotShape::Line { from, to, color } => {
                ctx.draw(&CanvasLine {
                    x1: from.x,
                    y1: from.y,
                    x2: to.x,
                    y2: to.y,
                    color: theme::terminal_color(*color, alpha),
                });
            }
            PlotShape::Marker { at, color } => {
                ctx.draw(&Points {
                    coords: &[(at.x, at.y)],
                    color: theme::terminal_color(*color, alpha),
                });
            }
        }
    }
}

fn paint_grid(ctx: &mut Context<'_>, app: &App) {
    let [x0, x1] = app
        .viewport
        .x_bounds(f64::from(app.canvas_area.width.max(1)));
    let [y0, y1] = app
        .viewport
        .y_bounds(f64::from(app.canvas_area.height.max(1)));

    let mut x = (x0 / GRID_SPACING).floor() * GRID_SPACING;
    while x <= x1 {
        ctx.draw(&CanvasLine {
            x1: x,
            y1: y0,
            x2: x,
            y2: y1,
            color: theme::GRID_COLOR,
        });
        x += GRID_SPACING;
    }
    let mut y = (y0 / GRID_SPACING).floor() * GRID_SPACING;
    while y <= y1 {
        ctx.draw(&CanvasLine {
            x1: x0,
            y1: y,
            x2: x1,
            y2: y,
            color: theme::GRID_COLOR,
        });
        y += GRID_SPACING;
    }
}

pub(crate) fn class_label(class: LineClass) -> &'static str {
    match class {
        LineClass::Hidden => "hidden from automap",
        LineClass::Solid => "solid wall",
        LineClass::FloorChange => "floor height change",
        LineClass::CeilingChange => "ceiling height change",
        LineClass::Flush => "flush",
    }
}

fn info_lines(app: &App) -> Vec<Line<'static>> {
    let label = theme::info_label_style();
    let value = theme::info_value_style();

    match app.info.current() {
        Some(info) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("linedef ", label),
                    Span::styled(info.linedef.to_string(), value),
                    Span::styled("  class ", label),
                    Span::styled(class_label(info.class), value),
                ]),
                Line::from(vec![
                    Span::styled("length ", label),
                    Span::styled(format!("{:.1}", info.length), value),
                    Span::styled("  tag ", label),
                    Span::styled(info.tag.to_string(), value),
                    Span::styled("  sides ", label),
                    Span::styled(if info.two_sided { "2" } else { "1" }, value),
                ]),
                Line::from(vec![
                    Span::styled("secret ", label),
                    Span::styled(if info.secret { "yes" } else { "no" }, value),
                    Span::styled("  hidden ", label),
                    Span::styled(if info.hidden { "yes" } else { "no" }, value),
                ]),
            ];
            if let Some(heights) = info.heights {
                lines.push(Line::from(vec![
                    Span::styled("floors ", label),
                    Span::styled(
                        format!("{} / {}", heights.front_floor, heights.back_floor),
                        value,
                    ),
                    Span::styled("  ceilings ", label),
                    Span::styled(
                        format!("{} / {}", heights.front_ceiling, heights.back_ceiling),
                        value,
                    ),
                ]));
            }
            lines
        }
        None => vec![
            Line::from(Span::styled(
                "Hover a linedef to inspect it.",
                theme::info_label_style(),
            )),
            Line::from(vec![
                Span::styled("eligible linedefs ", label),
                Span::styled(app.session.candidates().len().to_string(), value),
            ]),
        ],
    }
}

fn footer_line(app: &App) -> Line<'static> {
    if let Some(toast) = &app.toast {
        return Line::from(Span::styled(
            toast.clone(),
            Style::default().fg(theme::TOAST_COLOR),
        ));
    }

    let key = Style::default().fg(theme::FOOTER_KEY_COLOR);
    let label = Style::default().fg(theme::FOOTER_LABEL_COLOR);
    let mut spans = vec![
        Span::styled(" a ", key),
        Span::styled("inspect-all", theme::policy_badge_style(app.inspect_all)),
        Span::styled("  LMB ", key),
        Span::styled("secret", label),
        Span::styled("  RMB ", key),
        Span::styled("hidden", label),
        Span::styled("  u ", key),
        Span::styled("undo", label),
        Span::styled("  +- ", key),
        Span::styled("zoom", label),
        Span::styled("  q ", key),
        Span::styled("quit", label),
        Span::styled("  ", label),
    ];
    spans.push(Span::styled(
        FOOTER_BRAND,
        Style::default().fg(theme::FOOTER_BRAND_COLOR),
    ));
    Line::from(spans)
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}
