//! Replays a [`DrawList`] onto a ratatui canvas

use game_core::{DrawList, Playfield, Rgb, Shape, TextSize};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Points};
use ratatui::Frame;

/// Terminal cells are about twice as tall as they are wide
const CELL_ASPECT: f32 = 2.0;

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Largest centred area with the playfield's aspect ratio
pub fn fit_area(area: Rect, field: &Playfield) -> Rect {
    let cols = area.width as f32;
    let rows = area.height as f32;
    let cols_for_rows = (rows * CELL_ASPECT * field.width / field.height).round();

    let (width, height) = if cols > cols_for_rows {
        (cols_for_rows as u16, area.height)
    } else {
        let rows_for_cols = (cols * field.height / (field.width * CELL_ASPECT)).round();
        (area.width, (rows_for_cols as u16).min(area.height))
    };
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw `list` to the whole frame
pub fn draw(frame: &mut Frame, list: &DrawList, field: &Playfield) {
    let area = fit_area(frame.area(), field);
    // Playfield units per terminal column, for centring text
    let unit_per_col = field.width / area.width.max(1) as f32;

    let canvas = Canvas::default()
        .background_color(to_color(list.background))
        .marker(Marker::Braille)
        .x_bounds([0.0, field.width as f64])
        .y_bounds([0.0, field.height as f64])
        .paint(|ctx| {
            for cmd in list.iter() {
                paint(ctx, &cmd.shape, cmd.pos.x, cmd.pos.y, cmd.color, field, unit_per_col);
            }
        });

    frame.render_widget(canvas, area);
}

fn paint(
    ctx: &mut Context,
    shape: &Shape,
    x: f32,
    y: f32,
    rgb: Rgb,
    field: &Playfield,
    unit_per_col: f32,
) {
    let color = to_color(rgb);
    // Canvas y grows upward
    let flip = |y: f32| (field.height - y) as f64;

    match shape {
        Shape::Rect { size } => {
            // Fill with vertical strokes one braille dot apart
            let step = (unit_per_col / 2.0).max(1.0);
            let mut sx = x;
            while sx <= x + size.x {
                ctx.draw(&CanvasLine::new(
                    sx as f64,
                    flip(y),
                    sx as f64,
                    flip(y + size.y),
                    color,
                ));
                sx += step;
            }
        }
        Shape::Circle { radius } => {
            ctx.draw(&Circle {
                x: x as f64,
                y: flip(y),
                radius: *radius as f64,
                color,
            });
            ctx.draw(&Points {
                coords: &[(x as f64, flip(y))],
                color,
            });
        }
        Shape::CenterLine { length, dash } => {
            let mut top = y;
            while top < y + length {
                let bottom = (top + dash).min(y + length);
                ctx.draw(&CanvasLine::new(
                    x as f64,
                    flip(top),
                    x as f64,
                    flip(bottom),
                    color,
                ));
                top += dash * 2.0;
            }
        }
        Shape::Text { text, size } => {
            let style = match size {
                TextSize::Large => Style::new().fg(color).add_modifier(Modifier::BOLD),
                TextSize::Medium => Style::new().fg(color),
                TextSize::Small => Style::new().fg(color).add_modifier(Modifier::DIM),
            };
            let half_width = text.chars().count() as f32 * unit_per_col / 2.0;
            ctx.print(
                (x - half_width).max(0.0) as f64,
                flip(y),
                Line::styled(text.clone(), style),
            );
        }
    }
}
