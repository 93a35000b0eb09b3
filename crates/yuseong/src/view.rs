//! Terminal render surface for the meteor shower.
//!
//! Materialises scene descriptors as terminal cells and plays their
//! declarative animation timings against the app clock: meteor start offsets
//! decay linearly to zero over the streak duration, stars oscillate through
//! their twinkle ladder, and the black hole drifts along its slow loop.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use yuseong_core::GradientStyle;
use yuseong_sky::MeteorShower;
use yuseong_sky::descriptor::{BlackHole, Meteor, Star};

/// Characters used for stars, dim to bright.
const STAR_CHARS: &[char] = &['.', '·', '+', '*', '✦', '✧'];

/// Characters used for the black hole ring.
const RING_CHARS: &[char] = &['∘', 'o', 'O'];

/// Sky color at the top of the gradient (deep wine).
const SKY_PRIMARY: (u8, u8, u8) = (42, 9, 25);

/// Sky color at the bottom of the gradient (near-black blue).
const SKY_SECONDARY: (u8, u8, u8) = (3, 13, 27);

/// Descriptor pixels per percent of the nominal surface.
const PX_PER_PERCENT: f64 = 10.0;

/// A materialised foreground cell.
#[derive(Debug, Clone)]
struct Cell {
    ch: char,
    color: Color,
}

/// Render the whole frame: sky plus status line.
pub fn render(
    frame: &mut Frame,
    shower: &MeteorShower,
    elapsed_ms: u64,
    diagnostic: Option<&str>,
) {
    let chunks =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(frame.area());

    render_sky(frame, chunks[0], shower, elapsed_ms);
    render_status(frame, chunks[1], shower, diagnostic);
}

/// Render the sky area from the component's current scene.
fn render_sky(frame: &mut Frame, area: Rect, shower: &MeteorShower, elapsed_ms: u64) {
    let width = area.width;
    let height = area.height;
    if width == 0 || height == 0 {
        return;
    }
    let Some(scene) = shower.scene() else {
        return;
    };

    let elapsed_s = elapsed_ms as f64 / 1000.0;
    let mut grid: Vec<Option<Cell>> = vec![None; width as usize * height as usize];

    for (i, star) in scene.stars().iter().enumerate() {
        draw_star(&mut grid, width, height, star, i, elapsed_s);
    }
    for meteor in scene.meteors() {
        draw_meteor(&mut grid, width, height, meteor, elapsed_s);
    }
    if let Some(hole) = scene.black_hole() {
        draw_black_hole(&mut grid, width, height, hole, elapsed_s);
    }

    let style = shower.gradient_style();
    let lines: Vec<Line> = (0..height)
        .map(|y| {
            let spans: Vec<Span> = (0..width)
                .map(|x| {
                    let bg = gradient_color(x, y, width, height, style);
                    match &grid[y as usize * width as usize + x as usize] {
                        Some(cell) => Span::styled(
                            cell.ch.to_string(),
                            Style::new().fg(cell.color).bg(bg),
                        ),
                        None => Span::styled(" ", Style::new().bg(bg)),
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Render the key help and current counts.
fn render_status(frame: &mut Frame, area: Rect, shower: &MeteorShower, diagnostic: Option<&str>) {
    let mut spans = vec![
        "q".bold().cyan(),
        " quit  ".dark_gray(),
        "m/M".bold().cyan(),
        format!(" meteors {}  ", shower.meteor_count()).dark_gray(),
        "s/S".bold().cyan(),
        format!(" stars {}  ", shower.star_count()).dark_gray(),
        "b".bold().cyan(),
        format!(
            " black hole {}  ",
            if shower.has_black_hole() { "on" } else { "off" }
        )
        .dark_gray(),
        "g".bold().cyan(),
        format!(" gradient {}", shower.gradient_style().as_str()).dark_gray(),
    ];
    if let Some(message) = diagnostic {
        spans.push("  ".into());
        spans.push(message.to_string().yellow());
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Place a cell if it lands inside the area.
fn put(grid: &mut [Option<Cell>], width: u16, height: u16, x: f64, y: f64, ch: char, color: Color) {
    if x < 0.0 || y < 0.0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= width as usize || y >= height as usize {
        return;
    }
    grid[y * width as usize + x] = Some(Cell { ch, color });
}

/// Draw one star with its twinkle oscillation applied.
fn draw_star(
    grid: &mut [Option<Cell>],
    width: u16,
    height: u16,
    star: &Star,
    index: usize,
    elapsed_s: f64,
) {
    let x = star.left_percent / 100.0 * f64::from(width);
    let y = star.top_percent / 100.0 * f64::from(height);

    // Twinkle: a 2 s alternating opacity ramp between 0.3 and 0.6, offset by
    // the star's random delay. Frozen stars hold the dim end.
    let opacity = match star.twinkle_delay_s {
        Some(delay) => {
            let phase = ((elapsed_s - delay).max(0.0) / 2.0).max(0.0);
            let ramp = phase.fract();
            let ramp = if (phase as u64).is_multiple_of(2) {
                ramp
            } else {
                1.0 - ramp
            };
            0.3 + 0.3 * ramp
        }
        None => 0.3,
    };

    let ch = STAR_CHARS[index % STAR_CHARS.len()];
    let v = (255.0 * opacity) as u8;
    put(grid, width, height, x, y, ch, Color::Rgb(v, v, v.saturating_add(20)));
}

/// Draw one meteor at its current animation position.
fn draw_meteor(grid: &mut [Option<Cell>], width: u16, height: u16, meteor: &Meteor, elapsed_s: f64) {
    // Frozen meteors rest at their final position, faintly.
    let (t, alpha) = match meteor.animation {
        Some(anim) => {
            let running = elapsed_s - anim.delay_s;
            if running < 0.0 {
                // Animation not started; the streak is still invisible.
                return;
            }
            let t = (running / anim.duration_s).fract();
            // Fade in to half opacity over the first quarter, then out.
            let alpha = if t < 0.25 {
                t / 0.25 * 0.5
            } else {
                0.5 * (1.0 - (t - 0.25) / 0.75)
            };
            (t, alpha)
        }
        None => (1.0, 0.15),
    };

    let (translate_x, translate_y) = meteor.translate_px;
    let offset_x = translate_x + meteor.margin_left_px * (1.0 - t);
    let offset_y = translate_y + meteor.margin_top_px * (1.0 - t);

    let head_x_pct = meteor.left_percent + offset_x / PX_PER_PERCENT;
    let head_y_pct = meteor.top_percent + offset_y / PX_PER_PERCENT;
    let head_x = head_x_pct / 100.0 * f64::from(width);
    let head_y = head_y_pct / 100.0 * f64::from(height);

    // Tail points back toward the animation start offset.
    let tail_len = (meteor.margin_left_px.powi(2) + meteor.margin_top_px.powi(2)).sqrt();
    let (unit_x, unit_y) = if tail_len > 0.0 {
        (meteor.margin_left_px / tail_len, meteor.margin_top_px / tail_len)
    } else {
        (0.0, -1.0)
    };

    let cells = (meteor.width_px * meteor.scale / 25.0).round().max(1.0) as i32;
    let brightness = (2.0 * alpha).clamp(0.0, 1.0);
    for k in 0..cells {
        let fade = brightness * (1.0 - f64::from(k) / f64::from(cells));
        let v = (255.0 * fade) as u8;
        let ch = if k == 0 { '*' } else { '─' };
        put(
            grid,
            width,
            height,
            head_x + unit_x * f64::from(k),
            head_y + unit_y * f64::from(k) * 0.5,
            ch,
            Color::Rgb(v, v, v),
        );
    }
}

/// Draw the black hole at its current drift position.
fn draw_black_hole(
    grid: &mut [Option<Cell>],
    width: u16,
    height: u16,
    hole: &BlackHole,
    elapsed_s: f64,
) {
    // Drift loops forward then back (alternate direction each cycle).
    let drift = match hole.drift {
        Some(anim) => {
            let phase = elapsed_s / anim.duration_s;
            let ramp = phase.fract();
            if (phase as u64).is_multiple_of(2) {
                ramp
            } else {
                1.0 - ramp
            }
        }
        None => 0.0,
    };
    let (target_x, target_y) = hole.drift_target_px;
    let drift_x_pct = target_x * drift / PX_PER_PERCENT;
    let drift_y_pct = target_y * drift / PX_PER_PERCENT;

    let size_pct = hole.size_px / PX_PER_PERCENT;
    let center_x_pct = 100.0 - hole.right_percent - size_pct / 2.0 + drift_x_pct;
    let center_y_pct = hole.top_percent + size_pct / 2.0 + drift_y_pct;

    let center_x = center_x_pct / 100.0 * f64::from(width);
    let center_y = center_y_pct / 100.0 * f64::from(height);
    let radius_x = size_pct / 4.0 / 100.0 * f64::from(width);
    let radius_y = size_pct / 4.0 / 100.0 * f64::from(height);

    // Glowing accretion ring.
    let steps = (radius_x.max(radius_y) * 8.0).max(12.0) as i32;
    for k in 0..steps {
        let angle = f64::from(k) / f64::from(steps) * std::f64::consts::TAU;
        let x = center_x + angle.cos() * radius_x;
        let y = center_y + angle.sin() * radius_y;
        let ch = RING_CHARS[k as usize % RING_CHARS.len()];
        // Warmer on the lower rim, like the original's inset glow.
        let color = if angle.sin() > 0.0 {
            Color::Rgb(255, 140, 0)
        } else {
            Color::Rgb(220, 97, 36)
        };
        put(grid, width, height, x, y, ch, color);
    }

    // Dark core.
    put(grid, width, height, center_x, center_y, '●', Color::Rgb(10, 5, 5));

    // The three static streak details, placed within the hole's box.
    let box_left_pct = center_x_pct - size_pct / 2.0;
    let box_top_pct = center_y_pct - size_pct / 2.0;
    for detail in &hole.details {
        let dx_pct = box_left_pct + detail.left_percent / 100.0 * size_pct;
        let dy_pct = box_top_pct + detail.top_percent / 100.0 * size_pct;
        let x = dx_pct / 100.0 * f64::from(width);
        let y = dy_pct / 100.0 * f64::from(height);

        let ch = streak_char(detail.rotation_deg);
        let cells = (detail.width_px / 25.0).round().max(1.0) as i32;
        for k in 0..cells {
            put(grid, width, height, x + f64::from(k), y, ch, Color::Rgb(255, 255, 255));
        }
    }
}

/// Pick a streak character from a rotation angle.
fn streak_char(rotation_deg: f64) -> char {
    let angle = rotation_deg.rem_euclid(180.0);
    if angle < 22.5 || angle >= 157.5 {
        '─'
    } else if angle < 67.5 {
        '/'
    } else if angle < 112.5 {
        '│'
    } else {
        '\\'
    }
}

/// Background gradient color at one cell.
fn gradient_color(x: u16, y: u16, width: u16, height: u16, style: GradientStyle) -> Color {
    let x_norm = f64::from(x) / f64::from(width.max(1));
    let y_norm = f64::from(y) / f64::from(height.max(1));

    let t = match style {
        // Ellipse radiating from the top center of the sky.
        GradientStyle::Radial => {
            let dx = (x_norm - 0.5) * 1.2;
            (dx * dx + y_norm * y_norm).sqrt().min(1.0)
        }
        GradientStyle::Linear => y_norm,
    };

    lerp_rgb(SKY_PRIMARY, SKY_SECONDARY, t / 0.95)
}

/// Linear interpolation between two colors.
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let channel = |from: u8, to: u8| (f64::from(from) + (f64::from(to) - f64::from(from)) * t) as u8;
    Color::Rgb(channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints_hit_the_theme_colors() {
        let top = gradient_color(0, 0, 80, 24, GradientStyle::Linear);
        assert_eq!(top, Color::Rgb(42, 9, 25));

        let bottom = gradient_color(0, 23, 80, 24, GradientStyle::Linear);
        // Close to the secondary color at the last row.
        assert!(matches!(bottom, Color::Rgb(r, _, _) if r < 10));
    }

    #[test]
    fn streak_chars_follow_the_angle() {
        assert_eq!(streak_char(-10.0), '─');
        assert_eq!(streak_char(50.0), '/');
        assert_eq!(streak_char(110.0), '│');
        assert_eq!(streak_char(140.0), '\\');
    }

    #[test]
    fn put_ignores_out_of_bounds_cells() {
        let mut grid: Vec<Option<Cell>> = vec![None; 4 * 4];
        put(&mut grid, 4, 4, -1.0, 2.0, '*', Color::White);
        put(&mut grid, 4, 4, 2.0, 9.0, '*', Color::White);
        assert!(grid.iter().all(|c| c.is_none()));

        put(&mut grid, 4, 4, 2.0, 2.0, '*', Color::White);
        assert!(grid[2 * 4 + 2].is_some());
    }
}
