//! Scene drawing for both simulations

use glam::Vec2;

use super::{Renderer, colors};
use crate::life::LifeState;
use crate::sim::CarromState;

/// Draw the carrom board: bodies, trajectory previews, then the arena outline
pub fn draw_carrom(state: &CarromState, r: &mut impl Renderer) {
    r.clear(state.bounds);

    for body in &state.bodies {
        r.fill_circle(body.pos, body.radius(), body.tint.color());
        // Aiming line while the body is held
        if let Some(origin) = body.drag_origin() {
            r.line(origin, state.pointer, colors::OUTLINE);
        }
    }

    r.stroke_circle(state.arena.center, state.arena.radius, colors::OUTLINE);
}

/// Draw every cell of the Game of Life grid
pub fn draw_life(state: &LifeState, r: &mut impl Renderer) {
    let size = state.cell_size;
    let grid = &state.grid;
    r.clear(Vec2::new(grid.cols() as f32 * size, grid.rows() as f32 * size));

    for (col, row, cell) in grid.iter() {
        let origin = Vec2::new(col as f32 * size, row as f32 * size);
        if cell.is_alive() {
            r.cell(origin, size, colors::LIFE_ALIVE, colors::LIFE_DEAD);
        } else {
            r.cell(origin, size, colors::LIFE_DEAD, colors::LIFE_ALIVE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::sim::{Body, pointer_down, pointer_move};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear(Vec2),
        Fill(Vec2, f32, String),
        Stroke(Vec2, f32),
        Line(Vec2, Vec2),
        Cell(Vec2, String),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Renderer for Recorder {
        fn clear(&mut self, size: Vec2) {
            self.calls.push(Call::Clear(size));
        }
        fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
            self.calls.push(Call::Fill(center, radius, color.to_string()));
        }
        fn stroke_circle(&mut self, center: Vec2, radius: f32, _color: &str) {
            self.calls.push(Call::Stroke(center, radius));
        }
        fn line(&mut self, from: Vec2, to: Vec2, _color: &str) {
            self.calls.push(Call::Line(from, to));
        }
        fn cell(&mut self, origin: Vec2, _size: f32, fill: &str, _stroke: &str) {
            self.calls.push(Call::Cell(origin, fill.to_string()));
        }
    }

    #[test]
    fn test_carrom_draw_order_and_preview() {
        let bounds = Vec2::new(400.0, 300.0);
        let bodies = vec![
            Body::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 10.0, 1.0, 0.6),
            Body::new(Vec2::new(200.0, 100.0), Vec2::ZERO, 12.0, 1.0, 0.6),
        ];
        let mut state = CarromState::with_bodies(&Settings::default(), bounds, bodies);
        pointer_down(&mut state, Vec2::new(200.0, 101.0));
        pointer_move(&mut state, Vec2::new(240.0, 140.0));

        let mut r = Recorder::default();
        draw_carrom(&state, &mut r);

        assert_eq!(
            r.calls,
            vec![
                Call::Clear(bounds),
                Call::Fill(Vec2::new(100.0, 100.0), 10.0, "#b1b1b1".to_string()),
                Call::Fill(Vec2::new(200.0, 100.0), 12.0, "#234245".to_string()),
                Call::Line(Vec2::new(200.0, 100.0), Vec2::new(240.0, 140.0)),
                Call::Stroke(state.arena.center, state.arena.radius),
            ]
        );
    }

    #[test]
    fn test_life_draws_every_cell() {
        let settings = Settings {
            life_width: 60,
            life_height: 40,
            cell_size: 20,
            ..Default::default()
        };
        let mut life = LifeState::new(&settings);
        life.grid.set(2, 1, crate::life::Cell::Alive);

        let mut r = Recorder::default();
        draw_life(&life, &mut r);

        assert_eq!(r.calls[0], Call::Clear(Vec2::new(60.0, 40.0)));
        assert_eq!(r.calls.len(), 1 + 6);
        assert_eq!(
            r.calls.last(),
            Some(&Call::Cell(Vec2::new(40.0, 20.0), colors::LIFE_ALIVE.to_string()))
        );
    }
}
