use super::*;

impl Model {
    pub(super) fn move_crafts(&mut self) {
        let yellow = self.move_bounds(Side::Yellow);
        let red = self.move_bounds(Side::Red);
        let speed = self.config.craft.speed;
        move_craft(&mut self.yellow, &self.held, speed, yellow);
        move_craft(&mut self.red, &self.held, speed, red);
    }

    /// The area the top-left corner of the craft has to stay in.
    pub fn move_bounds(&self, side: Side) -> Aabb2<Coord> {
        let size = self.config.craft.size;
        let center = self.arena.center().x;
        let gap = self.config.arena.divider_width / 2.0;
        let (min_x, max_x) = match side {
            Side::Yellow => (self.arena.min.x, center - gap - size.x),
            Side::Red => (center + gap, self.arena.max.x - size.x),
        };
        Aabb2 {
            min: vec2(min_x, self.arena.min.y),
            max: vec2(max_x, self.arena.max.y - size.y),
        }
    }
}

/// Move the craft according to its held controls.
/// Each axis is handled separately, so diagonals are not normalized.
fn move_craft(craft: &mut Craft, held: &HashSet<Control>, speed: Coord, bounds: Aabb2<Coord>) {
    for direction in Direction::ALL {
        if !held.contains(&Control::new(craft.side, direction)) {
            continue;
        }
        let pos = &mut craft.position;
        match direction {
            Direction::Left if pos.x > bounds.min.x => pos.x = (pos.x - speed).max(bounds.min.x),
            Direction::Right if pos.x < bounds.max.x => pos.x = (pos.x + speed).min(bounds.max.x),
            Direction::Up if pos.y > bounds.min.y => pos.y = (pos.y - speed).max(bounds.min.y),
            Direction::Down if pos.y < bounds.max.y => pos.y = (pos.y + speed).min(bounds.max.y),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> Model {
        Model::new(Config::default())
    }

    fn hold_all(model: &mut Model, controls: impl IntoIterator<Item = (Side, Direction)>) {
        for (side, direction) in controls {
            model.held.insert(Control::new(side, direction));
        }
    }

    fn assert_in_bounds(model: &Model) {
        let half = model.arena.center().x;
        let size = model.config.craft.size;
        let height = model.arena.height();
        let yellow = model.yellow.position;
        let red = model.red.position;
        assert!(yellow.x >= 0.0 && yellow.x <= half - size.x, "{yellow:?}");
        assert!(red.x >= half && red.x <= model.arena.width() - size.x, "{red:?}");
        for pos in [yellow, red] {
            assert!(pos.y >= 0.0 && pos.y <= height - size.y, "{pos:?}");
        }
    }

    #[test]
    fn diagonal_moves_full_speed_on_both_axes() {
        let mut model = model();
        hold_all(
            &mut model,
            [(Side::Yellow, Direction::Up), (Side::Yellow, Direction::Right)],
        );
        model.move_crafts();
        assert_eq!(model.yellow.position, vec2(105.0, 295.0));
        assert_eq!(model.red.position, vec2(1000.0, 300.0));
    }

    #[test]
    fn opposite_directions_cancel_out() {
        let mut model = model();
        hold_all(
            &mut model,
            [(Side::Red, Direction::Left), (Side::Red, Direction::Right)],
        );
        model.move_crafts();
        assert_eq!(model.red.position, vec2(1000.0, 300.0));
    }

    #[test]
    fn crafts_cannot_cross_the_divider() {
        let mut model = model();
        hold_all(
            &mut model,
            [(Side::Yellow, Direction::Right), (Side::Red, Direction::Left)],
        );
        for _ in 0..300 {
            model.move_crafts();
            assert_in_bounds(&model);
        }
        assert_eq!(model.yellow.position.x, 600.0 - 5.0 - 75.0);
        assert_eq!(model.red.position.x, 605.0);
    }

    #[test]
    fn crafts_stay_inside_the_outer_edges() {
        let mut model = model();
        hold_all(
            &mut model,
            [
                (Side::Yellow, Direction::Left),
                (Side::Yellow, Direction::Up),
                (Side::Red, Direction::Right),
                (Side::Red, Direction::Down),
            ],
        );
        for _ in 0..300 {
            model.move_crafts();
            assert_in_bounds(&model);
        }
        assert_eq!(model.yellow.position, vec2(0.0, 0.0));
        assert_eq!(model.red.position, vec2(1125.0, 640.0));
    }

    #[test]
    fn move_is_clamped_near_the_edge() {
        let mut model = model();
        model.yellow.position = vec2(3.0, 2.0);
        hold_all(
            &mut model,
            [(Side::Yellow, Direction::Left), (Side::Yellow, Direction::Up)],
        );
        model.move_crafts();
        assert_eq!(model.yellow.position, vec2(0.0, 0.0));
    }
}
