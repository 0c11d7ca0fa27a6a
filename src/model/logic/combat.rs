use super::*;

impl Model {
    /// Spawn a projectile at the craft's muzzle.
    /// Returns false if the craft already has the maximum number of bullets in flight.
    pub(super) fn fire(&mut self, side: Side) -> bool {
        let max_bullets = self.config.bullet.max_per_craft;
        let craft_size = self.config.craft.size;
        let bullet_size = self.config.bullet.size;
        let craft = match side {
            Side::Yellow => &mut self.yellow,
            Side::Red => &mut self.red,
        };
        if craft.bullets.len() >= max_bullets {
            return false;
        }

        let bullet = Projectile {
            position: craft.muzzle(craft_size, bullet_size),
            size: bullet_size,
        };
        log::debug!("{:?} fired a projectile at {}", side, bullet.position);
        craft.bullets.push(bullet);
        true
    }

    pub(super) fn update_bullets(&mut self, cues: &mut Vec<Cue>) {
        let speed = self.config.bullet.speed;
        let craft_size = self.config.craft.size;

        let arena = self.arena;
        let hits = advance_bullets(&mut self.yellow, &mut self.red, craft_size, speed, arena)
            + advance_bullets(&mut self.red, &mut self.yellow, craft_size, speed, arena);
        cues.extend(std::iter::repeat(Cue::Hit).take(hits));
    }
}

/// Move every projectile of the shooter once, dropping the ones that left the arena
/// and the ones that hit the target. Each hit takes one health point from the target.
/// Returns the number of hits.
pub fn advance_bullets(
    shooter: &mut Craft,
    target: &mut Craft,
    craft_size: vec2<Coord>,
    speed: Coord,
    arena: Aabb2<Coord>,
) -> usize {
    let side = shooter.side;
    let target_box = target.bounding_box(craft_size);
    let velocity = vec2(side.fire_direction() * speed, 0.0);

    let mut hits = 0;
    shooter.bullets.retain_mut(|bullet| {
        bullet.position += velocity;
        if bullet.is_out_of_bounds(side, arena) {
            return false;
        }
        if overlaps(bullet.bounding_box(), target_box) {
            hits += 1;
            return false;
        }
        true
    });

    if hits > 0 {
        log::debug!("{:?} was hit {} time(s)", target.side, hits);
        target.health -= hits as Hp;
    }
    hits
}
