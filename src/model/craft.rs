use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left half of the arena, fires to the right.
    Yellow,
    /// Right half of the arena, fires to the left.
    Red,
}

#[derive(Debug, Clone)]
pub struct Craft {
    pub side: Side,
    /// Top-left corner of the craft.
    pub position: vec2<Coord>,
    /// Not clamped, the match ends once it drops to zero or below.
    pub health: Hp,
    /// Projectiles in the order they were fired.
    pub bullets: Vec<Projectile>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    /// Top-left corner of the projectile.
    pub position: vec2<Coord>,
    pub size: vec2<Coord>,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Self::Yellow => Self::Red,
            Self::Red => Self::Yellow,
        }
    }

    /// Sign of the x axis that projectiles fired by this side travel along.
    pub fn fire_direction(self) -> Coord {
        match self {
            Self::Yellow => 1.0,
            Self::Red => -1.0,
        }
    }
}

impl Craft {
    pub fn new(side: Side, position: vec2<Coord>, health: Hp) -> Self {
        Self {
            side,
            position,
            health,
            bullets: Vec::new(),
        }
    }

    pub fn bounding_box(&self, size: vec2<Coord>) -> Aabb2<Coord> {
        Aabb2::point(self.position).extend_positive(size)
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Where a new projectile appears: the forward edge, vertically centered.
    pub fn muzzle(&self, craft_size: vec2<Coord>, bullet_size: vec2<Coord>) -> vec2<Coord> {
        let x = match self.side {
            Side::Yellow => self.position.x + craft_size.x - bullet_size.x,
            Side::Red => self.position.x - bullet_size.x,
        };
        let y = self.position.y + (craft_size.y - bullet_size.y) / 2.0;
        vec2(x, y)
    }
}

impl Projectile {
    pub fn bounding_box(&self) -> Aabb2<Coord> {
        Aabb2::point(self.position).extend_positive(self.size)
    }

    /// Whether the leading edge has left the arena.
    pub fn is_out_of_bounds(&self, side: Side, arena: Aabb2<Coord>) -> bool {
        let bounds = self.bounding_box();
        match side {
            Side::Yellow => bounds.max.x > arena.max.x,
            Side::Red => bounds.min.x < arena.min.x,
        }
    }
}
