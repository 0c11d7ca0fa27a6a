use crate::prelude::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ticks_per_second: Time,
    /// Upper limit on the ticks simulated during a single frame.
    pub max_ticks_per_frame: usize,
    /// Maximum number of input events queued between two ticks.
    pub input_queue_capacity: usize,
    pub arena: ArenaConfig,
    pub craft: CraftConfig,
    pub bullet: BulletConfig,
    pub yellow_spawn: vec2<Coord>,
    /// Red spawn position, with `x` measured from the right edge of the arena.
    pub red_spawn_offset: vec2<Coord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub size: vec2<Coord>,
    pub divider_width: Coord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CraftConfig {
    pub size: vec2<Coord>,
    /// Distance travelled along each axis per tick.
    pub speed: Coord,
    pub health: Hp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletConfig {
    pub size: vec2<Coord>,
    pub speed: Coord,
    pub max_per_craft: usize,
}

impl Config {
    pub async fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = file::load_string(path)
            .await
            .context(format!("when loading config file at {:?}", path))?;
        let config: Self = ron::from_str(&content)
            .context(format!("when parsing config file at {:?}", path))?;
        config
            .validate()
            .context(format!("invalid config file at {:?}", path))?;
        Ok(config)
    }

    /// Reject settings that would stall or crash the simulation clock.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.ticks_per_second > Time::ZERO,
            "ticks_per_second must be positive, got {:?}",
            self.ticks_per_second
        );
        anyhow::ensure!(
            self.max_ticks_per_frame > 0,
            "max_ticks_per_frame must be at least 1"
        );
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ticks_per_second: r32(60.0),
            max_ticks_per_frame: 5,
            input_queue_capacity: 64,
            arena: ArenaConfig {
                size: vec2(1200.0, 700.0),
                divider_width: 10.0,
            },
            craft: CraftConfig {
                size: vec2(75.0, 60.0),
                speed: 5.0,
                health: 10,
            },
            bullet: BulletConfig {
                size: vec2(10.0, 5.0),
                speed: 8.0,
                max_per_craft: 3,
            },
            yellow_spawn: vec2(100.0, 300.0),
            red_spawn_offset: vec2(200.0, 300.0),
        }
    }
}
