use geng::prelude::*;

#[derive(geng::asset::Load)]
pub struct Assets {
    pub sprites: Sprites,
    pub sounds: Sounds,
}

#[derive(geng::asset::Load)]
pub struct Sprites {
    pub space: ugli::Texture,
    pub spaceship_yellow: ugli::Texture,
    pub spaceship_red: ugli::Texture,
}

#[derive(geng::asset::Load)]
pub struct Sounds {
    #[load(ext = "mp3")]
    pub fire: geng::Sound,
    #[load(ext = "mp3")]
    pub hit: geng::Sound,
}

impl Assets {
    pub async fn load(manager: &geng::asset::Manager) -> anyhow::Result<Self> {
        geng::asset::Load::load(manager, &run_dir().join("assets"), &())
            .await
            .context("failed to load assets")
    }
}
