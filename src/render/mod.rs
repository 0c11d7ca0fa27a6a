use crate::prelude::*;

pub struct GameRender {
    geng: Geng,
    assets: Rc<Assets>,
    pub camera: Camera2d,
}

impl GameRender {
    pub fn new(geng: &Geng, assets: &Rc<Assets>) -> Self {
        Self {
            geng: geng.clone(),
            assets: assets.clone(),
            camera: Camera2d {
                center: vec2::ZERO,
                rotation: Angle::ZERO,
                fov: 10.0,
            },
        }
    }

    pub fn draw(&mut self, model: &Model, framebuffer: &mut ugli::Framebuffer) {
        // Fit the whole arena into the window
        let arena = model.arena;
        let aspect = framebuffer.size().as_f32().aspect();
        self.camera.center = arena.center();
        self.camera.fov = arena.height().max(arena.width() / aspect);

        let sprites = &self.assets.sprites;
        self.geng.draw2d().draw2d(
            framebuffer,
            &self.camera,
            &draw2d::TexturedQuad::new(arena, &sprites.space),
        );

        let divider = Aabb2::point(arena.center())
            .extend_symmetric(vec2(model.config.arena.divider_width, arena.height()) / 2.0);
        self.geng.draw2d().draw2d(
            framebuffer,
            &self.camera,
            &draw2d::Quad::new(divider, Color::BLACK),
        );

        // Turn the sprites towards the divider
        let yellow = (&sprites.spaceship_yellow, Angle::from_degrees(90.0));
        let red = (&sprites.spaceship_red, Angle::from_degrees(-90.0));
        self.draw_craft(model, Side::Yellow, yellow, framebuffer);
        self.draw_craft(model, Side::Red, red, framebuffer);

        for (side, color) in [(Side::Yellow, Color::YELLOW), (Side::Red, Color::RED)] {
            for bullet in &model.craft(side).bullets {
                let target = self.to_world(arena, bullet.bounding_box());
                self.geng.draw2d().draw2d(
                    framebuffer,
                    &self.camera,
                    &draw2d::Quad::new(target, color),
                );
            }
        }

        // Health
        let top = arena.max.y - 10.0;
        for (side, x) in [(Side::Yellow, 0.25), (Side::Red, 0.75)] {
            let text = format!("Health: {}", model.craft(side).health);
            let pos = vec2(arena.min.x + arena.width() * x, top);
            self.draw_text(&text, pos, 30.0, geng::TextAlign::TOP, framebuffer);
        }

        if let Some(banner) = model.state.banner() {
            let center = arena.center();
            self.draw_text(banner, center, 80.0, geng::TextAlign::CENTER, framebuffer);
            self.draw_text(
                "Press R to restart",
                center - vec2(0.0, 70.0),
                30.0,
                geng::TextAlign::CENTER,
                framebuffer,
            );
        }
    }

    /// Convert a box in arena coordinates (`y` pointing down) to world coordinates.
    fn to_world(&self, arena: Aabb2<Coord>, target: Aabb2<Coord>) -> Aabb2<f32> {
        let flip = |y: Coord| arena.max.y - (y - arena.min.y);
        Aabb2 {
            min: vec2(target.min.x, flip(target.max.y)),
            max: vec2(target.max.x, flip(target.min.y)),
        }
    }

    fn draw_craft(
        &self,
        model: &Model,
        side: Side,
        (texture, rotation): (&ugli::Texture, Angle<f32>),
        framebuffer: &mut ugli::Framebuffer,
    ) {
        let target = self.to_world(model.arena, model.craft_box(side));
        let transform = mat3::translate(target.center())
            * mat3::rotate(rotation)
            * mat3::scale(target.size() / 2.0);
        self.geng.draw2d().draw2d(
            framebuffer,
            &self.camera,
            &draw2d::TexturedQuad::unit(texture).transform(transform),
        );
    }

    fn draw_text(
        &self,
        text: &str,
        pos: vec2<f32>,
        size: f32,
        align: geng::TextAlign,
        framebuffer: &mut ugli::Framebuffer,
    ) {
        self.geng.default_font().draw(
            framebuffer,
            &self.camera,
            text,
            vec2(geng::TextAlign::CENTER, align),
            mat3::translate(pos) * mat3::scale_uniform(size),
            Color::WHITE,
        );
    }
}
