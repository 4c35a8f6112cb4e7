use raylib::prelude::*;

use cardstack::layout::Placement;

const CARD_HEIGHT: f32 = 0.62; // Of screen height, at scale 1
const CARD_MAX_WIDTH: f32 = 0.42; // Of screen width, at scale 1
const PLACEHOLDER_ASPECT: f32 = 4.0 / 3.0;

/// One card on screen. The texture is missing when its image failed to load.
pub struct CardSprite {
    texture: Option<Texture2D>,
}

impl CardSprite {
    pub fn new(texture: Option<Texture2D>) -> Self {
        Self { texture }
    }

    fn aspect(&self) -> f32 {
        match &self.texture {
            Some(t) if t.height() > 0 => t.width() as f32 / t.height() as f32,
            _ => PLACEHOLDER_ASPECT,
        }
    }

    /// Unrotated size in pixels for a given placement.
    fn size(&self, screen: Vector2, scale: f32) -> Vector2 {
        let mut height = screen.y * CARD_HEIGHT;
        let mut width = height * self.aspect();
        if width > screen.x * CARD_MAX_WIDTH {
            width = screen.x * CARD_MAX_WIDTH;
            height = width / self.aspect();
        }
        Vector2::new(width * scale, height * scale)
    }

    /// Screen rectangle the card covers, ignoring rotation.
    pub fn bounds(&self, screen: Vector2, placement: &Placement) -> Rectangle {
        let size = self.size(screen, placement.scale);
        Rectangle::new(
            screen.x * placement.x - size.x * 0.5,
            screen.y * placement.y - size.y * 0.5,
            size.x,
            size.y,
        )
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, screen: Vector2, placement: &Placement) {
        if placement.opacity <= 0.01 {
            return;
        }
        let size = self.size(screen, placement.scale);
        let origin = Vector2::new(size.x / 2.0, size.y / 2.0);
        let dest = Rectangle::new(screen.x * placement.x, screen.y * placement.y, size.x, size.y);
        let alpha = (placement.opacity.clamp(0.0, 1.0) * 255.0) as u8;

        match &self.texture {
            Some(texture) => {
                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                    dest,
                    origin,
                    placement.rotation,
                    Color::new(255, 255, 255, alpha),
                );
            }
            None => {
                d.draw_rectangle_pro(dest, origin, placement.rotation, Color::new(60, 60, 70, alpha));
            }
        }
    }

    /// Full-screen view of the card, letterboxed.
    pub fn draw_lightbox(&self, d: &mut RaylibDrawHandle, screen: Vector2) -> Rectangle {
        let aspect = self.aspect();
        let mut width = screen.x * 0.9;
        let mut height = width / aspect;
        if height > screen.y * 0.8 {
            height = screen.y * 0.8;
            width = height * aspect;
        }
        let rect = Rectangle::new((screen.x - width) / 2.0, (screen.y - height) / 2.0 - screen.y * 0.04, width, height);

        d.draw_rectangle(0, 0, screen.x as i32, screen.y as i32, Color::new(0, 0, 0, 220));
        match &self.texture {
            Some(texture) => d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                rect,
                Vector2::zero(),
                0.0,
                Color::WHITE,
            ),
            None => d.draw_rectangle_rec(rect, Color::DARKGRAY),
        }
        rect
    }
}
