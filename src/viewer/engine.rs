use anyhow::Result;
use raylib::prelude::*;
use tracing::{info, warn};

use cardstack::carousel::{CardStack, Command};
use cardstack::constants::*;
use cardstack::data::{Card, Deck};
use cardstack::layout::{Control, Layout, arrow_bounds, control_at, dot_center};
use cardstack::state::StackState;

use super::card::CardSprite;
use super::texture_loader::load_texture_with_exif_rotation;

pub trait Engine {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<()>;
    fn update(&mut self, rl: &RaylibHandle, dt: f32);
    fn draw(&mut self, d: &mut RaylibDrawHandle);
}

pub struct CardStackEngine {
    cards: Vec<Card>,
    sprites: Vec<CardSprite>,
    stack: CardStack,
    layout: Layout,
    auto_advance: bool,

    press_x: Option<f32>,
    pointer_inside: bool,
    lightbox_rect: Option<Rectangle>,
}

impl CardStackEngine {
    pub fn new(deck: Deck, auto_advance: bool) -> Result<Self> {
        let stack = CardStack::new(deck.cards.len(), deck.interval, deck.click_mode)?;
        let layout = Layout::new(stack.positions());
        Ok(Self {
            cards: deck.cards,
            sprites: Vec::new(),
            stack,
            layout,
            auto_advance,
            press_x: None,
            pointer_inside: false,
            lightbox_rect: None,
        })
    }

    fn screen(rl: &RaylibHandle) -> Vector2 {
        Vector2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32)
    }

    /// Front-most card under `point`.
    fn hit(&self, screen: Vector2, point: Vector2) -> Option<usize> {
        self.layout
            .draw_order()
            .into_iter()
            .rev()
            .filter(|(_, placement)| placement.opacity > 0.01)
            .find(|(i, placement)| self.sprites[*i].bounds(screen, placement).check_collision_point_rec(point))
            .map(|(i, _)| i)
    }

    fn commands(&mut self, rl: &RaylibHandle) -> Vec<Command> {
        let mut commands = Vec::new();
        let screen = Self::screen(rl);
        let mouse = rl.get_mouse_position();

        if self.stack.state() == StackState::Lightbox {
            let outside = self.lightbox_rect.is_none_or(|r| !r.check_collision_point_rec(mouse));
            if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE)
                || (rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) && outside)
            {
                commands.push(Command::CloseLightbox);
            }
            return commands;
        }

        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            commands.push(Command::Prev);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            commands.push(Command::Next);
        }

        let inside = rl.is_cursor_on_screen();
        if inside != self.pointer_inside {
            self.pointer_inside = inside;
            commands.push(if inside { Command::PointerEnter } else { Command::PointerLeave });
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            self.press_x = Some(mouse.x);
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(start_x) = self.press_x.take() {
                if (start_x - mouse.x).abs() > SWIPE_THRESHOLD {
                    commands.push(Command::Swipe { start_x, end_x: mouse.x });
                } else if let Some(control) = control_at(self.cards.len(), screen.x, screen.y, mouse.x, mouse.y) {
                    commands.push(match control {
                        Control::Dot(index) => Command::GoTo(index as isize),
                        Control::Prev => Command::Prev,
                        Control::Next => Command::Next,
                    });
                } else if let Some(index) = self.hit(screen, mouse) {
                    commands.push(Command::Click(index));
                }
            }
        }

        commands
    }

    fn draw_overlay(&self, d: &mut RaylibDrawHandle, screen: Vector2) {
        let card = &self.cards[self.stack.current_index()];
        let base_y = (screen.y * 0.86) as i32;

        if let Some(badge) = &card.badge {
            d.draw_text(badge, 40, base_y - 34, 20, Color::GOLD);
        }
        d.draw_text(&card.title, 40, base_y, 30, Color::WHITE);
        d.draw_text(&card.description, 40, base_y + 38, 20, Color::LIGHTGRAY);

        // Progress bar
        if self.stack.is_auto_advancing() {
            let width = screen.x * self.stack.progress();
            d.draw_rectangle(0, screen.y as i32 - 6, width as i32, 6, Color::SKYBLUE);
        }

        // Dots
        let total = self.cards.len();
        for i in 0..total {
            let (x, y) = dot_center(total, i, screen.x);
            let color = if i == self.stack.current_index() { Color::WHITE } else { Color::GRAY };
            d.draw_circle(x as i32, y as i32, 5.0, color);
        }

        // Arrow buttons
        let (prev, next) = arrow_bounds(screen.x, screen.y);
        for (hitbox, glyph) in [(prev, "<"), (next, ">")] {
            let radius = hitbox.width / 2.0;
            let (cx, cy) = (hitbox.x + radius, hitbox.y + radius);
            d.draw_circle(cx as i32, cy as i32, radius, Color::new(255, 255, 255, 40));
            d.draw_text(glyph, cx as i32 - 8, cy as i32 - 15, 30, Color::WHITE);
        }
    }
}

impl Engine for CardStackEngine {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<()> {
        let mut loaded = 0;
        for card in &self.cards {
            let texture = match load_texture_with_exif_rotation(rl, thread, &card.image) {
                Ok(texture) => {
                    loaded += 1;
                    Some(texture)
                }
                Err(e) => {
                    warn!(error = %e, "card image not loaded, drawing placeholder");
                    None
                }
            };
            self.sprites.push(CardSprite::new(texture));
        }
        info!(cards = self.cards.len(), loaded, "textures loaded");

        if self.auto_advance {
            self.stack.start_auto_advance(rl.get_screen_width());
        }
        Ok(())
    }

    fn update(&mut self, rl: &RaylibHandle, dt: f32) {
        let mut changed = false;
        for command in self.commands(rl) {
            changed |= self.stack.handle(command);
        }
        changed |= self.stack.update(dt);

        if changed {
            self.layout.set_positions(self.stack.positions());
        }
        self.layout.update(dt);
    }

    fn draw(&mut self, d: &mut RaylibDrawHandle) {
        let screen = Vector2::new(d.get_screen_width() as f32, d.get_screen_height() as f32);
        d.clear_background(Color::new(18, 18, 24, 255));

        for (i, placement) in self.layout.draw_order() {
            self.sprites[i].draw(d, screen, &placement);
        }
        self.draw_overlay(d, screen);

        // Remember where the lightbox image landed for click-outside detection
        self.lightbox_rect = if self.stack.state() == StackState::Lightbox {
            let index = self.stack.current_index();
            let rect = self.sprites[index].draw_lightbox(d, screen);
            d.draw_text(&self.cards[index].title, rect.x as i32, (rect.y + rect.height) as i32 + 12, 28, Color::WHITE);
            Some(rect)
        } else {
            None
        };
    }
}
