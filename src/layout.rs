use crate::constants::*;
use crate::position::Position;

/// Where a card sits on a unit canvas: (0.5, 0.5) is the middle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotation: f32, // degrees
    pub opacity: f32,
}

impl Placement {
    pub fn lerp(self, to: Placement, t: f32) -> Placement {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Placement {
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            rotation: mix(self.rotation, to.rotation),
            opacity: mix(self.opacity, to.opacity),
        }
    }
}

pub fn target(position: Position) -> Placement {
    let (x, scale, rotation, opacity) = match position {
        Position::FarLeft => (0.5 - 0.38, 0.62, -12.0, 0.55),
        Position::NearLeft => (0.5 - 0.22, 0.80, -6.0, 0.85),
        Position::Center => (0.5, 1.0, 0.0, 1.0),
        Position::NearRight => (0.5 + 0.22, 0.80, 6.0, 0.85),
        Position::FarRight => (0.5 + 0.38, 0.62, 12.0, 0.55),
        Position::Hidden => (0.5, 0.5, 0.0, 0.0),
    };
    Placement { x, y: 0.5, scale, rotation, opacity }
}

/// Draw order: lower draws first, so the center card ends up on top.
pub fn depth(position: Position) -> u8 {
    match position {
        Position::Hidden => 0,
        Position::FarLeft | Position::FarRight => 1,
        Position::NearLeft | Position::NearRight => 2,
        Position::Center => 3,
    }
}

pub fn cubic_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Eases a card from where it is toward its slot.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: Placement,
    to: Placement,
    timer: f32,
    current: Placement,
}

impl Tween {
    pub fn new(at: Placement) -> Self {
        Self { from: at, to: at, timer: ANIMATION_DURATION, current: at }
    }

    /// Starts moving toward `to` from the current placement. Retargeting to
    /// the same slot keeps the running animation.
    pub fn retarget(&mut self, to: Placement) {
        if to == self.to {
            return;
        }
        self.from = self.current;
        self.to = to;
        self.timer = 0.0;
    }

    pub fn update(&mut self, dt: f32) -> Placement {
        self.timer = (self.timer + dt).min(ANIMATION_DURATION);
        self.current = if self.timer >= ANIMATION_DURATION {
            self.to
        } else {
            self.from.lerp(self.to, cubic_out(self.timer / ANIMATION_DURATION))
        };
        self.current
    }

    pub fn current(&self) -> Placement {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.timer < ANIMATION_DURATION
    }
}

/// Per-card tweens for a whole deck.
#[derive(Debug, Clone)]
pub struct Layout {
    tweens: Vec<Tween>,
    positions: Vec<Position>,
}

impl Layout {
    pub fn new(positions: Vec<Position>) -> Self {
        let tweens = positions.iter().map(|p| Tween::new(target(*p))).collect();
        Self { tweens, positions }
    }

    pub fn set_positions(&mut self, positions: Vec<Position>) {
        for (tween, position) in self.tweens.iter_mut().zip(&positions) {
            tween.retarget(target(*position));
        }
        self.positions = positions;
    }

    pub fn update(&mut self, dt: f32) {
        for tween in self.tweens.iter_mut() {
            tween.update(dt);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.tweens.iter().any(Tween::is_animating)
    }

    /// Card indices with their placements, back to front.
    pub fn draw_order(&self) -> Vec<(usize, Placement)> {
        let mut order: Vec<usize> = (0..self.tweens.len()).collect();
        order.sort_by_key(|&i| depth(self.positions[i]));
        order.into_iter().map(|i| (i, self.tweens[i].current())).collect()
    }
}

const DOT_SPACING: f32 = 18.0;
const DOT_Y: f32 = 24.0;
const DOT_HIT_RADIUS: f32 = 9.0;
const ARROW_SIZE: f32 = 56.0;
const ARROW_MARGIN: f32 = 24.0;

/// Navigation control drawn around the stack, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Dot(usize),
    Prev,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Hitbox {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

fn dots_start(total: usize, screen_width: f32) -> f32 {
    screen_width / 2.0 - total as f32 * DOT_SPACING / 2.0
}

/// Center of dot `index` in a row of `total` dots along the top edge.
pub fn dot_center(total: usize, index: usize, screen_width: f32) -> (f32, f32) {
    let x = dots_start(total, screen_width) + index as f32 * DOT_SPACING + DOT_SPACING / 2.0;
    (x, DOT_Y)
}

/// Prev and next arrow buttons, vertically centered at either side.
pub fn arrow_bounds(screen_width: f32, screen_height: f32) -> (Hitbox, Hitbox) {
    let y = (screen_height - ARROW_SIZE) / 2.0;
    let prev = Hitbox { x: ARROW_MARGIN, y, width: ARROW_SIZE, height: ARROW_SIZE };
    let next = Hitbox { x: screen_width - ARROW_MARGIN - ARROW_SIZE, ..prev };
    (prev, next)
}

/// Control under a click at (`x`, `y`), if any.
pub fn control_at(total: usize, screen_width: f32, screen_height: f32, x: f32, y: f32) -> Option<Control> {
    let (prev, next) = arrow_bounds(screen_width, screen_height);
    if prev.contains(x, y) {
        return Some(Control::Prev);
    }
    if next.contains(x, y) {
        return Some(Control::Next);
    }

    if (y - DOT_Y).abs() > DOT_HIT_RADIUS {
        return None;
    }
    let offset = x - dots_start(total, screen_width);
    if offset < 0.0 {
        return None;
    }
    let index = (offset / DOT_SPACING) as usize;
    (index < total).then_some(Control::Dot(index))
}
