//! Circular positioning for the card stack.
//!
//! Every card gets a slot relative to the current one, measured along the
//! shorter way around the deck so the stack wraps seamlessly at both ends.

use crate::error::CarouselError;

/// Visual slot of a card relative to the center of the stack.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Position {
    FarLeft,
    NearLeft,
    Center,
    NearRight,
    FarRight,
    Hidden,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::FarLeft,
        Position::NearLeft,
        Position::Center,
        Position::NearRight,
        Position::FarRight,
        Position::Hidden,
    ];

    fn from_offset(offset: isize) -> Self {
        match offset {
            -2 => Position::FarLeft,
            -1 => Position::NearLeft,
            0 => Position::Center,
            1 => Position::NearRight,
            2 => Position::FarRight,
            _ => Position::Hidden,
        }
    }

    /// Class name the card takes in a stylesheet-driven renderer.
    pub fn class_name(self) -> &'static str {
        match self {
            Position::FarLeft => "position-left-2",
            Position::NearLeft => "position-left-1",
            Position::Center => "position-center",
            Position::NearRight => "position-right-1",
            Position::FarRight => "position-right-2",
            Position::Hidden => "position-hidden",
        }
    }

    pub fn is_left(self) -> bool {
        matches!(self, Position::FarLeft | Position::NearLeft)
    }

    pub fn is_right(self) -> bool {
        matches!(self, Position::NearRight | Position::FarRight)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Position::FarLeft => "far-left",
            Position::NearLeft => "near-left",
            Position::Center => "center",
            Position::NearRight => "near-right",
            Position::FarRight => "far-right",
            Position::Hidden => "hidden",
        };
        f.write_str(label)
    }
}

fn check_deck(total: usize, current_index: usize) -> Result<(), CarouselError> {
    if total == 0 {
        return Err(CarouselError::InvalidArgument("total must be at least 1".into()));
    }
    if current_index >= total {
        return Err(CarouselError::InvalidArgument(format!(
            "current index {current_index} outside 0..{total}"
        )));
    }
    Ok(())
}

/// Offset for an already validated deck. Distances are taken in `usize` so
/// any deck size works: the shorter side always fits in an `isize`.
fn offset_unchecked(total: usize, current_index: usize, index: usize) -> isize {
    let forward = if index >= current_index {
        index - current_index
    } else {
        total - (current_index - index)
    };
    if forward == 0 {
        return 0;
    }
    let backward = total - forward;
    if forward <= backward {
        forward as isize
    } else {
        -(backward as isize)
    }
}

/// Signed shortest distance from `current_index` to `index` around a deck of
/// `total` cards. Negative is left, positive is right. When both directions
/// are equally long (even decks, opposite card) the right side wins.
pub fn circular_offset(total: usize, current_index: usize, index: usize) -> Result<isize, CarouselError> {
    check_deck(total, current_index)?;
    if index >= total {
        return Err(CarouselError::InvalidArgument(format!(
            "index {index} outside 0..{total}"
        )));
    }
    Ok(offset_unchecked(total, current_index, index))
}

/// Slot of card `index` when `current_index` is in the center.
pub fn position_of(total: usize, current_index: usize, index: usize) -> Result<Position, CarouselError> {
    circular_offset(total, current_index, index).map(Position::from_offset)
}

/// Lazily labels the whole deck in card order. Validates once up front, so
/// arbitrarily large decks can be streamed.
pub fn labels(total: usize, current_index: usize) -> Result<impl Iterator<Item = Position>, CarouselError> {
    check_deck(total, current_index)?;
    Ok((0..total).map(move |index| Position::from_offset(offset_unchecked(total, current_index, index))))
}

/// Slots for the whole deck, in card order.
pub fn positions(total: usize, current_index: usize) -> Result<Vec<Position>, CarouselError> {
    labels(total, current_index).map(Iterator::collect)
}
