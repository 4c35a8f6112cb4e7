//! Card-stack carousel: circular positioning, navigation with auto-advance,
//! and the portfolio data that feeds it.

pub mod carousel;
pub mod constants;
pub mod data;
pub mod error;
pub mod layout;
pub mod orientation;
pub mod position;
pub mod schedule;
pub mod state;

pub use carousel::{CardStack, Carousel, Command};
pub use data::{Card, Deck, Portfolio, Section};
pub use error::{CarouselError, DataError};
pub use position::{Position, circular_offset, labels, position_of, positions};
