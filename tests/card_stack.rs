use std::io::Write;
use std::path::Path;

use cardstack::state::{ClickMode, StackState};
use cardstack::{CardStack, Carousel, Command, Portfolio, Position, Section, position_of, positions};

const DATABASE: &str = r#"{
    "navigation": [],
    "gallery": {
        "autoSlideInterval": 2000,
        "images": [
            { "src": "img/a.jpg", "title": "A", "description": "a" },
            { "src": "img/b.jpg", "title": "B", "description": "b" },
            { "src": "img/c.jpg", "title": "C", "description": "c" },
            { "src": "img/d.jpg", "title": "D", "description": "d" },
            { "src": "img/e.jpg", "title": "E", "description": "e" }
        ]
    },
    "awards": {
        "certificates": [
            { "name": "1st", "title": "X", "description": "x", "image": "cert/x.png" },
            { "name": "2nd", "title": "Y", "description": "y", "image": "cert/y.png" },
            { "name": "3rd", "title": "Z", "description": "z", "image": "cert/z.png" }
        ]
    }
}"#;

#[test]
fn five_card_wraparound() {
    assert_eq!(position_of(5, 0, 4), Ok(Position::NearLeft));
    assert_eq!(position_of(5, 0, 1), Ok(Position::NearRight));

    let mut carousel = Carousel::new(5).unwrap();
    assert!(carousel.go_to(-1));
    assert_eq!(carousel.current_index(), 4);
    assert!(carousel.go_to(5));
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn labels_follow_navigation() {
    let mut carousel = Carousel::new(6).unwrap();
    carousel.go_to(2);
    assert_eq!(carousel.positions(), positions(6, 2).unwrap());
    assert_eq!(
        carousel.positions(),
        vec![
            Position::FarLeft,
            Position::NearLeft,
            Position::Center,
            Position::NearRight,
            Position::FarRight,
            Position::Hidden,
        ]
    );
}

#[test]
fn gallery_from_file_auto_advances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.json");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(DATABASE.as_bytes())
        .unwrap();

    let portfolio = Portfolio::load(&path).unwrap();
    let deck = portfolio.deck(Section::Gallery, dir.path()).unwrap();
    assert_eq!(deck.cards[1].image, dir.path().join("img/b.jpg"));

    let mut stack = CardStack::new(deck.cards.len(), deck.interval, deck.click_mode).unwrap();
    assert!(stack.start_auto_advance(1280));

    // 60 fps for 10 simulated seconds: one advance every two seconds
    let mut advances = 0;
    for _ in 0..600 {
        if stack.update(1.0 / 60.0) {
            advances += 1;
        }
    }
    assert!((4..=5).contains(&advances), "advances = {advances}");
    assert_eq!(stack.current_index(), advances % 5);
}

#[test]
fn awards_side_clicks_step() {
    let portfolio = Portfolio::parse(DATABASE).unwrap();
    let deck = portfolio.deck(Section::Awards, Path::new("/site")).unwrap();
    assert_eq!(deck.click_mode, ClickMode::Step);

    let mut stack = CardStack::new(deck.cards.len(), deck.interval, deck.click_mode).unwrap();
    assert!(stack.handle(Command::Click(2)));
    assert_eq!(stack.current_index(), 2);

    assert!(!stack.handle(Command::Click(2)));
    assert_eq!(stack.state(), StackState::Lightbox);
    assert!(!stack.handle(Command::Next));

    stack.handle(Command::CloseLightbox);
    assert!(stack.handle(Command::Swipe { start_x: 300.0, end_x: 100.0 }));
    assert_eq!(stack.current_index(), 0);
}
