use std::io::Write;
use anyhow::{Result, bail};
use tracing::info;

use cardstack::carousel::CardStack;
use cardstack::data::Deck;
use cardstack::position::labels;

/// One `index<TAB>label` line per card, streamed so huge decks never
/// materialise in memory.
pub fn write_positions(out: &mut impl Write, total: usize, current: usize) -> Result<()> {
    for (index, label) in labels(total, current)?.enumerate() {
        writeln!(out, "{index}\t{label}")?;
    }
    Ok(())
}

pub fn write_inspect(out: &mut impl Write, deck: &Deck) -> Result<()> {
    let stack = CardStack::new(deck.cards.len(), deck.interval, deck.click_mode)?;
    writeln!(
        out,
        "{}: {} cards, auto-advance every {} ms",
        deck.section.name(),
        deck.cards.len(),
        deck.interval.as_millis()
    )?;
    for (index, (card, label)) in deck.cards.iter().zip(stack.positions()).enumerate() {
        writeln!(out, "{index}\t{:<24}\t{}\t{}", label.class_name(), card.title, card.image.display())?;
    }
    Ok(())
}

/// Runs the stack headless for `seconds` at `fps` and returns how many times
/// it auto-advanced.
pub fn simulate(deck: &Deck, seconds: f32, fps: u32) -> Result<usize> {
    if fps == 0 {
        bail!("fps must be positive");
    }
    let mut stack = CardStack::new(deck.cards.len(), deck.interval, deck.click_mode)?;
    stack.start_auto_advance(i32::MAX);

    let dt = 1.0 / fps as f32;
    let frames = (seconds * fps as f32).ceil() as u64;
    let mut advances = 0;
    for frame in 0..frames {
        if stack.update(dt) {
            advances += 1;
            let index = stack.current_index();
            info!(
                at = %format!("{:.2}s", (frame + 1) as f32 * dt),
                index,
                title = %deck.cards[index].title,
                "advanced"
            );
        }
    }
    info!(advances, final_index = stack.current_index(), "simulation finished");
    Ok(advances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;
    use cardstack::data::{Card, Section};
    use cardstack::state::ClickMode;

    fn deck(cards: usize, interval_ms: u64) -> Deck {
        Deck {
            section: Section::Gallery,
            cards: (0..cards)
                .map(|i| Card {
                    title: format!("card {i}"),
                    description: String::new(),
                    badge: None,
                    image: PathBuf::from(format!("img/{i}.jpg")),
                })
                .collect(),
            interval: Duration::from_millis(interval_ms),
            click_mode: ClickMode::Jump,
        }
    }

    #[test]
    fn positions_lines() {
        let mut out = Vec::new();
        write_positions(&mut out, 5, 0).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0\tcenter\n1\tnear-right\n2\tfar-right\n3\tfar-left\n4\tnear-left\n"
        );
        assert!(write_positions(&mut Vec::new(), 0, 0).is_err());
        assert!(write_positions(&mut Vec::new(), 3, 3).is_err());
    }

    #[test]
    fn inspect_lists_cards_with_classes() {
        let mut out = Vec::new();
        write_inspect(&mut out, &deck(3, 5000)).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "gallery: 3 cards, auto-advance every 5000 ms");
        assert!(lines[1].starts_with("0\tposition-center"));
        assert!(lines[2].contains("position-right-1") && lines[2].ends_with("img/1.jpg"));
        assert!(lines[3].contains("position-left-1"));
    }

    #[test]
    fn simulate_counts_advances() {
        // 500 ms interval over 3.2 s: six full intervals
        assert_eq!(simulate(&deck(4, 500), 3.2, 100).unwrap(), 6);
        assert_eq!(simulate(&deck(1, 500), 3.2, 100).unwrap(), 0);
        assert!(simulate(&deck(4, 500), 1.0, 0).is_err());
    }
}
