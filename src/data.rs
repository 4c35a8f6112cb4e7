//! Portfolio data file.
//!
//! Only the two card-stack sections are read. Everything else in the file is
//! ignored, but what is read is checked up front so a broken entry fails the
//! load instead of turning into an empty card later.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use tracing::{debug, info};

use crate::constants::*;
use crate::error::DataError;
use crate::state::ClickMode;

#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub gallery: Option<Gallery>,
    #[serde(default)]
    pub awards: Option<Awards>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gallery {
    pub images: Vec<GalleryImage>,
    #[serde(default)]
    pub auto_slide_interval: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Awards {
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub auto_slide_interval: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Certificate {
    pub name: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Gallery,
    Awards,
}

impl Section {
    pub fn name(self) -> &'static str {
        match self {
            Section::Gallery => "gallery",
            Section::Awards => "awards",
        }
    }
}

/// One card as the stack sees it, whichever section it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub badge: Option<String>,
    pub image: PathBuf,
}

/// Cards of one section with the settings that drive their stack.
#[derive(Debug, Clone)]
pub struct Deck {
    pub section: Section,
    pub cards: Vec<Card>,
    pub interval: Duration,
    pub click_mode: ClickMode,
}

impl Deck {
    /// Shuffles the cards. The same seed always gives the same order.
    pub fn shuffle(&mut self, seed: Option<u64>) {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        self.cards.shuffle(&mut rng);
        debug!(?seed, cards = self.cards.len(), "deck shuffled");
    }
}

impl Portfolio {
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let text = fs::read_to_string(path).map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let portfolio = Self::parse(&text)?;
        info!(
            path = %path.display(),
            gallery = portfolio.gallery.as_ref().map_or(0, |g| g.images.len()),
            awards = portfolio.awards.as_ref().map_or(0, |a| a.certificates.len()),
            "portfolio data loaded"
        );
        Ok(portfolio)
    }

    pub fn parse(text: &str) -> Result<Self, DataError> {
        let portfolio: Portfolio = serde_json::from_str(text)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), DataError> {
        if let Some(gallery) = &self.gallery {
            check_interval("gallery", gallery.auto_slide_interval)?;
            for (index, image) in gallery.images.iter().enumerate() {
                check_path("gallery", index, &image.src)?;
            }
        }
        if let Some(awards) = &self.awards {
            check_interval("awards", awards.auto_slide_interval)?;
            for (index, cert) in awards.certificates.iter().enumerate() {
                check_path("awards", index, &cert.image)?;
            }
        }
        Ok(())
    }

    /// Builds the deck for `section`. Relative image paths resolve against
    /// `asset_root`.
    pub fn deck(&self, section: Section, asset_root: &Path) -> Result<Deck, DataError> {
        let resolve = |p: &str| {
            let path = Path::new(p);
            if path.is_absolute() { path.to_path_buf() } else { asset_root.join(path) }
        };

        let deck = match section {
            Section::Gallery => {
                let gallery = self.gallery.as_ref().ok_or(DataError::MissingSection("gallery"))?;
                Deck {
                    section,
                    cards: gallery
                        .images
                        .iter()
                        .map(|image| Card {
                            title: image.title.clone(),
                            description: image.description.clone(),
                            badge: None,
                            image: resolve(&image.src),
                        })
                        .collect(),
                    interval: Duration::from_millis(gallery.auto_slide_interval.unwrap_or(GALLERY_INTERVAL_MS)),
                    click_mode: ClickMode::Jump,
                }
            }
            Section::Awards => {
                let awards = self.awards.as_ref().ok_or(DataError::MissingSection("awards"))?;
                Deck {
                    section,
                    cards: awards
                        .certificates
                        .iter()
                        .map(|cert| Card {
                            title: cert.title.clone(),
                            description: cert.description.clone(),
                            badge: Some(cert.name.clone()),
                            image: resolve(&cert.image),
                        })
                        .collect(),
                    interval: Duration::from_millis(awards.auto_slide_interval.unwrap_or(AWARDS_INTERVAL_MS)),
                    click_mode: ClickMode::Step,
                }
            }
        };
        Ok(deck)
    }
}

fn check_interval(section: &'static str, interval: Option<u64>) -> Result<(), DataError> {
    match interval {
        Some(0) => Err(DataError::ZeroInterval(section)),
        _ => Ok(()),
    }
}

fn check_path(section: &'static str, index: usize, path: &str) -> Result<(), DataError> {
    if path.trim().is_empty() {
        return Err(DataError::InvalidCard {
            section,
            index,
            reason: "image path is empty".into(),
        });
    }
    Ok(())
}
