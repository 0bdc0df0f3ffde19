//! Ready-made scenarios.
//!
//! A [`Preset`] pairs a [`SimConfig`] with a set of named stations (the
//! first is the source, the rest are food) and an optional reference
//! network to compare the grown paths against.

use physarum_core::{MapLayout, PlacementError, Point};

use crate::config::SimConfig;
use crate::controller::SimulationController;
use crate::stats::NetworkStats;

/// Iterations after which a run is reported as fully progressed.
pub const PROGRESS_HORIZON: u64 = 1000;

/// A named map point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Station {
    /// Display name.
    pub name: &'static str,
    /// World position.
    pub position: Point,
}

/// A scenario: configuration, stations and a reference network.
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    name: &'static str,
    config: SimConfig,
    stations: Vec<Station>,
    links: Vec<(usize, usize)>,
    category: &'static str,
}

const TOKYO_STATIONS: [(&str, f32, f32); 16] = [
    ("Tokyo", 400.0, 300.0),
    ("Shinjuku", 300.0, 280.0),
    ("Shibuya", 280.0, 320.0),
    ("Ikebukuro", 320.0, 240.0),
    ("Ueno", 440.0, 280.0),
    ("Shinagawa", 380.0, 360.0),
    ("Yokohama", 340.0, 450.0),
    ("Akihabara", 420.0, 290.0),
    ("Roppongi", 360.0, 310.0),
    ("Ginza", 410.0, 310.0),
    ("Asakusa", 460.0, 270.0),
    ("Odaiba", 450.0, 360.0),
    ("Nakano", 270.0, 270.0),
    ("Kichijoji", 230.0, 260.0),
    ("Meguro", 350.0, 340.0),
    ("Ebisu", 330.0, 330.0),
];

const TOKYO_LINKS: [(&str, &str); 18] = [
    ("Tokyo", "Shinjuku"),
    ("Tokyo", "Ueno"),
    ("Tokyo", "Shinagawa"),
    ("Tokyo", "Akihabara"),
    ("Tokyo", "Ginza"),
    ("Shinjuku", "Shibuya"),
    ("Shinjuku", "Ikebukuro"),
    ("Shibuya", "Roppongi"),
    ("Shibuya", "Meguro"),
    ("Shibuya", "Ebisu"),
    ("Ikebukuro", "Nakano"),
    ("Ueno", "Asakusa"),
    ("Ueno", "Akihabara"),
    ("Shinagawa", "Yokohama"),
    ("Shinagawa", "Odaiba"),
    ("Nakano", "Kichijoji"),
    ("Roppongi", "Ginza"),
    ("Ebisu", "Meguro"),
];

impl Preset {
    /// Sixteen major Tokyo stations with Tokyo Station as the source and
    /// a simplified rail network of eighteen links.
    pub fn tokyo_rail() -> Self {
        let mut config = SimConfig::default();
        config.world.cell_size = 4.0;
        config.tunables.sensitivity = 6.0;
        config.tunables.decay_rate = 0.96;
        config.tunables.speed = 5.0;
        config.spawn.max_agents = 2000;

        let stations: Vec<Station> = TOKYO_STATIONS
            .iter()
            .map(|&(name, x, y)| Station {
                name,
                position: Point::new(x, y),
            })
            .collect();
        let index_of = |name: &str| stations.iter().position(|s| s.name == name);
        let links = TOKYO_LINKS
            .iter()
            .filter_map(|&(a, b)| Some((index_of(a)?, index_of(b)?)))
            .collect();

        Self {
            name: "tokyo_rail",
            config,
            stations,
            links,
            category: "station",
        }
    }

    /// Settings for free-form map building: an empty map with a coarser
    /// grid, faster decay and a smaller population.
    pub fn map_builder() -> Self {
        let mut config = SimConfig::default();
        config.world.cell_size = 5.0;
        config.tunables.sensitivity = 5.0;
        config.tunables.decay_rate = 0.95;
        config.tunables.speed = 5.0;
        config.spawn.max_agents = 1000;
        Self {
            name: "map_builder",
            config,
            stations: Vec::new(),
            links: Vec::new(),
            category: "food",
        }
    }

    /// Preset name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Configuration to build a controller from.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// All stations; index 0 is the source.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Reference network as pairs of station indices.
    pub fn links(&self) -> &[(usize, usize)] {
        &self.links
    }

    /// The stations as a map: the first as source, the rest as food.
    ///
    /// # Errors
    ///
    /// [`PlacementError::NonFinite`] if a station has a non-finite
    /// position.
    pub fn layout(&self) -> Result<MapLayout, PlacementError> {
        let mut layout = MapLayout::new();
        if let Some((source, food)) = self.stations.split_first() {
            layout.place_source(source.position.x, source.position.y)?;
            for s in food {
                layout.place_food(s.position.x, s.position.y, self.category)?;
            }
        }
        Ok(layout)
    }

    /// Load the stations into `sim`, replacing its map.
    ///
    /// # Errors
    ///
    /// As for [`layout`](Self::layout).
    pub fn apply(&self, sim: &mut SimulationController) -> Result<(), PlacementError> {
        sim.load_layout(&self.layout()?);
        Ok(())
    }

    /// Total Euclidean length of the reference network.
    pub fn reference_length(&self) -> f64 {
        self.links
            .iter()
            .map(|&(a, b)| {
                self.stations[a].position.distance(self.stations[b].position) as f64
            })
            .sum()
    }

    /// Rough similarity score between the grown network and the
    /// reference: `min(100, efficiency * 0.8)`.
    pub fn similarity(&self, stats: &NetworkStats) -> f64 {
        (stats.efficiency * 0.8).min(100.0)
    }

    /// Percentage of `horizon` iterations completed, capped at 100.
    pub fn progress(&self, stats: &NetworkStats, horizon: u64) -> f64 {
        if horizon == 0 {
            return 100.0;
        }
        (stats.iterations as f64 / horizon as f64 * 100.0).min(100.0)
    }
}
