// SPDX-License-Identifier: MPL-2.0
//! Screen corners that notifications stack in.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four corners a notification can be anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

/// The window edge a corner's offsets are measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

impl Position {
    /// All corners, in registry order.
    pub const ALL: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Edge that offsets in this corner are measured from.
    #[must_use]
    pub fn edge(self) -> Edge {
        match self {
            Position::TopLeft | Position::TopRight => Edge::Top,
            Position::BottomLeft | Position::BottomRight => Edge::Bottom,
        }
    }

    #[must_use]
    pub fn is_left(self) -> bool {
        matches!(self, Position::TopLeft | Position::BottomLeft)
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopRight => 1,
            Position::BottomLeft => 2,
            Position::BottomRight => 3,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| Error::Position(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_corner_name() {
        for position in Position::ALL {
            assert_eq!(position.as_str().parse::<Position>().ok(), Some(position));
        }
    }

    #[test]
    fn rejects_unknown_corner() {
        assert!(matches!("center".parse::<Position>(), Err(Error::Position(_))));
    }

    #[test]
    fn edge_follows_vertical_half() {
        assert_eq!(Position::TopLeft.edge(), Edge::Top);
        assert_eq!(Position::TopRight.edge(), Edge::Top);
        assert_eq!(Position::BottomLeft.edge(), Edge::Bottom);
        assert_eq!(Position::BottomRight.edge(), Edge::Bottom);
    }

    #[test]
    fn registry_indices_are_distinct() {
        let mut indices: Vec<usize> = Position::ALL.iter().map(|p| p.index()).collect();
        indices.dedup();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn default_is_top_right() {
        assert_eq!(Position::default(), Position::TopRight);
    }
}
