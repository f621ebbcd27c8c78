use log::debug;

use crate::{body::BodyConfig, color::Color, vector::Vector2};

/// Raw text of a form describing a new body, as typed by a user.
///
/// Converting it never fails: every field that doesn't parse takes a default value instead.
///
/// ```
/// # use orrery::prelude::*;
/// let draft = BodyDraft {
///     name: "Pluto".into(),
///     radius: "0".into(),
///     surface_gravity: "heavy".into(),
///     position_x: "120".into(),
///     position_y: "-4.5".into(),
///     velocity_x: "3".into(),
///     ..Default::default()
/// };
///
/// let config = draft.to_config();
///
/// assert_eq!(config.name, "Pluto");
/// assert_eq!(config.radius, 1.0);
/// assert_eq!(config.surface_gravity, 1.0);
/// assert_eq!(config.position, Vector2::new(120.0, -4.5));
/// assert_eq!(config.initial_velocity, Vector2::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyDraft {
    /// Display name, `"Body"` if blank.
    pub name: String,
    /// Radius, `1` if invalid or not strictly positive.
    pub radius: String,
    /// Surface gravity, `1` if invalid or not strictly positive.
    pub surface_gravity: String,
    /// Density, `1` if invalid or not strictly positive.
    pub density: String,
    /// Horizontal position. The position is zero unless both coordinates are valid.
    pub position_x: String,
    /// Vertical position. The position is zero unless both coordinates are valid.
    pub position_y: String,
    /// Horizontal velocity. The velocity is zero unless both coordinates are valid.
    pub velocity_x: String,
    /// Vertical velocity. The velocity is zero unless both coordinates are valid.
    pub velocity_y: String,
    /// Color name or `#rrggbb`. A random palette color is used if blank or invalid.
    pub color: String,
}

impl BodyDraft {
    /// Parses the draft into a body configuration.
    pub fn to_config(&self) -> BodyConfig {
        let name = self.name.trim();
        let defaults = BodyConfig::default();

        BodyConfig {
            name: if name.is_empty() {
                defaults.name
            } else {
                name.to_owned()
            },
            position: parse_vector(&self.position_x, &self.position_y),
            initial_velocity: parse_vector(&self.velocity_x, &self.velocity_y),
            radius: parse_positive(&self.radius),
            surface_gravity: parse_positive(&self.surface_gravity),
            density: parse_positive(&self.density),
            color: parse_color(&self.color),
        }
    }

    /// Parses the draft into a body configuration and clears it for the next body.
    pub fn submit(&mut self) -> BodyConfig {
        let config = self.to_config();
        *self = Self::default();
        config
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_positive(text: &str) -> f64 {
    parse_number(text).filter(|&value| value > 0.0).unwrap_or(1.0)
}

fn parse_vector(x: &str, y: &str) -> Vector2 {
    match (parse_number(x), parse_number(y)) {
        (Some(x), Some(y)) => Vector2::new(x, y),
        _ => Vector2::ZERO,
    }
}

fn parse_color(text: &str) -> Option<Color> {
    let text = text.trim();

    if text.is_empty() {
        return None;
    }

    text.parse::<Color>()
        .map_err(|e| debug!("Ignoring color of body draft: {e}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_draft_uses_defaults() {
        let config = BodyDraft::default().to_config();

        assert_eq!(config, BodyConfig::default());
    }

    #[test]
    fn valid_draft() {
        let draft = BodyDraft {
            name: "  Comet ".into(),
            radius: "2.5".into(),
            surface_gravity: "9".into(),
            density: "0.3".into(),
            position_x: "-10".into(),
            position_y: "20".into(),
            velocity_x: "1e3".into(),
            velocity_y: " -7 ".into(),
            color: "Orange".into(),
        };

        let config = draft.to_config();

        assert_eq!(config.name, "Comet");
        assert_eq!(config.radius, 2.5);
        assert_eq!(config.surface_gravity, 9.0);
        assert_eq!(config.density, 0.3);
        assert_eq!(config.position, Vector2::new(-10.0, 20.0));
        assert_eq!(config.initial_velocity, Vector2::new(1000.0, -7.0));
        assert_eq!(config.color, Some(Color::ORANGE));
    }

    #[test]
    fn invalid_numbers_take_defaults() {
        let draft = BodyDraft {
            radius: "-3".into(),
            surface_gravity: "NaN".into(),
            density: "inf".into(),
            position_x: "1".into(),
            position_y: "two".into(),
            velocity_x: "".into(),
            velocity_y: "4".into(),
            color: "not a color".into(),
            ..Default::default()
        };

        let config = draft.to_config();

        assert_eq!(config.radius, 1.0);
        assert_eq!(config.surface_gravity, 1.0);
        assert_eq!(config.density, 1.0);
        assert_eq!(config.position, Vector2::ZERO);
        assert_eq!(config.initial_velocity, Vector2::ZERO);
        assert_eq!(config.color, None);
    }

    #[test]
    fn submit_clears_the_draft() {
        let mut draft = BodyDraft {
            name: "Moon".into(),
            radius: "4".into(),
            ..Default::default()
        };

        let config = draft.submit();

        assert_eq!(config.name, "Moon");
        assert_eq!(config.radius, 4.0);
        assert_eq!(draft, BodyDraft::default());
    }
}
