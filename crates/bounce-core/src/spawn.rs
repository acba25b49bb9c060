use crate::constants::*;
use crate::error::ConfigError;
use glam::Vec3;

/// Where new balls are put, as a function of how many are already live.
#[derive(Clone, Debug, PartialEq)]
pub enum SpawnLayout {
    /// Evenly spaced along +X from `start`.
    Line { start: Vec3, spacing: f32 },
    /// On a circle in the XZ plane around `center`, starting at 180 degrees.
    Circle {
        center: Vec3,
        radius: f32,
        spacing_degrees: f32,
    },
}

impl Default for SpawnLayout {
    fn default() -> Self {
        SpawnLayout::Line {
            start: LINE_START,
            spacing: LINE_SPACING,
        }
    }
}

impl SpawnLayout {
    pub fn default_circle() -> Self {
        SpawnLayout::Circle {
            center: CIRCLE_CENTER,
            radius: CIRCLE_RADIUS,
            spacing_degrees: CIRCLE_SPACING_DEGREES,
        }
    }

    /// Spawn point for the ball with zero-based ordinal `index` among the
    /// balls in use. Ordinals are reused after releases.
    pub fn place(&self, index: usize) -> Vec3 {
        match *self {
            SpawnLayout::Line { start, spacing } => start + Vec3::X * (index as f32 * spacing),
            SpawnLayout::Circle {
                center,
                radius,
                spacing_degrees,
            } => {
                let angle = (index as f32 * spacing_degrees + CIRCLE_START_DEGREES).to_radians();
                center + Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            SpawnLayout::Line { start, spacing } => {
                check_point("line start", start)?;
                check_finite("line spacing", spacing)
            }
            SpawnLayout::Circle {
                center,
                radius,
                spacing_degrees,
            } => {
                check_point("circle center", center)?;
                check_finite("circle spacing", spacing_degrees)?;
                check_finite("circle radius", radius)?;
                if radius <= 0.0 {
                    return Err(ConfigError::InvalidLayout {
                        field: "circle radius",
                        value: radius,
                    });
                }
                Ok(())
            }
        }
    }
}

/// Free-function form of [`SpawnLayout::place`].
#[inline]
pub fn place(index: usize, layout: &SpawnLayout) -> Vec3 {
    layout.place(index)
}

fn check_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidLayout { field, value })
    }
}

fn check_point(field: &'static str, p: Vec3) -> Result<(), ConfigError> {
    match [p.x, p.y, p.z].into_iter().find(|v| !v.is_finite()) {
        Some(value) => Err(ConfigError::InvalidLayout { field, value }),
        None => Ok(()),
    }
}
