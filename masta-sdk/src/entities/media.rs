use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::Id;

/// An uploaded media attachment.
#[derive(Debug, Clone, Deserialize)]
pub struct Attachment {
    pub id: Id,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: Option<String>,
    pub remote_url: Option<String>,
    pub preview_url: Option<String>,
    pub text_url: Option<String>,
    pub description: Option<String>,
    pub blurhash: Option<String>,
    pub meta: Option<MediaMeta>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MediaMeta {
    pub focus: Option<Focus>,
}

/// Focal point of an image, each axis in `-1.0..=1.0`.
///
/// Sent as the `"x,y"` form value.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Focus {
    pub x: f64,
    pub y: f64,
}

impl Focus {
    /// A focal point. Values are clamped to `-1.0..=1.0`.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Focus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("focus `{s}` must be `x,y`"))?;
        let axis = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| format!("focus `{s}`: {e}"))
        };
        Ok(Focus::new(axis(x)?, axis(y)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_form_value() {
        assert_eq!(Focus::new(0.5, -0.25).to_string(), "0.5,-0.25");
        assert_eq!(Focus::new(3.0, -9.0).to_string(), "1,-1");
        assert_eq!("0.1, 0.2".parse::<Focus>().unwrap(), Focus::new(0.1, 0.2));
        assert!("0.1".parse::<Focus>().is_err());
        assert!("a,b".parse::<Focus>().is_err());
    }
}
