use crate::foundation::error::{HexError, HexResult};
use crate::gradient::direction::GradientDirection;
use crate::shape::source::PointSource;

pub const DEFAULT_SCALE: f64 = 1.2;

/// A named target silhouette.
pub struct Shape {
    pub name: String,
    pub description: String,
    /// Page the silhouette links to.
    pub link: String,
    /// Direction the silhouette is colorized along.
    pub direction: GradientDirection,
    pub scale: f64,
    source: Box<dyn PointSource>,
}

impl Shape {
    pub fn new(name: impl Into<String>, source: impl PointSource + 'static) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            link: String::new(),
            direction: GradientDirection::default(),
            scale: DEFAULT_SCALE,
            source: Box::new(source),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn with_direction(mut self, direction: GradientDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn source(&self) -> &dyn PointSource {
        self.source.as_ref()
    }

    pub fn validate(&self) -> HexResult<()> {
        if self.name.trim().is_empty() {
            return Err(HexError::validation("shape name must be non-empty"));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(HexError::validation(format!(
                "shape '{}' scale must be finite and > 0",
                self.name
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shape")
            .field("name", &self.name)
            .field("link", &self.link)
            .field("direction", &self.direction)
            .field("scale", &self.scale)
            .field("source", &self.source.label())
            .finish()
    }
}
