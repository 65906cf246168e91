use serde::{Deserialize, Serialize};

use crate::error::{FramedeckError, FramedeckResult};

/// Pixel coordinate space an element's geometry is expressed in. One per page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn validate(&self) -> FramedeckResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FramedeckError::validation(
                "canvas width/height must be > 0",
            ));
        }
        Ok(())
    }
}

/// Element kinds the wire schema accepts. Unknown kinds fail deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Button,
    Text,
    Image,
    Input,
    Card,
}

/// One positioned element on a page, in canvas pixel units.
///
/// `text` is an explicit option: `None` and `Some("")` both render without a
/// label, but they stay distinct in the model (the wire payload may carry
/// either).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Element {
    /// Label content, if this element should carry one.
    pub fn label_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    fn validate(&self, page_id: &str, index: usize) -> FramedeckResult<()> {
        let ctx = |msg: &str| format!("page '{page_id}' element {index}: {msg}");

        if !(self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite())
        {
            return Err(FramedeckError::validation(ctx("geometry must be finite")));
        }
        if self.x < 0.0 || self.y < 0.0 {
            return Err(FramedeckError::validation(ctx("x/y must be >= 0")));
        }
        if self.w <= 0.0 || self.h <= 0.0 {
            return Err(FramedeckError::validation(ctx("w/h must be > 0")));
        }
        Ok(())
    }
}

/// Rendering fidelity requested for a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleMode {
    #[default]
    Lowfi,
    Hifi,
}

/// Color theme requested for a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Gray,
    Light,
    Dark,
}

/// Page-level rendering directive. Defaults to `{lowfi, gray}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default)]
    pub mode: StyleMode,
    #[serde(default)]
    pub theme: Theme,
}

/// One frame: a canvas, its elements in paint order, and a style directive.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FramePage {
    #[serde(rename = "pageId")]
    pub page_id: String,
    pub canvas: Canvas,
    pub elements: Vec<Element>,
    #[serde(default)]
    pub style: Style,
}

/// Root wire object: a project with pages in slide order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FrameDocument {
    #[serde(rename = "projectId")]
    pub project_id: String,
    pub pages: Vec<FramePage>,
}

impl FrameDocument {
    /// Check every field constraint before any render work begins.
    ///
    /// Returns the first violation; a failed document produces no partial
    /// output anywhere downstream.
    pub fn validate(&self) -> FramedeckResult<()> {
        if self.project_id.trim().is_empty() {
            return Err(FramedeckError::validation("projectId must be non-empty"));
        }

        for page in &self.pages {
            if page.page_id.trim().is_empty() {
                return Err(FramedeckError::validation("pageId must be non-empty"));
            }
            page.canvas
                .validate()
                .map_err(|e| FramedeckError::validation(format!("page '{}': {e}", page.page_id)))?;

            for (i, el) in page.elements.iter().enumerate() {
                el.validate(&page.page_id, i)?;
            }
        }

        Ok(())
    }
}
