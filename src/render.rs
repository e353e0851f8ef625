//! Turns a [`WifiStatus`] into segment text through a user template.

use crate::error::{SegmentError, SegmentResult};
use crate::wifi::WifiStatus;
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use tracing::debug;

/// Returned in place of the segment text when the template cannot be rendered
pub const TEMPLATE_ERROR: &str = "unable to create text based on template";

/// Values a template can reference
#[derive(Debug, Serialize)]
pub struct RenderContext<'a> {
    #[serde(flatten)]
    pub status: &'a WifiStatus,
    pub connected: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(status: &'a WifiStatus) -> Self {
        Self {
            status,
            connected: status.is_connected(),
        }
    }
}

/// Renders a template string against a context
pub trait TemplateEngine {
    fn render(&self, template: &str, context: &RenderContext<'_>) -> SegmentResult<String>;
}

/// Jinja-style templates. Referencing an unknown variable is an error.
#[derive(Debug, Default)]
pub struct MiniJinjaEngine;

impl TemplateEngine for MiniJinjaEngine {
    fn render(&self, template: &str, context: &RenderContext<'_>) -> SegmentResult<String> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.render_str(template, context)
            .map_err(|error| SegmentError::Template(error.to_string()))
    }
}

/// Connected / disconnected prefixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icons {
    pub connected: String,
    pub disconnected: String,
}

impl Icons {
    fn for_status(&self, status: &WifiStatus) -> &str {
        if status.is_connected() {
            &self.connected
        } else {
            &self.disconnected
        }
    }
}

pub struct Renderer<E = MiniJinjaEngine> {
    engine: E,
    template: String,
    icons: Option<Icons>,
}

impl Renderer {
    pub fn new(template: impl Into<String>, icons: Option<Icons>) -> Self {
        Self::with_engine(MiniJinjaEngine, template, icons)
    }
}

impl<E: TemplateEngine> Renderer<E> {
    pub fn with_engine(engine: E, template: impl Into<String>, icons: Option<Icons>) -> Self {
        Self {
            engine,
            template: template.into(),
            icons,
        }
    }

    /// Segment text for `status`. Never fails: a broken template yields
    /// [`TEMPLATE_ERROR`].
    pub fn render(&self, status: &WifiStatus) -> String {
        let text = match self.engine.render(&self.template, &RenderContext::new(status)) {
            Ok(text) => text,
            Err(e) => {
                debug!(error = %e, template = %self.template, "template render failed");
                return TEMPLATE_ERROR.to_string();
            }
        };

        match &self.icons {
            Some(icons) => format!("{}{text}", icons.for_status(status)),
            None => text,
        }
    }
}
