//! Feature rendering for gherkindoc.
//!
//! [`FeatureRenderer`] turns one parsed [`Feature`](gherkindoc_feature::Feature)
//! into an rST [`Document`](gherkindoc_markup::Document). While rendering it
//! records every step in the [`StepGlossary`] and every tag in the
//! [`TagRegistry`] of the [`RenderContext`] passed in, so the glossary and
//! tag list can be produced once all features are done.
//!
//! ```
//! use gherkindoc_render::{FeatureRenderer, RenderContext, RendererConfig};
//!
//! let renderer = FeatureRenderer::new(RendererConfig::new("/docs"));
//! let mut context = RenderContext::default();
//! assert!(context.glossary.is_empty());
//! # let _ = (renderer, &mut context);
//! ```

mod context;
mod decoration;
mod glossary;
mod renderer;
mod resolver;
mod tags;

pub use context::RenderContext;
pub use decoration::{DecorationError, StepDecoration};
pub use glossary::StepGlossary;
pub use renderer::{FeatureRenderer, RendererConfig};
pub use resolver::{ResolverError, ResolverRegistry, TemplateResolver, UrlResolver};
pub use tags::TagRegistry;
