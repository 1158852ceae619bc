//! Rendering helpers for the documentation pages
//!
//! Docs are written in markdown with embedded images. Every image is rendered
//! at a fixed 800x600 size inside a bordered, shadowed frame so screenshots
//! line up across pages. The branding assets shown on the resource page live
//! in a static table here as well.

pub mod assets;
mod markdown;

pub use markdown::render_doc;
