//! Style model for resolved and partial text styles.
//!
//! This module provides the styling primitives shared by the parser and the
//! resolver:
//!
//! - [`Style`]: A record of independently optional presentation attributes
//! - [`Font`] and [`FontPreset`]: Named text styles or a custom family/size
//! - [`Weight`]: Regular or bold
//! - [`Color`]: An RGBA color with channels in the unit range
//!
//! Every attribute of a [`Style`] is either unset (inherit from the enclosing
//! style) or a concrete value. Styles are combined with [`Style::merge`], never
//! mutated in place by the parser or the resolver.

mod color;
mod font;
#[allow(clippy::module_inception)]
mod style;

pub use color::Color;
pub use font::{Font, FontPreset, Weight};
pub use style::Style;
