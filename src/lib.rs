//! Fileplot - A terminal scatter plotter for coordinate files.
//!
//! Fileplot reads a text file of `x y` pairs, optionally annotated with
//! `{R,G,B}` colours and `[S]` sizes, and draws them as a scatter plot with
//! auto-scaled axes.
//!
//! # Features
//!
//! - Whitespace-separated token grammar with inline colour/size specifiers
//! - `##KEY: VALUE` header directives for defaults and custom line templates
//! - Axis bounds and tick spacing derived from the data
//! - Stable z-index draw ordering
//!
//! # Example
//!
//! ```
//! use fileplot::parser::RecordParser;
//! use fileplot::plot::Scene;
//! use fileplot::render::DisplayList;
//! use fileplot::plot::PixelRect;
//! use fileplot::util::AxisLayoutConfig;
//!
//! let points = RecordParser::default().parse("3 5 {10,20,30} [12]\n10 2")?;
//! let mut scene = Scene::new(points, &AxisLayoutConfig::default());
//!
//! let mut surface = DisplayList::new(PixelRect::new(0.0, 0.0, 400.0, 200.0));
//! scene.paint(&mut surface);
//! assert_eq!(scene.axis().x_max, 10);
//! # Ok::<(), fileplot::PlotError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod data;
pub mod error;
pub mod parser;
pub mod plot;
pub mod render;
pub mod ui;
pub mod util;

pub use error::{PlotError, Result};
