//! Data layer: input loading, curve construction and segmentation.
//!
//! Architecture:
//! ```text
//!   bins.csv
//!      │
//!      ▼
//!   ┌──────────┐
//!   │  loader   │  first field of each row → NumericSeries
//!   └──────────┘
//!      │
//!      ▼
//!   ┌──────────┐
//!   │  curve    │  rate + quantiles → grid, PDF
//!   └──────────┘
//!      │
//!      ▼
//!   ┌──────────┐
//!   │  segment  │  quantile boundaries → grid index ranges
//!   └──────────┘
//! ```

pub mod curve;
pub mod loader;
pub mod model;
pub mod segment;
