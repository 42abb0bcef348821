//! # sample-stats
//!
//! Order statistics and aggregates over an in-memory set of metric samples.
//!
//! This crate is the statistics core of a metrics pipeline: a listener
//! decodes timer/latency observations for one flush interval into a
//! [`Samples`] collection, then the flush path queries whichever statistics
//! the backend wants (min/max, median, arbitrary quantiles, mean, sum,
//! distinct-value count) and ships the scalars off. The collection itself
//! knows nothing about metric names, tags, or transport.
//!
//! Every query is computed on demand from the current contents; nothing is
//! maintained incrementally. Queries that need a sorted view sort the
//! backing storage **in place**, so callers must not rely on insertion order
//! surviving a [`Samples::median`], [`Samples::quantile`], or
//! [`Samples::unique_count`] call.
//!
//! NaN observations are tolerated rather than rejected: they are carried in
//! the collection, excluded from min/max, and reported back through a
//! [`MinmaxError`] so the caller can flag the interval as degraded.
//!
//! ## Quick Start
//!
//! ```
//! use sample_stats::Samples;
//!
//! let mut timings = Samples::from(vec![123.0, 234.0, 345.0, 456.0, 567.0]);
//! timings.push(678.0);
//!
//! let (min, max, degraded) = timings.minmax();
//! assert_eq!((min, max), (123.0, 678.0));
//! assert!(degraded.is_none());
//!
//! // Sorts the collection as a side effect.
//! assert_eq!(timings.median(), 400.5);
//! assert_eq!(timings.quantile(1.0), 678.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod samples;
mod summary;

pub use error::MinmaxError;
pub use samples::Samples;
pub use summary::Summary;
