//! Typed query directives for a Directus-style headless CMS REST API.
//!
//! Callers describe a request with strongly typed directives (fields
//! selection, filter rules, sort, pagination, aggregation, ...), assemble
//! them into a [`DirectiveSet`], and compile that into the flattened
//! [`CompiledQuery`] key/value sequence an HTTP client can attach to a
//! request URL. This crate never performs the request itself: no transport,
//! no authentication, no URL encoding.
//!
//! Directives validate their payload at construction and return
//! [`InvalidDirective`] on bad input; rendering and compilation are pure,
//! infallible, and deterministic. Everything is immutable after
//! construction, so independent compilations are freely parallel.
//!
//! ```
//! use rectus_query::{DirectiveSet, Fields, Filter, FilterOp, Limit, Sort};
//!
//! let query = DirectiveSet::new()
//!     .with_fields(Fields::new(["title", "author.name"])?)
//!     .with_filter(Filter::new("status", FilterOp::Eq, "published")?)
//!     .with_sort(Sort::new(["-date_created"])?)
//!     .with_limit(Limit::new(25))
//!     .compile();
//!
//! let pairs: Vec<_> = query.into_pairs();
//! assert!(pairs.contains(&("filter[status][_eq]".to_string(), "published".to_string())));
//! # Ok::<(), rectus_query::InvalidDirective>(())
//! ```

pub mod aggregate;
pub mod directive;
pub mod error;
pub mod filter;
pub mod query;

pub use aggregate::{Aggregate, AggregateFunction};
pub use directive::{
    Alias, Backlink, Deep, Directive, DirectiveKind, Export, ExportFormat, FieldFunction, Fields,
    GroupBy, Limit, Meta, Offset, Page, Search, Sort, Version,
};
pub use error::InvalidDirective;
pub use filter::{DynamicValue, Filter, FilterOp, FilterValue};
pub use query::{CompiledQuery, DirectiveSet};
