/// Query layer: clause parsing and the three operations over loaded rows.
///
/// ```text
///   --where / --aggregate / --orderby
///        │
///        ▼
///   ┌──────────┐
///   │  clause   │  text → FilterClause / AggregateClause / OrderClause
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  Dataset rows → matching rows (file order)
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌───────────┐  ┌────────┐
///   │ aggregate  │  │  sort   │
///   └───────────┘  └────────┘
/// ```

pub mod aggregate;
pub mod clause;
pub mod engine;
pub mod error;
pub mod filter;
pub mod sort;

pub use engine::QueryEngine;
