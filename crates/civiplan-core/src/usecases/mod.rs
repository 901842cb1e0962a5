//! Use cases - orchestrate domain logic through port interfaces
//!
//! Each use case owns `Arc` handles to the ports it reads from and exposes
//! a single async `execute`. Pure computation is kept in free functions so
//! it can be tested without an adapter.

pub mod overview;
pub mod timeline;
pub mod utilization;

pub use overview::{DashboardOverview, OverviewUseCase};
pub use timeline::{TimelineEntry, TimelineEvent, TimelineUseCase};
pub use utilization::{Availability, ResourceUsage, UtilizationUseCase};
