//! # Routinely Core Library
//!
//! This library provides the core business logic for the Routinely habit
//! tracker. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI being a thin
//! presentation layer over the same core library.
//!
//! ## Architecture
//!
//! - **Routine Store**: owns the canonical routine collection and its
//!   completion/streak state, persisted as JSON through a key-value store
//! - **Storage**: a small `KvStore` abstraction with file-backed and
//!   in-memory implementations, plus theme settings
//! - **Stats**: pure derived analytics (completion rate, average streak,
//!   scheduled-time ordering), recomputed on every read
//!
//! ## Key Components
//!
//! - [`RoutineStore`]: canonical routine collection with CRUD + toggle
//! - [`KvStore`]: platform key-value storage abstraction
//! - [`RoutineReport`]: aggregate statistics snapshot

pub mod error;
pub mod routine;
pub mod stats;
pub mod storage;

pub use error::{CoreError, Result, StorageError, ValidationError};
pub use routine::{Frequency, Routine, RoutineDraft, RoutineUpdate, ScheduledTime};
pub use routine::store::RoutineStore;
pub use stats::{completion_rate, average_streak, sort_by_scheduled_time, RoutineReport};
pub use storage::{FileKvStore, KvStore, MemoryKvStore};
pub use storage::settings::{ThemeMode, ThemeSettings, SettingsStore};
