//! myads-core - myADS notification query engine
//!
//! Turns stored myADS notification setups into executable search queries.
//! Template setups (arXiv digests, citation trackers, favorite authors,
//! keyword alerts) expand into dated query strings with their sort orders;
//! general setups replay a sanitized stored query with a date window
//! applied. A Classic profile importer maps legacy myADS exports onto the
//! same records.
//!
//! ```
//! use chrono::NaiveDate;
//! use myads_core::{build_notification_query, Frequency, MyadsConfig, TemplateKind};
//!
//! let config = MyadsConfig::new();
//! let now = NaiveDate::from_ymd_opt(2026, 8, 19).unwrap();
//! let queries = build_notification_query(
//!     TemplateKind::Citations,
//!     Frequency::Weekly,
//!     Some("author:\"Kurtz, M.\""),
//!     None,
//!     None,
//!     now,
//!     &config,
//! )
//! .unwrap();
//! assert_eq!(queries[0].q, "citations(author:\"Kurtz, M.\")");
//! ```

pub mod config;
pub mod error;
pub mod import;
pub mod name;
pub mod notification;
pub mod query_builder;
pub mod schedule;
pub mod stored;

pub use config::{MyadsConfig, WindowConfig, ARXIV_CLASSES};
pub use error::{ConfigError, MyadsError, Result};
pub use import::{plan_import, ClassicProfile};
pub use name::{
    default_template_name, is_autogenerated_name, summarize_query_name, Collection,
};
pub use notification::{
    Frequency, NotificationRecord, NotificationSeed, NotificationType, NotificationUpdate,
    TemplateKind,
};
pub use query_builder::{build_notification_query, QueryPair};
pub use schedule::DateWindow;
pub use stored::{
    build_stored_query, flatten_params, parse_query_string, sanitize_stored_query,
    serialize_params, QueryParams, StoredQuery,
};
