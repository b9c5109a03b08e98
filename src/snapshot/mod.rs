//! The snapshot model: parsed `_cat` tables joined into one point-in-time
//! view of the cluster, plus the derived columns the console displays
//! (human byte sizes, index age, per-shard segment spread, activity flags).

mod activity;
mod age;
mod bytes;
mod cluster;
mod view;

pub use self::activity::Activity;
pub use self::age::index_age_days;
pub use self::bytes::format_bytes;
pub use self::cluster::ClusterSnapshot;
pub use self::view::IndexView;
