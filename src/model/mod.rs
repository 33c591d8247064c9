pub use self::{asset_snapshot::AssetSnapshot, table::Table};

mod asset_snapshot;
mod table;
