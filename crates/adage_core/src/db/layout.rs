//! Table names and key shapes of the persisted adage layout.
//!
//! - `adages`: identifier bytes -> encoded adage.
//! - `tags`: tag string -> empty value; registry of tag sub-partitions.
//! - `tags/<tag>`: identifier bytes -> empty value; one table per tag.

use redb::TableDefinition;

pub const ADAGES_TABLE_NAME: &str = "adages";
pub const TAGS_TABLE_NAME: &str = "tags";

/// Primary collection keyed by the 16 identifier bytes.
pub const ADAGES_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new(ADAGES_TABLE_NAME);

/// Root of the tag index.
pub const TAGS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new(TAGS_TABLE_NAME);

/// Value stored in index tables; the index is a set.
pub const EMPTY_VALUE: &[u8] = &[];

/// Returns the table name of the sub-partition holding ids tagged `tag`.
pub fn tag_table_name(tag: &str) -> String {
    format!("{TAGS_TABLE_NAME}/{tag}")
}

/// Table definition for one tag sub-partition.
pub fn tag_table(name: &str) -> TableDefinition<'_, &'static [u8], &'static [u8]> {
    TableDefinition::new(name)
}
