//! The fixed adapter identity tables.
//!
//! Every adapter has a stable string name and a stable numeric id, paired
//! one-to-one. The numeric id is part of the external wire contract: saved
//! actions and resources reference adapters by id, so renumbering an entry
//! is a breaking change. New adapters append to the end of the table.
//!
//! Three small taxonomy sets classify adapters:
//!
//! - *virtual* — no persistent resource record backs the adapter
//! - *local-virtual* — runs in-process without a remote dependency
//! - *remote-virtual* — resource options come from the source-manager
//!   service, not from a saved resource
//!
//! All tables are immutable after first use and safe for concurrent readers.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Numeric adapter ids (wire contract — never renumber).
pub mod id {
    #![allow(missing_docs)]
    pub const TRANSFORMER: u32 = 0;
    pub const RESTAPI: u32 = 1;
    pub const GRAPHQL: u32 = 2;
    pub const REDIS: u32 = 3;
    pub const MYSQL: u32 = 4;
    pub const MARIADB: u32 = 5;
    pub const POSTGRESQL: u32 = 6;
    pub const MONGODB: u32 = 7;
    pub const TIDB: u32 = 8;
    pub const ELASTICSEARCH: u32 = 9;
    pub const S3: u32 = 10;
    pub const SMTP: u32 = 11;
    pub const SUPABASEDB: u32 = 12;
    pub const FIREBASE: u32 = 13;
    pub const CLICKHOUSE: u32 = 14;
    pub const MSSQL: u32 = 15;
    pub const HUGGINGFACE: u32 = 16;
    pub const DYNAMODB: u32 = 17;
    pub const SNOWFLAKE: u32 = 18;
    pub const COUCHDB: u32 = 19;
    pub const HFENDPOINT: u32 = 20;
    pub const ORACLE: u32 = 21;
    pub const APPWRITE: u32 = 22;
    pub const GOOGLESHEETS: u32 = 23;
    pub const NEON: u32 = 24;
    pub const HYDRA: u32 = 25;
    pub const UPSTASH: u32 = 26;
    pub const AIRTABLE: u32 = 27;
    pub const ORACLE9I: u32 = 28;
    pub const AIAGENT: u32 = 29;
    pub const CASSANDRA: u32 = 30;
    pub const NEO4J: u32 = 31;
    pub const COCKROACHDB: u32 = 32;
    pub const BIGQUERY: u32 = 33;
    pub const SQLITE: u32 = 34;
    pub const DUCKDB: u32 = 35;
}

/// The canonical `name ↔ id` pairing.
const ADAPTERS: &[(&str, u32)] = &[
    ("transformer", id::TRANSFORMER),
    ("restapi", id::RESTAPI),
    ("graphql", id::GRAPHQL),
    ("redis", id::REDIS),
    ("mysql", id::MYSQL),
    ("mariadb", id::MARIADB),
    ("postgresql", id::POSTGRESQL),
    ("mongodb", id::MONGODB),
    ("tidb", id::TIDB),
    ("elasticsearch", id::ELASTICSEARCH),
    ("s3", id::S3),
    ("smtp", id::SMTP),
    ("supabasedb", id::SUPABASEDB),
    ("firebase", id::FIREBASE),
    ("clickhouse", id::CLICKHOUSE),
    ("mssql", id::MSSQL),
    ("huggingface", id::HUGGINGFACE),
    ("dynamodb", id::DYNAMODB),
    ("snowflake", id::SNOWFLAKE),
    ("couchdb", id::COUCHDB),
    ("hfendpoint", id::HFENDPOINT),
    ("oracle", id::ORACLE),
    ("appwrite", id::APPWRITE),
    ("googlesheets", id::GOOGLESHEETS),
    ("neon", id::NEON),
    ("hydra", id::HYDRA),
    ("upstash", id::UPSTASH),
    ("airtable", id::AIRTABLE),
    ("oracle9i", id::ORACLE9I),
    ("aiagent", id::AIAGENT),
    ("cassandra", id::CASSANDRA),
    ("neo4j", id::NEO4J),
    ("cockroachdb", id::COCKROACHDB),
    ("bigquery", id::BIGQUERY),
    ("sqlite", id::SQLITE),
    ("duckdb", id::DUCKDB),
];

/// Adapters with no persistent resource record.
const VIRTUAL: &[&str] = &["transformer", "aiagent"];

/// Virtual adapters that run entirely in-process.
const LOCAL_VIRTUAL: &[&str] = &["transformer"];

/// Virtual adapters whose configuration lives in the source-manager service.
const REMOTE_VIRTUAL: &[&str] = &["aiagent"];

/// Adapters whose resource options are fetched from the source-manager
/// service before invocation.
const SOURCE_MANAGER_LOOKUP: &[&str] = &["aiagent"];

fn name_to_id() -> &'static HashMap<&'static str, u32> {
    static MAP: OnceLock<HashMap<&'static str, u32>> = OnceLock::new();
    MAP.get_or_init(|| ADAPTERS.iter().copied().collect())
}

fn id_to_name() -> &'static HashMap<u32, &'static str> {
    static MAP: OnceLock<HashMap<u32, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| ADAPTERS.iter().map(|&(name, id)| (id, name)).collect())
}

/// Numeric id for an adapter name, if the name is in the catalog.
pub fn adapter_id(name: &str) -> Option<u32> {
    name_to_id().get(name).copied()
}

/// Adapter name for a numeric id, if the id is in the catalog.
pub fn adapter_name(id: u32) -> Option<&'static str> {
    id_to_name().get(&id).copied()
}

/// Whether the name denotes a cataloged adapter.
pub fn contains(name: &str) -> bool {
    name_to_id().contains_key(name)
}

/// All cataloged adapter names, in id order.
pub fn names() -> impl Iterator<Item = &'static str> {
    ADAPTERS.iter().map(|&(name, _)| name)
}

/// Whether the adapter has no backing persistent resource.
pub fn is_virtual(name: &str) -> bool {
    VIRTUAL.contains(&name)
}

/// Whether the adapter runs entirely in-process.
pub fn is_local_virtual(name: &str) -> bool {
    LOCAL_VIRTUAL.contains(&name)
}

/// Whether the adapter's configuration lives in the source-manager service.
pub fn is_remote_virtual(name: &str) -> bool {
    REMOTE_VIRTUAL.contains(&name)
}

/// Whether resource options must be fetched from the source-manager service
/// before invocation.
pub fn needs_source_manager_lookup(name: &str) -> bool {
    SOURCE_MANAGER_LOOKUP.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn pairing_is_one_to_one() {
        let names: HashSet<_> = ADAPTERS.iter().map(|&(n, _)| n).collect();
        let ids: HashSet<_> = ADAPTERS.iter().map(|&(_, i)| i).collect();
        assert_eq!(names.len(), ADAPTERS.len());
        assert_eq!(ids.len(), ADAPTERS.len());
    }

    #[test]
    fn lookups_agree() {
        for &(name, id) in ADAPTERS {
            assert_eq!(adapter_id(name), Some(id));
            assert_eq!(adapter_name(id), Some(name));
        }
    }

    #[test]
    fn wire_ids_are_stable() {
        // Spot checks pinning the wire contract. If one of these fails,
        // an entry was renumbered — that is a breaking change.
        assert_eq!(adapter_id("transformer"), Some(0));
        assert_eq!(adapter_id("restapi"), Some(1));
        assert_eq!(adapter_id("postgresql"), Some(6));
        assert_eq!(adapter_id("s3"), Some(10));
        assert_eq!(adapter_id("aiagent"), Some(29));
        assert_eq!(adapter_id("duckdb"), Some(35));
    }

    #[test]
    fn unknown_names_and_ids_miss() {
        assert_eq!(adapter_id("not-an-adapter"), None);
        assert_eq!(adapter_name(9999), None);
        assert!(!contains("not-an-adapter"));
    }

    #[test]
    fn taxonomy_predicates() {
        assert!(is_virtual("transformer"));
        assert!(is_local_virtual("transformer"));
        assert!(!is_remote_virtual("transformer"));

        assert!(is_virtual("aiagent"));
        assert!(is_remote_virtual("aiagent"));
        assert!(needs_source_manager_lookup("aiagent"));

        assert!(!is_virtual("postgresql"));
        assert!(!needs_source_manager_lookup("mysql"));
    }

    #[test]
    fn taxonomy_names_are_cataloged() {
        for name in VIRTUAL
            .iter()
            .chain(LOCAL_VIRTUAL)
            .chain(REMOTE_VIRTUAL)
            .chain(SOURCE_MANAGER_LOOKUP)
        {
            assert!(contains(name), "{name} missing from catalog");
        }
    }
}
