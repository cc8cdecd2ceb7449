/// Integer primary keys (`bigint` / `serial` columns).
pub type DbId = i64;

/// UUID primary keys (`uuid` columns, e.g. products, orders, profiles).
pub type EntityUuid = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Postgres `numeric` values, kept digit-exact (serde_json `arbitrary_precision`).
pub type Decimal = serde_json::Number;
