// src/db/kv.rs
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

pub fn get_value(conn: &Connection, key: &str) -> Result<Option<String>, ServerError> {
    conn.query_row("select value from kv where key = ?", params![key], |row| {
        row.get(0)
    })
    .optional()
    .map_err(|e| ServerError::DbError(format!("kv read '{key}' failed: {e}")))
}

pub fn put_value(conn: &Connection, key: &str, value: &str) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into kv (key, value) values (?1, ?2)
        on conflict(key) do update set value = excluded.value
        "#,
        params![key, value],
    )
    .map_err(|e| ServerError::DbError(format!("kv write '{key}' failed: {e}")))?;
    Ok(())
}
