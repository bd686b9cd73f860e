//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from a table descriptor.

use super::params::SqlValue;

/// Static description of a resource table: identifiers only, never user input.
#[derive(Clone, Copy, Debug)]
pub struct TableDef {
    pub name: &'static str,
    pub key: &'static str,
    /// Non-key columns, in the order values are bound.
    pub columns: &'static [&'static str],
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl QueryBuf {
    fn new(sql: String) -> Self {
        QueryBuf { sql, params: Vec::new() }
    }

    fn with_params(sql: String, params: Vec<SqlValue>) -> Self {
        QueryBuf { sql, params }
    }
}

/// Quote identifier for SQLite.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn select_column_list(table: &TableDef) -> String {
    std::iter::once(table.key)
        .chain(table.columns.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row ordered by key.
pub fn select_all(table: &TableDef) -> QueryBuf {
    QueryBuf::new(format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(table),
        quoted(table.name),
        quoted(table.key)
    ))
}

/// SELECT by primary key.
pub fn select_by_id(table: &TableDef, id: i64) -> QueryBuf {
    QueryBuf::with_params(
        format!(
            "SELECT {} FROM {} WHERE {} = ?",
            select_column_list(table),
            quoted(table.name),
            quoted(table.key)
        ),
        vec![SqlValue::Integer(id)],
    )
}

/// INSERT of the non-key columns; the key is assigned by the database.
/// `values` must follow `table.columns` order.
pub fn insert(table: &TableDef, values: Vec<SqlValue>) -> QueryBuf {
    debug_assert_eq!(values.len(), table.columns.len());
    let cols: Vec<String> = table.columns.iter().map(|c| quoted(c)).collect();
    let placeholders = vec!["?"; table.columns.len()].join(", ");
    QueryBuf::with_params(
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quoted(table.name),
            cols.join(", "),
            placeholders
        ),
        values,
    )
}

/// UPDATE replacing every non-key column of one row.
pub fn update(table: &TableDef, id: i64, values: Vec<SqlValue>) -> QueryBuf {
    debug_assert_eq!(values.len(), table.columns.len());
    let set_parts: Vec<String> = table.columns.iter().map(|c| format!("{} = ?", quoted(c))).collect();
    let mut params = values;
    params.push(SqlValue::Integer(id));
    QueryBuf::with_params(
        format!(
            "UPDATE {} SET {} WHERE {} = ?",
            quoted(table.name),
            set_parts.join(", "),
            quoted(table.key)
        ),
        params,
    )
}

pub fn delete(table: &TableDef, id: i64) -> QueryBuf {
    QueryBuf::with_params(
        format!("DELETE FROM {} WHERE {} = ?", quoted(table.name), quoted(table.key)),
        vec![SqlValue::Integer(id)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const APPOINTMENTS: TableDef = TableDef {
        name: "Appointments",
        key: "id",
        columns: &["patient_id", "doctor_id", "date"],
    };

    #[test]
    fn select_lists_key_first() {
        let q = select_all(&APPOINTMENTS);
        assert_eq!(
            q.sql,
            r#"SELECT "id", "patient_id", "doctor_id", "date" FROM "Appointments" ORDER BY "id""#
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn insert_binds_every_column() {
        let q = insert(
            &APPOINTMENTS,
            vec![SqlValue::Integer(1), SqlValue::Integer(2), "2024-05-01".into()],
        );
        assert_eq!(
            q.sql,
            r#"INSERT INTO "Appointments" ("patient_id", "doctor_id", "date") VALUES (?, ?, ?)"#
        );
        assert_eq!(q.params.len(), 3);
    }

    #[test]
    fn update_binds_id_last() {
        let q = update(
            &APPOINTMENTS,
            7,
            vec![SqlValue::Integer(1), SqlValue::Integer(2), "tomorrow".into()],
        );
        assert_eq!(
            q.sql,
            r#"UPDATE "Appointments" SET "patient_id" = ?, "doctor_id" = ?, "date" = ? WHERE "id" = ?"#
        );
        assert_eq!(q.params.last(), Some(&SqlValue::Integer(7)));
    }

    #[test]
    fn values_never_reach_the_sql_text() {
        let q = insert(
            &APPOINTMENTS,
            vec![SqlValue::Integer(1), SqlValue::Integer(2), "'); DROP TABLE Patients; --".into()],
        );
        assert!(!q.sql.contains("DROP"));
    }

    #[test]
    fn identifiers_are_quoted() {
        assert_eq!(quoted(r#"we"ird"#), r#""we""ird""#);
        let q = delete(&APPOINTMENTS, 3);
        assert_eq!(q.sql, r#"DELETE FROM "Appointments" WHERE "id" = ?"#);
    }
}
