use entity::employees;
use sea_orm::{DbBackend, Schema};

/// `CREATE TABLE` statement implied by the employee entity for `backend`.
pub fn table_declaration(backend: DbBackend) -> String {
    let stmt = Schema::new(backend).create_table_from_entity(employees::Entity);
    backend.build(&stmt).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgres_declaration_marks_required_columns() {
        let sql = table_declaration(DbBackend::Postgres);
        assert!(sql.starts_with(r#"CREATE TABLE "employees""#), "{sql}");
        assert!(sql.contains(r#""employee_id""#));
        assert!(sql.contains("PRIMARY KEY"));
        assert!(column(&sql, "employee_code").contains("NOT NULL"), "{sql}");
        assert!(column(&sql, "designation").contains("NOT NULL"), "{sql}");
        assert!(!column(&sql, "address").contains("NOT NULL"), "{sql}");
    }

    fn column<'a>(sql: &'a str, name: &str) -> &'a str {
        let quoted = format!("\"{name}\"");
        let start = sql.find(&quoted).expect("column present");
        let rest = &sql[start..];
        let end = rest.find(',').unwrap_or(rest.len());
        &rest[..end]
    }
}
