use chrono::NaiveDate;
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use cofipei_core::entries::{EntryRepositoryTrait, FinancialEntry};
use cofipei_core::Result;

use super::model::{EntryDB, DATE_FORMAT};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::lancamentos;

pub struct EntryRepository {
    pool: Arc<DbPool>,
}

impl EntryRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        EntryRepository { pool }
    }
}

impl EntryRepositoryTrait for EntryRepository {
    fn get_entries_between(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<FinancialEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let start = start_date.format(DATE_FORMAT).to_string();
        let end = end_date.format(DATE_FORMAT).to_string();

        let rows = lancamentos::table
            .filter(lancamentos::data.between(start, end))
            .order((lancamentos::data.asc(), lancamentos::id.asc()))
            .select(EntryDB::as_select())
            .load::<EntryDB>(&mut conn)
            .map_err(StorageError::from)?;
        debug!(
            "Loaded {} entries between {} and {}",
            rows.len(),
            start_date,
            end_date
        );

        rows.into_iter().map(FinancialEntry::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, init, run_migrations};
    use cofipei_core::entries::EntryType;
    use diesel::RunQueryDsl;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Creates a migrated database in a temp dir; keep the dir alive.
    fn create_test_repository() -> (EntryRepository, Arc<DbPool>, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("db").join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        init(&db_path_str).expect("Failed to init database");
        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");

        let repo = EntryRepository::new(Arc::clone(&pool));
        (repo, pool, temp_dir)
    }

    fn insert_entry(
        pool: &DbPool,
        id: i32,
        valor: &str,
        categoria: &str,
        tipo: &str,
        data: &str,
    ) {
        let mut conn = get_connection(pool).expect("Failed to get connection");
        diesel::sql_query(format!(
            "INSERT INTO lancamentos (id, descricao, valor, categoria, tipo, data) \
             VALUES ({}, 'entry {}', '{}', '{}', '{}', '{}')",
            id, id, valor, categoria, tipo, data
        ))
        .execute(&mut conn)
        .expect("Failed to insert entry");
    }

    #[test]
    fn test_get_entries_between_is_inclusive() {
        let (repo, pool, _dir) = create_test_repository();
        insert_entry(&pool, 1, "99.00", "Food", "Despesa", "2023-12-31");
        insert_entry(&pool, 2, "10.00", "Food", "Despesa", "2024-01-01");
        insert_entry(&pool, 3, "1000.00", "Salary", "Receita", "2024-01-15");
        insert_entry(&pool, 4, "5.00", "Food", "Despesa", "2024-01-31");
        insert_entry(&pool, 5, "99.00", "Food", "Despesa", "2024-02-01");

        let entries = repo
            .get_entries_between(date(2024, 1, 1), date(2024, 1, 31))
            .unwrap();

        let ids: Vec<i32> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
        assert_eq!(entries[0].amount, dec!(10.00));
        assert_eq!(entries[1].entry_type, EntryType::Income);
        assert_eq!(entries[2].date, date(2024, 1, 31));
    }

    #[test]
    fn test_get_entries_between_empty_table() {
        let (repo, _pool, _dir) = create_test_repository();

        let entries = repo
            .get_entries_between(date(2024, 1, 1), date(2024, 12, 31))
            .unwrap();

        assert!(entries.is_empty());
    }

    #[test]
    fn test_get_entries_between_keeps_unknown_types() {
        let (repo, pool, _dir) = create_test_repository();
        insert_entry(&pool, 1, "300.00", "Savings", "Transferencia", "2024-03-02");

        let entries = repo
            .get_entries_between(date(2024, 3, 1), date(2024, 3, 31))
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].entry_type,
            EntryType::Other("Transferencia".to_string())
        );
    }

    #[test]
    fn test_connections_return_to_pool() {
        let (repo, pool, _dir) = create_test_repository();
        insert_entry(&pool, 1, "1.00", "Food", "Despesa", "2024-01-01");
        insert_entry(&pool, 2, "1.00", "Food", "Despesa", "2024-01-02x");

        // More calls than the pool has connections, on success and error paths
        for _ in 0..20 {
            assert!(repo
                .get_entries_between(date(2024, 1, 1), date(2024, 1, 1))
                .is_ok());
            assert!(repo
                .get_entries_between(date(2024, 1, 2), date(2024, 1, 3))
                .is_err());
        }

        assert!(pool.state().connections <= 8);
        assert!(get_connection(&pool).is_ok());
    }
}
