use std::io::{Read, Write};

use chrono::{DateTime, Utc};

use crate::catalog::{ArticleRecord, StaffRate};
use crate::exchange::{export_staff_rates, import_staff_rates};
use crate::storage::CatalogStore;
use crate::sync::{sync_articles, SyncReport};

use super::ServiceResult;

pub struct CatalogService;

impl CatalogService {
    /// Imports a staff-rate CSV and replaces the stored catalog with it.
    pub fn import_staff_rates<S: CatalogStore + ?Sized, R: Read>(
        store: &S,
        reader: R,
        delimiter: u8,
    ) -> ServiceResult<Vec<StaffRate>> {
        let rates = import_staff_rates(reader, delimiter)?;
        store.save_staff_rates(&rates)?;
        Ok(rates)
    }

    pub fn export_staff_rates<S: CatalogStore + ?Sized, W: Write>(
        store: &S,
        writer: W,
    ) -> ServiceResult<usize> {
        let rates = store.load_staff_rates()?;
        export_staff_rates(writer, &rates)?;
        Ok(rates.len())
    }

    /// Runs a full article sync from already-fetched ERP rows.
    pub fn sync_articles<S: CatalogStore + ?Sized>(
        store: &S,
        records: Vec<ArticleRecord>,
        now: DateTime<Utc>,
    ) -> ServiceResult<SyncReport> {
        Ok(sync_articles(store, records, now)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonStorage;
    use tempfile::TempDir;

    #[test]
    fn import_persists_and_export_reads_back() {
        let temp = TempDir::new().unwrap();
        let storage = JsonStorage::new(Some(temp.path().to_path_buf()), None).unwrap();
        let csv = "id,proveedorId,nombreProveedor,categoria,precioHora\n\
                   TPE-1,P1,Eventos Sur,Camarero,18.5\n";
        let imported = CatalogService::import_staff_rates(&storage, csv.as_bytes(), b',').unwrap();
        assert_eq!(imported.len(), 1);
        assert_eq!(storage.load_staff_rates().unwrap(), imported);

        let mut buffer = Vec::new();
        let exported = CatalogService::export_staff_rates(&storage, &mut buffer).unwrap();
        assert_eq!(exported, 1);
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("id,proveedorId,nombreProveedor,categoria,precioHora"));
    }
}
