//! Query engine — filtering, descending time-sort, pagination.

use mediastore_core::result::AppResult;
use mediastore_core::traits::{ListQuery, StorageInfo};
use mediastore_core::types::{FileId, FilePage, FileRecord};

use super::service::FileService;

impl FileService {
    /// List active records matching the query, newest first.
    ///
    /// `total` is the post-filter, pre-pagination count; an
    /// out-of-range page yields an empty list, not an error.
    pub async fn list_files(&self, query: &ListQuery) -> AppResult<FilePage> {
        let all = self.records().load_all().await?;
        Ok(page_of(all, query))
    }

    /// Fetch a single active record by id.
    pub async fn get_file(&self, id: &FileId) -> AppResult<Option<FileRecord>> {
        let all = self.records().load_all().await?;
        Ok(all.into_iter().find(|r| &r.id == id && r.is_active()))
    }

    /// Usage statistics over the owner's active records.
    pub async fn usage_for(&self, owner_id: &str) -> AppResult<StorageInfo> {
        let all = self.records().load_all().await?;
        let active: Vec<&FileRecord> = all
            .iter()
            .filter(|r| r.is_active() && r.user_id == owner_id)
            .collect();

        let used_bytes: u64 = active.iter().map(|r| r.file_size).sum();
        let quota_bytes = self.quota_bytes();
        let used_percent = if quota_bytes == 0 {
            0
        } else {
            (used_bytes.saturating_mul(100) / quota_bytes).min(100) as u8
        };

        Ok(StorageInfo {
            used_bytes,
            quota_bytes,
            used_percent,
            file_count: active.len() as u64,
        })
    }
}

/// Apply filter, sort, and pagination to a loaded collection.
fn page_of(mut records: Vec<FileRecord>, query: &ListQuery) -> FilePage {
    records.retain(|r| {
        r.is_active() && r.user_id == query.owner_id && query.file_type.matches(r.file_type)
    });
    // Stable sort keeps equal timestamps deterministic within a run.
    records.sort_by(|a, b| b.upload_time.cmp(&a.upload_time));

    let total = records.len() as u64;
    let list: Vec<FileRecord> = records
        .into_iter()
        .skip(query.page.offset() as usize)
        .take(query.page.page_size as usize)
        .collect();

    FilePage::new(list, &query.page, total)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use mediastore_core::types::{
        FileId, FileStatus, FileType, PageRequest, TypeFilter,
    };

    use super::*;

    fn record(id: &str, owner: &str, file_type: FileType, age_secs: i64) -> FileRecord {
        FileRecord {
            id: FileId::from(id),
            file_name: format!("{id}.bin"),
            original_name: format!("{id}.bin"),
            file_type,
            file_url: String::new(),
            file_size: 1,
            upload_time: Utc::now() - Duration::seconds(age_secs),
            user_id: owner.to_string(),
            platform: "h5".to_string(),
            status: FileStatus::Active,
            thumbnail: None,
        }
    }

    #[test]
    fn test_filters_owner_and_type() {
        let records = vec![
            record("a", "u1", FileType::Image, 1),
            record("b", "u2", FileType::Image, 2),
            record("c", "u1", FileType::Video, 3),
        ];
        let query = ListQuery {
            owner_id: "u1".to_string(),
            file_type: TypeFilter::Only(FileType::Image),
            page: PageRequest::default(),
        };
        let page = page_of(records, &query);
        assert_eq!(page.total, 1);
        assert_eq!(page.list[0].id.as_str(), "a");
    }

    #[test]
    fn test_excludes_soft_deleted() {
        let mut deleted = record("a", "u1", FileType::Image, 1);
        deleted.mark_deleted();
        let records = vec![deleted, record("b", "u1", FileType::Image, 2)];

        let page = page_of(records, &ListQuery::for_owner("u1"));
        assert_eq!(page.total, 1);
        assert_eq!(page.list[0].id.as_str(), "b");
    }

    #[test]
    fn test_sorted_newest_first() {
        let records = vec![
            record("old", "u1", FileType::Image, 30),
            record("new", "u1", FileType::Image, 10),
            record("mid", "u1", FileType::Image, 20),
        ];
        let page = page_of(records, &ListQuery::for_owner("u1"));
        let ids: Vec<&str> = page.list.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["new", "mid", "old"]);
    }

    #[test]
    fn test_page_two_of_five_images() {
        // 5 active image records, page 2 of size 2: ranked 3rd and 4th.
        let records = (1..=5)
            .map(|i| record(&format!("r{i}"), "u1", FileType::Image, i * 10))
            .collect();
        let query = ListQuery {
            owner_id: "u1".to_string(),
            file_type: TypeFilter::Only(FileType::Image),
            page: PageRequest::new(2, 2),
        };

        let page = page_of(records, &query);
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
        let ids: Vec<&str> = page.list.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["r3", "r4"]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let records = vec![record("a", "u1", FileType::Image, 1)];
        let query = ListQuery {
            owner_id: "u1".to_string(),
            file_type: TypeFilter::All,
            page: PageRequest::new(9, 10),
        };
        let page = page_of(records, &query);
        assert!(page.list.is_empty());
        assert_eq!(page.total, 1);
    }
}
