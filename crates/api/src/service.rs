//! Business logic for employee records. Thin by design: convert, call
//! the store, convert back. Outcome classification happens at the HTTP
//! boundary.

use std::sync::Arc;

use chrono::Utc;
use entity::employee;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::{
    dto::{EmployeeDto, Page},
    error::{ServiceError, ServiceResult},
};

#[derive(Clone)]
pub struct EmployeeService {
    db: Arc<DatabaseConnection>,
}

impl EmployeeService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Inserts a fresh record; the store assigns the id.
    pub async fn create(&self, dto: EmployeeDto) -> ServiceResult<EmployeeDto> {
        let record = new_record(&dto);
        let model = record.insert(self.db.as_ref()).await?;
        Ok(EmployeeDto::from_model(model))
    }

    /// Every record, in store iteration order. Unbounded.
    pub async fn get_all(&self) -> ServiceResult<Vec<EmployeeDto>> {
        let models = employee::Entity::find().all(self.db.as_ref()).await?;
        Ok(models.into_iter().map(EmployeeDto::from_model).collect())
    }

    /// One slice of the table. The total is recomputed on every call;
    /// out-of-domain `page` or `size` values yield an empty content list
    /// rather than an error, and the requested values are echoed back.
    pub async fn get_page(&self, page: i64, size: i64) -> ServiceResult<Page<EmployeeDto>> {
        let per_page = u64::try_from(size).unwrap_or(0);
        let paginator = employee::Entity::find().paginate(self.db.as_ref(), per_page);
        let total_elements = paginator.num_items().await?;
        let content = match u64::try_from(page) {
            Ok(index) if per_page > 0 => paginator.fetch_page(index).await?,
            _ => Vec::new(),
        };
        Ok(Page {
            content: content.into_iter().map(EmployeeDto::from_model).collect(),
            total_elements,
            page,
            size,
        })
    }

    /// Existence is checked before the fetch; the store is authoritative
    /// and no concurrent-deletion race is defended against.
    pub async fn get_by_id(&self, id: i64) -> ServiceResult<EmployeeDto> {
        if !self.exists(id).await? {
            return Err(ServiceError::NotFound(id));
        }
        let model = employee::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(ServiceError::NotFound(id))?;
        Ok(EmployeeDto::from_model(model))
    }

    /// Full replace of every data field except the id; the write executes
    /// immediately. Any id inside the DTO is ignored in favor of `id`.
    pub async fn update(&self, id: i64, dto: EmployeeDto) -> ServiceResult<EmployeeDto> {
        if !self.exists(id).await? {
            return Err(ServiceError::NotFound(id));
        }
        let model = employee::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(ServiceError::NotFound(id))?;

        let mut record: employee::ActiveModel = model.into();
        dto.apply_to(&mut record);
        record.updated_at = Set(Utc::now().into());
        let model = record.update(self.db.as_ref()).await?;
        Ok(EmployeeDto::from_model(model))
    }

    /// Hard delete; the removed id is echoed back.
    pub async fn delete(&self, id: i64) -> ServiceResult<i64> {
        if !self.exists(id).await? {
            return Err(ServiceError::NotFound(id));
        }
        employee::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        Ok(id)
    }

    /// All records with `start <= id <= end`. Inverted bounds produce an
    /// empty sequence by the comparison contract, never an error.
    pub async fn get_range(&self, start: i64, end: i64) -> ServiceResult<Vec<EmployeeDto>> {
        let models = employee::Entity::find()
            .filter(employee::Column::Id.between(start, end))
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(EmployeeDto::from_model).collect())
    }

    /// Load utility: `count` sequential independent inserts derived from
    /// the template, each name field suffixed with the loop index. No
    /// transaction spans the loop; a failure partway leaves the earlier
    /// rows committed.
    pub async fn bulk_insert(&self, template: EmployeeDto, count: u64) -> ServiceResult<u64> {
        for index in 0..count {
            let record = new_record(&template.with_suffix(index));
            record.insert(self.db.as_ref()).await?;
        }
        Ok(count)
    }

    async fn exists(&self, id: i64) -> ServiceResult<bool> {
        let found = employee::Entity::find_by_id(id)
            .count(self.db.as_ref())
            .await?;
        Ok(found > 0)
    }
}

/// Fresh record with the id left to the store and audit columns stamped.
fn new_record(dto: &EmployeeDto) -> employee::ActiveModel {
    let now = Utc::now();
    let mut record = employee::ActiveModel {
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    dto.apply_to(&mut record);
    record
}
