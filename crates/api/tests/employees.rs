mod common;

use api::{
    dto::{EmployeeDto, Gender},
    error::ServiceError,
};
use common::{sample_dto, setup};
use entity::employee;
use sea_orm::EntityTrait;

#[tokio::test]
async fn create_assigns_an_id_and_preserves_every_field() {
    let (_db, service) = setup().await;

    let created = service.create(sample_dto()).await.unwrap();

    assert!(created.id.is_some());
    let expected = EmployeeDto {
        id: created.id,
        ..sample_dto()
    };
    assert_eq!(created, expected);
}

#[tokio::test]
async fn created_ids_are_distinct() {
    let (_db, service) = setup().await;

    let first = service.create(sample_dto()).await.unwrap();
    let second = service.create(sample_dto()).await.unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn get_by_id_round_trips_a_created_record() {
    let (_db, service) = setup().await;

    let created = service.create(sample_dto()).await.unwrap();
    let fetched = service.get_by_id(created.id.unwrap()).await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_replaces_all_fields_but_keeps_the_id() {
    let (db, service) = setup().await;

    let created = service.create(sample_dto()).await.unwrap();
    let id = created.id.unwrap();
    let replacement = EmployeeDto {
        // any id inside the payload is ignored in favor of the path id
        id: Some(9999),
        name: "Bithi".into(),
        father_name: "Kamal".into(),
        mother_name: "Laila".into(),
        dob: None,
        doj: chrono::NaiveDate::from_ymd_opt(2023, 6, 1),
        gender: Gender::Female,
    };

    let updated = service.update(id, replacement.clone()).await.unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.name, "Bithi");
    assert_eq!(updated.gender, Gender::Female);
    // full-replace semantics: the absent dob overwrote the stored one
    assert_eq!(updated.dob, None);
    assert_eq!(updated.doj, replacement.doj);

    let row = employee::Entity::find_by_id(id)
        .one(db.as_ref())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.id, id);
    assert_eq!(row.dob, None);
    assert!(row.updated_at >= row.created_at);

    // the payload id never became a row
    let ghost = employee::Entity::find_by_id(9999_i64)
        .one(db.as_ref())
        .await
        .unwrap();
    assert!(ghost.is_none());
}

#[tokio::test]
async fn update_keeps_the_creation_timestamp() {
    let (db, service) = setup().await;

    let created = service.create(sample_dto()).await.unwrap();
    let id = created.id.unwrap();
    let before = employee::Entity::find_by_id(id)
        .one(db.as_ref())
        .await
        .unwrap()
        .unwrap();

    service.update(id, sample_dto()).await.unwrap();

    let after = employee::Entity::find_by_id(id)
        .one(db.as_ref())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at >= before.updated_at);
}

#[tokio::test]
async fn get_all_returns_records_in_insertion_order() {
    let (_db, service) = setup().await;

    for name in ["first", "second", "third"] {
        let dto = EmployeeDto {
            name: name.into(),
            ..sample_dto()
        };
        service.create(dto).await.unwrap();
    }

    let all = service.get_all().await.unwrap();
    let names: Vec<_> = all.iter().map(|dto| dto.name.as_str()).collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[tokio::test]
async fn missing_ids_are_not_found_never_an_error() {
    let (_db, service) = setup().await;

    // repeated calls classify identically: absence is idempotent
    for _ in 0..2 {
        assert!(matches!(
            service.get_by_id(42).await,
            Err(ServiceError::NotFound(42))
        ));
        assert!(matches!(
            service.update(42, sample_dto()).await,
            Err(ServiceError::NotFound(42))
        ));
        assert!(matches!(
            service.delete(42).await,
            Err(ServiceError::NotFound(42))
        ));
    }
}

#[tokio::test]
async fn delete_then_get_reports_the_record_gone() {
    let (_db, service) = setup().await;

    let created = service.create(sample_dto()).await.unwrap();
    let id = created.id.unwrap();

    let removed = service.delete(id).await.unwrap();
    assert_eq!(removed, id);

    assert!(matches!(
        service.get_by_id(id).await,
        Err(ServiceError::NotFound(gone)) if gone == id
    ));
    assert!(service.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn range_bounds_are_inclusive() {
    let (_db, service) = setup().await;

    for _ in 0..5 {
        service.create(sample_dto()).await.unwrap();
    }

    let hits = service.get_range(2, 4).await.unwrap();
    let ids: Vec<_> = hits.iter().map(|dto| dto.id.unwrap()).collect();
    assert_eq!(ids, [2, 3, 4]);
}

#[tokio::test]
async fn inverted_range_is_empty_not_an_error() {
    let (_db, service) = setup().await;

    for _ in 0..5 {
        service.create(sample_dto()).await.unwrap();
    }

    let hits = service.get_range(4, 2).await.unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn paging_slices_the_table_and_recomputes_the_total() {
    let (_db, service) = setup().await;

    for _ in 0..5 {
        service.create(sample_dto()).await.unwrap();
    }

    let first = service.get_page(0, 2).await.unwrap();
    assert_eq!(first.content.len(), 2);
    assert_eq!(first.total_elements, 5);
    assert_eq!(first.page, 0);
    assert_eq!(first.size, 2);

    let last = service.get_page(2, 2).await.unwrap();
    assert_eq!(last.content.len(), 1);
    assert_eq!(last.total_elements, 5);
}

#[tokio::test]
async fn out_of_domain_pages_come_back_empty_with_the_total_intact() {
    let (_db, service) = setup().await;

    for _ in 0..5 {
        service.create(sample_dto()).await.unwrap();
    }

    let beyond = service.get_page(10, 2).await.unwrap();
    assert!(beyond.content.is_empty());
    assert_eq!(beyond.total_elements, 5);

    let negative = service.get_page(-1, 2).await.unwrap();
    assert!(negative.content.is_empty());
    assert_eq!(negative.total_elements, 5);
    assert_eq!(negative.page, -1);
}

#[tokio::test]
async fn bulk_insert_grows_the_table_with_suffixed_copies() {
    let (_db, service) = setup().await;

    let inserted = service.bulk_insert(sample_dto(), 4).await.unwrap();
    assert_eq!(inserted, 4);

    let all = service.get_all().await.unwrap();
    assert_eq!(all.len(), 4);
    let template = sample_dto();
    for (index, dto) in all.iter().enumerate() {
        assert_eq!(dto.name, format!("{}{}", template.name, index));
        assert_eq!(dto.father_name, format!("{}{}", template.father_name, index));
        assert_eq!(dto.mother_name, format!("{}{}", template.mother_name, index));
        assert_eq!(dto.dob, template.dob);
        assert_eq!(dto.gender, template.gender);
    }
}
