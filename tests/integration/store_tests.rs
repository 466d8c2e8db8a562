//! Domain operations against a migrated PostgreSQL database

use axum::body::Bytes;
use sqlx::postgres::PgPoolOptions;

use lab_inventory_server::{
    config::AppConfig,
    error::{AppError, InputError},
    models::{EquipmentForm, LabInfoForm, Reservation, ReservationForm},
    repository::Repository,
    services::{uploads::UploadedImage, Services},
};

/// Reservations booked against one piece of equipment
async fn booked_for(services: &Services, equipment_id: i32) -> Vec<Reservation> {
    services
        .reservations
        .list()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.equipment_id == equipment_id)
        .collect()
}

/// Services over the test database, storing uploads in `uploads`
async fn test_services(uploads: &std::path::Path) -> Services {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let config = AppConfig {
        server: Default::default(),
        database: Default::default(),
        auth: lab_inventory_server::config::AuthConfig {
            admin_password: Some("admin123".to_string()),
            ..Default::default()
        },
        uploads: lab_inventory_server::config::UploadsConfig {
            dir: uploads.to_path_buf(),
            ..Default::default()
        },
        logging: Default::default(),
    };

    Services::new(Repository::new(pool), &config).expect("services")
}

fn equipment_form(name: &str, quantity: &str) -> EquipmentForm {
    EquipmentForm {
        name: Some(name.to_string()),
        brand: Some("Zeiss".to_string()),
        quantity: Some(quantity.to_string()),
        ..Default::default()
    }
}

fn reservation_form(user: &str, date: &str) -> ReservationForm {
    ReservationForm {
        name: Some(user.to_string()),
        email: Some(format!("{}@university.edu", user.to_lowercase())),
        institution: Some("UFMG".to_string()),
        role: Some("Student".to_string()),
        date: Some(date.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
#[ignore]
async fn test_reservations_do_not_consume_stock() {
    let dir = tempfile::tempdir().unwrap();
    let services = test_services(dir.path()).await;

    let microscope = services
        .equipment
        .create(equipment_form("Microscope", "2"), None)
        .await
        .unwrap();

    services
        .reservations
        .create(microscope.id, reservation_form("Ana", "2025-05-02"))
        .await
        .unwrap();
    services
        .reservations
        .create(microscope.id, reservation_form("Bruno", "2025-05-03"))
        .await
        .unwrap();

    let booked = booked_for(&services, microscope.id).await;
    assert_eq!(booked.len(), 2);

    let reloaded = services.equipment.get_by_id(microscope.id).await.unwrap();
    assert_eq!(reloaded.quantity, Some(2));

    services.equipment.delete(microscope.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_zero_stock_is_unavailable_even_with_invalid_form() {
    let dir = tempfile::tempdir().unwrap();
    let services = test_services(dir.path()).await;

    let centrifuge = services
        .equipment
        .create(equipment_form("Centrifuge", "0"), None)
        .await
        .unwrap();

    let result = services
        .reservations
        .create(centrifuge.id, reservation_form("Ana", "2025-05-02"))
        .await;
    assert!(matches!(result, Err(AppError::Unavailable(_))));

    let result = services
        .reservations
        .create(centrifuge.id, ReservationForm::default())
        .await;
    assert!(matches!(result, Err(AppError::Unavailable(_))));

    assert!(booked_for(&services, centrifuge.id).await.is_empty());
    services.equipment.delete(centrifuge.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_blank_institution_leaves_store_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let services = test_services(dir.path()).await;

    let scale = services
        .equipment
        .create(equipment_form("Analytical scale", "1"), None)
        .await
        .unwrap();

    let form = ReservationForm {
        institution: Some("  ".to_string()),
        ..reservation_form("Ana", "2025-05-02")
    };
    let result = services.reservations.create(scale.id, form).await;
    assert!(matches!(
        result,
        Err(AppError::InvalidInput(InputError::MissingField("institution")))
    ));

    assert!(booked_for(&services, scale.id).await.is_empty());

    services.equipment.delete(scale.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_negative_quantity_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let services = test_services(dir.path()).await;

    let image = UploadedImage {
        file_name: "negative.png".to_string(),
        bytes: Bytes::from_static(b"png"),
    };

    let result = services
        .equipment
        .create(equipment_form("Pipette with negative stock", "-1"), Some(image))
        .await;
    assert!(matches!(
        result,
        Err(AppError::InvalidInput(InputError::NegativeQuantity(-1)))
    ));
    let listed = services.equipment.list().await.unwrap();
    assert!(listed.iter().all(|e| e.name != "Pipette with negative stock"));
    // Validation runs before the image is written
    assert!(!dir.path().join("negative.png").exists());
}

#[tokio::test]
#[ignore]
async fn test_delete_cascades_to_reservations_and_image() {
    let dir = tempfile::tempdir().unwrap();
    let services = test_services(dir.path()).await;

    let image = UploadedImage {
        file_name: "../spectrometer.png".to_string(),
        bytes: Bytes::from_static(b"png"),
    };
    let spectrometer = services
        .equipment
        .create(equipment_form("Spectrometer", "3"), Some(image))
        .await
        .unwrap();
    assert_eq!(spectrometer.image.as_deref(), Some("spectrometer.png"));
    assert!(dir.path().join("spectrometer.png").exists());

    for (user, date) in [("Ana", "2025-06-01"), ("Bruno", "2025-06-01"), ("Carla", "2025-06-02")] {
        services
            .reservations
            .create(spectrometer.id, reservation_form(user, date))
            .await
            .unwrap();
    }

    services.equipment.delete(spectrometer.id).await.unwrap();

    assert!(booked_for(&services, spectrometer.id).await.is_empty());
    assert!(!dir.path().join("spectrometer.png").exists());
    assert!(matches!(
        services.equipment.get_by_id(spectrometer.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore]
async fn test_delete_with_missing_image_file_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let services = test_services(dir.path()).await;

    let image = UploadedImage {
        file_name: "oscilloscope.png".to_string(),
        bytes: Bytes::from_static(b"png"),
    };
    let oscilloscope = services
        .equipment
        .create(equipment_form("Oscilloscope", "1"), Some(image))
        .await
        .unwrap();

    std::fs::remove_file(dir.path().join("oscilloscope.png")).unwrap();
    services.equipment.delete(oscilloscope.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_delete_unknown_ids() {
    let dir = tempfile::tempdir().unwrap();
    let services = test_services(dir.path()).await;

    assert!(matches!(
        services.equipment.delete(i32::MAX).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        services.reservations.delete(i32::MAX).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        services.reservations.create(i32::MAX, reservation_form("Ana", "2025-05-02")).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore]
async fn test_lab_info_is_a_single_row() {
    let dir = tempfile::tempdir().unwrap();
    let services = test_services(dir.path()).await;

    services.lab_info.get().await.unwrap();
    services
        .lab_info
        .update(LabInfoForm {
            lab_name: Some("Laboratory of Optics".to_string()),
            coordinator_email: Some("coordinator@university.edu".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let info = services.lab_info.update(LabInfoForm {
        lab_name: Some("Laboratory of Photonics".to_string()),
        ..Default::default()
    })
    .await
    .unwrap();

    // Every field is overwritten, including the ones left blank
    assert_eq!(info.lab_name.as_deref(), Some("Laboratory of Photonics"));
    assert_eq!(info.coordinator_email, None);

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM lab_info")
        .fetch_one(&services.repository.pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}
