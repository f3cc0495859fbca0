//! Fixed sample records loaded into the stores at startup.
//!
//! Timestamps are relative to the moment the seed is built so the
//! dashboards always show recent activity.

use chrono::{Duration, NaiveDate, Utc};

use crate::models::{
    Coordinates, Movement, MovementType, Outbreak, OutbreakStatus, ProgressEntry,
    RouteCoordinates, Severity, Vaccination,
};

fn point(lat: f64, lng: f64) -> Coordinates {
    Coordinates { lat, lng }
}

fn route(origin: (f64, f64), destination: (f64, f64)) -> RouteCoordinates {
    RouteCoordinates {
        origin: point(origin.0, origin.1),
        destination: point(destination.0, destination.1),
    }
}

// (year, month, day, new cases, total cases)
fn progress(entries: &[(i32, u32, u32, u64, u64)]) -> Vec<ProgressEntry> {
    entries
        .iter()
        .filter_map(|&(y, m, d, new_cases, total_cases)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| ProgressEntry {
                date,
                new_cases,
                total_cases,
            })
        })
        .collect()
}

pub fn movements() -> Vec<Movement> {
    let now = Utc::now();
    vec![
        Movement {
            id: 1,
            movement_type: MovementType::Import,
            country: "Brasil".to_string(),
            animal_count: 250,
            animal_type: "Bovino".to_string(),
            purpose: "Reproducción".to_string(),
            health_status: "Saludable".to_string(),
            document_number: "IMP-2025-0125".to_string(),
            date_of_movement: now - Duration::days(30),
            responsible: "Importadora Ganadera S.A.".to_string(),
            origin: None,
            destination: Some("Meta".to_string()),
            has_alert: false,
            alert_reason: None,
            coordinates: route((-15.77, -47.92), (4.15, -73.63)),
        },
        Movement {
            id: 2,
            movement_type: MovementType::Export,
            country: "México".to_string(),
            animal_count: 180,
            animal_type: "Bovino".to_string(),
            purpose: "Comercialización".to_string(),
            health_status: "Saludable".to_string(),
            document_number: "EXP-2025-0089".to_string(),
            date_of_movement: now - Duration::days(25),
            responsible: "Exportadora Nacional Ltda.".to_string(),
            origin: Some("Córdoba".to_string()),
            destination: None,
            has_alert: false,
            alert_reason: None,
            coordinates: route((8.75, -75.88), (19.43, -99.13)),
        },
        Movement {
            id: 3,
            movement_type: MovementType::Import,
            country: "Argentina".to_string(),
            animal_count: 120,
            animal_type: "Bovino".to_string(),
            purpose: "Reproducción".to_string(),
            health_status: "Saludable".to_string(),
            document_number: "IMP-2025-0142".to_string(),
            date_of_movement: now - Duration::days(20),
            responsible: "Importadora Sur S.A.S.".to_string(),
            origin: None,
            destination: Some("Valle del Cauca".to_string()),
            has_alert: false,
            alert_reason: None,
            coordinates: route((-34.60, -58.38), (3.45, -76.53)),
        },
        Movement {
            id: 4,
            movement_type: MovementType::Export,
            country: "Perú".to_string(),
            animal_count: 90,
            animal_type: "Porcino".to_string(),
            purpose: "Comercialización".to_string(),
            health_status: "Saludable".to_string(),
            document_number: "EXP-2025-0103".to_string(),
            date_of_movement: now - Duration::days(15),
            responsible: "Exportadora Andina S.A.".to_string(),
            origin: Some("Nariño".to_string()),
            destination: None,
            has_alert: false,
            alert_reason: None,
            coordinates: route((1.21, -77.28), (-12.04, -77.03)),
        },
        Movement {
            id: 5,
            movement_type: MovementType::Import,
            country: "Estados Unidos".to_string(),
            animal_count: 75,
            animal_type: "Bovino".to_string(),
            purpose: "Mejoramiento genético".to_string(),
            health_status: "Cuarentena".to_string(),
            document_number: "IMP-2025-0158".to_string(),
            date_of_movement: now - Duration::days(10),
            responsible: "Genética Avanzada S.A.S.".to_string(),
            origin: None,
            destination: Some("Cundinamarca".to_string()),
            has_alert: true,
            alert_reason: Some(
                "Procedencia de zona con casos recientes de brucelosis".to_string(),
            ),
            coordinates: route((39.73, -104.99), (4.60, -74.08)),
        },
    ]
}

pub fn outbreaks() -> Vec<Outbreak> {
    let now = Utc::now();
    vec![
        Outbreak {
            id: 1,
            disease_type: "Fiebre Aftosa".to_string(),
            status: OutbreakStatus::Active,
            severity: Severity::High,
            detection_date: now - Duration::days(35),
            region: "Meta".to_string(),
            municipality: "Puerto López".to_string(),
            affected_animals: 45,
            measures: "Cuarentena, vacunación de emergencia, sacrificio controlado".to_string(),
            responsible_technician: "Dr. Luis Martínez".to_string(),
            progress: progress(&[
                (2025, 4, 10, 12, 12),
                (2025, 4, 15, 20, 32),
                (2025, 4, 20, 13, 45),
                (2025, 4, 25, 0, 45),
            ]),
            coordinates: point(4.08, -72.96),
        },
        Outbreak {
            id: 2,
            disease_type: "Brucelosis".to_string(),
            status: OutbreakStatus::Controlled,
            severity: Severity::Medium,
            detection_date: now - Duration::days(45),
            region: "Antioquia".to_string(),
            municipality: "Santa Rosa de Osos".to_string(),
            affected_animals: 28,
            measures: "Aislamiento, pruebas serológicas, vacunación estratégica".to_string(),
            responsible_technician: "Dra. Carmen Jiménez".to_string(),
            progress: progress(&[
                (2025, 3, 28, 8, 8),
                (2025, 4, 5, 13, 21),
                (2025, 4, 12, 7, 28),
                (2025, 4, 19, 0, 28),
                (2025, 4, 26, 0, 28),
            ]),
            coordinates: point(6.65, -75.46),
        },
        Outbreak {
            id: 3,
            disease_type: "Fiebre Aftosa".to_string(),
            status: OutbreakStatus::Eradicated,
            severity: Severity::Low,
            detection_date: now - Duration::days(90),
            region: "Córdoba".to_string(),
            municipality: "Montería".to_string(),
            affected_animals: 17,
            measures: "Cuarentena, vacunación, seguimiento epidemiológico".to_string(),
            responsible_technician: "Dr. José Ramírez".to_string(),
            progress: progress(&[
                (2025, 2, 15, 5, 5),
                (2025, 2, 22, 8, 13),
                (2025, 3, 1, 4, 17),
                (2025, 3, 8, 0, 17),
                (2025, 3, 15, 0, 17),
                (2025, 3, 22, 0, 17),
            ]),
            coordinates: point(8.75, -75.88),
        },
        Outbreak {
            id: 4,
            disease_type: "Tuberculosis Bovina".to_string(),
            status: OutbreakStatus::Active,
            severity: Severity::High,
            detection_date: now - Duration::days(20),
            region: "Cundinamarca".to_string(),
            municipality: "Ubaté".to_string(),
            affected_animals: 23,
            measures: "Cuarentena, pruebas diagnósticas, sacrificio sanitario".to_string(),
            responsible_technician: "Dra. Laura Salazar".to_string(),
            progress: progress(&[(2025, 4, 25, 8, 8), (2025, 5, 2, 15, 23)]),
            coordinates: point(5.31, -73.82),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn vaccination(
    id: u64,
    vaccinator: (&str, &str),
    farm: &str,
    municipality: &str,
    region: &str,
    vaccine_type: &str,
    counts: [u64; 5],
    observations: &str,
    days_ago: i64,
    coordinates: Coordinates,
) -> Vaccination {
    let [animals, male, female, young, adult] = counts;
    Vaccination {
        id,
        vaccinator_id: vaccinator.0.to_string(),
        vaccinator_name: vaccinator.1.to_string(),
        farm: farm.to_string(),
        municipality: municipality.to_string(),
        region: region.to_string(),
        campaign: "Campaña Nacional 2025 - Fase 1".to_string(),
        campaign_status: "En Curso".to_string(),
        vaccine_type: vaccine_type.to_string(),
        animals_vaccinated: animals,
        male_count: male,
        female_count: female,
        young_count: young,
        adult_count: adult,
        observations: Some(observations.to_string()),
        date_created: Some(Utc::now() - Duration::days(days_ago)),
        coordinates,
    }
}

pub fn vaccinations() -> Vec<Vaccination> {
    let juan = ("1", "Juan Pérez");
    vec![
        vaccination(
            1,
            juan,
            "Finca El Recreo",
            "Chía",
            "Cundinamarca",
            "Aftosa Bivalente",
            [120, 45, 75, 25, 95],
            "Sin novedades durante la jornada",
            10,
            point(4.85, -74.05),
        ),
        vaccination(
            2,
            juan,
            "Hacienda La Primavera",
            "Cajicá",
            "Cundinamarca",
            "Aftosa Bivalente",
            [230, 100, 130, 50, 180],
            "Algunos animales presentaron resistencia",
            9,
            point(4.92, -74.02),
        ),
        vaccination(
            3,
            juan,
            "Rancho Grande",
            "Zipaquirá",
            "Cundinamarca",
            "Aftosa Bivalente",
            [175, 70, 105, 40, 135],
            "Completado sin novedades",
            8,
            point(5.02, -74.00),
        ),
        vaccination(
            4,
            ("2", "María López"),
            "Finca Los Alpes",
            "Medellín",
            "Antioquia",
            "Aftosa Bivalente",
            [320, 140, 180, 75, 245],
            "Completado en dos días por el tamaño del hato",
            5,
            point(6.25, -75.57),
        ),
        vaccination(
            5,
            ("3", "Carlos Rodríguez"),
            "Hacienda El Edén",
            "Cali",
            "Valle del Cauca",
            "Triple Bovina",
            [195, 85, 110, 45, 150],
            "Jornada completada satisfactoriamente",
            3,
            point(3.45, -76.53),
        ),
    ]
}
