// src/repositories/repository_tests.rs
//
// Repository behaviour against a real SQLite store
//
// PURPOSE:
// - Prove the generic repository honours the CRUD contract for every entity
// - Prove the store, not the repository, enforces referential integrity
// - Prove rekey is atomic and deadlines surface as timeouts
//
// INVARIANTS TESTED:
// - create then get returns the same value; delete then get returns None
// - update rewrites only the mutable columns, missing keys report 0
// - absent optional fields round-trip as absent
// - composite keys compare every component
// - duplicate keys and dangling references are constraint violations
// - validation failures never reach the store
// - a failed rekey leaves the original row in place
// - exhausted pools and held write locks fail with Timeout
// - concurrent duplicate creates: one success, one constraint violation

#[cfg(test)]
mod fixtures {
    use std::sync::Arc;
    use std::time::Duration;

    use tempfile::TempDir;

    use crate::application::Repositories;
    use crate::config::DatabaseConfig;
    use crate::db::{create_connection_pool, create_memory_pool, initialize_database, Store};
    use crate::domain::{Country, Disease, DiseaseType, DiseaseTypeId, Doctor, Patient, PublicServant};

    pub const ITALY: &str = "Italy";
    pub const SERVANT: &str = "sa@health.gov.it";
    pub const DOCTOR: &str = "doc@clinic.it";
    pub const PATIENT: &str = "pat@mail.it";

    pub fn memory_store() -> Store {
        memory_store_with_timeout(Duration::from_secs(2))
    }

    pub fn memory_store_with_timeout(timeout: Duration) -> Store {
        Store::new(Arc::new(create_memory_pool().unwrap()), timeout)
    }

    pub fn file_store(dir: &TempDir, max_connections: u32, timeout: Duration) -> Store {
        let path = dir.path().join("pubhealth.db");
        let config = DatabaseConfig::new(path.to_str().unwrap())
            .unwrap()
            .with_max_connections(max_connections)
            .with_timeout(timeout);
        let pool = create_connection_pool(&config).unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();
        Store::new(Arc::new(pool), timeout)
    }

    /// Reference rows most tests lean on.
    pub struct Seeded {
        pub repos: Repositories,
        pub viral: DiseaseTypeId,
    }

    pub fn seeded(store: &Store) -> Seeded {
        let repos = Repositories::new(store);

        repos.countries.create(&Country::new(ITALY, 59_000_000)).unwrap();
        let viral = repos.disease_types.create(&DiseaseType::new("Viral")).unwrap();
        for code in ["D01", "D02"] {
            repos
                .diseases
                .create(&Disease::new(code, "virus", "respiratory", viral))
                .unwrap();
        }
        repos
            .public_servants
            .create(&PublicServant::new(SERVANT, "Dept1"))
            .unwrap();
        repos.doctors.create(&Doctor::new(DOCTOR, "MD")).unwrap();
        repos.patients.create(&Patient::new(PATIENT)).unwrap();

        Seeded { repos, viral }
    }
}

#[cfg(test)]
mod crud_tests {
    use chrono::NaiveDate;

    use super::fixtures::*;
    use crate::domain::{
        Country, Discover, Disease, DiseaseType, Doctor, Patient, PatientDisease, PublicServant,
        Record, Specialize, User,
    };
    use crate::repositories::{DiscoverKey, PatientDiseaseKey, RecordKey, SpecializeKey};

    #[test]
    fn test_italy_scenario() {
        let store = memory_store();
        let repos = crate::application::Repositories::new(&store);

        let italy = Country::new("Italy", 59_000_000);
        assert_eq!(repos.countries.create(&italy).unwrap(), "Italy");

        assert_eq!(
            repos.countries.get(&"Italy".to_string()).unwrap(),
            Some(italy)
        );
        assert_eq!(repos.countries.get(&"Atlantis".to_string()).unwrap(), None);
    }

    #[test]
    fn test_every_entity_round_trips() {
        let store = memory_store();
        let Seeded { repos, viral } = seeded(&store);

        assert_eq!(
            repos.disease_types.get(&viral).unwrap(),
            Some(DiseaseType::new("Viral").with_id(viral))
        );
        assert_eq!(
            repos.diseases.get(&"D01".to_string()).unwrap(),
            Some(Disease::new("D01", "virus", "respiratory", viral))
        );
        assert_eq!(
            repos.doctors.get(&DOCTOR.to_string()).unwrap(),
            Some(Doctor::new(DOCTOR, "MD"))
        );
        assert_eq!(
            repos.patients.get(&PATIENT.to_string()).unwrap(),
            Some(Patient::new(PATIENT))
        );
        assert_eq!(
            repos.public_servants.get(&SERVANT.to_string()).unwrap(),
            Some(PublicServant::new(SERVANT, "Dept1"))
        );

        let discover = Discover::new(ITALY, "D01", NaiveDate::from_ymd_opt(2020, 2, 20).unwrap());
        let key = repos.discoveries.create(&discover).unwrap();
        assert_eq!(key, DiscoverKey::new(ITALY, "D01"));
        assert_eq!(repos.discoveries.get(&key).unwrap(), Some(discover));

        let specialize = Specialize::new(viral, DOCTOR);
        let key = repos.specializations.create(&specialize).unwrap();
        assert_eq!(key, SpecializeKey::new(viral, DOCTOR));
        assert_eq!(repos.specializations.get(&key).unwrap(), Some(specialize));

        let link = PatientDisease::new(PATIENT, "D02");
        let key = repos.patient_diseases.create(&link).unwrap();
        assert_eq!(key, PatientDiseaseKey::new(PATIENT, "D02"));
        assert_eq!(repos.patient_diseases.get(&key).unwrap(), Some(link));

        let record = Record::new(SERVANT, ITALY, "D01", 10, 500);
        let key = repos.records.create(&record).unwrap();
        assert_eq!(key, RecordKey::new(SERVANT, ITALY, "D01"));
        assert_eq!(repos.records.get(&key).unwrap(), Some(record));

        let user = User::new("ada@example.org", "Ada", "Lovelace", ITALY);
        let key = repos.users.create(&user).unwrap();
        assert_eq!(repos.users.get(&key).unwrap(), Some(user));
    }

    #[test]
    fn test_create_then_delete_leaves_nothing() {
        let store = memory_store();
        let Seeded { repos, .. } = seeded(&store);

        let record = Record::new(SERVANT, ITALY, "D01", 1, 2);
        let key = repos.records.create(&record).unwrap();
        assert_eq!(repos.records.delete(&key).unwrap(), 1);
        assert_eq!(repos.records.get(&key).unwrap(), None);

        let country = Country::new("Chile", 19_000_000);
        let key = repos.countries.create(&country).unwrap();
        assert_eq!(repos.countries.delete(&key).unwrap(), 1);
        assert_eq!(repos.countries.get(&key).unwrap(), None);
        assert!(!repos.countries.exists(&key).unwrap());
    }

    #[test]
    fn test_user_optional_fields_round_trip() {
        let store = memory_store();
        let Seeded { repos, .. } = seeded(&store);

        let salaried = User::new("ada@example.org", "Ada", "Lovelace", ITALY).with_salary(Some(42_000));
        let reachable = User::new("alan@example.org", "Alan", "Turing", ITALY)
            .with_phone(Some("+39 06 1234".to_string()));

        repos.users.create(&salaried).unwrap();
        repos.users.create(&reachable).unwrap();

        let stored = repos.users.get(&"ada@example.org".to_string()).unwrap().unwrap();
        assert_eq!(stored.salary, Some(42_000));
        assert_eq!(stored.phone, None);

        let stored = repos.users.get(&"alan@example.org".to_string()).unwrap().unwrap();
        assert_eq!(stored.salary, None);
        assert_eq!(stored.phone.as_deref(), Some("+39 06 1234"));
    }

    #[test]
    fn test_list_all() {
        let store = memory_store();
        let repos = crate::application::Repositories::new(&store);
        assert!(repos.countries.list_all().unwrap().is_empty());

        let Seeded { repos, .. } = seeded(&store);
        repos.countries.create(&Country::new("Chile", 19_000_000)).unwrap();

        let mut names: Vec<String> = repos
            .countries
            .list_all()
            .unwrap()
            .into_iter()
            .map(|country| country.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["Chile".to_string(), "Italy".to_string()]);
    }

    #[test]
    fn test_record_composite_key_isolation() {
        let store = memory_store();
        let Seeded { repos, .. } = seeded(&store);

        let first = Record::new(SERVANT, ITALY, "D01", 1, 10);
        let second = Record::new(SERVANT, ITALY, "D02", 2, 20);
        let first_key = repos.records.create(&first).unwrap();
        let second_key = repos.records.create(&second).unwrap();

        assert_eq!(repos.records.get(&first_key).unwrap(), Some(first));
        assert_eq!(repos.records.get(&second_key).unwrap(), Some(second.clone()));

        assert_eq!(repos.records.delete(&first_key).unwrap(), 1);
        assert_eq!(repos.records.get(&first_key).unwrap(), None);
        assert_eq!(repos.records.get(&second_key).unwrap(), Some(second));
    }

    #[test]
    fn test_disease_type_id_is_store_assigned() {
        let store = memory_store();
        let Seeded { repos, viral } = seeded(&store);

        let bacterial = DiseaseType::new("Bacterial").with_id(500);
        let id = repos.disease_types.create(&bacterial).unwrap();

        assert_ne!(id, 500);
        assert!(id > viral);
        assert_eq!(repos.disease_types.get(&500).unwrap(), None);
        assert_eq!(
            repos.disease_types.get(&id).unwrap(),
            Some(DiseaseType::new("Bacterial").with_id(id))
        );
    }
}

#[cfg(test)]
mod update_tests {
    use chrono::NaiveDate;

    use super::fixtures::*;
    use crate::domain::{
        Country, Discover, Disease, DiseaseType, Doctor, Patient, PublicServant, Record,
        Specialize, User,
    };
    use crate::repositories::{RecordKey, SpecializeKey};

    #[test]
    fn test_record_update_changes_only_counts() {
        let store = memory_store();
        let Seeded { repos, .. } = seeded(&store);

        repos
            .records
            .create(&Record::new(SERVANT, ITALY, "D01", 1, 10))
            .unwrap();

        let changed = Record::new(SERVANT, ITALY, "D01", 7, 70);
        assert_eq!(repos.records.update(&changed).unwrap(), 1);

        let stored = repos
            .records
            .get(&RecordKey::new(SERVANT, ITALY, "D01"))
            .unwrap()
            .unwrap();
        assert_eq!(stored.public_servant_email, SERVANT);
        assert_eq!(stored.country_name, ITALY);
        assert_eq!(stored.disease_code, "D01");
        assert_eq!(stored.total_deaths, 7);
        assert_eq!(stored.total_patients, 70);
    }

    #[test]
    fn test_update_rewrites_mutable_fields() {
        let store = memory_store();
        let Seeded { repos, .. } = seeded(&store);

        assert_eq!(repos.countries.update(&Country::new(ITALY, 60_000_000)).unwrap(), 1);
        assert_eq!(
            repos.countries.get(&ITALY.to_string()).unwrap(),
            Some(Country::new(ITALY, 60_000_000))
        );

        let date = NaiveDate::from_ymd_opt(2020, 2, 20).unwrap();
        let later = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        let discover = Discover::new(ITALY, "D01", date);
        let key = repos.discoveries.create(&discover).unwrap();
        repos
            .discoveries
            .update(&Discover::new(ITALY, "D01", later))
            .unwrap();
        assert_eq!(
            repos.discoveries.get(&key).unwrap().unwrap().first_encounter,
            later
        );
    }

    #[test]
    fn test_disease_type_description_update() {
        let store = memory_store();
        let Seeded { repos, viral } = seeded(&store);

        let renamed = DiseaseType::new("Viral (RNA)").with_id(viral);
        assert_eq!(repos.disease_types.update(&renamed).unwrap(), 1);
        assert_eq!(repos.disease_types.get(&viral).unwrap(), Some(renamed));
    }

    #[test]
    fn test_disease_update_moves_to_another_type() {
        let store = memory_store();
        let Seeded { repos, viral } = seeded(&store);
        let bacterial = repos
            .disease_types
            .create(&DiseaseType::new("Bacterial"))
            .unwrap();
        assert_ne!(bacterial, viral);

        let changed = Disease::new("D01", "bacterium", "intestinal", bacterial);
        assert_eq!(repos.diseases.update(&changed).unwrap(), 1);

        let stored = repos.diseases.get(&"D01".to_string()).unwrap().unwrap();
        assert_eq!(stored, changed);
        assert_eq!(stored.disease_type_id, bacterial);

        let untouched = repos.diseases.get(&"D02".to_string()).unwrap().unwrap();
        assert_eq!(untouched.disease_type_id, viral);
        assert_eq!(untouched.pathogen, "virus");
    }

    #[test]
    fn test_staff_updates_rewrite_role_fields() {
        let store = memory_store();
        let Seeded { repos, .. } = seeded(&store);

        let doctor = Doctor::new(DOCTOR, "PhD");
        assert_eq!(repos.doctors.update(&doctor).unwrap(), 1);
        assert_eq!(repos.doctors.get(&DOCTOR.to_string()).unwrap(), Some(doctor));

        let servant = PublicServant::new(SERVANT, "Dept2");
        assert_eq!(repos.public_servants.update(&servant).unwrap(), 1);
        assert_eq!(
            repos.public_servants.get(&SERVANT.to_string()).unwrap(),
            Some(servant)
        );
    }

    #[test]
    fn test_update_can_clear_optional_fields() {
        let store = memory_store();
        let Seeded { repos, .. } = seeded(&store);

        let user = User::new("ada@example.org", "Ada", "Lovelace", ITALY)
            .with_salary(Some(42_000))
            .with_phone(Some("555".to_string()));
        let key = repos.users.create(&user).unwrap();

        let cleared = user.clone().with_salary(None).with_phone(None);
        assert_eq!(repos.users.update(&cleared).unwrap(), 1);
        assert_eq!(repos.users.get(&key).unwrap(), Some(cleared));
    }

    #[test]
    fn test_missing_key_reports_zero() {
        let store = memory_store();
        let Seeded { repos, .. } = seeded(&store);

        assert_eq!(repos.countries.update(&Country::new("Atlantis", 1)).unwrap(), 0);
        assert_eq!(repos.countries.delete(&"Atlantis".to_string()).unwrap(), 0);
        assert_eq!(
            repos
                .records
                .delete(&RecordKey::new(SERVANT, ITALY, "D99"))
                .unwrap(),
            0
        );
        assert_eq!(repos.countries.get(&"Atlantis".to_string()).unwrap(), None);
    }

    #[test]
    fn test_link_row_update_reports_existence() {
        let store = memory_store();
        let Seeded { repos, viral } = seeded(&store);

        let specialize = Specialize::new(viral, DOCTOR);
        repos.specializations.create(&specialize).unwrap();

        assert_eq!(repos.specializations.update(&specialize).unwrap(), 1);
        assert_eq!(
            repos
                .specializations
                .update(&Specialize::new(viral, "nobody@clinic.it"))
                .unwrap(),
            0
        );
        assert_eq!(repos.patients.update(&Patient::new(PATIENT)).unwrap(), 1);
        assert!(repos
            .specializations
            .exists(&SpecializeKey::new(viral, DOCTOR))
            .unwrap());
    }
}

#[cfg(test)]
mod integrity_tests {
    use chrono::NaiveDate;

    use super::fixtures::*;
    use crate::domain::{Country, Discover, Disease, Record, User};
    use crate::error::ErrorKind;
    use crate::repositories::DiscoverKey;

    #[test]
    fn test_duplicate_discover_is_constraint_violation() {
        let store = memory_store();
        let Seeded { repos, .. } = seeded(&store);

        let first = NaiveDate::from_ymd_opt(2020, 2, 20).unwrap();
        let second = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();

        repos
            .discoveries
            .create(&Discover::new(ITALY, "D01", first))
            .unwrap();
        let err = repos
            .discoveries
            .create(&Discover::new(ITALY, "D01", second))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ConstraintViolation);
        let stored = repos
            .discoveries
            .get(&DiscoverKey::new(ITALY, "D01"))
            .unwrap()
            .unwrap();
        assert_eq!(stored.first_encounter, first);
    }

    #[test]
    fn test_dangling_reference_is_constraint_violation() {
        let store = memory_store();
        let Seeded { repos, .. } = seeded(&store);

        let err = repos
            .users
            .create(&User::new("ghost@example.org", "G", "H", "Atlantis"))
            .unwrap_err();
        assert!(err.is_constraint_violation());

        let err = repos
            .diseases
            .create(&Disease::new("D99", "prion", "unknown", 999))
            .unwrap_err();
        assert!(err.is_constraint_violation());

        let err = repos
            .records
            .create(&Record::new("nobody@health.gov", ITALY, "D01", 0, 0))
            .unwrap_err();
        assert!(err.is_constraint_violation());
    }

    #[test]
    fn test_referenced_row_cannot_be_deleted() {
        let store = memory_store();
        let Seeded { repos, .. } = seeded(&store);

        repos
            .users
            .create(&User::new("ada@example.org", "Ada", "Lovelace", ITALY))
            .unwrap();

        let err = repos.countries.delete(&ITALY.to_string()).unwrap_err();
        assert!(err.is_constraint_violation());
        assert!(repos.countries.exists(&ITALY.to_string()).unwrap());
    }

    #[test]
    fn test_validation_failure_never_reaches_store() {
        let store = memory_store();
        let Seeded { repos, .. } = seeded(&store);

        let err = repos.countries.create(&Country::new("  ", 5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = repos.countries.create(&Country::new("Chile", -5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = repos
            .records
            .create(&Record::new(SERVANT, ITALY, "D01", -1, 3))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = repos.countries.update(&Country::new(ITALY, -1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        assert_eq!(repos.countries.list_all().unwrap().len(), 1);
        assert_eq!(
            repos.countries.get(&ITALY.to_string()).unwrap(),
            Some(Country::new(ITALY, 59_000_000))
        );
        assert!(repos.records.list_all().unwrap().is_empty());
    }
}

#[cfg(test)]
mod rekey_tests {
    use super::fixtures::*;
    use crate::domain::{Doctor, Patient, PatientDisease, Specialize};
    use crate::repositories::{PatientDiseaseKey, SpecializeKey};

    #[test]
    fn test_rekey_moves_specialization() {
        let store = memory_store();
        let Seeded { repos, viral } = seeded(&store);
        repos.doctors.create(&Doctor::new("second@clinic.it", "PhD")).unwrap();

        let old = repos
            .specializations
            .create(&Specialize::new(viral, DOCTOR))
            .unwrap();
        let moved = Specialize::new(viral, "second@clinic.it");

        assert_eq!(repos.specializations.rekey(&old, &moved).unwrap(), 1);
        assert_eq!(repos.specializations.get(&old).unwrap(), None);
        assert_eq!(
            repos
                .specializations
                .get(&SpecializeKey::new(viral, "second@clinic.it"))
                .unwrap(),
            Some(moved)
        );
    }

    #[test]
    fn test_rekey_of_missing_row_writes_nothing() {
        let store = memory_store();
        let Seeded { repos, .. } = seeded(&store);

        let missing = PatientDiseaseKey::new(PATIENT, "D01");
        let replacement = PatientDisease::new(PATIENT, "D02");

        assert_eq!(repos.patient_diseases.rekey(&missing, &replacement).unwrap(), 0);
        assert!(repos.patient_diseases.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_failed_insert_keeps_old_row() {
        let store = memory_store();
        let Seeded { repos, .. } = seeded(&store);

        let original = PatientDisease::new(PATIENT, "D01");
        let key = repos.patient_diseases.create(&original).unwrap();

        let err = repos
            .patient_diseases
            .rekey(&key, &PatientDisease::new(PATIENT, "NOPE"))
            .unwrap_err();
        assert!(err.is_constraint_violation());
        assert_eq!(repos.patient_diseases.get(&key).unwrap(), Some(original));
    }

    #[test]
    fn test_rekey_onto_taken_key_rolls_back() {
        let store = memory_store();
        let Seeded { repos, .. } = seeded(&store);

        let first = repos
            .patient_diseases
            .create(&PatientDisease::new(PATIENT, "D01"))
            .unwrap();
        repos
            .patient_diseases
            .create(&PatientDisease::new(PATIENT, "D02"))
            .unwrap();

        let err = repos
            .patient_diseases
            .rekey(&first, &PatientDisease::new(PATIENT, "D02"))
            .unwrap_err();
        assert!(err.is_constraint_violation());
        assert_eq!(repos.patient_diseases.list_all().unwrap().len(), 2);
    }

    #[test]
    fn test_referenced_patient_cannot_be_rekeyed() {
        let store = memory_store();
        let Seeded { repos, .. } = seeded(&store);
        repos
            .patient_diseases
            .create(&PatientDisease::new(PATIENT, "D01"))
            .unwrap();

        let err = repos
            .patients
            .rekey(&PATIENT.to_string(), &Patient::new("renamed@mail.it"))
            .unwrap_err();
        assert!(err.is_constraint_violation());
        assert!(repos.patients.exists(&PATIENT.to_string()).unwrap());
        assert!(!repos.patients.exists(&"renamed@mail.it".to_string()).unwrap());
    }

    #[test]
    fn test_unreferenced_patient_rekey() {
        let store = memory_store();
        let Seeded { repos, .. } = seeded(&store);

        let renamed = Patient::new("renamed@mail.it");
        assert_eq!(repos.patients.rekey(&PATIENT.to_string(), &renamed).unwrap(), 1);
        assert_eq!(
            repos.patients.get(&"renamed@mail.it".to_string()).unwrap(),
            Some(renamed)
        );
    }

    #[test]
    fn test_invalid_replacement_is_rejected_up_front() {
        let store = memory_store();
        let Seeded { repos, .. } = seeded(&store);

        let err = repos
            .patients
            .rekey(&PATIENT.to_string(), &Patient::new(""))
            .unwrap_err();
        assert!(matches!(err, crate::error::AppError::Validation(_)));
        assert!(repos.patients.exists(&PATIENT.to_string()).unwrap());
    }
}

#[cfg(test)]
mod timeout_tests {
    use std::time::{Duration, Instant};

    use super::fixtures::*;
    use crate::domain::Country;
    use crate::repositories::{EntityRepository, SqliteCountryRepository};

    #[test]
    fn test_exhausted_pool_is_timeout() {
        let store = memory_store_with_timeout(Duration::from_millis(50));
        let repo = SqliteCountryRepository::new(store.clone());
        let _held = store.pool().get().unwrap();

        let err = repo.list_all().unwrap_err();
        assert!(err.is_timeout(), "expected timeout, got {}", err);
    }

    #[test]
    fn test_caller_timeout_overrides_store_default() {
        let store = memory_store_with_timeout(Duration::from_secs(30));
        let repo = SqliteCountryRepository::new(store.with_timeout(Duration::from_millis(50)));
        let _held = store.pool().get().unwrap();

        let started = Instant::now();
        let err = repo.get(&ITALY.to_string()).unwrap_err();
        assert!(err.is_timeout());
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_held_write_lock_is_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let store = file_store(&dir, 2, Duration::from_millis(100));
        let repo = SqliteCountryRepository::new(store.clone());

        let holder = store.pool().get().unwrap();
        holder.execute_batch("BEGIN IMMEDIATE").unwrap();

        let err = repo.create(&Country::new("Chile", 19_000_000)).unwrap_err();
        assert!(err.is_timeout(), "expected timeout, got {}", err);

        holder.execute_batch("ROLLBACK").unwrap();
        drop(holder);

        repo.create(&Country::new("Chile", 19_000_000)).unwrap();
        assert!(repo.exists(&"Chile".to_string()).unwrap());
    }
}

#[cfg(test)]
mod concurrency_tests {
    use std::sync::Barrier;
    use std::time::Duration;

    use super::fixtures::*;
    use crate::domain::Country;
    use crate::error::ErrorKind;
    use crate::repositories::{EntityRepository, SqliteCountryRepository};

    #[test]
    fn test_concurrent_duplicate_creates() {
        let dir = tempfile::tempdir().unwrap();
        let store = file_store(&dir, 4, Duration::from_secs(5));
        let repo = SqliteCountryRepository::new(store);
        let barrier = Barrier::new(2);

        let create = || {
            barrier.wait();
            repo.create(&Country::new("Chile", 19_000_000))
        };

        let results = std::thread::scope(|scope| {
            let first = scope.spawn(create);
            let second = scope.spawn(create);
            vec![first.join().unwrap(), second.join().unwrap()]
        });

        let successes = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(e) if e.kind() == ErrorKind::ConstraintViolation))
            .count();
        assert_eq!(successes, 1);
        assert_eq!(conflicts, 1);
        assert_eq!(repo.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_parallel_readers_share_the_pool() {
        let dir = tempfile::tempdir().unwrap();
        let store = file_store(&dir, 4, Duration::from_secs(5));
        let Seeded { repos, .. } = seeded(&store);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    let italy = repos.countries.get(&ITALY.to_string()).unwrap();
                    assert_eq!(italy.map(|c| c.population), Some(59_000_000));
                });
            }
        });
    }
}
