// src/application/state.rs

use std::sync::Arc;

use crate::db::Store;
use crate::domain::{
    Country, Discover, Disease, DiseaseType, Doctor, Patient, PatientDisease, PublicServant,
    Record, Specialize, User,
};
use crate::repositories::{EntityRepository, SqliteRepository};

/// Every entity repository the orchestrator needs.
/// All fields are Arc-wrapped for sharing across request handlers.
/// Built once in main.rs from the one store handle.
#[derive(Clone)]
pub struct Repositories {
    pub countries: Arc<dyn EntityRepository<Country>>,
    pub disease_types: Arc<dyn EntityRepository<DiseaseType>>,
    pub diseases: Arc<dyn EntityRepository<Disease>>,
    pub discoveries: Arc<dyn EntityRepository<Discover>>,
    pub users: Arc<dyn EntityRepository<User>>,
    pub public_servants: Arc<dyn EntityRepository<PublicServant>>,
    pub doctors: Arc<dyn EntityRepository<Doctor>>,
    pub specializations: Arc<dyn EntityRepository<Specialize>>,
    pub records: Arc<dyn EntityRepository<Record>>,
    pub patients: Arc<dyn EntityRepository<Patient>>,
    pub patient_diseases: Arc<dyn EntityRepository<PatientDisease>>,
}

impl Repositories {
    pub fn new(store: &Store) -> Self {
        Self {
            countries: Arc::new(SqliteRepository::<Country>::new(store.clone())),
            disease_types: Arc::new(SqliteRepository::<DiseaseType>::new(store.clone())),
            diseases: Arc::new(SqliteRepository::<Disease>::new(store.clone())),
            discoveries: Arc::new(SqliteRepository::<Discover>::new(store.clone())),
            users: Arc::new(SqliteRepository::<User>::new(store.clone())),
            public_servants: Arc::new(SqliteRepository::<PublicServant>::new(store.clone())),
            doctors: Arc::new(SqliteRepository::<Doctor>::new(store.clone())),
            specializations: Arc::new(SqliteRepository::<Specialize>::new(store.clone())),
            records: Arc::new(SqliteRepository::<Record>::new(store.clone())),
            patients: Arc::new(SqliteRepository::<Patient>::new(store.clone())),
            patient_diseases: Arc::new(SqliteRepository::<PatientDisease>::new(store.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::db::create_memory_pool;

    #[test]
    fn test_repositories_share_one_store() {
        let store = Store::new(Arc::new(create_memory_pool().unwrap()), Duration::from_secs(1));
        let repos = Repositories::new(&store);

        repos.countries.create(&Country::new("Peru", 33_000_000)).unwrap();
        let user = User::new("rosa@example.org", "Rosa", "Quispe", "Peru");
        repos.users.create(&user).unwrap();

        assert_eq!(repos.users.get(&"rosa@example.org".to_string()).unwrap(), Some(user));
        assert_eq!(repos.countries.list_all().unwrap().len(), 1);
    }
}
