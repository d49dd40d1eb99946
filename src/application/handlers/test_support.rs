//! Fixtures shared by handler tests.

use std::sync::Arc;

use crate::adapters::SqliteStore;
use crate::domain::company::{Company, NewCompany};
use crate::domain::dev::{Dev, NewDev};
use crate::ports::{CompanyRepository, DevRepository, FreebieRepository};

pub(crate) struct Fixture {
    pub companies: Arc<dyn CompanyRepository>,
    pub devs: Arc<dyn DevRepository>,
    pub freebies: Arc<dyn FreebieRepository>,
}

impl Fixture {
    pub async fn new() -> Self {
        let store = SqliteStore::in_memory().await.unwrap();
        Self {
            companies: Arc::new(store.companies()),
            devs: Arc::new(store.devs()),
            freebies: Arc::new(store.freebies()),
        }
    }

    pub async fn company(&self, name: &str, founding_year: i32) -> Company {
        self.companies
            .create(&NewCompany::new(name, founding_year))
            .await
            .unwrap()
    }

    pub async fn dev(&self, name: &str) -> Dev {
        self.devs.create(&NewDev::new(name)).await.unwrap()
    }
}
