//! Row types shared by the SQLite repositories.

use std::collections::HashMap;
use std::hash::Hash;

use crate::domain::company::Company;
use crate::domain::dev::Dev;
use crate::domain::foundation::{CompanyId, DevId, FreebieId};
use crate::domain::freebie::{Freebie, FreebieDetails};

/// Database row representation of a freebie.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct FreebieRow {
    id: i64,
    item_name: String,
    value: i64,
    dev_id: i64,
    company_id: i64,
}

impl From<FreebieRow> for Freebie {
    fn from(row: FreebieRow) -> Self {
        Freebie::reconstitute(
            FreebieId::from_i64(row.id),
            row.item_name,
            row.value,
            DevId::from_i64(row.dev_id),
            CompanyId::from_i64(row.company_id),
        )
    }
}

/// Freebie row joined with the holder's and giver's names.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct FreebieDetailsRow {
    #[sqlx(flatten)]
    freebie: FreebieRow,
    dev_name: String,
    company_name: String,
}

impl From<FreebieDetailsRow> for FreebieDetails {
    fn from(row: FreebieDetailsRow) -> Self {
        FreebieDetails {
            freebie: row.freebie.into(),
            dev_name: row.dev_name,
            company_name: row.company_name,
        }
    }
}

/// Database row representation of a company, without its freebies.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct CompanyRow {
    id: i64,
    name: String,
    founding_year: i32,
}

impl CompanyRow {
    pub(super) fn id(&self) -> CompanyId {
        CompanyId::from_i64(self.id)
    }

    pub(super) fn into_company(self, freebies: Vec<Freebie>) -> Company {
        Company::reconstitute(CompanyId::from_i64(self.id), self.name, self.founding_year, freebies)
    }
}

/// Database row representation of a dev, without its freebies.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct DevRow {
    id: i64,
    name: String,
}

impl DevRow {
    pub(super) fn id(&self) -> DevId {
        DevId::from_i64(self.id)
    }

    pub(super) fn into_dev(self, freebies: Vec<Freebie>) -> Dev {
        Dev::reconstitute(DevId::from_i64(self.id), self.name, freebies)
    }
}

/// Bucket freebies by `key`, keeping their relative order.
pub(super) fn group_freebies<K, F>(rows: Vec<FreebieRow>, key: F) -> HashMap<K, Vec<Freebie>>
where
    K: Eq + Hash,
    F: Fn(&Freebie) -> K,
{
    let mut grouped: HashMap<K, Vec<Freebie>> = HashMap::new();
    for row in rows {
        let freebie = Freebie::from(row);
        grouped.entry(key(&freebie)).or_default().push(freebie);
    }
    grouped
}
