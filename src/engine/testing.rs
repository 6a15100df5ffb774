//! Record fixtures for engine tests

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::models::Equipment;

/// A record with only an id and a creation time
pub fn record() -> Equipment {
    Equipment {
        id: Uuid::new_v4(),
        equipment_type: None,
        marque: None,
        modele: None,
        direction: None,
        bureau: None,
        numero_serie: None,
        statut: None,
        date: None,
        date_added: Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
    }
}

pub struct RecordBuilder {
    record: Equipment,
}

impl RecordBuilder {
    pub fn new(equipment_type: &str, marque: &str) -> Self {
        let mut record = record();
        record.equipment_type = Some(equipment_type.to_string());
        record.marque = Some(marque.to_string());
        Self { record }
    }

    pub fn blank() -> Self {
        Self { record: record() }
    }

    pub fn modele(mut self, modele: &str) -> Self {
        self.record.modele = Some(modele.to_string());
        self
    }

    pub fn direction(mut self, direction: &str) -> Self {
        self.record.direction = Some(direction.to_string());
        self
    }

    pub fn bureau(mut self, bureau: &str) -> Self {
        self.record.bureau = Some(bureau.to_string());
        self
    }

    pub fn serial(mut self, serial: &str) -> Self {
        self.record.numero_serie = Some(serial.to_string());
        self
    }

    pub fn statut(mut self, statut: &str) -> Self {
        self.record.statut = Some(statut.to_string());
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.record.date = Some(date.to_string());
        self
    }

    pub fn added(mut self, at: DateTime<Utc>) -> Self {
        self.record.date_added = at;
        self
    }

    pub fn build(self) -> Equipment {
        self.record
    }
}

/// Shorthand for the direction/bureau/status triple used by grouping tests
pub fn placed(direction: &str, bureau: &str, statut: &str) -> Equipment {
    RecordBuilder::blank()
        .direction(direction)
        .bureau(bureau)
        .statut(statut)
        .build()
}
