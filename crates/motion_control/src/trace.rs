use serde::Serialize;
use std::error::Error;

/// One control cycle as seen from outside the controller.
#[derive(Debug, Serialize, Clone)]
pub struct CycleRecord {
    pub cycle: u64,
    pub target_vel: f64,
    pub current_vel: f64,
    pub error: f64,
    pub output: f64,
}

/// Collects per-cycle records and saves them as CSV.
///
/// Records are appended by a single caller, one cycle at a time.
#[derive(Debug)]
pub struct TraceRecorder {
    records: Vec<CycleRecord>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn record(&mut self, record: CycleRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[CycleRecord] {
        &self.records
    }

    pub fn save_to_csv(&self, filename: &str) -> Result<(), Box<dyn Error>> {
        let mut wtr = csv::Writer::from_path(filename)?;
        for record in &self.records {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        println!("Saved {} records to {}", self.records.len(), filename);
        Ok(())
    }
}

impl Default for TraceRecorder {
    fn default() -> Self {
        Self::new()
    }
}
