//! PLC database: production models and the PLC memory log

use table_derive::model;

/// A production model an equipment can run
#[model]
#[table(name = "model")]
pub struct PlcModel {
    #[primary_key]
    pub id: i32,
    pub line_id: i32,
    pub equipment_id: i32,
    pub model: i32,
    pub name: String,
    pub description: String,
}

/// Named PLC memory address per equipment
#[model]
#[table(name = "memorymapping")]
pub struct MemoryMapping {
    #[primary_key]
    pub id: i32,
    pub line_id: i32,
    pub equipment_id: i32,
    pub name: String,
}

/// Values read from PLC memory, newest has the highest id
#[model]
#[table(name = "log")]
pub struct PlcLog {
    #[primary_key]
    pub id: i32,
    pub mm_id: i32,
    pub value: String,
}
