pub mod sheets;

pub use sheets::{GoogleSheets, SheetValues, SheetsError, WriteAck};
