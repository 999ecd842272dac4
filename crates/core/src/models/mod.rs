pub mod element;
pub mod entry;
pub mod input;
pub mod ledger;
pub mod percentage;
pub mod settings;
pub mod snapshot;
