// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV parsing and header mapping for proposition exports

mod proposition_reader;

pub use proposition_reader::PropositionReader;
