// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data layer to accomplish one goal: turn a
// raw dataset file into train, validation and test tables.
//
// Rules for this layer:
//   - No classification or splitting logic here (Layer 4)
//   - No direct file formats here (Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The dataset preparation workflow
pub mod prepare_use_case;
