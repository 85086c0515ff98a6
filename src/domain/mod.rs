// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums, and traits that define the core
// concepts of the system.
//
// Rules for this layer:
//   - NO linfa / ndarray types allowed here
//   - NO file I/O or network calls
//   - Only plain Rust structs, enums, and traits
//
// Think of this layer as the "dictionary" of the system:
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The 32-entry feature table shared by training and serving
pub mod schema;

// Typed feature rows and cumulative form validation
pub mod features;

// Positive / negative outcome and its message
pub mod diagnosis;

// Pass-through name/email display data
pub mod contact;

// Core abstractions (traits) that other layers implement
pub mod traits;
