//! Reserved Switch
//!
//! Generates a decision procedure that recognizes whether a candidate string is
//! one of a fixed set of reserved words, and which one. The procedure branches
//! on length first, then on the most useful character columns, and is emitted
//! as C-like text calling primitives the surrounding recognizer defines.
//!
//! # Quick Start
//!
//! ```rust
//! use reserved_switch::core::ReservedWord;
//! use reserved_switch::generator::Generator;
//!
//! let words = vec![
//!     ReservedWord::new(0, "if").unwrap(),
//!     ReservedWord::new(1, "in").unwrap(),
//!     ReservedWord::new(2, "int").unwrap(),
//! ];
//!
//! let generator = Generator::default();
//! let tree = generator.build(&words).unwrap();
//! assert_eq!(tree.recognize("in"), Some(1));
//!
//! let code = generator.render(&tree);
//! assert!(code.contains("MATCH(2) /* int */"));
//! ```

// Core domain types
pub mod core;

// Decision tree construction
pub mod generator;

// Code emission
pub mod emit;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
