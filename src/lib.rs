//! packsmith is a declarative authoring layer for Minecraft datapacks.
//! A pack is described as nested namespace, directory and file scopes with
//! content emitted into the currently open file; the builder compiles that
//! description into the fixed `data/<namespace>/<category>/...` layout,
//! batching large conditional blocks into generated auxiliary files.

/// The build driver and scope manager
pub mod builder;

/// Command-line driver glue for pack binaries
pub mod cli;

/// Command value objects (NBT literals, selectors, scores)
pub mod cmd;

/// Pack configuration loading (packsmith.json)
pub mod config;

/// Fixed names and limits shared across modules
pub mod constants;

/// Content items and the serializers that write them
pub mod content;

/// Scope state and per-build counters
pub mod context;

/// Error types and handling for the packsmith library
pub mod error;

/// The conditional-execution compiler
pub mod execute;

/// Logger initialization
pub mod logger;

/// Output path and resource identifier derivation
pub mod path;

/// References to files created during a build
pub mod resource;
