//! Common constants used throughout the packsmith library.

/// Top-level resource directory under the output root
pub const DATA_DIR: &str = "data";

/// Provenance comment written at the top of freshly created command files
pub const HEADER_MSG: &str = "Built with packsmith";

/// Default bucket directory for compiler-generated files
pub const DEFAULT_GENERATED_DIR: &str = "__generated__";

/// Default entrypoint source file name
pub const DEFAULT_ENTRYPOINT: &str = "pack.rs";

/// packsmith's configuration file name
pub const CONFIG_FILE: &str = "packsmith.json";

/// Pack marker file used to locate the pack root
pub const PACK_META_FILE: &str = "pack.mcmeta";

/// File extension for line-oriented command files
pub const MCFUNCTION_EXT: &str = ".mcfunction";

/// File extension for structured data files
pub const JSON_EXT: &str = ".json";

/// Category directory for command files
pub const FUNCTIONS_CATEGORY: &str = "functions";

/// Category directory for tag files
pub const TAGS_CATEGORY: &str = "tags";

/// Upper bound on generated-name candidates tried before giving up
pub const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Counter key for generated spill files
pub const GENERATED_FILES_COUNTER: &str = "generated_files";

/// Counter key for auto-named entity tags
pub const TAG_COUNTER: &str = "tag_count";

/// Counter key for auto-named storage variables
pub const VAR_COUNTER: &str = "var_count";
