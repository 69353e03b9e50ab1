//! The conditional-execution compiler.
//! A guarded block collects the statements emitted inside it. Small blocks
//! are flushed inline with the guard prefixed to each statement; the moment
//! a block grows past its limit the buffered statements spill into a
//! generated auxiliary file and the home file receives a single guarded
//! call to it.

use std::fs::File;
use std::io::Write;

use log::debug;

use crate::builder::Builder;
use crate::cmd::tokens_to_str;
use crate::constants::{GENERATED_FILES_COUNTER, HEADER_MSG, MAX_NAME_ATTEMPTS, MCFUNCTION_EXT};
use crate::content::{dedent, Content};
use crate::error::{Error, Result};
use crate::path;

/// Maximum number of statements inlined before a block spills.
pub const DEFAULT_INLINE_LIMIT: usize = 3;

/// One active guarded block.
///
/// `spill` doubles as the state flag: `None` while buffering, `Some(file)`
/// once the block has spilled. The spill file is compiler-internal and is
/// closed when the block exits.
pub(crate) struct Guard {
    conditions: String,
    limit: Option<usize>,
    buffer: Vec<String>,
    spill: Option<File>,
}

impl Builder {
    /// Runs `f` with every emitted statement guarded by `conditions`,
    /// batching past [`DEFAULT_INLINE_LIMIT`] statements into a generated
    /// file.
    ///
    /// Condition fragments are space-joined in the order given, with no
    /// reordering or deduplication.
    pub fn execute<F>(&mut self, conditions: &[&str], f: F) -> Result<()>
    where
        F: FnOnce(&mut Builder) -> Result<()>,
    {
        self.execute_with_limit(conditions, Some(DEFAULT_INLINE_LIMIT), f)
    }

    /// Like [`execute`](Builder::execute) with an explicit inline limit.
    ///
    /// A block emitting exactly `limit` statements never spills. With
    /// `limit = None` batching is disabled and every statement is written
    /// immediately with the guard prefixed.
    ///
    /// # Errors
    /// * `Error::StateError` if no file scope is open
    pub fn execute_with_limit<F>(
        &mut self,
        conditions: &[&str],
        limit: Option<usize>,
        f: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut Builder) -> Result<()>,
    {
        if self.sink.is_none() {
            return Err(Error::StateError(
                "conditional blocks require an open file to write to".to_string(),
            ));
        }
        self.guards.push(Guard {
            conditions: tokens_to_str(conditions),
            limit,
            buffer: Vec::new(),
            spill: None,
        });

        let result = f(self);
        let guard = match self.guards.pop() {
            Some(guard) => guard,
            None => {
                return Err(Error::StateError(
                    "conditional block scope was closed out of order".to_string(),
                ))
            }
        };
        // dropping the guard closes any spill file, also on failure
        result?;

        if guard.spill.is_none() {
            let depth = self.guards.len();
            for line in guard.buffer {
                let statement = tokens_to_str(&["execute", &guard.conditions, "run", &line]);
                self.emit(depth, statement)?;
            }
        }
        Ok(())
    }

    /// Routes one statement through the guard stack.
    ///
    /// `depth` is the number of guards still in play: `guards.len()` for a
    /// freshly emitted statement, less for output a guard produces toward
    /// its own home context.
    pub(crate) fn emit(&mut self, depth: usize, statement: String) -> Result<()> {
        let mut depth = depth;
        let mut statement = statement;
        loop {
            if depth == 0 {
                return self.sink_write_line(&statement);
            }
            let idx = depth - 1;
            match self.guards[idx].limit {
                // batching disabled: guard immediately, hand down the stack
                None => {
                    statement =
                        tokens_to_str(&["execute", &self.guards[idx].conditions, "run", &statement]);
                    depth = idx;
                }
                Some(limit) => {
                    if let Some(file) = self.guards[idx].spill.as_mut() {
                        file.write_all(statement.as_bytes())?;
                        file.write_all(b"\n")?;
                        return Ok(());
                    }
                    self.guards[idx].buffer.push(statement);
                    if self.guards[idx].buffer.len() > limit {
                        self.spill_guard(idx)?;
                    }
                    return Ok(());
                }
            }
        }
    }

    /// Moves a guard's buffered statements into a fresh generated file and
    /// writes the single guarded call line to the guard's home context.
    fn spill_guard(&mut self, idx: usize) -> Result<()> {
        let (stem, resource_id) = self.alloc_generated_name()?;

        let mut subdirs = self.ctx.subdir_stack.clone();
        subdirs.push(self.generated_dir.clone());
        let file_name = format!("{}{}", stem, MCFUNCTION_EXT);
        let path = path::resolve(
            &self.root_dir,
            self.ctx.namespace.as_deref(),
            self.ctx.category.as_deref(),
            &subdirs,
            Some(&file_name),
        )?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let buffer = std::mem::take(&mut self.guards[idx].buffer);
        debug!(
            "Spilling {} buffered statements to {}",
            buffer.len(),
            path.display()
        );
        let mut file = File::create(&path)?;
        write!(file, "# {}\n\n", HEADER_MSG)?;
        for line in &buffer {
            file.write_all(line.as_bytes())?;
            file.write_all(b"\n")?;
        }
        self.guards[idx].spill = Some(file);

        let conditions = self.guards[idx].conditions.clone();
        let call = format!("function {}", resource_id);
        self.emit(idx, tokens_to_str(&["execute", &conditions, "run", &call]))
    }

    /// Allocates a collision-free generated file stem for the current home
    /// file, advancing the shared counter until the registry accepts a
    /// candidate.
    fn alloc_generated_name(&mut self) -> Result<(String, String)> {
        let home_stem = self
            .ctx
            .file_stem()
            .ok_or_else(|| Error::StateError("no opened files to write to".to_string()))?
            .to_string();
        let namespace = self
            .ctx
            .namespace
            .clone()
            .ok_or_else(|| {
                Error::ConfigError(
                    "Namespace not set! (e.g. pack/data/<namespace>/functions/etc)".to_string(),
                )
            })?;
        let mut subdirs = self.ctx.subdir_stack.clone();
        subdirs.push(self.generated_dir.clone());

        for _ in 0..MAX_NAME_ATTEMPTS {
            let count = self.counters.next(GENERATED_FILES_COUNTER);
            let stem = format!("{}_{}", home_stem, count);
            let resource_id = path::to_resource_id(&namespace, &subdirs, &stem);
            if self.registry.insert(resource_id.clone()) {
                return Ok((stem, resource_id));
            }
        }
        Err(Error::NameCollisionExhausted { stem: home_stem, attempts: MAX_NAME_ATTEMPTS })
    }
}

/// Converts a content item emitted inside a guarded block into individual
/// statements: one per non-blank line.
///
/// # Errors
/// * `Error::WriteError` for structured data, which has no guarded form
pub(crate) fn statements_from(item: Content) -> Result<Vec<String>> {
    match item {
        Content::Text(text) => Ok(split_statements(&text)),
        Content::Block(lines) => {
            Ok(lines.iter().flat_map(|line| split_statements(line)).collect())
        }
        Content::Data(_) => Err(Error::WriteError(format!(
            "cannot conditionally execute {}",
            item.kind()
        ))),
    }
}

fn split_statements(text: &str) -> Vec<String> {
    dedent(text)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
