//! The build driver and scope manager.
//! A `Builder` owns the state of one build invocation: the output root, the
//! current scope, the single open file, the monotonic counters and the
//! generated-name registry. Scopes are entered with closure-taking methods
//! so that the prior state is always restored on exit, including when the
//! closure fails.

use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::Config;
use crate::constants::{
    DATA_DIR, FUNCTIONS_CATEGORY, HEADER_MSG, JSON_EXT, MCFUNCTION_EXT, TAGS_CATEGORY,
    TAG_COUNTER, VAR_COUNTER,
};
use crate::content::{Content, ContentHandler};
use crate::context::{Context, Counters, FileMode};
use crate::error::{Error, Result};
use crate::execute::Guard;
use crate::path;
use crate::resource::{FunctionResource, Resource};

/// The currently open file together with its bound serializer.
pub(crate) struct Sink {
    pub(crate) file: File,
    pub(crate) handler: ContentHandler,
}

/// State of one build invocation.
///
/// Exactly one file may be open at a time; entering a file scope while one
/// is open is a `StateError`. Counters and the generated-name registry live
/// for the whole invocation and are never shared across builds.
pub struct Builder {
    pub(crate) root_dir: PathBuf,
    pub(crate) generated_dir: String,
    pub(crate) ctx: Context,
    pub(crate) sink: Option<Sink>,
    pub(crate) counters: Counters,
    pub(crate) registry: HashSet<String>,
    pub(crate) guards: Vec<Guard>,
}

impl Builder {
    /// Creates a fresh builder for one build invocation.
    pub fn new<P: AsRef<Path>>(output_root: P, config: &Config) -> Self {
        Self {
            root_dir: output_root.as_ref().to_path_buf(),
            generated_dir: config.generated_dir.clone(),
            ctx: Context::default(),
            sink: None,
            counters: Counters::new(),
            registry: HashSet::new(),
            guards: Vec::new(),
        }
    }

    /// Base directory of the output tree.
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Snapshot of the current scope.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Enters a namespace scope for the extent of `f`.
    ///
    /// Ensures `data/<name>` exists on disk (idempotent create) and restores
    /// the previous namespace on exit.
    ///
    /// # Errors
    /// * `Error::StateError` if a file is currently open
    /// * `Error::ConfigError` if `name` is empty
    pub fn namespace<T, F>(&mut self, name: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut Builder) -> Result<T>,
    {
        self.ensure_no_open_file("a namespace scope")?;
        if name.is_empty() {
            return Err(Error::ConfigError("Namespace must not be empty".to_string()));
        }
        debug!("Entering namespace '{}'", name);
        std::fs::create_dir_all(self.root_dir.join(DATA_DIR).join(name))?;
        let prev = self.ctx.namespace.replace(name.to_string());
        let result = f(self);
        self.ctx.namespace = prev;
        result
    }

    /// Enters a subdirectory scope for the extent of `f`.
    ///
    /// The segment may itself contain `/` separators; a compound segment is
    /// equivalent to the same names nested individually.
    ///
    /// # Errors
    /// * `Error::StateError` if a file is currently open
    pub fn directory<T, F>(&mut self, name: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut Builder) -> Result<T>,
    {
        self.ensure_no_open_file("a directory scope")?;
        debug!("Entering directory '{}'", name);
        self.ctx.subdir_stack.push(name.to_string());
        let result = f(self);
        self.ctx.subdir_stack.pop();
        result
    }

    /// Enters a file scope for the extent of `f`.
    ///
    /// Resolves the output path, creates parent directories, opens the file
    /// per `mode` and installs `handler` as the active serializer. When
    /// `header` is true and the mode is `Write`, a provenance comment and a
    /// blank line are written before any user content. The file is closed
    /// and the prior scope restored on every exit path.
    ///
    /// # Returns
    /// * `Result<Resource>` - Reference to the created file
    ///
    /// # Errors
    /// * `Error::StateError` if a file is already open
    /// * `Error::ConfigError` if namespace or category is unset
    pub fn file<F>(
        &mut self,
        name: &str,
        category: &str,
        mode: FileMode,
        handler: ContentHandler,
        header: bool,
        f: F,
    ) -> Result<Resource>
    where
        F: FnOnce(&mut Builder) -> Result<()>,
    {
        if self.sink.is_some() {
            return Err(Error::StateError(
                "already in a file context, close the current file first".to_string(),
            ));
        }
        let prev_category = self.ctx.category.replace(category.to_string());
        let prev_file = self.ctx.file_name.replace(name.to_string());
        let result = self.open_and_run(mode, handler, header, f);
        self.ctx.category = prev_category;
        self.ctx.file_name = prev_file;
        result
    }

    fn open_and_run<F>(
        &mut self,
        mode: FileMode,
        handler: ContentHandler,
        header: bool,
        f: F,
    ) -> Result<Resource>
    where
        F: FnOnce(&mut Builder) -> Result<()>,
    {
        let path = path::resolve(
            &self.root_dir,
            self.ctx.namespace.as_deref(),
            self.ctx.category.as_deref(),
            &self.ctx.subdir_stack,
            self.ctx.file_name.as_deref(),
        )?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        debug!("Opening {} ({:?})", path.display(), mode);
        let file = match mode {
            FileMode::Write => File::create(&path)?,
            FileMode::Append => OpenOptions::new().create(true).append(true).open(&path)?,
        };
        let resource = self.current_resource_id()?;
        self.sink = Some(Sink { file, handler });

        let header_result = if header && mode == FileMode::Write {
            self.sink_write_raw(format!("# {}\n\n", HEADER_MSG).as_bytes())
        } else {
            Ok(())
        };
        let result = header_result.and_then(|_| f(self));
        // closes the file on success and failure alike
        self.sink = None;
        result?;
        Ok(Resource::new(resource))
    }

    /// Creates a line-oriented `.mcfunction` file under `functions`,
    /// header included.
    pub fn mcfunction<F>(&mut self, name: &str, f: F) -> Result<FunctionResource>
    where
        F: FnOnce(&mut Builder) -> Result<()>,
    {
        let name = with_extension(name, MCFUNCTION_EXT);
        let resource = self.file(
            &name,
            FUNCTIONS_CATEGORY,
            FileMode::Write,
            ContentHandler::Line,
            true,
            f,
        )?;
        Ok(FunctionResource::new(resource.as_str()))
    }

    /// Creates a structured `.json` file under the given category.
    pub fn json_file<F>(&mut self, name: &str, category: &str, f: F) -> Result<Resource>
    where
        F: FnOnce(&mut Builder) -> Result<()>,
    {
        let name = with_extension(name, JSON_EXT);
        self.file(
            &name,
            category,
            FileMode::Write,
            ContentHandler::Structured,
            false,
            f,
        )
    }

    /// Creates a tag file at `tags/<tag_type>/<name>.json`.
    pub fn tag<F>(&mut self, name: &str, tag_type: &str, f: F) -> Result<Resource>
    where
        F: FnOnce(&mut Builder) -> Result<()>,
    {
        self.directory(tag_type, |b| b.json_file(name, TAGS_CATEGORY, f))
    }

    /// Creates a function tag file (`tags/functions/<name>.json`).
    pub fn function_tag<F>(&mut self, name: &str, f: F) -> Result<Resource>
    where
        F: FnOnce(&mut Builder) -> Result<()>,
    {
        self.tag(name, "functions", f)
    }

    /// Creates a block tag file (`tags/blocks/<name>.json`).
    pub fn block_tag<F>(&mut self, name: &str, f: F) -> Result<Resource>
    where
        F: FnOnce(&mut Builder) -> Result<()>,
    {
        self.tag(name, "blocks", f)
    }

    /// Creates an item tag file (`tags/items/<name>.json`).
    pub fn item_tag<F>(&mut self, name: &str, f: F) -> Result<Resource>
    where
        F: FnOnce(&mut Builder) -> Result<()>,
    {
        self.tag(name, "items", f)
    }

    /// Emits a content item into the current scope.
    ///
    /// Inside a conditional block the item is routed through the innermost
    /// guard; otherwise it is serialized by the open file's handler.
    ///
    /// # Errors
    /// * `Error::StateError` if no file is open and no guard is active
    /// * `Error::WriteError` if the handler cannot serialize the item
    pub fn write(&mut self, item: impl Into<Content>) -> Result<()> {
        let item = item.into();
        if !self.guards.is_empty() {
            let statements = crate::execute::statements_from(item)?;
            let depth = self.guards.len();
            for statement in statements {
                self.emit(depth, statement)?;
            }
            return Ok(());
        }
        let sink = self
            .sink
            .as_mut()
            .ok_or_else(|| Error::StateError("no opened files to write to".to_string()))?;
        sink.handler.handle(&mut sink.file, &item)
    }

    /// Returns a fresh, invocation-unique entity tag name.
    pub fn unique_tag_name(&mut self) -> String {
        format!("ps_tag_{}", self.counters.next(TAG_COUNTER))
    }

    /// Returns a fresh, invocation-unique storage variable name.
    pub fn unique_var_name(&mut self) -> String {
        format!("var{}", self.counters.next(VAR_COUNTER))
    }

    /// Resource identifier of the currently open file.
    pub(crate) fn current_resource_id(&self) -> Result<String> {
        let namespace = self.ctx.namespace.as_deref().ok_or_else(|| {
            Error::ConfigError(
                "Namespace not set! (e.g. pack/data/<namespace>/functions/etc)".to_string(),
            )
        })?;
        let stem = self
            .ctx
            .file_stem()
            .ok_or_else(|| Error::StateError("no opened files to write to".to_string()))?;
        Ok(path::to_resource_id(namespace, &self.ctx.subdir_stack, stem))
    }

    /// Writes one raw line plus newline directly to the open file,
    /// bypassing handler normalization.
    pub(crate) fn sink_write_line(&mut self, line: &str) -> Result<()> {
        self.sink_write_raw(line.as_bytes())?;
        self.sink_write_raw(b"\n")
    }

    fn sink_write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        let sink = self
            .sink
            .as_mut()
            .ok_or_else(|| Error::StateError("no opened files to write to".to_string()))?;
        sink.file.write_all(bytes)?;
        Ok(())
    }

    fn ensure_no_open_file(&self, what: &str) -> Result<()> {
        if self.sink.is_some() || self.ctx.file_name.is_some() {
            return Err(Error::StateError(format!(
                "cannot enter {} while a file is open, try reordering your scopes",
                what
            )));
        }
        Ok(())
    }
}

/// Runs one build invocation: a fresh `Builder` (fresh counters and
/// registry) is handed to `callback` exactly once.
///
/// # Arguments
/// * `output_root` - Base directory the output tree is written under
/// * `config` - Pack configuration; the core reads `generated_dir`
/// * `callback` - Pack description to evaluate
pub fn build<P, F>(output_root: P, config: &Config, callback: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut Builder) -> Result<()>,
{
    let mut builder = Builder::new(output_root, config);
    callback(&mut builder)
}

fn with_extension(name: &str, ext: &str) -> String {
    if name.ends_with(ext) {
        name.to_string()
    } else {
        format!("{}{}", name, ext)
    }
}
