//! Shared fixtures for the stage tests: an in-memory filesystem that counts
//! writes, a recording reporter, and a harness wiring them to the mocks.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::{
    application::{
        Adapters, ApplicationError, ProvisionSettings, ScaffoldService,
        ports::{
            ContentStore, Filesystem, MockCommandRunner, MockDownloader, MockToolLocator,
            ProgressReporter, Stage, StepStatus,
        },
    },
    domain::{Anchor, CommandOutput, EntryKind, Platform, RelativePath, layout::LAYOUT},
    error::HatchResult,
};

#[derive(Default)]
struct FsState {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    executables: HashSet<PathBuf>,
    generations: HashMap<PathBuf, u64>,
    writes: usize,
}

impl FsState {
    fn add_dirs(&mut self, path: &Path) -> usize {
        let mut created = 0;
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() && self.dirs.insert(ancestor.to_path_buf()) {
                created += 1;
            }
        }
        created
    }

    fn store(&mut self, path: &Path, bytes: Vec<u8>) {
        self.files.insert(path.to_path_buf(), bytes);
        *self.generations.entry(path.to_path_buf()).or_default() += 1;
        self.writes += 1;
    }

    fn parent_ok(&self, path: &Path) -> HatchResult<()> {
        match path.parent() {
            Some(parent) if !self.dirs.contains(parent) => Err(fs_error(parent, "not a directory")),
            _ => Ok(()),
        }
    }
}

fn fs_error(path: &Path, reason: &str) -> crate::error::HatchError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

/// In-memory [`Filesystem`]. Clones share state.
#[derive(Clone, Default)]
pub struct FakeFs {
    state: Arc<Mutex<FsState>>,
}

impl FakeFs {
    fn lock(&self) -> std::sync::MutexGuard<'_, FsState> {
        self.state.lock().unwrap()
    }

    /// Seed a file without counting it as a write.
    pub fn put_file(&self, path: &str, content: &str) {
        let mut state = self.lock();
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            state.add_dirs(parent);
        }
        state.files.insert(path.clone(), content.as_bytes().to_vec());
        *state.generations.entry(path).or_default() += 1;
    }

    pub fn put_dir(&self, path: &str) {
        self.lock().add_dirs(Path::new(path));
    }

    pub fn read(&self, path: &str) -> Option<String> {
        self.lock()
            .files
            .get(Path::new(path))
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    pub fn exists_str(&self, path: &str) -> bool {
        self.exists(Path::new(path))
    }

    pub fn is_executable(&self, path: &str) -> bool {
        self.lock().executables.contains(Path::new(path))
    }

    /// How many times a file has been written (0 if it never existed).
    pub fn generation(&self, path: &str) -> u64 {
        self.lock()
            .generations
            .get(Path::new(path))
            .copied()
            .unwrap_or(0)
    }

    /// Mutations performed through the [`Filesystem`] port.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }
}

impl Filesystem for FakeFs {
    fn create_dir_all(&self, path: &Path) -> HatchResult<()> {
        let mut state = self.lock();
        if state.files.contains_key(path) {
            return Err(fs_error(path, "a file exists at this path"));
        }
        let created = state.add_dirs(path);
        state.writes += created;
        Ok(())
    }

    fn touch(&self, path: &Path) -> HatchResult<bool> {
        let mut state = self.lock();
        if state.files.contains_key(path) || state.dirs.contains(path) {
            return Ok(false);
        }
        state.parent_ok(path)?;
        state.store(path, Vec::new());
        Ok(true)
    }

    fn write_file(&self, path: &Path, content: &str) -> HatchResult<()> {
        self.write_bytes(path, content.as_bytes())
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> HatchResult<()> {
        let mut state = self.lock();
        state.parent_ok(path)?;
        state.store(path, content.to_vec());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> HatchResult<String> {
        self.lock()
            .files
            .get(path)
            .map(|b| String::from_utf8_lossy(b).into_owned())
            .ok_or_else(|| fs_error(path, "no such file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> HatchResult<u64> {
        let mut state = self.lock();
        let bytes = state
            .files
            .get(from)
            .cloned()
            .ok_or_else(|| fs_error(from, "no such file"))?;
        state.parent_ok(to)?;
        let len = bytes.len() as u64;
        state.store(to, bytes);
        Ok(len)
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> HatchResult<()> {
        let mut state = self.lock();
        if !state.files.contains_key(path) {
            return Err(fs_error(path, "no such file"));
        }
        if executable {
            state.executables.insert(path.to_path_buf());
        } else {
            state.executables.remove(path);
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.lock();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.lock().dirs.contains(path)
    }

    fn canonicalize(&self, path: &Path) -> HatchResult<PathBuf> {
        if self.exists(path) {
            Ok(path.to_path_buf())
        } else {
            Err(fs_error(path, "no such file or directory"))
        }
    }
}

/// Records every status line.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    lines: Arc<Mutex<Vec<(Stage, StepStatus, String)>>>,
}

impl RecordingReporter {
    pub fn count(&self, status: StepStatus) -> usize {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, s, _)| *s == status)
            .count()
    }
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, stage: Stage, status: StepStatus, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push((stage, status, message.to_string()));
    }
}

/// Payloads keyed by slash path.
struct MapContentStore(HashMap<String, String>);

impl ContentStore for MapContentStore {
    fn content(&self, _anchor: Anchor, path: &RelativePath) -> Option<&str> {
        self.0.get(&path.to_slash_string()).map(String::as_str)
    }
}

pub struct Harness {
    pub fs: FakeFs,
    pub runner: MockCommandRunner,
    pub locator: MockToolLocator,
    pub downloader: MockDownloader,
    pub reporter: RecordingReporter,
    pub settings: ProvisionSettings,
    pub content: HashMap<String, String>,
}

impl Harness {
    /// A harness whose filesystem holds an empty `/work` directory.
    pub fn new() -> Self {
        let fs = FakeFs::default();
        fs.put_dir("/work");

        let content = LAYOUT
            .iter()
            .filter(|e| e.kind == EntryKind::ContentFile)
            .map(|e| (e.path.to_string(), format!("payload of {}\n", e.path)))
            .collect();

        Self {
            fs,
            runner: MockCommandRunner::new(),
            locator: MockToolLocator::new(),
            downloader: MockDownloader::new(),
            reporter: RecordingReporter::default(),
            settings: ProvisionSettings {
                platform: Platform::new("linux", "x86_64"),
                ..ProvisionSettings::default()
            },
            content,
        }
    }

    /// Build a service. Mock expectations set so far move into it.
    pub fn service(&mut self) -> ScaffoldService {
        ScaffoldService::new(
            self.settings.clone(),
            Adapters {
                filesystem: Box::new(self.fs.clone()),
                runner: Box::new(std::mem::take(&mut self.runner)),
                locator: Box::new(std::mem::take(&mut self.locator)),
                downloader: Box::new(std::mem::take(&mut self.downloader)),
                content: Box::new(MapContentStore(self.content.clone())),
                reporter: Box::new(self.reporter.clone()),
            },
        )
    }

    /// Every command succeeds; `--version` reports Python 3.12.1.
    pub fn runner_ok(&mut self) {
        self.runner.expect_run().returning(|cmd| {
            if cmd.to_string().ends_with("--version") {
                Ok(version_ok("Python 3.12.1"))
            } else {
                Ok(success())
            }
        });
    }

    pub fn locate_npm(&mut self, found: bool) {
        self.locator
            .expect_locate()
            .returning(move |_| found.then(|| PathBuf::from("/usr/bin/npm")));
    }

    pub fn downloads_ok(&mut self) {
        self.downloader
            .expect_fetch()
            .returning(|url| Ok(format!("// {url}\n").into_bytes()));
    }
}

pub fn success() -> CommandOutput {
    CommandOutput {
        exit_code: Some(0),
        ..CommandOutput::default()
    }
}

pub fn version_ok(banner: &str) -> CommandOutput {
    CommandOutput {
        exit_code: Some(0),
        stdout: format!("{banner}\n"),
        stderr: String::new(),
    }
}
