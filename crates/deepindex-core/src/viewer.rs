use crate::error::DeepIndexError;
use crate::model::HitPage;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Location of the bundled viewer relative to the running executable.
pub const BUNDLED_VIEWER_DIR: &str = "SumatraPDF";
pub const BUNDLED_VIEWER_EXE: &str = "SumatraPDF.exe";

/// Something that can show a PDF, ideally at a given page.
pub trait PageOpener {
    /// Open `file`. Implementations that can navigate go to `page` and search
    /// for `keyword`; others just open the file.
    fn open_at(&self, file: &Path, page: HitPage, keyword: &str) -> Result<(), DeepIndexError>;

    /// Name of this opener (for diagnostics).
    fn name(&self) -> &str;
}

/// The viewer shipped next to the executable, launched with page and search
/// arguments.
pub struct BundledViewer {
    exe: PathBuf,
}

impl BundledViewer {
    pub fn new(exe: impl Into<PathBuf>) -> Self {
        BundledViewer { exe: exe.into() }
    }

    pub fn exe(&self) -> &Path {
        &self.exe
    }

    /// Command line arguments for opening `file`.
    ///
    /// `-page` is left out for an error-flagged hit and `-search` for an
    /// empty keyword.
    pub fn args(file: &Path, page: HitPage, keyword: &str) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        if let Some(n) = page.number() {
            args.push("-page".into());
            args.push(n.to_string().into());
        }
        let keyword = keyword.trim();
        if !keyword.is_empty() {
            args.push("-search".into());
            args.push(keyword.into());
        }
        args.push(file.as_os_str().to_os_string());
        args
    }
}

impl PageOpener for BundledViewer {
    fn open_at(&self, file: &Path, page: HitPage, keyword: &str) -> Result<(), DeepIndexError> {
        let args = Self::args(file, page, keyword);
        debug!("launching {} {:?}", self.exe.display(), args);
        Command::new(&self.exe)
            .args(&args)
            .spawn()
            .map_err(|e| DeepIndexError::ViewerLaunch(format!("{}: {}", self.exe.display(), e)))?;
        Ok(())
    }

    fn name(&self) -> &str {
        "bundled viewer"
    }
}

/// The operating system's default handler for PDF files. Page and keyword
/// are ignored.
pub struct SystemOpener;

impl PageOpener for SystemOpener {
    fn open_at(&self, file: &Path, _page: HitPage, _keyword: &str) -> Result<(), DeepIndexError> {
        debug!("opening {} with the default handler", file.display());
        open::that(file)
            .map_err(|e| DeepIndexError::ViewerLaunch(format!("{}: {}", file.display(), e)))
    }

    fn name(&self) -> &str {
        "default application"
    }
}

/// Path where the bundled viewer would be installed for an executable in `exe_dir`.
pub fn bundled_viewer_path(exe_dir: &Path) -> PathBuf {
    exe_dir.join(BUNDLED_VIEWER_DIR).join(BUNDLED_VIEWER_EXE)
}

/// Pick the opener for this run.
///
/// The bundled viewer is used only on Windows and only when it is installed
/// next to the executable; everything else falls back to the OS default
/// handler.
pub fn select_opener(os: &str, exe_dir: Option<&Path>) -> Box<dyn PageOpener> {
    if os == "windows" {
        if let Some(dir) = exe_dir {
            let exe = bundled_viewer_path(dir);
            if exe.is_file() {
                info!("using bundled viewer at {}", exe.display());
                return Box::new(BundledViewer::new(exe));
            }
        }
    }
    Box::new(SystemOpener)
}

/// [`select_opener`] for the current platform and executable location.
pub fn current_opener() -> Box<dyn PageOpener> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    select_opener(std::env::consts::OS, exe_dir.as_deref())
}
