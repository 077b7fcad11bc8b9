//! Tone file generation.
//!
//! [`generate`] writes one request to disk in a single sequential pass. The
//! bytes go to a temporary file next to the destination, which replaces the
//! destination only after everything has been flushed, so an interrupted run
//! never leaves a truncated WAV behind.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use sinewav_spec::ToneRequest;
use tempfile::{Builder, NamedTempFile};

use crate::error::{AudioError, AudioResult};
use crate::wav::{write_samples, SampleEncoding, WavHeader, HEADER_LEN};

/// Result of writing a tone file.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Path the file was written to.
    pub path: PathBuf,
    /// Header that was written.
    pub header: WavHeader,
    /// Sample encoding used for the data chunk.
    pub encoding: SampleEncoding,
    /// Number of sample indices synthesized.
    pub sample_count: u64,
    /// Total bytes written, header included.
    pub bytes_written: u64,
    /// BLAKE3 hash of the sample bytes (hex).
    pub pcm_hash: String,
}

impl GenerateResult {
    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.sample_count as f64 / self.header.sample_rate as f64
    }
}

/// Writer adapter that hashes everything passing through it.
struct HashingWriter<W> {
    inner: W,
    hasher: blake3::Hasher,
}

impl<W: Write> HashingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: blake3::Hasher::new(),
        }
    }

    fn finalize(&self) -> String {
        self.hasher.finalize().to_hex().to_string()
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Directory the temporary file is created in: the destination's parent.
fn staging_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Mode requested for new files; the process umask applies on top.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o666;

/// Creates the staging file next to `path`.
///
/// The file is opened with the mode an ordinary file creation would use,
/// not the owner-only default of a temporary file.
fn create_staging_file(path: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".sinewav-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(NEW_FILE_MODE));
    }
    builder.tempfile_in(staging_dir(path))
}

/// Synthesizes the tone described by `request` and writes it to `request.output`.
///
/// # Arguments
/// * `request` - Output path and tone parameters
/// * `encoding` - Sample layout of the data chunk
///
/// # Returns
/// Summary of the written file, or an error if the parameters are invalid or
/// the file could not be written
pub fn generate(request: &ToneRequest, encoding: SampleEncoding) -> AudioResult<GenerateResult> {
    let spec = &request.spec;
    spec.validate()?;

    let path = request.output();
    let to_output = |source: io::Error| AudioError::output(path, source);

    let mut staged = create_staging_file(path).map_err(to_output)?;

    let header = WavHeader::from_spec(spec);
    let (data_len, pcm_hash) = {
        let mut out = BufWriter::new(staged.as_file_mut());
        header.write_to(&mut out).map_err(to_output)?;

        let mut hashing = HashingWriter::new(&mut out);
        let data_len = write_samples(&mut hashing, spec, encoding).map_err(to_output)?;
        let pcm_hash = hashing.finalize();

        out.flush().map_err(to_output)?;
        (data_len, pcm_hash)
    };

    // A replaced file keeps its permissions.
    if let Ok(existing) = fs::metadata(path) {
        staged
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(to_output)?;
    }

    staged.as_file().sync_all().map_err(to_output)?;
    staged
        .persist(path)
        .map_err(|err| AudioError::output(path, err.error))?;

    Ok(GenerateResult {
        path: path.to_path_buf(),
        header,
        encoding,
        sample_count: spec.total_sample_count(),
        bytes_written: (HEADER_LEN as u64).saturating_add(data_len),
        pcm_hash,
    })
}
