use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use log::info;
use reqwest::blocking::Client;

use super::loader::DEFAULT_FILE_NAME;

/// Fixed location of the zipped dataset. No auth, no checksum.
pub const DATASET_URL: &str =
    "https://cdn.openai.com/API/examples/data/vector_database_wikipedia_articles_embedded.zip";

/// Where to look for and place the dataset files.
#[derive(Debug, Clone)]
pub struct AcquireOptions {
    /// Directory holding the extracted `<name>.csv`.
    pub data_dir: PathBuf,
    /// Directory holding the downloaded `<name>.zip` until extraction.
    pub download_dir: PathBuf,
    /// Base file name without extension.
    pub file_name: String,
}

impl Default for AcquireOptions {
    fn default() -> Self {
        AcquireOptions {
            data_dir: PathBuf::from("./data"),
            download_dir: PathBuf::from("."),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl AcquireOptions {
    fn csv_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.csv", self.file_name))
    }

    fn zip_path(&self) -> PathBuf {
        self.download_dir.join(format!("{}.zip", self.file_name))
    }
}

/// Resolved on-disk locations after a successful [`ensure_dataset`] call.
#[derive(Debug, Clone)]
pub struct DatasetPaths {
    pub csv_path: PathBuf,
}

/// Make sure the dataset CSV exists under `data_dir`.
///
/// * CSV already present: nothing to do.
/// * Archive already present: extract it, no network call.
/// * Neither: download the archive from [`DATASET_URL`], then extract.
///
/// The archive is deleted only after extraction produced the expected CSV;
/// a failed extraction, or an archive holding some other file, leaves it on
/// disk and surfaces the error. No retries and no rollback of partial state.
pub fn ensure_dataset(opts: &AcquireOptions) -> Result<DatasetPaths> {
    let csv_path = opts.csv_path();
    let zip_path = opts.zip_path();

    if csv_path.is_file() {
        info!("dataset already present at {}", csv_path.display());
        return Ok(DatasetPaths { csv_path });
    }

    if zip_path.is_file() {
        info!("archive already downloaded, extracting {}", zip_path.display());
    } else {
        info!("dataset not found, downloading {DATASET_URL}");
        download_archive(DATASET_URL, &zip_path)?;
    }

    extract_archive(&zip_path, &opts.data_dir)?;
    ensure!(
        csv_path.is_file(),
        "archive {} did not contain {}",
        zip_path.display(),
        csv_path.display()
    );
    fs::remove_file(&zip_path)
        .with_context(|| format!("removing {}", zip_path.display()))?;
    info!("dataset extracted to {}", opts.data_dir.display());

    Ok(DatasetPaths { csv_path })
}

fn download_archive(url: &str, dest: &Path) -> Result<()> {
    let client = Client::builder()
        .build()
        .context("building HTTP client")?;
    let mut response = client
        .get(url)
        .send()
        .with_context(|| format!("requesting {url}"))?;
    ensure!(
        response.status().is_success(),
        "download of {url} failed with HTTP {}",
        response.status()
    );

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    // The archive is large; stream it to disk instead of buffering it
    let mut file =
        fs::File::create(dest).with_context(|| format!("creating {}", dest.display()))?;
    response
        .copy_to(&mut file)
        .with_context(|| format!("writing {}", dest.display()))?;
    Ok(())
}

fn extract_archive(zip_path: &Path, data_dir: &Path) -> Result<()> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("creating {}", data_dir.display()))?;
    let file = fs::File::open(zip_path)
        .with_context(|| format!("opening {}", zip_path.display()))?;
    let mut archive =
        zip::ZipArchive::new(file).with_context(|| format!("reading {}", zip_path.display()))?;
    archive
        .extract(data_dir)
        .with_context(|| format!("extracting into {}", data_dir.display()))
}
