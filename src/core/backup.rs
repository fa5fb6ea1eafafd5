use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, optionally compressed
    /// (`.tar.gz` on Unix, `.zip` on Windows). Returns the final path.
    pub fn backup(
        pool: &DbPool,
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.database);
        let dest_buf = expand_tilde(dest_file);
        let dest = dest_buf.as_path();

        // 1️⃣ Destination must be absolute
        if !dest.is_absolute() {
            return Err(AppError::validation(format!(
                "Backup path must be absolute: {dest_file}"
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Existing file → confirmation (or --force)
        ensure_writable(dest, force)?;

        // 4️⃣ Copy database
        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(dest)?;

            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            } else {
                println!("🗑️ Removed uncompressed backup: {}", dest.display());
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        // 6️⃣ Log in DB
        ttlog_soft(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

fn entry_name(path: &Path) -> AppResult<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("Invalid backup path: {}", path.display())))
}

/// Compress a backup using .zip
#[cfg(target_os = "windows")]
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name(path)?, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    println!("📦 Compressed: {}", zip_path.display());

    Ok(zip_path)
}

/// Compress a backup using .tar.gz
#[cfg(not(target_os = "windows"))]
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    use flate2::Compression;
    use flate2::write::GzEncoder;

    let gz_path = PathBuf::from(format!("{}.tar.gz", path.display()));
    let file = fs::File::create(&gz_path)?;

    let encoder = GzEncoder::new(file, Compression::default());
    let mut archive = tar::Builder::new(encoder);
    archive.append_path_with_name(path, entry_name(path)?)?;

    // finish tar, poi gzip
    let encoder = archive.into_inner()?;
    encoder.finish()?;

    println!("📦 Compressed: {}", gz_path.display());

    Ok(gz_path)
}
