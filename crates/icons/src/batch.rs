//! Batch driver: render every configured size and write `icon<size>.png` files
//!
//! Runs sequentially and stops at the first failure. Files written before the
//! failure are left in place.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use icongen_config::BatchConfig;
use painting::Canvas;
use tracing::{debug, info, warn};

use crate::error::BatchError;
use crate::icon_set::IconSet;

/// Progress line printed after each file is written
pub fn created_line(path: &Path) -> String {
    format!("Created {}", path.display())
}

/// Render `render(size)` for every configured size into the output directory
///
/// Creates the directory if needed, overwrites existing files, and writes one
/// `Created <path>` line to `out` per file. Returns the written paths in order.
pub fn render_sizes<F, W>(
    render: F,
    config: &BatchConfig,
    out: &mut W,
) -> Result<Vec<PathBuf>, BatchError>
where
    F: Fn(u32) -> Canvas,
    W: Write,
{
    let output_dir = config.output_dir();
    fs::create_dir_all(output_dir).map_err(|source| BatchError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;
    debug!("output directory ready: {}", output_dir.display());

    let mut written = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let path = config.icon_path(size);
        let canvas = render(size);

        if let Err(source) = canvas.save_png(&path) {
            warn!(
                "stopping after {} of {} icons: {}",
                written.len(),
                config.sizes.len(),
                path.display()
            );
            return Err(BatchError::Save { path, source });
        }

        writeln!(out, "{}", created_line(&path))?;
        written.push(path);
    }

    Ok(written)
}

/// Write a whole icon set and its summary line
pub fn run<W: Write>(
    set: &IconSet,
    config: &BatchConfig,
    out: &mut W,
) -> Result<Vec<PathBuf>, BatchError> {
    info!(
        "generating {} icons {:?} into {}",
        set.name,
        config.sizes,
        config.output_dir().display()
    );

    let written = render_sizes(set.render, config, out)?;
    writeln!(out, "{}", set.summary)?;

    info!("wrote {} {} icons", written.len(), set.name);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_set::{GAMEPAD, X_LOGO, X_LOGO_BLOCK};
    use crate::logo::render_logo_a;
    use icongen_config::ICON_SIZES;

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_created_line_format() {
        let config = BatchConfig::default();
        let line = created_line(&config.icon_path(16));
        assert_eq!(line, format!("Created {}", Path::new("icons").join("icon16.png").display()));
        #[cfg(unix)]
        assert_eq!(line, "Created icons/icon16.png");
    }

    #[test]
    fn test_fresh_directory_gets_four_files() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("icons");
        let config = BatchConfig::new(&dir, ICON_SIZES);

        let mut out = Vec::<u8>::new();
        let written = run(&GAMEPAD, &config, &mut out).unwrap();

        assert_eq!(written.len(), 4);
        assert_eq!(
            file_names(&dir),
            vec!["icon128.png", "icon16.png", "icon32.png", "icon48.png"]
        );
        for size in ICON_SIZES {
            let image = image::open(config.icon_path(size)).unwrap();
            assert_eq!((image.width(), image.height()), (size, size));
            assert_eq!(image.color(), image::ColorType::Rgba8);
        }
    }

    #[test]
    fn test_rerun_overwrites() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("icons");
        let config = BatchConfig::new(&dir, ICON_SIZES);

        run(&GAMEPAD, &config, &mut std::io::sink()).unwrap();
        // Second run swaps the content: gamepad RGBA files become opaque logos
        run(&X_LOGO, &config, &mut std::io::sink()).unwrap();

        assert_eq!(file_names(&dir).len(), 4);
        for size in ICON_SIZES {
            let image = image::open(config.icon_path(size)).unwrap();
            assert_eq!(image.color(), image::ColorType::Rgb8);
            assert_eq!(image.width(), size);
        }
    }

    #[test]
    fn test_two_sizes_output() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("icons");
        let config = BatchConfig::new(&dir, [16, 32]);

        let mut out = Vec::<u8>::new();
        run(&X_LOGO, &config, &mut out).unwrap();

        assert_eq!(file_names(&dir), vec!["icon16.png", "icon32.png"]);
        for size in [16, 32] {
            let image = image::open(config.icon_path(size)).unwrap();
            assert_eq!((image.width(), image.height()), (size, size));
        }

        let stdout = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        let expected = vec![
            created_line(&dir.join("icon16.png")),
            created_line(&dir.join("icon32.png")),
            "All icons generated successfully!".to_string(),
        ];
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_block_logo_set() {
        let temp = tempfile::tempdir().unwrap();
        let config = BatchConfig::new(temp.path().join("icons"), ICON_SIZES);

        let mut out = Vec::<u8>::new();
        let written = run(&X_LOGO_BLOCK, &config, &mut out).unwrap();
        assert_eq!(written.len(), 4);

        for size in ICON_SIZES {
            let image = image::open(config.icon_path(size)).unwrap();
            assert_eq!(image.color(), image::ColorType::Rgb8);
            assert_eq!((image.width(), image.height()), (size, size));
        }
        let stdout = String::from_utf8(out).unwrap();
        assert_eq!(stdout.lines().last(), Some(X_LOGO_BLOCK.summary));
    }

    #[test]
    fn test_existing_directory_is_fine() {
        let temp = tempfile::tempdir().unwrap();
        let config = BatchConfig::new(temp.path(), [16]);
        let written = render_sizes(render_logo_a, &config, &mut std::io::sink()).unwrap();
        assert_eq!(written, vec![temp.path().join("icon16.png")]);
    }

    #[test]
    fn test_failure_keeps_earlier_files() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("icons");
        // A directory squatting on the 32px file name makes that write fail
        fs::create_dir_all(dir.join("icon32.png")).unwrap();
        let config = BatchConfig::new(&dir, ICON_SIZES);

        let mut out = Vec::<u8>::new();
        let err = run(&GAMEPAD, &config, &mut out).unwrap_err();

        match err {
            BatchError::Save { path, .. } => assert_eq!(path, dir.join("icon32.png")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(dir.join("icon16.png").is_file());
        assert!(!dir.join("icon48.png").exists());
        assert!(!dir.join("icon128.png").exists());

        let stdout = String::from_utf8(out).unwrap();
        assert_eq!(stdout.lines().count(), 1);
    }

    #[test]
    fn test_output_dir_blocked_by_file() {
        let temp = tempfile::tempdir().unwrap();
        let blocker = temp.path().join("icons");
        fs::write(&blocker, b"not a directory").unwrap();

        let config = BatchConfig::new(&blocker, [16]);
        let err = run(&GAMEPAD, &config, &mut std::io::sink()).unwrap_err();
        assert!(matches!(err, BatchError::CreateDir { .. }));
    }
}
