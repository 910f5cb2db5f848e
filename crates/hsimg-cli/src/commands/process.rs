//! Pair-by-pair processing loop.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runs the driver over `files`, taken as consecutive INPUT/OUTPUT pairs.
///
/// Pairs are processed sequentially and independently: a failure is
/// reported to stderr and the pair is skipped, but the remaining pairs are
/// still attempted and the run as a whole still succeeds. Only an
/// incomplete pair (odd argument count) is a hard error, raised before any
/// pair is touched.
pub fn run(files: &[PathBuf]) -> Result<()> {
    if files.len() % 2 != 0 {
        bail!("Usage: hsimg INPUT1 OUTPUT1 [INPUT2 OUTPUT2 ...] (file arguments must form pairs)");
    }

    let mut success = 0usize;
    let mut failed = 0usize;

    for pair in files.chunks_exact(2) {
        let (input, output) = (&pair[0], &pair[1]);
        match process_pair(input, output) {
            Ok(()) => success += 1,
            Err(e) => {
                failed += 1;
                eprintln!("Error: {:#}", e);
            }
        }
    }

    info!(success, failed, "processing complete");
    Ok(())
}

fn process_pair(input: &Path, output: &Path) -> Result<()> {
    debug!(input = %input.display(), output = %output.display(), "processing pair");

    let image = super::load_image(input)?;
    let mut mono = hsimg_ops::to_monochrome(&image);
    super::save_image(output, &mono)?;

    // Dynamic-range report for the pair. The normalized pixels are not
    // persisted; the output file keeps the pre-normalization monochrome
    // data.
    hsimg_ops::normalize(&mut mono);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn output_holds_monochrome_not_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), "in.hsdec", "HSDEC 2 1\n10 20 30\n200 100 50\n");
        let output = dir.path().join("out.hsdec");

        run(&[input, output.clone()]).unwrap();

        let saved = hsimg_io::read(&output).unwrap();
        let grey: Vec<i32> = saved.pixels().iter().map(|p| p.red).collect();
        assert!(saved.pixels().iter().all(|p| p.is_grey()));
        // Luma values, not the 0/255 the in-place normalization produces.
        assert_eq!(grey, vec![18, 124]);
    }

    #[test]
    fn failing_pair_does_not_stop_later_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.hsdec");
        let bad_out = dir.path().join("bad_out.hsdec");
        let input = write_input(dir.path(), "in.hsdec", "HSDEC 1 1\n5 5 5\n");
        let output = dir.path().join("out.hsdec");

        run(&[missing, bad_out.clone(), input, output.clone()]).unwrap();

        assert!(output.exists());
        assert!(!bad_out.exists());
    }

    #[test]
    fn odd_argument_count_is_a_usage_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), "in.hsdec", "HSDEC 1 1\n1 2 3\n");

        let err = run(&[input]).unwrap_err();
        assert!(err.to_string().contains("Usage"));
    }
}
