use anyhow::{Context, bail};
use lens_config::LensConfig;
use lens_core::TestSuite;
use lens_parser::{is_test_file, parse_file};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExtractArgs;
use crate::output::output;

/// Handle `lens extract`.
///
/// Every file is attempted; suites of the files that parsed are printed
/// before failing on the ones that did not.
pub fn handle(args: &ExtractArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = LensConfig::load().context("failed to load lens configuration")?;
    let options = super::parse_options(&config, flags);

    let mut suites: Vec<TestSuite> = Vec::new();
    let mut failed = 0usize;
    for path in &args.files {
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        if !is_test_file(&name) {
            tracing::debug!(file = %path.display(), "file name does not follow *Test.php");
        }

        match parse_file(path, &options) {
            Ok(found) => suites.extend(found),
            Err(error) => {
                tracing::warn!(file = %path.display(), %error, "failed to extract tests");
                failed += 1;
            }
        }
    }

    output(&suites, flags.format)?;

    if failed > 0 {
        bail!("{failed} of {} files could not be parsed", args.files.len());
    }
    Ok(())
}
