use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dataset")]
#[command(about = "Builds 2-D PNG image/mask datasets from paired NIfTI volumes.")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Subcommand.
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run_program(&mut self) -> anyhow::Result<()> {
        match self.command {
            Commands::Nii2png(ref mut v) => v.run(),
            Commands::Jpg2png(ref mut v) => v.run(),
            Commands::Verify(ref mut v) => v.run(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Slice every case's segmentation and T1-post volumes into PNG mask/image pairs.
    Nii2png(crate::subcmd_impls::nii2png::Nii2png),
    /// Re-encode a JPEG image/mask dataset as PNG.
    Jpg2png(crate::subcmd_impls::jpg2png::Jpg2png),
    /// Check that every image has a same-named, same-sized mask and vice versa.
    Verify(crate::subcmd_impls::verify::Verify),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn subcommands_parse() {
        for argv in [
            vec!["dataset", "nii2png", "-i", "in", "-o", "out", "--size", "256"],
            vec!["dataset", "jpg2png", "--flat", "--clean"],
            vec!["dataset", "verify", "-o", "out"],
        ] {
            assert!(Cli::try_parse_from(argv).is_ok());
        }
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["dataset", "nii2npy"]).is_err());
    }
}
