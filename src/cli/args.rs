//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Print Cloud Vision labels and dominant colors for an image
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The image you'd like to label.
    pub image_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_image() {
        let args = Args::try_parse_from(["vision-label", "cat.jpg"]).unwrap();
        assert_eq!(args.image_file, PathBuf::from("cat.jpg"));
    }

    #[test]
    fn test_image_is_required() {
        assert!(Args::try_parse_from(["vision-label"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Args::try_parse_from(["vision-label", "--max", "3", "cat.jpg"]).is_err());
    }
}
