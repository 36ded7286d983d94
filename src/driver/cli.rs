//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// ノートブックとHTMLを2つの Drive フォルダにアップロードするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "gdrive-upload", version)]
#[command(about = "Upload two notebooks and two HTML files to two Google Drive folders", long_about = None)]
pub struct Args {
    /// Drive folder ID for notebook 1 + html
    #[arg(long)]
    pub folder1: String,

    /// Drive folder ID for notebook 2 + html
    #[arg(long)]
    pub folder2: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_both_folders() {
        let args = Args::parse_from(["gdrive-upload", "--folder1", "AAA", "--folder2", "BBB"]);
        assert_eq!(args.folder1, "AAA");
        assert_eq!(args.folder2, "BBB");
    }

    #[test]
    fn test_args_equals_syntax() {
        let args = Args::parse_from(["gdrive-upload", "--folder2=BBB", "--folder1=AAA"]);
        assert_eq!(args.folder1, "AAA");
        assert_eq!(args.folder2, "BBB");
    }

    #[test]
    fn test_args_missing_folder2() {
        let result = Args::try_parse_from(["gdrive-upload", "--folder1", "AAA"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_missing_both() {
        assert!(Args::try_parse_from(["gdrive-upload"]).is_err());
    }

    #[test]
    fn test_args_rejects_unknown_flag() {
        let result = Args::try_parse_from([
            "gdrive-upload",
            "--folder1",
            "AAA",
            "--folder2",
            "BBB",
            "--dry-run",
        ]);
        assert!(result.is_err());
    }
}
