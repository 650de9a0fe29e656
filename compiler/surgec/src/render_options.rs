//! Output-format and rendering flags (spec.md §6.4), and the hand-rolled
//! argument parser that fills them in — grounded on the teacher's
//! `oric/src/main.rs` (`match` over `std::env::args()`, no `clap`).

use core_diagnostic::{ColorMode, JsonOpts, PathMode, PrettyOpts, SarifRunMeta};

/// Which renderer `surgec` should use for a given invocation.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
    Sarif,
}

/// Everything the CLI surface (spec.md §6.4) can configure for one run.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub path_mode: PathMode,
    /// `0` means "no cap".
    pub diagnostics_cap: usize,
    pub include_notes: bool,
    pub include_fixes: bool,
    pub include_previews: bool,
    /// JSON-only: embed semantic-analysis results alongside the
    /// diagnostics. The core has nothing to contribute for this flag
    /// (sema is out of scope, spec.md §1); it is parsed and threaded
    /// through for forward-compatibility with the downstream driver.
    pub include_semantics: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            format: OutputFormat::default(),
            path_mode: PathMode::default(),
            diagnostics_cap: 0,
            include_notes: true,
            include_fixes: true,
            include_previews: false,
            include_semantics: false,
        }
    }
}

impl RenderOptions {
    pub fn pretty_opts(&self, is_tty: bool) -> PrettyOpts {
        PrettyOpts {
            color: ColorMode::Auto,
            is_tty,
            context: 2,
            path_mode: self.path_mode,
            width: 0,
            show_notes: self.include_notes,
            show_fixes: self.include_fixes,
            show_preview: self.include_previews,
        }
    }

    pub fn json_opts(&self) -> JsonOpts {
        JsonOpts {
            include_notes: self.include_notes,
            include_fixes: self.include_fixes,
            include_positions: true,
            include_previews: self.include_previews,
            path_mode: self.path_mode,
        }
    }

    pub fn sarif_meta(&self, args: &[String]) -> SarifRunMeta {
        SarifRunMeta::new("surgec", env!("CARGO_PKG_VERSION"))
            .with_args(args.to_vec())
            .with_path_mode(self.path_mode)
    }
}

/// Error produced by [`parse_args`]: an unrecognized flag or a flag
/// missing its value. Maps to CLI exit code `2` (spec.md §6.4).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ArgError(pub String);

/// Parse `--format=`, `--path-mode=`, `--max-diagnostics=`, `--notes`,
/// `--fixes`, `--previews`, `--semantics` out of `args`. Unrecognized
/// flags are an error; non-flag tokens are returned as "positional"
/// leftovers for the caller to interpret (e.g. a scenario name).
pub fn parse_args(args: &[String]) -> Result<(RenderOptions, Vec<String>), ArgError> {
    let mut opts = RenderOptions {
        include_notes: false,
        include_fixes: false,
        ..RenderOptions::default()
    };
    let mut positional = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--format=") {
            opts.format = match value {
                "pretty" => OutputFormat::Pretty,
                "json" => OutputFormat::Json,
                "sarif" => OutputFormat::Sarif,
                other => return Err(ArgError(format!("unknown --format value: {other}"))),
            };
        } else if let Some(value) = arg.strip_prefix("--path-mode=") {
            opts.path_mode = match value {
                "auto" => PathMode::Auto,
                "absolute" => PathMode::Absolute,
                "relative" => PathMode::Relative,
                "basename" => PathMode::Basename,
                other => return Err(ArgError(format!("unknown --path-mode value: {other}"))),
            };
        } else if let Some(value) = arg.strip_prefix("--max-diagnostics=") {
            opts.diagnostics_cap = value.parse::<usize>().map_err(|_| ArgError(format!("invalid --max-diagnostics value: {value}")))?;
        } else if arg == "--notes" {
            opts.include_notes = true;
        } else if arg == "--fixes" {
            opts.include_fixes = true;
        } else if arg == "--previews" {
            opts.include_previews = true;
        } else if arg == "--semantics" {
            opts.include_semantics = true;
        } else if arg.starts_with("--") {
            return Err(ArgError(format!("unknown flag: {arg}")));
        } else {
            positional.push(arg.clone());
        }
    }

    Ok((opts, positional))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_are_pretty_and_auto_path_mode() {
        let (opts, positional) = parse_args(&args(&["scenario"])).unwrap();
        assert_eq!(opts.format, OutputFormat::Pretty);
        assert_eq!(opts.path_mode, PathMode::Auto);
        assert_eq!(positional, vec!["scenario".to_string()]);
    }

    #[test]
    fn flags_are_parsed() {
        let (opts, _) = parse_args(&args(&["--format=json", "--path-mode=basename", "--max-diagnostics=10", "--notes", "--fixes"])).unwrap();
        assert_eq!(opts.format, OutputFormat::Json);
        assert_eq!(opts.path_mode, PathMode::Basename);
        assert_eq!(opts.diagnostics_cap, 10);
        assert!(opts.include_notes);
        assert!(opts.include_fixes);
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let result = parse_args(&args(&["--bogus"]));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_format_value_is_an_error() {
        let result = parse_args(&args(&["--format=xml"]));
        assert!(result.is_err());
    }

    #[test]
    fn path_mode_threads_through_json_and_sarif_opts() {
        let opts = RenderOptions {
            path_mode: PathMode::Basename,
            ..RenderOptions::default()
        };
        assert_eq!(opts.json_opts().path_mode, PathMode::Basename);
        assert_eq!(opts.sarif_meta(&[]).path_mode, PathMode::Basename);
    }
}
