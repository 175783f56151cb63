//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::browse::{emit, SortOrder, DEFAULT_EXCERPT_BYTES};
use crate::core::model::{ItemError, ResultItem, ResultSet};
use crate::core::render::{OutputFormat, RenderConfig};
use crate::source::load::load;
use crate::view::state::ViewState;

/// glossa - browse, filter and search glossary/lexicon JSON documents.
#[derive(Parser, Debug)]
#[command(name = "glossa")]
#[command(
    author,
    version,
    about,
    long_about = r#"glossa loads a lexicon JSON document in any of its common shapes
(a bare array, an object holding `terms`/`entries`/`items`, or an object keyed
by id), normalizes every record and emits a unified, machine-readable result
model for every command.

Each command prints a ResultSet in the selected format (default: jsonl).

Output formats:
- jsonl: one JSON object per line (best for piping into tools)
- json: a single JSON array
- md: human-friendly Markdown
- raw: excerpts only (unstable; intended for debugging)

Examples:
    glossa --data lexicon.json list --section Civic
    glossa search "oath"
    glossa show '#term/citizens-oath'
    glossa sort-key 6 6c 32a2 1.1
"#
)]
pub struct Cli {
    /// Lexicon JSON document to load ("-" for stdin).
    #[arg(
        long,
        global = true,
        env = "GLOSSA_DATA",
        default_value = "lexicon.json",
        value_name = "FILE",
        long_help = "Lexicon JSON document to load.\n\n\
Use \"-\" to read the document from stdin. Falls back to $GLOSSA_DATA, then\n\
lexicon.json in the current directory."
    )]
    pub data: PathBuf,

    /// Output format (jsonl/json/md/raw).
    #[arg(
        long,
        global = true,
        env = "GLOSSA_FORMAT",
        default_value = "jsonl",
        value_name = "FORMAT",
        long_help = "Select the output format for ResultSet.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)\n\
- raw\n\n\
Tip: Prefer jsonl when you want stable, line-oriented output for piping."
    )]
    pub format: String,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (no diagnostics on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Suppress diagnostics on stderr. Results are still printed to stdout."
    )]
    pub quiet: bool,

    /// Verbose mode (repeat for more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        long_help = "Enable more detailed diagnostics on stderr. Repeat (-vv) for trace output.\n\n\
RUST_LOG overrides this setting when present."
    )]
    pub verbose: u8,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL output with indentation for human readability.\n\n\
This is useful when manually inspecting results. Has no effect on md/raw formats."
    )]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List entries, optionally filtered.
    #[command(
        long_about = "List entries in canonical order (explicit `order`, then natural id\n\
order) or alphabetically by term. All given filters must match.\n\n\
Examples:\n\
  glossa list\n\
  glossa list --query river --section Earth\n\
  glossa list --letter j --sort term\n"
    )]
    List {
        /// Case-insensitive substring filter.
        #[arg(
            long,
            value_name = "TEXT",
            default_value = "",
            long_help = "Keep entries whose term, definitions, section, category or tags\n\
contain TEXT (case-insensitive, whitespace folded). See --deep."
        )]
        query: String,

        /// Also match --query against ids, part of speech, scope and subentries.
        #[arg(long)]
        deep: bool,

        /// Keep entries in this section.
        #[arg(long, value_name = "SECTION", default_value = "")]
        section: String,

        /// Keep entries carrying this tag.
        #[arg(long, value_name = "TAG", default_value = "")]
        tag: String,

        /// Keep entries whose term starts with this letter.
        #[arg(long, value_name = "LETTER")]
        letter: Option<char>,

        /// Listing order (key/term).
        #[arg(long, value_name = "ORDER", default_value = "key")]
        sort: SortOrder,

        /// Maximum bytes per excerpt.
        #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_EXCERPT_BYTES)]
        max_bytes: usize,
    },

    /// Ranked search over ids, terms and definitions.
    #[command(
        long_about = "Score every entry against QUERY and emit the best matches, highest\n\
score first (at most 30).\n\n\
Scoring: exact id 50, exact term 40, term contains 20, definition contains 5.\n\n\
Examples:\n\
  glossa search justice\n\
  glossa search 32a2 --format md\n"
    )]
    Search {
        /// Search text.
        #[arg(value_name = "QUERY")]
        query: String,

        /// Maximum bytes per excerpt.
        #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_EXCERPT_BYTES)]
        max_bytes: usize,
    },

    /// Show one entry and its cross-references.
    #[command(
        long_about = "Show the entry selected by an id or a viewer fragment, followed by the\n\
entries it cross-references.\n\n\
Accepted targets: 32a2, #32a2, #term/citizens-oath, #preface.\n\n\
Examples:\n\
  glossa show 6c\n\
  glossa show '#term/justice'\n"
    )]
    Show {
        /// Entry id or fragment.
        #[arg(value_name = "TARGET")]
        target: String,
    },

    /// Table of contents grouped by section.
    Toc {
        /// Limit the contents to entries matching TEXT.
        #[arg(long, value_name = "TEXT", default_value = "")]
        query: String,

        /// Also match --query against ids, part of speech, scope and subentries.
        #[arg(long)]
        deep: bool,
    },

    /// Distinct sections, tags and initial letters.
    Facets,

    /// Show a static page (preface, rules, afterword, citation).
    Page {
        /// Page name.
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Document provenance, counts and data-quality warnings.
    Info,

    /// Print the natural sort key of each id (no document needed).
    #[command(
        long_about = "Print the sort key of each id, in sorted order. Useful for checking how\n\
an id will be placed.\n\n\
Examples:\n\
  glossa sort-key 6 6c 32a2 1.1 A-1\n"
    )]
    SortKey {
        /// Ids to key.
        #[arg(value_name = "ID", num_args = 1..)]
        ids: Vec<String>,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    // Sort keys need no document
    if let Commands::SortKey { ids } = &cli.command {
        return crate::commands::info::run_sort_keys(ids, render_config);
    }

    let loaded = match load(&cli.data) {
        Ok(loaded) => loaded,
        Err(err) => {
            let mut result_set = ResultSet::new();
            result_set.push(ResultItem::error(ItemError::new(
                err.code(),
                err.to_string(),
            )));
            emit(&result_set, render_config)?;
            return Err(err.into());
        }
    };
    let lexicon = &loaded.lexicon;

    match cli.command {
        Commands::List {
            query,
            deep,
            section,
            tag,
            letter,
            sort,
            max_bytes,
        } => {
            let state = ViewState {
                query,
                deep,
                section,
                tag,
                letter,
                ..ViewState::new()
            };
            crate::commands::browse::run_list(lexicon, &state, sort, max_bytes, render_config)
        }

        Commands::Search { query, max_bytes } => {
            let state = ViewState {
                query,
                ..ViewState::new()
            };
            crate::commands::search::run_search(lexicon, &state, max_bytes, render_config)
        }

        Commands::Show { target } => {
            crate::commands::show::run_show(lexicon, &target, render_config)
        }

        Commands::Toc { query, deep } => {
            let state = ViewState {
                query,
                deep,
                ..ViewState::new()
            };
            crate::commands::browse::run_toc(lexicon, &state, render_config)
        }

        Commands::Facets => crate::commands::browse::run_facets(lexicon, render_config),

        Commands::Page { name } => crate::commands::show::run_page(lexicon, &name, render_config),

        Commands::Info => crate::commands::info::run_info(&loaded, render_config),

        Commands::SortKey { ids } => crate::commands::info::run_sort_keys(&ids, render_config),
    }
}
