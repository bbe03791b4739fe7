//! Rendering a classified [`Store`] for the terminal.

use argsift_core::error::Result;
use argsift_core::store::Store;
use crossterm::style::Stylize;
use indexmap::IndexMap;
use itertools::Itertools;
use log::warn;

use crate::cli_args::Format;

/// What to print and how.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub format: Format,
    pub explain: bool,
    /// Bold section headings; only used for text output on a terminal.
    pub styled: bool,
}

/// Renders the whole store, or just the values of `queries` when any are given.
///
/// # Errors
///
/// Returns an error if YAML serialization fails.
pub fn render(store: &Store, queries: &[String], options: Options) -> Result<String> {
    if !queries.is_empty() {
        return render_queries(store, queries, options);
    }

    match options.format {
        Format::Yaml if options.explain => Ok(serde_yaml::to_string(store)?),
        Format::Yaml => Ok(serde_yaml::to_string(&store.clone().without_trace())?),
        Format::Text => Ok(render_text(store, options)),
    }
}

fn heading(title: &str, styled: bool) -> String {
    if styled {
        format!("{}", title.bold())
    } else {
        title.to_string()
    }
}

/// One heading line followed by its tab-indented entries.
fn section(title: &str, entries: impl Iterator<Item = String>, styled: bool) -> String {
    std::iter::once(heading(title, styled))
        .chain(entries.map(|entry| format!("\t{entry}")))
        .map(|line| format!("{line}\n"))
        .collect()
}

fn render_text(store: &Store, options: Options) -> String {
    let flags = store
        .flags()
        .iter()
        .unique()
        .map(|flag| match store.flag_count(flag) {
            1 => flag.to_string(),
            count => format!("{flag} (x{count})"),
        });

    let params = store.params().map(|(name, values)| {
        format!(
            "{name} = {}",
            values.iter().map(|value| format!("\"{value}\"")).join(", ")
        )
    });

    let positionals = store
        .positionals()
        .enumerate()
        .map(|(index, positional)| format!("[{index}] {positional}"));

    let mut output = [
        section("Flags:", flags, options.styled),
        section("Params:", params, options.styled),
        section("Positionals:", positionals, options.styled),
    ]
    .concat();

    if options.explain {
        let tokens = store
            .trace()
            .iter()
            .map(|classified| format!("{:?} -> {}", classified.token, classified.kind));
        output.push_str(&section("Tokens:", tokens, options.styled));
    }

    output
}

fn render_queries(store: &Store, queries: &[String], options: Options) -> Result<String> {
    let mut found: IndexMap<&str, Vec<&str>> = IndexMap::new();

    for query in queries {
        let group = store.param_group(query);
        if group.is_empty() {
            warn!("No value recorded for parameter `{}`", group.name());
        }
        found.insert(group.name(), group.iter().collect());
    }

    match options.format {
        Format::Yaml => Ok(serde_yaml::to_string(&found)?),
        Format::Text => Ok(found
            .values()
            .flatten()
            .map(|value| format!("{value}\n"))
            .collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argsift_core::classifier::Parser;
    use argsift_core::mode::Mode;

    fn sample() -> Store {
        Parser::new()
            .register("j")
            .parse(["prog", "-v", "-v", "-j", "4", "--out=a b", "input"])
    }

    #[test]
    fn test_render_text_sections() {
        let output = render(&sample(), &[], Options::default()).unwrap();

        assert_eq!(
            output,
            "Flags:\n\tv (x2)\nParams:\n\tj = \"4\"\n\tout = \"a b\"\nPositionals:\n\t[0] input\n"
        );
    }

    #[test]
    fn test_render_text_explain() {
        let options = Options {
            explain: true,
            ..Options::default()
        };
        let output = render(&sample(), &[], options).unwrap();

        assert!(output.contains("Tokens:\n"));
        assert!(output.contains("\t\"-j\" -> param name\n"));
        assert!(output.contains("\t\"4\" -> param value\n"));
        assert!(output.contains("\t\"--out=a b\" -> inline param\n"));
    }

    #[test]
    fn test_render_yaml_omits_trace_unless_explaining() {
        let options = Options {
            format: Format::Yaml,
            ..Options::default()
        };
        let output = render(&sample(), &[], options).unwrap();
        assert!(output.contains("positionals:"));
        assert!(!output.contains("trace:"));

        let options = Options {
            format: Format::Yaml,
            explain: true,
            ..Options::default()
        };
        let output = render(&sample(), &[], options).unwrap();
        assert!(output.contains("trace:"));
        assert!(output.contains("kind: param_value"));
    }

    #[test]
    fn test_render_queries_text() {
        let store = Parser::new().parse(["prog", "--out=a", "--out=b", "--level=3"]);
        let queries = vec!["--out".to_string(), "missing".to_string()];
        let output = render(&store, &queries, Options::default()).unwrap();

        assert_eq!(output, "a\nb\n");
    }

    #[test]
    fn test_render_queries_yaml() {
        let store = Parser::new().parse(["prog", "--out=a", "--level=fast"]);
        let queries = vec!["level".to_string(), "missing".to_string()];
        let options = Options {
            format: Format::Yaml,
            ..Options::default()
        };
        let output = render(&store, &queries, options).unwrap();

        assert_eq!(output, "level:\n- fast\nmissing: []\n");
    }

    #[test]
    fn test_render_text_empty_store() {
        let store = Parser::new().parse(["prog"]);
        let output = render(&store, &[], Options::default()).unwrap();

        assert_eq!(output, "Flags:\nParams:\nPositionals:\n");
    }

    #[test]
    fn test_render_text_flag_cluster_param() {
        let store = Parser::new()
            .register("f")
            .mode(Mode::default().with_single_dash_is_multiflag(true))
            .parse(["prog", "-xvf", "out.tar"]);
        let options = Options {
            explain: true,
            ..Options::default()
        };
        let output = render(&store, &[], options).unwrap();

        assert!(output.starts_with("Flags:\n\tx\n\tv\nParams:\n\tf = \"out.tar\"\n"));
        assert!(output.contains("\t\"-xvf\" -> flag cluster + param name\n"));
        assert!(output.contains("\t\"out.tar\" -> param value\n"));
    }

    #[test]
    fn test_heading_unstyled() {
        assert_eq!(heading("Flags:", false), "Flags:");
        assert!(heading("Flags:", true).contains("Flags:"));
    }
}
