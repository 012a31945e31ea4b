use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use doubly_lexical_ordering::{doubly_lexical_ordering, is_doubly_lexical, DoublyLexicalOrdering};
use graph_tools::drawing::circular;
use graph_tools::io::{read_lines, Decoded, Format};
use graph_tools::{
    complete_bipartite_graph, complete_graph, cycle_graph, filter, is_complete, is_complete_bipartite, is_cycle,
    is_path, path_graph, StaticGraph,
};
use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Parser)]
#[command(name = "graph-tools", version, about = "Doubly lexical orderings and graph6 tools")]
struct Cli {
    #[arg(long, global = true)]
    log_level: Option<Level>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute a doubly lexical ordering of every graph in a file.
    Order {
        #[arg(long)]
        input: PathBuf,
        /// Detected from the prefix of each line if not given.
        #[arg(long)]
        format: Option<Format>,
        /// Sort rows and columns non-decreasing.
        #[arg(long)]
        invert: bool,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Convert every graph in a file to another format.
    Convert {
        #[arg(long)]
        input: PathBuf,
        /// Detected from the prefix of each line if not given.
        #[arg(long)]
        from: Option<Format>,
        #[arg(long)]
        to: Format,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Write a graph of a common family.
    Generate {
        #[arg(value_enum)]
        family: Family,
        n: usize,
        /// The size of the second part of a complete bipartite graph.
        #[arg(long, default_value_t = 0)]
        m: usize,
        #[arg(long, default_value = "graph6")]
        format: Format,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Keep the graphs of a file which have a property.
    Filter {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        format: Format,
        #[arg(long, value_enum)]
        property: Property,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Draw a graph of a file with its vertices on a circle.
    Draw {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        format: Format,
        /// The line of the graph, starting at 0.
        #[arg(long, default_value_t = 0)]
        index: usize,
        #[arg(long)]
        output: PathBuf,
        #[arg(long, default_value_t = 400)]
        width: u32,
        #[arg(long, default_value_t = 400)]
        height: u32,
    },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Family {
    Complete,
    Path,
    Cycle,
    Bipartite,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Property {
    Complete,
    Cycle,
    Path,
    CompleteBipartite,
    DoublyLexical,
}

impl Property {
    fn holds(self, decoded: &Decoded) -> bool {
        let graph = |property: fn(&StaticGraph) -> bool| match decoded {
            Decoded::Graph(graph) => property(graph),
            Decoded::Digraph(_) => false,
        };
        match self {
            Property::Complete => graph(is_complete),
            Property::Cycle => graph(is_cycle),
            Property::Path => graph(is_path),
            Property::CompleteBipartite => graph(is_complete_bipartite),
            Property::DoublyLexical => is_doubly_lexical(decoded.matrix(), false),
        }
    }
}

fn create_output(path: Option<&Path>) -> Result<Box<dyn Write>, Box<dyn Error>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn decode_lines(input: &Path, format: Option<Format>) -> Result<Vec<Decoded>, Box<dyn Error>> {
    let mut graphs = vec![];
    for line in read_lines(input)? {
        let format = format.unwrap_or_else(|| Format::detect(&line));
        graphs.push(Decoded::decode(format, &line)?);
    }
    Ok(graphs)
}

fn write_ordering(out: &mut dyn Write, ordering: &DoublyLexicalOrdering) -> io::Result<()> {
    let join = |indices: &[usize]| indices.iter().map(usize::to_string).collect::<Vec<_>>().join(" ");
    writeln!(out, "rows: {}", join(ordering.rows()))?;
    writeln!(out, "cols: {}", join(ordering.cols()))?;
    for row in ordering.matrix() {
        let row: String = row.iter().map(|&x| if x != 0 { '1' } else { '0' }).collect();
        writeln!(out, "{row}")?;
    }
    Ok(())
}

fn generate(family: Family, n: usize, m: usize) -> Result<StaticGraph, Box<dyn Error>> {
    Ok(match family {
        Family::Complete => complete_graph(n),
        Family::Path => path_graph(n),
        Family::Cycle if n < 3 => return Err(format!("a cycle needs at least 3 vertices, got {n}").into()),
        Family::Cycle => cycle_graph(n),
        Family::Bipartite => complete_bipartite_graph(n, m),
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(level) = cli.log_level {
        let subscriber = FmtSubscriber::builder().with_max_level(level).with_span_events(FmtSpan::CLOSE).finish();

        subscriber.init();
    };

    match cli.command {
        Command::Order { input, format, invert, output } => {
            let graphs = decode_lines(&input, format)?;
            let mut out = create_output(output.as_deref())?;
            for (i, graph) in graphs.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                let ordering = doubly_lexical_ordering(graph.matrix(), invert);
                write_ordering(&mut out, &ordering)?;
            }
            out.flush()?;
            info!(graphs = graphs.len(), "ordered");
        }
        Command::Convert { input, from, to, output } => {
            let graphs = decode_lines(&input, from)?;
            let mut out = create_output(output.as_deref())?;
            for graph in &graphs {
                writeln!(out, "{}", graph.encode(to)?)?;
            }
            out.flush()?;
            info!(graphs = graphs.len(), "converted");
        }
        Command::Generate { family, n, m, format, output } => {
            let graph = Decoded::Graph(generate(family, n, m)?);
            let mut out = create_output(output.as_deref())?;
            writeln!(out, "{}", graph.encode(format)?)?;
            out.flush()?;
        }
        Command::Filter { input, format, property, output } => {
            let kept = filter(format, read_lines(&input)?, |decoded| property.holds(decoded))?;
            let mut out = create_output(output.as_deref())?;
            for graph in &kept {
                writeln!(out, "{}", graph.encode(format)?)?;
            }
            out.flush()?;
        }
        Command::Draw { input, format, index, output, width, height } => {
            let lines = read_lines(&input)?;
            let line = lines.get(index).ok_or_else(|| format!("{} has no line {index}", input.display()))?;
            let svg = match Decoded::decode(format, line)? {
                Decoded::Graph(graph) => circular(&graph, width, height),
                Decoded::Digraph(digraph) => circular(&digraph, width, height),
            };
            let mut out = BufWriter::new(File::create(output)?);
            writeln!(out, "{svg}")?;
            out.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn arguments() {
        Cli::command().debug_assert();

        let cli = Cli::parse_from(["graph-tools", "order", "--input", "graphs.g6", "--invert"]);
        assert!(matches!(cli.command, Command::Order { format: None, invert: true, .. }));

        let cli = Cli::parse_from(["graph-tools", "--log-level", "debug", "generate", "bipartite", "2", "--m", "3"]);
        assert_eq!(cli.log_level, Some(Level::DEBUG));
        assert!(matches!(cli.command, Command::Generate { family: Family::Bipartite, n: 2, m: 3, format: Format::Graph6, .. }));

        let cli = Cli::parse_from(["graph-tools", "filter", "--input", "a", "--format", "sparse6", "--property", "complete-bipartite"]);
        assert!(matches!(cli.command, Command::Filter { format: Format::Sparse6, property: Property::CompleteBipartite, .. }));
    }

    #[test]
    fn ordering_output() {
        let ordering = doubly_lexical_ordering(&[[0_u8, 1], [0, 0]], false);
        let mut out = vec![];
        write_ordering(&mut out, &ordering).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "rows: 0 1\ncols: 1 0\n10\n00\n");
    }

    #[test]
    fn properties() {
        let cycle = Decoded::decode(Format::Graph6, "Cr").unwrap();
        assert!(Property::Cycle.holds(&cycle));
        assert!(Property::CompleteBipartite.holds(&cycle));
        assert!(!Property::Path.holds(&cycle));
        assert!(!Property::Complete.holds(&cycle));

        let digraph = Decoded::decode(Format::Digraph6, "&DI?AO?").unwrap();
        assert!(!Property::Cycle.holds(&digraph));
        assert_eq!(Property::DoublyLexical.holds(&digraph), is_doubly_lexical(digraph.matrix(), false));
    }

    #[test]
    fn generated_families() {
        assert_eq!(Decoded::Graph(generate(Family::Complete, 4, 0).unwrap()).encode(Format::Graph6).unwrap(), "C~");
        assert!(generate(Family::Cycle, 2, 0).is_err());
        assert!(is_cycle(&generate(Family::Cycle, 5, 0).unwrap()));
    }
}
