use serde::Serialize;
use std::io::Read;
use transmitters::{Color, EdgeId, GenerateOptions, Graph, GraphStats};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Graph(transmitters::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<transmitters::Error> for CliError {
    fn from(value: transmitters::Error) -> Self {
        Self::Graph(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Generate,
    Color,
    Stats,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    out: Option<String>,
    pretty: bool,
    verbose: bool,
    generate: GenerateOptions,
}

#[derive(Serialize)]
struct NodeOut<'a> {
    name: &'a str,
    x: f64,
    y: f64,
    radius: f64,
    angle: f64,
    degree: usize,
    color: Option<Color>,
}

#[derive(Serialize)]
struct EdgeOut<'a> {
    id: EdgeId,
    start: &'a str,
    end: &'a str,
}

#[derive(Serialize)]
struct ColorOut<'a> {
    colors_used: usize,
    assignment_order: Vec<&'a str>,
    nodes: Vec<NodeOut<'a>>,
    edges: Vec<EdgeOut<'a>>,
}

#[derive(Serialize)]
struct StatsOut<'a> {
    #[serde(flatten)]
    stats: GraphStats,
    source: &'a str,
}

fn usage() -> &'static str {
    "transmitters-cli\n\
\n\
USAGE:\n\
  transmitters-cli [generate] [--city-radius <r>] [--count <n>] [--radius <r>] [--seed <n>] [--out <path>]\n\
  transmitters-cli color [--pretty] [<path>|-]\n\
  transmitters-cli stats [--pretty] [<path>|-]\n\
\n\
OPTIONS:\n\
  --verbose      log debug events to stderr (RUST_LOG overrides)\n\
  -h, --help     print this message\n\
\n\
NOTES:\n\
  - generate prints a GXL document to stdout by default; use --out to write a file.\n\
  - color and stats read GXL; if <path> is omitted or '-', input is read from stdin.\n\
  - color prints a JSON report with every node's color and the number of colors used.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "generate" => args.command = Command::Generate,
            "color" => args.command = Command::Color,
            "stats" => args.command = Command::Stats,
            "--pretty" => args.pretty = true,
            "--verbose" | "-v" => args.verbose = true,
            "--city-radius" => {
                let Some(r) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.generate.city_radius = parse_non_negative(r)?;
            }
            "--count" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.generate.transmitter_count =
                    n.parse::<usize>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--radius" => {
                let Some(r) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.generate.transmitter_radius = parse_non_negative(r)?;
            }
            "--seed" => {
                let Some(seed) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.generate.random_seed =
                    Some(seed.parse::<u64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if args.command == Command::Generate && args.input.is_some() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

// The library trusts its geometry inputs; the CLI is where they get checked.
fn parse_non_negative(raw: &str) -> Result<f64, CliError> {
    let v = raw.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
    if !(v.is_finite() && v >= 0.0) {
        return Err(CliError::Usage(usage()));
    }
    Ok(v)
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose {
        "transmitters=debug,transmitters_cli=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_graph(input: Option<&str>) -> Result<Graph, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(transmitters::from_gxl_str(&buf)?)
        }
        Some(path) => Ok(transmitters::read_gxl(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn color_report<'a>(graph: &'a Graph, coloring: &transmitters::Coloring) -> ColorOut<'a> {
    ColorOut {
        colors_used: coloring.colors_used,
        assignment_order: coloring
            .assignment_order
            .iter()
            .map(|&id| graph.node(id).name.as_str())
            .collect(),
        nodes: graph
            .nodes()
            .iter()
            .map(|n| {
                let p = n.cartesian();
                NodeOut {
                    name: &n.name,
                    x: p.x,
                    y: p.y,
                    radius: n.position.radius,
                    angle: n.position.angle,
                    degree: n.degree,
                    color: n.color,
                }
            })
            .collect(),
        edges: graph
            .edges()
            .iter()
            .map(|e| EdgeOut {
                id: e.id,
                start: &graph.node(e.start).name,
                end: &graph.node(e.end).name,
            })
            .collect(),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Generate => {
            let graph = transmitters::generate_with_options(&args.generate);
            tracing::info!(
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                "generated graph"
            );
            match args.out.as_deref() {
                None | Some("-") => print!("{}", transmitters::to_gxl_string(&graph)),
                Some(path) => transmitters::write_gxl(&graph, path)?,
            }
            Ok(())
        }
        Command::Color => {
            let mut graph = read_graph(args.input.as_deref())?;
            let coloring = transmitters::color_greedy(&mut graph);
            write_json(&color_report(&graph, &coloring), args.pretty)
        }
        Command::Stats => {
            let graph = read_graph(args.input.as_deref())?;
            let out = StatsOut {
                stats: graph.stats(),
                source: args.input.as_deref().unwrap_or("-"),
            };
            write_json(&out, args.pretty)
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_tracing(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("transmitters-cli")
            .chain(args.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn generate_is_the_default_command() {
        let args = parse_args(&argv(&["--count", "5", "--seed", "3"])).expect("args");
        assert_eq!(args.command, Command::Generate);
        assert_eq!(args.generate.transmitter_count, 5);
        assert_eq!(args.generate.random_seed, Some(3));
        assert_eq!(args.generate.city_radius, 100.0);
    }

    #[test]
    fn negative_radius_is_a_usage_error() {
        assert!(matches!(
            parse_args(&argv(&["generate", "--radius", "-1"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            parse_args(&argv(&["generate", "--city-radius", "nan"])),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn color_takes_a_path_or_stdin() {
        let args = parse_args(&argv(&["color", "--pretty", "city.gxl"])).expect("args");
        assert_eq!(args.command, Command::Color);
        assert_eq!(args.input.as_deref(), Some("city.gxl"));
        assert!(args.pretty);

        let args = parse_args(&argv(&["color", "-"])).expect("args");
        assert_eq!(args.input.as_deref(), Some("-"));

        assert!(matches!(
            parse_args(&argv(&["color", "a.gxl", "b.gxl"])),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn generate_rejects_positional_input() {
        assert!(matches!(
            parse_args(&argv(&["generate", "city.gxl"])),
            Err(CliError::Usage(_))
        ));
    }
}
