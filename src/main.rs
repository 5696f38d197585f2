use anyhow::{Context, Result};
use clap::Parser;
use clustering_coefficient::cluster::local_coefficients;
use clustering_coefficient::report::{write_graph_header, NodeStats, RunReport};
use clustering_coefficient::{load_graph, viz, CoefficientEngine, Config, IndexKind};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "calc-cc",
    about = "Average clustering coefficient of an undirected graph, computed on multiple threads"
)]
struct Cli {
    /// Edge list file: whitespace-separated pairs of node indices
    file: PathBuf,

    /// Number of worker threads (0 = use all available cores)
    threads: usize,

    /// Adjacency index: dense, sorted or auto
    #[clap(long, default_value = "auto")]
    index: IndexKind,

    /// Largest node count for which the auto index builds a dense matrix
    #[clap(long, default_value = "8192")]
    dense_limit: usize,

    /// Drop repeated edges before computing coefficients
    #[clap(long)]
    dedup: bool,

    /// Print the adjacency matrix
    #[clap(long)]
    print_matrix: bool,

    /// Print each node's neighbor list
    #[clap(long)]
    print_lists: bool,

    /// Also compute per-node coefficient statistics
    #[clap(long)]
    node_stats: bool,

    /// Write the run report as JSON to this path
    #[clap(long)]
    json: Option<PathBuf>,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::info!("Using {} worker threads", threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;

    let config = Config::new(threads)
        .with_index(args.index)
        .with_dense_node_limit(args.dense_limit)
        .with_dedup(args.dedup);

    // 1. Load graph
    let graph = load_graph(&args.file, &config)
        .with_context(|| format!("failed to load graph from {}", args.file.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_graph_header(&graph, &mut out)?;

    if args.print_matrix {
        viz::write_matrix(&graph, &mut out)?;
    }
    if args.print_lists {
        viz::write_lists(&graph, &mut out)?;
    }

    // 2. Parallel average
    let engine = CoefficientEngine::from_config(&config)?;
    let run = engine.run(&graph)?;

    // 3. Report
    let mut report = RunReport::new(&graph, &run).with_input(args.file.display().to_string());
    if args.node_stats {
        let coefficients = local_coefficients(&graph);
        report = report.with_node_stats(NodeStats::from_coefficients(&graph, &coefficients));
    }

    report.write_summary(&mut out)?;
    out.flush()?;

    if let Some(path) = &args.json {
        report
            .save_json(path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
    }

    Ok(())
}
